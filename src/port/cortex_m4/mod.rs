//! Cortex-M4 port implementation
//!
//! Owns the `HardFault` vector and the kernel's error hook symbol.

use core::arch::naked_asm;

use crate::code::{ErrorCode, ObjectId};
use crate::fault::{FaultHandler, FaultLatch};
use crate::frame::FaultContext;
use crate::notify::ErrorNotifier;
use crate::registry::InstalledResolver;
use crate::sink::Halt;

mod sink;
pub use sink::*;

#[cfg(feature = "rtx")]
mod rtx;
#[cfg(feature = "rtx")]
pub use rtx::*;

/// Shared by both entry points so a fault raised while reporting stays silent
static DIAG_LATCH: FaultLatch = FaultLatch::new();

/// Masks interrupts and spins forever
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinHalt;

impl Halt for SpinHalt {
    #[inline(never)]
    fn halt(&self) -> ! {
        cortex_m::interrupt::disable();
        loop {
            cortex_m::asm::nop();
        }
    }
}

/// Terminal halt used by every fail-stop path
pub fn halt() -> ! {
    SpinHalt.halt()
}

/// HardFault exception handler
///
/// Captures MSP, PSP and EXC_RETURN before any prologue can run, then
/// branches to [`hard_fault_entry`]. LR still holds EXC_RETURN here.
#[no_mangle]
#[unsafe(naked)]
pub unsafe extern "C" fn HardFault() -> ! {
    naked_asm!(
        "mrs r0, msp",
        "mrs r1, psp",
        "mov r2, lr",
        "b {entry}",
        entry = sym hard_fault_entry,
    );
}

#[inline(never)]
unsafe extern "C" fn hard_fault_entry(msp: *const u32, psp: *const u32, exc_return: u32) -> ! {
    let ctx = FaultContext::new(msp, psp, exc_return);
    let handler = FaultHandler::new(platform_sink(), SpinHalt);
    unsafe { handler.handle_once(&DIAG_LATCH, ctx) }
}

/// Report a kernel error through the installed resolver and halt
pub fn error_hook(code: u32, id: ObjectId) -> ! {
    crate::trace!("kernel error hook, code {=u32}", code);
    ErrorNotifier::new(InstalledResolver, platform_sink(), SpinHalt)
        .notify_once(&DIAG_LATCH, ErrorCode::from(code), id)
}
