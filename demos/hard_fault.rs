//! Hard Fault Example - register dump of a faulting read on Cortex-M4
//!
//! Run under a debugger with RTT (defmt) or a semihosting-capable debugger and watch
//! the stacked registers of the faulting instruction.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use faultdiag::{install_resolver, NameResolver, ObjectId};

// ============ Names ============

/// Thread names known to this board image
struct BoardNames;

impl NameResolver for BoardNames {
    fn thread_name(&self, thread: ObjectId) -> Option<&str> {
        match thread.raw() {
            0x2000_0100 => Some("worker"),
            _ => None,
        }
    }

    fn timer_name(&self, _timer: ObjectId) -> Option<&str> {
        None
    }
}

static NAMES: BoardNames = BoardNames;

// ============ Fault ============

/// Read from the reserved region above the system control space
fn bad_read() -> u32 {
    unsafe { core::ptr::read_volatile(0xFFFF_FFF0 as *const u32) }
}

// ============ Main ============

#[entry]
fn main() -> ! {
    install_resolver(&NAMES).expect("resolver install failed");

    faultdiag::info!("Triggering hard fault");
    let value = bad_read();

    // Never reached: HardFault halts
    faultdiag::error!("read returned {=u32}", value);
    loop { cortex_m::asm::nop(); }
}
