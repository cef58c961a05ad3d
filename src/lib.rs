//! Fail-stop fault diagnostics for RTOS applications on ARM Cortex-M
//!
//! Two entry points share one policy, report then halt:
//! - Kernel error hook: stack/queue overflow and C library failures
//! - HardFault handler: stacked register dump of the faulted context

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

// ============ Critical Section ============

#[cfg(target_arch = "arm")]
mod cs_impl {
    use cortex_m::interrupt;
    use cortex_m::register::primask;
    use critical_section::{set_impl, Impl, RawRestoreState};

    struct SingleCoreCriticalSection;
    set_impl!(SingleCoreCriticalSection);

    unsafe impl Impl for SingleCoreCriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            let was_active = primask::read().is_active();
            interrupt::disable();
            was_active
        }

        unsafe fn release(was_active: RawRestoreState) {
            if was_active {
                unsafe { interrupt::enable() }
            }
        }
    }
}

// ============ Modules ============

pub mod log;
mod lang_items;

pub mod diag;
pub mod port;

// ============ Re-exports ============

pub use diag::code;
pub use diag::code::{ErrorCode, ObjectId, ObjectKind};
pub use diag::config;
pub use diag::config::*;
pub use diag::dump;
pub use diag::dump::RegisterDumper;
pub use diag::error;
pub use diag::error::{DiagError, DiagResult};
pub use diag::fault;
pub use diag::fault::{FaultHandler, FaultLatch};
pub use diag::frame;
pub use diag::frame::{ActiveStack, ExcReturn, ExceptionFrame, FaultContext};
pub use diag::notify;
pub use diag::notify::ErrorNotifier;
pub use diag::registry;
pub use diag::registry::install_resolver;
pub use diag::sink;
pub use diag::sink::{DiagnosticSink, Halt, NameResolver};

#[cfg(feature = "pac")]
pub use stm32_metapac as pac;
