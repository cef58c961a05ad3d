//! Port layer - CPU-specific implementations
//!
//! Provides the HardFault trampoline, the kernel error hook, the platform
//! diagnostic sink and the terminal halt. Host builds exercise the core
//! through injected sinks and halts instead.

#[cfg(target_arch = "arm")]
pub mod cortex_m4;

#[cfg(target_arch = "arm")]
pub use cortex_m4::*;
