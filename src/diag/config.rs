//! Compile-time configuration for the diagnostic subsystem
//!
//! These constants fix message fragments and the frame size.

/// Placeholder printed when a thread or timer name cannot be resolved
pub const CFG_NAME_PLACEHOLDER: &str = "undefined";

/// Kernel configuration knob that sizes the per-thread C library space
pub const CFG_LIBSPACE_KNOB: &str = "OS_THREAD_LIBSPACE_NUM";

/// Number of words in the hardware exception frame
pub const CFG_FRAME_WORDS: usize = 8;
