//! Platform diagnostic sinks
//!
//! `semihosting` wins over `defmt` when both features are enabled.

#[allow(unused_imports)]
use core::fmt;

#[allow(unused_imports)]
use crate::sink::{DiagnosticSink, NullSink};

/// Host stderr through ARM semihosting
///
/// The host stream is opened on the first line and reused for the rest of
/// the report. Without a debugger attached the semihosting call itself faults.
#[cfg(feature = "semihosting")]
#[derive(Default)]
pub struct SemihostingSink {
    stderr: core::cell::RefCell<Option<cortex_m_semihosting::hio::HostStream>>,
}

#[cfg(feature = "semihosting")]
impl DiagnosticSink for SemihostingSink {
    fn write_line(&self, line: fmt::Arguments<'_>) {
        use core::fmt::Write;

        let mut slot = self.stderr.borrow_mut();
        if slot.is_none() {
            *slot = cortex_m_semihosting::hio::hstderr().ok();
        }
        if let Some(stderr) = slot.as_mut() {
            let _ = stderr.write_fmt(line);
            let _ = stderr.write_all(b"\n");
        }
    }
}

/// One defmt error record per line
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtSink;

#[cfg(feature = "defmt")]
impl DiagnosticSink for DefmtSink {
    fn write_line(&self, line: fmt::Arguments<'_>) {
        defmt::error!("{}", defmt::Display2Format(&line));
    }
}

#[cfg(feature = "semihosting")]
pub type PlatformSink = SemihostingSink;

#[cfg(all(feature = "defmt", not(feature = "semihosting")))]
pub type PlatformSink = DefmtSink;

#[cfg(not(any(feature = "defmt", feature = "semihosting")))]
pub type PlatformSink = NullSink;

/// Fresh sink for one report
#[inline(always)]
pub fn platform_sink() -> PlatformSink {
    PlatformSink::default()
}
