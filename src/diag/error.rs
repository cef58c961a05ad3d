//! Error types for the diagnostic subsystem
//!
//! Only non-terminal conditions show up here. Kernel errors and hard faults
//! are never surfaced as values: they end in a halt.

/// Diagnostic subsystem error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum DiagError {
    // ============ Registry errors ============
    /// A name resolver has already been installed
    AlreadyInstalled = 1001,
}

/// Result type alias for diagnostic operations
pub type DiagResult<T> = Result<T, DiagError>;
