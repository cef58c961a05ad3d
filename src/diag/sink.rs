//! Collaborator interfaces
//!
//! The notifier and fault handler reach the kernel, the output channel and
//! the terminal halt only through these traits.

use core::fmt;

use crate::code::ObjectId;

/// Name lookup provided by the kernel
pub trait NameResolver {
    /// Display name of a thread, if the kernel knows one
    fn thread_name(&self, thread: ObjectId) -> Option<&str>;

    /// Display name of a timer, if the kernel knows one
    fn timer_name(&self, timer: ObjectId) -> Option<&str>;
}

/// Append-only text output usable from fault context
///
/// Implementations must not block, must not fail and must not allocate.
/// The line is handed over unformatted so it is never cut short; the line
/// terminator is the sink's responsibility.
pub trait DiagnosticSink {
    fn write_line(&self, line: fmt::Arguments<'_>);
}

/// Terminal behavior after diagnostics have been emitted
pub trait Halt {
    fn halt(&self) -> !;
}

impl<T: NameResolver + ?Sized> NameResolver for &T {
    #[inline]
    fn thread_name(&self, thread: ObjectId) -> Option<&str> {
        (**self).thread_name(thread)
    }

    #[inline]
    fn timer_name(&self, timer: ObjectId) -> Option<&str> {
        (**self).timer_name(timer)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    #[inline]
    fn write_line(&self, line: fmt::Arguments<'_>) {
        (**self).write_line(line)
    }
}

impl<T: Halt + ?Sized> Halt for &T {
    #[inline]
    fn halt(&self) -> ! {
        (**self).halt()
    }
}

/// Resolver for kernels without object names
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNames;

impl NameResolver for NoNames {
    fn thread_name(&self, _thread: ObjectId) -> Option<&str> {
        None
    }

    fn timer_name(&self, _timer: ObjectId) -> Option<&str> {
        None
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn write_line(&self, _line: fmt::Arguments<'_>) {}
}
