//! Kernel error notification
//!
//! The kernel calls in here when it detects an internal resource failure.
//! Each failure is reported on a single line and the system is stopped.

use crate::code::{ErrorCode, ObjectId, ObjectKind};
use crate::config::{CFG_LIBSPACE_KNOB, CFG_NAME_PLACEHOLDER};
use crate::fault::FaultLatch;
use crate::sink::{DiagnosticSink, Halt, NameResolver};

/// Maps kernel error codes to diagnostic lines
pub struct ErrorNotifier<R, S, H> {
    resolver: R,
    sink: S,
    halt: H,
}

impl<R, S, H> ErrorNotifier<R, S, H>
where
    R: NameResolver,
    S: DiagnosticSink,
    H: Halt,
{
    pub const fn new(resolver: R, sink: S, halt: H) -> Self {
        Self {
            resolver,
            sink,
            halt,
        }
    }

    /// Report the error and halt
    pub fn notify(&self, code: ErrorCode, id: ObjectId) -> ! {
        self.report(code, id);
        self.halt.halt()
    }

    /// Same as [`notify`](Self::notify) for a code straight off the kernel ABI
    pub fn notify_raw(&self, code: u32, id: ObjectId) -> ! {
        self.notify(ErrorCode::from(code), id)
    }

    /// Like [`notify`](Self::notify), but an error raised while `latch` is
    /// already entered halts without writing anything.
    pub fn notify_once(&self, latch: &FaultLatch, code: ErrorCode, id: ObjectId) -> ! {
        if !latch.try_enter() {
            self.halt.halt()
        }
        self.notify(code, id)
    }

    /// Emit the diagnostic line for `code` without halting
    pub fn report(&self, code: ErrorCode, id: ObjectId) {
        match code {
            ErrorCode::StackOverflow => self.sink.write_line(format_args!(
                "Stack overflow detected for thread. ID = {}. Name = '{}'.",
                id,
                self.resolve(code, id)
            )),
            ErrorCode::IsrQueueOverflow => self.sink.write_line(format_args!(
                "ISR Queue overflow detected when inserting object. ID = {}.",
                id
            )),
            ErrorCode::TimerQueueOverflow => self.sink.write_line(format_args!(
                "User Timer Callback Queue overflow detected for timer. ID = {}. Name = '{}'.",
                id,
                self.resolve(code, id)
            )),
            ErrorCode::ClibSpaceExhausted => self.sink.write_line(format_args!(
                "Standard C/C++ library libspace not available: increase {}. ID = {}.",
                CFG_LIBSPACE_KNOB, id
            )),
            ErrorCode::ClibMutexInitFailed => self.sink.write_line(format_args!(
                "Standard C/C++ library mutex initialization failed. ID = {}.",
                id
            )),
            ErrorCode::Unknown(_) => self.sink.write_line(format_args!("Unknown error.")),
        }
    }

    fn resolve(&self, code: ErrorCode, id: ObjectId) -> &str {
        let name = match code.object_kind() {
            ObjectKind::Thread => self.resolver.thread_name(id),
            ObjectKind::Timer => self.resolver.timer_name(id),
            ObjectKind::Object | ObjectKind::None => None,
        };
        name.unwrap_or(CFG_NAME_PLACEHOLDER)
    }
}
