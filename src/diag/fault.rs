//! Hard fault handling
//!
//! A hard fault means the faulted instruction cannot be resumed safely, so
//! the handler reports what it can and stops.

use portable_atomic::{AtomicBool, Ordering};

use crate::dump::RegisterDumper;
use crate::frame::FaultContext;
use crate::sink::{DiagnosticSink, Halt};

/// Header written before the frame is dumped
pub const FAULT_HEADER: &str = "Hard fault.";

/// One-shot guard against reporting a fault raised by the reporter itself
pub struct FaultLatch {
    entered: AtomicBool,
}

impl FaultLatch {
    pub const fn new() -> Self {
        Self {
            entered: AtomicBool::new(false),
        }
    }

    /// True for the first caller only
    #[inline]
    pub fn try_enter(&self) -> bool {
        !self.entered.swap(true, Ordering::AcqRel)
    }

    #[inline]
    pub fn is_entered(&self) -> bool {
        self.entered.load(Ordering::Acquire)
    }
}

impl Default for FaultLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Hard fault reporter
pub struct FaultHandler<S, H> {
    sink: S,
    halt: H,
}

impl<S, H> FaultHandler<S, H>
where
    S: DiagnosticSink,
    H: Halt,
{
    pub const fn new(sink: S, halt: H) -> Self {
        Self { sink, halt }
    }

    /// Report the fault described by `ctx` and halt.
    ///
    /// # Safety
    /// `ctx` must hold the stack pointers captured on exception entry.
    pub unsafe fn handle(&self, ctx: FaultContext) -> ! {
        unsafe { self.report(&ctx) };
        self.halt.halt()
    }

    /// Like [`handle`](Self::handle), but a fault raised while `latch` is
    /// already entered halts without writing anything.
    ///
    /// # Safety
    /// Same as [`handle`](Self::handle).
    pub unsafe fn handle_once(&self, latch: &FaultLatch, ctx: FaultContext) -> ! {
        if !latch.try_enter() {
            self.halt.halt()
        }
        unsafe { self.handle(ctx) }
    }

    /// Emit the fault header and register dump without halting.
    ///
    /// # Safety
    /// Same as [`handle`](Self::handle).
    pub unsafe fn report(&self, ctx: &FaultContext) {
        let base = ctx.frame_base();

        self.sink.write_line(format_args!("{}", FAULT_HEADER));
        self.sink.write_line(format_args!(
            "Stack = {}. Frame = {:#010x}. EXC_RETURN = {:#010x}.",
            ctx.active_stack(),
            base as usize,
            ctx.exc_return.raw()
        ));

        unsafe { RegisterDumper::new(&self.sink).dump_at(base) };
    }
}
