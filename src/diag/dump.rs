//! Exception frame register dump

use crate::frame::{ExceptionFrame, FRAME_REGISTERS};
use crate::sink::DiagnosticSink;

/// Header line preceding the register lines
pub const DUMP_HEADER: &str = "Registers dump:";

/// Writes the stacked registers of a faulted context
pub struct RegisterDumper<S> {
    sink: S,
}

impl<S: DiagnosticSink> RegisterDumper<S> {
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Header plus one line per register, in stacking order
    pub fn dump(&self, frame: &ExceptionFrame) {
        self.sink.write_line(format_args!("{}", DUMP_HEADER));

        for (name, value) in FRAME_REGISTERS.iter().zip(frame.words()) {
            self.sink
                .write_line(format_args!("\t {:<3} = {:#010x}", name, value));
        }
    }

    /// Dump the frame stacked at `frame_base`.
    ///
    /// # Safety
    /// `frame_base` must point at a complete exception frame.
    pub unsafe fn dump_at(&self, frame_base: *const u32) {
        let frame = unsafe { ExceptionFrame::read(frame_base) };
        self.dump(&frame);
    }
}
