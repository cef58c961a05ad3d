//! Hardware exception frame and stack selection
//!
//! On exception entry the processor pushes eight words onto whichever stack
//! was active (MSP or PSP) and loads LR with an EXC_RETURN value. Bit 2 of
//! that value tells which stack received the frame.

use core::fmt;

use crate::config::CFG_FRAME_WORDS;

/// Registers stacked by the processor on exception entry
///
/// Field order is the hardware layout and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(4))]
pub struct ExceptionFrame {
    pub r0: u32,
    pub r1: u32,
    pub r2: u32,
    pub r3: u32,
    pub r12: u32,
    /// Link register of the faulted context
    pub lr: u32,
    /// Program counter of the faulted context
    pub pc: u32,
    /// Program status register
    pub psr: u32,
}

const _: () = assert!(core::mem::size_of::<ExceptionFrame>() == CFG_FRAME_WORDS * 4);

/// Register names in stacking order
pub const FRAME_REGISTERS: [&str; CFG_FRAME_WORDS] =
    ["r0", "r1", "r2", "r3", "r12", "lr", "pc", "psr"];

impl ExceptionFrame {
    pub const fn from_words(words: [u32; CFG_FRAME_WORDS]) -> Self {
        Self {
            r0: words[0],
            r1: words[1],
            r2: words[2],
            r3: words[3],
            r12: words[4],
            lr: words[5],
            pc: words[6],
            psr: words[7],
        }
    }

    /// Read a frame from the stack.
    ///
    /// # Safety
    /// `base` must point at eight readable, word-aligned words.
    #[inline(always)]
    pub unsafe fn read(base: *const u32) -> Self {
        unsafe { core::ptr::read_volatile(base.cast::<ExceptionFrame>()) }
    }

    /// Words in stacking order
    pub const fn words(&self) -> [u32; CFG_FRAME_WORDS] {
        [
            self.r0, self.r1, self.r2, self.r3, self.r12, self.lr, self.pc, self.psr,
        ]
    }
}

#[cfg(target_arch = "arm")]
impl From<&cortex_m_rt::ExceptionFrame> for ExceptionFrame {
    fn from(ef: &cortex_m_rt::ExceptionFrame) -> Self {
        Self {
            r0: ef.r0(),
            r1: ef.r1(),
            r2: ef.r2(),
            r3: ef.r3(),
            r12: ef.r12(),
            lr: ef.lr(),
            pc: ef.pc(),
            psr: ef.xpsr(),
        }
    }
}

/// Which stack pointer was in use when the exception was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveStack {
    /// Main stack pointer
    Main,
    /// Process stack pointer
    Process,
}

impl fmt::Display for ActiveStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveStack::Main => f.write_str("MSP"),
            ActiveStack::Process => f.write_str("PSP"),
        }
    }
}

/// EXC_RETURN value found in LR at exception entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ExcReturn(u32);

impl ExcReturn {
    /// Set when returning to the process stack
    pub const SPSEL: u32 = 1 << 2;
    /// Set when returning to thread mode
    pub const MODE: u32 = 1 << 3;
    /// Clear when an extended (FPU) frame was stacked
    pub const FTYPE: u32 = 1 << 4;

    #[inline(always)]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn active_stack(self) -> ActiveStack {
        if self.0 & Self::SPSEL == 0 {
            ActiveStack::Main
        } else {
            ActiveStack::Process
        }
    }

    #[inline]
    pub const fn is_thread_mode(self) -> bool {
        self.0 & Self::MODE != 0
    }

    /// The integer frame is followed by stacked FPU state
    #[inline]
    pub const fn has_fpu_frame(self) -> bool {
        self.0 & Self::FTYPE == 0
    }
}

/// Processor state captured at the first instruction of the fault handler
#[derive(Debug, Clone, Copy)]
pub struct FaultContext {
    pub msp: *const u32,
    pub psp: *const u32,
    pub exc_return: ExcReturn,
}

impl FaultContext {
    pub const fn new(msp: *const u32, psp: *const u32, exc_return: u32) -> Self {
        Self {
            msp,
            psp,
            exc_return: ExcReturn::new(exc_return),
        }
    }

    #[inline]
    pub const fn active_stack(&self) -> ActiveStack {
        self.exc_return.active_stack()
    }

    /// Base of the exception frame
    #[inline]
    pub const fn frame_base(&self) -> *const u32 {
        match self.active_stack() {
            ActiveStack::Main => self.msp,
            ActiveStack::Process => self.psp,
        }
    }
}
