//! Kernel error codes and object identifiers
//!
//! The numeric values are fixed by the kernel's error hook ABI.

use core::fmt;

/// Raw code for a thread stack overflow
pub const RAW_STACK_OVERFLOW: u32 = 1;
/// Raw code for an ISR queue overflow
pub const RAW_ISR_QUEUE_OVERFLOW: u32 = 2;
/// Raw code for a timer callback queue overflow
pub const RAW_TIMER_QUEUE_OVERFLOW: u32 = 3;
/// Raw code for exhausted C library thread space
pub const RAW_CLIB_SPACE: u32 = 4;
/// Raw code for a failed C library mutex initialization
pub const RAW_CLIB_MUTEX: u32 = 5;

/// Failure kind reported by the kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Thread stack overflow; the id is a thread handle
    StackOverflow,
    /// ISR queue overflow; the id is the object being inserted
    IsrQueueOverflow,
    /// Timer callback queue overflow; the id is a timer handle
    TimerQueueOverflow,
    /// C library per-thread space not available
    ClibSpaceExhausted,
    /// C library mutex initialization failed
    ClibMutexInitFailed,
    /// Anything outside the known set, raw value kept
    Unknown(u32),
}

/// How the object id delivered with an error code is to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Thread handle, name resolvable
    Thread,
    /// Timer handle, name resolvable
    Timer,
    /// Opaque kernel object, printed as-is
    Object,
    /// Carries no meaning
    None,
}

impl ErrorCode {
    /// Raw ABI value of this code
    pub const fn raw(self) -> u32 {
        match self {
            ErrorCode::StackOverflow => RAW_STACK_OVERFLOW,
            ErrorCode::IsrQueueOverflow => RAW_ISR_QUEUE_OVERFLOW,
            ErrorCode::TimerQueueOverflow => RAW_TIMER_QUEUE_OVERFLOW,
            ErrorCode::ClibSpaceExhausted => RAW_CLIB_SPACE,
            ErrorCode::ClibMutexInitFailed => RAW_CLIB_MUTEX,
            ErrorCode::Unknown(raw) => raw,
        }
    }

    pub const fn object_kind(self) -> ObjectKind {
        match self {
            ErrorCode::StackOverflow => ObjectKind::Thread,
            ErrorCode::TimerQueueOverflow => ObjectKind::Timer,
            ErrorCode::IsrQueueOverflow => ObjectKind::Object,
            ErrorCode::ClibSpaceExhausted
            | ErrorCode::ClibMutexInitFailed
            | ErrorCode::Unknown(_) => ObjectKind::None,
        }
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, ErrorCode::Unknown(_))
    }
}

impl From<u32> for ErrorCode {
    fn from(raw: u32) -> Self {
        match raw {
            RAW_STACK_OVERFLOW => ErrorCode::StackOverflow,
            RAW_ISR_QUEUE_OVERFLOW => ErrorCode::IsrQueueOverflow,
            RAW_TIMER_QUEUE_OVERFLOW => ErrorCode::TimerQueueOverflow,
            RAW_CLIB_SPACE => ErrorCode::ClibSpaceExhausted,
            RAW_CLIB_MUTEX => ErrorCode::ClibMutexInitFailed,
            other => ErrorCode::Unknown(other),
        }
    }
}

/// Opaque 32-bit kernel object handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ObjectId(u32);

impl ObjectId {
    #[inline(always)]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Handle as passed by the kernel. Only the low 32 bits are kept.
    #[inline(always)]
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr as usize as u32)
    }

    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Handle back as a kernel pointer
    #[inline(always)]
    pub fn as_ptr<T>(self) -> *mut T {
        self.0 as usize as *mut T
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
