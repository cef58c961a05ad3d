//! CMSIS-RTX kernel binding

use core::ffi::{c_char, c_void, CStr};

use crate::code::ObjectId;
use crate::error::DiagResult;
use crate::registry::install_resolver;
use crate::sink::NameResolver;

extern "C" {
    fn osThreadGetName(thread_id: *mut c_void) -> *const c_char;
    fn osTimerGetName(timer_id: *mut c_void) -> *const c_char;
}

/// Kernel error callback, called by RTX on internal failures
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn osRtxErrorNotify(code: u32, object_id: *mut c_void) -> u32 {
    super::error_hook(code, ObjectId::from_ptr(object_id.cast_const()))
}

/// Names from the RTX object control blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct RtxNames;

/// # Safety
/// `ptr` must be null or point at a NUL-terminated string that lives for `'a`.
unsafe fn c_name<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

impl NameResolver for RtxNames {
    fn thread_name(&self, thread: ObjectId) -> Option<&str> {
        unsafe { c_name(osThreadGetName(thread.as_ptr())) }
    }

    fn timer_name(&self, timer: ObjectId) -> Option<&str> {
        unsafe { c_name(osTimerGetName(timer.as_ptr())) }
    }
}

/// Make the error hook resolve names through RTX
pub fn install_rtx_names() -> DiagResult<()> {
    static NAMES: RtxNames = RtxNames;
    install_resolver(&NAMES)?;
    crate::info!("thread and timer names resolved through RTX");
    Ok(())
}
