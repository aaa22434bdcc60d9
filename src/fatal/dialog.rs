use std::{ffi::c_void, iter, ptr};

use super::sink::ErrorSink;

const MB_OK: u32 = 0x0;

#[link(name = "user32")]
unsafe extern "system" {
    fn MessageBoxW(hwnd: *mut c_void, text: *const u16, caption: *const u16, utype: u32) -> i32;
}

/// Blocking modal box titled "Error" with a single OK button.
pub struct DialogSink;

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(iter::once(0)).collect()
}

impl ErrorSink for DialogSink {
    fn report(&self, message: &str) {
        let text = wide(message);
        let caption = wide("Error");
        unsafe {
            MessageBoxW(ptr::null_mut(), text.as_ptr(), caption.as_ptr(), MB_OK);
        }
    }
}
