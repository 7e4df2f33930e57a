use std::{cell::RefCell, ffi::CString};

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString) -> Self {
        LastErrorData { error_msg }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = RefCell::new(None));

/// Set last error information.
///
/// `error_msg` is turned into a CString from bytes, bytes must not include any nulls.
pub fn set_last_error<T: Into<Vec<u8>>>(error_msg: T) {
    let msg = CString::new(error_msg).unwrap_or_else(|_| {
        CString::new("Failed to create error message string!").unwrap_or_default()
    });

    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = Some(LastErrorData::new(msg));
    });
}

/// Clear any last error information set on the current thread.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = None;
    });
}
