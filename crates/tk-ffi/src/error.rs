use std::cell::RefCell;
use std::ffi::CString;

use tk_core::TileError;

use crate::types::TKStatus;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Store an error message for later retrieval via `tk_last_error`.
pub fn set_last_error(msg: String) {
    log::debug!("ffi error: {msg}");
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Record a core error and map it to its status code.
pub fn report(err: TileError) -> TKStatus {
    let status = TKStatus::from(&err);
    set_last_error(err.to_string());
    status
}

/// Take the last error message, leaving `None` in its place.
pub fn take_last_error() -> Option<CString> {
    LAST_ERROR.with(|e| e.borrow_mut().take())
}
