mod error;
mod types;

pub use error::*;
pub use types::*;

use std::ffi::CString;
use std::os::raw::c_char;
use std::slice;

use tk_core::cpu::{conv, matmul};
use tk_core::TileConfig;

/// Execute a closure that returns a `TKStatus`, catching any panics
/// and converting them into `TKStatus::ErrorInternal`.
fn catch_panic<F: FnOnce() -> TKStatus + std::panic::UnwindSafe>(f: F) -> TKStatus {
    match std::panic::catch_unwind(f) {
        Ok(status) => status,
        Err(_) => {
            set_last_error("internal panic".to_string());
            TKStatus::ErrorInternal
        }
    }
}

/// Element count of an `n x n` i32 buffer, or `None` if it cannot be addressed.
fn square_len(n: usize) -> Option<usize> {
    n.checked_mul(n)
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<i32>())
}

/// Tiled `C += A * B` over `n x n` row-major `i32` matrices.
///
/// `c` is accumulated into; zero it first for a fresh product.
///
/// # Safety
///
/// `a` and `b` must point to `n * n` readable values and `c` to `n * n`
/// writable values. `c` must not overlap `a` or `b`.
#[no_mangle]
pub unsafe extern "C" fn tk_multiply_i32(
    a: *const i32,
    b: *const i32,
    c: *mut i32,
    n: usize,
    tile_size: usize,
) -> TKStatus {
    catch_panic(|| {
        if a.is_null() || b.is_null() || c.is_null() {
            set_last_error("null argument".to_string());
            return TKStatus::ErrorInvalidArgument;
        }
        if let Err(e) = TileConfig::new(n, tile_size, 1).validate_matmul() {
            return report(e);
        }
        let len = match square_len(n) {
            Some(len) => len,
            None => {
                set_last_error(format!("dimension {} is too large", n));
                return TKStatus::ErrorInvalidDimension;
            }
        };

        let (a, b, c) = unsafe {
            (
                slice::from_raw_parts(a, len),
                slice::from_raw_parts(b, len),
                slice::from_raw_parts_mut(c, len),
            )
        };
        matmul::tiled_matmul(a, b, c, n, tile_size);
        TKStatus::Ok
    })
}

/// Tiled zero-padded correlation of an `n x n` image with a
/// `kernel_size x kernel_size` kernel, overwriting every output cell.
///
/// # Safety
///
/// `image` must point to `n * n` readable values, `kernel` to
/// `kernel_size * kernel_size` readable values and `output` to `n * n`
/// writable values. `output` must not overlap `image` or `kernel`.
#[no_mangle]
pub unsafe extern "C" fn tk_convolve_i32(
    image: *const i32,
    kernel: *const i32,
    output: *mut i32,
    n: usize,
    kernel_size: usize,
    tile_size: usize,
) -> TKStatus {
    catch_panic(|| {
        if image.is_null() || kernel.is_null() || output.is_null() {
            set_last_error("null argument".to_string());
            return TKStatus::ErrorInvalidArgument;
        }
        if let Err(e) = TileConfig::new(n, tile_size, kernel_size).validate() {
            return report(e);
        }
        let (len, kernel_len) = match (square_len(n), square_len(kernel_size)) {
            (Some(len), Some(kernel_len)) => (len, kernel_len),
            _ => {
                set_last_error(format!(
                    "dimension {} or kernel size {} is too large",
                    n, kernel_size
                ));
                return TKStatus::ErrorInvalidDimension;
            }
        };

        let (image, kernel, output) = unsafe {
            (
                slice::from_raw_parts(image, len),
                slice::from_raw_parts(kernel, kernel_len),
                slice::from_raw_parts_mut(output, len),
            )
        };
        conv::tiled_correlate(image, kernel, output, n, kernel_size, tile_size);
        TKStatus::Ok
    })
}

/// Retrieve the last error message.
///
/// Returns a pointer to a C string describing the most recent error on this
/// thread, or null if no error has occurred. The caller must free the
/// returned string with `tk_free_string`.
#[no_mangle]
pub extern "C" fn tk_last_error() -> *const c_char {
    match error::take_last_error() {
        Some(e) => e.into_raw(),
        None => std::ptr::null(),
    }
}

/// Free a string previously returned by `tk_last_error`.
///
/// # Safety
///
/// `s` must be null or a pointer obtained from `tk_last_error` that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn tk_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn last_error() -> Option<String> {
        let p = tk_last_error();
        if p.is_null() {
            return None;
        }
        let msg = unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned();
        unsafe { tk_free_string(p as *mut c_char) };
        Some(msg)
    }

    #[test]
    fn test_multiply_all_ones() {
        let a = vec![1i32; 16];
        let b = vec![1i32; 16];
        let mut c = vec![0i32; 16];
        let status = unsafe { tk_multiply_i32(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), 4, 2) };
        assert_eq!(status, TKStatus::Ok);
        assert_eq!(c, vec![4; 16]);
    }

    #[test]
    fn test_multiply_null_argument() {
        let a = vec![1i32; 4];
        let status = unsafe {
            tk_multiply_i32(a.as_ptr(), std::ptr::null(), std::ptr::null_mut(), 2, 1)
        };
        assert_eq!(status, TKStatus::ErrorInvalidArgument);
        assert_eq!(last_error().as_deref(), Some("null argument"));
        assert!(last_error().is_none());
    }

    #[test]
    fn test_multiply_zero_tile() {
        let a = vec![1i32; 4];
        let mut c = vec![0i32; 4];
        let status = unsafe { tk_multiply_i32(a.as_ptr(), a.as_ptr(), c.as_mut_ptr(), 2, 0) };
        assert_eq!(status, TKStatus::ErrorInvalidArgument);
        assert_eq!(last_error().as_deref(), Some("tile size must be at least 1"));
        assert_eq!(c, vec![0; 4]);
    }

    #[test]
    fn test_huge_tile_size_is_valid() {
        let a = vec![1i32; 4];
        let mut c = vec![0i32; 4];
        let status =
            unsafe { tk_multiply_i32(a.as_ptr(), a.as_ptr(), c.as_mut_ptr(), 2, usize::MAX) };
        assert_eq!(status, TKStatus::Ok);
        assert_eq!(c, vec![2; 4]);

        let kernel = vec![3i32];
        let mut out = vec![0i32; 4];
        let status = unsafe {
            tk_convolve_i32(a.as_ptr(), kernel.as_ptr(), out.as_mut_ptr(), 2, 1, usize::MAX)
        };
        assert_eq!(status, TKStatus::Ok);
        assert_eq!(out, vec![3; 4]);
    }

    #[test]
    fn test_convolve_sharpen() {
        let image = vec![1i32; 9];
        let kernel = vec![0i32, -1, 0, -1, 5, -1, 0, -1, 0];
        let mut out = vec![0i32; 9];
        let status = unsafe {
            tk_convolve_i32(image.as_ptr(), kernel.as_ptr(), out.as_mut_ptr(), 3, 3, 2)
        };
        assert_eq!(status, TKStatus::Ok);
        assert_eq!(out, vec![3, 2, 3, 2, 1, 2, 3, 2, 3]);
    }

    #[test]
    fn test_convolve_even_kernel() {
        let image = vec![1i32; 9];
        let kernel = vec![1i32; 4];
        let mut out = vec![7i32; 9];
        let status = unsafe {
            tk_convolve_i32(image.as_ptr(), kernel.as_ptr(), out.as_mut_ptr(), 3, 2, 2)
        };
        assert_eq!(status, TKStatus::ErrorInvalidDimension);
        assert_eq!(
            last_error().as_deref(),
            Some("kernel dimension must be odd, got 2")
        );
        assert_eq!(out, vec![7; 9]);
    }

    #[test]
    fn test_free_null_string() {
        unsafe { tk_free_string(std::ptr::null_mut()) };
    }
}
