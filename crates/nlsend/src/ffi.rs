//! C ABI entry point.

use std::os::raw::c_int;

use super::error::Error;
use super::send::{flatten, send_from};

/// Send `len` bytes at `buf` to the kernel over netlink socket `fd`.
///
/// Returns the number of bytes sent, or `-errno` on failure. A null `buf`
/// or a zero `len` returns `-EINVAL` without touching the socket.
///
/// # Safety
///
/// When `buf` is non-null it must point to `len` readable bytes that stay
/// valid and unmodified until this function returns. No reference to them
/// is kept afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nlsend_send_from(fd: c_int, buf: *const u8, len: usize) -> isize {
    if buf.is_null() {
        return Error::InvalidArgument("null send buffer").raw_code();
    }
    if len == 0 {
        return Error::InvalidArgument("empty send buffer").raw_code();
    }
    // SAFETY: buf is non-null and the caller guarantees len readable bytes
    // for the duration of the call.
    let buf = unsafe { std::slice::from_raw_parts(buf, len) };
    flatten(send_from(fd, buf))
}
