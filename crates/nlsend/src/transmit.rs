//! The layer that actually hands bytes to the kernel.

use std::io;
use std::os::unix::io::RawFd;

use super::addr::KernelAddr;

/// One `sendto`-shaped transmission attempt.
///
/// [`SysTransmit`] is the real system call. Other implementations exist so
/// callers can observe exactly what would be handed to the kernel.
pub trait Transmit {
    /// Transmit `buf` on `fd` to `dest`, once.
    ///
    /// Returns the number of bytes the kernel accepted, which may be less
    /// than `buf.len()`.
    fn send_to(&self, fd: RawFd, buf: &[u8], flags: i32, dest: &KernelAddr) -> io::Result<usize>;
}

impl<T: Transmit + ?Sized> Transmit for &T {
    fn send_to(&self, fd: RawFd, buf: &[u8], flags: i32, dest: &KernelAddr) -> io::Result<usize> {
        (**self).send_to(fd, buf, flags, dest)
    }
}

/// `libc::sendto`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysTransmit;

impl Transmit for SysTransmit {
    fn send_to(&self, fd: RawFd, buf: &[u8], flags: i32, dest: &KernelAddr) -> io::Result<usize> {
        // SAFETY: buf is a live slice for the whole call and its length is
        // passed alongside the pointer. dest points at a sockaddr_nl that
        // outlives the call and socklen matches its size. An invalid fd is
        // reported by the kernel as EBADF/ENOTSOCK, not undefined behavior.
        let ret = unsafe {
            libc::sendto(
                fd,
                buf.as_ptr() as *const libc::c_void,
                buf.len(),
                flags,
                dest.as_sockaddr_ptr(),
                dest.socklen(),
            )
        };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(ret as usize)
    }
}
