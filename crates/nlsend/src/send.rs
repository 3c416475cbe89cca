//! The raw send primitive.
//!
//! Every entry point here performs exactly one transmission attempt to the
//! kernel (pid 0, no multicast groups, flags 0) on a descriptor the caller
//! owns. Short sends are returned as-is and nothing is retried.

use std::os::unix::io::RawFd;

use bytes::Bytes;
use tokio::runtime::{Handle, RuntimeFlavor};

use super::addr::KernelAddr;
use super::error::{Error, Result};
use super::transmit::{SysTransmit, Transmit};

/// Flags passed to every `sendto`.
pub const SEND_FLAGS: i32 = 0;

/// Send `buf` to the kernel over the netlink socket `fd`.
///
/// The descriptor is borrowed and never closed. `fd` is not validated:
/// a closed, invalid or non-netlink descriptor comes back as
/// [`Error::Transmit`] with the kernel's errno.
///
/// Returns the number of bytes sent, which may be less than `buf.len()`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `buf` is empty; the socket is not
/// touched in that case.
///
/// # Example
///
/// ```ignore
/// use std::os::unix::io::AsRawFd;
/// use nlsend::{NlMsgHdr, send_from};
///
/// let hdr = NlMsgHdr::new(18, 0x301); // RTM_GETLINK, NLM_F_REQUEST | NLM_F_DUMP
/// let sent = send_from(socket.as_raw_fd(), hdr.as_bytes())?;
/// assert_eq!(sent, 16);
/// ```
pub fn send_from(fd: RawFd, buf: &[u8]) -> Result<usize> {
    send_from_with(&SysTransmit, fd, buf)
}

/// Like [`send_from`], over an arbitrary [`Transmit`] implementation.
pub fn send_from_with<T: Transmit>(transmit: &T, fd: RawFd, buf: &[u8]) -> Result<usize> {
    if buf.is_empty() {
        return Err(Error::InvalidArgument("empty send buffer"));
    }

    let dest = KernelAddr::new();
    let result = transmit.send_to(fd, buf, SEND_FLAGS, &dest);

    match &result {
        Ok(sent) => tracing::trace!(fd, len = buf.len(), sent, "netlink send"),
        Err(e) => tracing::trace!(fd, len = buf.len(), error = %e, "netlink send failed"),
    }

    Ok(result?)
}

/// Like [`send_from`], flattened to an integer.
///
/// Returns the byte count on success, or `-errno` on failure (`-EINVAL`
/// for an empty buffer).
pub fn send_from_raw(fd: RawFd, buf: &[u8]) -> isize {
    flatten(send_from(fd, buf))
}

/// Like [`send_from`], without stalling other tasks on the current worker.
///
/// Inside a multi-thread tokio runtime the call runs under
/// [`tokio::task::block_in_place`], so the runtime hands this worker's
/// queued tasks to another thread until the kernel call returns. With a
/// current-thread runtime, or no runtime at all, it is a plain
/// [`send_from`]. The buffer is borrowed either way.
pub fn send_from_in_place(fd: RawFd, buf: &[u8]) -> Result<usize> {
    send_from_in_place_with(&SysTransmit, fd, buf)
}

/// Like [`send_from_in_place`], over an arbitrary [`Transmit`] implementation.
pub fn send_from_in_place_with<T: Transmit>(
    transmit: &T,
    fd: RawFd,
    buf: &[u8],
) -> Result<usize> {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(|| send_from_with(transmit, fd, buf))
        }
        _ => send_from_with(transmit, fd, buf),
    }
}

/// Like [`send_from`], run on tokio's blocking pool.
///
/// The calling task is suspended until the kernel call returns. `buf` is
/// reference counted, so the payload is not copied.
///
/// # Errors
///
/// Same as [`send_from`], plus [`Error::Join`] if the blocking task panics
/// or the runtime shuts down underneath it.
pub async fn send_from_blocking(fd: RawFd, buf: Bytes) -> Result<usize> {
    send_from_blocking_with(SysTransmit, fd, buf).await
}

/// Like [`send_from_blocking`], over an arbitrary [`Transmit`] implementation.
///
/// The transmit is moved onto the blocking pool together with the buffer.
pub async fn send_from_blocking_with<T>(transmit: T, fd: RawFd, buf: Bytes) -> Result<usize>
where
    T: Transmit + Send + 'static,
{
    if buf.is_empty() {
        return Err(Error::InvalidArgument("empty send buffer"));
    }
    tokio::task::spawn_blocking(move || send_from_with(&transmit, fd, &buf)).await?
}

pub(crate) fn flatten(result: Result<usize>) -> isize {
    match result {
        Ok(sent) => sent as isize,
        Err(e) => e.raw_code(),
    }
}
