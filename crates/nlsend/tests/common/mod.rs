//! Common test utilities for integration tests.
//!
//! Provides a bound `NETLINK_ROUTE` socket and a skip macro for sandboxes
//! that forbid netlink sockets.

use std::io;
use std::mem;
use std::os::unix::io::AsRawFd;

use netlink_sys::{Socket, protocols};
use nlsend::{NlMsgHdr, Result};

/// Open and bind a route socket, or `None` if the environment refuses.
///
/// The socket is blocking with a 2 second receive timeout so a missing
/// reply fails the test instead of hanging it.
pub fn route_socket() -> Option<Socket> {
    let mut socket = Socket::new(protocols::NETLINK_ROUTE).ok()?;
    socket.bind_auto().ok()?;
    set_recv_timeout(&socket, 2).ok()?;
    Some(socket)
}

fn set_recv_timeout(socket: &Socket, secs: libc::time_t) -> io::Result<()> {
    let tv = libc::timeval {
        tv_sec: secs,
        tv_usec: 0,
    };
    // SAFETY: tv is a valid timeval for the duration of the call and the
    // length matches its size.
    let ret = unsafe {
        libc::setsockopt(
            socket.as_raw_fd(),
            libc::SOL_SOCKET,
            libc::SO_RCVTIMEO,
            &tv as *const libc::timeval as *const libc::c_void,
            mem::size_of::<libc::timeval>() as libc::socklen_t,
        )
    };
    if ret < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Receive one datagram and return its first header.
pub fn recv_header(socket: &Socket) -> Result<NlMsgHdr> {
    let (buf, _) = socket.recv_from_full()?;
    NlMsgHdr::from_bytes(&buf)
        .copied()
        .ok_or(nlsend::Error::InvalidArgument("short reply from kernel"))
}

/// Open a route socket or skip the test.
#[macro_export]
macro_rules! require_netlink {
    () => {
        match crate::common::route_socket() {
            Some(socket) => socket,
            None => {
                eprintln!("Skipping test: netlink sockets unavailable");
                return Ok(());
            }
        }
    };
}
