//! Raw netlink transmit primitive.
//!
//! This crate pushes a caller-built netlink message onto a caller-owned
//! socket, addressed to the kernel (pid 0, no multicast groups). It does not
//! open, bind or close sockets and does not look inside the bytes it sends.
//!
//! Each call makes exactly one `sendto` attempt. Short sends are reported,
//! not completed, and errors are never retried.
//!
//! # Entry points
//!
//! - [`send_from`] - blocking send of a borrowed slice
//! - [`send_from_raw`] - same, flattened to `n` or `-errno`
//! - [`send_from_in_place`] - blocking send that lets a multi-thread tokio
//!   runtime move other tasks off the current worker
//! - [`send_from_blocking`] - async send on tokio's blocking pool
//! - [`ffi::nlsend_send_from`] - C ABI
//!
//! # Example
//!
//! ```ignore
//! use std::os::unix::io::AsRawFd;
//! use nlsend::{NLM_F_DUMP, NLM_F_REQUEST, NlMsgHdr, NlMsgType};
//!
//! let hdr = NlMsgHdr::new(NlMsgType::RTM_GETLINK, NLM_F_REQUEST | NLM_F_DUMP);
//! let sent = nlsend::send_from(socket.as_raw_fd(), hdr.as_bytes())?;
//! if sent < hdr.as_bytes().len() {
//!     // Short send; resending the rest is up to the caller.
//! }
//! ```

pub mod addr;
mod error;
pub mod ffi;
pub mod message;
mod send;
pub mod transmit;

pub use addr::KernelAddr;
pub use error::{Error, Result};
pub use message::{
    NLM_F_ACK, NLM_F_DUMP, NLM_F_REQUEST, NLMSG_HDRLEN, NlMsgHdr, NlMsgType, nlmsg_align,
};
pub use send::{
    SEND_FLAGS, send_from, send_from_blocking, send_from_blocking_with, send_from_in_place,
    send_from_in_place_with, send_from_raw, send_from_with,
};
pub use transmit::{SysTransmit, Transmit};
