//! Error types for raw netlink sends.

use std::io;

/// Result type for raw netlink sends.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while pushing bytes to the kernel.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The call contract was violated (empty buffer, null pointer).
    ///
    /// Checked in every build profile. The socket is never touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// `sendto` failed; the errno is kept as the kernel reported it.
    #[error("send failed: {message} (errno {errno})")]
    Transmit {
        /// The errno value from the failed call.
        errno: i32,
        /// Human-readable error message.
        message: String,
    },

    /// The blocking-pool task running the send panicked or was cancelled.
    #[error("send task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl Error {
    /// Create a transmit error from a positive errno value.
    pub fn from_errno(errno: i32) -> Self {
        let message = io::Error::from_raw_os_error(errno).to_string();
        Self::Transmit { errno, message }
    }

    /// Get the errno value.
    ///
    /// Contract violations report `EINVAL`. A failed blocking task has no
    /// errno.
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::InvalidArgument(_) => Some(libc::EINVAL),
            Self::Transmit { errno, .. } => Some(*errno),
            Self::Join(_) => None,
        }
    }

    /// Flatten into the negative integer form returned over the C ABI.
    pub fn raw_code(&self) -> isize {
        -(self.errno().unwrap_or(libc::EIO) as isize)
    }

    /// Check if this is a contract violation rather than a kernel result.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if the socket is non-blocking and its send buffer is full (EAGAIN).
    pub fn is_would_block(&self) -> bool {
        self.transmit_errno() == Some(libc::EAGAIN)
    }

    /// Check if the call was interrupted by a signal (EINTR).
    pub fn is_interrupted(&self) -> bool {
        self.transmit_errno() == Some(libc::EINTR)
    }

    /// Check if the kernel ran out of socket buffer space (ENOBUFS).
    pub fn is_no_buffer_space(&self) -> bool {
        self.transmit_errno() == Some(libc::ENOBUFS)
    }

    /// Check if the descriptor is closed, invalid or not a socket.
    pub fn is_bad_descriptor(&self) -> bool {
        matches!(self.transmit_errno(), Some(libc::EBADF | libc::ENOTSOCK))
    }

    fn transmit_errno(&self) -> Option<i32> {
        match self {
            Self::Transmit { errno, .. } => Some(*errno),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(errno) => Self::from_errno(errno),
            None => Self::Transmit {
                errno: libc::EIO,
                message: err.to_string(),
            },
        }
    }
}
