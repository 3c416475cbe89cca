//! Netlink message header.
//!
//! Only the fixed 16-byte header is modelled here. Payloads are opaque to
//! this crate and are the business of whoever encodes the message.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Netlink message header alignment.
pub const NLMSG_ALIGNTO: usize = 4;

/// Align a length to NLMSG_ALIGNTO boundary.
#[inline]
pub const fn nlmsg_align(len: usize) -> usize {
    (len + NLMSG_ALIGNTO - 1) & !(NLMSG_ALIGNTO - 1)
}

/// Size of the netlink message header.
pub const NLMSG_HDRLEN: usize = nlmsg_align(std::mem::size_of::<NlMsgHdr>());

/// Netlink message header (mirrors struct nlmsghdr).
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
pub struct NlMsgHdr {
    /// Length of message including header.
    pub nlmsg_len: u32,
    /// Message type.
    pub nlmsg_type: u16,
    /// Additional flags.
    pub nlmsg_flags: u16,
    /// Sequence number.
    pub nlmsg_seq: u32,
    /// Sending process port ID.
    pub nlmsg_pid: u32,
}

impl NlMsgHdr {
    /// Create a header-only message of the given type and flags.
    pub fn new(msg_type: u16, flags: u16) -> Self {
        Self {
            nlmsg_len: NLMSG_HDRLEN as u32,
            nlmsg_type: msg_type,
            nlmsg_flags: flags,
            nlmsg_seq: 0,
            nlmsg_pid: 0,
        }
    }

    /// Set the sequence number.
    pub fn with_seq(mut self, seq: u32) -> Self {
        self.nlmsg_seq = seq;
        self
    }

    /// Convert header to bytes.
    pub fn as_bytes(&self) -> &[u8] {
        <Self as IntoBytes>::as_bytes(self)
    }

    /// Parse a header from the front of `data`.
    ///
    /// Returns `None` if fewer than [`NLMSG_HDRLEN`] bytes are available.
    pub fn from_bytes(data: &[u8]) -> Option<&Self> {
        Self::ref_from_prefix(data).ok().map(|(hdr, _)| hdr)
    }
}

/// Standard netlink message types.
pub struct NlMsgType;

impl NlMsgType {
    /// No operation, message must be discarded.
    pub const NOOP: u16 = 1;
    /// Error message or ACK.
    pub const ERROR: u16 = 2;

    /// Get link (interface) information; with `NLM_F_DUMP`, all links.
    pub const RTM_GETLINK: u16 = 18;
}

/// Netlink message flags.
pub const NLM_F_REQUEST: u16 = 0x01;
pub const NLM_F_ACK: u16 = 0x04;

// Modifiers to GET request
pub const NLM_F_ROOT: u16 = 0x100;
pub const NLM_F_MATCH: u16 = 0x200;
pub const NLM_F_DUMP: u16 = NLM_F_ROOT | NLM_F_MATCH;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(nlmsg_align(0), 0);
        assert_eq!(nlmsg_align(3), 4);
        assert_eq!(nlmsg_align(7), 8);
        assert_eq!(nlmsg_align(8), 8);
        assert_eq!(NLMSG_HDRLEN, 16);
    }

    #[test]
    fn test_decode_fields() {
        let data = [
            0x10, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00,
        ];
        let hdr = NlMsgHdr::from_bytes(&data).unwrap();
        assert_eq!(hdr.nlmsg_len, 16);
        assert_eq!(hdr.nlmsg_type, NlMsgType::ERROR);
        assert_eq!(hdr.nlmsg_flags, 0);
    }

    #[test]
    fn test_flag_values() {
        assert_eq!(NLM_F_REQUEST | NLM_F_ACK, 0x05);
        assert_eq!(NLM_F_DUMP, 0x300);
        assert_eq!(NlMsgType::RTM_GETLINK, 18);
    }

    #[test]
    fn test_truncated() {
        assert!(NlMsgHdr::from_bytes(&[0x10, 0x00, 0x00]).is_none());
    }

    #[test]
    fn test_header_only_request() {
        let hdr = NlMsgHdr::new(NlMsgType::RTM_GETLINK, NLM_F_REQUEST | NLM_F_DUMP).with_seq(7);
        let bytes = hdr.as_bytes();
        assert_eq!(bytes.len(), NLMSG_HDRLEN);
        assert_eq!(&bytes[0..4], &16u32.to_ne_bytes());
        assert_eq!(&bytes[4..6], &18u16.to_ne_bytes());
        assert_eq!(&bytes[6..8], &0x301u16.to_ne_bytes());
        assert_eq!(&bytes[8..12], &7u32.to_ne_bytes());
        assert_eq!(NlMsgHdr::from_bytes(bytes), Some(&hdr));
    }
}
