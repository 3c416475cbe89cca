//! The fixed kernel destination address.

use std::mem;

/// Destination of every raw send: the kernel, unicast.
///
/// Wraps a `sockaddr_nl` with `nl_family = AF_NETLINK`, `nl_pid = 0` and
/// `nl_groups = 0`. There are no setters; a different peer or a multicast
/// group cannot be addressed through this type.
#[derive(Clone, Copy)]
pub struct KernelAddr {
    inner: libc::sockaddr_nl,
}

impl KernelAddr {
    /// Build the kernel unicast address.
    pub fn new() -> Self {
        // SAFETY: sockaddr_nl is a plain C struct for which all-zero bytes
        // is a valid value. Zeroing also clears the private padding field.
        let mut inner: libc::sockaddr_nl = unsafe { mem::zeroed() };
        inner.nl_family = libc::AF_NETLINK as libc::sa_family_t;
        inner.nl_pid = 0;
        inner.nl_groups = 0;
        Self { inner }
    }

    /// Address family (always `AF_NETLINK`).
    pub fn family(&self) -> u16 {
        self.inner.nl_family
    }

    /// Destination port ID (always 0, the kernel).
    pub fn pid(&self) -> u32 {
        self.inner.nl_pid
    }

    /// Destination multicast group mask (always 0, unicast).
    pub fn groups(&self) -> u32 {
        self.inner.nl_groups
    }

    /// Pointer suitable for the `dest_addr` argument of `sendto`.
    pub fn as_sockaddr_ptr(&self) -> *const libc::sockaddr {
        &self.inner as *const libc::sockaddr_nl as *const libc::sockaddr
    }

    /// Size suitable for the `addrlen` argument of `sendto`.
    pub fn socklen(&self) -> libc::socklen_t {
        mem::size_of::<libc::sockaddr_nl>() as libc::socklen_t
    }
}

impl Default for KernelAddr {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KernelAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KernelAddr")
            .field("family", &self.family())
            .field("pid", &self.pid())
            .field("groups", &self.groups())
            .finish()
    }
}

impl PartialEq for KernelAddr {
    fn eq(&self, other: &Self) -> bool {
        self.family() == other.family()
            && self.pid() == other.pid()
            && self.groups() == other.groups()
    }
}

impl Eq for KernelAddr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_fields() {
        let addr = KernelAddr::new();
        assert_eq!(addr.family(), libc::AF_NETLINK as u16);
        assert_eq!(addr.pid(), 0);
        assert_eq!(addr.groups(), 0);
    }

    #[test]
    fn test_socklen_is_sockaddr_nl() {
        assert_eq!(KernelAddr::new().socklen(), 12);
    }

    #[test]
    fn test_always_identical() {
        assert_eq!(KernelAddr::new(), KernelAddr::default());
        let dbg = format!("{:?}", KernelAddr::new());
        assert_eq!(
            dbg,
            format!("KernelAddr {{ family: {}, pid: 0, groups: 0 }}", libc::AF_NETLINK)
        );
    }
}
