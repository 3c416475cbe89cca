//! Netlink socket setup for the probe.

use std::io;

use clap::ValueEnum;
use netlink_sys::{Socket, SocketAddr, protocols};
use serde::Serialize;

/// Netlink protocol families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Routing/device hook (ip, tc, etc.)
    Route,
    /// Generic netlink
    Generic,
    /// Netfilter
    Netfilter,
    /// Kernel connector
    Connector,
    /// Kobject uevent
    Uevent,
}

impl Protocol {
    fn as_isize(self) -> isize {
        match self {
            Protocol::Route => protocols::NETLINK_ROUTE,
            Protocol::Generic => protocols::NETLINK_GENERIC,
            Protocol::Netfilter => protocols::NETLINK_NETFILTER,
            Protocol::Connector => protocols::NETLINK_CONNECTOR,
            Protocol::Uevent => protocols::NETLINK_KOBJECT_UEVENT,
        }
    }
}

/// Open a blocking socket for `protocol` and bind it to a kernel-assigned port ID.
pub fn open(protocol: Protocol) -> io::Result<Socket> {
    let mut socket = Socket::new(protocol.as_isize())?;

    let mut addr = SocketAddr::new(0, 0);
    socket.bind(&addr)?;
    socket.get_address(&mut addr)?;
    tracing::debug!(?protocol, pid = addr.port_number(), "netlink socket bound");

    Ok(socket)
}
