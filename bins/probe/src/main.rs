//! nlsend-probe - push a raw netlink message to the kernel.
//!
//! Opens and binds a socket, hands the bytes to `nlsend`, and reports how
//! many of them the kernel accepted. Replies are not read.

mod hex;
mod socket;

use std::os::unix::io::AsRawFd;

use bytes::{BufMut, Bytes, BytesMut};
use clap::{Parser, Subcommand};
use nlsend::{NLM_F_DUMP, NLM_F_REQUEST, NLMSG_HDRLEN, NlMsgHdr, NlMsgType, nlmsg_align};
use serde::Serialize;

use socket::Protocol;

#[derive(Parser)]
#[command(name = "nlsend-probe")]
#[command(about = "Send a raw netlink message to the kernel", long_about = None)]
#[command(version)]
struct Cli {
    /// Netlink protocol family of the socket
    #[arg(short, long, value_enum, default_value = "route", global = true)]
    protocol: Protocol,

    /// Output JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send an RTM_GETLINK dump request
    Links {
        /// Sequence number to stamp on the request
        #[arg(long, default_value_t = 1)]
        seq: u32,
    },

    /// Send hex-encoded bytes unmodified
    Raw {
        /// Message bytes, e.g. "10 00 00 00 02 00 00 00 ..."
        #[arg(value_name = "HEX")]
        data: String,
    },
}

#[derive(Serialize)]
struct Report {
    sent: usize,
    requested: usize,
    protocol: Protocol,
}

/// `RTM_GETLINK` dump: header plus a `struct rtgenmsg` for `AF_UNSPEC`.
fn getlink_dump(seq: u32) -> Bytes {
    let len = nlmsg_align(NLMSG_HDRLEN + 1);
    let mut hdr =
        NlMsgHdr::new(NlMsgType::RTM_GETLINK, NLM_F_REQUEST | NLM_F_DUMP).with_seq(seq);
    hdr.nlmsg_len = len as u32;

    let mut buf = BytesMut::with_capacity(len);
    buf.put_slice(hdr.as_bytes());
    buf.put_bytes(0, len - NLMSG_HDRLEN);
    buf.freeze()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Validate input before touching the kernel.
    let msg = match cli.command {
        Command::Links { seq } => getlink_dump(seq),
        Command::Raw { data } => Bytes::from(hex::parse_hex(&data)?),
    };

    let socket = socket::open(cli.protocol)?;
    let requested = msg.len();
    let sent = nlsend::send_from_blocking(socket.as_raw_fd(), msg).await?;
    tracing::debug!(sent, requested, "send complete");

    let report = Report {
        sent,
        requested,
        protocol: cli.protocol,
    };
    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("sent {} of {} bytes", report.sent, report.requested);
    }
    Ok(())
}
