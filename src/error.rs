//! Startup failure taxonomy.
//!
//! Every variant is terminal at the process boundary: `main` propagates the
//! error through its `anyhow::Result` return, which prints the diagnostic
//! chain to stderr and exits with code 1. Nothing here is retried or
//! recovered locally — the process manager owns restarts.
//!
//! Request handling has no error type at all: the one handler performs no
//! fallible work.

use thiserror::Error;

/// Fatal conditions on the path from process start to a serving listener.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The bind address is already occupied by another listener.
    ///
    /// The message names the specific port so an operator can find the
    /// conflicting process without reading the code.
    #[error("port {port} is already in use")]
    PortInUse { port: u16 },

    /// Any other socket/bind failure (permissions, bad interface, ...).
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    /// The accept loop failed after a successful bind.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
