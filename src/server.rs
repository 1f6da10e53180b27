//! Listener setup and the serve loop.
//!
//! Binding is the only fallible step this service owns, so the error
//! classification lives here: [`bind`] turns raw `io::Error`s into the
//! [`StartupError`] taxonomy before `main` ever sees them.

use std::{future::Future, io::ErrorKind, net::SocketAddr};

use tokio::net::TcpListener;

use crate::{api, error::StartupError};

/// Bind the listening socket, classifying failures.
///
/// An occupied port surfaces as `ErrorKind::AddrInUse`, the portable form of
/// errno 98 (Linux) and errno 48 (BSD/macOS), and maps to
/// [`StartupError::PortInUse`] naming the port. Every other failure maps to
/// [`StartupError::Bind`] with the underlying message intact.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            Err(StartupError::PortInUse { port: addr.port() })
        }
        Err(e) => Err(StartupError::Bind(e)),
    }
}

/// Serve the API router on `listener` until `shutdown` resolves.
///
/// A resolved `shutdown` drains in-flight requests and returns `Ok(())`;
/// an accept-loop failure returns [`StartupError::Serve`].
pub async fn run(
    listener: TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), StartupError> {
    axum::serve(listener, api::router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)
}
