//! Server module
//!
//! Listener construction and the blocking accept loop.

pub mod connection;
pub mod listener;

use tokio::net::TcpListener;

use crate::logger;

/// Accept connections forever, serving each one on a spawned task.
///
/// Runs for the lifetime of the process; only returns on accept-loop
/// failure, which is not expected in practice.
pub async fn run(listener: TcpListener) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => connection::serve(stream),
            Err(e) => logger::log_accept_error(&e),
        }
    }
}
