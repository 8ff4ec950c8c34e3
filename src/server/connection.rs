//! Connection module
//!
//! Serves a single accepted TCP connection over HTTP/1.1.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::handler;
use crate::logger;

/// Serve one connection on a spawned task.
///
/// Transport-level failures (client disconnects mid-response and the like)
/// end the connection; they are logged and never propagate to the caller.
pub fn serve(stream: TcpStream) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service_fn(handler::handle_request));

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
