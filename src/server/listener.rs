//! Listener module
//!
//! Creates the TCP listener the server accepts connections on.

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Create a `TcpListener` bound to `addr`.
///
/// `SO_REUSEADDR` is enabled so the port can be re-acquired while a previous
/// instance's sockets linger in `TIME_WAIT`. A port actively held by another
/// listener still fails the bind, which is the intended fatal path.
pub fn bind(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
        let listener = bind(addr).unwrap();
        assert_eq!(
            listener.local_addr().unwrap().ip(),
            Ipv4Addr::LOCALHOST
        );
    }

    #[tokio::test]
    async fn test_second_bind_on_held_port_fails() {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
        let first = bind(addr).unwrap();
        let held = first.local_addr().unwrap();

        assert!(bind(held).is_err());
    }
}
