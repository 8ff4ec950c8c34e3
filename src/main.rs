use std::net::{Ipv4Addr, SocketAddr};

mod handler;
mod http;
mod logger;
mod server;

/// Port the greeting server listens on.
const PORT: u16 = 7777;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));

    logger::log_server_start(PORT);

    // Bind failure is the only fatal path: log the cause and exit non-zero.
    let listener = match server::listener::bind(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    server::run(listener).await
}
