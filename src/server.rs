use std::io;
use std::net::{Ipv4Addr, SocketAddr, TcpListener};

use anyhow::Result;
use axum::Router;
use thiserror::Error;
use tracing::info;

pub const PORT: u16 = 1337;

#[derive(Error, Debug)]
#[error("failed to bind {addr}: {source}")]
pub struct BindError {
    pub addr: SocketAddr,
    #[source]
    pub source: io::Error,
}

/// Binds the listener, or fails with a [`BindError`] when the address is
/// already in use, permission is denied, or the address is invalid. There is
/// no retry and no fallback address: callers treat this as fatal.
pub fn bind(addr: SocketAddr) -> Result<TcpListener, BindError> {
    let listener = TcpListener::bind(addr).map_err(|source| BindError { addr, source })?;
    // hyper drives the listener through tokio, which requires this.
    listener
        .set_nonblocking(true)
        .map_err(|source| BindError { addr, source })?;
    Ok(listener)
}

/// Serves the router on an already-bound listener until SIGINT. Connection
/// handling (keep-alive, unparseable requests) is left to hyper's defaults.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::Server::from_tcp(listener)?
        .serve(router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn start(router: Router) -> Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, PORT));
    let listener = bind(addr)?;

    println!("Server running at http://{addr}/");

    serve(listener, router).await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        return;
    }
    info!("shutdown signal received");
}
