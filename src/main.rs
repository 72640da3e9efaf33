use anyhow::Result;
use tracing::info;

use hellosrv::{hello, server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init()?;

    let router = hello::router().layer(telemetry::tracing_middleware());

    info!("initialized router");

    server::start(router).await
}
