use anyhow::Result;
use axum::http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Span};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer();
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    info!("telemetry initialized");
    Ok(())
}

type TraceMiddleware<B> = TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request<B>) -> Span>;

pub fn tracing_middleware<B>() -> TraceMiddleware<B> {
    TraceLayer::new_for_http().make_span_with(make_span)
}

fn make_span<B>(request: &Request<B>) -> Span {
    // There is no routing, so the raw path is the only path there is.
    info_span!(
        "http_request",
        method = ?request.method(),
        path = request.uri().path(),
    )
}
