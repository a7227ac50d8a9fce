//! `tracing` output routed to the browser console.

use barbershop_app::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber. Later calls keep the first subscriber.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // The console stamps messages itself.
    let layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
