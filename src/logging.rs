//! Logging setup for the CLI, built on `tracing-subscriber`.
//!
//! Logs always go to stderr; stdout carries only the scan report.

use std::io;

use clap::ValueEnum;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// One line per event
    Compact,
    /// JSON objects, for tooling
    Json,
}

/// Initialises the global subscriber with per-target levels from `log_config`.
pub fn init(log_config: &LogConfig, format: LogFormat) {
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target("scanner::lexer", log_config.level_for("scanner::lexer"))
        .with_target("scanner::cli", log_config.global);

    let layer = create_format_layer(format, io::stderr).with_filter(targets);
    tracing_subscriber::registry().with(layer).init();
}

fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> impl Layer<tracing_subscriber::Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}
