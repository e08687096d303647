//! Error log output
//!
//! Fetch failures and extraction faults are logged at ERROR level by the
//! session. This layer copies exactly those events, one line each with a
//! timestamp and severity, into an append-only file.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Opens (or creates) the error log for appending
pub fn open_error_log(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// A non-ANSI `fmt` layer that only records ERROR events
pub fn error_log_layer<S, W>(writer: W) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .with_filter(LevelFilter::ERROR)
}
