//! Tracing export to an OTLP/JSON file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK tracer provider → FileSpanExporter → /data/hackerstories-otlp.json
//! ```
//!
//! Each export is one JSON line holding a complete OTLP `TracesData`
//! document. The file rotates at 10 MB and keeps three backups. The level
//! comes from the `trace_level` plugin option and defaults to `info`.
//!
//! The plugin and its worker run on different threads and each install their
//! own subscriber; worker messages carry a [`TraceContext`] so both halves of
//! a request land in the same trace.
//!
//! [`TraceContext`]: crate::worker::TraceContext

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::init_tracing;
