//! Tracing initialization and span definitions.
//! Uses the `tracing` crate with `EnvFilter` for per-module log levels.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
