//! Bridge between the UI thread and the tokio-backed request worker.

pub mod commands;
pub mod runtime;
