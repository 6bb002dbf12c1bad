//! Queue plumbing between the UI thread and the backend worker.

pub mod commands;
pub mod runtime;
