//! ActionFlow CLI - file-based front end
//!
//! Reads a JSON array of task records, builds the dependency graph and
//! renders it for people: the full workflow document, per-owner task
//! lists, or a dispatch order.

#![warn(unreachable_pub)]

pub mod commands;
pub mod logging;

pub use commands::{
    build_document, load_config, read_records, render_deps, render_order, write_document,
    CommandError,
};
pub use logging::{init_tracing, LogFormat};
