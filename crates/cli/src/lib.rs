//! Command line and stdio host for the `sitepages` engines.
//!
//! Subcommands map one-to-one onto the site tools; `call` invokes a tool
//! by name with JSON arguments and `serve` answers JSON-RPC requests on
//! stdin/stdout.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod server;
