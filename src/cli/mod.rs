//! Command-line surface of `lk`
//!
//! - [`commands`] - argument definitions and dispatch
//! - [`actions`] - one function per command, generic over the upstream client
//!   and the output stream
//! - [`render`] - text-mode formatting

pub mod actions;
pub mod commands;
pub mod render;

pub use commands::{Cli, Commands, run};
