//! Command-line client for the UniKitchen recipe service.
//!
//! `main.rs` parses arguments, initializes logging and builds a
//! [`CliContext`] through [`bootstrap`]; everything else lives here so it
//! can be tested against the mock port.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Only used by the binary entry point
use dotenvy as _;
use tracing_subscriber as _;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{
    AuthCommand, Commands, FavoriteCommand, MeCommand, RatingCommand, RecipeCommand,
};
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
