//! Utility functions for the CLI.
//!
//! - [`input`]: interactive prompts for confirmation and missing values

pub mod input;
