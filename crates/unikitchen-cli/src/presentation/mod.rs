//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no service calls
//! - Decisions about what to fetch belong in the handlers

pub mod recipe_display;
pub mod tables;

// Re-export commonly used items
pub use recipe_display::{
    display_favorites, display_ratings, display_recipe_details, display_recipe_listing,
    display_user, format_timestamp,
};
pub use tables::{format_optional, print_separator, truncate_string};
