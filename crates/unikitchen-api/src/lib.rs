//! HTTP adapter for the UniKitchen recipe service.
//!
//! [`DefaultRecipeApiClient`] implements [`unikitchen_core::RecipeApiPort`]
//! over reqwest. Consumers should depend on the port trait and only touch
//! this crate to build the client:
//!
//! ```no_run
//! use unikitchen_api::{ClientConfig, DefaultRecipeApiClient};
//! use unikitchen_core::RecipeApiPort;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DefaultRecipeApiClient::new(&ClientConfig::from_env())?;
//! let latest = RecipeApiPort::fetch_last_recipes(&client, None).await?;
//! println!("{} recipes", latest.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultRecipeApiClient is meant
// to be used through the RecipeApiPort trait, not its generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultRecipeApiClient;

// Errors surfaced by construction
pub use error::{ApiError, ApiResult};

// Configuration
pub use config::{BASE_URL_ENV, ClientConfig, TIMEOUT_ENV};

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
