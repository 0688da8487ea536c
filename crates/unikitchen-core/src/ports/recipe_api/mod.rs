//! Recipe API port definitions.
//!
//! This module defines the port trait and error type for talking to the
//! recipe service. The HTTP implementation lives in `unikitchen-api`.

mod client;
mod error;

#[cfg(any(test, feature = "test-utils"))]
pub use client::MockRecipeApiPort;
pub use client::{RecipeApiPort, attach_recipe_image, attach_recipe_images};
pub use error::{RecipeApiError, RecipeApiResult};
