//! Core types and ports for the UniKitchen recipe API client.
//!
//! - [`domain`]: transport DTOs, the bearer token, image encoding
//! - [`ports`]: the [`RecipeApiPort`] trait every adapter implements
//! - [`call`]: per-call timeout and cancellation
//!
//! Nothing in this crate performs I/O against the service; the HTTP
//! implementation lives in `unikitchen-api`.

#![deny(unused_crate_dependencies)]

pub mod call;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use call::{CallOptions, guarded};
pub use domain::{
    AuthSession, AuthToken, Category, Credentials, DifficultyLevel, FavoriteRecipe, ImageUpload,
    Ingredient, QueryParams, RatingValue, RecipeCreationRequest, RecipeDetails, RecipeFilter,
    RecipeId, RecipeImage, RecipeImageSlot, RecipeListing, RecipeOverview, RecipePage,
    RecipeUpdateRequest, SortDirection, UserInfo, UserRating, jpeg_data_uri,
};
pub use ports::{
    RecipeApiError, RecipeApiPort, RecipeApiResult, attach_recipe_image, attach_recipe_images,
};

pub use tokio_util::sync::CancellationToken;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
