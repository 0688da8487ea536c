//! Port definitions: the seams between the core and its adapters.

pub mod recipe_api;

#[cfg(any(test, feature = "test-utils"))]
pub use recipe_api::MockRecipeApiPort;
pub use recipe_api::{
    RecipeApiError, RecipeApiPort, RecipeApiResult, attach_recipe_image, attach_recipe_images,
};
