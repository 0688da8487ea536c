//! Favorite recipes of the current user.

use serde::{Deserialize, Serialize};

use super::recipe::{Category, DifficultyLevel, RecipeId};

/// Entry of `GET /api/favorites/current`.
///
/// The service names the fields `recipeId`/`recipeName`; overview-style
/// `id`/`name` are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecipe {
    #[serde(alias = "id")]
    pub recipe_id: RecipeId,
    #[serde(alias = "name")]
    pub recipe_name: String,
    pub price: Option<f64>,
    pub duration: Option<u32>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub category: Option<Category>,
    pub recipe_image_path: Option<String>,
}
