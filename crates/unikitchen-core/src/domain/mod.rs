//! Transport types exchanged with the recipe service.

pub mod favorite;
pub mod filter;
pub mod image;
pub mod rating;
pub mod recipe;
pub mod user;

pub use favorite::FavoriteRecipe;
pub use filter::{QueryParams, RecipeFilter, SortDirection};
pub use image::{ImageUpload, JPEG_DATA_URI_PREFIX, RecipeImage, RecipeImageSlot, jpeg_data_uri};
pub use rating::{InvalidRating, RatingValue, UserRating};
pub use recipe::{
    Category, DifficultyLevel, Ingredient, RecipeCreationRequest, RecipeDetails, RecipeId,
    RecipeListing, RecipeOverview, RecipePage, RecipeUpdateRequest, UnknownVariant,
};
pub use user::{AuthSession, AuthToken, Credentials, UserInfo};
