//! Recipe API port trait.

use async_trait::async_trait;

use super::error::RecipeApiResult;
use crate::domain::{
    AuthSession, AuthToken, Credentials, FavoriteRecipe, ImageUpload, QueryParams,
    RatingValue, RecipeCreationRequest, RecipeDetails, RecipeId, RecipeImage, RecipeImageSlot,
    RecipeListing, RecipeUpdateRequest, UserInfo, UserRating,
};

/// Port trait for the recipe service.
///
/// One method per backend operation. Every call is an independent
/// request/response exchange; the implementation holds no session, and
/// tokens are passed per call.
///
/// # Design
///
/// - Uses core-owned DTOs, not HTTP types
/// - Returns `RecipeApiError` for all failures, except the two documented
///   degradations (`fetch_recipe_image`, `fetch_user_rating`)
/// - No implementation details leak through this interface
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait RecipeApiPort: Send + Sync {
    /// Download a recipe image as a `data:` URI. Never sends a token.
    ///
    /// Failures are logged and reported as [`RecipeImage::Unavailable`].
    async fn fetch_recipe_image(&self, recipe_id: RecipeId) -> RecipeImage;

    /// Create a recipe owned by the token's user.
    async fn create_recipe(
        &self,
        token: &AuthToken,
        request: &RecipeCreationRequest,
    ) -> RecipeApiResult<RecipeDetails>;

    /// Replace a recipe's content.
    async fn update_recipe(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
        request: &RecipeUpdateRequest,
    ) -> RecipeApiResult<RecipeDetails>;

    /// Upload the image for a recipe as multipart field `image`.
    async fn upload_recipe_image(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
        image: &ImageUpload,
    ) -> RecipeApiResult<()>;

    /// Fetch the full recipe.
    async fn fetch_recipe_details(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
    ) -> RecipeApiResult<RecipeDetails>;

    async fn delete_recipe(&self, token: &AuthToken, recipe_id: RecipeId) -> RecipeApiResult<()>;

    /// Newest recipes. The token only personalizes the result (favorite flags).
    async fn fetch_last_recipes<'a>(
        &self,
        token: Option<&'a AuthToken>,
    ) -> RecipeApiResult<RecipeListing>;

    /// Filtered listing; `params` are forwarded as the query string verbatim.
    async fn fetch_filtered_recipes<'a>(
        &self,
        token: Option<&'a AuthToken>,
        params: &QueryParams,
    ) -> RecipeApiResult<RecipeListing>;

    /// Recipes owned by the token's user.
    async fn fetch_user_recipes(&self, token: &AuthToken) -> RecipeApiResult<RecipeListing>;

    /// Flip the favorite flag. The service's answer is returned undecoded.
    async fn toggle_favorite(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
    ) -> RecipeApiResult<serde_json::Value>;

    async fn fetch_favorites(&self, token: &AuthToken) -> RecipeApiResult<Vec<FavoriteRecipe>>;

    /// The user's own rating of a recipe.
    ///
    /// Returns `Ok(None)` when the service answers with a generic server
    /// error, which it does for recipes the user has not rated yet.
    async fn fetch_user_rating(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
    ) -> RecipeApiResult<Option<UserRating>>;

    /// Create or replace the user's rating.
    async fn submit_rating(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
        rating: RatingValue,
    ) -> RecipeApiResult<()>;

    /// All ratings of a recipe.
    async fn fetch_recipe_ratings<'a>(
        &self,
        token: Option<&'a AuthToken>,
        recipe_id: RecipeId,
    ) -> RecipeApiResult<Vec<UserRating>>;

    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> RecipeApiResult<AuthSession>;

    async fn register(&self, credentials: &Credentials) -> RecipeApiResult<UserInfo>;

    async fn fetch_current_user(&self, token: &AuthToken) -> RecipeApiResult<UserInfo>;

    /// Update username/bio. Returns the service's confirmation message.
    async fn update_current_user(
        &self,
        token: &AuthToken,
        profile: &UserInfo,
    ) -> RecipeApiResult<String>;

    /// Same never-fail policy as [`RecipeApiPort::fetch_recipe_image`].
    async fn fetch_profile_image(&self, token: &AuthToken) -> RecipeImage;

    async fn upload_profile_image(
        &self,
        token: &AuthToken,
        image: &ImageUpload,
    ) -> RecipeApiResult<()>;
}

/// Fetch a recipe's image and store it on the recipe.
///
/// On failure the recipe is left untouched. Returns whether an image was
/// attached.
pub async fn attach_recipe_image<P, T>(port: &P, recipe: &mut T) -> bool
where
    P: RecipeApiPort + ?Sized,
    T: RecipeImageSlot + Send,
{
    match port.fetch_recipe_image(recipe.recipe_id()).await {
        RecipeImage::Loaded { data_uri } => {
            recipe.set_image_src(data_uri);
            true
        }
        RecipeImage::Unavailable => false,
    }
}

/// Attach images to every recipe in order. Returns how many were attached.
pub async fn attach_recipe_images<P, T>(port: &P, recipes: &mut [T]) -> usize
where
    P: RecipeApiPort + ?Sized,
    T: RecipeImageSlot + Send,
{
    let mut attached = 0;
    for recipe in recipes.iter_mut() {
        if attach_recipe_image(port, recipe).await {
            attached += 1;
        }
    }
    attached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeOverview;
    use serde_json::json;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn RecipeApiPort>) {}

    fn overview(id: i64) -> RecipeOverview {
        serde_json::from_value(json!({"id": id, "name": format!("Recipe {id}")})).unwrap()
    }

    #[tokio::test]
    async fn test_attach_sets_image_when_loaded() {
        let mut port = MockRecipeApiPort::new();
        port.expect_fetch_recipe_image()
            .withf(|id| *id == RecipeId(3))
            .times(1)
            .returning(|_| RecipeImage::from_bytes(&[0xFF]));

        let mut recipe = overview(3);
        assert!(attach_recipe_image(&port, &mut recipe).await);
        assert_eq!(
            recipe.image_src.as_deref(),
            Some("data:image/jpeg;base64,/w==")
        );
    }

    #[tokio::test]
    async fn test_attach_leaves_image_unset_when_unavailable() {
        let mut port = MockRecipeApiPort::new();
        port.expect_fetch_recipe_image()
            .returning(|_| RecipeImage::Unavailable);

        let mut recipe = overview(3);
        assert!(!attach_recipe_image(&port, &mut recipe).await);
        assert!(recipe.image_src.is_none());
    }

    #[tokio::test]
    async fn test_attach_many_counts_successes() {
        let mut port = MockRecipeApiPort::new();
        port.expect_fetch_recipe_image().returning(|id| {
            if id.get() % 2 == 0 {
                RecipeImage::from_bytes(&[1, 2, 3])
            } else {
                RecipeImage::Unavailable
            }
        });

        let mut recipes = vec![overview(1), overview(2), overview(4)];
        let attached = attach_recipe_images(&port, &mut recipes).await;
        assert_eq!(attached, 2);
        assert!(recipes[0].image_src.is_none());
        assert!(recipes[2].image_src.is_some());
    }

    #[tokio::test]
    async fn test_optional_token_methods_mock_through_dyn_port() {
        let mut mock = MockRecipeApiPort::new();
        mock.expect_fetch_last_recipes()
            .withf(|token| token.is_none())
            .times(1)
            .returning(|_| Ok(RecipeListing::Items(vec![overview(1)])));
        mock.expect_fetch_filtered_recipes()
            .withf(|token, params| {
                token.map(AuthToken::expose) == Some("abc") && params.len() == 1
            })
            .times(1)
            .returning(|_, _| Ok(RecipeListing::Items(Vec::new())));
        mock.expect_fetch_recipe_ratings()
            .withf(|token, id| token.is_none() && *id == RecipeId(7))
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let port: Arc<dyn RecipeApiPort> = Arc::new(mock);
        let token = AuthToken::new("abc");
        let params = QueryParams::new().with("cheap", true);

        assert_eq!(port.fetch_last_recipes(None).await.unwrap().len(), 1);
        assert!(
            port.fetch_filtered_recipes(Some(&token), &params)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(
            port.fetch_recipe_ratings(None, RecipeId(7))
                .await
                .unwrap()
                .is_empty()
        );
    }
}
