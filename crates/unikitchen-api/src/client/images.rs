//! Image downloads.
//!
//! Both downloads degrade instead of failing: whatever goes wrong is logged
//! and reported as [`RecipeImage::Unavailable`].

use reqwest::Method;
use tracing::warn;
use unikitchen_core::{AuthToken, RecipeId, RecipeImage};

use super::RecipeApiClient;
use crate::error::ApiResult;
use crate::http::{ApiRequest, HttpBackend};
use crate::url::Endpoint;

impl<B: HttpBackend> RecipeApiClient<B> {
    /// Download a recipe image. Never sends a token.
    pub async fn fetch_recipe_image(&self, recipe_id: RecipeId) -> RecipeImage {
        match self.download(Endpoint::RecipeImage(recipe_id), None).await {
            Ok(bytes) => RecipeImage::from_bytes(&bytes),
            Err(e) => {
                warn!(recipe_id = %recipe_id, error = %e, "recipe image unavailable");
                RecipeImage::Unavailable
            }
        }
    }

    /// Download the current user's profile image.
    pub async fn fetch_profile_image(&self, token: &AuthToken) -> RecipeImage {
        match self.download(Endpoint::ProfileImage, Some(token)).await {
            Ok(bytes) => RecipeImage::from_bytes(&bytes),
            Err(e) => {
                warn!(error = %e, "profile image unavailable");
                RecipeImage::Unavailable
            }
        }
    }

    async fn download(&self, endpoint: Endpoint, token: Option<&AuthToken>) -> ApiResult<Vec<u8>> {
        let url = self.url(endpoint, None)?;
        let response = self
            .send(ApiRequest::new(Method::GET, url).with_auth(token))
            .await?;
        Ok(response.body)
    }
}
