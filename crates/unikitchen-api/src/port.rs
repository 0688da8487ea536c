//! Port trait implementation for `RecipeApiClient`.
//!
//! This module implements the core-owned `RecipeApiPort` trait, converting
//! internal `ApiError`s into `RecipeApiError` at the boundary.

use async_trait::async_trait;
use unikitchen_core::{
    AuthSession, AuthToken, Credentials, FavoriteRecipe, ImageUpload, QueryParams, RatingValue,
    RecipeApiError, RecipeApiPort, RecipeApiResult, RecipeCreationRequest, RecipeDetails,
    RecipeId, RecipeImage, RecipeListing, RecipeUpdateRequest, UserInfo, UserRating,
};

use crate::client::RecipeApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `RecipeApiError`.
fn map_error(err: ApiError) -> RecipeApiError {
    match err {
        ApiError::RequestFailed {
            status,
            url,
            message,
        } => {
            let message = message.unwrap_or_else(|| format!("request to {url} failed"));
            match status {
                401 | 403 => RecipeApiError::Unauthorized { status, message },
                404 => RecipeApiError::NotFound { resource: url },
                400..=499 => RecipeApiError::Rejected { status, message },
                _ => RecipeApiError::Server { status, message },
            }
        }
        ApiError::Network(e) if e.is_timeout() => RecipeApiError::TimedOut,
        ApiError::Network(e) if e.is_builder() => RecipeApiError::Configuration {
            message: e.to_string(),
        },
        ApiError::Network(e) => RecipeApiError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => RecipeApiError::Configuration {
            message: e.to_string(),
        },
        e @ ApiError::InvalidBaseUrl { .. } => RecipeApiError::Configuration {
            message: e.to_string(),
        },
        ApiError::InvalidRequest { message } => RecipeApiError::InvalidInput { message },
        ApiError::JsonParse(e) => RecipeApiError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> RecipeApiPort for RecipeApiClient<B> {
    async fn fetch_recipe_image(&self, recipe_id: RecipeId) -> RecipeImage {
        Self::fetch_recipe_image(self, recipe_id).await
    }

    async fn create_recipe(
        &self,
        token: &AuthToken,
        request: &RecipeCreationRequest,
    ) -> RecipeApiResult<RecipeDetails> {
        Self::create_recipe(self, token, request)
            .await
            .map_err(map_error)
    }

    async fn update_recipe(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
        request: &RecipeUpdateRequest,
    ) -> RecipeApiResult<RecipeDetails> {
        Self::update_recipe(self, token, recipe_id, request)
            .await
            .map_err(map_error)
    }

    async fn upload_recipe_image(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
        image: &ImageUpload,
    ) -> RecipeApiResult<()> {
        Self::upload_recipe_image(self, token, recipe_id, image)
            .await
            .map_err(map_error)
    }

    async fn fetch_recipe_details(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
    ) -> RecipeApiResult<RecipeDetails> {
        Self::fetch_recipe_details(self, token, recipe_id)
            .await
            .map_err(map_error)
    }

    async fn delete_recipe(&self, token: &AuthToken, recipe_id: RecipeId) -> RecipeApiResult<()> {
        Self::delete_recipe(self, token, recipe_id)
            .await
            .map_err(map_error)
    }

    async fn fetch_last_recipes<'a>(
        &self,
        token: Option<&'a AuthToken>,
    ) -> RecipeApiResult<RecipeListing> {
        Self::fetch_last_recipes(self, token).await.map_err(map_error)
    }

    async fn fetch_filtered_recipes<'a>(
        &self,
        token: Option<&'a AuthToken>,
        params: &QueryParams,
    ) -> RecipeApiResult<RecipeListing> {
        Self::fetch_filtered_recipes(self, token, params)
            .await
            .map_err(map_error)
    }

    async fn fetch_user_recipes(&self, token: &AuthToken) -> RecipeApiResult<RecipeListing> {
        Self::fetch_user_recipes(self, token).await.map_err(map_error)
    }

    async fn toggle_favorite(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
    ) -> RecipeApiResult<serde_json::Value> {
        Self::toggle_favorite(self, token, recipe_id)
            .await
            .map_err(map_error)
    }

    async fn fetch_favorites(&self, token: &AuthToken) -> RecipeApiResult<Vec<FavoriteRecipe>> {
        Self::fetch_favorites(self, token).await.map_err(map_error)
    }

    async fn fetch_user_rating(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
    ) -> RecipeApiResult<Option<UserRating>> {
        Self::fetch_user_rating(self, token, recipe_id)
            .await
            .map_err(map_error)
    }

    async fn submit_rating(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
        rating: RatingValue,
    ) -> RecipeApiResult<()> {
        Self::submit_rating(self, token, recipe_id, rating)
            .await
            .map_err(map_error)
    }

    async fn fetch_recipe_ratings<'a>(
        &self,
        token: Option<&'a AuthToken>,
        recipe_id: RecipeId,
    ) -> RecipeApiResult<Vec<UserRating>> {
        Self::fetch_recipe_ratings(self, token, recipe_id)
            .await
            .map_err(map_error)
    }

    async fn login(&self, credentials: &Credentials) -> RecipeApiResult<AuthSession> {
        Self::login(self, credentials).await.map_err(map_error)
    }

    async fn register(&self, credentials: &Credentials) -> RecipeApiResult<UserInfo> {
        Self::register(self, credentials).await.map_err(map_error)
    }

    async fn fetch_current_user(&self, token: &AuthToken) -> RecipeApiResult<UserInfo> {
        Self::fetch_current_user(self, token).await.map_err(map_error)
    }

    async fn update_current_user(
        &self,
        token: &AuthToken,
        profile: &UserInfo,
    ) -> RecipeApiResult<String> {
        Self::update_current_user(self, token, profile)
            .await
            .map_err(map_error)
    }

    async fn fetch_profile_image(&self, token: &AuthToken) -> RecipeImage {
        Self::fetch_profile_image(self, token).await
    }

    async fn upload_profile_image(
        &self,
        token: &AuthToken,
        image: &ImageUpload,
    ) -> RecipeApiResult<()> {
        Self::upload_profile_image(self, token, image)
            .await
            .map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use reqwest::Method;
    use serde_json::json;

    fn failed(status: u16, message: Option<&str>) -> ApiError {
        ApiError::RequestFailed {
            status,
            url: "http://localhost:8080/api/recipes/1".to_string(),
            message: message.map(ToString::to_string),
        }
    }

    #[test]
    fn test_map_error_auth_statuses() {
        for status in [401, 403] {
            match map_error(failed(status, Some("Token expired"))) {
                RecipeApiError::Unauthorized {
                    status: s,
                    message,
                } => {
                    assert_eq!(s, status);
                    assert_eq!(message, "Token expired");
                }
                other => panic!("Expected Unauthorized, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_map_error_404() {
        assert_eq!(
            map_error(failed(404, None)),
            RecipeApiError::NotFound {
                resource: "http://localhost:8080/api/recipes/1".to_string()
            }
        );
    }

    #[test]
    fn test_map_error_other_4xx() {
        match map_error(failed(409, None)) {
            RecipeApiError::Rejected { status, message } => {
                assert_eq!(status, 409);
                assert!(message.contains("/api/recipes/1"));
            }
            other => panic!("Expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_5xx() {
        assert!(matches!(
            map_error(failed(503, None)),
            RecipeApiError::Server { status: 503, .. }
        ));
    }

    #[test]
    fn test_map_error_local_failures() {
        let parse_error = serde_json::from_str::<i32>("x").unwrap_err();
        assert!(matches!(
            map_error(ApiError::JsonParse(parse_error)),
            RecipeApiError::InvalidResponse { .. }
        ));
        assert!(matches!(
            map_error(ApiError::InvalidBaseUrl {
                url: "data:x".to_string()
            }),
            RecipeApiError::Configuration { .. }
        ));
        assert_eq!(
            map_error(ApiError::InvalidRequest {
                message: "bad mime".to_string()
            }),
            RecipeApiError::InvalidInput {
                message: "bad mime".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_port_maps_errors() {
        let client = test_client(FakeBackend::new().with_default(CannedResponse::status(403)));
        let port: &dyn RecipeApiPort = &client;

        let err = port
            .fetch_favorites(&AuthToken::new("abc"))
            .await
            .unwrap_err();
        assert!(err.is_auth_failure());
    }

    #[tokio::test]
    async fn test_port_keeps_rating_fallback() {
        let client = test_client(FakeBackend::new().with_default(CannedResponse::status(500)));
        let port: &dyn RecipeApiPort = &client;

        let rating = port
            .fetch_user_rating(&AuthToken::new("abc"), RecipeId(1))
            .await
            .unwrap();
        assert!(rating.is_none());
    }

    #[tokio::test]
    async fn test_port_attaches_images() {
        let backend = FakeBackend::new()
            .with_response(
                Method::GET,
                "/api/recipes/lastRecipes",
                CannedResponse::json(&json!([
                    {"id": 1, "name": "Apfelkuchen"},
                    {"id": 2, "name": "Pilzrisotto"}
                ])),
            )
            .with_response(
                Method::GET,
                "/api/recipes/1/recipe-image",
                CannedResponse::bytes(&[0xFF]),
            );
        let client = test_client(backend);

        let mut listing = client.fetch_last_recipes(None).await.unwrap();
        let attached = unikitchen_core::attach_recipe_images(&client, listing.items_mut()).await;

        assert_eq!(attached, 1);
        assert_eq!(
            listing.items()[0].image_src.as_deref(),
            Some("data:image/jpeg;base64,/w==")
        );
        assert!(listing.items()[1].image_src.is_none());
    }
}
