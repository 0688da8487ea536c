//! Favorite operations.

use reqwest::Method;
use unikitchen_core::{AuthToken, FavoriteRecipe, RecipeId};

use super::RecipeApiClient;
use crate::error::ApiResult;
use crate::http::{ApiRequest, HttpBackend};
use crate::parsing::decode_verbatim;
use crate::url::Endpoint;

impl<B: HttpBackend> RecipeApiClient<B> {
    /// Flip the favorite flag. Sends a single PUT without a body.
    ///
    /// The service's answer has no fixed shape, so it is returned as decoded
    /// by [`decode_verbatim`].
    pub async fn toggle_favorite(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
    ) -> ApiResult<serde_json::Value> {
        let url = self.url(Endpoint::ToggleFavorite(recipe_id), None)?;
        let response = self
            .send(ApiRequest::new(Method::PUT, url).with_auth(Some(token)))
            .await?;
        Ok(decode_verbatim(&response.body))
    }

    pub async fn fetch_favorites(&self, token: &AuthToken) -> ApiResult<Vec<FavoriteRecipe>> {
        let url = self.url(Endpoint::CurrentFavorites, None)?;
        self.send_json(ApiRequest::new(Method::GET, url).with_auth(Some(token)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use crate::http::RequestBody;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_toggle_sends_one_bodyless_put() {
        let backend = FakeBackend::new().with_response(
            Method::PUT,
            "/api/favorites/toggle/8",
            CannedResponse::json(&json!({"favorite": true})),
        );
        let client = test_client(backend.clone());

        let answer = client
            .toggle_favorite(&AuthToken::new("abc"), RecipeId(8))
            .await
            .unwrap();
        assert_eq!(answer, json!({"favorite": true}));

        let request = backend.single_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.body, RequestBody::Empty);
        assert_eq!(request.authorization.as_deref(), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_toggle_returns_text_answer() {
        let client = test_client(
            FakeBackend::new().with_default(CannedResponse::text("Favorite removed")),
        );

        let answer = client
            .toggle_favorite(&AuthToken::new("abc"), RecipeId(8))
            .await
            .unwrap();
        assert_eq!(answer, Value::String("Favorite removed".to_string()));
    }

    #[tokio::test]
    async fn test_toggle_empty_answer_is_null() {
        let client = test_client(FakeBackend::new().with_default(CannedResponse::status(200)));

        let answer = client
            .toggle_favorite(&AuthToken::new("abc"), RecipeId(8))
            .await
            .unwrap();
        assert_eq!(answer, Value::Null);
    }

    #[tokio::test]
    async fn test_fetch_favorites() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/favorites/current",
            CannedResponse::json(&json!([
                {"recipeId": 1, "recipeName": "Apfelstrudel", "category": "KUCHEN"},
                {"recipeId": 2, "recipeName": "Linsensuppe", "category": "VEGETARISCH"}
            ])),
        );
        let client = test_client(backend);

        let favorites = client
            .fetch_favorites(&AuthToken::new("abc"))
            .await
            .unwrap();
        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites[1].recipe_name, "Linsensuppe");
    }
}
