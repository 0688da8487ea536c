//! Recipe CRUD and listing operations.

use reqwest::Method;
use unikitchen_core::{
    AuthToken, ImageUpload, QueryParams, RecipeCreationRequest, RecipeDetails, RecipeId,
    RecipeListing, RecipeUpdateRequest,
};

use super::RecipeApiClient;
use crate::error::ApiResult;
use crate::http::{ApiRequest, HttpBackend};
use crate::url::Endpoint;

impl<B: HttpBackend> RecipeApiClient<B> {
    pub async fn create_recipe(
        &self,
        token: &AuthToken,
        request: &RecipeCreationRequest,
    ) -> ApiResult<RecipeDetails> {
        let url = self.url(Endpoint::Recipes, None)?;
        let request = ApiRequest::new(Method::POST, url)
            .with_auth(Some(token))
            .with_json(request)?;
        self.send_json(request).await
    }

    pub async fn update_recipe(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
        request: &RecipeUpdateRequest,
    ) -> ApiResult<RecipeDetails> {
        let url = self.url(Endpoint::Recipe(recipe_id), None)?;
        let request = ApiRequest::new(Method::PUT, url)
            .with_auth(Some(token))
            .with_json(request)?;
        self.send_json(request).await
    }

    pub async fn upload_recipe_image(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
        image: &ImageUpload,
    ) -> ApiResult<()> {
        let url = self.url(Endpoint::UploadRecipeImage(recipe_id), None)?;
        let request = ApiRequest::new(Method::POST, url)
            .with_auth(Some(token))
            .with_image(image);
        self.send_empty(request).await
    }

    pub async fn fetch_recipe_details(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
    ) -> ApiResult<RecipeDetails> {
        let url = self.url(Endpoint::Recipe(recipe_id), None)?;
        self.send_json(ApiRequest::new(Method::GET, url).with_auth(Some(token)))
            .await
    }

    pub async fn delete_recipe(&self, token: &AuthToken, recipe_id: RecipeId) -> ApiResult<()> {
        let url = self.url(Endpoint::Recipe(recipe_id), None)?;
        self.send_empty(ApiRequest::new(Method::DELETE, url).with_auth(Some(token)))
            .await
    }

    pub async fn fetch_last_recipes(&self, token: Option<&AuthToken>) -> ApiResult<RecipeListing> {
        let url = self.url(Endpoint::LastRecipes, None)?;
        self.send_json(ApiRequest::new(Method::GET, url).with_auth(token))
            .await
    }

    pub async fn fetch_filtered_recipes(
        &self,
        token: Option<&AuthToken>,
        params: &QueryParams,
    ) -> ApiResult<RecipeListing> {
        let url = self.url(Endpoint::FilteredRecipes, Some(params))?;
        self.send_json(ApiRequest::new(Method::GET, url).with_auth(token))
            .await
    }

    pub async fn fetch_user_recipes(&self, token: &AuthToken) -> ApiResult<RecipeListing> {
        let url = self.url(Endpoint::UserRecipes, None)?;
        self.send_json(ApiRequest::new(Method::GET, url).with_auth(Some(token)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use crate::error::ApiError;
    use crate::http::RequestBody;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;
    use unikitchen_core::{Category, DifficultyLevel, Ingredient, RecipeFilter};

    fn details_json(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Käsespätzle",
            "price": 4.5,
            "duration": 40,
            "difficultyLevel": "MITTEL",
            "category": "NUDELN",
            "preparation": "Teig schaben, Käse schichten.",
            "ingredients": [{"name": "Mehl", "quantity": 400.0, "unit": "g"}],
            "averageRating": 4.2,
            "isFavorite": false,
            "viewCount": 17,
            "ownerUsername": "anna"
        })
    }

    fn creation_request() -> RecipeCreationRequest {
        RecipeCreationRequest {
            name: "Käsespätzle".to_string(),
            price: Some(4.5),
            duration: Some(40),
            difficulty_level: Some(DifficultyLevel::Medium),
            category: Some(Category::Pasta),
            preparation: Some("Teig schaben, Käse schichten.".to_string()),
            ingredients: vec![Ingredient {
                name: "Mehl".to_string(),
                quantity: Some(400.0),
                unit: Some("g".to_string()),
            }],
        }
    }

    #[tokio::test]
    async fn test_create_recipe_posts_json_with_bearer() {
        let backend = FakeBackend::new().with_response(
            Method::POST,
            "/api/recipes",
            CannedResponse::json(&details_json(11)),
        );
        let client = test_client(backend.clone());
        let token = AuthToken::new("abc");

        let created = client
            .create_recipe(&token, &creation_request())
            .await
            .unwrap();
        assert_eq!(created.id, RecipeId(11));
        assert_eq!(created.category, Some(Category::Pasta));

        let request = backend.single_request();
        assert_eq!(request.authorization.as_deref(), Some("Bearer abc"));
        let RequestBody::Json(body) = request.body else {
            panic!("expected JSON body");
        };
        assert_eq!(body["difficultyLevel"], "MITTEL");
        assert_eq!(body["category"], "NUDELN");
        assert_eq!(body["ingredients"][0]["unit"], "g");
    }

    #[tokio::test]
    async fn test_update_recipe_puts_to_recipe_path() {
        let backend = FakeBackend::new().with_response(
            Method::PUT,
            "/api/recipes/11",
            CannedResponse::json(&details_json(11)),
        );
        let client = test_client(backend.clone());
        let details: RecipeDetails = serde_json::from_value(details_json(11)).unwrap();

        let updated = client
            .update_recipe(
                &AuthToken::new("abc"),
                RecipeId(11),
                &RecipeUpdateRequest::from(&details),
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Käsespätzle");
        assert_eq!(backend.single_request().method, Method::PUT);
    }

    #[tokio::test]
    async fn test_upload_recipe_image_sends_multipart() {
        let backend = FakeBackend::new().with_response(
            Method::POST,
            "/api/recipes/5/upload-recipe-image",
            CannedResponse::status(200),
        );
        let client = test_client(backend.clone());
        let image = ImageUpload::new("cake.jpg", "image/jpeg", vec![0xFF, 0xD8]);

        client
            .upload_recipe_image(&AuthToken::new("abc"), RecipeId(5), &image)
            .await
            .unwrap();

        let request = backend.single_request();
        assert_eq!(request.body, RequestBody::Multipart(image));
        assert_eq!(request.authorization.as_deref(), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_fetch_details_not_found() {
        let client = test_client(FakeBackend::new());

        let err = client
            .fetch_recipe_details(&AuthToken::new("abc"), RecipeId(99))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_delete_recipe() {
        let backend = FakeBackend::new().with_response(
            Method::DELETE,
            "/api/recipes/3",
            CannedResponse::status(204),
        );
        let client = test_client(backend.clone());

        client
            .delete_recipe(&AuthToken::new("abc"), RecipeId(3))
            .await
            .unwrap();
        assert_eq!(backend.single_request().body, RequestBody::Empty);
    }

    #[tokio::test]
    async fn test_last_recipes_anonymous_has_no_header() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/recipes/lastRecipes",
            CannedResponse::json(&json!([{"id": 1, "name": "Risotto", "category": "REIS"}])),
        );
        let client = test_client(backend.clone());

        let listing = client.fetch_last_recipes(None).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert!(backend.single_request().authorization.is_none());
    }

    #[tokio::test]
    async fn test_last_recipes_with_token_sends_header() {
        let backend = FakeBackend::new()
            .with_default(CannedResponse::json(&json!([])));
        let client = test_client(backend.clone());

        let listing = client
            .fetch_last_recipes(Some(&AuthToken::new("abc")))
            .await
            .unwrap();
        assert!(listing.is_empty());
        assert_eq!(
            backend.single_request().authorization.as_deref(),
            Some("Bearer abc")
        );
    }

    #[tokio::test]
    async fn test_filtered_recipes_forwards_query_and_decodes_page() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/recipes/filtered",
            CannedResponse::json(&json!({
                "content": [{"id": 2, "name": "Apfelkuchen", "category": "KUCHEN"}],
                "totalElements": 1,
                "totalPages": 1,
                "number": 0,
                "size": 10,
                "last": true
            })),
        );
        let client = test_client(backend.clone());
        let filter = RecipeFilter::new()
            .with_category(Category::Cake)
            .with_cheap(true);

        let listing = client
            .fetch_filtered_recipes(None, &filter.to_query())
            .await
            .unwrap();
        assert_eq!(listing.items()[0].category, Some(Category::Cake));
        assert_eq!(listing.page().map(|p| p.total_elements), Some(1));

        let request = backend.single_request();
        assert_eq!(request.url.query(), Some("category=KUCHEN&cheap=true"));
        assert!(request.authorization.is_none());
    }

    #[tokio::test]
    async fn test_user_recipes_unauthorized() {
        let client = test_client(FakeBackend::new().with_default(CannedResponse::status(401)));

        let err = client
            .fetch_user_recipes(&AuthToken::new("expired"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 401, .. }));
    }
}
