//! Recipe service client.
//!
//! This module provides the main client interface. Operations are grouped by
//! resource in the submodules; this file holds construction and the shared
//! send/decode path every operation goes through.

mod favorites;
mod images;
mod ratings;
mod recipes;
mod users;

use serde::de::DeserializeOwned;
use unikitchen_core::QueryParams;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{ApiRequest, ApiResponse, HttpBackend, ReqwestBackend};
use crate::parsing::{extract_error_message, parse_json};
use crate::url::{Endpoint, build_url, parse_base_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default recipe client using the reqwest HTTP backend.
pub type DefaultRecipeApiClient = RecipeApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the UniKitchen recipe service.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultRecipeApiClient` for production code. The client is stateless
/// apart from the base URL; tokens are passed to each call.
pub struct RecipeApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultRecipeApiClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// built.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let base_url = parse_base_url(config.base_url())?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, base_url })
    }

    /// Create a client from `UNIKITCHEN_API_URL` / `UNIKITCHEN_TIMEOUT_SECS`.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(&ClientConfig::from_env())
    }
}

impl<B: HttpBackend> RecipeApiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn url(&self, endpoint: Endpoint, query: Option<&QueryParams>) -> ApiResult<Url> {
        build_url(&self.base_url, endpoint, query)
    }

    /// Execute a request, failing on any non-2xx status.
    pub(crate) async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = request.url.to_string();
        let response = self.backend.execute(request).await?;
        ensure_success(url, response)
    }

    /// Execute a request and decode its JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let response = self.send(request).await?;
        parse_json(&response.body)
    }

    /// Execute a request whose body is irrelevant.
    pub(crate) async fn send_empty(&self, request: ApiRequest) -> ApiResult<()> {
        self.send(request).await.map(drop)
    }
}

fn ensure_success(url: String, response: ApiResponse) -> ApiResult<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ApiError::RequestFailed {
        status: response.status,
        url,
        message: extract_error_message(&response.body),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use reqwest::Method;
    use serde_json::json;

    pub fn test_client(backend: FakeBackend) -> RecipeApiClient<FakeBackend> {
        RecipeApiClient::with_backend(
            parse_base_url("http://localhost:8080").unwrap(),
            backend,
        )
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultRecipeApiClient::new(&ClientConfig::new()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_client_rejects_bad_base_url() {
        let result = DefaultRecipeApiClient::new(&ClientConfig::new().with_base_url("::nope"));
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_send_maps_error_status() {
        let client = test_client(FakeBackend::new().with_default(
            CannedResponse::status(400).with_body(&json!({"message": "Name must not be empty"})),
        ));
        let url = client.url(Endpoint::Recipes, None).unwrap();

        let err = client
            .send(ApiRequest::new(Method::POST, url))
            .await
            .unwrap_err();

        match err {
            ApiError::RequestFailed {
                status,
                url,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(url, "http://localhost:8080/api/recipes");
                assert_eq!(message.as_deref(), Some("Name must not be empty"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_json_decodes_body() {
        let client = test_client(
            FakeBackend::new().with_default(CannedResponse::json(&json!([1, 2, 3]))),
        );
        let url = client.url(Endpoint::LastRecipes, None).unwrap();

        let values: Vec<i64> = client
            .send_json(ApiRequest::new(Method::GET, url))
            .await
            .unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
