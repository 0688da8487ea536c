//! HTTP backend abstraction for the recipe API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and sends every request exactly once.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::debug;
use unikitchen_core::{AuthToken, ImageUpload};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Multipart field name the service reads uploaded images from.
pub const IMAGE_FIELD: &str = "image";

// ============================================================================
// Request / Response
// ============================================================================

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body at all
    Empty,
    /// JSON document, sent with `Content-Type: application/json`
    Json(serde_json::Value),
    /// Single-file multipart form under [`IMAGE_FIELD`]
    Multipart(ImageUpload),
}

/// A fully built request, independent of the HTTP library.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// Complete `Authorization` header value, if any
    pub authorization: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub const fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            authorization: None,
            body: RequestBody::Empty,
        }
    }

    /// Attach `Authorization: Bearer <token>` when a token is given.
    #[must_use]
    pub fn with_auth(mut self, token: Option<&AuthToken>) -> Self {
        self.authorization = token.map(AuthToken::bearer_header_value);
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> ApiResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_image(mut self, image: &ImageUpload) -> Self {
        self.body = RequestBody::Multipart(image.clone());
        self
    }
}

/// Raw response: status plus the complete body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that execute [`ApiRequest`]s.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// Backends report every status, success or not; interpreting the status is
/// the client's job. Only transport failures are errors here.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// This is an implementation detail - external code should use
/// `DefaultRecipeApiClient` through the `RecipeApiPort` trait.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    fn build_multipart(image: ImageUpload) -> ApiResult<Form> {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)
            .map_err(|e| ApiError::InvalidRequest {
                message: format!("invalid image content type: {e}"),
            })?;
        Ok(Form::new().part(IMAGE_FIELD, part))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        debug!(
            method = %request.method,
            url = %request.url,
            authenticated = request.authorization.is_some(),
            "sending request"
        );

        let mut builder = self.client.request(request.method, request.url);
        if let Some(value) = request.authorization {
            builder = builder.header(AUTHORIZATION, value);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(image) => builder.multipart(Self::build_multipart(image)?),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(status, bytes = body.len(), "received response");
        Ok(ApiResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
