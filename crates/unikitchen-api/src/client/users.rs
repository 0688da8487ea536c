//! Authentication and profile operations.

use reqwest::Method;
use unikitchen_core::{AuthSession, AuthToken, Credentials, ImageUpload, UserInfo};

use super::RecipeApiClient;
use crate::error::ApiResult;
use crate::http::{ApiRequest, HttpBackend};
use crate::parsing::parse_text;
use crate::url::Endpoint;

impl<B: HttpBackend> RecipeApiClient<B> {
    /// Exchange credentials for a token. Sent without an `Authorization` header.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<AuthSession> {
        let url = self.url(Endpoint::Login, None)?;
        self.send_json(ApiRequest::new(Method::POST, url).with_json(credentials)?)
            .await
    }

    pub async fn register(&self, credentials: &Credentials) -> ApiResult<UserInfo> {
        let url = self.url(Endpoint::Register, None)?;
        self.send_json(ApiRequest::new(Method::POST, url).with_json(credentials)?)
            .await
    }

    pub async fn fetch_current_user(&self, token: &AuthToken) -> ApiResult<UserInfo> {
        let url = self.url(Endpoint::CurrentUser, None)?;
        self.send_json(ApiRequest::new(Method::GET, url).with_auth(Some(token)))
            .await
    }

    /// Update username and bio. Returns the confirmation text the service sends.
    pub async fn update_current_user(
        &self,
        token: &AuthToken,
        profile: &UserInfo,
    ) -> ApiResult<String> {
        let url = self.url(Endpoint::CurrentUser, None)?;
        let request = ApiRequest::new(Method::PUT, url)
            .with_auth(Some(token))
            .with_json(profile)?;
        let response = self.send(request).await?;
        Ok(parse_text(&response.body))
    }

    pub async fn upload_profile_image(
        &self,
        token: &AuthToken,
        image: &ImageUpload,
    ) -> ApiResult<()> {
        let url = self.url(Endpoint::ProfileImage, None)?;
        self.send_empty(
            ApiRequest::new(Method::POST, url)
                .with_auth(Some(token))
                .with_image(image),
        )
        .await
    }
}
