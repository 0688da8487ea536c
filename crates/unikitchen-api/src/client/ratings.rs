//! Rating operations.

use reqwest::Method;
use tracing::info;
use unikitchen_core::{AuthToken, QueryParams, RatingValue, RecipeId, UserRating};

use super::RecipeApiClient;
use crate::error::{ApiError, ApiResult};
use crate::http::{ApiRequest, HttpBackend};
use crate::url::{Endpoint, RATING_VALUE_PARAM};

/// Whether a failed rating lookup means "this user has not rated yet".
///
/// The service has no dedicated status for a missing rating and answers with
/// a plain 500 instead. Only that exact status counts; 4xx and other 5xx
/// are real failures.
pub fn is_unrated_signal(error: &ApiError) -> bool {
    error.status() == Some(500)
}

impl<B: HttpBackend> RecipeApiClient<B> {
    /// The user's rating of a recipe, `None` if they have not rated it.
    pub async fn fetch_user_rating(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
    ) -> ApiResult<Option<UserRating>> {
        let url = self.url(Endpoint::UserRating(recipe_id), None)?;
        match self
            .send_json(ApiRequest::new(Method::GET, url).with_auth(Some(token)))
            .await
        {
            Ok(rating) => Ok(Some(rating)),
            Err(e) if is_unrated_signal(&e) => {
                info!(recipe_id = %recipe_id, "no rating yet, service answered 500");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Submit a rating. The value travels as `?ratingValue=N`; the body is empty.
    pub async fn submit_rating(
        &self,
        token: &AuthToken,
        recipe_id: RecipeId,
        rating: RatingValue,
    ) -> ApiResult<()> {
        let query = QueryParams::new().with(RATING_VALUE_PARAM, rating.get());
        let url = self.url(Endpoint::RecipeRatings(recipe_id), Some(&query))?;
        self.send_empty(ApiRequest::new(Method::POST, url).with_auth(Some(token)))
            .await
    }

    pub async fn fetch_recipe_ratings(
        &self,
        token: Option<&AuthToken>,
        recipe_id: RecipeId,
    ) -> ApiResult<Vec<UserRating>> {
        let url = self.url(Endpoint::RecipeRatings(recipe_id), None)?;
        self.send_json(ApiRequest::new(Method::GET, url).with_auth(token))
            .await
    }
}
