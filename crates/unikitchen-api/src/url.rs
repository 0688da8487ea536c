//! URL construction helpers for the recipe service.
//!
//! Every endpoint path is listed once in [`Endpoint`] and appended to the
//! configured base URL segment by segment, so a base with a path prefix
//! (`https://host/kitchen`) keeps that prefix.

use unikitchen_core::{QueryParams, RecipeId};
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Query parameter carrying the submitted rating.
pub const RATING_VALUE_PARAM: &str = "ratingValue";

/// Service endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Recipes,
    Recipe(RecipeId),
    RecipeImage(RecipeId),
    UploadRecipeImage(RecipeId),
    LastRecipes,
    FilteredRecipes,
    UserRecipes,
    ToggleFavorite(RecipeId),
    CurrentFavorites,
    RecipeRatings(RecipeId),
    UserRating(RecipeId),
    Login,
    Register,
    CurrentUser,
    ProfileImage,
}

impl Endpoint {
    /// Path segments below the base URL.
    fn segments(self) -> Vec<String> {
        let fixed = |parts: &[&str]| parts.iter().map(ToString::to_string).collect::<Vec<_>>();
        let with_id = |head: &[&str], id: RecipeId, tail: &[&str]| {
            let mut segments = fixed(head);
            segments.push(id.to_string());
            segments.extend(tail.iter().map(ToString::to_string));
            segments
        };

        match self {
            Self::Recipes => fixed(&["api", "recipes"]),
            Self::Recipe(id) => with_id(&["api", "recipes"], id, &[]),
            Self::RecipeImage(id) => with_id(&["api", "recipes"], id, &["recipe-image"]),
            Self::UploadRecipeImage(id) => {
                with_id(&["api", "recipes"], id, &["upload-recipe-image"])
            }
            Self::LastRecipes => fixed(&["api", "recipes", "lastRecipes"]),
            Self::FilteredRecipes => fixed(&["api", "recipes", "filtered"]),
            Self::UserRecipes => fixed(&["api", "recipes", "user"]),
            Self::ToggleFavorite(id) => with_id(&["api", "favorites", "toggle"], id, &[]),
            Self::CurrentFavorites => fixed(&["api", "favorites", "current"]),
            Self::RecipeRatings(id) => with_id(&["api", "ratings", "recipe"], id, &[]),
            Self::UserRating(id) => with_id(&["api", "ratings", "recipe"], id, &["user"]),
            Self::Login => fixed(&["api", "auth", "login"]),
            Self::Register => fixed(&["api", "auth", "register"]),
            Self::CurrentUser => fixed(&["api", "users", "current-user"]),
            Self::ProfileImage => fixed(&["api", "users", "current", "profile-image"]),
        }
    }
}

/// Parse and validate the configured base URL.
///
/// Rejects URLs that cannot carry a path, such as `mailto:` or `data:`.
pub fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
        });
    }
    Ok(url)
}

/// Build the full URL for `endpoint`, appending `query` pairs in order.
pub fn build_url(base: &Url, endpoint: Endpoint, query: Option<&QueryParams>) -> ApiResult<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidBaseUrl {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(endpoint.segments());

    if let Some(params) = query.filter(|p| !p.is_empty()) {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url)
}
