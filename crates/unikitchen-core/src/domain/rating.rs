//! Recipe ratings.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::recipe::RecipeId;

/// Rating value rejected before it reached the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating must be between {min} and {max}, got {value}", min = RatingValue::MIN, max = RatingValue::MAX)]
pub struct InvalidRating {
    pub value: i64,
}

/// A star rating between 1 and 5, checked before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RatingValue(u8);

impl RatingValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, InvalidRating> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(InvalidRating { value }),
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = InvalidRating;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RatingValue> for i64 {
    fn from(value: RatingValue) -> Self {
        Self::from(value.0)
    }
}

impl FromStr for RatingValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|e| format!("invalid rating '{s}': {e}"))?;
        Self::new(raw).map_err(|e| e.to_string())
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rating as stored by the service.
///
/// The per-user lookup only guarantees `ratingValue`; the other fields are
/// present when the service sends its full rating record. Stored values are
/// taken as they come, even outside `1..=5`; only [`RatingValue`] is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRating {
    pub rating_value: i64,
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub recipe_id: Option<RecipeId>,
    pub created_at: Option<NaiveDateTime>,
}
