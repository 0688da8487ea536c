//! Recipe transport types.
//!
//! These mirror the JSON shapes the recipe service sends and accepts. The
//! client never enforces invariants on them beyond what serde requires.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Identifiers
// ============================================================================

/// Backend identifier of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub i64);

impl RecipeId {
    /// Wrap a raw backend identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecipeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// A wire value that matched no known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    /// Which enumeration was being decoded
    pub kind: &'static str,
    /// The rejected value
    pub value: String,
}

/// Recipe category.
///
/// The service speaks German upper-case names and accepts any casing on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    #[serde(rename = "KUCHEN")]
    Cake,
    #[serde(rename = "NUDELN")]
    Pasta,
    #[serde(rename = "REIS")]
    Rice,
    #[serde(rename = "FLEISCH")]
    Meat,
    #[serde(rename = "VEGETARISCH")]
    Vegetarian,
}

impl Category {
    /// All categories in the order the service declares them.
    pub const ALL: [Self; 5] = [
        Self::Cake,
        Self::Pasta,
        Self::Rice,
        Self::Meat,
        Self::Vegetarian,
    ];

    /// The value used on the wire and in query strings.
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::Cake => "KUCHEN",
            Self::Pasta => "NUDELN",
            Self::Rice => "REIS",
            Self::Meat => "FLEISCH",
            Self::Vegetarian => "VEGETARISCH",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_api_str() == upper)
            .ok_or_else(|| UnknownVariant {
                kind: "category",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// How hard a recipe is to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DifficultyLevel {
    #[serde(rename = "EINFACH")]
    Easy,
    #[serde(rename = "MITTEL")]
    Medium,
    #[serde(rename = "SCHWIERIG")]
    Hard,
}

impl DifficultyLevel {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The value used on the wire and in query strings.
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::Easy => "EINFACH",
            Self::Medium => "MITTEL",
            Self::Hard => "SCHWIERIG",
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_api_str() == upper)
            .ok_or_else(|| UnknownVariant {
                kind: "difficulty level",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for DifficultyLevel {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

// ============================================================================
// Read-side DTOs
// ============================================================================

/// One ingredient line of a recipe.
///
/// Quantity and unit are nullable on the server ("Salz nach Geschmack").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Recipe as it appears in list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeOverview {
    pub id: RecipeId,
    pub name: String,
    pub price: Option<f64>,
    /// Preparation time in minutes
    pub duration: Option<u32>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub category: Option<Category>,
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default, alias = "favorite")]
    pub is_favorite: bool,
    /// Inline `data:` URI of the recipe image, filled in by the client
    #[serde(skip)]
    pub image_src: Option<String>,
}

/// Full recipe as returned by the details, create and update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub id: RecipeId,
    pub name: String,
    pub price: Option<f64>,
    pub duration: Option<u32>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub category: Option<Category>,
    pub preparation: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    pub average_rating: Option<f64>,
    #[serde(default, alias = "favorite")]
    pub is_favorite: bool,
    #[serde(default)]
    pub view_count: u32,
    pub owner_username: Option<String>,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(skip)]
    pub image_src: Option<String>,
}

/// One page of a paged listing, in the shape Spring Data serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePage {
    pub content: Vec<RecipeOverview>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub last: bool,
}

/// Response of the list endpoints.
///
/// Depending on the endpoint the service answers with either a bare array
/// or a page object; both decode into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeListing {
    Items(Vec<RecipeOverview>),
    Page(RecipePage),
}

impl RecipeListing {
    /// Recipes in server order.
    pub fn items(&self) -> &[RecipeOverview] {
        match self {
            Self::Items(items) => items,
            Self::Page(page) => &page.content,
        }
    }

    /// Mutable access, e.g. for attaching images.
    pub fn items_mut(&mut self) -> &mut [RecipeOverview] {
        match self {
            Self::Items(items) => items,
            Self::Page(page) => &mut page.content,
        }
    }

    pub fn into_items(self) -> Vec<RecipeOverview> {
        match self {
            Self::Items(items) => items,
            Self::Page(page) => page.content,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Page metadata, if the service sent a page object.
    pub const fn page(&self) -> Option<&RecipePage> {
        match self {
            Self::Items(_) => None,
            Self::Page(page) => Some(page),
        }
    }
}

// ============================================================================
// Write-side DTOs
// ============================================================================

/// Body of `POST /api/recipes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCreationRequest {
    pub name: String,
    pub price: Option<f64>,
    pub duration: Option<u32>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub category: Option<Category>,
    pub preparation: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// Body of `PUT /api/recipes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeUpdateRequest {
    pub id: Option<RecipeId>,
    pub name: String,
    pub price: Option<f64>,
    pub duration: Option<u32>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub category: Option<Category>,
    pub preparation: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl From<&RecipeDetails> for RecipeUpdateRequest {
    fn from(details: &RecipeDetails) -> Self {
        Self {
            id: Some(details.id),
            name: details.name.clone(),
            price: details.price,
            duration: details.duration,
            difficulty_level: details.difficulty_level,
            category: details.category,
            preparation: details.preparation.clone(),
            ingredients: details.ingredients.clone(),
        }
    }
}
