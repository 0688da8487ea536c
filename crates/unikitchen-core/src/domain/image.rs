//! Recipe and profile images.
//!
//! Images come off the wire as raw bytes and are handed to callers as inline
//! `data:` URIs so they can be embedded without a second fetch.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::recipe::{RecipeDetails, RecipeId, RecipeOverview};

/// Prefix of every URI produced by [`jpeg_data_uri`].
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Encode image bytes as a JPEG `data:` URI.
///
/// The service always labels images as JPEG, so the MIME type is fixed.
pub fn jpeg_data_uri(bytes: &[u8]) -> String {
    let mut uri = String::with_capacity(JPEG_DATA_URI_PREFIX.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(JPEG_DATA_URI_PREFIX);
    STANDARD.encode_string(bytes, &mut uri);
    uri
}

/// Outcome of an image fetch.
///
/// Fetching an image never fails the caller's flow: anything that goes wrong
/// collapses into `Unavailable`, and the caller decides whether to show a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeImage {
    /// The image was downloaded and encoded.
    Loaded {
        /// `data:image/jpeg;base64,...`
        data_uri: String,
    },
    /// No image could be obtained.
    Unavailable,
}

impl RecipeImage {
    /// Build a loaded image from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::Loaded {
            data_uri: jpeg_data_uri(bytes),
        }
    }

    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    pub fn data_uri(&self) -> Option<&str> {
        match self {
            Self::Loaded { data_uri } => Some(data_uri),
            Self::Unavailable => None,
        }
    }

    pub fn into_data_uri(self) -> Option<String> {
        match self {
            Self::Loaded { data_uri } => Some(data_uri),
            Self::Unavailable => None,
        }
    }
}

/// A recipe value that can display an image.
pub trait RecipeImageSlot {
    /// Which recipe's image belongs in this slot.
    fn recipe_id(&self) -> RecipeId;

    /// Store the encoded image.
    fn set_image_src(&mut self, data_uri: String);
}

impl RecipeImageSlot for RecipeOverview {
    fn recipe_id(&self) -> RecipeId {
        self.id
    }

    fn set_image_src(&mut self, data_uri: String) {
        self.image_src = Some(data_uri);
    }
}

impl RecipeImageSlot for RecipeDetails {
    fn recipe_id(&self) -> RecipeId {
        self.id
    }

    fn set_image_src(&mut self, data_uri: String) {
        self.image_src = Some(data_uri);
    }
}

/// An image file to upload as the multipart field `image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Create an upload from in-memory bytes.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read an image from disk, guessing the content type from its extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}
