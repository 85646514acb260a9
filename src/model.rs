use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ChefError;

/// Base URL for recipe display images; the search term goes in the query string
const IMAGE_SEARCH_BASE: &str = "https://source.unsplash.com/400x400/";

/// How demanding a suggested recipe is to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "Easy")]
    Easy,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "Hard")]
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// How far a suggestion departs from the user's exact ingredient set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreativityLevel {
    #[serde(alias = "Simple")]
    Simple,
    #[serde(alias = "Creative")]
    Creative,
    #[serde(alias = "Gourmet")]
    Gourmet,
}

impl std::fmt::Display for CreativityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Creative => write!(f, "creative"),
            Self::Gourmet => write!(f, "gourmet"),
        }
    }
}

/// A single recipe suggestion parsed from a model response
///
/// Field names follow the camelCase keys the model is instructed to emit.
/// Immutable once parsed; a new generation replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSuggestion {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    /// Free-text cooking duration, e.g. "25 minutes"
    pub time: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creativity_level: Option<CreativityLevel>,
    /// Extra ingredients not in the user's pool that would elevate the dish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_additions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    /// Short phrase for finding a display image, e.g. "fried rice chicken"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_search_term: Option<String>,
}

impl RecipeSuggestion {
    /// URL of a display image for this suggestion.
    ///
    /// Built from the model-provided search term, falling back to the recipe
    /// name when the term is absent or empty.
    pub fn image_url(&self) -> String {
        let term = self
            .image_search_term
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.name);
        let mut url = reqwest::Url::parse(IMAGE_SEARCH_BASE).unwrap();
        url.set_query(Some(term));
        url.to_string()
    }
}

/// An image handed to the ingredient scanner, base64-encoded with its media type
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub media_type: String,
    pub data: String,
}

impl ImagePayload {
    /// Wrap already-encoded base64 data.
    pub fn new(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw image bytes.
    pub fn from_bytes(media_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            media_type: media_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Read and encode an image file, inferring the media type from its
    /// extension.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the extension maps to
    /// no supported image type.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ChefError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| ChefError::UnsupportedImage(path.display().to_string()))?;
        let media_type = media_type_for_extension(&extension)
            .ok_or_else(|| ChefError::UnsupportedImage(extension.clone()))?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_bytes(media_type, &bytes))
    }
}

/// Map a lowercase file extension to its image media type.
pub fn media_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}
