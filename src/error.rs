use thiserror::Error;

/// Errors that can occur while generating recipes or scanning ingredients
#[derive(Error, Debug)]
pub enum ChefError {
    /// A workflow was started with an empty ingredient list
    #[error("No ingredients to cook with")]
    EmptyIngredients,

    /// A workflow was started while its previous request is still in flight
    #[error("A request is already in flight")]
    RequestInFlight,

    /// Failed to reach the inference endpoint
    #[error("Failed to reach inference endpoint: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The inference endpoint answered with a non-success status
    #[error("Inference endpoint returned {status}: {body}")]
    ApiError { status: u16, body: String },

    /// The model reply contained no parseable JSON array
    #[error("Failed to parse model response: {reason}")]
    MalformedResponse { reason: String, raw: String },

    /// The model reply parsed cleanly but held no entries
    #[error("Model returned no results")]
    EmptyResult,

    /// An image file extension we cannot map to a media type
    #[error("Unsupported image type: {0}")]
    UnsupportedImage(String),

    /// Failed to read an image file from disk
    #[error("Failed to read image file: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl ChefError {
    /// Build a `MalformedResponse` that keeps the offending text for diagnostics.
    pub(crate) fn malformed(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        ChefError::MalformedResponse {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    /// A message suitable for showing directly to the user, naming the likely
    /// cause and suggesting a remedy.
    pub fn user_message(&self) -> String {
        match self {
            ChefError::EmptyIngredients => {
                "Add at least one ingredient before generating recipes.".to_string()
            }
            ChefError::RequestInFlight => {
                "Hold on - the previous request is still being processed.".to_string()
            }
            ChefError::NetworkError(_) | ChefError::ApiError { .. } => format!(
                "Could not reach the recipe service: {self}\n\nCheck your connection and try again."
            ),
            ChefError::MalformedResponse { .. } | ChefError::EmptyResult => format!(
                "Could not generate recipes: {self}\n\nTry using fewer ingredients or reducing the number of recipes."
            ),
            other => other.to_string(),
        }
    }
}
