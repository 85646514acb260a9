use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Smallest number of recipes a single request may ask for
pub const MIN_RECIPE_COUNT: u8 = 3;
/// Largest number of recipes a single request may ask for
pub const MAX_RECIPE_COUNT: u8 = 10;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ChefConfig {
    /// URL of the inference proxy endpoint (holds the API key server-side)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// How many recipes to ask for per generation
    #[serde(default = "default_recipe_count")]
    pub recipe_count: u8,
    /// Whether to discard recipes the model returns beyond the requested count
    #[serde(default = "default_enforce_count_cap")]
    pub enforce_count_cap: bool,
    /// Whether adding an ingredient already in the list is silently skipped
    #[serde(default)]
    pub reject_duplicates: bool,
    /// Staples assumed to be on hand; the model may use them freely
    #[serde(default = "default_pantry")]
    pub pantry: Vec<String>,
}

impl Default for ChefConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            recipe_count: default_recipe_count(),
            enforce_count_cap: default_enforce_count_cap(),
            reject_duplicates: false,
            pantry: default_pantry(),
        }
    }
}

/// Clamp a requested recipe count into the supported range.
pub fn clamp_count(count: u8) -> u8 {
    count.clamp(MIN_RECIPE_COUNT, MAX_RECIPE_COUNT)
}

// Default value functions
fn default_endpoint() -> String {
    "http://localhost:8888/.netlify/functions/anthropic".to_string()
}

fn default_recipe_count() -> u8 {
    5
}

fn default_enforce_count_cap() -> bool {
    true
}

fn default_pantry() -> Vec<String> {
    vec![
        "salt".to_string(),
        "pepper".to_string(),
        "onion".to_string(),
        "cheese".to_string(),
        "garlic powder".to_string(),
        "onion powder".to_string(),
    ]
}

impl ChefConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRY_CHEF__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRY_CHEF__ENDPOINT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// The configured recipe count, clamped into the supported range.
    pub fn clamped_recipe_count(&self) -> u8 {
        clamp_count(self.recipe_count)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with PANTRY_CHEF__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: PANTRY_CHEF__RECIPE_COUNT
pub fn load_config() -> Result<ChefConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Environment variables with PANTRY_CHEF_ prefix
        // Use double underscore for nested: PANTRY_CHEF__RECIPE_COUNT
        .add_source(
            Environment::with_prefix("PANTRY_CHEF")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
