//! Turn the ingredients you have on hand into AI-suggested recipes.
//!
//! The [`Chef`] type drives two workflows against a completion proxy
//! endpoint: generating recipe suggestions from an ingredient list, and
//! scanning a photo for ingredients to add to that list. Both parse the
//! model's free-form reply into typed results, all-or-nothing.
//!
//! ```no_run
//! # use pantry_chef::{Chef, ChefConfig};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut chef = Chef::new(ChefConfig::load()?);
//! chef.add_ingredient("chicken breast");
//! chef.add_ingredient("rice");
//!
//! for recipe in chef.generate_recipes().await? {
//!     println!("{}: {}", recipe.name, recipe.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod pantry;
pub mod parse;
pub mod prompt;
pub mod workflow;

pub use client::{
    CompletionBackend, ContentBlock, ImageSource, Message, MessageContent, ProxyClient,
};
pub use config::{load_config, ChefConfig, MAX_RECIPE_COUNT, MIN_RECIPE_COUNT};
pub use error::ChefError;
pub use model::{CreativityLevel, Difficulty, ImagePayload, RecipeSuggestion};
pub use pantry::IngredientStore;
pub use parse::{parse_ingredients, parse_recipes};
pub use workflow::{Chef, WorkflowStatus};

/// One-shot recipe generation with configuration loaded from file and
/// environment.
pub async fn suggest_recipes(ingredients: &[&str]) -> Result<Vec<RecipeSuggestion>, ChefError> {
    let mut chef = Chef::new(ChefConfig::load()?);
    for name in ingredients {
        chef.add_ingredient(name);
    }
    Ok(chef.generate_recipes().await?.to_vec())
}

/// One-shot ingredient scan of an image file with configuration loaded
/// from file and environment.
pub async fn scan_image(path: impl AsRef<std::path::Path>) -> Result<Vec<String>, ChefError> {
    let mut chef = Chef::new(ChefConfig::load()?);
    Ok(chef.scan_ingredients_from_path(path).await?.to_vec())
}
