use log::debug;

use crate::client::{CompletionBackend, ProxyClient};
use crate::config::{clamp_count, ChefConfig};
use crate::error::ChefError;
use crate::model::{ImagePayload, RecipeSuggestion};
use crate::pantry::IngredientStore;
use crate::{parse, prompt};

/// Where a workflow currently sits between user triggers
///
/// `Pending` is observable while a request is in flight; success and
/// failure are reported through the triggering call's return value, after
/// which the workflow is `Idle` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStatus {
    /// No request in flight; triggering is allowed
    #[default]
    Idle,
    /// A request is in flight; re-triggering is refused
    Pending,
}

/// Drives the two workflows: recipe generation and ingredient scanning.
///
/// Owns the ingredient list and the current recipe suggestions, and
/// guarantees that neither is ever mutated by a failed or partial
/// response. Each workflow allows at most one request in flight.
pub struct Chef {
    config: ChefConfig,
    store: IngredientStore,
    recipes: Vec<RecipeSuggestion>,
    backend: Box<dyn CompletionBackend>,
    generation: WorkflowStatus,
    scan: WorkflowStatus,
}

impl Chef {
    /// Create a chef talking to the configured proxy endpoint.
    ///
    /// # Example
    /// ```
    /// use pantry_chef::{Chef, ChefConfig};
    ///
    /// let mut chef = Chef::new(ChefConfig::default());
    /// chef.add_ingredient("chicken breast");
    /// assert_eq!(chef.ingredients(), ["chicken breast"]);
    /// ```
    pub fn new(config: ChefConfig) -> Self {
        let backend = Box::new(ProxyClient::new(config.endpoint.clone()));
        Self::with_backend(config, backend)
    }

    /// Create a chef with a custom completion backend.
    pub fn with_backend(config: ChefConfig, backend: Box<dyn CompletionBackend>) -> Self {
        let store = IngredientStore::with_policy(config.reject_duplicates);
        Chef {
            config,
            store,
            recipes: Vec::new(),
            backend,
            generation: WorkflowStatus::Idle,
            scan: WorkflowStatus::Idle,
        }
    }

    /// Trim and add one ingredient; empty input is a no-op.
    pub fn add_ingredient(&mut self, name: &str) -> &[String] {
        self.store.add(name)
    }

    /// Remove the ingredient at `index`; out-of-range is a no-op.
    pub fn remove_ingredient(&mut self, index: usize) -> &[String] {
        self.store.remove(index)
    }

    /// Empty the ingredient list.
    pub fn clear_ingredients(&mut self) {
        self.store.clear();
    }

    /// The current ingredient list, in insertion order.
    pub fn ingredients(&self) -> &[String] {
        self.store.items()
    }

    /// Suggestions from the most recent successful generation.
    pub fn recipes(&self) -> &[RecipeSuggestion] {
        &self.recipes
    }

    pub fn generation_status(&self) -> WorkflowStatus {
        self.generation
    }

    pub fn scan_status(&self) -> WorkflowStatus {
        self.scan
    }

    /// True while either workflow has a request in flight.
    pub fn is_loading(&self) -> bool {
        self.generation == WorkflowStatus::Pending || self.scan == WorkflowStatus::Pending
    }

    /// Generate the configured number of recipe suggestions.
    ///
    /// On success the previous suggestion list is replaced wholesale; on
    /// failure it is left untouched.
    ///
    /// # Example
    /// ```no_run
    /// # use pantry_chef::{Chef, ChefConfig};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut chef = Chef::new(ChefConfig::default());
    /// chef.add_ingredient("egg");
    /// chef.add_ingredient("rice");
    ///
    /// for recipe in chef.generate_recipes().await? {
    ///     println!("{} ({})", recipe.name, recipe.time);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// `RequestInFlight` if a generation is already running,
    /// `EmptyIngredients` if nothing has been added, plus the network and
    /// parse errors of the underlying call.
    pub async fn generate_recipes(&mut self) -> Result<&[RecipeSuggestion], ChefError> {
        let count = self.config.recipe_count;
        self.generate_recipes_with_count(count).await
    }

    /// Generate suggestions, overriding the configured count.
    ///
    /// The count is clamped into the supported range rather than rejected.
    pub async fn generate_recipes_with_count(
        &mut self,
        count: u8,
    ) -> Result<&[RecipeSuggestion], ChefError> {
        if self.generation == WorkflowStatus::Pending {
            return Err(ChefError::RequestInFlight);
        }
        if self.store.is_empty() {
            return Err(ChefError::EmptyIngredients);
        }

        let count = clamp_count(count);
        debug!(
            "Requesting {} recipes for {} ingredients via {}",
            count,
            self.store.len(),
            self.backend.backend_name()
        );

        self.generation = WorkflowStatus::Pending;
        let result = self.run_generation(count).await;
        self.generation = WorkflowStatus::Idle;

        self.recipes = result?;
        debug!("Installed {} recipe suggestions", self.recipes.len());
        Ok(&self.recipes)
    }

    /// Scan a photo for ingredients and merge what is found into the list.
    ///
    /// Found names are appended in order, without de-duplication. On
    /// failure the ingredient list is left untouched.
    ///
    /// # Errors
    /// `RequestInFlight` if a scan is already running, plus the network
    /// and parse errors of the underlying call.
    pub async fn scan_ingredients(
        &mut self,
        image: &ImagePayload,
    ) -> Result<&[String], ChefError> {
        if self.scan == WorkflowStatus::Pending {
            return Err(ChefError::RequestInFlight);
        }

        debug!("Scanning {} image for ingredients", image.media_type);

        self.scan = WorkflowStatus::Pending;
        let result = self.run_scan(image).await;
        self.scan = WorkflowStatus::Idle;

        let found = result?;
        debug!("Scan found {} ingredients", found.len());
        Ok(self.store.merge(found))
    }

    /// Read an image file and scan it for ingredients.
    ///
    /// Convenience over [`ImagePayload::from_path`] followed by
    /// [`Chef::scan_ingredients`].
    pub async fn scan_ingredients_from_path(
        &mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<&[String], ChefError> {
        let image = ImagePayload::from_path(path).await?;
        self.scan_ingredients(&image).await
    }

    async fn run_generation(&self, count: u8) -> Result<Vec<RecipeSuggestion>, ChefError> {
        let message = prompt::recipe_message(self.store.items(), &self.config.pantry, count)?;
        let reply = self.backend.complete(&[message]).await?;

        let cap = self.config.enforce_count_cap.then_some(count as usize);
        parse::parse_recipes(&reply, cap)
    }

    async fn run_scan(&self, image: &ImagePayload) -> Result<Vec<String>, ChefError> {
        let message = prompt::scan_message(image);
        let reply = self.backend.complete(&[message]).await?;
        parse::parse_ingredients(&reply)
    }
}
