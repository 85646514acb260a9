/// The ordered list of ingredients the user has on hand
///
/// Mutated by manual entry, removal, and bulk merges from image scans.
/// Never persisted; lives only as long as its owning workflow.
#[derive(Debug, Clone, Default)]
pub struct IngredientStore {
    items: Vec<String>,
    reject_duplicates: bool,
}

impl IngredientStore {
    /// An empty store that accepts duplicate entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store with an explicit duplicate policy.
    ///
    /// With `reject_duplicates` set, adding a name already present
    /// (case-sensitive exact match) is silently skipped. Bulk merges are
    /// never filtered regardless of policy.
    pub fn with_policy(reject_duplicates: bool) -> Self {
        Self {
            items: Vec::new(),
            reject_duplicates,
        }
    }

    /// Trim and append one ingredient; empty input is a no-op.
    ///
    /// Returns the list after the attempt.
    pub fn add(&mut self, name: &str) -> &[String] {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return &self.items;
        }
        if self.reject_duplicates && self.items.iter().any(|i| i == trimmed) {
            return &self.items;
        }
        self.items.push(trimmed.to_string());
        &self.items
    }

    /// Remove the entry at `index`; out-of-range is a no-op.
    ///
    /// Stale UI state can race a removal against a list change, so an
    /// invalid index must fail silently.
    pub fn remove(&mut self, index: usize) -> &[String] {
        if index < self.items.len() {
            self.items.remove(index);
        }
        &self.items
    }

    /// Append every name in order, without de-duplication.
    pub fn merge(&mut self, names: impl IntoIterator<Item = String>) -> &[String] {
        self.items.extend(names);
        &self.items
    }

    /// Empty the list.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The current entries, in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
