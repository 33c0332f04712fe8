//! Recipe trait and the name-keyed recipe table

use std::collections::HashMap;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::version::error::RecipeError;

/// Procedure that fetches one upstream page and extracts its latest version
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Recipe: Send + Sync {
    /// Fetches the latest published version
    ///
    /// # Returns
    /// * `Ok(String)` - The version exactly as the upstream page spells it
    /// * `Err(RecipeError)` - If the page could not be loaded or the marker is missing
    async fn latest_version(&self) -> Result<String, RecipeError>;
}

/// Read-only mapping from target name to its recipe, built once at startup
#[derive(Clone, Default)]
pub struct RecipeTable {
    recipes: HashMap<String, Arc<dyn Recipe>>,
}

impl RecipeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `recipe` under `name`, replacing any previous entry
    pub fn insert(&mut self, name: impl Into<String>, recipe: Arc<dyn Recipe>) {
        self.recipes.insert(name.into(), recipe);
    }

    pub fn with(mut self, name: impl Into<String>, recipe: Arc<dyn Recipe>) -> Self {
        self.insert(name, recipe);
        self
    }

    /// Looks up the recipe for `name`; a miss is a not-found condition
    pub fn get(&self, name: &str) -> Result<Arc<dyn Recipe>, RecipeError> {
        self.recipes
            .get(name)
            .cloned()
            .ok_or_else(|| RecipeError::UnknownTarget(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
