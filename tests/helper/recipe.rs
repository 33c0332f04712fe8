//! Recipe test utilities

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use toolchain_check::version::checker::CheckOptions;
use toolchain_check::version::driver::VersionChecker;
use toolchain_check::version::error::RecipeError;
use toolchain_check::version::recipe::{Recipe, RecipeTable};
use toolchain_check::version::target::Target;

use super::reporter::CollectingReporter;

/// Stub recipe answering with a fixed outcome
pub enum StubRecipe {
    Version(String),
    Missing,
    Unreachable,
    Hangs,
}

impl StubRecipe {
    pub fn version(version: &str) -> Self {
        StubRecipe::Version(version.to_string())
    }
}

#[async_trait]
impl Recipe for StubRecipe {
    async fn latest_version(&self) -> Result<String, RecipeError> {
        match self {
            StubRecipe::Version(version) => Ok(version.clone()),
            StubRecipe::Missing => Err(RecipeError::NotFound(
                "https://example.invalid/download".to_string(),
            )),
            StubRecipe::Unreachable => Err(RecipeError::Status {
                url: "https://example.invalid/download".to_string(),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            }),
            StubRecipe::Hangs => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok("never".to_string())
            }
        }
    }
}

/// Create a checker over `(name, installed, recipe)` entries with a collecting reporter
pub fn create_test_checker(
    entries: Vec<(&str, &str, StubRecipe)>,
    options: CheckOptions,
) -> (VersionChecker, Arc<CollectingReporter>) {
    let mut targets = Vec::new();
    let mut recipes = RecipeTable::new();
    for (name, installed, recipe) in entries {
        targets.push(Target::new(name, installed));
        recipes.insert(name, Arc::new(recipe));
    }

    let reporter = Arc::new(CollectingReporter::default());
    let checker = VersionChecker::new(targets, recipes, reporter.clone(), options);
    (checker, reporter)
}
