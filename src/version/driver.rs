//! Fan-out over every configured target
//!
//! Each target is checked in its own task. Tasks share nothing mutable: the
//! recipe table is read-only and each check returns its own result, so the
//! final outcome does not depend on completion order.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, info};

use crate::version::checker::{CheckOptions, check_target, evaluate};
use crate::version::error::RecipeError;
use crate::version::outcome::Outcome;
use crate::version::recipe::RecipeTable;
use crate::version::report::Reporter;
use crate::version::target::{CheckResult, Target};

pub struct VersionChecker {
    targets: Vec<Target>,
    recipes: Arc<RecipeTable>,
    reporter: Arc<dyn Reporter>,
    options: CheckOptions,
}

impl VersionChecker {
    pub fn new(
        targets: Vec<Target>,
        recipes: RecipeTable,
        reporter: Arc<dyn Reporter>,
        options: CheckOptions,
    ) -> Self {
        Self {
            targets,
            recipes: Arc::new(recipes),
            reporter,
            options,
        }
    }

    /// Check a single named target synchronously
    ///
    /// A name that is not configured yields a not-found result.
    pub async fn check_one(&self, name: &str) -> CheckResult {
        match self.targets.iter().find(|target| target.name == name) {
            Some(target) => {
                check_target(target, &self.recipes, self.reporter.as_ref(), self.options).await
            }
            None => evaluate(
                &Target::new(name, ""),
                Err(RecipeError::UnknownTarget(name.to_string())),
                self.reporter.as_ref(),
            ),
        }
    }

    /// Check every configured target concurrently and wait for all of them
    pub async fn check_all(&self) -> Vec<CheckResult> {
        let (names, handles): (Vec<_>, Vec<_>) = self
            .targets
            .iter()
            .cloned()
            .map(|target| {
                let name = target.name.clone();
                let recipes = Arc::clone(&self.recipes);
                let reporter = Arc::clone(&self.reporter);
                let options = self.options;
                let handle = tokio::spawn(async move {
                    check_target(&target, &recipes, reporter.as_ref(), options).await
                });
                (name, handle)
            })
            .unzip();

        join_all(handles)
            .await
            .into_iter()
            .zip(names)
            .map(|(joined, name)| {
                joined.unwrap_or_else(|e| {
                    error!("Check for {} aborted: {}", name, e);
                    self.reporter
                        .report_error(&format!("{} check aborted.\n  Details: {}", name, e));
                    CheckResult::failed(name)
                })
            })
            .collect()
    }

    /// Check one target (when `selection` is set) or all of them, report the
    /// summary line and return the outcome
    pub async fn run(&self, selection: Option<&str>) -> Outcome {
        let results = match selection {
            Some(name) => vec![self.check_one(name).await],
            None => self.check_all().await,
        };

        let outcome = Outcome::from_results(&results);
        info!(
            "Checked {} target(s): {} upgradable, {} failed",
            results.len(),
            results.iter().filter(|r| r.needs_upgrade()).count(),
            results.iter().filter(|r| r.error_occurred).count()
        );

        if let Some(summary) = outcome.summary() {
            self.reporter.report(summary);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::recipe::{MockRecipe, Recipe};
    use crate::version::report::testing::CollectingReporter;

    fn returning(version: &'static str) -> Arc<dyn Recipe> {
        let mut recipe = MockRecipe::new();
        recipe
            .expect_latest_version()
            .returning(move || Ok(version.to_string()));
        Arc::new(recipe)
    }

    fn never_called() -> Arc<dyn Recipe> {
        let mut recipe = MockRecipe::new();
        recipe.expect_latest_version().never();
        Arc::new(recipe)
    }

    struct PanickingRecipe;

    #[async_trait::async_trait]
    impl Recipe for PanickingRecipe {
        async fn latest_version(&self) -> Result<String, RecipeError> {
            panic!("extractor bug")
        }
    }

    fn checker(
        targets: &[(&str, &str)],
        recipes: RecipeTable,
    ) -> (VersionChecker, Arc<CollectingReporter>) {
        let reporter = Arc::new(CollectingReporter::default());
        let targets = targets
            .iter()
            .map(|(name, version)| Target::new(*name, *version))
            .collect();
        let checker = VersionChecker::new(
            targets,
            recipes,
            reporter.clone(),
            CheckOptions::default(),
        );
        (checker, reporter)
    }

    #[tokio::test]
    async fn check_all_returns_one_result_per_target() {
        let recipes = RecipeTable::new()
            .with("zlib", returning("1.2.13"))
            .with("cmake", returning("3.28.1"));
        let (checker, _reporter) = checker(&[("zlib", "1.2.13"), ("cmake", "3.25.0")], recipes);

        let mut results = checker.check_all().await;
        results.sort_by(|a, b| a.target_name.cmp(&b.target_name));

        assert_eq!(
            results,
            vec![
                CheckResult::upgradable("cmake", "3.28.1"),
                CheckResult::current("zlib", "1.2.13"),
            ]
        );
    }

    #[tokio::test]
    async fn check_all_contains_missing_recipe_to_its_target() {
        let recipes = RecipeTable::new().with("zlib", returning("1.2.13"));
        let (checker, _reporter) = checker(&[("zlib", "1.2.13"), ("bogus", "1.0")], recipes);

        let results = checker.check_all().await;

        assert_eq!(results.len(), 2);
        assert!(results.contains(&CheckResult::current("zlib", "1.2.13")));
        assert!(results.contains(&CheckResult::failed("bogus")));
    }

    #[tokio::test]
    async fn check_all_turns_panicking_recipe_into_failed_result() {
        let recipes = RecipeTable::new()
            .with("zlib", returning("1.2.13"))
            .with("OBS", Arc::new(PanickingRecipe));
        let (checker, reporter) = checker(&[("zlib", "1.2.13"), ("OBS", "28.0.3")], recipes);

        let results = checker.check_all().await;

        assert!(results.contains(&CheckResult::failed("OBS")));
        assert!(results.contains(&CheckResult::current("zlib", "1.2.13")));
        assert!(reporter.errors.lock().unwrap()[0].starts_with("OBS check aborted."));
    }

    #[tokio::test]
    async fn check_one_only_invokes_selected_recipe() {
        let recipes = RecipeTable::new()
            .with("zlib", returning("1.3"))
            .with("cmake", never_called());
        let (checker, reporter) = checker(&[("zlib", "1.2.13"), ("cmake", "3.25.0")], recipes);

        let result = checker.check_one("zlib").await;

        assert_eq!(result, CheckResult::upgradable("zlib", "1.3"));
        assert_eq!(
            *reporter.lines.lock().unwrap(),
            vec!["zlib 1.2.13 can be upgraded to 1.3.".to_string()]
        );
    }

    #[tokio::test]
    async fn check_one_unknown_name_is_not_found() {
        let recipes = RecipeTable::new().with("zlib", never_called());
        let (checker, reporter) = checker(&[("zlib", "1.2.13")], recipes);

        let result = checker.check_one("nope").await;

        assert_eq!(result, CheckResult::failed("nope"));
        assert!(reporter.errors.lock().unwrap()[0].contains("could not be found"));
    }

    #[tokio::test]
    async fn run_reports_summary_for_all_clear() {
        let recipes = RecipeTable::new().with("zlib", returning("1.2.13"));
        let (checker, reporter) = checker(&[("zlib", "1.2.13")], recipes);

        let outcome = checker.run(None).await;

        assert_eq!(outcome, Outcome::AllClear);
        assert_eq!(
            *reporter.lines.lock().unwrap(),
            vec!["Everything is up-to-date!".to_string()]
        );
    }

    #[tokio::test]
    async fn run_with_only_errors_prints_no_summary() {
        let (checker, reporter) = checker(&[("zlib", "1.2.13")], RecipeTable::new());

        let outcome = checker.run(None).await;

        assert_eq!(outcome, Outcome::ErrorsOnly);
        assert!(reporter.lines.lock().unwrap().is_empty());
        assert_eq!(reporter.errors.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn run_with_empty_target_list_is_all_clear() {
        let (checker, _reporter) = checker(&[], RecipeTable::new());

        assert_eq!(checker.run(None).await, Outcome::AllClear);
    }
}
