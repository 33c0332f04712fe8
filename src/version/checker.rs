//! Per-target version comparison
//!
//! Versions are compared as plain strings. "v1.2" and "1.2" are different
//! versions here; recipes normalise the upstream spelling where needed.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::FETCH_TIMEOUT_MS;
use crate::version::error::{ErrorKind, RecipeError};
use crate::version::recipe::{Recipe, RecipeTable};
use crate::version::report::Reporter;
use crate::version::target::{CheckResult, Target};

/// Settings shared by every check in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Upper bound for one recipe invocation
    pub timeout: Duration,
    /// Report how long each recipe took
    pub timing: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(FETCH_TIMEOUT_MS),
            timing: false,
        }
    }
}

/// Check one target against its recipe
///
/// Never fails: every recipe error is reported and folded into the result.
pub async fn check_target(
    target: &Target,
    recipes: &RecipeTable,
    reporter: &dyn Reporter,
    options: CheckOptions,
) -> CheckResult {
    let started = Instant::now();

    let latest = match recipes.get(&target.name) {
        Ok(recipe) => invoke(recipe.as_ref(), options.timeout).await,
        Err(e) => Err(e),
    };

    if options.timing {
        reporter.report(&format!(
            "{}: {:.3} seconds",
            target.name,
            started.elapsed().as_secs_f64()
        ));
    }

    evaluate(target, latest, reporter)
}

async fn invoke(recipe: &dyn Recipe, timeout: Duration) -> Result<String, RecipeError> {
    match tokio::time::timeout(timeout, recipe.latest_version()).await {
        Ok(result) => result,
        Err(_) => Err(RecipeError::Timeout(timeout.as_millis() as u64)),
    }
}

/// Turn a recipe outcome into a check result, reporting anything noteworthy
pub fn evaluate(
    target: &Target,
    latest: Result<String, RecipeError>,
    reporter: &dyn Reporter,
) -> CheckResult {
    match latest {
        Ok(latest) if latest == target.installed_version => {
            debug!("{} is up to date at {}", target.name, latest);
            CheckResult::current(&target.name, latest)
        }
        Ok(latest) => {
            reporter.report(&format!(
                "{} {} can be upgraded to {}.",
                target.name, target.installed_version, latest
            ));
            CheckResult::upgradable(&target.name, latest)
        }
        Err(error) => {
            reporter.report_error(&format!(
                "{}\n  Details: {}",
                headline(&target.name, &error),
                error
            ));
            CheckResult::failed(&target.name)
        }
    }
}

fn headline(name: &str, error: &RecipeError) -> String {
    match (error.kind(), error) {
        (ErrorKind::NotFound, RecipeError::UnknownTarget(_)) => {
            format!("{} version could not be found. Check the target name.", name)
        }
        (ErrorKind::NotFound, _) => {
            format!("{} version could not be found. Check the website.", name)
        }
        (ErrorKind::Transport, _) => format!("{} website could not be loaded.", name),
    }
}
