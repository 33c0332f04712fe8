//! Tracked targets and per-target check results

use indexmap::IndexMap;

/// One external tool or library tracked for version currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Unique name, also the key of its recipe
    pub name: String,
    /// Version currently pinned in the toolchain
    pub installed_version: String,
}

impl Target {
    pub fn new(name: impl Into<String>, installed_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            installed_version: installed_version.into(),
        }
    }

    /// Build targets from a `name -> installed version` table, keeping its order
    pub fn from_table(table: &IndexMap<String, String>) -> Vec<Target> {
        table
            .iter()
            .map(|(name, version)| Target::new(name, version))
            .collect()
    }
}

/// Outcome of checking one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub target_name: String,
    pub up_to_date: bool,
    pub error_occurred: bool,
    /// Upstream version, present only when no error occurred
    pub latest_version: Option<String>,
}

impl CheckResult {
    /// Upstream matches the installed version
    pub fn current(target_name: impl Into<String>, latest: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            up_to_date: true,
            error_occurred: false,
            latest_version: Some(latest.into()),
        }
    }

    /// Upstream differs from the installed version
    pub fn upgradable(target_name: impl Into<String>, latest: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            up_to_date: false,
            error_occurred: false,
            latest_version: Some(latest.into()),
        }
    }

    /// The upstream version could not be determined
    pub fn failed(target_name: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            up_to_date: false,
            error_occurred: true,
            latest_version: None,
        }
    }

    /// A confirmed upgrade is available. Failed checks never count.
    pub fn needs_upgrade(&self) -> bool {
        !self.up_to_date && !self.error_occurred
    }
}
