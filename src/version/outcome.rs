//! Final three-way outcome of a check run

use crate::version::target::CheckResult;

pub const UPGRADE_MESSAGE: &str =
    "Do the upgrade(s) and update the installed version(s) in the configuration.";

pub const ALL_CLEAR_MESSAGE: &str = "Everything is up-to-date!";

/// Run outcome, decided in priority order: upgrades, then errors, then all clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one target has a confirmed newer upstream version
    UpgradesNeeded,
    /// Nothing is upgradable but at least one check failed
    ErrorsOnly,
    /// Every target is current and every check succeeded
    AllClear,
}

impl Outcome {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a CheckResult>) -> Self {
        let mut any_error = false;
        for result in results {
            if result.needs_upgrade() {
                return Outcome::UpgradesNeeded;
            }
            any_error |= result.error_occurred;
        }

        if any_error {
            Outcome::ErrorsOnly
        } else {
            Outcome::AllClear
        }
    }

    /// Process exit code for this outcome
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::AllClear => 0,
            Outcome::UpgradesNeeded | Outcome::ErrorsOnly => 1,
        }
    }

    /// Final summary line; a run with only errors ends without one
    pub fn summary(self) -> Option<&'static str> {
        match self {
            Outcome::UpgradesNeeded => Some(UPGRADE_MESSAGE),
            Outcome::ErrorsOnly => None,
            Outcome::AllClear => Some(ALL_CLEAR_MESSAGE),
        }
    }
}
