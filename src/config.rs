use std::path::{Path, PathBuf};
use std::time::Duration;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for a single recipe invocation in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

const APP_DIR: &str = "toolchain-check";
const CONFIG_FILENAME: &str = "config.toml";

/// Installed versions tracked when no configuration file overrides them
const DEFAULT_TARGETS: &[(&str, &str)] = &[
    ("7Zip", "22.01"),
    ("AndroidNDK", "r25b"),
    ("AndroidSDKAPI", "33"),
    ("AndroidStudio", "2021.3.1"),
    ("bzip2", "1.0.8"),
    ("cmake", "3.25.0-rc1"),
    ("conan", "2.0.0-beta4"),
    ("freetype", "2.12.1"),
    ("GIMP_mac", "2.10.32"),
    ("GIMP_win", "2.10.32"),
    ("git", "2.38.1"),
    ("glew", "2.2.0"),
    ("googletest", "1.12.1"),
    ("Gradle", "7.5.1"),
    ("grepWin", "2.0.11"),
    ("KeePassXC", "2.7.1"),
    ("libpng", "1.6.38"),
    ("MuseScore", "3.6.2"),
    ("ninja", "1.11.1"),
    ("NotepadPlusPlus", "8.4.6"),
    ("OBS", "28.0.3"),
    ("ogg", "1.3.5"),
    ("python", "3.10.8"),
    ("SDL", "2.24.1"),
    ("SDL_image", "2.6.2"),
    ("SDL_mixer", "2.6.2"),
    ("SDL_ttf", "2.20.1"),
    ("SFML", "2.5.1"),
    ("TortoiseGit", "2.13.0"),
    ("vorbis", "1.3.7"),
    ("VS2022", "17.3.6"),
    ("Xcode", "14.0.1"),
    ("zlib", "1.2.13"),
];

const APPS: &[&str] = &["games", "sdl2-example", "sfml-examples", "stackblox"];

const CONAN_SINGLEPLAT: &[&str] = &[
    "conan-recipes/recipes/android_sdl",
    "conan-recipes/recipes/cmake_utils",
];

const CONAN_MULTIPLAT: &[&str] = &[
    "conan-recipes/recipes/box2d",
    "conan-recipes/recipes/bzip2",
    "conan-recipes/recipes/freetype",
    "conan-recipes/recipes/glew",
    "conan-recipes/recipes/gtest",
    "conan-recipes/recipes/libpng",
    "conan-recipes/recipes/ogg",
    "conan-recipes/recipes/sdl",
    "conan-recipes/recipes/sdl_image",
    "conan-recipes/recipes/sdl_mixer",
    "conan-recipes/recipes/sdl_ttf",
    "conan-recipes/recipes/sfml",
    "conan-recipes/recipes/ssrobins_engine",
    "conan-recipes/recipes/vorbis",
    "conan-recipes/recipes/zlib",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Toolbox configuration
///
/// Every section is optional. A `[targets]` or `[scopes]` table in the file
/// replaces the built-in one as a whole.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Per-recipe timeout in milliseconds
    pub fetch_timeout_ms: u64,
    /// Target name -> installed version
    pub targets: IndexMap<String, String>,
    /// Scope name -> repository directories, relative to the run root
    pub scopes: IndexMap<String, Vec<PathBuf>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
            targets: default_targets(),
            scopes: default_scopes(),
        }
    }
}

impl Config {
    /// Load config from an explicit path. Returns an error if the file is not found.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        debug!(
            "Loaded {} targets and {} scopes from {}",
            config.targets.len(),
            config.scopes.len(),
            path.display()
        );

        Ok(config)
    }

    /// Load the user config file if one exists, otherwise fall back to the defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        let path = config_path();
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "fetch_timeout_ms must be greater than zero".to_string(),
            ));
        }

        if let Some((name, _)) = self.targets.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "targets.{} must not be empty",
                name
            )));
        }

        Ok(())
    }
}

pub fn default_targets() -> IndexMap<String, String> {
    DEFAULT_TARGETS
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

pub fn default_scopes() -> IndexMap<String, Vec<PathBuf>> {
    let to_paths = |groups: &[&[&str]]| -> Vec<PathBuf> {
        groups
            .iter()
            .flat_map(|group| group.iter().map(PathBuf::from))
            .collect()
    };

    IndexMap::from([
        (
            "all".to_string(),
            to_paths(&[APPS, CONAN_SINGLEPLAT, CONAN_MULTIPLAT]),
        ),
        ("apps".to_string(), to_paths(&[APPS])),
        (
            "conan".to_string(),
            to_paths(&[CONAN_SINGLEPLAT, CONAN_MULTIPLAT]),
        ),
        ("conan-singleplat".to_string(), to_paths(&[CONAN_SINGLEPLAT])),
        ("conan-multiplat".to_string(), to_paths(&[CONAN_MULTIPLAT])),
    ])
}

/// Returns the path to the config directory for toolchain-check.
/// Uses $XDG_CONFIG_HOME/toolchain-check if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/toolchain-check,
/// or ./toolchain-check if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILENAME)
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join(APP_DIR)
}
