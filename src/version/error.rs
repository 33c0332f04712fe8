use thiserror::Error;

/// Broad class of a recipe failure, used to pick the diagnostic wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The page loaded but the version marker was missing, or no recipe exists
    NotFound,
    /// The page could not be loaded
    Transport,
}

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Version marker not found on {0}")]
    NotFound(String),

    #[error("No recipe registered for target {0}")]
    UnknownTarget(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Timed out after {0} ms")]
    Timeout(u64),
}

impl RecipeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecipeError::NotFound(_) | RecipeError::UnknownTarget(_) => ErrorKind::NotFound,
            RecipeError::Network(_) | RecipeError::Status { .. } | RecipeError::Timeout(_) => {
                ErrorKind::Transport
            }
        }
    }
}
