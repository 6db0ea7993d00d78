use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScenarioError>;
pub type LookupResult<T> = std::result::Result<T, LookupError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Resolution failures surfaced to the scenario interpreter. Both are fatal to
/// the current step.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error(
        "failed to find string value by index (got {found}): {paths}, index contains: {}",
        render_keys(.available)
    )]
    ResolutionNotFound {
        /// Candidate paths as a JSON array of arrays.
        paths: String,
        found: Found,
        available: Vec<String>,
    },
    #[error(
        "failed to find world contract by address: {address}, index contains: {}",
        render_keys(.indexed)
    )]
    HandleNotFound {
        address: String,
        indexed: Vec<String>,
    },
}

/// What the last candidate walk ended on when a string lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Nothing,
    EmptyLeaf,
    NestedMap,
}

impl Found {
    pub fn as_str(self) -> &'static str {
        match self {
            Found::Nothing => "nothing",
            Found::EmptyLeaf => "empty value",
            Found::NestedMap => "nested map",
        }
    }
}

impl std::fmt::Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings document: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid alias entry `{0}` (expected name:address)")]
    InvalidAlias(String),
}

fn render_keys(keys: &[String]) -> String {
    serde_json::to_string(keys).unwrap_or_else(|_| format!("{keys:?}"))
}
