use thiserror::Error;

/// Failure reading the user profile. Always cycle-fatal.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("No user profile found at {0}")]
    Missing(String),

    #[error("Invalid user profile format: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid user profile: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural failure of a whole recommendation cycle.
///
/// Single-domain acquisition failures never produce one of these; they show
/// up as an absent record in the snapshot instead.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("Unable to load user profile: {0}")]
    Profile(#[from] ProfileError),
}

/// Failure inside a domain parser's extraction tables.
#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    #[error("invalid pattern for field `{field}`: {source}")]
    Pattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("unknown field `{0}`")]
    UnknownField(&'static str),
}
