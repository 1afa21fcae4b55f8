use thiserror::Error;

/// Errors raised at the edges of the bridge: decoding transport input,
/// parsing intent extras and loading configuration.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("missing key: {key}")]
    MissingKey { key: &'static str },

    #[error("unexpected key: {key}")]
    UnexpectedKey { key: String },

    #[error("value for `{key}` must be a string or null, found {found}")]
    InvalidValue { key: &'static str, found: &'static str },

    #[error("invalid intent extra `{input}`: expected KEY=VALUE")]
    InvalidExtra { input: String },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("could not determine the user configuration directory")]
    ConfigDirUnavailable,
}

pub type Result<T> = std::result::Result<T, BridgeError>;
