//! Error types for loading assistant configuration.
//!
//! Runtime operations on the controller never fail: blank input and unknown
//! action ids are ignored. Only configuration can be rejected.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a config.
    #[error("failed to parse taskbot config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A numeric field is outside its accepted range.
    #[error("taskbot config field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    /// An environment variable held a value that does not parse.
    #[error("invalid value for {key}: {raw:?}")]
    InvalidEnv { key: &'static str, raw: String },
}
