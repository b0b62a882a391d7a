use thiserror::Error;

/// Errors raised at the configuration and construction boundary.
///
/// Telemetry decoding itself never fails: malformed or truncated frames are
/// absorbed by the decoder's zero-fallback rules. What can fail is selecting
/// a driver that was never registered or feeding the registry a broken
/// profile, and those are surfaced loudly rather than as a silent no-op.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown device id `{0}`")]
    UnknownDevice(String),

    #[error("invalid device layout `{id}`: {reason}")]
    InvalidLayout { id: String, reason: String },

    #[error("unsupported profile format `{0}` (expected json or toml)")]
    UnsupportedFormat(String),

    #[error("failed to read profile")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON profile")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOML profile")]
    Toml(#[from] toml::de::Error),
}
