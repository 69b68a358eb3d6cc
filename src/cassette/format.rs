//! On-disk format for recorded filesystem interactions.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Gateway call that produced an interaction.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayMethod {
    /// `FileSystem::classify`.
    Classify,
    /// `FileSystem::list_dir`.
    ListDir,
}

impl GatewayMethod {
    /// Name used in log lines and panic messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classify => "classify",
            Self::ListDir => "list_dir",
        }
    }
}

/// A single recorded gateway call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Which gateway method was called.
    pub method: GatewayMethod,
    /// Path the call was made with.
    pub path: PathBuf,
    /// What the call returned, as `{"ok": <value>}` or `{"err": "<message>"}`.
    pub output: serde_json::Value,
}

/// A cassette: every gateway call made during one command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Interactions in the order they happened.
    pub interactions: Vec<Interaction>,
}

/// Encodes a call result using the `ok`/`err` convention.
///
/// A successful value that cannot be encoded is stored as an error so replay
/// fails loudly instead of returning a wrong answer.
pub fn encode_result<T, E>(result: &Result<T, E>) -> serde_json::Value
where
    T: Serialize,
    E: std::fmt::Display,
{
    match result {
        Ok(value) => match serde_json::to_value(value) {
            Ok(inner) => serde_json::json!({ "ok": inner }),
            Err(e) => serde_json::json!({ "err": format!("unrecordable output: {e}") }),
        },
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    }
}

/// Decodes a value written by [`encode_result`].
///
/// # Errors
///
/// Returns the recorded error message, or a description of why the `ok`
/// payload does not deserialize into `T`.
pub fn decode_result<T: DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        return Err(err.as_str().unwrap_or("unknown error").to_string().into());
    }
    let value = output
        .get("ok")
        .ok_or_else(|| format!("{context}: output has neither `ok` nor `err`"))?;
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
