// src/models/project_check.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Loosely-typed entry of `checksOut`, `liveSignals` and `errors`.
pub type Record = Map<String, Value>;

/// Payload used to register a project with the health-check API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCheckRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub app_name: String,
}

impl ProjectCheckRequest {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            url: None,
            app_name: app_name.into(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A project check as returned by both registration and live signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCheck {
    #[serde(default, alias = "ID", deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, alias = "URL", deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, alias = "AppName", deserialize_with = "null_as_default")]
    pub app_name: String,

    #[serde(default, alias = "ChecksOut", deserialize_with = "null_as_default")]
    pub checks_out: Vec<Record>,

    #[serde(default, alias = "LiveSignals", deserialize_with = "null_as_default")]
    pub live_signals: Vec<Record>,

    #[serde(default, alias = "Errors", deserialize_with = "null_as_default")]
    pub errors: Vec<Record>,
}

impl ProjectCheck {
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn live_signal_count(&self) -> usize {
        self.live_signals.len()
    }
}

// The API encodes empty sequences as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
