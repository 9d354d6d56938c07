use serde::{Deserialize, Serialize};

use crate::error::JsonResult;

/// Text substituted for a response body that is not valid JSON.
pub const INVALID_JSON_PLACEHOLDER: &str = "< INVALID JSON RESPONSE >";

/// Configuration for the JSON helpers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonConfig {
    /// String value returned by `json_response` when the body fails to parse.
    pub invalid_json_placeholder: String,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            invalid_json_placeholder: INVALID_JSON_PLACEHOLDER.to_string(),
        }
    }
}

impl JsonConfig {
    /// Load configuration from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> JsonResult<Self> {
        Ok(toml::from_str(text)?)
    }
}
