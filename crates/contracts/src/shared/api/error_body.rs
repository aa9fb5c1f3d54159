use serde::{Deserialize, Serialize};

/// Error body returned by the service on 4xx/5xx
///
/// The service usually sends `{"message": "..."}`, but the field may be
/// missing and the body may carry extra keys (`status`, `error`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Lenient parse: any body that is not a JSON object yields no message
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    /// Message if present and not blank
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}
