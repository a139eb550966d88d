//! Upstream wire types
//!
//! The upstream API wraps RPC-style replies in `{message: ...}` and
//! resource queries in `{data: ...}`.

use serde::Deserialize;

/// `{message: ...}` envelope of RPC-style endpoints
#[derive(Debug, Deserialize)]
pub struct MessageEnvelope<T> {
    #[serde(default)]
    pub message: Option<T>,
}

/// `{data: ...}` envelope of resource endpoints
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

/// Reply payload of `login_with_pin`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PinLoginMessage {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
    #[serde(default)]
    pub sid: Option<String>,
}

impl PinLoginMessage {
    /// Whether the upstream accepted the PIN.
    ///
    /// The upstream signals success in two shapes depending on version.
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
            || self.message.as_deref() == Some("Authentication success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_detected_in_both_shapes() {
        let by_status: PinLoginMessage =
            serde_json::from_str(r#"{"status":"success","sid":"s1"}"#).unwrap();
        assert!(by_status.is_success());

        let by_message: PinLoginMessage =
            serde_json::from_str(r#"{"message":"Authentication success"}"#).unwrap();
        assert!(by_message.is_success());
    }

    #[test]
    fn test_failure_shapes() {
        let failed: PinLoginMessage =
            serde_json::from_str(r#"{"status":"failed","message":"Wrong PIN"}"#).unwrap();
        assert!(!failed.is_success());
        assert!(!PinLoginMessage::default().is_success());
    }
}
