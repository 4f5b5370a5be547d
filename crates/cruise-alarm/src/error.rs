//! Error types for the cruise-alarm crate.

use thiserror::Error;

/// Errors that can occur while building or delivering an alarm.
#[derive(Debug, Error)]
pub enum AlarmError {
    /// A required delivery configuration field is unset.
    ///
    /// Produced when the endpoint URI or recipient address is missing;
    /// consumed internally by the notifier (delivery is skipped), never
    /// surfaced to the detector.
    #[error("alarm configuration incomplete: {field} is not set")]
    ConfigIncomplete {
        /// The configuration key that is unset.
        field: &'static str,
    },

    /// The HTTP POST failed at the transport level.
    ///
    /// Covers connection refusal, DNS failure, and transport timeouts. HTTP
    /// error statuses are not inspected and do not produce this error.
    #[error("alarm delivery failed: {reason}")]
    DeliveryFailed {
        /// Rendering of the underlying transport failure.
        reason: String,
    },

    /// The alarm payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for AlarmError {
    fn from(err: reqwest::Error) -> Self {
        Self::DeliveryFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AlarmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for alarm operations.
pub type Result<T> = std::result::Result<T, AlarmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_config_incomplete() {
        let err = AlarmError::ConfigIncomplete {
            field: "send.mail.uri",
        };
        assert_eq!(
            err.to_string(),
            "alarm configuration incomplete: send.mail.uri is not set"
        );
    }

    #[test]
    fn error_display_delivery_failed() {
        let err = AlarmError::DeliveryFailed {
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "alarm delivery failed: connection refused"
        );
    }

    #[test]
    fn error_from_serde_json() {
        let json_err = serde_json::from_str::<String>("not json");
        assert!(json_err.is_err());
        let alarm_err: AlarmError = json_err.unwrap_err().into();
        assert!(matches!(alarm_err, AlarmError::Serialization(_)));
    }
}
