//! HTTP alarm notification adapter for the cluster self-healing detector.
//!
//! `cruise-alarm` turns anomaly-alert events into operator-readable alarm
//! messages and delivers them to an external alerting endpoint with a single
//! best-effort HTTP POST. Delivery is deliberately non-blocking for the
//! detector: configuration gaps skip delivery with a warning, and transport
//! failures are logged and swallowed so a broken alerting channel can never
//! interrupt a remediation in progress.
//!
//! # Features
//!
//! - **Fixed message format**: `<type> detected <event>. Self healing <state>. <note>`
//! - **Per-type self-healing lookup**: the alert text reports the healing
//!   start time only when self-healing is enabled for that anomaly type
//! - **One-shot delivery**: one POST per event, no retries, no queue, no
//!   deduplication
//! - **Per-call transport scoping**: the HTTP client lives exactly as long
//!   as the single delivery call
//!
//! # Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use chrono::Utc;
//! use cruise_alarm::{AlarmConfig, AnomalyType, SelfHealingConfig, SendAlarmNotifier};
//!
//! let raw = HashMap::from([
//!     ("send.mail.uri".to_string(), "http://alarm.example.com/send".to_string()),
//!     ("send.mail.recv".to_string(), "oncall@example.com".to_string()),
//!     ("bootstrap.servers".to_string(), "kafka-1:9092".to_string()),
//! ]);
//!
//! let config = AlarmConfig::from_map(&raw);
//! let policy = Arc::new(SelfHealingConfig::all_enabled());
//! let notifier = SendAlarmNotifier::new(config, policy);
//!
//! // Reported from the detector; never raises, even if delivery fails.
//! notifier.alert(&"broker 3 unreachable", true, Utc::now(), AnomalyType::BrokerFailure);
//! ```

#![forbid(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/cruise-alarm/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod notifier;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use config::{AlarmConfig, BOOTSTRAP_SERVERS, SEND_MAIL_RECV, SEND_MAIL_URI};
pub use error::{AlarmError, Result};
pub use notifier::{
    to_date_string, AlarmPayload, LogNotifier, Notifier, SendAlarmNotifier, ALARM_TITLE,
};
pub use transport::{AlarmTransport, HttpTransport};
pub use types::{AnomalyType, SelfHealingConfig, SelfHealingPolicy};
