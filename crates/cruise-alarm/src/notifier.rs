//! Alarm formatting and the alert entry point.
//!
//! [`SendAlarmNotifier`] receives anomaly-alert events from the detector,
//! formats the human-readable alarm text, and makes a single best-effort
//! delivery attempt over HTTP. Delivery failures are logged and swallowed;
//! a broken alerting channel must never interrupt the detector's
//! remediation flow.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{AlarmConfig, SEND_MAIL_RECV, SEND_MAIL_URI};
use crate::error::{AlarmError, Result};
use crate::transport::{AlarmTransport, HttpTransport};
use crate::types::{AnomalyType, SelfHealingPolicy};

/// Fixed title carried by every alarm payload.
pub const ALARM_TITLE: &str = "[CruiseControl] Anomaly Detected";

/// Renders a timestamp in the fixed operator-readable alarm format.
#[must_use]
pub fn to_date_string(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d_%H:%M:%S UTC").to_string()
}

/// The base notification pathway.
///
/// Invoked unconditionally for every anomaly before any alarm delivery
/// logic runs. The detector's generic notification lifecycle lives behind
/// this trait; [`SendAlarmNotifier`] decorates it with HTTP delivery.
pub trait Notifier: Send + Sync + fmt::Debug {
    /// Reports a detected anomaly.
    fn alert(
        &self,
        anomaly: &dyn fmt::Display,
        auto_fix_triggered: bool,
        self_healing_start: DateTime<Utc>,
        anomaly_type: AnomalyType,
    );
}

/// Base pathway that records each anomaly to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Creates a new log notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn alert(
        &self,
        anomaly: &dyn fmt::Display,
        auto_fix_triggered: bool,
        self_healing_start: DateTime<Utc>,
        anomaly_type: AnomalyType,
    ) {
        info!(
            anomaly_type = %anomaly_type,
            anomaly = %anomaly,
            auto_fix_triggered,
            self_healing_start = %to_date_string(self_healing_start),
            "anomaly detected"
        );
    }
}

/// The JSON payload posted to the alarm endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmPayload {
    /// Recipient address string.
    pub recv_addrs: String,
    /// Fixed alarm title ([`ALARM_TITLE`]).
    pub title: String,
    /// Cluster identity line followed by the alarm text.
    pub content: String,
}

/// Notifier that delivers a formatted alarm to an HTTP endpoint.
///
/// Holds immutable delivery configuration, the base notification pathway
/// it decorates, and the per-anomaly-type self-healing lookup owned by the
/// detector. Stateless across calls: each alert formats a fresh message and
/// makes at most one delivery attempt, with no deduplication and no retry.
#[derive(Debug)]
pub struct SendAlarmNotifier {
    config: AlarmConfig,
    base: Box<dyn Notifier>,
    policy: Arc<dyn SelfHealingPolicy>,
    transport: Box<dyn AlarmTransport>,
}

impl SendAlarmNotifier {
    /// Creates a production notifier: log base pathway, HTTP transport.
    #[must_use]
    pub fn new(config: AlarmConfig, policy: Arc<dyn SelfHealingPolicy>) -> Self {
        Self::with_parts(
            config,
            Box::new(LogNotifier::new()),
            policy,
            Box::new(HttpTransport::new()),
        )
    }

    /// Creates a notifier from explicit parts.
    #[must_use]
    pub fn with_parts(
        config: AlarmConfig,
        base: Box<dyn Notifier>,
        policy: Arc<dyn SelfHealingPolicy>,
        transport: Box<dyn AlarmTransport>,
    ) -> Self {
        Self {
            config,
            base,
            policy,
            transport,
        }
    }

    /// Returns the delivery configuration.
    #[must_use]
    pub const fn config(&self) -> &AlarmConfig {
        &self.config
    }

    /// Reports a detected anomaly and attempts alarm delivery.
    ///
    /// The base pathway runs first, unconditionally. Delivery is then
    /// skipped with a warning if the endpoint URI or recipient address is
    /// unconfigured. Any delivery failure is logged and swallowed; this
    /// method never panics and never propagates an error to the detector.
    pub fn alert(
        &self,
        anomaly: &dyn fmt::Display,
        auto_fix_triggered: bool,
        self_healing_start: DateTime<Utc>,
        anomaly_type: AnomalyType,
    ) {
        self.base
            .alert(anomaly, auto_fix_triggered, self_healing_start, anomaly_type);

        if self.config.send_mail_uri().is_none() {
            let skipped = AlarmError::ConfigIncomplete {
                field: SEND_MAIL_URI,
            };
            warn!(error = %skipped, "can't send self-healing alarm");
            return;
        }

        if self.config.send_mail_recv().is_none() {
            let skipped = AlarmError::ConfigIncomplete {
                field: SEND_MAIL_RECV,
            };
            warn!(error = %skipped, "can't send self-healing alarm");
            return;
        }

        let text =
            self.format_alert(anomaly, auto_fix_triggered, self_healing_start, anomaly_type);

        if let Err(e) = self.send_alarm(&text) {
            warn!(error = %e, anomaly_type = %anomaly_type, "error sending self-healing alarm");
        }
    }

    /// Builds the alarm text for one anomaly event.
    ///
    /// The self-healing clause reports the start time when the policy
    /// enables self-healing for this anomaly type, and `"is disabled"`
    /// otherwise. The trailing auto-fix note is empty unless remediation
    /// was actually triggered; its separating space is always present.
    #[must_use]
    pub fn format_alert(
        &self,
        anomaly: &dyn fmt::Display,
        auto_fix_triggered: bool,
        self_healing_start: DateTime<Utc>,
        anomaly_type: AnomalyType,
    ) -> String {
        let healing_clause = if self.policy.self_healing_enabled(anomaly_type) {
            format!("start time {}", to_date_string(self_healing_start))
        } else {
            "is disabled".to_string()
        };
        let auto_fix_note = if auto_fix_triggered {
            "Self-healing has been triggered."
        } else {
            ""
        };

        format!("{anomaly_type} detected {anomaly}. Self healing {healing_clause}. {auto_fix_note}")
    }

    /// Serializes the payload and posts it to the configured endpoint.
    fn send_alarm(&self, text: &str) -> Result<()> {
        let uri = self
            .config
            .send_mail_uri()
            .ok_or(AlarmError::ConfigIncomplete {
                field: SEND_MAIL_URI,
            })?;
        let recv = self
            .config
            .send_mail_recv()
            .ok_or(AlarmError::ConfigIncomplete {
                field: SEND_MAIL_RECV,
            })?;

        let payload = AlarmPayload {
            recv_addrs: recv.to_string(),
            title: ALARM_TITLE.to_string(),
            content: format!(
                "bootstrap.servers={}<br/>{text}",
                self.config.bootstrap_servers().unwrap_or_default()
            ),
        };
        let body = serde_json::to_string(&payload)?;

        self.transport.post(&format!("{uri}?groupoption=true"), body)
    }
}
