//! Core types for the alarm notifier.
//!
//! This module provides the anomaly classification consumed from the
//! detector and the per-type self-healing lookup:
//! - [`AnomalyType`]: The fixed set of cluster anomaly classes
//! - [`SelfHealingPolicy`]: Per-type self-healing enablement lookup
//! - [`SelfHealingConfig`]: Map-backed [`SelfHealingPolicy`] implementation

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a detected cluster anomaly.
///
/// The rendered names are embedded verbatim in alert text, so they keep the
/// detector's SCREAMING_SNAKE tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyType {
    /// An optimization goal is violated.
    #[serde(rename = "GOAL_VIOLATION")]
    GoalViolation,
    /// A broker has failed or left the cluster.
    #[serde(rename = "BROKER_FAILURE")]
    BrokerFailure,
    /// A broker metric is outside its expected range.
    #[serde(rename = "METRIC_ANOMALY")]
    MetricAnomaly,
    /// A disk on a broker has failed.
    #[serde(rename = "DISK_FAILURE")]
    DiskFailure,
    /// A topic violates a configured constraint.
    #[serde(rename = "TOPIC_ANOMALY")]
    TopicAnomaly,
    /// A scheduled maintenance event.
    #[serde(rename = "MAINTENANCE_EVENT")]
    MaintenanceEvent,
}

impl AnomalyType {
    /// Returns the anomaly type as its wire/display tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalViolation => "GOAL_VIOLATION",
            Self::BrokerFailure => "BROKER_FAILURE",
            Self::MetricAnomaly => "METRIC_ANOMALY",
            Self::DiskFailure => "DISK_FAILURE",
            Self::TopicAnomaly => "TOPIC_ANOMALY",
            Self::MaintenanceEvent => "MAINTENANCE_EVENT",
        }
    }

    /// Returns all known anomaly types.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::GoalViolation,
            Self::BrokerFailure,
            Self::MetricAnomaly,
            Self::DiskFailure,
            Self::TopicAnomaly,
            Self::MaintenanceEvent,
        ]
    }
}

impl fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-anomaly-type self-healing enablement lookup.
///
/// Owned by the detector, queried by the notifier to decide whether the
/// alert text reports a self-healing start time or `"is disabled"`.
pub trait SelfHealingPolicy: Send + Sync + fmt::Debug {
    /// Returns true if self-healing is enabled for the given anomaly type.
    fn self_healing_enabled(&self, anomaly_type: AnomalyType) -> bool;
}

/// A map-backed [`SelfHealingPolicy`].
///
/// Anomaly types absent from the map are treated as disabled.
#[derive(Debug, Clone, Default)]
pub struct SelfHealingConfig {
    enabled: HashMap<AnomalyType, bool>,
}

impl SelfHealingConfig {
    /// Creates a policy with self-healing disabled for every anomaly type.
    #[must_use]
    pub fn all_disabled() -> Self {
        Self::default()
    }

    /// Creates a policy with self-healing enabled for every anomaly type.
    #[must_use]
    pub fn all_enabled() -> Self {
        let enabled = AnomalyType::all().iter().map(|t| (*t, true)).collect();
        Self { enabled }
    }

    /// Sets the enablement for a single anomaly type.
    #[must_use]
    pub fn with_enabled(mut self, anomaly_type: AnomalyType, enabled: bool) -> Self {
        self.enabled.insert(anomaly_type, enabled);
        self
    }
}

impl SelfHealingPolicy for SelfHealingConfig {
    fn self_healing_enabled(&self, anomaly_type: AnomalyType) -> bool {
        self.enabled.get(&anomaly_type).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    mod anomaly_type_tests {
        use super::*;
        use test_case::test_case;

        #[test_case(AnomalyType::GoalViolation, "GOAL_VIOLATION")]
        #[test_case(AnomalyType::BrokerFailure, "BROKER_FAILURE")]
        #[test_case(AnomalyType::MetricAnomaly, "METRIC_ANOMALY")]
        #[test_case(AnomalyType::DiskFailure, "DISK_FAILURE")]
        #[test_case(AnomalyType::TopicAnomaly, "TOPIC_ANOMALY")]
        #[test_case(AnomalyType::MaintenanceEvent, "MAINTENANCE_EVENT")]
        fn display_matches_tag(anomaly_type: AnomalyType, tag: &str) {
            assert_eq!(anomaly_type.to_string(), tag);
            assert_eq!(anomaly_type.as_str(), tag);
        }

        #[test]
        fn serde_round_trip_uses_tags() {
            let json = serde_json::to_string(&AnomalyType::GoalViolation).unwrap();
            assert_eq!(json, "\"GOAL_VIOLATION\"");

            let parsed: AnomalyType = serde_json::from_str("\"DISK_FAILURE\"").unwrap();
            assert_eq!(parsed, AnomalyType::DiskFailure);
        }

        #[test]
        fn all_lists_every_type_once() {
            let all = AnomalyType::all();
            assert_eq!(all.len(), 6);
            let unique: std::collections::HashSet<_> = all.iter().collect();
            assert_eq!(unique.len(), all.len());
        }
    }

    mod self_healing_config_tests {
        use super::*;

        #[test]
        fn default_is_disabled() {
            let policy = SelfHealingConfig::default();
            for anomaly_type in AnomalyType::all() {
                assert!(!policy.self_healing_enabled(anomaly_type));
            }
        }

        #[test]
        fn all_enabled_covers_every_type() {
            let policy = SelfHealingConfig::all_enabled();
            for anomaly_type in AnomalyType::all() {
                assert!(policy.self_healing_enabled(anomaly_type));
            }
        }

        #[test]
        fn with_enabled_overrides_single_type() {
            let policy = SelfHealingConfig::all_disabled()
                .with_enabled(AnomalyType::BrokerFailure, true);

            assert!(policy.self_healing_enabled(AnomalyType::BrokerFailure));
            assert!(!policy.self_healing_enabled(AnomalyType::GoalViolation));
        }
    }
}
