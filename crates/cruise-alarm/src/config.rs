//! Delivery configuration for the alarm notifier.
//!
//! The notifier is configured from the same string-keyed map the detector
//! hands to every notifier implementation. Exactly three keys are read here;
//! everything else in the map belongs to the base notification lifecycle and
//! is ignored.

use std::collections::HashMap;

/// Config key for the alarm delivery endpoint base URL.
pub const SEND_MAIL_URI: &str = "send.mail.uri";
/// Config key for the recipient address string.
pub const SEND_MAIL_RECV: &str = "send.mail.recv";
/// Config key for the cluster identity embedded in the message body.
pub const BOOTSTRAP_SERVERS: &str = "bootstrap.servers";

/// Delivery configuration for [`SendAlarmNotifier`](crate::SendAlarmNotifier).
///
/// All fields are optional. A missing endpoint URI or recipient address
/// disables delivery entirely (each `alert` call logs a warning and skips
/// the POST); a missing cluster identity is embedded as an empty string.
/// Once built, the configuration is immutable for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct AlarmConfig {
    send_mail_uri: Option<String>,
    send_mail_recv: Option<String>,
    bootstrap_servers: Option<String>,
}

impl AlarmConfig {
    /// Builds a configuration from a string-keyed map.
    ///
    /// Reads [`SEND_MAIL_URI`], [`SEND_MAIL_RECV`], and [`BOOTSTRAP_SERVERS`];
    /// all other keys are ignored. Missing keys leave the corresponding field
    /// unset, which is not an error.
    #[must_use]
    pub fn from_map(config: &HashMap<String, String>) -> Self {
        Self {
            send_mail_uri: config.get(SEND_MAIL_URI).cloned(),
            send_mail_recv: config.get(SEND_MAIL_RECV).cloned(),
            bootstrap_servers: config.get(BOOTSTRAP_SERVERS).cloned(),
        }
    }

    /// Sets the delivery endpoint base URL.
    #[must_use]
    pub fn with_send_mail_uri(mut self, uri: impl Into<String>) -> Self {
        self.send_mail_uri = Some(uri.into());
        self
    }

    /// Sets the recipient address string.
    #[must_use]
    pub fn with_send_mail_recv(mut self, recv: impl Into<String>) -> Self {
        self.send_mail_recv = Some(recv.into());
        self
    }

    /// Sets the cluster identity string.
    #[must_use]
    pub fn with_bootstrap_servers(mut self, servers: impl Into<String>) -> Self {
        self.bootstrap_servers = Some(servers.into());
        self
    }

    /// Returns the delivery endpoint base URL, if configured.
    #[must_use]
    pub fn send_mail_uri(&self) -> Option<&str> {
        self.send_mail_uri.as_deref()
    }

    /// Returns the recipient address string, if configured.
    #[must_use]
    pub fn send_mail_recv(&self) -> Option<&str> {
        self.send_mail_recv.as_deref()
    }

    /// Returns the cluster identity string, if configured.
    #[must_use]
    pub fn bootstrap_servers(&self) -> Option<&str> {
        self.bootstrap_servers.as_deref()
    }
}
