//! HTTP transport for alarm delivery.
//!
//! [`AlarmTransport`] is the seam between message construction and the wire.
//! The production implementation, [`HttpTransport`], scopes its HTTP client
//! to a single call: the client is built inside [`AlarmTransport::post`],
//! used for exactly one POST, and dropped on every exit path.

use std::fmt;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::error::Result;

/// One-shot delivery primitive for a serialized alarm payload.
pub trait AlarmTransport: Send + Sync + fmt::Debug {
    /// Issues a single synchronous POST of `body` to `url`.
    ///
    /// # Errors
    ///
    /// Returns `AlarmError::DeliveryFailed` on transport-level failure
    /// (connection, DNS, timeout). HTTP error statuses are not inspected
    /// and do not produce an error.
    fn post(&self, url: &str, body: String) -> Result<()>;
}

/// Blocking HTTP transport with a per-call client.
///
/// No connection pooling across calls: each delivery acquires its own
/// client and releases it before returning, mirroring the one-shot
/// lifecycle of the delivery contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl HttpTransport {
    /// Creates a new HTTP transport.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AlarmTransport for HttpTransport {
    fn post(&self, url: &str, body: String) -> Result<()> {
        let client = reqwest::blocking::Client::builder().build()?;

        let response = client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        // Only transport failures count as delivery failure; the status
        // line and response body are not part of the contract.
        debug!(url = %url, status = %response.status(), "alarm posted");

        Ok(())
    }
}
