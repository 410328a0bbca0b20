//! Network access gate
//!
//! Restricts menu access to clients on the café network by checking the
//! caller's public address against a configured prefix allow-list.
//!
//! This is a best-effort heuristic, not a trust boundary: the address is
//! self-reported by an external lookup service and prefix matching carries
//! no cryptographic binding to the café's actual network. A client that
//! spoofs the lookup gets through. The gate exists to keep passers-by from
//! ordering to tables they are not sitting at, nothing more.

use crate::ClientConfig;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Gate decision, recomputed once per page load and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessDecision {
    /// Lookup in flight; the UI shows a neutral state
    #[default]
    Checking,
    Allowed,
    Denied,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    ip: String,
}

/// Access gate backed by a public address lookup service
#[derive(Debug, Clone)]
pub struct AccessGate {
    client: Client,
    lookup_url: String,
    allowed_prefixes: Vec<String>,
}

impl AccessGate {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            lookup_url: config.lookup_url.clone(),
            allowed_prefixes: config.allowed_prefixes.clone(),
        }
    }

    /// Check whether the current client may view the menu
    ///
    /// Fails closed: any lookup failure (network, non-2xx, malformed body)
    /// is logged and yields `Denied`. No automatic retry; the caller re-runs
    /// the check on user action.
    pub async fn check(&self) -> AccessDecision {
        let ip = match self.lookup_ip().await {
            Ok(ip) => ip,
            Err(err) => {
                tracing::warn!(error = %err, "Address lookup failed, denying access");
                return AccessDecision::Denied;
            }
        };

        if self.matches(&ip) {
            tracing::debug!(%ip, "Address matched allow-list");
            AccessDecision::Allowed
        } else {
            tracing::info!(%ip, "Address outside café network, denying access");
            AccessDecision::Denied
        }
    }

    async fn lookup_ip(&self) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .get(&self.lookup_url)
            .send()
            .await?
            .error_for_status()?;
        let body: LookupResponse = response.json().await?;
        Ok(body.ip)
    }

    fn matches(&self, ip: &str) -> bool {
        self.allowed_prefixes
            .iter()
            .any(|prefix| ip.starts_with(prefix.as_str()))
    }
}
