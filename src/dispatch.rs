//! The outbound HTTP boundary: one POST per trigger action.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;

/// Accept header sent with every dispatch, matching the GitHub
/// `repository_dispatch` API the webhooks are pointed at.
pub const DISPATCH_ACCEPT: &str = "application/vnd.github.v3+json";

/// Body POSTed to the webhook endpoint
#[derive(Debug, Serialize)]
struct DispatchPayload<'a> {
    event_type: &'a str,
}

/// Issues webhook calls over a shared HTTP client.
#[derive(Debug, Clone, Default)]
pub struct WebhookDispatcher {
    client: Client,
}

impl WebhookDispatcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// POST the configured event to `url`. The auth token is forwarded
    /// verbatim in the `Authorization` header. Returns the endpoint's
    /// status code; transport failures surface as errors.
    pub async fn dispatch(&self, url: &str, auth_token: &str, event_type: &str) -> Result<StatusCode> {
        info!("Dispatching '{}' event to {}", event_type, url);

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, auth_token)
            .header(ACCEPT, DISPATCH_ACCEPT)
            .json(&DispatchPayload { event_type })
            .send()
            .await?;

        debug!("Webhook endpoint answered {}", response.status());
        Ok(response.status())
    }
}
