pub mod dispatch;
pub mod error;
pub mod host;
pub mod panel;
pub mod state;
pub mod view;

use serde::Deserialize;

use crate::error::{PanelError, Result};

/// Installation parameters the host platform injects into the panel.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PanelParameters {
    pub webhooks: Option<Vec<WebhookConfig>>,
}

impl PanelParameters {
    /// Decode the raw parameter object handed over by the host bridge.
    pub fn from_host_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| {
            PanelError::InvalidParameters(format!("Failed to decode host parameters: {}", e))
        })
    }
}

/// One preconfigured webhook target: endpoint, credentials and event metadata.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
}

impl WebhookConfig {
    /// Returns true if a non-empty webhook URL is set.
    pub fn has_webhook_url(&self) -> bool {
        self.webhook_url
            .as_ref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    /// Returns true if a non-empty auth token is set.
    pub fn has_auth_token(&self) -> bool {
        self.auth_token
            .as_ref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    /// The button text, if configured non-empty.
    pub fn button_text(&self) -> Option<&str> {
        self.button_text.as_deref().filter(|s| !s.is_empty())
    }

    /// Display name for selector options and status notes.
    /// Falls back to a synthesized label based on the entry's position.
    pub fn label(&self, index: usize) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Webhook {}", index + 1),
        }
    }

    /// The (url, auth token, event type) triple needed to dispatch,
    /// present only when all three are set and non-empty.
    pub fn dispatch_fields(&self) -> Option<(&str, &str, &str)> {
        match (
            self.webhook_url.as_deref(),
            self.auth_token.as_deref(),
            self.event_type.as_deref(),
        ) {
            (Some(url), Some(token), Some(event))
                if !url.is_empty() && !token.is_empty() && !event.is_empty() =>
            {
                Some((url, token, event))
            }
            _ => None,
        }
    }
}
