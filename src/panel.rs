use tracing::{error, info, warn};

use crate::dispatch::WebhookDispatcher;
use crate::host::HostWindow;
use crate::state::{PanelState, TriggerStatus};
use crate::view::{
    DEFAULT_BUTTON_TEXT, FAILURE_NOTE, NO_AUTH_TOKEN_COPY, NO_AUTH_TOKEN_NOTE, NO_WEBHOOK_URL_COPY,
    NO_WEBHOOK_URL_NOTE, NO_WEBHOOKS_COPY, NO_WEBHOOKS_NOTE, Note, PanelContent, PanelView,
    SUCCESS_NOTE, SelectorView, TRIGGER_FAILED_COPY, TRIGGER_SUCCEEDED_COPY, TRIGGER_WEBHOOK_BUTTON,
    TriggerButton, WEBHOOK_SELECT,
};
use crate::{PanelParameters, WebhookConfig};

/// The sidebar panel: owns the host-supplied webhook list and the state
/// of the current trigger interaction.
pub struct WebhookPanel {
    webhooks: Option<Vec<WebhookConfig>>,
    state: PanelState,
    dispatcher: WebhookDispatcher,
}

impl WebhookPanel {
    /// Create the panel from host parameters and ask the host to keep the
    /// embedding frame fitted to the panel's content.
    pub fn mount(params: PanelParameters, host: &dyn HostWindow) -> Self {
        host.start_auto_resizer();
        Self {
            webhooks: params.webhooks,
            state: PanelState::new(),
            dispatcher: WebhookDispatcher::new(),
        }
    }

    fn entries(&self) -> &[WebhookConfig] {
        self.webhooks.as_deref().unwrap_or(&[])
    }

    /// The currently selected webhook, if any are configured.
    pub fn selected_webhook(&self) -> Option<&WebhookConfig> {
        self.entries().get(self.state.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected
    }

    pub fn status(&self) -> TriggerStatus {
        self.state.status
    }

    /// Change the selected webhook, starting a fresh interaction.
    /// Out-of-range indices are ignored; the stored index stays valid.
    pub fn select(&mut self, index: usize) {
        let count = self.entries().len();
        if index >= count {
            warn!("Ignoring selection of webhook {} ({} configured)", index, count);
            return;
        }
        self.state.select(index);
    }

    /// Run one trigger attempt against the selected webhook.
    ///
    /// An entry missing its URL, auth token or event type is never
    /// dispatched; the attempt then stays in flight with no terminal note,
    /// matching the host platform's observed behavior. Selecting a webhook
    /// again resets the panel to idle.
    pub async fn trigger(&mut self) {
        if self.selected_webhook().is_none() {
            return;
        }
        self.state.mark_in_flight();

        let webhook = self.entries()[self.state.selected].clone();
        let label = webhook.label(self.state.selected);

        let Some((url, token, event_type)) = webhook.dispatch_fields() else {
            warn!(
                "Webhook '{}' is missing its URL, auth token or event type; nothing dispatched",
                label
            );
            return;
        };

        match self.dispatcher.dispatch(url, token, event_type).await {
            Ok(status) if status.is_success() => {
                info!("Webhook '{}' trigger succeeded ({})", label, status);
                self.state.mark_succeeded();
            }
            Ok(status) => {
                error!("Webhook '{}' trigger failed: endpoint answered {}", label, status);
                self.state.mark_failed();
            }
            Err(e) => {
                // Transport failures get the same failure note as HTTP
                // rejections; the underlying cause only goes to the log.
                error!("Webhook '{}' trigger failed: {}", label, e);
                self.state.mark_failed();
            }
        }
    }

    /// Project the configuration and interaction state into a render model.
    pub fn view(&self) -> PanelView {
        let entries = self.entries();
        if entries.is_empty() {
            return PanelView::Unconfigured(Note::warning(
                NO_WEBHOOKS_NOTE,
                NO_WEBHOOKS_COPY.to_string(),
            ));
        }

        let selected = self.state.selected;
        let webhook = &entries[selected];
        let label = webhook.label(selected);

        let selector = (entries.len() > 1).then(|| SelectorView {
            test_id: WEBHOOK_SELECT,
            options: entries.iter().enumerate().map(|(i, w)| w.label(i)).collect(),
            selected,
        });

        let in_flight = self.state.status.is_in_flight();
        let button = TriggerButton {
            test_id: TRIGGER_WEBHOOK_BUTTON,
            label: webhook
                .button_text()
                .unwrap_or(DEFAULT_BUTTON_TEXT)
                .to_string(),
            disabled: !webhook.has_webhook_url() || in_flight,
            busy: in_flight,
        };

        let mut notes = Vec::new();
        if !webhook.has_webhook_url() {
            notes.push(Note::warning(
                NO_WEBHOOK_URL_NOTE,
                format!("{}: {}", NO_WEBHOOK_URL_COPY, label),
            ));
        }
        if !webhook.has_auth_token() {
            notes.push(Note::warning(
                NO_AUTH_TOKEN_NOTE,
                format!("{}: {}", NO_AUTH_TOKEN_COPY, label),
            ));
        }
        match self.state.status {
            TriggerStatus::Succeeded => notes.push(Note::positive(
                SUCCESS_NOTE,
                format!("{}: {}", TRIGGER_SUCCEEDED_COPY, label),
            )),
            TriggerStatus::Failed => notes.push(Note::negative(
                FAILURE_NOTE,
                format!("{}: {}", TRIGGER_FAILED_COPY, label),
            )),
            TriggerStatus::Idle | TriggerStatus::InFlight => {}
        }

        PanelView::Panel(PanelContent::new(selector, button, notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DetachedWindow;
    use std::cell::Cell;

    struct CountingWindow {
        calls: Cell<usize>,
    }

    impl HostWindow for CountingWindow {
        fn start_auto_resizer(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn webhook(name: &str, url: &str, button: &str, token: &str, event: &str) -> WebhookConfig {
        WebhookConfig {
            name: (!name.is_empty()).then(|| name.to_string()),
            webhook_url: (!url.is_empty()).then(|| url.to_string()),
            button_text: (!button.is_empty()).then(|| button.to_string()),
            auth_token: (!token.is_empty()).then(|| token.to_string()),
            event_type: (!event.is_empty()).then(|| event.to_string()),
        }
    }

    fn panel_with(webhooks: Vec<WebhookConfig>) -> WebhookPanel {
        WebhookPanel::mount(
            PanelParameters {
                webhooks: Some(webhooks),
            },
            &DetachedWindow,
        )
    }

    #[test]
    fn mount_starts_the_host_auto_resizer_once() {
        let window = CountingWindow { calls: Cell::new(0) };
        let _panel = WebhookPanel::mount(PanelParameters::default(), &window);
        assert_eq!(window.calls.get(), 1);
    }

    #[test]
    fn absent_webhook_list_renders_the_guard_note_only() {
        let panel = WebhookPanel::mount(PanelParameters::default(), &DetachedWindow);
        let view = panel.view();

        assert!(view.has_note(NO_WEBHOOKS_NOTE));
        assert!(view.selector().is_none());
        assert!(view.button().is_none());
    }

    #[test]
    fn empty_webhook_list_renders_the_guard_note_only() {
        let panel = panel_with(Vec::new());
        assert!(panel.view().has_note(NO_WEBHOOKS_NOTE));
        assert!(panel.view().button().is_none());
    }

    #[test]
    fn single_webhook_renders_no_selector() {
        let panel = panel_with(vec![webhook("Solo", "https://example.com/h", "", "t", "e")]);
        assert!(panel.view().selector().is_none());
    }

    #[test]
    fn selector_lists_entry_labels_in_order() {
        let panel = panel_with(vec![
            webhook("Staging", "https://example.com/1", "", "t", "e"),
            webhook("", "https://example.com/2", "", "t", "e"),
            webhook("Production", "https://example.com/3", "", "t", "e"),
        ]);

        let view = panel.view();
        let selector = view.selector().expect("selector should render");
        assert_eq!(selector.options, vec!["Staging", "Webhook 2", "Production"]);
        assert_eq!(selector.selected, 0);
    }

    #[test]
    fn button_label_prefers_configured_text() {
        let panel = panel_with(vec![webhook("", "https://example.com/h", "Deploy now", "t", "e")]);
        assert_eq!(panel.view().button().unwrap().label, "Deploy now");
    }

    #[test]
    fn button_label_falls_back_to_default() {
        let panel = panel_with(vec![webhook("", "https://example.com/h", "", "t", "e")]);
        assert_eq!(panel.view().button().unwrap().label, DEFAULT_BUTTON_TEXT);
    }

    #[test]
    fn button_is_disabled_without_a_url() {
        let panel = panel_with(vec![webhook("No url", "", "", "t", "e")]);
        let view = panel.view();

        let button = view.button().unwrap();
        assert!(button.disabled);
        assert!(!button.busy);
        assert!(view.has_note(NO_WEBHOOK_URL_NOTE));
    }

    #[test]
    fn missing_field_warnings_track_the_selected_entry() {
        let mut panel = panel_with(vec![
            webhook("Complete", "https://example.com/1", "", "t", "e"),
            webhook("No token", "https://example.com/2", "", "", "e"),
        ]);

        let view = panel.view();
        assert!(!view.has_note(NO_WEBHOOK_URL_NOTE));
        assert!(!view.has_note(NO_AUTH_TOKEN_NOTE));

        panel.select(1);
        let view = panel.view();
        assert!(!view.has_note(NO_WEBHOOK_URL_NOTE));
        assert!(view.has_note(NO_AUTH_TOKEN_NOTE));
        assert_eq!(
            view.note(NO_AUTH_TOKEN_NOTE).unwrap().message,
            "No auth token is configured: No token"
        );
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut panel = panel_with(vec![webhook("Solo", "https://example.com/h", "", "t", "e")]);
        panel.select(5);
        assert_eq!(panel.selected_index(), 0);
    }

    #[tokio::test]
    async fn trigger_without_webhooks_is_a_noop() {
        let mut panel = WebhookPanel::mount(PanelParameters::default(), &DetachedWindow);
        panel.trigger().await;
        assert_eq!(panel.status(), TriggerStatus::Idle);
    }

    #[tokio::test]
    async fn incomplete_entry_leaves_the_attempt_in_flight() {
        // URL present but no auth token: the button stays enabled, yet the
        // attempt aborts before dispatch and never reaches an outcome.
        let mut panel = panel_with(vec![webhook("No token", "https://example.com/h", "", "", "e")]);
        panel.trigger().await;

        assert_eq!(panel.status(), TriggerStatus::InFlight);
        let view = panel.view();
        let button = view.button().unwrap();
        assert!(button.busy);
        assert!(button.disabled);
        assert!(!view.has_note(SUCCESS_NOTE));
        assert!(!view.has_note(FAILURE_NOTE));
        // The inline warning still points at the missing field.
        assert!(view.has_note(NO_AUTH_TOKEN_NOTE));
    }

    #[tokio::test]
    async fn selecting_again_recovers_a_stuck_attempt() {
        let mut panel = panel_with(vec![webhook("No token", "https://example.com/h", "", "", "e")]);
        panel.trigger().await;
        assert_eq!(panel.status(), TriggerStatus::InFlight);

        panel.select(0);
        assert_eq!(panel.status(), TriggerStatus::Idle);
        assert!(!panel.view().button().unwrap().busy);
    }
}
