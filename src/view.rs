//! Render model for the panel.
//!
//! The panel does not draw anything itself; it projects its configuration
//! and interaction state into this tree, and the embedding shim renders it.
//! Everything is `Serialize` so a bridge can consume the tree as JSON.

use serde::Serialize;

pub const NO_WEBHOOKS_COPY: &str = "There is no webhook configured in the app's configuration";
pub const NO_WEBHOOK_URL_COPY: &str = "No webhook URL is configured";
pub const NO_AUTH_TOKEN_COPY: &str = "No auth token is configured";
pub const TRIGGER_FAILED_COPY: &str = "Trigger failed";
pub const TRIGGER_SUCCEEDED_COPY: &str = "Trigger succeeded";
pub const DEFAULT_BUTTON_TEXT: &str = "Trigger webhook";

pub const NO_WEBHOOKS_NOTE: &str = "no-webhooks-note";
pub const NO_WEBHOOK_URL_NOTE: &str = "no-webhook-url-note";
pub const NO_AUTH_TOKEN_NOTE: &str = "no-auth-token-note";
pub const SUCCESS_NOTE: &str = "success-note";
pub const FAILURE_NOTE: &str = "failure-note";
pub const WEBHOOK_SELECT: &str = "webhook-select";
pub const TRIGGER_WEBHOOK_BUTTON: &str = "trigger-webhook-button";

/// Container height hint for the embedding frame, in pixels.
const MIN_HEIGHT_WITH_SELECTOR: u16 = 160;
const MIN_HEIGHT_SINGLE: u16 = 120;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Warning,
    Positive,
    Negative,
}

/// One inline status note
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Note {
    pub kind: NoteKind,
    pub test_id: &'static str,
    pub message: String,
}

impl Note {
    pub fn warning(test_id: &'static str, message: String) -> Self {
        Self {
            kind: NoteKind::Warning,
            test_id,
            message,
        }
    }

    pub fn positive(test_id: &'static str, message: String) -> Self {
        Self {
            kind: NoteKind::Positive,
            test_id,
            message,
        }
    }

    pub fn negative(test_id: &'static str, message: String) -> Self {
        Self {
            kind: NoteKind::Negative,
            test_id,
            message,
        }
    }
}

/// The choice control shown when more than one webhook is configured
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectorView {
    pub test_id: &'static str,
    pub options: Vec<String>,
    pub selected: usize,
}

/// The single action control bound to the current selection
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TriggerButton {
    pub test_id: &'static str,
    pub label: String,
    pub disabled: bool,
    pub busy: bool,
}

/// Main panel content: selector (when applicable), button, visible notes
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PanelContent {
    pub min_height: u16,
    pub selector: Option<SelectorView>,
    pub button: TriggerButton,
    pub notes: Vec<Note>,
}

impl PanelContent {
    pub fn new(selector: Option<SelectorView>, button: TriggerButton, notes: Vec<Note>) -> Self {
        let min_height = if selector.is_some() {
            MIN_HEIGHT_WITH_SELECTOR
        } else {
            MIN_HEIGHT_SINGLE
        };
        Self {
            min_height,
            selector,
            button,
            notes,
        }
    }
}

/// The full render model of the panel
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PanelView {
    /// No webhook list was supplied; a lone warning note is the entire
    /// output. Terminal display state.
    Unconfigured(Note),
    Panel(PanelContent),
}

impl PanelView {
    /// Find a visible note by its test id.
    pub fn note(&self, test_id: &str) -> Option<&Note> {
        match self {
            PanelView::Unconfigured(note) => (note.test_id == test_id).then_some(note),
            PanelView::Panel(content) => content.notes.iter().find(|n| n.test_id == test_id),
        }
    }

    pub fn has_note(&self, test_id: &str) -> bool {
        self.note(test_id).is_some()
    }

    pub fn selector(&self) -> Option<&SelectorView> {
        match self {
            PanelView::Unconfigured(_) => None,
            PanelView::Panel(content) => content.selector.as_ref(),
        }
    }

    pub fn button(&self) -> Option<&TriggerButton> {
        match self {
            PanelView::Unconfigured(_) => None,
            PanelView::Panel(content) => Some(&content.button),
        }
    }
}
