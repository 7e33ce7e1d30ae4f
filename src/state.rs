use serde::Serialize;

/// Represents the lifecycle of a single trigger attempt
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TriggerStatus {
    /// No attempt has been made since the panel mounted or the
    /// selection last changed.
    #[default]
    Idle,
    /// A trigger attempt has started and has not reached an outcome.
    /// An attempt against an incomplete entry stays here.
    InFlight,
    Succeeded,
    Failed,
}

impl TriggerStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, TriggerStatus::InFlight)
    }
}

/// Interaction state owned by one panel instance: which webhook is
/// selected and where the current trigger attempt stands.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PanelState {
    pub selected: usize,
    pub status: TriggerStatus,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the selection. Any previous attempt's outcome is discarded
    /// so the new selection starts from a fresh interaction.
    pub fn select(&mut self, index: usize) {
        self.selected = index;
        self.status = TriggerStatus::Idle;
    }

    /// Mark the start of a trigger attempt
    pub fn mark_in_flight(&mut self) {
        self.status = TriggerStatus::InFlight;
    }

    /// Mark the attempt as delivered and accepted
    pub fn mark_succeeded(&mut self) {
        self.status = TriggerStatus::Succeeded;
    }

    /// Mark the attempt as rejected or undeliverable
    pub fn mark_failed(&mut self) {
        self.status = TriggerStatus::Failed;
    }
}
