use crate::config::VaultConfig;
use crate::pin::{PIN_LEN, PinBuffer};
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// Tri-state result of comparing a completed buffer to the active code.
///
/// Derived exclusively by the evaluation rule; never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    Idle,
    Success,
    Error,
}

/// Per-slot correctness hint used for cell border styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitHint {
    Empty,
    Match,
    Mismatch,
}

/// What a digit edit did, so the caller can steer keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// No scenario selected yet; the warning flag was raised and nothing
    /// was stored.
    Rejected,
    /// The slot was updated. `advance_to` names the next slot to focus when
    /// a digit landed anywhere but the last cell.
    Stored { advance_to: Option<usize> },
}

/// The whole puzzle state: active scenario, entry buffer, outcome and the
/// two derived UI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct VaultState {
    config: VaultConfig,
    selected: Option<Scenario>,
    pin: PinBuffer,
    outcome: Outcome,
    overlay_open: bool,
    show_warning: bool,
}

impl VaultState {
    #[must_use]
    pub fn new(config: VaultConfig) -> Self {
        Self {
            config,
            selected: None,
            pin: PinBuffer::default(),
            outcome: Outcome::Idle,
            overlay_open: false,
            show_warning: false,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<Scenario> {
        self.selected
    }

    #[must_use]
    pub const fn pin(&self) -> &PinBuffer {
        &self.pin
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    #[must_use]
    pub const fn show_warning(&self) -> bool {
        self.show_warning
    }

    /// Activate `scenario`, clearing the warning, the buffer and any prior
    /// outcome. Selecting is always allowed, from any state.
    pub fn select_scenario(&mut self, scenario: Scenario) {
        self.selected = Some(scenario);
        self.show_warning = false;
        self.pin.clear();
        self.outcome = Outcome::Idle;
        self.overlay_open = false;
    }

    /// Apply raw input to the slot at `index`.
    ///
    /// Without an active scenario this is the one guarded error path: the
    /// warning flag is raised and the buffer stays untouched. Otherwise the
    /// input is sanitized, stored and the completion rule re-runs.
    pub fn edit_digit(&mut self, index: usize, raw: &str) -> EditOutcome {
        if self.selected.is_none() {
            self.show_warning = true;
            return EditOutcome::Rejected;
        }

        let value = PinBuffer::sanitize_digit(raw);
        let advance_to = (!value.is_empty() && index + 1 < PIN_LEN).then_some(index + 1);
        self.pin.set_slot(index, value);
        self.evaluate();
        EditOutcome::Stored { advance_to }
    }

    /// Backspace on an already-empty slot navigates to the previous one.
    /// Pure navigation, no mutation.
    #[must_use]
    pub fn backspace(&self, index: usize) -> Option<usize> {
        if self.pin.slot(index).is_empty() && index > 0 {
            Some(index - 1)
        } else {
            None
        }
    }

    /// Close the overlay. After an error outcome the buffer is cleared for
    /// retry and `true` is returned so the caller can refocus the first
    /// slot; after success the state is terminal and `false` is returned.
    pub fn dismiss_overlay(&mut self) -> bool {
        self.overlay_open = false;
        if self.outcome == Outcome::Error {
            self.pin.clear();
            self.outcome = Outcome::Idle;
            true
        } else {
            false
        }
    }

    /// Immediate correctness hint for the digit at `index` against the
    /// active code. Not persisted anywhere; recomputed per render.
    #[must_use]
    pub fn digit_hint(&self, index: usize) -> DigitHint {
        let Some(scenario) = self.selected else {
            return DigitHint::Empty;
        };
        let digit = self.pin.slot(index);
        if digit.is_empty() {
            return DigitHint::Empty;
        }
        let expected = self
            .config
            .expected(scenario)
            .and_then(|code| code.chars().nth(index));
        if expected == digit.chars().next() {
            DigitHint::Match
        } else {
            DigitHint::Mismatch
        }
    }

    // Completion rule: a full buffer with an active scenario settles into
    // success or error and opens the overlay; anything else stays idle.
    fn evaluate(&mut self) {
        let Some(scenario) = self.selected else {
            self.settle_idle();
            return;
        };
        if !self.pin.is_complete() {
            self.settle_idle();
            return;
        }

        let entered = self.pin.joined();
        self.outcome = if self.config.expected(scenario) == Some(entered.as_str()) {
            Outcome::Success
        } else {
            Outcome::Error
        };
        self.overlay_open = true;
        log::debug!("attempt for '{scenario}' settled as {:?}", self.outcome);
    }

    fn settle_idle(&mut self) {
        self.outcome = Outcome::Idle;
        self.overlay_open = false;
    }
}
