use serde::{Deserialize, Serialize};

/// Number of digit slots in a vault code.
pub const PIN_LEN: usize = 5;

/// Ordered entry slots for a vault code.
///
/// Always exactly [`PIN_LEN`] slots; each slot holds a single ASCII digit or
/// stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PinBuffer {
    slots: [String; PIN_LEN],
}

impl PinBuffer {
    /// Reduce raw input to at most one ASCII digit, discarding everything else.
    #[must_use]
    pub fn sanitize_digit(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).take(1).collect()
    }

    /// Store an already-sanitized value at `index`. Out-of-range indices are
    /// ignored.
    pub fn set_slot(&mut self, index: usize, value: String) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = value;
        }
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> &str {
        self.slots.get(index).map_or("", String::as_str)
    }

    /// Reset every slot to empty.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Assemble the slots into one candidate code.
    #[must_use]
    pub fn joined(&self) -> String {
        self.slots.concat()
    }
}
