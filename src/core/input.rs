//! The guess being composed before submission.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::secret::CODE_LENGTH;

/// Highest valid slot index.
pub const LAST_SLOT: usize = CODE_LENGTH - 1;

/// Four slots, each empty or holding one color.
///
/// Placement through [`CurrentInput::place`] keeps each color in at most
/// one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrentInput([Option<Color>; CODE_LENGTH]);

impl CurrentInput {
    /// All slots empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self([None; CODE_LENGTH])
    }

    /// Build from raw slots. Duplicates are not checked.
    #[must_use]
    pub const fn from_slots(slots: [Option<Color>; CODE_LENGTH]) -> Self {
        Self(slots)
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Color>; CODE_LENGTH] {
        &self.0
    }

    /// Color in a slot; `None` if empty or out of range.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Color> {
        self.0.get(slot).copied().flatten()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// The complete guess, or `None` while any slot is empty.
    #[must_use]
    pub fn filled(&self) -> Option<[Color; CODE_LENGTH]> {
        let [a, b, c, d] = self.0;
        Some([a?, b?, c?, d?])
    }

    /// Put `color` in `slot`, vacating any other slot already holding it.
    pub(crate) fn place(&mut self, slot: usize, color: Color) {
        for (i, held) in self.0.iter_mut().enumerate() {
            if i != slot && *held == Some(color) {
                *held = None;
            }
        }
        self.0[slot] = Some(color);
    }

    pub(crate) fn clear(&mut self, slot: usize) {
        self.0[slot] = None;
    }
}

impl From<[Color; CODE_LENGTH]> for CurrentInput {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors.map(Some))
    }
}
