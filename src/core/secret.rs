//! Secret codes and the level-indexed generation policy.
//!
//! - Levels below [`REPEAT_COLORS_FROM_LEVEL`]: four pairwise-distinct
//!   colors, the first four of a uniformly shuffled palette.
//! - From that level on: each position drawn independently and uniformly,
//!   so repeats are possible.

use serde::{Deserialize, Serialize};

use super::color::{Color, PALETTE, PALETTE_SIZE};
use super::rng::GameRng;

/// Number of pegs in a code.
pub const CODE_LENGTH: usize = 4;

/// First level whose secrets may repeat colors.
pub const REPEAT_COLORS_FROM_LEVEL: u32 = 11;

/// The hidden code for one level attempt.
///
/// Immutable once generated; a retry reuses it, an advance replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret([Color; CODE_LENGTH]);

impl Secret {
    /// Wrap a fixed code.
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// The colors, in position order.
    #[must_use]
    pub fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Whether any color appears more than once.
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        let mut seen = [false; PALETTE_SIZE];
        self.0.iter().any(|c| std::mem::replace(&mut seen[c.index()], true))
    }
}

impl From<[Color; CODE_LENGTH]> for Secret {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }
}

/// Whether secrets for `level` may contain repeated colors.
#[must_use]
pub fn allows_repeats(level: u32) -> bool {
    level >= REPEAT_COLORS_FROM_LEVEL
}

/// Generate the secret for a level.
pub fn generate_secret(level: u32, rng: &mut GameRng) -> Secret {
    if allows_repeats(level) {
        Secret(std::array::from_fn(|_| PALETTE[rng.gen_index(PALETTE_SIZE)]))
    } else {
        let mut palette = PALETTE;
        rng.shuffle(&mut palette);
        Secret([palette[0], palette[1], palette[2], palette[3]])
    }
}
