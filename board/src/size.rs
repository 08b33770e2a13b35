//! Parsing of the free-text width/height inputs used for new notes.

#[cfg(test)]
#[path = "size_test.rs"]
mod size_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH};

/// Which dimension a size input controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeField {
    #[serde(alias = "w")]
    Width,
    #[serde(alias = "h")]
    Height,
}

impl SizeField {
    /// Smallest value this field accepts.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn min(self) -> u32 {
        match self {
            Self::Width => MIN_NOTE_WIDTH as u32,
            Self::Height => MIN_NOTE_HEIGHT as u32,
        }
    }
}

/// Parse a size typed by the user.
///
/// Surrounding whitespace is ignored. Empty, unparsable, and non-finite
/// input yields the field minimum; anything else is floored and raised to at
/// least the minimum. There is no upper bound.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_size(raw: &str, field: SizeField) -> u32 {
    let min = field.min();
    let Ok(n) = raw.trim().parse::<f64>() else {
        return min;
    };
    if !n.is_finite() {
        return min;
    }
    let floored = n.floor();
    if floored < f64::from(min) {
        return min;
    }
    // Saturates at u32::MAX for absurdly large input.
    floored as u32
}
