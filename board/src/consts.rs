//! Shared constants for the board crate.

// ── Note geometry ───────────────────────────────────────────────

/// Smallest width a note may be resized or created to.
pub const MIN_NOTE_WIDTH: f64 = 80.0;

/// Smallest height a note may be resized or created to.
pub const MIN_NOTE_HEIGHT: f64 = 60.0;

/// Width used for new notes until the user commits another size.
pub const DEFAULT_NOTE_WIDTH: f64 = 200.0;

/// Height used for new notes until the user commits another size.
pub const DEFAULT_NOTE_HEIGHT: f64 = 150.0;

// ── Gestures ────────────────────────────────────────────────────

/// Pointer travel in pixels before a pending drag becomes a real drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

// ── Content ─────────────────────────────────────────────────────

/// Body text given to freshly created notes.
pub const NEW_NOTE_CONTENT: &str = "New note";

/// Fill color for new notes and for stored notes that carry none.
pub const DEFAULT_NOTE_COLOR: &str = "#fff59d";

/// Swatches offered when choosing the color of new notes.
pub const PRESET_COLORS: [&str; 8] =
    ["#fff59d", "#ffd2a6", "#ffb4c1", "#f7c46c", "#c8f7c5", "#cfe8ff", "#f6f6f9", "#d1c4e9"];

/// Swatches offered by a note's own recolor menu.
pub const NOTE_PALETTE: [&str; 8] =
    ["#fff59d", "#ffd2a6", "#ffb4c1", "#c8f7c5", "#cfe8ff", "#f6f6f9", "#fff3bf", "#d1c4e9"];
