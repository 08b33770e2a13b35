//! Input model: the gesture state machine for dragging and resizing notes.
//!
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up. Each active variant carries the context needed to turn the
//! current pointer position into a [`NoteEdit`]. The engine takes the state
//! out on release or cancel, so nothing from one gesture survives into the
//! next.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{DRAG_THRESHOLD_PX, MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH};
use crate::doc::{NoteEdit, NoteId};
use crate::geom::{Point, Rect};

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer went down on a note header but has not yet travelled past
    /// [`DRAG_THRESHOLD_PX`]. Releasing now is a click.
    PendingDrag {
        /// Id of the note under the pointer.
        id: NoteId,
        /// Screen position of the pointer-down.
        start: Point,
        /// Note position at pointer-down.
        orig: Point,
    },
    /// The user is moving a note across the board.
    DraggingNote {
        /// Id of the note being dragged.
        id: NoteId,
        /// Screen position of the pointer-down.
        start: Point,
        /// Note position at pointer-down.
        orig: Point,
    },
    /// The user is resizing a note from its corner handle.
    ResizingNote {
        /// Id of the note being resized.
        id: NoteId,
        /// Screen position of the pointer-down.
        start: Point,
        /// Note width at pointer-down.
        orig_w: f64,
        /// Note height at pointer-down.
        orig_h: f64,
    },
}

/// Outcome of a finished gesture, handed to the trash hit-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEnd {
    /// Note the gesture acted on.
    pub id: NoteId,
    /// Final screen-space bounding rectangle of the note.
    pub rect: Rect,
    /// `true` only when a confirmed drag ended; clicks and resizes are `false`.
    pub dragged: bool,
}

impl InputState {
    /// Start tracking a possible drag from a note header.
    #[must_use]
    pub fn begin_drag(id: NoteId, start: Point, orig: Point) -> Self {
        Self::PendingDrag { id, start, orig }
    }

    /// Start tracking a resize from a note's corner handle.
    #[must_use]
    pub fn begin_resize(id: NoteId, start: Point, orig_w: f64, orig_h: f64) -> Self {
        Self::ResizingNote { id, start, orig_w, orig_h }
    }

    /// Id of the note the current gesture acts on, if any.
    #[must_use]
    pub fn note_id(&self) -> Option<NoteId> {
        match self {
            Self::Idle => None,
            Self::PendingDrag { id, .. } | Self::DraggingNote { id, .. } | Self::ResizingNote { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether a drag has been confirmed by moving past the threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingNote { .. })
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingNote { .. })
    }

    /// Advance the gesture to `pointer` and return the edit it implies.
    ///
    /// A pending drag stays pending (and emits nothing) until the squared
    /// travel exceeds the squared threshold.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<(NoteId, NoteEdit)> {
        match *self {
            Self::Idle => None,
            Self::PendingDrag { id, start, orig } => {
                let (dx, dy) = pointer.delta_from(start);
                if dx * dx + dy * dy <= DRAG_THRESHOLD_PX * DRAG_THRESHOLD_PX {
                    return None;
                }
                *self = Self::DraggingNote { id, start, orig };
                Some((id, NoteEdit::Move { x: orig.x + dx, y: orig.y + dy }))
            }
            Self::DraggingNote { id, start, orig } => {
                let (dx, dy) = pointer.delta_from(start);
                Some((id, NoteEdit::Move { x: orig.x + dx, y: orig.y + dy }))
            }
            Self::ResizingNote { id, start, orig_w, orig_h } => {
                let (dx, dy) = pointer.delta_from(start);
                let w = (orig_w + dx).max(MIN_NOTE_WIDTH);
                let h = (orig_h + dy).max(MIN_NOTE_HEIGHT);
                Some((id, NoteEdit::Resize { w, h }))
            }
        }
    }

    /// Finish the gesture. Returns the note id and whether a real drag happened.
    #[must_use]
    pub fn release(self) -> Option<(NoteId, bool)> {
        match self {
            Self::Idle => None,
            Self::PendingDrag { id, .. } | Self::ResizingNote { id, .. } => Some((id, false)),
            Self::DraggingNote { id, .. } => Some((id, true)),
        }
    }
}
