use serde::Serialize;

use crate::consts::{DEFAULT_NOTE_COLOR, DEFAULT_NOTE_HEIGHT, DEFAULT_NOTE_WIDTH};
use crate::doc::{Note, NoteEdit, NoteId, NoteStore};
use crate::geom::{Point, Rect};
use crate::hit::{drops_in_trash, rects_intersect};
use crate::input::{GestureEnd, InputState};
use crate::size::{SizeField, parse_size};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
///
/// Every variant describes a change to the note collection, so the host
/// persists the full collection whenever a handler returns a non-empty list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    NoteCreated(Note),
    NoteUpdated { id: NoteId, edit: NoteEdit },
    NoteRaised { id: NoteId, z: i64 },
    NoteDeleted { id: NoteId },
    Cleared,
    SnapshotLoaded { count: usize },
}

/// Settings that apply to the next note created.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Committed width for new notes.
    pub width: u32,
    /// Committed height for new notes.
    pub height: u32,
    /// Width text as typed, before it is committed.
    pub width_draft: String,
    /// Height text as typed, before it is committed.
    pub height_draft: String,
    /// Color for new notes.
    pub color: String,
}

impl Default for UiState {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn default() -> Self {
        let width = DEFAULT_NOTE_WIDTH as u32;
        let height = DEFAULT_NOTE_HEIGHT as u32;
        Self {
            width,
            height,
            width_draft: width.to_string(),
            height_draft: height.to_string(),
            color: DEFAULT_NOTE_COLOR.to_string(),
        }
    }
}

/// Board engine state. Owns the notes, the creation settings, and the
/// gesture in progress.
///
/// Pointer coordinates are screen coordinates; note positions are relative to
/// the board's top-left corner at `board_origin`.
#[derive(Debug, Clone)]
pub struct BoardEngine {
    pub doc: NoteStore,
    pub ui: UiState,
    pub input: InputState,
    pub board_origin: Point,
    pub board_width: f64,
    pub board_height: f64,
    pub trash: Option<Rect>,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self {
            doc: NoteStore::new(),
            ui: UiState::default(),
            input: InputState::default(),
            board_origin: Point::default(),
            board_width: 0.0,
            board_height: 0.0,
            trash: None,
        }
    }
}

impl BoardEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the board with a stored snapshot. Any gesture in progress is dropped.
    pub fn load_snapshot(&mut self, notes: Vec<Note>) -> Action {
        let count = notes.len();
        self.doc.load_snapshot(notes);
        self.input = InputState::Idle;
        Action::SnapshotLoaded { count }
    }

    // --- Layout ---

    /// Record where the board sits on screen and how large it is.
    pub fn set_viewport(&mut self, origin: Point, width: f64, height: f64) {
        self.board_origin = origin;
        self.board_width = width;
        self.board_height = height;
    }

    /// Record the trash zone's screen rectangle.
    pub fn set_trash_rect(&mut self, rect: Rect) {
        self.trash = Some(rect);
    }

    // --- Creation settings ---

    /// Choose the color for new notes.
    pub fn select_color(&mut self, color: &str) {
        self.ui.color = color.to_string();
    }

    /// Store the raw text typed into a size input.
    pub fn set_size_draft(&mut self, field: SizeField, text: &str) {
        match field {
            SizeField::Width => self.ui.width_draft = text.to_string(),
            SizeField::Height => self.ui.height_draft = text.to_string(),
        }
    }

    /// Parse the draft for `field`, make it the size for new notes, and
    /// rewrite the draft to the committed value.
    pub fn commit_size(&mut self, field: SizeField) -> u32 {
        match field {
            SizeField::Width => {
                let value = parse_size(&self.ui.width_draft, field);
                self.ui.width = value;
                self.ui.width_draft = value.to_string();
                value
            }
            SizeField::Height => {
                let value = parse_size(&self.ui.height_draft, field);
                self.ui.height = value;
                self.ui.height_draft = value.to_string();
                value
            }
        }
    }

    // --- Note creation ---

    /// Create a note with its top-left corner at `at` (board coordinates)
    /// using the current size and color.
    pub fn create_note_at(&mut self, at: Point) -> Action {
        let note = self.doc.create(at, f64::from(self.ui.width), f64::from(self.ui.height), &self.ui.color);
        Action::NoteCreated(note.clone())
    }

    /// Create a note centered on the board.
    pub fn create_centered(&mut self) -> Action {
        let x = (self.board_width - f64::from(self.ui.width)) / 2.0;
        let y = (self.board_height - f64::from(self.ui.height)) / 2.0;
        self.create_note_at(Point::new(x, y))
    }

    /// Create a note centered on a double-click at `screen_pt`.
    pub fn on_board_double_click(&mut self, screen_pt: Point) -> Action {
        let (bx, by) = screen_pt.delta_from(self.board_origin);
        let x = bx - f64::from(self.ui.width) / 2.0;
        let y = by - f64::from(self.ui.height) / 2.0;
        self.create_note_at(Point::new(x, y))
    }

    // --- Note edits ---

    /// Apply an edit to a note. Returns `None` if the note doesn't exist.
    pub fn edit(&mut self, id: NoteId, edit: NoteEdit) -> Option<Action> {
        if !self.doc.update(id, &edit) {
            return None;
        }
        Some(Action::NoteUpdated { id, edit })
    }

    /// Raise a note above all others.
    pub fn bring_to_front(&mut self, id: NoteId) -> Option<Action> {
        let z = self.doc.bring_to_front(id)?;
        Some(Action::NoteRaised { id, z })
    }

    /// Remove every note.
    pub fn clear_all(&mut self) -> Action {
        self.doc.clear();
        self.input = InputState::Idle;
        Action::Cleared
    }

    // --- Input events ---

    /// Pointer-down on a note's header.
    ///
    /// Raises the note and starts a pending drag. A multi-click (the second
    /// press of a double-click) only raises, so the header can be renamed.
    pub fn on_header_down(&mut self, id: NoteId, screen_pt: Point, click_count: u32) -> Vec<Action> {
        let Some(action) = self.bring_to_front(id) else {
            return Vec::new();
        };
        if click_count <= 1 && self.input.is_idle() {
            if let Some(note) = self.doc.get(id) {
                self.input = InputState::begin_drag(id, screen_pt, Point::new(note.x, note.y));
            }
        }
        vec![action]
    }

    /// Pointer-down on a note's resize handle. Raises the note and starts a resize.
    pub fn on_resizer_down(&mut self, id: NoteId, screen_pt: Point) -> Vec<Action> {
        let Some(action) = self.bring_to_front(id) else {
            return Vec::new();
        };
        if self.input.is_idle() {
            if let Some(note) = self.doc.get(id) {
                self.input = InputState::begin_resize(id, screen_pt, note.w, note.h);
            }
        }
        vec![action]
    }

    /// Click on a note's body. Raises the note.
    pub fn on_body_click(&mut self, id: NoteId) -> Vec<Action> {
        self.bring_to_front(id).into_iter().collect()
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let Some((id, edit)) = self.input.pointer_move(screen_pt) else {
            return Vec::new();
        };
        self.edit(id, edit).into_iter().collect()
    }

    /// Pointer release. Finishes the gesture and deletes the note if a
    /// confirmed drag ended over the trash.
    ///
    /// The release point only moves a note whose drag or resize is already
    /// under way; a pending drag is released as a click wherever it lands.
    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Vec<Action> {
        let mut actions = if self.input.is_dragging() || self.input.is_resizing() {
            self.on_pointer_move(screen_pt)
        } else {
            Vec::new()
        };
        if let Some(end) = self.finish_gesture() {
            if let Some(trash) = self.trash {
                if drops_in_trash(&end, &trash) && self.doc.remove(end.id).is_some() {
                    actions.push(Action::NoteDeleted { id: end.id });
                }
            }
        }
        actions
    }

    /// Pointer lost. Discards the gesture without reporting a drop.
    pub fn on_pointer_cancel(&mut self) {
        self.input = InputState::Idle;
    }

    fn finish_gesture(&mut self) -> Option<GestureEnd> {
        let (id, dragged) = std::mem::take(&mut self.input).release()?;
        let rect = self.note_rect(id)?;
        Some(GestureEnd { id, rect, dragged })
    }

    // --- Queries ---

    /// Look up a note by id.
    #[must_use]
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.doc.get(id)
    }

    /// All notes in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        self.doc.notes()
    }

    /// A note's bounding rectangle in screen coordinates.
    #[must_use]
    pub fn note_rect(&self, id: NoteId) -> Option<Rect> {
        let note = self.doc.get(id)?;
        let top_left = Point::new(note.x, note.y).offset_by(self.board_origin);
        Some(Rect::from_xywh(top_left.x, top_left.y, note.w, note.h))
    }

    /// Whether a note currently overlaps the trash zone. Used for highlighting.
    #[must_use]
    pub fn is_over_trash(&self, id: NoteId) -> bool {
        match (self.note_rect(id), self.trash) {
            (Some(rect), Some(trash)) => rects_intersect(&rect, &trash),
            _ => false,
        }
    }
}
