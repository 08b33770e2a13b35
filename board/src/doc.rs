//! Document model: note records, typed edits, and the in-memory store.
//!
//! This module defines what lives on the board (`Note`), the closed set of
//! mutations a note can receive (`NoteEdit`), and the runtime store that owns
//! every live note (`NoteStore`).
//!
//! Data flows into this layer from storage (JSON deserialization) and from the
//! engine (creation and edits). Renderers read `sorted_notes` for draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_NOTE_COLOR, MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH, NEW_NOTE_CONTENT};
use crate::geom::Point;

/// Unique identifier for a note, assigned from the store's running counter.
pub type NoteId = u64;

fn default_color() -> String {
    DEFAULT_NOTE_COLOR.to_string()
}

/// A sticky note as stored in memory and in persistent storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for this note.
    pub id: NoteId,
    /// Left edge relative to the board origin.
    pub x: f64,
    /// Top edge relative to the board origin.
    pub y: f64,
    /// Width in pixels; never below [`MIN_NOTE_WIDTH`].
    pub w: f64,
    /// Height in pixels; never below [`MIN_NOTE_HEIGHT`].
    pub h: f64,
    /// Stacking order; higher values are drawn above lower values.
    #[serde(default)]
    pub z: i64,
    /// Background color as a CSS color string.
    #[serde(default = "default_color")]
    pub color: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// User-chosen title. `None` displays as `Note #{id}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Note {
    /// Title shown in the note header.
    #[must_use]
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Note #{}", self.id),
        }
    }
}

/// A single mutation applied to one note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoteEdit {
    /// Reposition the note's top-left corner.
    Move { x: f64, y: f64 },
    /// Change the size; values below the minimums are clamped.
    Resize { w: f64, h: f64 },
    /// Change the background color.
    Recolor { color: String },
    /// Change the title. Whitespace is trimmed; an empty title restores the default.
    Rename { title: String },
    /// Replace the body text.
    SetContent { content: String },
}

impl NoteEdit {
    /// Apply this edit to `note` in place.
    pub fn apply(&self, note: &mut Note) {
        match self {
            Self::Move { x, y } => {
                note.x = *x;
                note.y = *y;
            }
            Self::Resize { w, h } => {
                note.w = w.max(MIN_NOTE_WIDTH);
                note.h = h.max(MIN_NOTE_HEIGHT);
            }
            Self::Recolor { color } => {
                note.color.clone_from(color);
            }
            Self::Rename { title } => {
                let trimmed = title.trim();
                note.title = if trimmed.is_empty() { None } else { Some(trimmed.to_string()) };
            }
            Self::SetContent { content } => {
                note.content.clone_from(content);
            }
        }
    }
}

/// In-memory store of notes, kept in insertion order.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl NoteStore {
    /// Create an empty store whose first note will get id 1.
    #[must_use]
    pub fn new() -> Self {
        Self { notes: Vec::new(), next_id: 1 }
    }

    /// Append a new note at `at` with the given size and color.
    ///
    /// The note receives the next id and a stacking order above every
    /// existing note.
    pub fn create(&mut self, at: Point, w: f64, h: f64, color: &str) -> &Note {
        let note = Note {
            id: self.next_id,
            x: at.x,
            y: at.y,
            w: w.max(MIN_NOTE_WIDTH),
            h: h.max(MIN_NOTE_HEIGHT),
            z: self.max_z().saturating_add(1),
            color: color.to_string(),
            content: NEW_NOTE_CONTENT.to_string(),
            title: None,
        };
        self.next_id = self.next_id.saturating_add(1);
        self.notes.push(note);
        &self.notes[self.notes.len() - 1]
    }

    /// Return a reference to a note by id.
    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Apply an edit to an existing note. Returns false if the note doesn't exist.
    pub fn update(&mut self, id: NoteId, edit: &NoteEdit) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        edit.apply(note);
        true
    }

    /// Remove a note by id, returning it if it was present.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(idx))
    }

    /// Raise a note above all others. Returns the new z, or `None` if absent.
    pub fn bring_to_front(&mut self, id: NoteId) -> Option<i64> {
        let z = self.max_z().saturating_add(1);
        let note = self.notes.iter_mut().find(|n| n.id == id)?;
        note.z = z;
        Some(z)
    }

    /// Remove every note. The id counter keeps running.
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Replace all notes with a full snapshot and resume ids after the largest one.
    ///
    /// Counters saturate rather than overflow, so extreme stored values
    /// cannot take the board down.
    pub fn load_snapshot(&mut self, notes: Vec<Note>) {
        self.next_id = notes.iter().map(|n| n.id).max().unwrap_or(0).saturating_add(1);
        self.notes = notes;
    }

    /// Largest z in the store, never below zero.
    #[must_use]
    pub fn max_z(&self) -> i64 {
        self.notes.iter().map(|n| n.z).fold(0, i64::max)
    }

    /// The id the next created note will receive.
    #[must_use]
    pub fn next_id(&self) -> NoteId {
        self.next_id
    }

    /// All notes in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// All notes sorted by z for drawing; equal z keeps insertion order.
    #[must_use]
    pub fn sorted_notes(&self) -> Vec<&Note> {
        let mut notes: Vec<&Note> = self.notes.iter().collect();
        notes.sort_by_key(|n| n.z);
        notes
    }

    /// Number of notes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns `true` if the store contains no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
