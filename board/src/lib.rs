//! Headless sticky-notes board engine.
//!
//! This crate owns everything about the board that does not touch a screen:
//! the note records and their stacking order, the pointer gesture state
//! machine for dragging and resizing, trash-zone hit testing, and parsing of
//! the size inputs used for new notes. The host layer is responsible only
//! for feeding input events to the engine and persisting the resulting
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::BoardEngine`] and its emitted actions |
//! | [`doc`] | Note records, typed edits, and the in-memory [`doc::NoteStore`] |
//! | [`geom`] | Points and screen-space rectangles |
//! | [`input`] | The drag/resize gesture state machine |
//! | [`hit`] | Trash-zone intersection tests |
//! | [`size`] | Free-text width/height parsing |
//! | [`consts`] | Shared constants (minimum sizes, drag threshold, palette) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod size;
