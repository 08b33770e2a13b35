#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Board at screen (220, 0), 1000x800, trash in the bottom-right corner.
fn engine() -> BoardEngine {
    let mut engine = BoardEngine::new();
    engine.set_viewport(pt(220.0, 0.0), 1000.0, 800.0);
    engine.set_trash_rect(Rect::from_xywh(1100.0, 680.0, 100.0, 100.0));
    engine
}

fn create_at(engine: &mut BoardEngine, x: f64, y: f64) -> NoteId {
    match engine.create_note_at(pt(x, y)) {
        Action::NoteCreated(note) => note.id,
        other => panic!("expected NoteCreated, got {other:?}"),
    }
}

fn has_delete(actions: &[Action], id: NoteId) -> bool {
    actions.iter().any(|a| matches!(a, Action::NoteDeleted { id: d } if *d == id))
}

// =============================================================
// Creation
// =============================================================

#[test]
fn create_default_note() {
    let mut engine = engine();
    let id = create_at(&mut engine, 10.0, 10.0);
    assert_eq!(engine.notes().len(), 1);
    let note = engine.note(id).unwrap();
    assert_eq!(note.w, 200.0);
    assert_eq!(note.h, 150.0);
    assert_eq!(note.color, "#fff59d");
    assert_eq!(note.display_title(), "Note #1");
}

#[test]
fn two_notes_stack_in_creation_order() {
    let mut engine = engine();
    let a = create_at(&mut engine, 0.0, 0.0);
    let b = create_at(&mut engine, 0.0, 0.0);
    assert!(engine.note(b).unwrap().z > engine.note(a).unwrap().z);
}

#[test]
fn create_uses_selected_color_and_committed_size() {
    let mut engine = engine();
    engine.select_color("#cfe8ff");
    engine.set_size_draft(SizeField::Width, "320.7");
    engine.set_size_draft(SizeField::Height, "10");
    assert_eq!(engine.commit_size(SizeField::Width), 320);
    assert_eq!(engine.commit_size(SizeField::Height), 60);
    let id = create_at(&mut engine, 0.0, 0.0);
    let note = engine.note(id).unwrap();
    assert_eq!((note.w, note.h), (320.0, 60.0));
    assert_eq!(note.color, "#cfe8ff");
}

#[test]
fn commit_size_rewrites_draft() {
    let mut engine = engine();
    engine.set_size_draft(SizeField::Width, "  abc ");
    engine.commit_size(SizeField::Width);
    assert_eq!(engine.ui.width, 80);
    assert_eq!(engine.ui.width_draft, "80");
}

#[test]
fn uncommitted_draft_does_not_change_size() {
    let mut engine = engine();
    engine.set_size_draft(SizeField::Height, "400");
    let id = create_at(&mut engine, 0.0, 0.0);
    assert_eq!(engine.note(id).unwrap().h, 150.0);
}

#[test]
fn create_centered_uses_board_size() {
    let mut engine = engine();
    let Action::NoteCreated(note) = engine.create_centered() else {
        panic!("expected NoteCreated");
    };
    assert_eq!((note.x, note.y), (400.0, 325.0));
}

#[test]
fn double_click_centers_note_on_cursor() {
    let mut engine = engine();
    let Action::NoteCreated(note) = engine.on_board_double_click(pt(520.0, 300.0)) else {
        panic!("expected NoteCreated");
    };
    assert_eq!((note.x, note.y), (200.0, 225.0));
}

// =============================================================
// Dragging
// =============================================================

#[test]
fn drag_moves_note_by_pointer_delta() {
    let mut engine = engine();
    let id = create_at(&mut engine, 50.0, 60.0);
    engine.on_header_down(id, pt(300.0, 70.0), 1);
    let actions = engine.on_pointer_move(pt(340.0, 100.0));
    assert_eq!(actions, vec![Action::NoteUpdated { id, edit: NoteEdit::Move { x: 90.0, y: 90.0 } }]);
    engine.on_pointer_up(pt(340.0, 100.0));
    let note = engine.note(id).unwrap();
    assert_eq!((note.x, note.y), (90.0, 90.0));
    assert!(engine.input.is_idle());
}

#[test]
fn header_down_raises_note() {
    let mut engine = engine();
    let a = create_at(&mut engine, 0.0, 0.0);
    let b = create_at(&mut engine, 0.0, 0.0);
    let actions = engine.on_header_down(a, pt(10.0, 10.0), 1);
    assert!(matches!(actions.as_slice(), [Action::NoteRaised { id, .. }] if *id == a));
    assert!(engine.note(a).unwrap().z > engine.note(b).unwrap().z);
}

#[test]
fn small_jitter_is_a_click() {
    let mut engine = engine();
    let id = create_at(&mut engine, 50.0, 60.0);
    engine.on_header_down(id, pt(300.0, 70.0), 1);
    assert!(engine.on_pointer_move(pt(302.0, 72.0)).is_empty());
    engine.on_pointer_up(pt(302.0, 72.0));
    let note = engine.note(id).unwrap();
    assert_eq!((note.x, note.y), (50.0, 60.0));
}

#[test]
fn double_click_header_does_not_start_drag() {
    let mut engine = engine();
    let id = create_at(&mut engine, 0.0, 0.0);
    let actions = engine.on_header_down(id, pt(230.0, 10.0), 2);
    assert_eq!(actions.len(), 1);
    assert!(engine.input.is_idle());
    assert!(engine.on_pointer_move(pt(600.0, 600.0)).is_empty());
}

#[test]
fn header_down_on_missing_note_is_ignored() {
    let mut engine = engine();
    assert!(engine.on_header_down(7, pt(0.0, 0.0), 1).is_empty());
    assert!(engine.input.is_idle());
}

#[test]
fn second_gesture_does_not_replace_active_one() {
    let mut engine = engine();
    let a = create_at(&mut engine, 0.0, 0.0);
    let b = create_at(&mut engine, 300.0, 0.0);
    engine.on_header_down(a, pt(230.0, 10.0), 1);
    engine.on_resizer_down(b, pt(720.0, 150.0));
    assert_eq!(engine.input.note_id(), Some(a));
    assert!(!engine.input.is_resizing());
}

// =============================================================
// Trash
// =============================================================

#[test]
fn drag_into_trash_deletes_note() {
    let mut engine = engine();
    let id = create_at(&mut engine, 0.0, 0.0);
    engine.on_header_down(id, pt(230.0, 10.0), 1);
    // Note ends at screen (1120, 690)-(1320, 840), overlapping the trash.
    engine.on_pointer_move(pt(1130.0, 700.0));
    let actions = engine.on_pointer_up(pt(1130.0, 700.0));
    assert!(has_delete(&actions, id));
    assert!(engine.note(id).is_none());
    assert!(engine.notes().is_empty());
}

#[test]
fn drag_elsewhere_keeps_note() {
    let mut engine = engine();
    let id = create_at(&mut engine, 0.0, 0.0);
    engine.on_header_down(id, pt(230.0, 10.0), 1);
    engine.on_pointer_move(pt(400.0, 200.0));
    let actions = engine.on_pointer_up(pt(400.0, 200.0));
    assert!(!has_delete(&actions, id));
    assert!(engine.note(id).is_some());
}

#[test]
fn click_on_note_already_over_trash_keeps_it() {
    let mut engine = engine();
    let id = create_at(&mut engine, 900.0, 700.0);
    assert!(engine.is_over_trash(id));
    engine.on_header_down(id, pt(1130.0, 710.0), 1);
    let actions = engine.on_pointer_up(pt(1130.0, 710.0));
    assert!(!has_delete(&actions, id));
    assert!(engine.note(id).is_some());
}

#[test]
fn resize_into_trash_keeps_note() {
    let mut engine = engine();
    let id = create_at(&mut engine, 600.0, 400.0);
    engine.on_resizer_down(id, pt(1020.0, 550.0));
    engine.on_pointer_move(pt(1200.0, 750.0));
    assert!(engine.is_over_trash(id));
    let actions = engine.on_pointer_up(pt(1200.0, 750.0));
    assert!(!has_delete(&actions, id));
    assert!(engine.note(id).is_some());
}

#[test]
fn release_far_from_pending_drag_is_still_a_click() {
    let mut engine = engine();
    let id = create_at(&mut engine, 0.0, 0.0);
    engine.on_header_down(id, pt(230.0, 10.0), 1);
    // No move between down and up: the release lands over the trash.
    let actions = engine.on_pointer_up(pt(1130.0, 700.0));
    assert!(actions.is_empty());
    let note = engine.note(id).unwrap();
    assert_eq!((note.x, note.y), (0.0, 0.0));
    assert!(engine.input.is_idle());
}

#[test]
fn release_point_finishes_confirmed_drag() {
    let mut engine = engine();
    let id = create_at(&mut engine, 0.0, 0.0);
    engine.on_header_down(id, pt(230.0, 10.0), 1);
    engine.on_pointer_move(pt(260.0, 10.0));
    let actions = engine.on_pointer_up(pt(1130.0, 700.0));
    assert!(has_delete(&actions, id));
}

#[test]
fn cancel_mid_drag_does_not_delete() {
    let mut engine = engine();
    let id = create_at(&mut engine, 0.0, 0.0);
    engine.on_header_down(id, pt(230.0, 10.0), 1);
    engine.on_pointer_move(pt(1130.0, 700.0));
    engine.on_pointer_cancel();
    assert!(engine.input.is_idle());
    assert!(engine.on_pointer_up(pt(1130.0, 700.0)).is_empty());
    assert!(engine.note(id).is_some());
}

#[test]
fn drop_without_trash_rect_keeps_note() {
    let mut engine = BoardEngine::new();
    let id = create_at(&mut engine, 0.0, 0.0);
    engine.on_header_down(id, pt(10.0, 10.0), 1);
    engine.on_pointer_move(pt(900.0, 900.0));
    let actions = engine.on_pointer_up(pt(900.0, 900.0));
    assert!(!has_delete(&actions, id));
}

#[test]
fn note_rect_is_offset_by_board_origin() {
    let mut engine = engine();
    let id = create_at(&mut engine, 10.0, 20.0);
    assert_eq!(engine.note_rect(id), Some(Rect::from_xywh(230.0, 20.0, 200.0, 150.0)));
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_clamps_and_emits_updates() {
    let mut engine = engine();
    let id = create_at(&mut engine, 0.0, 0.0);
    engine.on_resizer_down(id, pt(420.0, 150.0));
    let actions = engine.on_pointer_move(pt(0.0, 0.0));
    assert_eq!(actions, vec![Action::NoteUpdated { id, edit: NoteEdit::Resize { w: 80.0, h: 60.0 } }]);
    engine.on_pointer_up(pt(0.0, 0.0));
    let note = engine.note(id).unwrap();
    assert_eq!((note.w, note.h), (80.0, 60.0));
}

// =============================================================
// Edits / snapshots
// =============================================================

#[test]
fn edit_missing_note_returns_none() {
    let mut engine = engine();
    assert!(engine.edit(3, NoteEdit::Recolor { color: "#000".into() }).is_none());
}

#[test]
fn rename_and_recolor_through_engine() {
    let mut engine = engine();
    let id = create_at(&mut engine, 0.0, 0.0);
    engine.edit(id, NoteEdit::Rename { title: " Todo ".into() });
    engine.edit(id, NoteEdit::Recolor { color: "#ffb4c1".into() });
    let note = engine.note(id).unwrap();
    assert_eq!(note.display_title(), "Todo");
    assert_eq!(note.color, "#ffb4c1");
}

#[test]
fn clear_all_empties_board() {
    let mut engine = engine();
    create_at(&mut engine, 0.0, 0.0);
    create_at(&mut engine, 0.0, 0.0);
    assert_eq!(engine.clear_all(), Action::Cleared);
    assert!(engine.notes().is_empty());
}

#[test]
fn load_snapshot_resets_gesture() {
    let mut engine = engine();
    let id = create_at(&mut engine, 0.0, 0.0);
    engine.on_header_down(id, pt(230.0, 10.0), 1);
    let snapshot = engine.notes().to_vec();
    assert_eq!(engine.load_snapshot(snapshot), Action::SnapshotLoaded { count: 1 });
    assert!(engine.input.is_idle());
}

#[test]
fn action_serializes_with_type_tag() {
    let value = serde_json::to_value(Action::NoteDeleted { id: 4 }).unwrap();
    assert_eq!(value["type"], "note_deleted");
    assert_eq!(value["id"], 4);
}
