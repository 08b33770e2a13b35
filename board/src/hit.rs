#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::Rect;
use crate::input::GestureEnd;

/// Axis-aligned overlap test. Rectangles that only share an edge intersect.
#[must_use]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    !(a.right < b.left || a.left > b.right || a.bottom < b.top || a.top > b.bottom)
}

/// Whether a finished gesture drops its note into the trash.
///
/// Only a confirmed drag can delete; clicks and resizes never do, whatever
/// the geometry.
#[must_use]
pub fn drops_in_trash(end: &GestureEnd, trash: &Rect) -> bool {
    end.dragged && rects_intersect(&end.rect, trash)
}
