use crate::merge::closest_rect;
use crate::rect::{Orientation, Point, Rect, Size, Viewport};

/// Anchor point for the popup's top-left corner, in document coordinates.
///
/// `target` is viewport-relative; the scroll offsets in `viewport` convert it
/// to document space. The side of the target with more free space wins on
/// each axis, then the result is clamped so the popup stays inside the
/// visible viewport even when the preferred anchor would overflow it.
pub fn place(target: Rect, popup: Size, viewport: Viewport, orientation: Orientation) -> Point {
    let word_left = viewport.scroll_x + target.left;
    let word_top = viewport.scroll_y + target.top;
    let word_right = viewport.scroll_x + target.right;
    let word_bottom = viewport.scroll_y + target.bottom;

    let left_space = target.left;
    let top_space = target.top;
    let right_space = viewport.inner_width - target.right;
    let bottom_space = viewport.inner_height - target.bottom;

    let min_left = viewport.scroll_x;
    let max_left = viewport.scroll_x + viewport.inner_width - popup.width;
    let min_top = viewport.scroll_y;
    let max_top = viewport.scroll_y + viewport.inner_height - popup.height;

    let (x, y) = match orientation {
        Orientation::Horizontal => (
            if right_space > left_space {
                word_left
            } else {
                word_right - popup.width
            },
            if bottom_space > top_space {
                word_bottom
            } else {
                word_top - popup.height
            },
        ),
        // Vertical text reads in columns; the popup hugs the target's side
        // edges instead of its top and bottom edges.
        Orientation::Vertical => (
            if right_space > left_space {
                word_right
            } else {
                word_left - popup.width
            },
            if bottom_space > top_space {
                word_top
            } else {
                word_bottom - popup.height
            },
        ),
    };

    Point {
        x: clamp(x, min_left, max_left),
        y: clamp(y, min_top, max_top),
    }
}

/// Pick the merged line rectangle nearest the cursor and place against it.
/// `None` only when `rects` is empty.
pub fn place_near(
    rects: &[Rect],
    cursor: Point,
    popup: Size,
    viewport: Viewport,
    orientation: Orientation,
) -> Option<Point> {
    let target = closest_rect(rects, cursor)?;
    Some(place(*target, popup, viewport, orientation))
}

// A popup larger than the viewport inverts the bounds; the result then pins
// to the lower bound, the viewport origin.
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}
