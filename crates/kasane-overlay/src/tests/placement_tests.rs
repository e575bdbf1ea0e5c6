use crate::rect::{Orientation, Point, Rect, Size, Viewport};
use crate::{place, place_near};

fn viewport() -> Viewport {
    Viewport {
        scroll_x: 0.0,
        scroll_y: 0.0,
        inner_width: 1000.0,
        inner_height: 800.0,
    }
}

fn popup() -> Size {
    Size {
        width: 200.0,
        height: 150.0,
    }
}

#[test]
fn ample_space_places_below_and_left_aligned() {
    let target = Rect::new(100.0, 100.0, 180.0, 120.0);
    let anchor = place(target, popup(), viewport(), Orientation::Horizontal);
    assert_eq!(anchor, Point { x: 100.0, y: 120.0 });
}

#[test]
fn cramped_bottom_right_flips_above_and_right_aligned() {
    let target = Rect::new(700.0, 900.0, 980.0, 750.0);
    let anchor = place(target, popup(), viewport(), Orientation::Horizontal);
    assert_eq!(anchor, Point { x: 780.0, y: 550.0 });
}

#[test]
fn barely_fitting_popup_lands_on_the_viewport_edge_exactly() {
    // Right-aligned anchor for a target flush with the right viewport edge.
    let target = Rect::new(10.0, 950.0, 1000.0, 30.0);
    let anchor = place(target, popup(), viewport(), Orientation::Horizontal);
    assert_eq!(anchor.x, 800.0);
    assert_eq!(anchor.x + popup().width, viewport().inner_width);
}

#[test]
fn overflowing_preference_clamps_to_viewport() {
    // More space above than below, but the popup is too tall for it and
    // would overflow past the top of the viewport.
    let target = Rect::new(400.0, 100.0, 200.0, 420.0);
    let tall = Size {
        width: 200.0,
        height: 500.0,
    };
    let anchor = place(target, tall, viewport(), Orientation::Horizontal);
    assert_eq!(anchor.y, 0.0);
}

#[test]
fn scroll_offsets_shift_into_document_space() {
    let scrolled = Viewport {
        scroll_x: 50.0,
        scroll_y: 500.0,
        ..viewport()
    };
    let target = Rect::new(100.0, 100.0, 180.0, 120.0);
    let anchor = place(target, popup(), scrolled, Orientation::Horizontal);
    assert_eq!(anchor, Point { x: 150.0, y: 620.0 });
}

#[test]
fn vertical_writing_anchors_to_side_edges() {
    let target = Rect::new(100.0, 100.0, 180.0, 120.0);
    let anchor = place(target, popup(), viewport(), Orientation::Vertical);
    assert_eq!(anchor, Point { x: 180.0, y: 100.0 });
}

#[test]
fn oversized_popup_pins_to_viewport_origin() {
    let scrolled = Viewport {
        scroll_x: 30.0,
        scroll_y: 40.0,
        ..viewport()
    };
    let huge = Size {
        width: 1200.0,
        height: 900.0,
    };
    let target = Rect::new(100.0, 100.0, 180.0, 120.0);
    let anchor = place(target, huge, scrolled, Orientation::Horizontal);
    assert_eq!(anchor, Point { x: 30.0, y: 40.0 });
}

#[test]
fn placement_stays_inside_the_visible_viewport() {
    let scrolled = Viewport {
        scroll_x: 120.0,
        scroll_y: 60.0,
        ..viewport()
    };
    let targets = [
        Rect::new(0.0, 0.0, 40.0, 20.0),
        Rect::new(780.0, 0.0, 40.0, 800.0),
        Rect::new(0.0, 960.0, 1000.0, 20.0),
        Rect::new(780.0, 960.0, 1000.0, 800.0),
        Rect::new(390.0, 490.0, 510.0, 410.0),
    ];
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for target in targets {
            let anchor = place(target, popup(), scrolled, orientation);
            assert!(anchor.x >= scrolled.scroll_x);
            assert!(anchor.x + popup().width <= scrolled.scroll_x + scrolled.inner_width);
            assert!(anchor.y >= scrolled.scroll_y);
            assert!(anchor.y + popup().height <= scrolled.scroll_y + scrolled.inner_height);
        }
    }
}

#[test]
fn place_near_anchors_to_the_rect_under_the_cursor() {
    let lines = [
        Rect::new(10.0, 0.0, 95.0, 30.0),
        Rect::new(40.0, 0.0, 60.0, 70.0),
    ];
    let cursor = Point { x: 50.0, y: 65.0 };
    let anchor = place_near(&lines, cursor, popup(), viewport(), Orientation::Horizontal);
    assert_eq!(
        anchor,
        Some(place(lines[1], popup(), viewport(), Orientation::Horizontal))
    );
}

#[test]
fn place_near_with_no_rects() {
    let cursor = Point { x: 0.0, y: 0.0 };
    assert_eq!(
        place_near(&[], cursor, popup(), viewport(), Orientation::Horizontal),
        None
    );
}
