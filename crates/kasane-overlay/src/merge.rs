use crate::rect::{GeometryError, Orientation, Point, Rect};

/// Merge fragmented layout rectangles into one rectangle per visual line.
///
/// Some layout engines non-deterministically report separate client rects for
/// inline children sitting on the same line, with exactly touching
/// coordinates. Adjacency is therefore tested with exact equality; use
/// [`merge_with`] to supply a tolerance predicate for hosts that report
/// rounded coordinates.
pub fn merge(rects: &[Rect], orientation: Orientation) -> Result<Vec<Rect>, GeometryError> {
    merge_with(rects, orientation, |current, candidate| match orientation {
        Orientation::Horizontal => {
            candidate.bottom == current.bottom && candidate.left == current.right
        }
        Orientation::Vertical => {
            candidate.right == current.right && candidate.top == current.bottom
        }
    })
}

/// [`merge`] with a caller-supplied adjacency predicate. The predicate gets
/// the current merged rectangle and the next candidate, in input order.
pub fn merge_with<F>(
    rects: &[Rect],
    orientation: Orientation,
    is_adjacent: F,
) -> Result<Vec<Rect>, GeometryError>
where
    F: Fn(&Rect, &Rect) -> bool,
{
    for (index, rect) in rects.iter().enumerate() {
        if !rect.is_valid() {
            return Err(GeometryError::NegativeExtent { index });
        }
    }

    if rects.len() <= 1 {
        return Ok(rects.to_vec());
    }

    let mut merged: Vec<Rect> = Vec::with_capacity(rects.len());
    merged.push(rects[0]);
    for candidate in &rects[1..] {
        let last = merged.len() - 1;
        if is_adjacent(&merged[last], candidate) {
            // Extend along the reading axis only; the cross-axis size stays
            // that of the first fragment of the line.
            match orientation {
                Orientation::Horizontal => merged[last].right = candidate.right,
                Orientation::Vertical => merged[last].bottom = candidate.bottom,
            }
        } else {
            merged.push(*candidate);
        }
    }

    Ok(merged)
}

/// Rectangle closest to `point` by squared distance, zero when the point is
/// inside or on the boundary. The earliest rectangle wins ties.
pub fn closest_rect<'a>(rects: &'a [Rect], point: Point) -> Option<&'a Rect> {
    let mut best: Option<(&Rect, f64)> = None;
    for rect in rects {
        let distance = distance_sq(rect, point);
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((rect, distance)),
        }
    }
    best.map(|(rect, _)| rect)
}

fn distance_sq(rect: &Rect, point: Point) -> f64 {
    let dx = (rect.left - point.x).max(point.x - rect.right).max(0.0);
    let dy = (rect.top - point.y).max(point.y - rect.bottom).max(0.0);
    dx * dx + dy * dy
}
