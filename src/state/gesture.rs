//! Pan gesture classification.
//!
//! Maps the final displacement of a drag to one of four swipe directions. Screen
//! coordinates are used: `dy < 0` is toward the top.

use crate::model::Direction;

/// Classify a displacement.
///
/// The dominant axis wins; a tie (`|dy| == |dx|`) counts as horizontal. Within an axis
/// the negative side is `Up`/`Left`. A zero vector therefore classifies as `Right`; use
/// [`classify_with_threshold`] where a true no-op is wanted.
pub fn classify(dx: f32, dy: f32) -> Direction {
    if dy.abs() > dx.abs() {
        if dy < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    } else if dx < 0.0 {
        Direction::Left
    } else {
        Direction::Right
    }
}

/// Classify a displacement, ignoring drags shorter than `min_distance` on both axes.
///
/// Returns `None` for a no-op gesture.
pub fn classify_with_threshold(dx: f32, dy: f32, min_distance: f32) -> Option<Direction> {
    if dx.abs() < min_distance && dy.abs() < min_distance {
        return None;
    }
    Some(classify(dx, dy))
}
