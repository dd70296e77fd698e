//! Swipe handling.
//!
//! Feeds directions into the browse state machine and advances its animation.

use crate::model::Direction;
use crate::state::browse::{BeginOutcome, Transition};
use crate::state::AppState;
use std::time::Instant;
use tracing::{debug, trace};

/// Offer a swipe to the browse machine.
///
/// Returns `None` while nothing is loaded (the swipe is ignored).
pub fn handle_swipe(state: &mut AppState, direction: Direction, now: Instant) -> Option<BeginOutcome> {
    let (browse, entry) = state.browse_mut()?;
    let outcome = browse.begin(direction, entry, now);
    match outcome {
        BeginOutcome::Started => debug!(%direction, "Swipe accepted"),
        BeginOutcome::SkippedNoOp => debug!(%direction, "Swipe would not move; not animated"),
        BeginOutcome::Busy => debug!(%direction, "Swipe dropped; animation in flight"),
    }
    Some(outcome)
}

/// Advance the running animation to `now`.
///
/// Returns the transition applied during this call, if any.
pub fn advance_animation(state: &mut AppState, now: Instant) -> Option<Transition> {
    let (browse, entry) = state.browse_mut()?;
    let applied = browse.tick(now, entry)?;
    trace!(
        from = ?applied.from,
        to = ?applied.to,
        direction = %applied.direction,
        "Browse index applied"
    );
    Some(applied)
}
