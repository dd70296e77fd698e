//! Meaning/definition browsing state machine.
//!
//! Two pieces live here:
//!
//! - [`BrowseState`]: the (meaning, definition) index pair and the pure transition
//!   table. Vertical swipes move between meanings and reset the definition index when
//!   the meaning changes; horizontal swipes move between definitions of the current
//!   meaning. Both axes clamp at their ends, never wrap.
//! - [`BrowseStateMachine`]: owns the index pair and sequences each transition as
//!   `Idle -> ExitAnimating -> (index applied) -> EnterAnimating -> Idle`.
//!
//! # Timing
//!
//! Time is passed in by the caller. The index changes exactly when the exit phase
//! reaches its deadline, in the same `tick` that starts the enter phase, so a renderer
//! never sees the old index during `EnterAnimating` or the new one during
//! `ExitAnimating`. Gestures that arrive while a sequence is in flight are dropped.

use crate::model::{Axis, Direction, WordEntry};
use std::time::{Duration, Instant};

/// Default duration of each animation phase.
pub const DEFAULT_PHASE_DURATION: Duration = Duration::from_millis(200);

/// Current position within a [`WordEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowseState {
    /// Selected meaning.
    pub meaning_index: usize,
    /// Selected definition within the selected meaning.
    pub definition_index: usize,
}

/// One application of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Swipe that caused it.
    pub direction: Direction,
    /// State before.
    pub from: BrowseState,
    /// State after.
    pub to: BrowseState,
}

impl Transition {
    /// True if no index changed.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

impl BrowseState {
    /// Create a state at the given indices.
    pub fn new(meaning_index: usize, definition_index: usize) -> Self {
        Self {
            meaning_index,
            definition_index,
        }
    }

    /// Apply `direction` to this state for `entry`.
    ///
    /// | Direction | Effect |
    /// |---|---|
    /// | Up | next meaning (clamped); definition resets to 0 if the meaning changed |
    /// | Down | previous meaning (clamped); definition resets to 0 if the meaning changed |
    /// | Left | next definition (clamped) |
    /// | Right | previous definition (clamped) |
    ///
    /// An entry without meanings leaves the state unchanged.
    pub fn transition(self, direction: Direction, entry: &WordEntry) -> Transition {
        let meaning_count = entry.meanings.len();
        let definition_count = entry.definition_count(self.meaning_index);

        let to = match direction {
            Direction::Up | Direction::Down => {
                let last = meaning_count.saturating_sub(1);
                let meaning_index = match direction {
                    Direction::Up => (self.meaning_index + 1).min(last),
                    _ => self.meaning_index.saturating_sub(1),
                };
                if meaning_index == self.meaning_index {
                    self
                } else {
                    BrowseState::new(meaning_index, 0)
                }
            }
            Direction::Left => BrowseState {
                definition_index: (self.definition_index + 1)
                    .min(definition_count.saturating_sub(1)),
                ..self
            },
            Direction::Right => BrowseState {
                definition_index: self.definition_index.saturating_sub(1),
                ..self
            },
        };

        Transition {
            direction,
            from: self,
            to,
        }
    }

    /// True if both indices point inside `entry` (or are 0 where the list is empty).
    pub fn is_within(&self, entry: &WordEntry) -> bool {
        let meanings_ok = if entry.meanings.is_empty() {
            self.meaning_index == 0
        } else {
            self.meaning_index < entry.meanings.len()
        };
        let definitions = entry.definition_count(self.meaning_index);
        let definitions_ok = if definitions == 0 {
            self.definition_index == 0
        } else {
            self.definition_index < definitions
        };
        meanings_ok && definitions_ok
    }
}

/// Where the animation sequence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Nothing in flight; gestures are accepted.
    Idle,
    /// Current content moving out toward `direction`. Index not yet changed.
    ExitAnimating {
        /// Swipe being animated.
        direction: Direction,
        /// Phase start.
        started: Instant,
    },
    /// New content moving in from the opposite edge. Index already changed.
    EnterAnimating {
        /// Swipe being animated.
        direction: Direction,
        /// Phase start.
        started: Instant,
    },
}

/// What the renderer should do with the animated block at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Axis the animated block moves along; `None` when at rest.
    pub axis: Option<Axis>,
    /// Displacement as a fraction of the travel distance, signed in screen space.
    pub offset: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl AnimationFrame {
    /// Content at rest.
    pub const REST: AnimationFrame = AnimationFrame {
        axis: None,
        offset: 0.0,
        opacity: 1.0,
    };
}

/// Result of offering a gesture to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginOutcome {
    /// Exit animation started.
    Started,
    /// The swipe would not change anything and no-op animations are disabled.
    SkippedNoOp,
    /// A sequence is in flight; the gesture was dropped.
    Busy,
}

/// Owns the browse position and sequences animated transitions.
#[derive(Debug, Clone)]
pub struct BrowseStateMachine {
    state: BrowseState,
    phase: AnimationPhase,
    phase_duration: Duration,
    skip_noop: bool,
}

impl Default for BrowseStateMachine {
    fn default() -> Self {
        Self::new(DEFAULT_PHASE_DURATION, false)
    }
}

impl BrowseStateMachine {
    /// Machine at (0,0), idle.
    ///
    /// With `skip_noop`, swipes that would not move the position are not animated.
    pub fn new(phase_duration: Duration, skip_noop: bool) -> Self {
        Self {
            state: BrowseState::default(),
            phase: AnimationPhase::Idle,
            phase_duration,
            skip_noop,
        }
    }

    /// Position the renderer should show.
    pub fn state(&self) -> BrowseState {
        self.state
    }

    /// Current animation phase.
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Duration of each animated phase.
    pub fn phase_duration(&self) -> Duration {
        self.phase_duration
    }

    /// True while an exit or enter phase is in flight.
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, AnimationPhase::Idle)
    }

    /// Offer a swipe. Starts the exit phase at `now` unless busy or a skipped no-op.
    pub fn begin(&mut self, direction: Direction, entry: &WordEntry, now: Instant) -> BeginOutcome {
        if self.is_animating() {
            return BeginOutcome::Busy;
        }
        if self.skip_noop && self.state.transition(direction, entry).is_noop() {
            return BeginOutcome::SkippedNoOp;
        }
        self.phase = AnimationPhase::ExitAnimating {
            direction,
            started: now,
        };
        BeginOutcome::Started
    }

    /// Advance phases up to `now`.
    ///
    /// Returns the transition if the index was applied during this call. A late tick
    /// may pass through both deadlines at once.
    pub fn tick(&mut self, now: Instant, entry: &WordEntry) -> Option<Transition> {
        let mut applied = None;

        if let AnimationPhase::ExitAnimating { direction, started } = self.phase {
            let exit_end = started + self.phase_duration;
            if now < exit_end {
                return None;
            }
            let transition = self.state.transition(direction, entry);
            self.state = transition.to;
            self.phase = AnimationPhase::EnterAnimating {
                direction,
                started: exit_end,
            };
            applied = Some(transition);
        }

        if let AnimationPhase::EnterAnimating { started, .. } = self.phase {
            if now >= started + self.phase_duration {
                self.phase = AnimationPhase::Idle;
            }
        }

        applied
    }

    /// Animated displacement and opacity at `now`.
    pub fn frame(&self, now: Instant) -> AnimationFrame {
        match self.phase {
            AnimationPhase::Idle => AnimationFrame::REST,
            AnimationPhase::ExitAnimating { direction, started } => {
                let p = self.progress(started, now);
                AnimationFrame {
                    axis: Some(direction.axis()),
                    offset: direction.sign() * p,
                    opacity: 1.0 - p,
                }
            }
            AnimationPhase::EnterAnimating { direction, started } => {
                let p = self.progress(started, now);
                AnimationFrame {
                    axis: Some(direction.axis()),
                    offset: -direction.sign() * (1.0 - p),
                    opacity: p,
                }
            }
        }
    }

    /// Back to (0,0), cancelling any animation.
    pub fn reset(&mut self) {
        self.state = BrowseState::default();
        self.phase = AnimationPhase::Idle;
    }

    fn progress(&self, started: Instant, now: Instant) -> f32 {
        if self.phase_duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        (elapsed / self.phase_duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "browse_tests.rs"]
mod tests;
