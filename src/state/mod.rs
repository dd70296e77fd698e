//! UI state machine (pure).
//!
//! All state transitions are plain functions testable without a terminal. Time is
//! always passed in.

pub mod app_state;
pub mod browse;
pub mod gesture;
pub mod mouse_handler;
pub mod swipe_handler;

// Re-export for convenience
pub use app_state::{AppState, EntryOrigin, LoadStatus};
pub use browse::{
    AnimationFrame, AnimationPhase, BeginOutcome, BrowseState, BrowseStateMachine, Transition,
};
pub use gesture::{classify, classify_with_threshold};
pub use swipe_handler::{advance_animation, handle_swipe};
