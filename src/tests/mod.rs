//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp` on a `TestBackend` with scripted
//! lookup services and simulated time.

mod acceptance_load;
