//! # Marquee Testing
//!
//! Testing utilities and helpers for the Marquee reducer architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: a given/when/then harness for pure reducer logic
//! - [`MockCinemaApi`]: a scriptable [`CinemaApi`](marquee_client::CinemaApi)
//!   that records every call it receives
//! - [`FixedClock`]: deterministic time for reproducible tests
//!
//! ## Example
//!
//! ```ignore
//! use marquee_testing::{ReducerTest, assertions};
//!
//! #[tokio::test]
//! async fn test_counter_increments() {
//!     ReducerTest::new(CounterReducer, CounterState::default(), ())
//!         .when_action(CounterAction::Increment)
//!         .then_state(|state| assert_eq!(state.count, 1))
//!         .then_effects(|effects| assertions::assert_no_effects(effects))
//!         .run()
//!         .await;
//! }
//! ```

pub mod mocks;
pub mod reducer_test;

pub use mocks::{FixedClock, MockCinemaApi, RecordedCall, test_clock};
pub use reducer_test::{ReducerTest, assertions};
