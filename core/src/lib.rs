//! # Marquee Core
//!
//! Core traits and types for the Marquee client architecture.
//!
//! Marquee models each screen of a ticketing front-end (booking wizard,
//! session, listings, movie detail) as a composable state machine: a pure
//! reducer turns an action into a state change plus a list of effect
//! descriptions, and the store runtime executes those effects and feeds the
//! resulting actions back in.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (one wizard, one listing page)
//! - **Action**: All possible inputs to a reducer (user intents and effect
//!   results)
//! - **Reducer**: Pure function `(State, Action, Environment) → Effects`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//! - **Scope**: A cancellation handle tying effects to a view instance's
//!   lifetime
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//! - Every fetch cancellable with the view that asked for it
//!
//! ## Example
//!
//! ```
//! use marquee_core::{SmallVec, smallvec};
//! use marquee_core::effect::Effect;
//! use marquee_core::reducer::Reducer;
//!
//! #[derive(Debug, Default)]
//! struct CounterState {
//!     value: i64,
//! }
//!
//! #[derive(Debug, Clone)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Self::State,
//!         action: Self::Action,
//!         _env: &Self::Environment,
//!     ) -> SmallVec<[Effect<Self::Action>; 4]> {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.value += 1;
//!                 smallvec![]
//!             }
//!         }
//!     }
//! }
//! ```

pub mod effect;
pub mod environment;
pub mod reducer;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};
