//! The core trait for feature logic.
//!
//! Reducers are pure functions: `(State, Action, Environment) → Effects`.
//! They contain all feature logic and are deterministic and testable; the
//! only way a reducer touches the outside world is by returning effect
//! descriptions.

use smallvec::SmallVec;

use crate::effect::Effect;

/// The Reducer trait - core abstraction for feature logic
///
/// # Type Parameters
///
/// - `State`: The domain state this reducer operates on
/// - `Action`: The action type this reducer processes
/// - `Environment`: The injected dependencies this reducer needs
///
/// # Example
///
/// ```ignore
/// impl Reducer for BookingReducer {
///     type State = BookingState;
///     type Action = BookingAction;
///     type Environment = BookingEnvironment<Api>;
///
///     fn reduce(
///         &self,
///         state: &mut BookingState,
///         action: BookingAction,
///         env: &BookingEnvironment<Api>,
///     ) -> SmallVec<[Effect<BookingAction>; 4]> {
///         match action {
///             BookingAction::ToggleSeat { seat_id } => {
///                 // Feature logic here
///                 smallvec![]
///             }
///             _ => smallvec![],
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduce an action into state changes and effects
    ///
    /// This is a pure function that:
    /// 1. Validates the action
    /// 2. Updates state in place
    /// 3. Returns effect descriptions to be executed
    ///
    /// # Arguments
    ///
    /// - `state`: Mutable reference to current state
    /// - `action`: The action to process
    /// - `env`: Reference to injected dependencies
    ///
    /// # Returns
    ///
    /// The effects to be executed by the runtime. Most actions produce zero
    /// or one effect, so the list is inlined up to four entries.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}
