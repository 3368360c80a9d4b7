//! Side effect descriptions returned by reducers.
//!
//! Effects are NOT executed when a reducer returns them. They are values
//! describing what should happen; the store runtime executes them and feeds
//! any produced action back into the reducer. This keeps reducers pure and
//! makes every side effect visible in tests.
//!
//! Network fetches in this codebase are ordinarily wrapped in
//! [`Effect::Cancellable`] with the scope of the view that asked for them,
//! so that a response arriving after the user has navigated away is
//! discarded instead of applied.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a cancellation scope.
///
/// A scope ties a group of effects to the lifetime of the view instance
/// that issued them. Each wizard or page instance creates one scope on
/// entry, wraps its fetches in [`Effect::Cancellable`], and emits
/// [`Effect::Cancel`] (or calls the store's cancel method) when the user
/// navigates away. Cancellation is permanent for a given scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeId(Uuid);

impl ScopeId {
    /// Create a new unique scope identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a scope identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ScopeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Effect type - describes a side effect to be executed.
///
/// Effects are descriptions of what should happen, returned from reducers
/// and executed by the Store runtime.
///
/// # Type Parameters
///
/// - `Action`: The action type that effects can produce (feedback loop)
///
/// # Example
///
/// ```
/// use marquee_core::effect::{Effect, ScopeId};
///
/// # #[derive(Debug)] enum Action { SeatsLoaded }
/// let scope = ScopeId::new();
/// let effect: Effect<Action> = Effect::Cancellable {
///     scope,
///     effect: Box::new(Effect::Future(Box::pin(async move {
///         Some(Action::SeatsLoaded)
///     }))),
/// };
/// ```
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Run effects in parallel
    Parallel(Vec<Effect<Action>>),

    /// Run effects sequentially
    Sequential(Vec<Effect<Action>>),

    /// Delayed action (for timers and deferred dispatch)
    Delay {
        /// How long to wait
        duration: Duration,
        /// Action to dispatch after delay
        action: Box<Action>,
    },

    /// Arbitrary async computation
    ///
    /// Returns `Option<Action>` - if Some, the action is fed back into the
    /// reducer
    Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),

    /// Run the inner effect under a cancellation scope
    ///
    /// If the scope has been cancelled (or is cancelled while the inner
    /// effect is in flight), any action the inner effect produces is
    /// discarded instead of being fed back.
    Cancellable {
        /// The scope this effect belongs to
        scope: ScopeId,
        /// The effect to run
        effect: Box<Effect<Action>>,
    },

    /// Cancel a scope
    ///
    /// All in-flight and future effects under the scope are discarded.
    Cancel(ScopeId),
}

// Manual Debug implementation since Future doesn't implement Debug
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Parallel(effects) => {
                f.debug_tuple("Effect::Parallel").field(effects).finish()
            },
            Effect::Sequential(effects) => {
                f.debug_tuple("Effect::Sequential").field(effects).finish()
            },
            Effect::Delay { duration, action } => f
                .debug_struct("Effect::Delay")
                .field("duration", duration)
                .field("action", action)
                .finish(),
            Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            Effect::Cancellable { scope, effect } => f
                .debug_struct("Effect::Cancellable")
                .field("scope", scope)
                .field("effect", effect)
                .finish(),
            Effect::Cancel(scope) => {
                f.debug_tuple("Effect::Cancel").field(scope).finish()
            },
        }
    }
}

impl<Action> Effect<Action> {
    /// Combine effects to run in parallel
    #[must_use]
    pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Parallel(effects)
    }

    /// Chain effects to run sequentially
    #[must_use]
    pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Sequential(effects)
    }

    /// Wrap an effect in a cancellation scope
    #[must_use]
    pub fn cancellable(scope: ScopeId, effect: Effect<Action>) -> Effect<Action> {
        Effect::Cancellable {
            scope,
            effect: Box::new(effect),
        }
    }

    /// Whether this is the no-op effect
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}
