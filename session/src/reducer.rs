//! Reducer logic for the auth session.
//!
//! Commands (`Initialize`, `SignIn`, `SignUp`, `SignOut`) flip the
//! loading flag and emit one network effect; the effect feeds the
//! outcome back as an event action that updates state. Sign-out is the
//! exception: local state clears synchronously and only the server-side
//! invalidation runs in the background.

use std::sync::Arc;

use marquee_client::{AuthSession, CinemaApi};
use marquee_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

use crate::storage::TokenStore;
use crate::types::{SessionAction, SessionState};

/// Environment dependencies for the session reducer
#[derive(Clone)]
pub struct SessionEnvironment {
    /// Backend API handle
    pub api: Arc<dyn CinemaApi>,
    /// Local token persistence
    pub tokens: Arc<dyn TokenStore>,
}

impl SessionEnvironment {
    /// Creates a new `SessionEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn CinemaApi>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { api, tokens }
    }
}

/// Reducer for the auth session
#[derive(Clone, Debug)]
pub struct SessionReducer;

impl SessionReducer {
    /// Creates a new `SessionReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SessionReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;
    type Environment = SessionEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per action keeps the flow readable
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // Initialize: restore a persisted session, if there is one
            // ═══════════════════════════════════════════════════════════════
            SessionAction::Initialize => {
                let Some(token) = env.tokens.load() else {
                    // Nothing persisted: stay signed out without touching
                    // the network.
                    return SmallVec::new();
                };

                state.token = Some(token.clone());
                state.loading = true;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.verify_token(&token).await {
                        Ok(user) => Some(SessionAction::Verified { user }),
                        Err(error) => Some(SessionAction::VerifyFailed { error }),
                    }
                }))]
            }

            SessionAction::Verified { user } => {
                state.loading = false;
                state.user = Some(user);
                state.last_error = None;
                smallvec![Effect::None]
            }

            SessionAction::VerifyFailed { error } => {
                // Quietly fall back to signed-out. The persisted token is
                // left alone so a transient backend failure at startup
                // doesn't erase a still-valid session.
                tracing::debug!(%error, "stored token failed verification");
                state.loading = false;
                state.token = None;
                state.user = None;
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════════
            // SignIn: exchange credentials, persist the token on success
            // ═══════════════════════════════════════════════════════════════
            SessionAction::SignIn { email, password } => {
                state.loading = true;
                state.last_error = None;
                state.notice = None;

                let api = env.api.clone();
                let tokens = env.tokens.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.sign_in(&email, &password).await {
                        Ok(session) => {
                            // Persist before reporting success so a restart
                            // right after sign-in finds the token in place.
                            tokens.save(&session.token);
                            Some(SessionAction::SignedIn { session })
                        }
                        Err(error) => Some(SessionAction::SignInFailed { error }),
                    }
                }))]
            }

            SessionAction::SignedIn { session } => {
                let AuthSession { token, user } = session;
                state.loading = false;
                state.token = Some(token);
                state.user = Some(user);
                state.last_error = None;
                smallvec![Effect::None]
            }

            SessionAction::SignInFailed { error } => {
                // A failed attempt leaves any existing session as it was.
                state.loading = false;
                state.last_error = Some(error.to_string());
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════════
            // SignUp: register an account; the user signs in afterwards
            // ═══════════════════════════════════════════════════════════════
            SessionAction::SignUp { request } => {
                state.loading = true;
                state.last_error = None;
                state.notice = None;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.sign_up(&request).await {
                        Ok(message) => Some(SessionAction::SignedUp { message }),
                        Err(error) => Some(SessionAction::SignUpFailed { error }),
                    }
                }))]
            }

            SessionAction::SignedUp { message } => {
                state.loading = false;
                state.notice = Some(message.unwrap_or_else(|| {
                    "Registration successful. Please sign in.".to_string()
                }));
                smallvec![Effect::None]
            }

            SessionAction::SignUpFailed { error } => {
                state.loading = false;
                state.last_error = Some(error.to_string());
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════════
            // SignOut: clear locally now, invalidate server-side later
            // ═══════════════════════════════════════════════════════════════
            SessionAction::SignOut => {
                let token = state.token.take();
                state.user = None;
                state.loading = false;
                state.last_error = None;
                state.notice = None;

                let api = env.api.clone();
                let tokens = env.tokens.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    if let Some(token) = token {
                        if let Err(error) = api.sign_out(&token).await {
                            // Server-side invalidation is best-effort; the
                            // local session is already gone.
                            tracing::warn!(%error, "sign-out request failed");
                        }
                    }
                    tokens.clear();
                    Some(SessionAction::SignedOut)
                }))]
            }

            SessionAction::SignedOut => {
                // Confirmation event for observers; state was already
                // cleared when SignOut was reduced.
                smallvec![Effect::None]
            }
        }
    }
}
