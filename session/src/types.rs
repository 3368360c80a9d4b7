//! State and actions for the auth session.

use marquee_client::{AccessToken, ApiError, AuthSession, SignUpRequest, UserProfile};

/// Auth session state for the whole app.
///
/// There is one session store per app; feature stores read the signed-in
/// user from it instead of consulting any ambient global.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Bearer token for authenticated endpoints, if one is held.
    ///
    /// A token may be present while `user` is still `None`: restore
    /// keeps the loaded token around while verification is in flight.
    pub token: Option<AccessToken>,
    /// The verified identity. `Some` is the definition of signed-in.
    pub user: Option<UserProfile>,
    /// True while a sign-in, sign-up, or restore request is in flight.
    pub loading: bool,
    /// Last credential or registration failure, for display.
    pub last_error: Option<String>,
    /// Informational message, e.g. the registration confirmation.
    pub notice: Option<String>,
}

impl SessionState {
    /// Signed-out initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
            last_error: None,
            notice: None,
        }
    }

    /// Whether a user is signed in.
    ///
    /// Only a backend-vouched identity counts; holding an unverified
    /// token does not.
    #[must_use]
    pub const fn authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Commands and effect results for the session reducer.
#[derive(Clone, Debug)]
pub enum SessionAction {
    /// Load any persisted token and verify it with the backend.
    ///
    /// Sent once at startup. With nothing persisted this is a no-op.
    Initialize,
    /// The backend vouched for the stored token.
    Verified {
        /// Identity attached to the token.
        user: UserProfile,
    },
    /// The stored token was rejected or could not be checked.
    VerifyFailed {
        /// Why verification failed.
        error: ApiError,
    },
    /// Exchange credentials for a session.
    SignIn {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },
    /// Sign-in succeeded.
    SignedIn {
        /// Token and profile returned by the backend.
        session: AuthSession,
    },
    /// Sign-in was refused or failed in transit.
    SignInFailed {
        /// Why sign-in failed.
        error: ApiError,
    },
    /// Register a new account.
    SignUp {
        /// Registration form contents.
        request: SignUpRequest,
    },
    /// Registration succeeded. The user still signs in separately.
    SignedUp {
        /// Confirmation message from the backend, when provided.
        message: Option<String>,
    },
    /// Registration was refused or failed in transit.
    SignUpFailed {
        /// Why registration failed.
        error: ApiError,
    },
    /// Drop the session. Local state clears immediately; server-side
    /// invalidation happens in the background.
    SignOut,
    /// Background sign-out work finished. Confirmation event (no-op).
    SignedOut,
}
