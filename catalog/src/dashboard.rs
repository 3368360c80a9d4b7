//! Admin dashboard: users, theaters, and movies side by side.
//!
//! The three collections are fetched as parallel effects on entry and
//! each lands independently; the loading flag clears only once all
//! three have resolved, successfully or not. The dashboard displays
//! rows exactly as returned and never mutates them.

use std::sync::Arc;

use marquee_client::{ApiError, CinemaApi, MovieRecord, TheaterRecord, UserRecord};
use marquee_core::effect::ScopeId;
use marquee_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Which of the three dashboard collections an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardSection {
    /// The user accounts collection.
    Users,
    /// The theaters collection.
    Theaters,
    /// The movies collection.
    Movies,
}

impl std::fmt::Display for DashboardSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Users => f.write_str("users"),
            Self::Theaters => f.write_str("theaters"),
            Self::Movies => f.write_str("movies"),
        }
    }
}

/// State for the admin dashboard view.
#[derive(Clone, Debug)]
pub struct DashboardState {
    /// Cancellation scope tied to the dashboard view's lifetime.
    pub scope: ScopeId,
    /// User rows, as returned.
    pub users: Vec<UserRecord>,
    /// Theater rows, as returned.
    pub theaters: Vec<TheaterRecord>,
    /// Movie rows, as returned.
    pub movies: Vec<MovieRecord>,
    /// True until every section has resolved.
    pub loading: bool,
    /// How many of the three fetches are still out.
    pending: u8,
}

impl DashboardState {
    /// Empty dashboard, nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scope: ScopeId::new(),
            users: Vec::new(),
            theaters: Vec::new(),
            movies: Vec::new(),
            loading: false,
            pending: 0,
        }
    }

    fn section_resolved(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 {
            self.loading = false;
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Commands and effect results for the dashboard.
#[derive(Clone, Debug)]
pub enum DashboardAction {
    /// Fetch all three collections in parallel.
    Load,
    /// The users collection arrived.
    UsersLoaded {
        /// User rows.
        users: Vec<UserRecord>,
    },
    /// The theaters collection arrived.
    TheatersLoaded {
        /// Theater rows.
        theaters: Vec<TheaterRecord>,
    },
    /// The movies collection arrived.
    MoviesLoaded {
        /// Movie rows.
        movies: Vec<MovieRecord>,
    },
    /// One section's fetch failed; its rows stay empty.
    SectionFailed {
        /// Which collection failed.
        section: DashboardSection,
        /// Why it failed.
        error: ApiError,
    },
    /// Leave the dashboard, cancelling in-flight fetches.
    Close,
}

/// Environment dependencies for the dashboard reducer
#[derive(Clone)]
pub struct DashboardEnvironment {
    /// Backend API handle
    pub api: Arc<dyn CinemaApi>,
}

impl DashboardEnvironment {
    /// Creates a new `DashboardEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn CinemaApi>) -> Self {
        Self { api }
    }
}

/// Reducer for the admin dashboard
#[derive(Clone, Debug)]
pub struct DashboardReducer;

impl DashboardReducer {
    /// Creates a new `DashboardReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DashboardReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Action = DashboardAction;
    type Environment = DashboardEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // Load: three parallel fetches under the dashboard scope
            // ═══════════════════════════════════════════════════════════════
            DashboardAction::Load => {
                state.loading = true;
                state.pending = 3;

                let users_api = env.api.clone();
                let theaters_api = env.api.clone();
                let movies_api = env.api.clone();

                smallvec![Effect::cancellable(
                    state.scope,
                    Effect::merge(vec![
                        Effect::Future(Box::pin(async move {
                            match users_api.all_users().await {
                                Ok(users) => Some(DashboardAction::UsersLoaded { users }),
                                Err(error) => Some(DashboardAction::SectionFailed {
                                    section: DashboardSection::Users,
                                    error,
                                }),
                            }
                        })),
                        Effect::Future(Box::pin(async move {
                            match theaters_api.all_theaters().await {
                                Ok(theaters) => {
                                    Some(DashboardAction::TheatersLoaded { theaters })
                                }
                                Err(error) => Some(DashboardAction::SectionFailed {
                                    section: DashboardSection::Theaters,
                                    error,
                                }),
                            }
                        })),
                        Effect::Future(Box::pin(async move {
                            match movies_api.all_movies().await {
                                Ok(movies) => Some(DashboardAction::MoviesLoaded { movies }),
                                Err(error) => Some(DashboardAction::SectionFailed {
                                    section: DashboardSection::Movies,
                                    error,
                                }),
                            }
                        })),
                    ]),
                )]
            }

            // ═══════════════════════════════════════════════════════════════
            // Section results: each lands on its own
            // ═══════════════════════════════════════════════════════════════
            DashboardAction::UsersLoaded { users } => {
                state.users = users;
                state.section_resolved();
                smallvec![Effect::None]
            }

            DashboardAction::TheatersLoaded { theaters } => {
                state.theaters = theaters;
                state.section_resolved();
                smallvec![Effect::None]
            }

            DashboardAction::MoviesLoaded { movies } => {
                state.movies = movies;
                state.section_resolved();
                smallvec![Effect::None]
            }

            DashboardAction::SectionFailed { section, error } => {
                tracing::warn!(%section, %error, "dashboard section fetch failed");
                state.section_resolved();
                smallvec![Effect::None]
            }

            DashboardAction::Close => {
                smallvec![Effect::Cancel(state.scope)]
            }
        }
    }
}
