//! Movie detail page: one movie, its trailer, and local comments.
//!
//! The movie is fetched under the view's cancellation scope. Comments
//! are purely local: they live in [`DetailState`] and are never sent to
//! a server. On fetch failure the page either surfaces the error or,
//! when the demo fallback is switched on, substitutes a fixed
//! placeholder movie so the page stays demonstrable without a backend.

use std::sync::Arc;

use marquee_client::{ApiError, CinemaApi, Movie, MovieId, UserProfile};
use marquee_core::effect::ScopeId;
use marquee_core::environment::Clock;
use marquee_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// One comment on the detail page. Local to this view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    /// Display name of whoever wrote it.
    pub author: String,
    /// The comment text, already trimmed.
    pub content: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Day the comment was posted, `YYYY-MM-DD`.
    pub posted_at: String,
}

/// State for one movie detail view.
#[derive(Clone, Debug)]
pub struct DetailState {
    /// Cancellation scope tied to this view's lifetime.
    pub scope: ScopeId,
    /// The movie to show.
    pub movie_id: MovieId,
    /// The signed-in user at the time the view opened, if any. Used as
    /// the comment author.
    pub viewer: Option<UserProfile>,
    /// The movie document, once loaded.
    pub movie: Option<Movie>,
    /// True while the fetch is in flight.
    pub loading: bool,
    /// Fetch failure, when the demo fallback is off.
    pub error: Option<String>,
    /// Comments, newest first.
    pub comments: Vec<Comment>,
    /// Validation warning from a rejected comment submission.
    pub comment_warning: Option<String>,
    /// True when the placeholder movie was substituted for a failed
    /// fetch.
    pub showing_placeholder: bool,
}

impl DetailState {
    /// Fresh detail view for the given movie.
    ///
    /// The viewer is captured from session state when the view opens;
    /// this crate never consults any ambient session.
    #[must_use]
    pub fn new(movie_id: MovieId, viewer: Option<UserProfile>) -> Self {
        Self {
            scope: ScopeId::new(),
            movie_id,
            viewer,
            movie: None,
            loading: false,
            error: None,
            comments: Vec::new(),
            comment_warning: None,
            showing_placeholder: false,
        }
    }
}

/// Commands and effect results for the detail view.
#[derive(Clone, Debug)]
pub enum DetailAction {
    /// Fetch the movie.
    Load,
    /// The movie arrived.
    Loaded {
        /// The movie document.
        movie: Movie,
    },
    /// The fetch failed.
    LoadFailed {
        /// Why the fetch failed.
        error: ApiError,
    },
    /// Add a comment to the local list.
    SubmitComment {
        /// Raw comment text; trimmed before use.
        content: String,
        /// Requested star rating; clamped to 1 through 5.
        rating: u8,
    },
    /// Leave the view, cancelling an in-flight fetch.
    Close,
}

/// Environment dependencies for the detail reducer
#[derive(Clone)]
pub struct DetailEnvironment {
    /// Backend API handle
    pub api: Arc<dyn CinemaApi>,
    /// Clock for comment timestamps
    pub clock: Arc<dyn Clock>,
    /// Substitute placeholder content when the movie fetch fails.
    ///
    /// Wire this to [`marquee_client::Config::demo_fallback`]; it is
    /// off by default and must stay off outside demos.
    pub demo_fallback: bool,
}

impl DetailEnvironment {
    /// Creates a new `DetailEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn CinemaApi>, clock: Arc<dyn Clock>, demo_fallback: bool) -> Self {
        Self {
            api,
            clock,
            demo_fallback,
        }
    }
}

/// The canned movie shown when the demo fallback is on and the real
/// fetch failed.
fn placeholder_movie(id: &MovieId) -> Movie {
    Movie {
        id: id.clone(),
        title: "Sample Movie".to_string(),
        description: "This is a sample movie description.".to_string(),
        poster: "https://via.placeholder.com/300x450".to_string(),
        release_date: "2025-01-01".to_string(),
        director: Some("Sample Director".to_string()),
        cast: Some(vec!["Actor 1".to_string(), "Actor 2".to_string()]),
        duration: Some(120),
        genre: Some(vec!["Action".to_string(), "Drama".to_string()]),
        rating: Some(8.5),
        trailer_url: Some("https://www.youtube.com/embed/sample-trailer".to_string()),
        showtimes: Vec::new(),
    }
}

fn placeholder_comments() -> Vec<Comment> {
    vec![
        Comment {
            author: "Nguyen Van A".to_string(),
            content: "Great movie!".to_string(),
            rating: 5,
            posted_at: "2025-04-01".to_string(),
        },
        Comment {
            author: "Tran Thi B".to_string(),
            content: "Gripping plot.".to_string(),
            rating: 4,
            posted_at: "2025-04-02".to_string(),
        },
    ]
}

/// Reducer for the movie detail view
#[derive(Clone, Debug)]
pub struct DetailReducer;

impl DetailReducer {
    /// Creates a new `DetailReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DetailReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for DetailReducer {
    type State = DetailState;
    type Action = DetailAction;
    type Environment = DetailEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // Load: fetch the movie under the view scope
            // ═══════════════════════════════════════════════════════════════
            DetailAction::Load => {
                state.loading = true;
                state.error = None;

                let api = env.api.clone();
                let movie_id = state.movie_id.clone();
                smallvec![Effect::cancellable(
                    state.scope,
                    Effect::Future(Box::pin(async move {
                        match api.movie(&movie_id).await {
                            Ok(movie) => Some(DetailAction::Loaded { movie }),
                            Err(error) => Some(DetailAction::LoadFailed { error }),
                        }
                    })),
                )]
            }

            DetailAction::Loaded { movie } => {
                state.loading = false;
                state.movie = Some(movie);
                state.showing_placeholder = false;
                smallvec![Effect::None]
            }

            DetailAction::LoadFailed { error } => {
                state.loading = false;
                if env.demo_fallback {
                    tracing::warn!(
                        movie = %state.movie_id,
                        %error,
                        "movie fetch failed, substituting placeholder content"
                    );
                    state.movie = Some(placeholder_movie(&state.movie_id));
                    state.comments = placeholder_comments();
                    state.showing_placeholder = true;
                } else {
                    tracing::warn!(movie = %state.movie_id, %error, "movie fetch failed");
                    state.error = Some(error.to_string());
                }
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════════
            // SubmitComment: validate, stamp, and prepend locally
            // ═══════════════════════════════════════════════════════════════
            DetailAction::SubmitComment { content, rating } => {
                let trimmed = content.trim();
                if trimmed.is_empty() {
                    state.comment_warning = Some("Comment cannot be empty".to_string());
                    return SmallVec::new();
                }

                state.comment_warning = None;
                let author = state.viewer.as_ref().map_or_else(
                    || "Guest".to_string(),
                    |viewer| viewer.email.clone(),
                );
                let comment = Comment {
                    author,
                    content: trimmed.to_string(),
                    rating: rating.clamp(1, 5),
                    posted_at: env.clock.now().format("%Y-%m-%d").to_string(),
                };
                state.comments.insert(0, comment);
                SmallVec::new()
            }

            DetailAction::Close => {
                smallvec![Effect::Cancel(state.scope)]
            }
        }
    }
}
