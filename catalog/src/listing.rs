//! Paged listings for theaters and promotions.
//!
//! The backend serves each collection whole, with no paging parameters,
//! so pagination is client-side: the full collection is fetched once on
//! entry and sliced into fixed-size pages. The slicing is isolated in
//! [`ListingState`] so a server-side page source could replace it
//! without touching the reducers' callers.

use std::sync::Arc;

use marquee_client::{ApiError, CinemaApi, Promotion, Theater};
use marquee_core::effect::ScopeId;
use marquee_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Items shown per page, matching the page size the backend's own
/// front-end uses.
pub const PAGE_SIZE: usize = 6;

/// A paged view over one fetched collection.
#[derive(Clone, Debug)]
pub struct ListingState<T> {
    /// Cancellation scope tied to the listing view's lifetime.
    pub scope: ScopeId,
    /// The full collection, as fetched.
    pub items: Vec<T>,
    /// True while the fetch is in flight.
    pub loading: bool,
    /// Current page index, zero-based. Always within range for the
    /// loaded collection.
    pub page: usize,
}

impl<T> ListingState<T> {
    /// Empty listing on the first page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scope: ScopeId::new(),
            items: Vec::new(),
            loading: false,
            page: 0,
        }
    }

    /// Number of pages for the loaded collection. Zero when empty.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(PAGE_SIZE)
    }

    /// The slice of items on the current page.
    #[must_use]
    pub fn current_page(&self) -> &[T] {
        let start = self.page * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.items.len());
        self.items.get(start..end).unwrap_or(&[])
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(self.page_count().saturating_sub(1));
    }
}

impl<T> Default for ListingState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Commands and effect results shared by both listing reducers.
#[derive(Clone, Debug)]
pub enum ListingAction<T> {
    /// Fetch the full collection.
    Load,
    /// The collection arrived.
    Loaded {
        /// All items, unsliced.
        items: Vec<T>,
    },
    /// The fetch failed. The list stays empty; there is no retry and no
    /// user-visible difference from an empty collection.
    LoadFailed {
        /// Why the fetch failed.
        error: ApiError,
    },
    /// Move to another page. Out-of-range indexes clamp.
    GoToPage {
        /// Requested page index, zero-based.
        page: usize,
    },
    /// Leave the view, cancelling an in-flight fetch.
    Close,
}

/// Environment dependencies for the listing reducers
#[derive(Clone)]
pub struct ListingEnvironment {
    /// Backend API handle
    pub api: Arc<dyn CinemaApi>,
}

impl ListingEnvironment {
    /// Creates a new `ListingEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn CinemaApi>) -> Self {
        Self { api }
    }
}

/// Reducer for the theaters page
#[derive(Clone, Debug)]
pub struct TheaterListingReducer;

impl TheaterListingReducer {
    /// Creates a new `TheaterListingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TheaterListingReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TheaterListingReducer {
    type State = ListingState<Theater>;
    type Action = ListingAction<Theater>;
    type Environment = ListingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ListingAction::Load => {
                state.loading = true;

                let api = env.api.clone();
                smallvec![Effect::cancellable(
                    state.scope,
                    Effect::Future(Box::pin(async move {
                        match api.theaters().await {
                            Ok(items) => Some(ListingAction::Loaded { items }),
                            Err(error) => Some(ListingAction::LoadFailed { error }),
                        }
                    })),
                )]
            }

            ListingAction::Loaded { items } => {
                state.loading = false;
                state.items = items;
                state.clamp_page();
                smallvec![Effect::None]
            }

            ListingAction::LoadFailed { error } => {
                tracing::warn!(%error, "theater listing fetch failed");
                state.loading = false;
                smallvec![Effect::None]
            }

            ListingAction::GoToPage { page } => {
                state.page = page;
                state.clamp_page();
                SmallVec::new()
            }

            ListingAction::Close => {
                smallvec![Effect::Cancel(state.scope)]
            }
        }
    }
}

/// Reducer for the promotions page
#[derive(Clone, Debug)]
pub struct PromotionListingReducer;

impl PromotionListingReducer {
    /// Creates a new `PromotionListingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PromotionListingReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for PromotionListingReducer {
    type State = ListingState<Promotion>;
    type Action = ListingAction<Promotion>;
    type Environment = ListingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ListingAction::Load => {
                state.loading = true;

                let api = env.api.clone();
                smallvec![Effect::cancellable(
                    state.scope,
                    Effect::Future(Box::pin(async move {
                        match api.promotions().await {
                            Ok(items) => Some(ListingAction::Loaded { items }),
                            Err(error) => Some(ListingAction::LoadFailed { error }),
                        }
                    })),
                )]
            }

            ListingAction::Loaded { items } => {
                state.loading = false;
                state.items = items;
                state.clamp_page();
                smallvec![Effect::None]
            }

            ListingAction::LoadFailed { error } => {
                tracing::warn!(%error, "promotion listing fetch failed");
                state.loading = false;
                smallvec![Effect::None]
            }

            ListingAction::GoToPage { page } => {
                state.page = page;
                state.clamp_page();
                SmallVec::new()
            }

            ListingAction::Close => {
                smallvec![Effect::Cancel(state.scope)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can unwrap

    use super::*;
    use marquee_client::TheaterId;
    use marquee_testing::{MockCinemaApi, ReducerTest, assertions};

    fn theater(n: usize) -> Theater {
        Theater {
            id: TheaterId::new(format!("t{n}")),
            name: format!("Screen {n}"),
            location: "12 Elm Street".to_string(),
            capacity: 120,
        }
    }

    fn theaters(count: usize) -> Vec<Theater> {
        (0..count).map(theater).collect()
    }

    fn env() -> ListingEnvironment {
        ListingEnvironment::new(Arc::new(MockCinemaApi::new()))
    }

    #[test]
    fn test_load_issues_scoped_fetch() {
        ReducerTest::new(TheaterListingReducer::new())
            .with_env(env())
            .given_state(ListingState::new())
            .when_action(ListingAction::Load)
            .then_state(|state| assert!(state.loading))
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_cancellable_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_pages_slice_with_remainder() {
        ReducerTest::new(TheaterListingReducer::new())
            .with_env(env())
            .given_state(ListingState::new())
            .when_action(ListingAction::Loaded {
                items: theaters(13),
            })
            .then_state(|state| {
                assert_eq!(state.page_count(), 3);
                assert_eq!(state.current_page().len(), PAGE_SIZE);

                let mut last = state.clone();
                last.page = 2;
                assert_eq!(last.current_page().len(), 1);
            })
            .run();
    }

    #[test]
    fn test_go_to_page_clamps_to_range() {
        ReducerTest::new(TheaterListingReducer::new())
            .with_env(env())
            .given_state(ListingState::new())
            .when_action(ListingAction::Loaded {
                items: theaters(13),
            })
            .when_action(ListingAction::GoToPage { page: 99 })
            .then_state(|state| {
                assert_eq!(state.page, 2);
                assert_eq!(state.current_page().len(), 1);
            })
            .run();
    }

    #[test]
    fn test_go_to_page_on_empty_collection_stays_on_first() {
        ReducerTest::new(PromotionListingReducer::new())
            .with_env(env())
            .given_state(ListingState::new())
            .when_action(ListingAction::GoToPage { page: 4 })
            .then_state(|state| {
                assert_eq!(state.page, 0);
                assert!(state.current_page().is_empty());
            })
            .run();
    }

    #[test]
    fn test_reload_clamps_a_now_invalid_page() {
        ReducerTest::new(TheaterListingReducer::new())
            .with_env(env())
            .given_state(ListingState::new())
            .when_action(ListingAction::Loaded {
                items: theaters(13),
            })
            .when_action(ListingAction::GoToPage { page: 2 })
            .when_action(ListingAction::Loaded { items: theaters(4) })
            .then_state(|state| {
                assert_eq!(state.page, 0);
                assert_eq!(state.current_page().len(), 4);
            })
            .run();
    }

    #[test]
    fn test_load_failure_leaves_list_empty() {
        ReducerTest::new(TheaterListingReducer::new())
            .with_env(env())
            .given_state(ListingState::new())
            .when_action(ListingAction::Load)
            .when_action(ListingAction::LoadFailed {
                error: ApiError::RequestFailed("connection refused".to_string()),
            })
            .then_state(|state| {
                assert!(!state.loading);
                assert!(state.items.is_empty());
                assert!(state.current_page().is_empty());
            })
            .run();
    }

    #[test]
    fn test_close_cancels_the_listing_scope() {
        let state: ListingState<Theater> = ListingState::new();
        let scope = state.scope;

        ReducerTest::new(TheaterListingReducer::new())
            .with_env(env())
            .given_state(state)
            .when_action(ListingAction::Close)
            .then_effects(move |effects| {
                assertions::assert_cancels_scope(effects, scope);
            })
            .run();
    }
}
