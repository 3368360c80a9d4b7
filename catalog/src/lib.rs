//! # Marquee Catalog
//!
//! Browse-side views of the cinema: paged theater and promotion
//! listings, the admin dashboard, and the movie detail page with its
//! local comment thread.
//!
//! Each view owns a cancellation scope. Closing a view cancels its
//! in-flight fetches, so a response that arrives after the user has
//! moved on is discarded rather than applied.
//!
//! ## Example
//!
//! ```ignore
//! let env = ListingEnvironment::new(api);
//! let store = Store::new(
//!     ListingState::new(),
//!     TheaterListingReducer::new(),
//!     env,
//! );
//!
//! store.send(ListingAction::Load).await?;
//! store.send(ListingAction::GoToPage { page: 1 }).await?;
//! ```

pub mod dashboard;
pub mod detail;
pub mod listing;

pub use dashboard::{
    DashboardAction, DashboardEnvironment, DashboardReducer, DashboardSection, DashboardState,
};
pub use detail::{Comment, DetailAction, DetailEnvironment, DetailReducer, DetailState};
pub use listing::{
    ListingAction, ListingEnvironment, ListingState, PAGE_SIZE, PromotionListingReducer,
    TheaterListingReducer,
};
