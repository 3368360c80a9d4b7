//! # Marquee Booking
//!
//! The three-step booking wizard: pick a showtime, pick seats, confirm.
//! Built as a reducer over [`BookingState`] with one wizard instance
//! per movie being booked.
//!
//! Every fetch the wizard issues is wrapped in the instance's
//! cancellation scope, so abandoning the wizard discards responses
//! still in flight instead of applying them to a dead view.
//!
//! ## Example
//!
//! ```ignore
//! let env = BookingEnvironment::new(api);
//! let store = Store::new(
//!     BookingState::new(MovieId::new("6700a1")),
//!     BookingReducer::new(),
//!     env,
//! );
//!
//! store.send(BookingAction::Start).await?;
//! ```

pub mod reducer;
pub mod types;

pub use reducer::{BookingEnvironment, BookingReducer};
pub use types::{BookingAction, BookingState, WizardStep};
