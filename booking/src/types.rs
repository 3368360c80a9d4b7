//! State and actions for the booking wizard.

use marquee_client::{ApiError, Movie, MovieId, Seat, SeatId, SeatStatus, Showtime};
use marquee_core::effect::ScopeId;

/// The wizard's three steps, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    /// Pick one of the movie's showtimes.
    ShowtimeSelection,
    /// Pick seats on the showtime's seat map.
    SeatSelection,
    /// Review the selection and submit.
    PaymentConfirmation,
}

impl WizardStep {
    /// The previous step. Stepping back from the first step stays put.
    #[must_use]
    pub const fn back(self) -> Self {
        match self {
            Self::ShowtimeSelection | Self::SeatSelection => Self::ShowtimeSelection,
            Self::PaymentConfirmation => Self::SeatSelection,
        }
    }
}

/// One booking wizard instance, for a single movie.
///
/// Each instance owns a fresh cancellation [`scope`](Self::scope); all
/// its fetches run under that scope so abandoning the wizard discards
/// late responses.
#[derive(Clone, Debug)]
pub struct BookingState {
    /// Cancellation scope tied to this wizard instance's lifetime.
    pub scope: ScopeId,
    /// Movie being booked.
    pub movie_id: MovieId,
    /// The movie document, once loaded. Showtimes come nested in it.
    pub movie: Option<Movie>,
    /// True while the movie fetch is in flight.
    pub loading_movie: bool,
    /// True while the seat map fetch is in flight.
    pub loading_seats: bool,
    /// Set when a wizard fetch fails. There is no automatic retry; the
    /// only way out is back to the catalog.
    pub load_error: Option<String>,
    /// The chosen showtime. Fixed once chosen.
    pub selected_showtime: Option<Showtime>,
    /// Seat map for the chosen showtime.
    pub seats: Vec<Seat>,
    /// Selected seat ids, in the order they were picked.
    pub selection: Vec<SeatId>,
    /// Current wizard step.
    pub step: WizardStep,
    /// Inline warning when the user tries to advance without seats.
    pub warning: Option<String>,
    /// True while the booking submission is in flight.
    pub submitting: bool,
    /// Submission failure, shown on the confirmation step for retry.
    pub submit_error: Option<String>,
    /// True once the booking went through.
    pub completed: bool,
}

impl BookingState {
    /// Fresh wizard for the given movie, on the first step.
    #[must_use]
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            scope: ScopeId::new(),
            movie_id,
            movie: None,
            loading_movie: false,
            loading_seats: false,
            load_error: None,
            selected_showtime: None,
            seats: Vec::new(),
            selection: Vec::new(),
            step: WizardStep::ShowtimeSelection,
            warning: None,
            submitting: false,
            submit_error: None,
            completed: false,
        }
    }

    /// Sum of the selected seats' prices, in the backend's minor units.
    ///
    /// A pure fold over the current selection, recomputed on every call.
    /// The empty selection totals zero.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.selection
            .iter()
            .filter_map(|id| self.seats.iter().find(|seat| &seat.id == id))
            .map(|seat| seat.price)
            .sum()
    }

    /// Look up a seat's current status, if the seat exists.
    #[must_use]
    pub fn seat_status(&self, id: &SeatId) -> Option<SeatStatus> {
        self.seats
            .iter()
            .find(|seat| &seat.id == id)
            .map(|seat| seat.status)
    }
}

/// Commands and effect results for the booking wizard.
#[derive(Clone, Debug)]
pub enum BookingAction {
    /// Load the wizard's movie with its showtimes.
    Start,
    /// Movie fetch landed.
    MovieLoaded {
        /// The movie document.
        movie: Movie,
    },
    /// Movie fetch failed. Terminal for this wizard instance.
    MovieLoadFailed {
        /// Why the fetch failed.
        error: ApiError,
    },
    /// Choose a showtime and advance to seat selection.
    SelectShowtime {
        /// The chosen showtime.
        showtime: Showtime,
    },
    /// Seat map fetch landed.
    SeatsLoaded {
        /// Seat map for the chosen showtime.
        seats: Vec<Seat>,
    },
    /// Seat map fetch failed.
    SeatLoadFailed {
        /// Why the fetch failed.
        error: ApiError,
    },
    /// Flip one seat between available and selected. Booked seats are
    /// a no-op.
    ToggleSeat {
        /// The seat to flip.
        seat: SeatId,
    },
    /// Move from seat selection to confirmation. Requires a non-empty
    /// selection.
    Advance,
    /// Step back one step, keeping everything already chosen.
    Back,
    /// Post the booking.
    Submit,
    /// The booking went through.
    SubmitSucceeded,
    /// The booking was refused or failed in transit.
    SubmitFailed {
        /// Why submission failed.
        error: ApiError,
    },
    /// Leave the wizard, cancelling its in-flight fetches.
    Abandon,
}
