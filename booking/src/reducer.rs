//! Reducer logic for the booking wizard.
//!
//! The wizard is linear: load the movie, pick a showtime, pick seats,
//! confirm. Fetches run under the wizard's cancellation scope so that
//! abandoning it discards any response still in flight. The submit is
//! the one unscoped effect: once the user confirms, the outcome is
//! applied even if it races the wizard teardown.

use std::sync::Arc;

use marquee_client::{BookingRequest, CinemaApi, SeatStatus};
use marquee_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

use crate::types::{BookingAction, BookingState, WizardStep};

/// Environment dependencies for the booking reducer
#[derive(Clone)]
pub struct BookingEnvironment {
    /// Backend API handle
    pub api: Arc<dyn CinemaApi>,
}

impl BookingEnvironment {
    /// Creates a new `BookingEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn CinemaApi>) -> Self {
        Self { api }
    }
}

/// Reducer for the booking wizard
#[derive(Clone, Debug)]
pub struct BookingReducer;

impl BookingReducer {
    /// Creates a new `BookingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BookingReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for BookingReducer {
    type State = BookingState;
    type Action = BookingAction;
    type Environment = BookingEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per action keeps the flow readable
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // Start: load the movie and its showtimes under the wizard scope
            // ═══════════════════════════════════════════════════════════════
            BookingAction::Start => {
                state.loading_movie = true;
                state.load_error = None;

                let api = env.api.clone();
                let movie_id = state.movie_id.clone();
                smallvec![Effect::cancellable(
                    state.scope,
                    Effect::Future(Box::pin(async move {
                        match api.movie(&movie_id).await {
                            Ok(movie) => Some(BookingAction::MovieLoaded { movie }),
                            Err(error) => Some(BookingAction::MovieLoadFailed { error }),
                        }
                    })),
                )]
            }

            BookingAction::MovieLoaded { movie } => {
                state.loading_movie = false;
                state.movie = Some(movie);
                smallvec![Effect::None]
            }

            BookingAction::MovieLoadFailed { error } => {
                tracing::warn!(movie = %state.movie_id, %error, "wizard movie load failed");
                state.loading_movie = false;
                state.load_error = Some(error.to_string());
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════════
            // SelectShowtime: fix the showtime, fetch its seat map
            // ═══════════════════════════════════════════════════════════════
            BookingAction::SelectShowtime { showtime } => {
                if state.step != WizardStep::ShowtimeSelection {
                    // The showtime is fixed once seat selection begins.
                    return SmallVec::new();
                }

                let showtime_id = showtime.id.clone();
                state.selected_showtime = Some(showtime);
                state.step = WizardStep::SeatSelection;
                state.seats.clear();
                state.selection.clear();
                state.loading_seats = true;

                let api = env.api.clone();
                smallvec![Effect::cancellable(
                    state.scope,
                    Effect::Future(Box::pin(async move {
                        match api.seats(&showtime_id).await {
                            Ok(seats) => Some(BookingAction::SeatsLoaded { seats }),
                            Err(error) => Some(BookingAction::SeatLoadFailed { error }),
                        }
                    })),
                )]
            }

            BookingAction::SeatsLoaded { seats } => {
                state.loading_seats = false;
                state.seats = seats;
                smallvec![Effect::None]
            }

            BookingAction::SeatLoadFailed { error } => {
                tracing::warn!(%error, "wizard seat map load failed");
                state.loading_seats = false;
                state.load_error = Some(error.to_string());
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════════
            // ToggleSeat: flip available ↔ selected; booked seats are inert
            // ═══════════════════════════════════════════════════════════════
            BookingAction::ToggleSeat { seat } => {
                let Some(entry) = state.seats.iter_mut().find(|s| s.id == seat) else {
                    return SmallVec::new();
                };

                match entry.status {
                    SeatStatus::Booked => {}
                    SeatStatus::Available => {
                        entry.status = SeatStatus::Selected;
                        state.selection.push(seat);
                        state.warning = None;
                    }
                    SeatStatus::Selected => {
                        entry.status = SeatStatus::Available;
                        state.selection.retain(|id| id != &seat);
                    }
                }
                SmallVec::new()
            }

            // ═══════════════════════════════════════════════════════════════
            // Advance / Back: linear step movement with the seat guard
            // ═══════════════════════════════════════════════════════════════
            BookingAction::Advance => {
                if state.step != WizardStep::SeatSelection {
                    return SmallVec::new();
                }
                if state.selection.is_empty() {
                    state.warning = Some("Select at least one seat to continue".to_string());
                    return SmallVec::new();
                }
                state.warning = None;
                state.step = WizardStep::PaymentConfirmation;
                SmallVec::new()
            }

            BookingAction::Back => {
                // Chosen data stays; only the step index moves.
                state.step = state.step.back();
                state.warning = None;
                SmallVec::new()
            }

            // ═══════════════════════════════════════════════════════════════
            // Submit: post the booking as one request, unscoped
            // ═══════════════════════════════════════════════════════════════
            BookingAction::Submit => {
                if state.step != WizardStep::PaymentConfirmation || state.submitting {
                    return SmallVec::new();
                }
                let Some(showtime) = state.selected_showtime.as_ref() else {
                    return SmallVec::new();
                };

                state.submitting = true;
                state.submit_error = None;

                let request = BookingRequest {
                    movie_id: state.movie_id.clone(),
                    showtime_id: showtime.id.clone(),
                    seats: state.selection.clone(),
                };
                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.create_booking(&request).await {
                        Ok(()) => Some(BookingAction::SubmitSucceeded),
                        Err(error) => Some(BookingAction::SubmitFailed { error }),
                    }
                }))]
            }

            BookingAction::SubmitSucceeded => {
                state.submitting = false;
                state.completed = true;
                state.selection.clear();
                state.submit_error = None;
                smallvec![Effect::None]
            }

            BookingAction::SubmitFailed { error } => {
                tracing::warn!(%error, "booking submission failed");
                state.submitting = false;
                state.submit_error = Some(error.to_string());
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════════
            // Abandon: cancel the wizard scope so late responses are dropped
            // ═══════════════════════════════════════════════════════════════
            BookingAction::Abandon => {
                smallvec![Effect::Cancel(state.scope)]
            }
        }
    }
}
