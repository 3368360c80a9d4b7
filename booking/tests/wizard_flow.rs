//! Integration tests for the booking wizard store
//!
//! Drives `BookingReducer` through a real `Store` with a scripted API
//! mock: the full happy path, load failures, submit retry, and the
//! cancellation behavior when the wizard is abandoned mid-fetch.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::Arc;
use std::time::Duration;

use marquee_booking::{BookingAction, BookingEnvironment, BookingReducer, BookingState, WizardStep};
use marquee_client::{
    ApiError, BookingRequest, Movie, MovieId, Seat, SeatId, SeatKind, SeatStatus, Showtime,
    ShowtimeId,
};
use marquee_runtime::Store;
use marquee_testing::{MockCinemaApi, RecordedCall};

const WAIT: Duration = Duration::from_secs(1);

// ============================================================================
// Test Fixtures
// ============================================================================

fn showtime_s1() -> Showtime {
    Showtime {
        id: ShowtimeId::new("s1"),
        date: "2025-06-01".to_string(),
        time: "18:00".to_string(),
    }
}

fn seat(id: &str, price: u64, status: SeatStatus) -> Seat {
    Seat {
        id: SeatId::new(id),
        name: id.to_string(),
        price,
        status,
        kind: SeatKind::Standard,
    }
}

fn sample_movie() -> Movie {
    Movie {
        id: MovieId::new("m1"),
        title: "The Long Intermission".to_string(),
        description: "A projectionist locks the booth.".to_string(),
        poster: "https://example.com/poster.jpg".to_string(),
        release_date: "2025-05-01".to_string(),
        director: None,
        cast: None,
        duration: None,
        genre: None,
        rating: None,
        trailer_url: None,
        showtimes: vec![showtime_s1()],
    }
}

fn wizard_store(
    api: &MockCinemaApi,
) -> Store<BookingState, BookingAction, BookingEnvironment, BookingReducer> {
    Store::new(
        BookingState::new(MovieId::new("m1")),
        BookingReducer::new(),
        BookingEnvironment::new(Arc::new(api.clone())),
    )
}

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn test_full_wizard_flow() {
    let api = MockCinemaApi::new();
    api.script_movie(sample_movie());
    api.script_seats(
        ShowtimeId::new("s1"),
        vec![
            seat("A1", 90_000, SeatStatus::Available),
            seat("A2", 90_000, SeatStatus::Booked),
        ],
    );
    api.script_booking(Ok(()));
    let store = wizard_store(&api);

    store
        .send_and_wait_for(
            BookingAction::Start,
            |a| matches!(a, BookingAction::MovieLoaded { .. }),
            WAIT,
        )
        .await
        .unwrap();

    store
        .send_and_wait_for(
            BookingAction::SelectShowtime {
                showtime: showtime_s1(),
            },
            |a| matches!(a, BookingAction::SeatsLoaded { .. }),
            WAIT,
        )
        .await
        .unwrap();

    // Booked seat is inert; the available one selects.
    let mut handle = store
        .send(BookingAction::ToggleSeat {
            seat: SeatId::new("A2"),
        })
        .await
        .unwrap();
    handle.wait().await;
    let mut handle = store
        .send(BookingAction::ToggleSeat {
            seat: SeatId::new("A1"),
        })
        .await
        .unwrap();
    handle.wait().await;

    assert_eq!(store.state(|s| s.total_price()).await, 90_000);

    let mut handle = store.send(BookingAction::Advance).await.unwrap();
    handle.wait().await;
    assert_eq!(
        store.state(|s| s.step).await,
        WizardStep::PaymentConfirmation
    );

    store
        .send_and_wait_for(
            BookingAction::Submit,
            |a| matches!(a, BookingAction::SubmitSucceeded),
            WAIT,
        )
        .await
        .unwrap();

    let state = store.state(Clone::clone).await;
    assert!(state.completed);
    assert!(state.selection.is_empty());
    assert!(state.submit_error.is_none());

    assert_eq!(
        api.calls(),
        vec![
            RecordedCall::Movie(MovieId::new("m1")),
            RecordedCall::Seats(ShowtimeId::new("s1")),
            RecordedCall::CreateBooking(BookingRequest {
                movie_id: MovieId::new("m1"),
                showtime_id: ShowtimeId::new("s1"),
                seats: vec![SeatId::new("A1")],
            }),
        ]
    );
}

// ============================================================================
// Load failures
// ============================================================================

#[tokio::test]
async fn test_movie_load_failure_is_terminal() {
    let api = MockCinemaApi::new();
    api.script_movie_error(
        MovieId::new("m1"),
        ApiError::Server {
            status: 500,
            message: "catalog down".to_string(),
        },
    );
    let store = wizard_store(&api);

    store
        .send_and_wait_for(
            BookingAction::Start,
            |a| matches!(a, BookingAction::MovieLoadFailed { .. }),
            WAIT,
        )
        .await
        .unwrap();

    let state = store.state(Clone::clone).await;
    assert!(state.movie.is_none());
    assert!(!state.loading_movie);
    let error = state.load_error.unwrap();
    assert!(error.contains("catalog down"), "got: {error}");
}

#[tokio::test]
async fn test_seat_fetch_failure_surfaces_error() {
    let api = MockCinemaApi::new();
    api.script_movie(sample_movie());
    api.script_seats_error(
        ShowtimeId::new("s1"),
        ApiError::Server {
            status: 502,
            message: "seat service timeout".to_string(),
        },
    );
    let store = wizard_store(&api);

    store
        .send_and_wait_for(
            BookingAction::Start,
            |a| matches!(a, BookingAction::MovieLoaded { .. }),
            WAIT,
        )
        .await
        .unwrap();
    store
        .send_and_wait_for(
            BookingAction::SelectShowtime {
                showtime: showtime_s1(),
            },
            |a| matches!(a, BookingAction::SeatLoadFailed { .. }),
            WAIT,
        )
        .await
        .unwrap();

    let state = store.state(Clone::clone).await;
    assert!(!state.loading_seats);
    assert!(state.seats.is_empty());
    assert!(state.load_error.is_some());
}

// ============================================================================
// Submit retry
// ============================================================================

#[tokio::test]
async fn test_submit_failure_then_manual_retry() {
    let api = MockCinemaApi::new();
    api.script_movie(sample_movie());
    api.script_seats(
        ShowtimeId::new("s1"),
        vec![seat("A1", 90_000, SeatStatus::Available)],
    );
    api.script_booking(Err(ApiError::Rejected("seat A1 already booked".to_string())));
    let store = wizard_store(&api);

    store
        .send_and_wait_for(
            BookingAction::Start,
            |a| matches!(a, BookingAction::MovieLoaded { .. }),
            WAIT,
        )
        .await
        .unwrap();
    store
        .send_and_wait_for(
            BookingAction::SelectShowtime {
                showtime: showtime_s1(),
            },
            |a| matches!(a, BookingAction::SeatsLoaded { .. }),
            WAIT,
        )
        .await
        .unwrap();
    let mut handle = store
        .send(BookingAction::ToggleSeat {
            seat: SeatId::new("A1"),
        })
        .await
        .unwrap();
    handle.wait().await;
    let mut handle = store.send(BookingAction::Advance).await.unwrap();
    handle.wait().await;

    store
        .send_and_wait_for(
            BookingAction::Submit,
            |a| matches!(a, BookingAction::SubmitFailed { .. }),
            WAIT,
        )
        .await
        .unwrap();

    // Failure keeps the wizard on the confirmation step for a retry.
    let state = store.state(Clone::clone).await;
    assert_eq!(state.step, WizardStep::PaymentConfirmation);
    assert!(!state.completed);
    assert!(state.submit_error.is_some());
    assert_eq!(state.selection, vec![SeatId::new("A1")]);

    api.script_booking(Ok(()));
    store
        .send_and_wait_for(
            BookingAction::Submit,
            |a| matches!(a, BookingAction::SubmitSucceeded),
            WAIT,
        )
        .await
        .unwrap();

    let state = store.state(Clone::clone).await;
    assert!(state.completed);
    assert!(state.submit_error.is_none());
}

// ============================================================================
// Abandonment
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_abandon_discards_late_movie_response() {
    let api = MockCinemaApi::new();
    api.script_movie(sample_movie());
    api.set_latency(Duration::from_secs(5));
    let store = wizard_store(&api);

    let mut fetch = store.send(BookingAction::Start).await.unwrap();
    assert!(store.state(|s| s.loading_movie).await);

    // Abandon while the movie response is still in flight. Cancel
    // executes synchronously inside send.
    store.send(BookingAction::Abandon).await.unwrap();

    tokio::time::advance(Duration::from_secs(6)).await;
    fetch.wait().await;

    let state = store.state(Clone::clone).await;
    assert!(state.movie.is_none(), "late response must be discarded");
    assert!(state.load_error.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_abandon_discards_late_seat_response() {
    let api = MockCinemaApi::new();
    api.script_movie(sample_movie());
    api.script_seats(
        ShowtimeId::new("s1"),
        vec![seat("A1", 90_000, SeatStatus::Available)],
    );
    let store = wizard_store(&api);

    store
        .send_and_wait_for(
            BookingAction::Start,
            |a| matches!(a, BookingAction::MovieLoaded { .. }),
            WAIT,
        )
        .await
        .unwrap();

    // Seats respond slowly; the user gives up before they arrive.
    api.set_latency(Duration::from_secs(5));
    let mut fetch = store
        .send(BookingAction::SelectShowtime {
            showtime: showtime_s1(),
        })
        .await
        .unwrap();
    store.send(BookingAction::Abandon).await.unwrap();

    tokio::time::advance(Duration::from_secs(6)).await;
    fetch.wait().await;

    let state = store.state(Clone::clone).await;
    assert!(state.seats.is_empty(), "late seat map must be discarded");
    assert!(state.loading_seats, "no completion event lands after cancel");
}
