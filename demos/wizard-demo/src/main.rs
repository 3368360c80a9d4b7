//! Booking Wizard Demo
//!
//! Walks the full customer journey against a scripted API mock:
//! - Sign in and session persistence
//! - The three-step booking wizard (showtime, seats, confirmation)
//! - The movie detail page with its demo fallback and local comments
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin wizard-demo
//! ```

use std::sync::Arc;

use marquee_booking::{BookingAction, BookingEnvironment, BookingReducer, BookingState};
use marquee_catalog::{DetailAction, DetailEnvironment, DetailReducer, DetailState};
use marquee_client::{
    AccessToken, ApiError, AuthSession, Movie, MovieId, Seat, SeatId, SeatKind, SeatStatus,
    Showtime, ShowtimeId, UserId, UserProfile,
};
use marquee_core::environment::SystemClock;
use marquee_runtime::Store;
use marquee_session::{
    MemoryTokenStore, SessionAction, SessionEnvironment, SessionReducer, SessionState,
};
use marquee_testing::MockCinemaApi;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn scripted_api() -> MockCinemaApi {
    let api = MockCinemaApi::new();

    api.script_sign_in(Ok(AuthSession {
        token: AccessToken::new("demo-token"),
        user: UserProfile {
            id: UserId::new("u1"),
            email: "ana@example.com".to_string(),
        },
    }));
    api.script_sign_out(Ok(()));

    api.script_movie(Movie {
        id: MovieId::new("m1"),
        title: "The Long Intermission".to_string(),
        description: "A projectionist locks the booth and refuses to change the reel.".to_string(),
        poster: "https://example.com/poster.jpg".to_string(),
        release_date: "2025-05-01".to_string(),
        director: Some("L. Moreau".to_string()),
        cast: None,
        duration: Some(128),
        genre: Some(vec!["Drama".to_string()]),
        rating: Some(7.9),
        trailer_url: None,
        showtimes: vec![
            Showtime {
                id: ShowtimeId::new("s1"),
                date: "2025-06-01".to_string(),
                time: "18:00".to_string(),
            },
            Showtime {
                id: ShowtimeId::new("s2"),
                date: "2025-06-01".to_string(),
                time: "21:00".to_string(),
            },
        ],
    });

    api.script_seats(
        ShowtimeId::new("s1"),
        vec![
            seat("A1", 90_000, SeatStatus::Available, SeatKind::Standard),
            seat("A2", 90_000, SeatStatus::Available, SeatKind::Standard),
            seat("A3", 90_000, SeatStatus::Booked, SeatKind::Standard),
            seat("B1", 120_000, SeatStatus::Available, SeatKind::Vip),
            seat("B2", 120_000, SeatStatus::Booked, SeatKind::Vip),
            seat("C1", 150_000, SeatStatus::Available, SeatKind::Couple),
        ],
    );
    api.script_booking(Ok(()));

    // The detail page demo: this movie has no scripted response, so the
    // fetch fails and the demo fallback substitutes placeholder content.
    api.script_movie_error(
        MovieId::new("m9"),
        ApiError::RequestFailed("connection refused".to_string()),
    );

    api
}

fn seat(id: &str, price: u64, status: SeatStatus, kind: SeatKind) -> Seat {
    Seat {
        id: SeatId::new(id),
        name: id.to_string(),
        price,
        status,
        kind,
    }
}

fn print_seats(seats: &[Seat]) {
    for seat in seats {
        let marker = match seat.status {
            SeatStatus::Available => ' ',
            SeatStatus::Selected => '●',
            SeatStatus::Booked => '✕',
        };
        println!("   [{marker}] {:3} {:>7} VND", seat.name, seat.price);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,marquee=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("\n🎬 ============================================");
    println!("   Marquee Booking Wizard - Live Demo");
    println!("============================================\n");

    let api = scripted_api();

    // ========== Session ==========

    println!("1️⃣  Signing in...");

    let tokens = Arc::new(MemoryTokenStore::new());
    let session = Store::new(
        SessionState::new(),
        SessionReducer::new(),
        SessionEnvironment::new(Arc::new(api.clone()), tokens),
    );

    let mut handle = session.send(SessionAction::Initialize).await?;
    handle.wait().await;
    println!(
        "   Session restored from storage: {}",
        session.state(SessionState::authenticated).await
    );

    let mut handle = session
        .send(SessionAction::SignIn {
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await?;
    handle.wait().await;

    let viewer = session.state(|s| s.user.clone()).await;
    match &viewer {
        Some(user) => println!("   ✓ Signed in as {}\n", user.email),
        None => println!("   ✗ Sign-in failed\n"),
    }

    // ========== Booking wizard ==========

    println!("2️⃣  Opening the booking wizard...");

    let wizard = Store::new(
        BookingState::new(MovieId::new("m1")),
        BookingReducer::new(),
        BookingEnvironment::new(Arc::new(api.clone())),
    );

    let mut handle = wizard.send(BookingAction::Start).await?;
    handle.wait().await;

    let (title, showtimes) = wizard
        .state(|s| {
            s.movie
                .as_ref()
                .map_or_else(|| ("<missing>".to_string(), Vec::new()), |m| {
                    (m.title.clone(), m.showtimes.clone())
                })
        })
        .await;
    println!("   Movie: {title}");
    for showtime in &showtimes {
        println!("   Showtime: {} {}", showtime.date, showtime.time);
    }

    println!("\n3️⃣  Picking the 18:00 showtime...");
    let mut handle = wizard
        .send(BookingAction::SelectShowtime {
            showtime: Showtime {
                id: ShowtimeId::new("s1"),
                date: "2025-06-01".to_string(),
                time: "18:00".to_string(),
            },
        })
        .await?;
    handle.wait().await;

    println!("   Seat map:");
    print_seats(&wizard.state(|s| s.seats.clone()).await);

    println!("\n4️⃣  Selecting seats A1 and B1...");
    for id in ["A1", "B1"] {
        let mut handle = wizard
            .send(BookingAction::ToggleSeat {
                seat: SeatId::new(id),
            })
            .await?;
        handle.wait().await;
    }
    print_seats(&wizard.state(|s| s.seats.clone()).await);
    println!(
        "   Total: {} VND",
        wizard.state(BookingState::total_price).await
    );

    println!("\n5️⃣  Confirming the booking...");
    let mut handle = wizard.send(BookingAction::Advance).await?;
    handle.wait().await;
    let mut handle = wizard.send(BookingAction::Submit).await?;
    handle.wait().await;

    if wizard.state(|s| s.completed).await {
        println!("   ✓ Booking confirmed");
    } else {
        println!("   ✗ Booking failed");
    }

    // ========== Movie detail with demo fallback ==========

    println!("\n6️⃣  Opening a detail page whose fetch fails (demo fallback on)...");

    let detail = Store::new(
        DetailState::new(MovieId::new("m9"), viewer),
        DetailReducer::new(),
        DetailEnvironment::new(Arc::new(api.clone()), Arc::new(SystemClock), true),
    );

    let mut handle = detail.send(DetailAction::Load).await?;
    handle.wait().await;

    let shown = detail
        .state(|s| s.movie.as_ref().map(|m| m.title.clone()))
        .await;
    println!("   Showing: {}", shown.unwrap_or_else(|| "<none>".to_string()));

    let mut handle = detail
        .send(DetailAction::SubmitComment {
            content: "The placeholder grew on me.".to_string(),
            rating: 4,
        })
        .await?;
    handle.wait().await;

    println!("   Comments:");
    for comment in detail.state(|s| s.comments.clone()).await {
        println!(
            "   {} ({}★, {}): {}",
            comment.author, comment.rating, comment.posted_at, comment.content
        );
    }

    // ========== Sign out ==========

    println!("\n7️⃣  Signing out...");
    let mut handle = session.send(SessionAction::SignOut).await?;
    handle.wait().await;
    println!(
        "   Session authenticated: {}",
        session.state(SessionState::authenticated).await
    );

    println!("\n✓ Demo complete");
    Ok(())
}
