//! # Marquee Cinema API Client
//!
//! HTTP client for the cinema ticketing backend: catalog reads, seat
//! maps, booking submission, and the bearer-token auth endpoints.
//!
//! The API surface is the [`CinemaApi`] trait; [`CinemaClient`] is its
//! HTTP implementation. Feature crates depend only on the trait, which
//! keeps reducers testable against scripted mocks.
//!
//! ## Example
//!
//! ```no_run
//! use marquee_client::{CinemaApi, CinemaClient, Config};
//! use marquee_client::types::MovieId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let client = CinemaClient::from_config(&config)?;
//!
//!     let movie = client.movie(&MovieId::new("6700a1")).await?;
//!     println!("{} has {} showtimes", movie.title, movie.showtimes.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Wire format notes
//!
//! - Catalog documents are keyed by Mongo-style `_id`; the public
//!   theater/promotion listings use plain `id`.
//! - Admin collections arrive wrapped in `{ "data": [...] }`; public
//!   listings are bare arrays.
//! - The booking body is camelCase, everything else snake_case.
//! - A 2xx response can still report failure via `success: false`.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use api::{ApiFuture, CinemaApi};
pub use auth::{AccessToken, AuthSession, SignInRequest, SignUpRequest, UserProfile};
pub use client::CinemaClient;
pub use config::Config;
pub use error::ApiError;
pub use types::{
    BookingRequest, Envelope, Movie, MovieId, MovieRecord, Promotion, PromotionId, Seat, SeatId,
    SeatKind, SeatStatus, Showtime, ShowtimeId, Theater, TheaterId, TheaterRecord, UserId,
    UserRecord,
};
