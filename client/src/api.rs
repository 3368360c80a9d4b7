//! The backend API surface as a trait
//!
//! Feature reducers never talk to a concrete HTTP client. Their
//! environments hold an `Arc<dyn CinemaApi>`, so tests swap in scripted
//! mocks and production wires in [`CinemaClient`](crate::CinemaClient).
//!
//! Note: methods return boxed futures instead of `async fn` to keep the
//! trait dyn-compatible (object-safe).

use std::future::Future;
use std::pin::Pin;

use crate::auth::{AccessToken, AuthSession, SignUpRequest, UserProfile};
use crate::error::ApiError;
use crate::types::{
    BookingRequest, Movie, MovieId, MovieRecord, Promotion, Seat, ShowtimeId, Theater,
    TheaterRecord, UserRecord,
};

/// Boxed future returned by every [`CinemaApi`] method.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

/// Every backend operation the client performs
///
/// One method per endpoint; the groupings mirror the backend's route
/// prefixes (`/api/auth`, `/api/movie`, collection listings).
pub trait CinemaApi: Send + Sync {
    /// Verify a stored bearer token and resolve its owner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] or [`ApiError::Rejected`] when
    /// the token is no longer accepted, plus the usual transport errors.
    fn verify_token(&self, token: &AccessToken) -> ApiFuture<'_, UserProfile>;

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the backend refuses the
    /// credentials, or transport/decode errors.
    fn sign_in(&self, email: &str, password: &str) -> ApiFuture<'_, AuthSession>;

    /// Register a new account. Returns the server's confirmation
    /// message, when one is provided.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with the backend's `message` when
    /// registration is refused, or transport/decode errors.
    fn sign_up(&self, request: &SignUpRequest) -> ApiFuture<'_, Option<String>>;

    /// Invalidate the session server-side.
    ///
    /// # Errors
    ///
    /// Returns transport or server errors; callers treat sign-out as
    /// best-effort and clear local state regardless.
    fn sign_out(&self, token: &AccessToken) -> ApiFuture<'_, ()>;

    /// Fetch one movie with its nested showtimes.
    ///
    /// # Errors
    ///
    /// Returns transport, decode, or server errors.
    fn movie(&self, id: &MovieId) -> ApiFuture<'_, Movie>;

    /// Fetch the seat map for a showtime.
    ///
    /// # Errors
    ///
    /// Returns transport, decode, or server errors.
    fn seats(&self, showtime: &ShowtimeId) -> ApiFuture<'_, Vec<Seat>>;

    /// Submit a completed booking.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the backend reports
    /// `success: false`, or transport/server errors.
    fn create_booking(&self, request: &BookingRequest) -> ApiFuture<'_, ()>;

    /// Fetch the public theater listing.
    ///
    /// # Errors
    ///
    /// Returns transport, decode, or server errors.
    fn theaters(&self) -> ApiFuture<'_, Vec<Theater>>;

    /// Fetch the public promotion listing.
    ///
    /// # Errors
    ///
    /// Returns transport, decode, or server errors.
    fn promotions(&self) -> ApiFuture<'_, Vec<Promotion>>;

    /// Fetch every user account (admin dashboard).
    ///
    /// # Errors
    ///
    /// Returns transport, decode, or server errors.
    fn all_users(&self) -> ApiFuture<'_, Vec<UserRecord>>;

    /// Fetch every theater (admin dashboard).
    ///
    /// # Errors
    ///
    /// Returns transport, decode, or server errors.
    fn all_theaters(&self) -> ApiFuture<'_, Vec<TheaterRecord>>;

    /// Fetch every movie (admin dashboard).
    ///
    /// # Errors
    ///
    /// Returns transport, decode, or server errors.
    fn all_movies(&self) -> ApiFuture<'_, Vec<MovieRecord>>;
}
