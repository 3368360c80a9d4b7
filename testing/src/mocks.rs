//! Mock implementations for tests.
//!
//! [`MockCinemaApi`] stands in for the HTTP client: each endpoint
//! returns whatever response was scripted for it, and every call is
//! recorded so tests can assert on exactly what a reducer requested.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use marquee_client::{
    AccessToken, ApiError, ApiFuture, AuthSession, BookingRequest, CinemaApi, Movie, MovieId,
    MovieRecord, Promotion, Seat, ShowtimeId, SignUpRequest, Theater, TheaterRecord, UserProfile,
    UserRecord,
};
use marquee_core::environment::Clock;

/// Fixed clock for deterministic tests
///
/// Always returns the same time, making tests reproducible.
///
/// # Example
///
/// ```
/// use marquee_testing::mocks::FixedClock;
/// use marquee_core::environment::Clock;
/// use chrono::Utc;
///
/// let clock = FixedClock::new(Utc::now());
/// let time1 = clock.now();
/// let time2 = clock.now();
/// assert_eq!(time1, time2); // Always the same!
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
///
/// # Panics
///
/// This function will panic if the hardcoded timestamp fails to parse,
/// which should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}

/// One call observed by [`MockCinemaApi`], in arrival order.
///
/// Credentials are not captured: sign-in and sign-up record the email
/// only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// `verify_token` was called.
    VerifyToken,
    /// `sign_in` was called with this email.
    SignIn {
        /// Email the caller tried to sign in with.
        email: String,
    },
    /// `sign_up` was called with this email.
    SignUp {
        /// Email the caller tried to register.
        email: String,
    },
    /// `sign_out` was called.
    SignOut,
    /// `movie` was called for this id.
    Movie(MovieId),
    /// `seats` was called for this showtime.
    Seats(ShowtimeId),
    /// `create_booking` was called with this body.
    CreateBooking(BookingRequest),
    /// `theaters` was called.
    Theaters,
    /// `promotions` was called.
    Promotions,
    /// `all_users` was called.
    AllUsers,
    /// `all_theaters` was called.
    AllTheaters,
    /// `all_movies` was called.
    AllMovies,
}

/// Scripted responses plus the call log, behind one mutex.
#[derive(Debug, Default)]
struct MockState {
    movies: HashMap<MovieId, Result<Movie, ApiError>>,
    seat_maps: HashMap<ShowtimeId, Result<Vec<Seat>, ApiError>>,
    verify: Option<Result<UserProfile, ApiError>>,
    sign_in: Option<Result<AuthSession, ApiError>>,
    sign_up: Option<Result<Option<String>, ApiError>>,
    sign_out: Option<Result<(), ApiError>>,
    booking: Option<Result<(), ApiError>>,
    theaters: Option<Result<Vec<Theater>, ApiError>>,
    promotions: Option<Result<Vec<Promotion>, ApiError>>,
    all_users: Option<Result<Vec<UserRecord>, ApiError>>,
    all_theaters: Option<Result<Vec<TheaterRecord>, ApiError>>,
    all_movies: Option<Result<Vec<MovieRecord>, ApiError>>,
    latency: Option<Duration>,
    calls: Vec<RecordedCall>,
}

/// Scriptable [`CinemaApi`] implementation.
///
/// Endpoints answer with whatever was scripted for them; calling an
/// unscripted endpoint fails with [`ApiError::RequestFailed`] so a test
/// that forgot a script fails loudly instead of hanging. Scripted
/// responses are not consumed: the same script answers repeated calls
/// until replaced.
///
/// # Example
///
/// ```ignore
/// let api = MockCinemaApi::new();
/// api.script_movie(sample_movie());
/// api.script_seats(ShowtimeId::new("s1"), sample_seats());
///
/// let env = BookingEnvironment::new(Arc::new(api.clone()));
/// // ... drive the store ...
///
/// assert_eq!(api.calls()[0], RecordedCall::Movie(MovieId::new("m1")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCinemaApi {
    inner: Arc<Mutex<MockState>>,
}

impl MockCinemaApi {
    /// Create a mock with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap()
    }

    /// Script a successful `movie` response, keyed by the movie's id.
    pub fn script_movie(&self, movie: Movie) {
        self.lock().movies.insert(movie.id.clone(), Ok(movie));
    }

    /// Script a failing `movie` response for the given id.
    pub fn script_movie_error(&self, id: MovieId, error: ApiError) {
        self.lock().movies.insert(id, Err(error));
    }

    /// Script a successful `seats` response for the given showtime.
    pub fn script_seats(&self, showtime: ShowtimeId, seats: Vec<Seat>) {
        self.lock().seat_maps.insert(showtime, Ok(seats));
    }

    /// Script a failing `seats` response for the given showtime.
    pub fn script_seats_error(&self, showtime: ShowtimeId, error: ApiError) {
        self.lock().seat_maps.insert(showtime, Err(error));
    }

    /// Script the `verify_token` response.
    pub fn script_verify(&self, result: Result<UserProfile, ApiError>) {
        self.lock().verify = Some(result);
    }

    /// Script the `sign_in` response.
    pub fn script_sign_in(&self, result: Result<AuthSession, ApiError>) {
        self.lock().sign_in = Some(result);
    }

    /// Script the `sign_up` response.
    pub fn script_sign_up(&self, result: Result<Option<String>, ApiError>) {
        self.lock().sign_up = Some(result);
    }

    /// Script the `sign_out` response.
    pub fn script_sign_out(&self, result: Result<(), ApiError>) {
        self.lock().sign_out = Some(result);
    }

    /// Script the `create_booking` response.
    pub fn script_booking(&self, result: Result<(), ApiError>) {
        self.lock().booking = Some(result);
    }

    /// Script the public `theaters` listing.
    pub fn script_theaters(&self, result: Result<Vec<Theater>, ApiError>) {
        self.lock().theaters = Some(result);
    }

    /// Script the public `promotions` listing.
    pub fn script_promotions(&self, result: Result<Vec<Promotion>, ApiError>) {
        self.lock().promotions = Some(result);
    }

    /// Script the admin `all_users` listing.
    pub fn script_all_users(&self, result: Result<Vec<UserRecord>, ApiError>) {
        self.lock().all_users = Some(result);
    }

    /// Script the admin `all_theaters` listing.
    pub fn script_all_theaters(&self, result: Result<Vec<TheaterRecord>, ApiError>) {
        self.lock().all_theaters = Some(result);
    }

    /// Script the admin `all_movies` listing.
    pub fn script_all_movies(&self, result: Result<Vec<MovieRecord>, ApiError>) {
        self.lock().all_movies = Some(result);
    }

    /// Delay every response by the given duration.
    ///
    /// Useful with `#[tokio::test(start_paused = true)]` to test
    /// cancellation races deterministically.
    pub fn set_latency(&self, latency: Duration) {
        self.lock().latency = Some(latency);
    }

    /// All calls observed so far, in arrival order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Forget the calls observed so far. Scripts are kept.
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }
}

fn unscripted(endpoint: &str) -> ApiError {
    ApiError::RequestFailed(format!("no scripted response for {endpoint}"))
}

/// Wrap an already-decided result in a future, applying the scripted
/// latency. The mutex guard is released before this runs, so the
/// returned future never holds a lock across an await.
fn deliver<T>(latency: Option<Duration>, result: Result<T, ApiError>) -> ApiFuture<'static, T>
where
    T: Send + 'static,
{
    Box::pin(async move {
        if let Some(delay) = latency {
            tokio::time::sleep(delay).await;
        }
        result
    })
}

impl CinemaApi for MockCinemaApi {
    fn verify_token(&self, _token: &AccessToken) -> ApiFuture<'_, UserProfile> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::VerifyToken);
        let result = state
            .verify
            .clone()
            .unwrap_or_else(|| Err(unscripted("verify_token")));
        deliver(state.latency, result)
    }

    fn sign_in(&self, email: &str, _password: &str) -> ApiFuture<'_, AuthSession> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::SignIn {
            email: email.to_string(),
        });
        let result = state
            .sign_in
            .clone()
            .unwrap_or_else(|| Err(unscripted("sign_in")));
        deliver(state.latency, result)
    }

    fn sign_up(&self, request: &SignUpRequest) -> ApiFuture<'_, Option<String>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::SignUp {
            email: request.email.clone(),
        });
        let result = state
            .sign_up
            .clone()
            .unwrap_or_else(|| Err(unscripted("sign_up")));
        deliver(state.latency, result)
    }

    fn sign_out(&self, _token: &AccessToken) -> ApiFuture<'_, ()> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::SignOut);
        let result = state
            .sign_out
            .clone()
            .unwrap_or_else(|| Err(unscripted("sign_out")));
        deliver(state.latency, result)
    }

    fn movie(&self, id: &MovieId) -> ApiFuture<'_, Movie> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Movie(id.clone()));
        let result = state
            .movies
            .get(id)
            .cloned()
            .unwrap_or_else(|| Err(unscripted("movie")));
        deliver(state.latency, result)
    }

    fn seats(&self, showtime: &ShowtimeId) -> ApiFuture<'_, Vec<Seat>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Seats(showtime.clone()));
        let result = state
            .seat_maps
            .get(showtime)
            .cloned()
            .unwrap_or_else(|| Err(unscripted("seats")));
        deliver(state.latency, result)
    }

    fn create_booking(&self, request: &BookingRequest) -> ApiFuture<'_, ()> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::CreateBooking(request.clone()));
        let result = state
            .booking
            .clone()
            .unwrap_or_else(|| Err(unscripted("create_booking")));
        deliver(state.latency, result)
    }

    fn theaters(&self) -> ApiFuture<'_, Vec<Theater>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Theaters);
        let result = state
            .theaters
            .clone()
            .unwrap_or_else(|| Err(unscripted("theaters")));
        deliver(state.latency, result)
    }

    fn promotions(&self) -> ApiFuture<'_, Vec<Promotion>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Promotions);
        let result = state
            .promotions
            .clone()
            .unwrap_or_else(|| Err(unscripted("promotions")));
        deliver(state.latency, result)
    }

    fn all_users(&self) -> ApiFuture<'_, Vec<UserRecord>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::AllUsers);
        let result = state
            .all_users
            .clone()
            .unwrap_or_else(|| Err(unscripted("all_users")));
        deliver(state.latency, result)
    }

    fn all_theaters(&self) -> ApiFuture<'_, Vec<TheaterRecord>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::AllTheaters);
        let result = state
            .all_theaters
            .clone()
            .unwrap_or_else(|| Err(unscripted("all_theaters")));
        deliver(state.latency, result)
    }

    fn all_movies(&self) -> ApiFuture<'_, Vec<MovieRecord>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::AllMovies);
        let result = state
            .all_movies
            .clone()
            .unwrap_or_else(|| Err(unscripted("all_movies")));
        deliver(state.latency, result)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)] // Test code can unwrap/panic

    use super::*;

    #[test]
    fn test_fixed_clock_returns_constant_time() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[tokio::test]
    async fn test_mock_records_calls_in_order() {
        let api = MockCinemaApi::new();
        api.script_theaters(Ok(vec![]));
        api.script_promotions(Ok(vec![]));

        let _ = api.theaters().await;
        let _ = api.promotions().await;
        let _ = api.theaters().await;

        assert_eq!(
            api.calls(),
            vec![
                RecordedCall::Theaters,
                RecordedCall::Promotions,
                RecordedCall::Theaters,
            ]
        );
    }

    #[tokio::test]
    async fn test_unscripted_endpoint_fails_loudly() {
        let api = MockCinemaApi::new();

        let result = api.all_users().await;

        match result {
            Err(ApiError::RequestFailed(message)) => {
                assert!(message.contains("no scripted response"));
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_scripts_answer_repeated_calls() {
        let api = MockCinemaApi::new();
        api.script_sign_out(Ok(()));

        let token = AccessToken::new("abc");
        assert!(api.sign_out(&token).await.is_ok());
        assert!(api.sign_out(&token).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_delays_responses() {
        let api = MockCinemaApi::new();
        api.script_theaters(Ok(vec![]));
        api.set_latency(Duration::from_secs(5));

        let mut pending = api.theaters();
        let early = tokio::time::timeout(Duration::from_secs(1), &mut pending).await;
        assert!(early.is_err(), "response should still be in flight");

        let theaters = pending.await.unwrap();
        assert!(theaters.is_empty());
    }
}
