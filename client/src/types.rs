//! Wire types for the cinema backend API
//!
//! Field names and renames mirror the backend's JSON exactly: catalog
//! documents carry Mongo-style `_id` keys, the public theater and
//! promotion endpoints use plain `id`, and the booking body is
//! camelCase. Identifiers are server-owned opaque strings, so the id
//! newtypes wrap `String` rather than generating anything client-side.

use serde::{Deserialize, Serialize};

/// Unique identifier for a movie
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(String);

impl MovieId {
    /// Creates a `MovieId` from a server-issued identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a showtime
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowtimeId(String);

impl ShowtimeId {
    /// Creates a `ShowtimeId` from a server-issued identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShowtimeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a seat within a showtime
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(String);

impl SeatId {
    /// Creates a `SeatId` from a server-issued identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a theater
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TheaterId(String);

impl TheaterId {
    /// Creates a `TheaterId` from a server-issued identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TheaterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a promotion
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromotionId(String);

impl PromotionId {
    /// Creates a `PromotionId` from a server-issued identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PromotionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user account
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a `UserId` from a server-issued identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Catalog documents
// ============================================================================

/// A movie document as served by `GET /api/movie/{id}`
///
/// The booking wizard and the detail page hit the same endpoint, so this
/// carries the union of both views. `showtimes` defaults to empty because
/// the backend omits it for movies with no scheduled screenings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Server-issued identifier
    #[serde(rename = "_id")]
    pub id: MovieId,
    /// Display title
    pub title: String,
    /// Synopsis text
    pub description: String,
    /// Poster image URL
    pub poster: String,
    /// Release date as the backend formats it (e.g. `2025-01-01`)
    pub release_date: String,
    /// Director name, when known
    pub director: Option<String>,
    /// Cast member names, when known
    pub cast: Option<Vec<String>>,
    /// Running time in minutes, when known
    pub duration: Option<u32>,
    /// Genre labels, when known
    pub genre: Option<Vec<String>>,
    /// Aggregate rating out of 10, when known
    pub rating: Option<f64>,
    /// Embeddable trailer URL, when known
    pub trailer_url: Option<String>,
    /// Scheduled showtimes for this movie
    #[serde(default)]
    pub showtimes: Vec<Showtime>,
}

/// A scheduled screening of a movie
///
/// Date and time stay as backend-formatted strings (`2025-06-01`,
/// `18:00`); the client only displays them and never does date math.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showtime {
    /// Server-issued identifier
    pub id: ShowtimeId,
    /// Screening date
    pub date: String,
    /// Screening time
    pub time: String,
}

/// Authoritative seat status from the backend
///
/// `Booked` is server truth and must never be overwritten locally.
/// `Selected` only ever appears client-side while a booking is being
/// assembled, but the wire format reserves the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free to select
    Available,
    /// Sold or held by someone else
    Booked,
    /// In the current user's in-progress selection
    Selected,
}

/// Seat category, which determines pricing tiers server-side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    /// Regular seat
    Standard,
    /// Premium seat
    Vip,
    /// Double-width couple seat
    Couple,
}

/// A seat in the auditorium for one showtime
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Server-issued identifier
    pub id: SeatId,
    /// Display label (e.g. `A1`)
    pub name: String,
    /// Price in the backend's smallest currency unit
    pub price: u64,
    /// Current status
    pub status: SeatStatus,
    /// Seat category
    #[serde(rename = "type")]
    pub kind: SeatKind,
}

/// A theater as served by the public `GET /api/theaters` listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theater {
    /// Server-issued identifier
    pub id: TheaterId,
    /// Theater name
    pub name: String,
    /// Street address or district
    pub location: String,
    /// Total seat count
    pub capacity: u32,
}

/// A promotion as served by `GET /api/promotions`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    /// Server-issued identifier
    pub id: PromotionId,
    /// Redemption code
    pub code: String,
    /// Discount amount or percentage, as the backend defines it
    pub discount: u64,
    /// First valid date, backend-formatted
    pub start_date: String,
    /// Last valid date, backend-formatted
    pub end_date: String,
    /// Promotion category label
    #[serde(rename = "type")]
    pub kind: String,
    /// Eligibility condition text
    pub condition: String,
}

// ============================================================================
// Booking submission
// ============================================================================

/// Body for `POST /api/booking`
///
/// The backend expects camelCase keys here, unlike the snake_case it
/// serves elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Movie being booked
    pub movie_id: MovieId,
    /// Chosen showtime
    pub showtime_id: ShowtimeId,
    /// Seat identifiers in selection order
    pub seats: Vec<SeatId>,
}

// ============================================================================
// Admin collection records
// ============================================================================

/// Envelope wrapping the admin collection endpoints (`{ "data": [...] }`)
///
/// Only the `get-all-*` endpoints use this; the public listings return
/// bare arrays.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped collection
    pub data: Vec<T>,
}

/// A user account row from `GET /api/admin/get-all-users`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-issued identifier
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Full display name
    pub full_name: String,
    /// Account email
    pub email: String,
    /// Role label (e.g. `admin`, `customer`)
    pub role: String,
}

/// A theater row from `GET /api/theater/get-all-theaters`
///
/// Same fields as [`Theater`] but keyed by `_id`; the admin and public
/// endpoints disagree on the identifier key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheaterRecord {
    /// Server-issued identifier
    #[serde(rename = "_id")]
    pub id: TheaterId,
    /// Theater name
    pub name: String,
    /// Street address or district
    pub location: String,
    /// Total seat count
    pub capacity: u32,
}

/// A movie row from `GET /api/movie/get-all-movies`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Server-issued identifier
    #[serde(rename = "_id")]
    pub id: MovieId,
    /// Display title
    pub title: String,
    /// Genre labels
    pub genre: Vec<String>,
    /// Aggregate rating out of 10
    pub rating: f64,
}
