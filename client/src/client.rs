//! HTTP implementation of the cinema API

use crate::api::{ApiFuture, CinemaApi};
use crate::auth::{
    AccessToken, AuthSession, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
    UserProfile, VerifyResponse,
};
use crate::config::Config;
use crate::error::ApiError;
use crate::types::{
    BookingRequest, Envelope, Movie, MovieId, MovieRecord, Promotion, Seat, ShowtimeId, Theater,
    TheaterRecord, UserRecord,
};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error body shape the backend uses on non-2xx responses
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Lenient body shape for endpoints where only success/failure matters
#[derive(Debug, serde::Deserialize)]
struct StatusBody {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the cinema backend
#[derive(Clone)]
pub struct CinemaClient {
    client: Client,
    base_url: String,
}

impl CinemaClient {
    /// Create a client against an explicit base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from loaded configuration, applying its request timeout
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` if the underlying HTTP client
    /// cannot be constructed (e.g. TLS backend initialization failure).
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&AccessToken>) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token.as_str());
        }
        builder
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&AccessToken>,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let response = self
            .request(Method::GET, path, bearer)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::decode_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&AccessToken>,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let response = self
            .request(Method::POST, path, bearer)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::decode_json(response).await
    }

    /// POST where only the outcome matters. A 2xx body is still read
    /// leniently so a `success: false` veto is not swallowed.
    async fn post_checked<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&AccessToken>,
    ) -> Result<(), ApiError> {
        tracing::debug!(path, "POST");
        let response = self
            .request(Method::POST, path, bearer)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            _ if status.is_success() => {
                let text = response.text().await.unwrap_or_default();
                if let Ok(outcome) = serde_json::from_str::<StatusBody>(&text) {
                    if outcome.success == Some(false) {
                        return Err(ApiError::Rejected(
                            outcome
                                .message
                                .unwrap_or_else(|| "request refused".to_string()),
                        ));
                    }
                }
                Ok(())
            }
            _ => Err(Self::error_from_body(status, response).await),
        }
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            _ if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::ResponseParseFailed(e.to_string())),
            _ => Err(Self::error_from_body(status, response).await),
        }
    }

    /// Pull the backend's `message` field out of an error body, falling
    /// back to the raw text when the body is not the usual JSON shape.
    async fn error_from_body(status: StatusCode, response: Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);

        ApiError::Server {
            status: status.as_u16(),
            message,
        }
    }
}

impl CinemaApi for CinemaClient {
    fn verify_token(&self, token: &AccessToken) -> ApiFuture<'_, UserProfile> {
        let token = token.clone();
        Box::pin(async move {
            let response: VerifyResponse = self
                .get_json("/api/auth/verify-token", Some(&token))
                .await?;

            if !response.success {
                return Err(ApiError::Rejected("token no longer valid".to_string()));
            }
            response.user.ok_or_else(|| {
                ApiError::ResponseParseFailed("verify succeeded without a user".to_string())
            })
        })
    }

    fn sign_in(&self, email: &str, password: &str) -> ApiFuture<'_, AuthSession> {
        let body = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        Box::pin(async move {
            let response: SignInResponse =
                self.post_json("/api/auth/sign-in", &body, None).await?;

            if !response.success {
                return Err(ApiError::Rejected(
                    response
                        .message
                        .unwrap_or_else(|| "sign-in refused".to_string()),
                ));
            }
            match (response.access_token, response.user) {
                (Some(token), Some(user)) => Ok(AuthSession { token, user }),
                _ => Err(ApiError::ResponseParseFailed(
                    "sign-in succeeded without access_token and user".to_string(),
                )),
            }
        })
    }

    fn sign_up(&self, request: &SignUpRequest) -> ApiFuture<'_, Option<String>> {
        let body = request.clone();
        Box::pin(async move {
            let response: SignUpResponse =
                self.post_json("/api/auth/sign-up", &body, None).await?;
            Ok(response.message)
        })
    }

    fn sign_out(&self, token: &AccessToken) -> ApiFuture<'_, ()> {
        let token = token.clone();
        Box::pin(async move {
            self.post_checked("/api/auth/sign-out", &serde_json::json!({}), Some(&token))
                .await
        })
    }

    fn movie(&self, id: &MovieId) -> ApiFuture<'_, Movie> {
        let path = format!("/api/movie/{id}");
        Box::pin(async move { self.get_json(&path, None).await })
    }

    fn seats(&self, showtime: &ShowtimeId) -> ApiFuture<'_, Vec<Seat>> {
        let path = format!("/api/seats/{showtime}");
        Box::pin(async move { self.get_json(&path, None).await })
    }

    fn create_booking(&self, request: &BookingRequest) -> ApiFuture<'_, ()> {
        let body = request.clone();
        Box::pin(async move { self.post_checked("/api/booking", &body, None).await })
    }

    fn theaters(&self) -> ApiFuture<'_, Vec<Theater>> {
        Box::pin(async move { self.get_json("/api/theaters", None).await })
    }

    fn promotions(&self) -> ApiFuture<'_, Vec<Promotion>> {
        Box::pin(async move { self.get_json("/api/promotions", None).await })
    }

    fn all_users(&self) -> ApiFuture<'_, Vec<UserRecord>> {
        Box::pin(async move {
            let envelope: Envelope<UserRecord> =
                self.get_json("/api/admin/get-all-users", None).await?;
            Ok(envelope.data)
        })
    }

    fn all_theaters(&self) -> ApiFuture<'_, Vec<TheaterRecord>> {
        Box::pin(async move {
            let envelope: Envelope<TheaterRecord> =
                self.get_json("/api/theater/get-all-theaters", None).await?;
            Ok(envelope.data)
        })
    }

    fn all_movies(&self) -> ApiFuture<'_, Vec<MovieRecord>> {
        Box::pin(async move {
            let envelope: Envelope<MovieRecord> =
                self.get_json("/api/movie/get-all-movies", None).await?;
            Ok(envelope.data)
        })
    }
}
