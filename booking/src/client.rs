//! Typed booking API client over a pluggable [`Transport`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client plugs in a gloo-net transport, the CLI a reqwest one.
//! Both own the request timeout; this module only builds requests and
//! decodes responses.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the payload's
//! `message`. Nothing is retried here.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::auth::AuthSubmission;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::request::{self, ApiRequest};
use crate::types::{
    BookingEnvelope, BookingReceipt, BookingRequest, Id, Identity, LoginRequest, Movie, RegisterRequest, Seat, Show,
};

/// Raw HTTP response handed back by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations enforce their own timeout and report its expiry as
/// [`ApiError::Timeout`].
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or the server's rejection.
    pub async fn login(&self, login: &LoginRequest) -> Result<Identity, ApiError> {
        let request = request::login_request(&self.config, login).map_err(encode_error)?;
        self.send_json(request).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or the server's rejection.
    pub async fn register(&self, register: &RegisterRequest) -> Result<Identity, ApiError> {
        let request = request::register_request(&self.config, register).map_err(encode_error)?;
        self.send_json(request).await
    }

    /// Dispatch a validated auth form submission to login or register.
    ///
    /// # Errors
    ///
    /// Same as [`Self::login`] / [`Self::register`].
    pub async fn authenticate(&self, submission: &AuthSubmission) -> Result<Identity, ApiError> {
        match submission {
            AuthSubmission::Login(login) => self.login(login).await,
            AuthSubmission::Register(register) => self.register(register).await,
        }
    }

    /// `GET /movies`.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or the server's rejection.
    pub async fn movies(&self, identity: Option<&Identity>) -> Result<Vec<Movie>, ApiError> {
        self.send_json(request::movies_request(&self.config, identity)).await
    }

    /// `GET /movies/{id}/shows`.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or the server's rejection.
    pub async fn shows(&self, identity: Option<&Identity>, movie_id: &Id) -> Result<Vec<Show>, ApiError> {
        self.send_json(request::shows_request(&self.config, identity, movie_id)).await
    }

    /// `GET /shows/{id}/seats`.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or the server's rejection.
    pub async fn seats(&self, identity: Option<&Identity>, show_id: &Id) -> Result<Vec<Seat>, ApiError> {
        self.send_json(request::seats_request(&self.config, identity, show_id)).await
    }

    /// `POST /bookings` for one booking attempt.
    ///
    /// The attempt's idempotency key is sent as-is, so re-sending the same
    /// `BookingRequest` is deduplicated by the server.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or the server's rejection (for example
    /// a seat that was booked by someone else).
    pub async fn book(&self, identity: Option<&Identity>, booking: &BookingRequest) -> Result<BookingReceipt, ApiError> {
        let request = request::booking_request(&self.config, identity, booking).map_err(encode_error)?;
        let envelope: BookingEnvelope = self.send_json(request).await?;
        Ok(envelope.booking)
    }

    async fn send_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let url = request.url.clone();
        let response = self.transport.send(request).await?;
        tracing::debug!(%url, status = response.status, "api response");
        decode_response(&response)
    }
}

/// Decode a success body into `R`, or turn a failure status into an error.
pub(crate) fn decode_response<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        return Err(ApiError::from_status(response.status, &response.body));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode_error(error: serde_json::Error) -> ApiError {
    ApiError::Encode(error.to_string())
}
