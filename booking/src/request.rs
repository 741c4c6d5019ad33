//! Request building for every booking API endpoint.
//!
//! DESIGN
//! ======
//! Credentials are attached by an explicit call to [`authorize`] at each call
//! site instead of a global interceptor, so a request carries exactly the
//! identity the caller handed it.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use crate::config::ApiConfig;
use crate::types::{BookingRequest, Id, Identity, LoginRequest, RegisterRequest};

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully built request, ready for a [`crate::Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(url: String) -> Self {
        Self { method: HttpMethod::Get, url, headers: Vec::new(), body: None }
    }

    pub fn post(url: String, body: serde_json::Value) -> Self {
        Self { method: HttpMethod::Post, url, headers: Vec::new(), body: Some(body) }
    }

    /// Append a header, replacing any existing header of the same name.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Attach `identity`'s token as a bearer credential, if there is one.
pub fn authorize(request: ApiRequest, identity: Option<&Identity>) -> ApiRequest {
    match identity {
        Some(identity) if !identity.token.is_empty() => {
            let bearer = format!("Bearer {}", identity.token);
            request.with_header(AUTHORIZATION_HEADER, &bearer)
        }
        _ => request,
    }
}

pub fn login_path() -> &'static str {
    "/auth/login"
}

pub fn register_path() -> &'static str {
    "/auth/register"
}

pub fn movies_path() -> &'static str {
    "/movies"
}

pub fn shows_path(movie_id: &Id) -> String {
    format!("/movies/{movie_id}/shows")
}

pub fn seats_path(show_id: &Id) -> String {
    format!("/shows/{show_id}/seats")
}

pub fn bookings_path() -> &'static str {
    "/bookings"
}

pub fn login_request(config: &ApiConfig, login: &LoginRequest) -> Result<ApiRequest, serde_json::Error> {
    Ok(ApiRequest::post(config.endpoint(login_path()), serde_json::to_value(login)?))
}

pub fn register_request(config: &ApiConfig, register: &RegisterRequest) -> Result<ApiRequest, serde_json::Error> {
    Ok(ApiRequest::post(config.endpoint(register_path()), serde_json::to_value(register)?))
}

pub fn movies_request(config: &ApiConfig, identity: Option<&Identity>) -> ApiRequest {
    authorize(ApiRequest::get(config.endpoint(movies_path())), identity)
}

pub fn shows_request(config: &ApiConfig, identity: Option<&Identity>, movie_id: &Id) -> ApiRequest {
    authorize(ApiRequest::get(config.endpoint(&shows_path(movie_id))), identity)
}

pub fn seats_request(config: &ApiConfig, identity: Option<&Identity>, show_id: &Id) -> ApiRequest {
    authorize(ApiRequest::get(config.endpoint(&seats_path(show_id))), identity)
}

/// `POST /bookings` with `{show_id, seat_id}` and the attempt's idempotency key
/// as a header.
pub fn booking_request(
    config: &ApiConfig,
    identity: Option<&Identity>,
    booking: &BookingRequest,
) -> Result<ApiRequest, serde_json::Error> {
    let request = ApiRequest::post(config.endpoint(bookings_path()), serde_json::to_value(booking)?)
        .with_header(IDEMPOTENCY_HEADER, &booking.idempotency_key);
    Ok(authorize(request, identity))
}
