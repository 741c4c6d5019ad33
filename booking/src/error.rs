//! Error types for API calls and identity persistence.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Every failure is turned into user-visible text with
//! [`ApiError::user_message`] and the UI returns to an interactive state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback shown when the movie list cannot be loaded.
pub const MOVIES_FALLBACK: &str = "Could not load movies.";
/// Fallback shown when a movie's showtimes cannot be loaded.
pub const SHOWS_FALLBACK: &str = "Failed to fetch shows";
/// Fallback shown when a show's seat map cannot be loaded.
pub const SEATS_FALLBACK: &str = "Failed to fetch seats";
/// Fallback shown when a booking attempt fails without a server message.
pub const BOOKING_FALLBACK: &str = "Booking failed";
/// Fallback shown when login or registration fails without a server message.
pub const AUTH_FALLBACK: &str = "An error occurred";

/// Failure of a single request against the booking API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// A success response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// The `message` field of the server's error payload, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text to show the user: the server's message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    /// Build a `Status` error from a raw response body.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: extract_message(body) }
    }
}

/// Pull a non-blank string `message` out of a JSON error payload.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    let message = value.get("message")?.as_str()?.trim();
    if message.is_empty() {
        return None;
    }
    Some(message.to_owned())
}

/// Failure reading or writing durable client storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage unavailable: {0}")]
pub struct StorageError(pub String);
