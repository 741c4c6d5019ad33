//! Wire types shared by every consumer of the booking API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (`theatre_name`, `user_id`, ...) so
//! serde stays declarative. Identifiers are kept as opaque scalars because the
//! backend is free to use serial integers or UUID strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque remote identifier, kept in whatever scalar form the server used.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl FromStr for Id {
    type Err = std::convert::Infallible;

    /// Integers parse as `Id::Int`; anything else is kept as text.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Ok(trimmed
            .parse::<i64>()
            .map_or_else(|_| Self::Text(trimmed.to_owned()), Self::Int))
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// The authenticated user's session record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Id,
    pub name: String,
    /// Bearer credential issued by `/auth/login` or `/auth/register`.
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A scheduled screening of a movie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: Id,
    pub theatre_name: String,
    /// ISO 8601 start timestamp as sent by the server.
    pub start_time: String,
    #[serde(default)]
    pub movie_id: Option<Id>,
}

impl Show {
    /// Render the start time as `YYYY-MM-DD HH:MM`.
    ///
    /// Strings that are not ISO 8601 shaped are returned unchanged.
    pub fn start_label(&self) -> String {
        let raw = self.start_time.as_str();
        let Some((date, time)) = raw.split_once(['T', ' ']) else {
            return raw.to_owned();
        };
        let date_ok = date.len() == 10 && date.as_bytes()[4] == b'-' && date.as_bytes()[7] == b'-';
        match time.get(..5) {
            Some(hhmm) if date_ok && hhmm.as_bytes()[2] == b':' => format!("{date} {hhmm}"),
            _ => raw.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Booked,
}

/// One seat of a show's seat map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: Id,
    /// Row label (e.g. `"A"`); numeric rows are normalized to text.
    #[serde(deserialize_with = "deserialize_label")]
    pub row: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub number: i64,
    pub status: SeatStatus,
    /// Identity that holds the seat, when booked.
    #[serde(default)]
    pub user_id: Option<Id>,
}

impl Seat {
    pub fn is_booked(&self) -> bool {
        self.status == SeatStatus::Booked
    }

    /// Display label such as `A7`.
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.number)
    }
}

/// A single user-initiated booking attempt.
///
/// Only `show_id` and `seat_id` are serialized into the request body. The
/// idempotency key is sent as a request header and is unique per attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub show_id: Id,
    pub seat_id: Id,
    #[serde(skip)]
    pub idempotency_key: String,
}

impl BookingRequest {
    /// Build a new attempt with a freshly generated idempotency key.
    pub fn new(show_id: Id, seat_id: Id) -> Self {
        Self {
            show_id,
            seat_id,
            idempotency_key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// The booking record returned by `POST /bookings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub id: Id,
    #[serde(default)]
    pub show_id: Option<Id>,
    #[serde(default)]
    pub seat_id: Option<Id>,
}

/// Envelope of a successful `POST /bookings` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct BookingEnvelope {
    pub booking: BookingReceipt,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer, got {text:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
