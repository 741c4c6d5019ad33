//! # booking
//!
//! Target-independent core of the movie booking client: wire types, request
//! building, the `Transport` seam and `ApiClient`, the persisted session, the
//! movie/show catalog and the seat selection engine.
//!
//! Nothing in this crate touches the network or the browser directly. The
//! `client` crate plugs in a gloo-net transport and `localStorage`; the `cli`
//! crate plugs in reqwest and a JSON file.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod seats;
pub mod session;
pub mod types;

pub use auth::{AuthForm, AuthMode, AuthSubmission};
pub use catalog::{Catalog, ShowsFetch};
pub use client::{ApiClient, ApiResponse, Transport};
pub use config::ApiConfig;
pub use error::{ApiError, StorageError};
pub use seats::{
    BookingNotice, BookingOutcome, PendingBooking, SeatAppearance, SeatClass, SeatClick, SeatEngine, SeatFetch,
    SeatPhase,
};
pub use session::{IdentityStorage, MemoryStorage, SESSION_STORAGE_KEY, SessionStore};
pub use types::{
    BookingReceipt, BookingRequest, Id, Identity, LoginRequest, Movie, RegisterRequest, Seat, SeatStatus, Show,
};
