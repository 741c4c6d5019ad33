//! Seat loading and booking, driven through the same `SeatEngine` the
//! browser client uses.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use booking::error::BOOKING_FALLBACK;
use booking::{ApiClient, BookingOutcome, BookingReceipt, Id, Identity, SeatClick, SeatEngine, Transport};

use crate::CliError;

/// Fetch the seat map for `show_id`.
///
/// # Errors
///
/// Returns the user-facing fetch error when the seats cannot be loaded.
pub async fn load_seats<T: Transport>(
    api: &ApiClient<T>,
    identity: Option<&Identity>,
    show_id: Id,
) -> Result<SeatEngine, CliError> {
    let mut engine = SeatEngine::new();
    let fetch = engine.choose_show(show_id);
    let result = api.seats(identity, &fetch.show_id).await;
    engine.apply_seats(&fetch, result);
    if let Some(message) = engine.error() {
        return Err(CliError::Rejected(message.to_owned()));
    }
    Ok(engine)
}

/// Seat id for `raw`, matched against ids first, then labels like `B4`.
pub fn resolve_seat(engine: &SeatEngine, raw: &str) -> Option<Id> {
    let wanted: Id = raw.parse().ok()?;
    engine
        .seats()
        .iter()
        .find(|seat| seat.id == wanted)
        .or_else(|| engine.seats().iter().find(|seat| seat.label().eq_ignore_ascii_case(raw.trim())))
        .map(|seat| seat.id.clone())
}

/// Select `seat` in a freshly loaded map and submit one booking attempt.
///
/// Returns the engine after reconciliation, so callers can print the
/// updated map.
///
/// # Errors
///
/// Returns an error when the seat is unknown or already taken, or when the
/// server rejects the booking.
pub async fn book_seat<T: Transport>(
    api: &ApiClient<T>,
    identity: Option<&Identity>,
    show_id: Id,
    seat: &str,
) -> Result<(SeatEngine, BookingReceipt), CliError> {
    let mut engine = load_seats(api, identity, show_id.clone()).await?;
    let seat_id = resolve_seat(&engine, seat).ok_or_else(|| CliError::UnknownSeat {
        show: show_id.to_string(),
        seat: seat.to_owned(),
    })?;
    if engine.click(&seat_id) != SeatClick::Selected {
        return Err(CliError::SeatTaken(seat.to_owned()));
    }

    let booker = identity.map(|identity| identity.id.clone());
    let pending = engine
        .begin_booking(booker.as_ref())
        .ok_or_else(|| CliError::Rejected(BOOKING_FALLBACK.to_owned()))?;
    let result = api.book(identity, &pending.request).await;
    match engine.finish_booking(&pending, result) {
        BookingOutcome::Booked(receipt) => Ok((engine, receipt)),
        BookingOutcome::Rejected(message) => Err(CliError::Rejected(message)),
        BookingOutcome::Stale => Err(CliError::Rejected(BOOKING_FALLBACK.to_owned())),
    }
}
