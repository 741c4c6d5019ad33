//! Seat selection and booking state machine for one showtime at a time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Callers drive the engine around their own async I/O:
//!
//! 1. `choose_show` returns a [`SeatFetch`] tag; the caller fetches seats and
//!    hands the result back to `apply_seats` with that tag.
//! 2. `click` toggles the single local selection.
//! 3. `begin_booking` returns a [`PendingBooking`] carrying a fresh
//!    idempotency key; the caller posts it and hands the result to
//!    `finish_booking`.
//!
//! Results whose tag is no longer current are dropped, so a late response for
//! a show the user already left never renders.
//!
//! INVARIANTS
//! ==========
//! - At most one seat is selected, and it is always an available seat of the
//!   last fetched collection.
//! - A failed booking leaves seats and selection untouched.
//! - A successful booking mutates exactly the booked seat.

#[cfg(test)]
#[path = "seats_test.rs"]
mod seats_test;

use crate::error::{ApiError, BOOKING_FALLBACK, SEATS_FALLBACK};
use crate::types::{BookingReceipt, BookingRequest, Id, Seat, SeatStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeatPhase {
    /// No show chosen.
    #[default]
    Idle,
    /// Seat fetch in flight.
    Loading,
    /// Seats loaded; zero or one selected.
    Ready,
    /// Booking request in flight.
    Submitting,
    /// Seat fetch failed; terminal until a show is chosen again.
    Failed,
}

/// Tag identifying one seat fetch (or the booking made from it).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatFetch {
    pub show_id: Id,
    pub generation: u64,
}

/// One in-flight booking attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingBooking {
    pub fetch: SeatFetch,
    pub request: BookingRequest,
    /// Identity the seat is booked for, recorded as its occupant on success.
    pub booker: Option<Id>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatClick {
    /// Booked, unknown, or not clickable in the current phase.
    Ignored,
    Selected,
    Deselected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked(BookingReceipt),
    /// The server or network rejected the attempt; carries the user message.
    Rejected(String),
    /// The user left the show before the response arrived.
    Stale,
}

/// Result of the last booking attempt, shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingNotice {
    Success { booking_id: Id },
    Error(String),
}

impl BookingNotice {
    pub fn message(&self) -> String {
        match self {
            Self::Success { booking_id } => format!("Booking successful! Your booking ID is: {booking_id}"),
            Self::Error(message) => format!("Error: {message}"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatClass {
    Available,
    BookedByMe,
    BookedByOther,
}

/// How a seat renders: its occupancy class plus the independent selection flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeatAppearance {
    pub class: SeatClass,
    pub selected: bool,
}

impl SeatAppearance {
    /// CSS classes, e.g. `"seat available selected"`.
    pub fn css_class(self) -> String {
        let base = match self.class {
            SeatClass::Available => "seat available",
            SeatClass::BookedByMe => "seat mine",
            SeatClass::BookedByOther => "seat booked",
        };
        if self.selected { format!("{base} selected") } else { base.to_owned() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeatEngine {
    phase: SeatPhase,
    show_id: Option<Id>,
    generation: u64,
    seats: Vec<Seat>,
    selection: Option<Id>,
    error: Option<String>,
    notice: Option<BookingNotice>,
}

impl SeatEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SeatPhase {
        self.phase
    }

    pub fn show_id(&self) -> Option<&Id> {
        self.show_id.as_ref()
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn selection(&self) -> Option<&Id> {
        self.selection.as_ref()
    }

    pub fn selected_seat(&self) -> Option<&Seat> {
        let selected = self.selection.as_ref()?;
        self.seats.iter().find(|seat| &seat.id == selected)
    }

    /// Fetch error for the current show, when in [`SeatPhase::Failed`].
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&BookingNotice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Switch to `show_id`, dropping everything from the previous show.
    pub fn choose_show(&mut self, show_id: Id) -> SeatFetch {
        self.generation += 1;
        self.phase = SeatPhase::Loading;
        self.show_id = Some(show_id.clone());
        self.seats.clear();
        self.selection = None;
        self.error = None;
        self.notice = None;
        tracing::debug!(show = %show_id, generation = self.generation, "loading seats");
        SeatFetch { show_id, generation: self.generation }
    }

    /// Leave the current show. In-flight results become stale.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self { generation, ..Self::default() };
    }

    fn is_current(&self, fetch: &SeatFetch) -> bool {
        fetch.generation == self.generation && self.show_id.as_ref() == Some(&fetch.show_id)
    }

    /// Apply a seat fetch result. Returns `false` when it was discarded.
    pub fn apply_seats(&mut self, fetch: &SeatFetch, result: Result<Vec<Seat>, ApiError>) -> bool {
        if !self.is_current(fetch) || self.phase != SeatPhase::Loading {
            tracing::debug!(show = %fetch.show_id, generation = fetch.generation, "discarding stale seat list");
            return false;
        }
        match result {
            Ok(seats) => {
                tracing::debug!(show = %fetch.show_id, count = seats.len(), "seats loaded");
                self.seats = seats;
                self.phase = SeatPhase::Ready;
            }
            Err(e) => {
                tracing::warn!(show = %fetch.show_id, error = %e, "seat fetch failed");
                self.error = Some(e.user_message(SEATS_FALLBACK));
                self.phase = SeatPhase::Failed;
            }
        }
        true
    }

    /// Toggle the selection on `seat_id`. Booked seats never become selected.
    pub fn click(&mut self, seat_id: &Id) -> SeatClick {
        if self.phase != SeatPhase::Ready {
            return SeatClick::Ignored;
        }
        let Some(seat) = self.seats.iter().find(|seat| &seat.id == seat_id) else {
            return SeatClick::Ignored;
        };
        if seat.is_booked() {
            return SeatClick::Ignored;
        }
        if self.selection.as_ref() == Some(seat_id) {
            self.selection = None;
            SeatClick::Deselected
        } else {
            self.selection = Some(seat_id.clone());
            SeatClick::Selected
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == SeatPhase::Ready && self.selection.is_some()
    }

    /// Start a booking for the selected seat with a fresh idempotency key.
    ///
    /// Returns `None` unless [`Self::can_submit`] holds.
    pub fn begin_booking(&mut self, booker: Option<&Id>) -> Option<PendingBooking> {
        if !self.can_submit() {
            return None;
        }
        let show_id = self.show_id.clone()?;
        let seat_id = self.selection.clone()?;
        let pending = PendingBooking {
            fetch: SeatFetch { show_id: show_id.clone(), generation: self.generation },
            request: BookingRequest::new(show_id, seat_id),
            booker: booker.cloned(),
        };
        self.phase = SeatPhase::Submitting;
        self.notice = None;
        tracing::debug!(
            show = %pending.request.show_id,
            seat = %pending.request.seat_id,
            key = %pending.request.idempotency_key,
            "submitting booking"
        );
        Some(pending)
    }

    /// Reconcile the booking response into local state.
    pub fn finish_booking(
        &mut self,
        pending: &PendingBooking,
        result: Result<BookingReceipt, ApiError>,
    ) -> BookingOutcome {
        if !self.is_current(&pending.fetch) || self.phase != SeatPhase::Submitting {
            tracing::warn!(seat = %pending.request.seat_id, "booking completed after leaving the show");
            return BookingOutcome::Stale;
        }
        self.phase = SeatPhase::Ready;
        match result {
            Ok(receipt) => {
                if let Some(seat) = self.seats.iter_mut().find(|seat| seat.id == pending.request.seat_id) {
                    seat.status = SeatStatus::Booked;
                    seat.user_id.clone_from(&pending.booker);
                }
                self.selection = None;
                self.notice = Some(BookingNotice::Success { booking_id: receipt.id.clone() });
                tracing::info!(booking = %receipt.id, seat = %pending.request.seat_id, "seat booked");
                BookingOutcome::Booked(receipt)
            }
            Err(e) => {
                let message = e.user_message(BOOKING_FALLBACK);
                tracing::warn!(seat = %pending.request.seat_id, error = %e, "booking rejected");
                self.notice = Some(BookingNotice::Error(message.clone()));
                BookingOutcome::Rejected(message)
            }
        }
    }

    /// Rendering class for `seat` as seen by identity `me`.
    pub fn appearance(&self, seat: &Seat, me: Option<&Id>) -> SeatAppearance {
        let class = match seat.status {
            SeatStatus::Available => SeatClass::Available,
            SeatStatus::Booked if me.is_some() && seat.user_id.as_ref() == me => SeatClass::BookedByMe,
            SeatStatus::Booked => SeatClass::BookedByOther,
        };
        SeatAppearance { class, selected: self.selection.as_ref() == Some(&seat.id) }
    }
}
