//! Seat grid and booking control for the selected showtime.
//!
//! DESIGN
//! ======
//! All selection and booking rules live in `booking::SeatEngine`; this
//! component only renders it and forwards clicks. The submit button is
//! disabled whenever the engine refuses submission, which covers the
//! in-flight state.

#[cfg(test)]
#[path = "seat_map_test.rs"]
mod seat_map_test;

use booking::{BookingNotice, SeatEngine, SeatPhase};
use leptos::prelude::*;

use crate::state::{actions, use_app};

fn book_button_label(engine: &SeatEngine) -> String {
    match (engine.phase(), engine.selected_seat()) {
        (SeatPhase::Submitting, _) => "Booking...".to_owned(),
        (_, Some(seat)) => format!("Book Seat {} (ID: {})", seat.label(), seat.id),
        (_, None) => "Select a Seat".to_owned(),
    }
}

fn notice_class(notice: Option<&BookingNotice>) -> &'static str {
    match notice {
        Some(notice) if notice.is_error() => "booking-notice error",
        _ => "booking-notice success",
    }
}

#[component]
pub fn SeatMap() -> impl IntoView {
    let ctx = use_app();
    let seats = ctx.seats;
    let me = {
        let ctx = ctx.clone();
        move || ctx.me()
    };
    let on_book = Callback::new(move |()| actions::submit_booking(&ctx));

    let grid = move || {
        let me = me();
        seats.with(|engine| {
            engine
                .seats()
                .iter()
                .map(|seat| {
                    let class = engine.appearance(seat, me.as_ref()).css_class();
                    let label = seat.label();
                    let id = seat.id.clone();
                    view! {
                        <div
                            class=class
                            on:click=move |_| {
                                seats.update(|e| {
                                    e.click(&id);
                                });
                            }
                        >
                            {label}
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show
            when=move || seats.with(|e| e.phase() != SeatPhase::Failed)
            fallback=move || {
                view! {
                    <p class="error">"Error: " {move || seats.with(|e| e.error().unwrap_or_default().to_owned())}</p>
                }
            }
        >
            <div class="seat-map-container">
                <h3>"Seat Map"</h3>
                <Show when=move || seats.with(|e| e.phase() == SeatPhase::Loading)>
                    <p>"Loading seats..."</p>
                </Show>
                <div class="seat-grid">{grid.clone()}</div>
                <button
                    class="book-button"
                    disabled=move || !seats.with(SeatEngine::can_submit)
                    on:click=move |_| on_book.run(())
                >
                    {move || seats.with(book_button_label)}
                </button>
                <Show when=move || seats.with(|e| e.notice().is_some())>
                    <p class=move || seats.with(|e| notice_class(e.notice()))>
                        {move || seats.with(|e| e.notice().map(BookingNotice::message).unwrap_or_default())}
                    </p>
                    <button class="notice-dismiss" on:click=move |_| seats.update(SeatEngine::dismiss_notice)>
                        "Dismiss"
                    </button>
                </Show>
            </div>
        </Show>
    }
}
