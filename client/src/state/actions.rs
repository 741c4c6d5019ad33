//! UI actions that pair a state transition with its request.
//!
//! Each action applies the synchronous transition first, then spawns the
//! request and hands the result back with the tag it was issued under, so
//! responses that arrive after the user moved on are dropped by the state
//! machine.

use booking::{AuthForm, BookingOutcome, Catalog, Id, Movie, SeatEngine};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::AppContext;

pub fn load_movies(ctx: &AppContext) {
    let Some(identity) = ctx.identity_untracked() else {
        return;
    };
    ctx.catalog.update(Catalog::begin_movies);
    let api = ctx.api.clone();
    let catalog = ctx.catalog;
    spawn_local(async move {
        let result = api.movies(Some(&identity)).await;
        catalog.update(|c| c.apply_movies(result));
    });
}

pub fn open_movie(ctx: &AppContext, movie: Movie) {
    let Some(fetch) = ctx.catalog.try_update(|c| c.select_movie(movie)) else {
        return;
    };
    ctx.seats.update(SeatEngine::reset);
    let identity = ctx.identity_untracked();
    let api = ctx.api.clone();
    let catalog = ctx.catalog;
    spawn_local(async move {
        let result = api.shows(identity.as_ref(), &fetch.movie_id).await;
        catalog.update(|c| {
            c.apply_shows(&fetch, result);
        });
    });
}

/// Open a showtime's seat map and fetch its seats.
pub fn open_show(ctx: &AppContext, show_id: Id) {
    let found = ctx.catalog.try_update(|c| c.select_show(&show_id).is_some());
    if found != Some(true) {
        return;
    }
    let Some(fetch) = ctx.seats.try_update(|e| e.choose_show(show_id)) else {
        return;
    };
    let identity = ctx.identity_untracked();
    let api = ctx.api.clone();
    let seats = ctx.seats;
    spawn_local(async move {
        let result = api.seats(identity.as_ref(), &fetch.show_id).await;
        seats.update(|e| {
            e.apply_seats(&fetch, result);
        });
    });
}

pub fn back_to_shows(ctx: &AppContext) {
    ctx.catalog.update(Catalog::back_to_shows);
    ctx.seats.update(SeatEngine::reset);
}

pub fn back_to_movies(ctx: &AppContext) {
    ctx.catalog.update(Catalog::back_to_movies);
    ctx.seats.update(SeatEngine::reset);
}

/// Submit the selected seat. A no-op unless the engine allows submission,
/// which also blocks double clicks while a booking is in flight.
pub fn submit_booking(ctx: &AppContext) {
    let identity = ctx.identity_untracked();
    let booker = identity.as_ref().map(|identity| identity.id.clone());
    let Some(Some(pending)) = ctx.seats.try_update(|e| e.begin_booking(booker.as_ref())) else {
        return;
    };
    let api = ctx.api.clone();
    let seats = ctx.seats;
    spawn_local(async move {
        let result = api.book(identity.as_ref(), &pending.request).await;
        seats.update(|e| {
            if e.finish_booking(&pending, result) == BookingOutcome::Stale {
                log_stale(&pending.request.seat_id);
            }
        });
    });
}

pub fn login(ctx: &AppContext, form: RwSignal<AuthForm>) {
    if form.with_untracked(|f| f.busy) {
        return;
    }
    let submission = match form.with_untracked(AuthForm::submission) {
        Ok(submission) => submission,
        Err(message) => {
            form.update(|f| f.reject(message));
            return;
        }
    };
    form.update(AuthForm::begin);
    let api = ctx.api.clone();
    let session = ctx.session;
    spawn_local(async move {
        match api.authenticate(&submission).await {
            Ok(identity) => {
                form.update(AuthForm::finish);
                session.update(|s| s.save(identity));
            }
            Err(e) => form.update(|f| f.fail(&e)),
        }
    });
}

pub fn logout(ctx: &AppContext) {
    ctx.session.update(|s| s.clear());
    ctx.catalog.set(Catalog::default());
    ctx.seats.update(SeatEngine::reset);
}

#[cfg(feature = "csr")]
fn log_stale(seat_id: &Id) {
    log::info!("booking for seat {seat_id} finished after leaving the show");
}

#[cfg(not(feature = "csr"))]
fn log_stale(_seat_id: &Id) {}
