//! Showtime list for the selected movie, and the seat map screen below it.

#[cfg(test)]
#[path = "shows_test.rs"]
mod shows_test;

use booking::{Id, Show};
use leptos::prelude::*;

use crate::components::seat_map::SeatMap;
use crate::state::{actions, use_app};

/// Caption under the movie title on the seat map screen.
fn show_caption(show: &Show) -> String {
    format!("{} - {}", show.theatre_name, show.start_label())
}

#[component]
pub fn ShowsPage() -> impl IntoView {
    let ctx = use_app();
    let catalog = ctx.catalog;
    let on_back = Callback::new({
        let ctx = ctx.clone();
        move |()| actions::back_to_movies(&ctx)
    });
    let on_open = Callback::new(move |show_id: Id| actions::open_show(&ctx, show_id));

    let title = move || catalog.with(|c| c.selected_movie.as_ref().map(|m| m.title.clone()).unwrap_or_default());
    let description =
        move || catalog.with(|c| c.selected_movie.as_ref().map(|m| m.description.clone()).unwrap_or_default());

    view! {
        <div class="showlist-container">
            <button class="back-button" on:click=move |_| on_back.run(())>
                "← Back to Movies"
            </button>
            <h2>{title}</h2>
            <p>{description}</p>
            <hr/>
            <h3>"Select a Showtime"</h3>
            <Show when=move || catalog.with(|c| c.shows_error.is_some())>
                <p class="error">{move || catalog.with(|c| c.shows_error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || catalog.with(|c| c.shows_loading)>
                <p>"Loading showtimes..."</p>
            </Show>
            <div class="show-list">
                {move || {
                    catalog
                        .with(|c| c.shows.clone())
                        .into_iter()
                        .map(|show| {
                            let theatre = show.theatre_name.clone();
                            let starts = show.start_label();
                            let id = show.id;
                            view! {
                                <button class="show-item" on:click=move |_| on_open.run(id.clone())>
                                    <h3>{theatre}</h3>
                                    <p>{starts}</p>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn SeatsPage() -> impl IntoView {
    let ctx = use_app();
    let catalog = ctx.catalog;
    let on_back = Callback::new(move |()| actions::back_to_shows(&ctx));

    let title = move || catalog.with(|c| c.selected_movie.as_ref().map(|m| m.title.clone()).unwrap_or_default());
    let caption = move || catalog.with(|c| c.selected_show.as_ref().map(show_caption).unwrap_or_default());

    view! {
        <div class="seatmap-view">
            <button class="back-button" on:click=move |_| on_back.run(())>
                "← Back to Showtimes"
            </button>
            <h3>{title}</h3>
            <p>{caption}</p>
            <SeatMap/>
        </div>
    }
}
