//! Home screen: the "Now Playing" movie grid.

#[cfg(test)]
#[path = "movies_test.rs"]
mod movies_test;

use booking::{Identity, Movie};
use leptos::prelude::*;

use crate::state::{actions, use_app};

fn heading(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => format!("Movie Booking (Logged in as: {})", identity.name),
        None => "Movie Booking".to_owned(),
    }
}

#[component]
pub fn MoviesPage() -> impl IntoView {
    let ctx = use_app();
    let session = ctx.session;
    let catalog = ctx.catalog;
    let on_logout = Callback::new({
        let ctx = ctx.clone();
        move |()| actions::logout(&ctx)
    });
    let on_open = Callback::new(move |movie: Movie| actions::open_movie(&ctx, movie));

    view! {
        <header class="App-header">
            <h1>{move || session.with(|s| heading(s.current()))}</h1>
            <button class="logout-button" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
            <Show when=move || catalog.with(|c| c.movies_error.is_some())>
                <p class="error">
                    "Error: " {move || catalog.with(|c| c.movies_error.clone().unwrap_or_default())}
                </p>
            </Show>
        </header>
        <main>
            <h2>"Now Playing"</h2>
            <Show when=move || catalog.with(|c| c.movies_loading)>
                <p>"Loading movies..."</p>
            </Show>
            <div class="movie-grid">
                {move || {
                    catalog
                        .with(|c| c.movies.clone())
                        .into_iter()
                        .map(|movie| {
                            let title = movie.title.clone();
                            view! {
                                <div class="movie-card" on:click=move |_| on_open.run(movie.clone())>
                                    <div class="movie-card-img-placeholder">
                                        <span>"(Movie Poster)"</span>
                                    </div>
                                    <div class="movie-card-content">
                                        <h3>{title}</h3>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </main>
    }
}
