//! Root application component with screen switching and context provider.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use booking::{ApiClient, Catalog};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::api_config;
use crate::net::transport::GlooTransport;
use crate::pages::{login::LoginPage, movies::MoviesPage, shows::SeatsPage, shows::ShowsPage};
use crate::state::{AppContext, actions};
use crate::util::storage::LocalStorage;

/// Which top-level screen is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Movies,
    Shows,
    Seats,
}

/// The session gates everything; below it the catalog selection drills down.
pub fn screen_for(authenticated: bool, catalog: &Catalog) -> Screen {
    if !authenticated {
        Screen::Login
    } else if catalog.selected_movie.is_none() {
        Screen::Movies
    } else if catalog.selected_show.is_none() {
        Screen::Shows
    } else {
        Screen::Seats
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = api_config();
    let api = ApiClient::new(config.clone(), GlooTransport::new(config.timeout()));
    let ctx = AppContext::new(api, LocalStorage);
    let session = ctx.session;
    let catalog = ctx.catalog;
    provide_context(ctx.clone());

    // Fetch the movie list whenever an identity becomes present.
    let user_id = Memo::new(move |_| session.with(|s| s.current().map(|identity| identity.id.clone())));
    Effect::new(move || {
        if user_id.get().is_some() {
            actions::load_movies(&ctx);
        }
    });

    let screen = Memo::new(move |_| {
        let authenticated = session.with(|s| s.is_authenticated());
        catalog.with(|c| screen_for(authenticated, c))
    });

    view! {
        <Title text="Movie Booking"/>
        <div class="App">
            {move || match screen.get() {
                Screen::Login => view! { <LoginPage/> }.into_any(),
                Screen::Movies => view! { <MoviesPage/> }.into_any(),
                Screen::Shows => view! { <ShowsPage/> }.into_any(),
                Screen::Seats => view! { <SeatsPage/> }.into_any(),
            }}
        </div>
    }
}
