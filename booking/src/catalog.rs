//! Movie and showtime browsing state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The movie list is fetched once an identity is present; choosing a movie
//! fetches its showtimes; choosing a showtime hands off to the seat engine.
//! Show fetches are tagged so a slow response for a movie the user already
//! left does not overwrite the current list.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::error::{ApiError, MOVIES_FALLBACK, SHOWS_FALLBACK};
use crate::types::{Id, Movie, Show};

/// Tag identifying one showtime fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowsFetch {
    pub movie_id: Id,
    pub generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub movies_loading: bool,
    pub movies_error: Option<String>,
    pub selected_movie: Option<Movie>,
    pub shows: Vec<Show>,
    pub shows_loading: bool,
    pub shows_error: Option<String>,
    pub selected_show: Option<Show>,
    shows_generation: u64,
}

impl Catalog {
    pub fn begin_movies(&mut self) {
        self.movies_loading = true;
        self.movies_error = None;
    }

    pub fn apply_movies(&mut self, result: Result<Vec<Movie>, ApiError>) {
        self.movies_loading = false;
        match result {
            Ok(movies) => {
                tracing::debug!(count = movies.len(), "movies loaded");
                self.movies = movies;
            }
            Err(e) => {
                tracing::warn!(error = %e, "movie fetch failed");
                self.movies_error = Some(e.user_message(MOVIES_FALLBACK));
            }
        }
    }

    /// Open a movie and start a fresh showtime fetch for it.
    pub fn select_movie(&mut self, movie: Movie) -> ShowsFetch {
        self.shows_generation += 1;
        let fetch = ShowsFetch { movie_id: movie.id.clone(), generation: self.shows_generation };
        self.selected_movie = Some(movie);
        self.selected_show = None;
        self.shows.clear();
        self.shows_error = None;
        self.shows_loading = true;
        fetch
    }

    /// Apply a showtime fetch result. Returns `false` when the result is stale.
    pub fn apply_shows(&mut self, fetch: &ShowsFetch, result: Result<Vec<Show>, ApiError>) -> bool {
        let current = self.selected_movie.as_ref().map(|movie| &movie.id);
        if fetch.generation != self.shows_generation || current != Some(&fetch.movie_id) {
            tracing::debug!(movie = %fetch.movie_id, "discarding stale show list");
            return false;
        }
        self.shows_loading = false;
        match result {
            Ok(shows) => self.shows = shows,
            Err(e) => {
                tracing::warn!(error = %e, movie = %fetch.movie_id, "show fetch failed");
                self.shows_error = Some(e.user_message(SHOWS_FALLBACK));
            }
        }
        true
    }

    /// Pick a show from the loaded list. Unknown ids select nothing.
    pub fn select_show(&mut self, show_id: &Id) -> Option<&Show> {
        self.selected_show = self.shows.iter().find(|show| &show.id == show_id).cloned();
        self.selected_show.as_ref()
    }

    pub fn back_to_shows(&mut self) {
        self.selected_show = None;
    }

    pub fn back_to_movies(&mut self) {
        self.shows_generation += 1;
        self.selected_movie = None;
        self.selected_show = None;
        self.shows.clear();
        self.shows_error = None;
        self.shows_loading = false;
    }
}
