use booking::{Id, Movie, Show};

use super::*;

fn movie() -> Movie {
    Movie { id: Id::Int(1), title: "Heat".to_owned(), description: String::new() }
}

fn show() -> Show {
    Show {
        id: Id::Int(10),
        theatre_name: "Odeon".to_owned(),
        start_time: "2025-11-20T18:30:00Z".to_owned(),
        movie_id: Some(Id::Int(1)),
    }
}

#[test]
fn unauthenticated_always_shows_login() {
    let mut catalog = Catalog::default();
    catalog.selected_movie = Some(movie());
    assert_eq!(screen_for(false, &catalog), Screen::Login);
}

#[test]
fn authenticated_without_selection_shows_movies() {
    assert_eq!(screen_for(true, &Catalog::default()), Screen::Movies);
}

#[test]
fn selected_movie_shows_showtimes_then_seats() {
    let mut catalog = Catalog::default();
    let fetch = catalog.select_movie(movie());
    assert_eq!(screen_for(true, &catalog), Screen::Shows);

    catalog.apply_shows(&fetch, Ok(vec![show()]));
    catalog.select_show(&Id::Int(10));
    assert_eq!(screen_for(true, &catalog), Screen::Seats);

    catalog.back_to_shows();
    assert_eq!(screen_for(true, &catalog), Screen::Shows);
}
