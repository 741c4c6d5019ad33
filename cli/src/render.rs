//! Plain-text rendering for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use booking::{Id, Identity, Movie, SeatClass, SeatEngine, Show};

pub fn movie_line(movie: &Movie) -> String {
    if movie.description.trim().is_empty() {
        format!("{:>6}  {}", movie.id.to_string(), movie.title)
    } else {
        format!("{:>6}  {} - {}", movie.id.to_string(), movie.title, movie.description.trim())
    }
}

pub fn show_line(show: &Show) -> String {
    format!("{:>6}  {} - {}", show.id.to_string(), show.theatre_name, show.start_label())
}

pub fn identity_line(identity: &Identity) -> String {
    match &identity.email {
        Some(email) => format!("{} <{email}> (id {})", identity.name, identity.id),
        None => format!("{} (id {})", identity.name, identity.id),
    }
}

/// One line per row, in the order rows first appear.
///
/// `[A1]` is available, `(A1)` is held by `me`, ` xx ` is held by someone
/// else.
pub fn seat_map(engine: &SeatEngine, me: Option<&Id>) -> String {
    let mut rows: Vec<(&str, Vec<String>)> = Vec::new();
    for seat in engine.seats() {
        let cell = match engine.appearance(seat, me).class {
            SeatClass::Available => format!("[{}]", seat.label()),
            SeatClass::BookedByMe => format!("({})", seat.label()),
            SeatClass::BookedByOther => " xx ".to_owned(),
        };
        match rows.iter_mut().find(|(row, _)| *row == seat.row) {
            Some((_, cells)) => cells.push(cell),
            None => rows.push((seat.row.as_str(), vec![cell])),
        }
    }
    if rows.is_empty() {
        return "No seats for this show.".to_owned();
    }
    rows.into_iter()
        .map(|(row, cells)| format!("{row:>3}  {}", cells.join(" ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `label id` pairs for seats that can still be booked.
pub fn open_seat_ids(engine: &SeatEngine) -> String {
    engine
        .seats()
        .iter()
        .filter(|seat| !seat.is_booked())
        .map(|seat| format!("{}={}", seat.label(), seat.id))
        .collect::<Vec<_>>()
        .join(" ")
}
