use super::*;

#[test]
fn show_caption_joins_theatre_and_start() {
    let show = Show {
        id: Id::Int(3),
        theatre_name: "Odeon Leicester Sq".to_owned(),
        start_time: "2025-11-20T18:30:00.000Z".to_owned(),
        movie_id: None,
    };
    assert_eq!(show_caption(&show), "Odeon Leicester Sq - 2025-11-20 18:30");
}
