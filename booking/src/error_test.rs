use super::*;

// =============================================================
// extract_message
// =============================================================

#[test]
fn extract_message_reads_message_field() {
    assert_eq!(
        extract_message(r#"{"message":"Seat already booked"}"#),
        Some("Seat already booked".to_owned())
    );
}

#[test]
fn extract_message_ignores_blank_and_non_string_values() {
    assert_eq!(extract_message(r#"{"message":"   "}"#), None);
    assert_eq!(extract_message(r#"{"message":42}"#), None);
    assert_eq!(extract_message(r#"{"error":"nope"}"#), None);
}

#[test]
fn extract_message_tolerates_non_json_bodies() {
    assert_eq!(extract_message("<html>502 Bad Gateway</html>"), None);
    assert_eq!(extract_message(""), None);
}

// =============================================================
// user_message
// =============================================================

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::from_status(409, r#"{"message":"Seat already booked"}"#);
    assert_eq!(err.user_message(BOOKING_FALLBACK), "Seat already booked");
}

#[test]
fn user_message_falls_back_without_payload_message() {
    let err = ApiError::from_status(500, "{}");
    assert_eq!(err.user_message(SEATS_FALLBACK), "Failed to fetch seats");
}

#[test]
fn user_message_falls_back_for_network_errors() {
    assert_eq!(ApiError::Transport("dns".to_owned()).user_message(MOVIES_FALLBACK), "Could not load movies.");
    assert_eq!(ApiError::Timeout.user_message(BOOKING_FALLBACK), "Booking failed");
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(SHOWS_FALLBACK), "Failed to fetch shows");
}

#[test]
fn status_error_display_includes_status() {
    let err = ApiError::from_status(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(err.to_string(), "server responded with status 401");
    assert_eq!(err.server_message(), Some("Invalid credentials"));
}
