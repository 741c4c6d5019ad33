use super::*;

fn config() -> ApiConfig {
    ApiConfig::new("http://api.test/api", 5)
}

fn identity(token: &str) -> Identity {
    Identity { id: Id::Int(1), name: "u1".to_owned(), token: token.to_owned(), email: None }
}

// =============================================================
// authorize
// =============================================================

#[test]
fn authorize_adds_bearer_token() {
    let request = authorize(ApiRequest::get("http://x".to_owned()), Some(&identity("tok")));
    assert_eq!(request.header("authorization"), Some("Bearer tok"));
}

#[test]
fn authorize_without_identity_leaves_request_untouched() {
    let original = ApiRequest::get("http://x".to_owned());
    assert_eq!(authorize(original.clone(), None), original);
}

#[test]
fn authorize_skips_empty_token() {
    let request = authorize(ApiRequest::get("http://x".to_owned()), Some(&identity("")));
    assert_eq!(request.header(AUTHORIZATION_HEADER), None);
}

#[test]
fn with_header_replaces_same_name_case_insensitively() {
    let request = ApiRequest::get("http://x".to_owned())
        .with_header("authorization", "Bearer old")
        .with_header("Authorization", "Bearer new");
    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.header("AUTHORIZATION"), Some("Bearer new"));
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn read_endpoints_format_expected_urls() {
    let cfg = config();
    assert_eq!(movies_request(&cfg, None).url, "http://api.test/api/movies");
    assert_eq!(shows_request(&cfg, None, &Id::Int(4)).url, "http://api.test/api/movies/4/shows");
    assert_eq!(seats_request(&cfg, None, &Id::from("s-9")).url, "http://api.test/api/shows/s-9/seats");
}

#[test]
fn read_requests_are_authorized_gets() {
    let request = seats_request(&config(), Some(&identity("tok")), &Id::Int(2));
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.body, None);
    assert_eq!(request.header(AUTHORIZATION_HEADER), Some("Bearer tok"));
}

#[test]
fn login_request_is_unauthenticated_post() {
    let login = LoginRequest { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    let request = login_request(&config(), &login).unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "http://api.test/api/auth/login");
    assert_eq!(request.body, Some(serde_json::json!({ "email": "a@b.c", "password": "pw" })));
    assert_eq!(request.header(AUTHORIZATION_HEADER), None);
}

#[test]
fn register_request_carries_name() {
    let register = RegisterRequest { name: "Ada".to_owned(), email: "a@b.c".to_owned(), password: "pw".to_owned() };
    let request = register_request(&config(), &register).unwrap();
    assert_eq!(request.url, "http://api.test/api/auth/register");
    assert_eq!(
        request.body,
        Some(serde_json::json!({ "name": "Ada", "email": "a@b.c", "password": "pw" }))
    );
}

// =============================================================
// Booking
// =============================================================

#[test]
fn booking_request_puts_key_in_header_not_body() {
    let booking = BookingRequest::new(Id::Int(3), Id::Int(11));
    let request = booking_request(&config(), Some(&identity("tok")), &booking).unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "http://api.test/api/bookings");
    assert_eq!(request.header(IDEMPOTENCY_HEADER), Some(booking.idempotency_key.as_str()));
    assert_eq!(request.header(AUTHORIZATION_HEADER), Some("Bearer tok"));
    assert_eq!(request.body, Some(serde_json::json!({ "show_id": 3, "seat_id": 11 })));
}

#[test]
fn rebuilding_same_attempt_reuses_its_key() {
    let booking = BookingRequest::new(Id::Int(3), Id::Int(11));
    let first = booking_request(&config(), None, &booking).unwrap();
    let retry = booking_request(&config(), None, &booking).unwrap();
    assert_eq!(first.header(IDEMPOTENCY_HEADER), retry.header(IDEMPOTENCY_HEADER));
}
