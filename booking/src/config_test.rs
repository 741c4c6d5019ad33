use super::*;

#[test]
fn default_points_at_hosted_api() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url(), DEFAULT_API_URL);
    assert_eq!(cfg.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new(" http://localhost:5000/api// ", 5);
    assert_eq!(cfg.base_url(), "http://localhost:5000/api");
}

#[test]
fn zero_timeout_is_clamped() {
    assert_eq!(ApiConfig::new("http://x", 0).timeout(), Duration::from_secs(1));
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ApiConfig::new("http://x/api/", 5);
    assert_eq!(cfg.endpoint("/movies"), "http://x/api/movies");
    assert_eq!(cfg.endpoint("shows/3/seats"), "http://x/api/shows/3/seats");
}
