use super::*;

#[test]
fn timeout_millis_converts_seconds() {
    assert_eq!(timeout_millis(Duration::from_secs(15)), 15_000);
}

#[test]
fn timeout_millis_saturates() {
    assert_eq!(timeout_millis(Duration::from_secs(u64::MAX / 1000)), u32::MAX);
}
