// tests/timestamp_tests.rs
use crypto_gate::{current_timestamp, relative_timestamp};

#[test]
fn test_current_timestamp_never_decreases() {
    let first = current_timestamp();
    let second = current_timestamp();
    assert!(second >= first);
}

#[test]
fn test_relative_timestamp_matches_offset_within_tolerance() {
    for offset in [-3600i64, 0, 3600] {
        let now = current_timestamp();
        let shifted = relative_timestamp(offset);
        let diff = shifted.timestamp() - now.timestamp();
        assert!(
            (diff - offset).abs() <= 2,
            "offset {offset}: observed diff {diff}"
        );
    }
}

#[test]
fn test_zero_offset_is_now() {
    let now = current_timestamp();
    let same = relative_timestamp(0);
    assert!((same.timestamp() - now.timestamp()).abs() <= 2);
}
