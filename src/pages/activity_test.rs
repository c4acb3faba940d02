use super::*;

// =============================================================
// Timestamp formatting
// =============================================================

#[test]
fn iso_timestamps_shorten_to_date_and_minutes() {
    assert_eq!(format_completed_at("2026-03-14T09:05:00Z"), "2026-03-14 09:05");
}

#[test]
fn offset_timestamps_drop_seconds_and_zone() {
    assert_eq!(format_completed_at("2026-03-14T21:45:12+10:00"), "2026-03-14 21:45");
}

#[test]
fn non_timestamp_values_pass_through() {
    assert_eq!(format_completed_at("yesterday"), "yesterday");
    assert_eq!(format_completed_at(""), "");
}

#[test]
fn truncated_time_parts_pass_through() {
    assert_eq!(format_completed_at("2026-03-14T09"), "2026-03-14T09");
}
