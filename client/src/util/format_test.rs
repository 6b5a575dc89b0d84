use super::*;

#[test]
fn format_timestamp_trims_iso_to_minutes() {
    assert_eq!(format_timestamp(Some("2024-05-01T12:34:56.789Z")), "2024-05-01 12:34");
    assert_eq!(format_timestamp(Some("2024-05-01 08:05:00")), "2024-05-01 08:05");
}

#[test]
fn format_timestamp_keeps_date_only_values() {
    assert_eq!(format_timestamp(Some("2024-05-01")), "2024-05-01");
}

#[test]
fn format_timestamp_rejects_garbage() {
    assert_eq!(format_timestamp(None), "N/A");
    assert_eq!(format_timestamp(Some("")), "N/A");
    assert_eq!(format_timestamp(Some("yesterday")), "N/A");
    assert_eq!(format_timestamp(Some("2024-05-01Tnoon")), "N/A");
}

#[test]
fn format_points_groups_thousands() {
    assert_eq!(format_points(0), "0");
    assert_eq!(format_points(999), "999");
    assert_eq!(format_points(1_000), "1,000");
    assert_eq!(format_points(1_234_567), "1,234,567");
    assert_eq!(format_points(-12_500), "-12,500");
}

#[test]
fn format_amount_uses_two_decimals() {
    assert_eq!(format_amount(12.5), "$12.50");
    assert_eq!(format_amount(0.0), "$0.00");
}

#[test]
fn capitalize_first_letter_only() {
    assert_eq!(capitalize("paypal"), "Paypal");
    assert_eq!(capitalize("USDT"), "USDT");
    assert_eq!(capitalize(""), "");
}
