use super::*;

#[test]
fn format_usd_whole_amounts_drop_cents() {
    assert_eq!(format_usd(90.0), "$90");
    assert_eq!(format_usd(0.0), "$0");
}

#[test]
fn format_usd_groups_thousands() {
    assert_eq!(format_usd(1234.0), "$1,234");
    assert_eq!(format_usd(1_234_567.0), "$1,234,567");
}

#[test]
fn format_usd_keeps_fractional_cents() {
    assert_eq!(format_usd(99.5), "$99.50");
    assert_eq!(format_usd(1234.05), "$1,234.05");
}

#[test]
fn format_usd_negative() {
    assert_eq!(format_usd(-45.25), "-$45.25");
}

#[test]
fn format_date_renders_month_name() {
    assert_eq!(format_date("2026-09-12"), "Sep 12, 2026");
    assert_eq!(format_date("2026-01-01"), "Jan 1, 2026");
}

#[test]
fn format_date_passes_through_unparseable_input() {
    assert_eq!(format_date("soon"), "soon");
    assert_eq!(format_date("2026-13-01"), "2026-13-01");
    assert_eq!(format_date("26-09-12"), "26-09-12");
}
