#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Gas", 10), "Gas");
    assert_eq!(truncate("Shopping", 8), "Shopping");
}

#[test]
fn test_truncate_long_category() {
    assert_eq!(truncate("Bills & Utilities", 10), "Bills & U…");
}

#[test]
fn test_truncate_edges() {
    assert_eq!(truncate("", 5), "");
    assert_eq!(truncate("Travel", 0), "");
    assert_eq!(truncate("Travel", 1), "…");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("Café résumé", 5), "Café…");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount() {
    assert_eq!(format_amount(dec!(3500)), "$3,500.00");
    assert_eq!(format_amount(dec!(0)), "$0.00");
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_negative_balance() {
    assert_eq!(format_amount(dec!(-2875)), "-$2,875.00");
}

// ── format_percent / format_ratio ─────────────────────────────

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(dec!(0.375)), "37.5%");
    assert_eq!(format_percent(dec!(0)), "0.0%");
    assert_eq!(format_percent(dec!(1.25)), "125.0%");
    assert_eq!(format_percent(dec!(0.82142857)), "82.1%");
}

#[test]
fn test_format_percent_too_large_to_scale() {
    assert_eq!(format_percent(rust_decimal::Decimal::MAX), "n/a");
}

#[test]
fn test_format_ratio_undefined() {
    assert_eq!(format_ratio(None), "n/a");
    assert_eq!(format_ratio(Some(dec!(0.5))), "50.0%");
}

// ── progress_bar ──────────────────────────────────────────────

#[test]
fn test_progress_bar() {
    assert_eq!(progress_bar(0.0, 4), "[░░░░]");
    assert_eq!(progress_bar(0.5, 4), "[██░░]");
    assert_eq!(progress_bar(1.0, 4), "[████]");
}

#[test]
fn test_progress_bar_clamps_overflow() {
    assert_eq!(progress_bar(1.8, 4), "[████]");
    assert_eq!(progress_bar(-0.3, 4), "[░░░░]");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_follows_cursor() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);

    scroll_to_bottom(&mut index, &mut scroll, 10, 3);
    assert_eq!((index, scroll), (9, 7));
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!(index, 9);
}

#[test]
fn test_scroll_up_and_top() {
    let (mut index, mut scroll) = (4, 4);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (3, 3));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
}
