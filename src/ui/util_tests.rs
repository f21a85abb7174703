#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Coffee", 10), "Coffee");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Transportation", 6), "Trans…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("Rent", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative_remaining() {
    assert_eq!(format_amount(dec!(-420)), "-$420.00");
}

#[test]
fn test_format_amount_pads_cents() {
    assert_eq!(format_amount(dec!(4.5)), "$4.50");
}

#[test]
fn test_format_amount_millions() {
    assert_eq!(format_amount(dec!(10000000.00)), "$10,000,000.00");
}

// ── format_percent ────────────────────────────────────────────

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(dec!(0)), "0.0%");
    assert_eq!(format_percent(dec!(100)), "100.0%");
    assert_eq!(format_percent(dec!(37.5)), "37.5%");
}

// ── progress_bar ──────────────────────────────────────────────

#[test]
fn test_progress_bar_bounds() {
    assert_eq!(progress_bar(0.0, 4), "[░░░░]");
    assert_eq!(progress_bar(0.5, 4), "[██░░]");
    assert_eq!(progress_bar(1.0, 4), "[████]");
    assert_eq!(progress_bar(3.0, 4), "[████]");
    assert_eq!(progress_bar(-1.0, 4), "[░░░░]");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_keeps_cursor_visible() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (1, 0);
    scroll_down(&mut index, &mut scroll, 2, 5);
    assert_eq!(index, 1);
}

#[test]
fn test_scroll_up_follows_cursor() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}
