//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Format an engagement counter compactly
///
/// Counts under a thousand are printed as-is. Larger counts are divided by a
/// thousand or a million and shown with one decimal, rounding halves up. The
/// unit is picked from the raw count before rounding, so 999,999 stays in
/// thousands.
///
/// # Arguments
/// * `count` - Number of replies, reposts or likes
///
/// # Returns
/// Formatted string like "999", "1.2K" or "2.5M"
///
/// # Examples
/// ```
/// use chirptui::logic::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1000), "1.0K");
/// assert_eq!(format_count(1234), "1.2K");
/// assert_eq!(format_count(999_999), "1000.0K");
/// assert_eq!(format_count(1_000_000), "1.0M");
/// assert_eq!(format_count(2_500_000), "2.5M");
/// ```
pub fn format_count(count: u64) -> String {
    if count < THOUSAND {
        count.to_string()
    } else if count < MILLION {
        format_tenths(count, THOUSAND, 'K')
    } else {
        format_tenths(count, MILLION, 'M')
    }
}

/// `count / unit` with one decimal place, half-up
fn format_tenths(count: u64, unit: u64, suffix: char) -> String {
    let tenths = (count as u128 * 10 + unit as u128 / 2) / unit as u128;
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

/// Counter text for an action bar slot; zero counts are not shown
pub fn action_count_label(count: u32) -> Option<String> {
    if count > 0 {
        Some(format_count(count as u64))
    } else {
        None
    }
}
