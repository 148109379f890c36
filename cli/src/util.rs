// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The weekday labels of the grid header, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Formats a (year, zero-based month) pair as a header title, e.g.
/// "June 2025".
pub fn month_title(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month + 1, 1) {
        Some(date) => date.format("%B %Y").to_string(),
        None => format!("{year}-{:02}", month + 1),
    }
}

/// The display width of the first `graphemes` grapheme clusters of `s`.
pub fn width_of_graphemes(s: &str, graphemes: usize) -> usize {
    s.graphemes(true).take(graphemes).map(|g| g.width()).sum()
}

/// The number of grapheme clusters in `s`.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// The byte range of the grapheme cluster at index `index` in `s`, or
/// `None` when out of bounds.
pub fn grapheme_range_at(s: &str, index: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(index)
        .map(|(start, g)| start..start + g.len())
}

/// The byte offset just before the grapheme cluster at `index`, i.e.
/// the insertion point for typing at that position.
pub fn byte_offset_of_grapheme(s: &str, index: usize) -> usize {
    s.grapheme_indices(true)
        .nth(index)
        .map(|(start, _)| start)
        .unwrap_or(s.len())
}

/// Truncates `s` to at most `max_width` display columns, appending an
/// ellipsis when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = g.width();
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push('…');
    out
}
