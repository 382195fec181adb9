//! Scoring module - Classic scoring and level progression
//!
//! - Line clears score `LINE_SCORES[n - 1] * level`.
//! - Soft and hard drops score one point per row.
//! - Level is `lines / 10 + 1` and only ever grows within a game.

use crate::types::{BASE_DROP_MS, DROP_POINTS_PER_ROW, LEVEL_SPEEDUP_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Calculate line clear score
/// lines: number of lines cleared at once
/// level: current level (1-based)
///
/// More than four lines cannot be cleared by a single piece; such counts score
/// as four.
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let idx = (lines as usize).min(LINE_SCORES.len()) - 1;
    LINE_SCORES[idx].saturating_mul(level)
}

/// Calculate drop score for `rows` rows moved by a soft or hard drop
pub fn calculate_drop_score(rows: u32) -> u32 {
    rows.saturating_mul(DROP_POINTS_PER_ROW)
}

/// Level reached after clearing `lines` lines in total
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Get drop interval in milliseconds for a level
///
/// The classic curve loses 100ms per level and is not clamped: it is 0 at
/// level 11 and negative beyond. `floor_ms` optionally bounds it from below.
pub fn get_drop_interval_ms(level: u32, floor_ms: Option<i64>) -> i64 {
    let steps = i64::from(level.saturating_sub(1));
    let interval = BASE_DROP_MS - steps * LEVEL_SPEEDUP_MS;
    match floor_ms {
        Some(floor) => interval.max(floor),
        None => interval,
    }
}
