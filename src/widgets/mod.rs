pub mod controls;
pub mod summary;
pub mod track_panel;

pub use controls::ControlsBar;
pub use summary::SummaryPanel;
pub use track_panel::TrackPanel;

use crate::core::text::pad_to_width;

/// Format simulated seconds the way the reference UI does: whole minutes and
/// leftover seconds, with a decimal only when the leftover is fractional.
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    let leftover = seconds - minutes as f64 * 60.0;
    format!("{minutes}m {}s", format_seconds(leftover))
}

/// Seconds with at most one decimal, trimming `.0`.
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    let rounded = (seconds * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}

/// Zip two rendered columns side by side, padding the left column to
/// `col_width` and the shorter column with blank rows.
#[must_use]
pub fn join_columns(left: &[String], right: &[String], gap: &str, col_width: usize) -> Vec<String> {
    let rows = left.len().max(right.len());
    let blank = String::new();
    (0..rows)
        .map(|idx| {
            let left_line = left.get(idx).unwrap_or(&blank);
            let right_line = right.get(idx).unwrap_or(&blank);
            format!("{}{gap}{right_line}", pad_to_width(left_line, col_width))
        })
        .collect()
}
