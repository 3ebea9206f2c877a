use chrono::NaiveTime;
use unicode_width::UnicodeWidthStr;

use super::digits::{Script, localize};

/// Format a NaiveTime to "HH:MM" in the given script
pub fn format_time(t: NaiveTime, script: Script) -> String {
    localize(t.format("%H:%M"), script)
}

/// Right-pad to a terminal column width. Bengali combining marks take no
/// columns, so `str::len` and `chars().count()` both overcount.
pub fn pad_display(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_time_in_both_scripts() {
        let t = NaiveTime::from_hms_opt(4, 32, 0).unwrap();
        assert_eq!(format_time(t, Script::Latin), "04:32");
        assert_eq!(format_time(t, Script::Bengali), "০৪:৩২");
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_display("Asr", 6), "Asr   ");
        assert_eq!(pad_display("toolong", 3), "toolong");
        let padded = pad_display("ফজর", 8);
        assert_eq!(UnicodeWidthStr::width(padded.as_str()), 8);
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(progress_bar(0, 5, 5), "░░░░░");
        assert_eq!(progress_bar(5, 5, 5), "█████");
        assert_eq!(progress_bar(9, 5, 4), "████");
        assert_eq!(progress_bar(1, 0, 3), "░░░");
    }
}
