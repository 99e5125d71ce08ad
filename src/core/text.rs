//! ANSI-aware width, padding, and truncation helpers.

use unicode_width::UnicodeWidthChar;

/// Length in bytes of the ANSI escape sequence starting at `bytes[0]`, or
/// `None` if it is not the start of one. Covers CSI sequences and OSC strings
/// terminated by BEL or ST.
fn ansi_sequence_len(bytes: &[u8]) -> Option<usize> {
    if bytes.first() != Some(&0x1b) {
        return None;
    }
    match bytes.get(1) {
        Some(b'[') => {
            let mut idx = 2;
            while let Some(&byte) = bytes.get(idx) {
                idx += 1;
                if (0x40..=0x7e).contains(&byte) {
                    return Some(idx);
                }
            }
            Some(bytes.len())
        }
        Some(b']') => {
            let mut idx = 2;
            while let Some(&byte) = bytes.get(idx) {
                if byte == 0x07 {
                    return Some(idx + 1);
                }
                if byte == 0x1b && bytes.get(idx + 1) == Some(&b'\\') {
                    return Some(idx + 2);
                }
                idx += 1;
            }
            Some(bytes.len())
        }
        Some(_) => Some(2),
        None => Some(1),
    }
}

/// Displayed column width of `input`, ignoring ANSI control sequences.
pub fn visible_width(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut idx = 0;
    let mut width = 0;
    while idx < bytes.len() {
        if let Some(len) = ansi_sequence_len(&bytes[idx..]) {
            idx += len;
            continue;
        }
        let ch = input[idx..].chars().next().expect("missing char");
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
        idx += ch.len_utf8();
    }
    width
}

/// Pad `input` with trailing spaces up to `width` visible columns.
pub fn pad_to_width(input: &str, width: usize) -> String {
    let visible = visible_width(input);
    if visible >= width {
        return input.to_string();
    }
    let mut out = String::with_capacity(input.len() + width - visible);
    out.push_str(input);
    out.extend(std::iter::repeat(' ').take(width - visible));
    out
}

/// Truncate `input` to at most `width` visible columns, appending `…` when
/// anything was cut. ANSI sequences are preserved; a reset is appended after
/// a cut so styling cannot leak past the truncation point.
pub fn truncate_to_width(input: &str, width: usize) -> String {
    if visible_width(input) <= width {
        return input.to_string();
    }
    let target = width.saturating_sub(1);
    let bytes = input.as_bytes();
    let mut idx = 0;
    let mut used = 0;
    let mut out = String::new();
    let mut saw_ansi = false;
    while idx < bytes.len() {
        if let Some(len) = ansi_sequence_len(&bytes[idx..]) {
            out.push_str(&input[idx..idx + len]);
            saw_ansi = true;
            idx += len;
            continue;
        }
        let ch = input[idx..].chars().next().expect("missing char");
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > target {
            break;
        }
        out.push(ch);
        used += ch_width;
        idx += ch.len_utf8();
    }
    if saw_ansi {
        out.push_str("\x1b[0m");
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::{pad_to_width, truncate_to_width, visible_width};

    #[test]
    fn ansi_ignored_in_width() {
        let input = "hi\x1b[31m!!\x1b[0m";
        assert_eq!(visible_width(input), 4);
    }

    #[test]
    fn osc_ignored_in_width() {
        let input = "\x1b]8;;https://example.com\x07link\x1b]8;;\x07";
        assert_eq!(visible_width(input), 4);
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(visible_width("你好"), 4);
    }

    #[test]
    fn pad_fills_to_width_ignoring_ansi() {
        let padded = pad_to_width("\x1b[1mab\x1b[0m", 5);
        assert_eq!(visible_width(&padded), 5);
        assert!(padded.ends_with("   "));
    }

    #[test]
    fn pad_leaves_wide_input_alone() {
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
    }

    #[test]
    fn truncate_appends_ellipsis_and_reset() {
        let truncated = truncate_to_width("\x1b[31mabcdef\x1b[0m", 4);
        assert_eq!(visible_width(&truncated), 4);
        assert!(truncated.ends_with('…'));
        assert!(truncated.contains("\x1b[0m…"));
    }

    #[test]
    fn truncate_is_identity_when_it_fits() {
        assert_eq!(truncate_to_width("abc", 4), "abc");
    }
}
