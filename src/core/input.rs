//! Input parsing for the key set the app binds.
//!
//! The terminal delivers raw byte chunks; this module splits them into
//! structured events. Only legacy escape sequences are recognized — the app
//! never enables the kitty keyboard protocol.

/// Input event delivered to components.
///
/// `raw` is the exact byte sequence received from the terminal (UTF-8
/// decoded). `key_id` is a normalized identifier for matching bindings;
/// printable runs are delivered as `Text` so handlers don't re-decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key { raw: String, key_id: String },
    Text { raw: String, text: String },
    UnknownRaw { raw: String },
}

fn escape_sequence_key_id(data: &str) -> Option<(&'static str, usize)> {
    const SEQUENCES: [(&str, &str); 8] = [
        ("\x1b[A", "up"),
        ("\x1b[B", "down"),
        ("\x1b[C", "right"),
        ("\x1b[D", "left"),
        ("\x1bOA", "up"),
        ("\x1bOB", "down"),
        ("\x1bOC", "right"),
        ("\x1bOD", "left"),
    ];
    SEQUENCES
        .iter()
        .find(|(sequence, _)| data.starts_with(sequence))
        .map(|(sequence, key_id)| (*key_id, sequence.len()))
}

fn control_key_id(byte: u8) -> Option<&'static str> {
    match byte {
        b'\r' | b'\n' => Some("enter"),
        b'\t' => Some("tab"),
        0x03 => Some("ctrl+c"),
        0x7f | 0x08 => Some("backspace"),
        _ => None,
    }
}

/// Split a raw terminal chunk into input events.
///
/// A lone ESC is reported as the `escape` key; an unrecognized escape
/// sequence is surfaced as `UnknownRaw` so nothing is silently dropped.
pub fn parse_input_events(data: &str) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let mut remaining = data;

    while !remaining.is_empty() {
        if remaining.starts_with('\x1b') {
            if let Some((key_id, len)) = escape_sequence_key_id(remaining) {
                events.push(InputEvent::Key {
                    raw: remaining[..len].to_string(),
                    key_id: key_id.to_string(),
                });
                remaining = &remaining[len..];
                continue;
            }
            if remaining.len() == 1 {
                events.push(InputEvent::Key {
                    raw: remaining.to_string(),
                    key_id: "escape".to_string(),
                });
                break;
            }
            events.push(InputEvent::UnknownRaw {
                raw: remaining.to_string(),
            });
            break;
        }

        let first = remaining.as_bytes()[0];
        if let Some(key_id) = control_key_id(first) {
            events.push(InputEvent::Key {
                raw: remaining[..1].to_string(),
                key_id: key_id.to_string(),
            });
            remaining = &remaining[1..];
            continue;
        }

        // Longest run of printable characters becomes one text event.
        let end = remaining
            .char_indices()
            .find(|(_, ch)| ch.is_control())
            .map(|(idx, _)| idx)
            .unwrap_or(remaining.len());
        if end == 0 {
            // Unmapped control byte; skip it rather than loop forever.
            remaining = &remaining[1..];
            continue;
        }
        events.push(InputEvent::Text {
            raw: remaining[..end].to_string(),
            text: remaining[..end].to_string(),
        });
        remaining = &remaining[end..];
    }

    events
}

#[cfg(test)]
mod tests {
    use super::{parse_input_events, InputEvent};

    fn key(raw: &str, key_id: &str) -> InputEvent {
        InputEvent::Key {
            raw: raw.to_string(),
            key_id: key_id.to_string(),
        }
    }

    fn text(value: &str) -> InputEvent {
        InputEvent::Text {
            raw: value.to_string(),
            text: value.to_string(),
        }
    }

    #[test]
    fn space_is_text_not_key() {
        assert_eq!(parse_input_events(" "), vec![text(" ")]);
    }

    #[test]
    fn printable_run_is_one_text_event() {
        assert_eq!(parse_input_events("r2"), vec![text("r2")]);
    }

    #[test]
    fn arrows_and_controls_become_key_events() {
        assert_eq!(parse_input_events("\x1b[A"), vec![key("\x1b[A", "up")]);
        assert_eq!(parse_input_events("\x1bOD"), vec![key("\x1bOD", "left")]);
        assert_eq!(parse_input_events("\r"), vec![key("\r", "enter")]);
        assert_eq!(parse_input_events("\t"), vec![key("\t", "tab")]);
        assert_eq!(parse_input_events("\x03"), vec![key("\x03", "ctrl+c")]);
    }

    #[test]
    fn lone_escape_is_the_escape_key() {
        assert_eq!(parse_input_events("\x1b"), vec![key("\x1b", "escape")]);
    }

    #[test]
    fn mixed_chunk_splits_in_order() {
        assert_eq!(
            parse_input_events("q\x1b[C1"),
            vec![text("q"), key("\x1b[C", "right"), text("1")]
        );
    }

    #[test]
    fn unknown_escape_sequence_is_surfaced_raw() {
        assert_eq!(
            parse_input_events("\x1b[Z"),
            vec![InputEvent::UnknownRaw {
                raw: "\x1b[Z".to_string()
            }]
        );
    }
}
