/// Keystroke shaping for date text. Nothing here validates a date, it only
/// nudges the text towards DD/MM/YY.
use crate::config::TTHH_MAX_INPUT_LEN;

/// Keep only ASCII digits and slashes
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '/')
        .collect()
}

/// Shape the full text of a change event.
///
/// A bare two-digit day gets a slash, a completed `DD/MM` gets a trailing
/// slash, and the result never exceeds ten characters.
pub fn format_input(raw: &str) -> String {
    let mut text = sanitize(raw);

    let slashes = text.matches('/').count();
    if text.len() == 2 && slashes == 0 {
        text.push('/');
    } else if text.len() == 5 && slashes == 1 {
        text.push('/');
    }

    text.truncate(TTHH_MAX_INPUT_LEN);
    text
}

/// Shape text after a deletion. Auto-advance is skipped so that an
/// auto-inserted slash can be removed.
pub fn format_deletion(raw: &str) -> String {
    let mut text = sanitize(raw);
    text.truncate(TTHH_MAX_INPUT_LEN);
    text
}
