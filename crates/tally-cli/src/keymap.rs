//! Keyboard-to-event mapping.
//!
//! Mapping keys onto engine events is the adapter's job, not the
//! engine's: digits and `.` enter the operand, `+ - * /` choose the
//! operation (with the keypad glyphs `x` and `÷` as aliases), `=` or
//! Enter computes, `%` takes the percentage, `s`/`~` toggle the sign, and
//! `c`, Backspace or Escape clear.

use tally_types::{InputEvent, Operator};
use thiserror::Error;

/// Map one key character to its engine event, if it has one.
pub fn event_for(key: char) -> Option<InputEvent> {
    match key {
        '0'..='9' => Some(InputEvent::Digit(key)),
        '.' => Some(InputEvent::DecimalPoint),
        '+' | '-' | '*' | 'x' | '/' | '÷' => {
            key.to_string().parse::<Operator>().ok().map(InputEvent::Operator)
        }
        '=' | '\n' | '\r' => Some(InputEvent::Equals),
        '%' => Some(InputEvent::Percent),
        's' | '~' => Some(InputEvent::ToggleSign),
        'c' | '\u{8}' | '\u{7f}' | '\u{1b}' => Some(InputEvent::Clear),
        _ => None,
    }
}

/// Error for a script entry that does not map to a keypad event.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Script entries are single key characters.
    #[error("script entries must be single key characters, got {0:?}")]
    NotASingleKey(String),
    /// The key has no engine event.
    #[error("key {0:?} does not map to a keypad event")]
    Unmapped(char),
}

/// Map a script entry to its engine event. Unlike interactive input,
/// unknown keys in a script are errors.
pub fn script_event(entry: &str) -> Result<InputEvent, KeyError> {
    let mut chars = entry.chars();
    let (Some(key), None) = (chars.next(), chars.next()) else {
        return Err(KeyError::NotASingleKey(entry.to_string()));
    };
    event_for(key).ok_or(KeyError::Unmapped(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_digit_events() {
        for digit in '0'..='9' {
            assert_eq!(event_for(digit), Some(InputEvent::Digit(digit)));
        }
    }

    #[test]
    fn keyboard_operators_map_to_their_operations() {
        assert_eq!(event_for('+'), Some(InputEvent::Operator(Operator::Add)));
        assert_eq!(event_for('-'), Some(InputEvent::Operator(Operator::Subtract)));
        assert_eq!(event_for('*'), Some(InputEvent::Operator(Operator::Multiply)));
        assert_eq!(event_for('/'), Some(InputEvent::Operator(Operator::Divide)));
    }

    #[test]
    fn keypad_glyphs_are_operator_aliases() {
        assert_eq!(event_for('x'), Some(InputEvent::Operator(Operator::Multiply)));
        assert_eq!(event_for('÷'), Some(InputEvent::Operator(Operator::Divide)));
    }

    #[test]
    fn enter_and_equals_both_compute() {
        assert_eq!(event_for('='), Some(InputEvent::Equals));
        assert_eq!(event_for('\n'), Some(InputEvent::Equals));
        assert_eq!(event_for('\r'), Some(InputEvent::Equals));
    }

    #[test]
    fn backspace_and_escape_both_clear() {
        assert_eq!(event_for('c'), Some(InputEvent::Clear));
        assert_eq!(event_for('\u{8}'), Some(InputEvent::Clear));
        assert_eq!(event_for('\u{1b}'), Some(InputEvent::Clear));
    }

    #[test]
    fn unmapped_keys_are_ignored_interactively() {
        assert_eq!(event_for('a'), None);
        assert_eq!(event_for('!'), None);
    }

    #[test]
    fn script_entries_must_be_known_single_keys() {
        assert_eq!(script_event("5").unwrap(), InputEvent::Digit('5'));
        assert!(matches!(script_event("55"), Err(KeyError::NotASingleKey(_))));
        assert!(matches!(script_event(""), Err(KeyError::NotASingleKey(_))));
        assert!(matches!(script_event("a"), Err(KeyError::Unmapped('a'))));
    }
}
