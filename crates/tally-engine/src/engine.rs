use tracing::{debug, instrument};

use tally_types::{DisplayTier, InputEvent, Operator};

use crate::display::{format_entry, stringify};
use crate::sink::{DisplaySink, KeypadHighlightSink, NoHighlight};

/// Digits allowed in a single operand, not counting the decimal point.
const MAX_ENTRY_DIGITS: usize = 19;

/// Keypad calculator state machine.
///
/// The engine holds the operand currently being typed, at most one pending
/// binary operation, and a flag marking that the next digit starts a fresh
/// operand. It is bound at construction to one display sink and one
/// operator-highlight sink, and notifies them synchronously from every
/// mutating operation. Invalid input never errors; it is absorbed as a
/// silent no-op.
pub struct TallyEngine {
    /// Operand being typed: digits and at most one `.`; `""` only
    /// transiently between an operator and the next digit.
    current_entry: String,
    /// Operand captured before an operator was chosen; `""` means no
    /// pending computation.
    pending_operand: String,
    pending_operator: Option<Operator>,
    /// Set after a computation or percentage: the next digit overwrites
    /// rather than extends the entry.
    reset_on_next_digit: bool,
    /// Operator currently mirrored to the highlight sink.
    active_operator: Option<Operator>,
    display: Box<dyn DisplaySink>,
    highlight: Box<dyn KeypadHighlightSink>,
}

impl TallyEngine {
    /// Create an engine bound to a display sink, with operator
    /// highlighting disabled.
    pub fn new(display: Box<dyn DisplaySink>) -> Self {
        Self::with_highlight(display, Box::new(NoHighlight))
    }

    /// Create an engine bound to a display sink and an operator-highlight
    /// sink. The initial `0` frame is rendered immediately.
    pub fn with_highlight(
        display: Box<dyn DisplaySink>,
        highlight: Box<dyn KeypadHighlightSink>,
    ) -> Self {
        let mut engine = Self {
            current_entry: String::new(),
            pending_operand: String::new(),
            pending_operator: None,
            reset_on_next_digit: false,
            active_operator: None,
            display,
            highlight,
        };
        engine.clear();
        engine
    }

    /// Route one adapter event to the matching operation.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit(digit) => self.press_digit(digit),
            InputEvent::DecimalPoint => self.press_decimal(),
            InputEvent::Operator(op) => self.choose_operator(op),
            InputEvent::Equals => self.compute(),
            InputEvent::Percent => self.apply_percentage(),
            InputEvent::ToggleSign => self.toggle_sign(),
            InputEvent::Clear => self.clear(),
        }
    }

    /// Reset all state to its initial values and re-render the display.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        debug!("resetting entry state");

        self.current_entry = "0".to_string();
        self.pending_operand.clear();
        self.pending_operator = None;
        self.reset_on_next_digit = false;
        self.refresh_display();
    }

    /// Append a digit to the current entry, managing leading zeros and the
    /// digit cap. Non-digit characters are ignored.
    pub fn press_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }

        if self.reset_on_next_digit {
            self.current_entry.clear();
            self.reset_on_next_digit = false;
        }

        let digits_entered = self.current_entry.chars().filter(|c| *c != '.').count();
        if digits_entered >= MAX_ENTRY_DIGITS {
            debug!(entry = %self.current_entry, "digit cap reached, ignoring key");
            return;
        }

        if self.current_entry == "0" {
            if digit == '0' {
                return;
            }
            self.current_entry.clear();
        }

        self.current_entry.push(digit);
        self.refresh_display();
    }

    /// Append the decimal point if the entry does not already contain one.
    pub fn press_decimal(&mut self) {
        if self.current_entry.contains('.') || self.current_entry.len() >= MAX_ENTRY_DIGITS {
            return;
        }

        // An empty entry gets a leading zero so the operand stays parseable.
        if self.current_entry.is_empty() {
            self.current_entry.push_str("0.");
        } else {
            self.current_entry.push('.');
        }

        self.refresh_display();
    }

    /// Queue a binary operation, evaluating any previously queued one
    /// first (left-to-right chaining).
    #[instrument(skip(self))]
    pub fn choose_operator(&mut self, op: Operator) {
        self.highlight.clear_highlight();
        self.highlight.highlight(op);
        self.active_operator = Some(op);

        // No operand typed since the last operator: the user is changing
        // their mind, so re-record without evaluating.
        if self.current_entry.is_empty() {
            self.pending_operator = Some(op);
            return;
        }

        if !self.pending_operand.is_empty() && !self.reset_on_next_digit {
            self.compute();
        }

        self.pending_operator = Some(op);
        self.pending_operand = std::mem::take(&mut self.current_entry);
        self.reset_on_next_digit = false;
    }

    /// Divide the current entry by 100. Behaves like a terminal
    /// computation: the next digit starts a fresh operand.
    pub fn apply_percentage(&mut self) {
        let Ok(value) = self.current_entry.parse::<f64>() else {
            return;
        };

        self.current_entry = stringify(value / 100.0);
        self.reset_on_next_digit = true;
        self.refresh_display();
    }

    /// Invert the sign of the current entry.
    pub fn toggle_sign(&mut self) {
        let Ok(value) = self.current_entry.parse::<f64>() else {
            return;
        };

        self.current_entry = stringify(-value);
        self.refresh_display();
    }

    /// Apply the pending operation to `(pending_operand, current_entry)`.
    /// Division by zero propagates the float `inf`/`NaN` result as the
    /// displayed value.
    #[instrument(skip(self))]
    pub fn compute(&mut self) {
        let Some(op) = self.pending_operator else {
            return;
        };
        let (Ok(lhs), Ok(rhs)) = (
            self.pending_operand.parse::<f64>(),
            self.current_entry.parse::<f64>(),
        ) else {
            return;
        };

        let result = op.apply(lhs, rhs);
        debug!(lhs, operator = %op, rhs, result, "applied pending operation");

        self.current_entry = stringify(result);
        self.pending_operator = None;
        self.pending_operand.clear();
        self.reset_on_next_digit = true;
        self.refresh_display();
    }

    /// The raw operand currently held, before display formatting.
    pub fn entry(&self) -> &str {
        &self.current_entry
    }

    /// The operator currently mirrored to the highlight sink.
    pub fn active_operator(&self) -> Option<Operator> {
        self.active_operator
    }

    fn refresh_display(&mut self) {
        let text = format_entry(&self.current_entry);
        let tier = DisplayTier::for_text(&text);
        self.display.show(&text, tier);
    }
}
