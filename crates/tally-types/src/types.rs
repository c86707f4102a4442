use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four keypad arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Sum of both operands
    Add,
    /// Left operand minus right operand
    Subtract,
    /// Product of both operands
    Multiply,
    /// Left operand divided by right operand
    Divide,
}

impl Operator {
    /// Apply the operation to `(lhs, rhs)` in that order, with native
    /// float semantics. Division by zero yields `inf`/`NaN`, never an
    /// error.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    /// The glyph shown on the matching keypad button.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => 'x',
            Operator::Divide => '÷',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when a string does not name an operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized operator symbol: '{0}'")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    /// Accepts the keyboard characters (`+ - * /`) as well as the keypad
    /// glyphs (`x`, `÷`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" | "x" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}

/// A discrete keypad event delivered to the engine by an input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// A digit key, `'0'..='9'`
    Digit(char),
    /// The decimal-point key
    DecimalPoint,
    /// One of the four operator keys
    Operator(Operator),
    /// The equals key
    Equals,
    /// The percent key
    Percent,
    /// The sign-toggle key
    ToggleSign,
    /// The clear key
    Clear,
}

/// Font-size tier for the rendered display text, derived purely from its
/// character length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTier {
    /// Up to 9 characters
    Large,
    /// 10 to 14 characters
    Medium,
    /// 15 to 17 characters
    Small,
    /// 18 characters and up
    Tiny,
}

impl DisplayTier {
    /// Tier for a rendered string, measured in characters.
    pub fn for_text(text: &str) -> Self {
        Self::for_len(text.chars().count())
    }

    /// Tier for a rendered length.
    pub fn for_len(len: usize) -> Self {
        if len > 17 {
            DisplayTier::Tiny
        } else if len > 14 {
            DisplayTier::Small
        } else if len > 9 {
            DisplayTier::Medium
        } else {
            DisplayTier::Large
        }
    }

    /// Style class a render adapter applies for this tier.
    pub fn style_class(self) -> &'static str {
        match self {
            DisplayTier::Large => "text-4xl",
            DisplayTier::Medium => "text-2xl",
            DisplayTier::Small => "text-xl",
            DisplayTier::Tiny => "text-lg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_applies_native_float_semantics() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.apply(2.0, 3.5), 7.0);
        assert_eq!(Operator::Divide.apply(7.0, 2.0), 3.5);
    }

    #[test]
    fn divide_by_zero_is_not_an_error() {
        assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn operator_parses_keyboard_and_keypad_symbols() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("-".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Divide);

        let err = "^".parse::<Operator>().unwrap_err();
        assert_eq!(err, ParseOperatorError("^".to_string()));
    }

    #[test]
    fn tier_thresholds_sit_at_9_14_and_17_characters() {
        assert_eq!(DisplayTier::for_len(1), DisplayTier::Large);
        assert_eq!(DisplayTier::for_len(9), DisplayTier::Large);
        assert_eq!(DisplayTier::for_len(10), DisplayTier::Medium);
        assert_eq!(DisplayTier::for_len(14), DisplayTier::Medium);
        assert_eq!(DisplayTier::for_len(15), DisplayTier::Small);
        assert_eq!(DisplayTier::for_len(17), DisplayTier::Small);
        assert_eq!(DisplayTier::for_len(18), DisplayTier::Tiny);
        assert_eq!(DisplayTier::for_len(25), DisplayTier::Tiny);
    }

    #[test]
    fn tier_length_is_measured_in_characters() {
        assert_eq!(DisplayTier::for_text("0.5"), DisplayTier::Large);
        assert_eq!(DisplayTier::for_text("1234567890"), DisplayTier::Medium);
    }
}
