//! Stdout render sinks for the terminal front-end.

use tally_engine::{DisplaySink, KeypadHighlightSink};
use tally_types::{DisplayTier, Operator};
use tracing::debug;

/// Display sink that prints each frame as `text  [style-class]`.
#[derive(Debug, Default)]
pub struct StdoutDisplay;

impl DisplaySink for StdoutDisplay {
    fn show(&mut self, text: &str, tier: DisplayTier) {
        println!("{text}  [{}]", tier.style_class());
    }
}

/// Display sink that prints each frame as one JSON object per line.
#[derive(Debug, Default)]
pub struct JsonDisplay;

impl DisplaySink for JsonDisplay {
    fn show(&mut self, text: &str, tier: DisplayTier) {
        println!(
            "{}",
            serde_json::json!({ "text": text, "class": tier.style_class() })
        );
    }
}

/// Highlight sink that mirrors operator-key highlighting into the log,
/// since a line-oriented terminal has no buttons to mark.
#[derive(Debug, Default)]
pub struct LogHighlight;

impl KeypadHighlightSink for LogHighlight {
    fn clear_highlight(&mut self) {
        debug!("clearing operator highlight");
    }

    fn highlight(&mut self, op: Operator) {
        debug!(operator = %op, "highlighting operator key");
    }
}
