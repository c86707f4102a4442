//! Tally Prelude
//!
//! This crate re-exports the most frequently used public items from the
//! Tally ecosystem (currently `tally-engine` and `tally-types`).
//! Down-stream adapters can depend on `tally-prelude` to avoid long
//! import lists and to stay insulated from internal module reshuffles.

#![deny(warnings)]
#![deny(missing_docs)]

// Re-export the engine & sink seam ------------------------------------------------------------

pub use tally_engine::{
    DisplaySink, KeypadHighlightSink, NoHighlight, NullDisplay, RecordingDisplay,
    RecordingHighlight, TallyEngine,
};

// Shared keypad vocabulary --------------------------------------------------------------------

pub use tally_types::{DisplayTier, InputEvent, Operator, ParseOperatorError};

// When new crates expose stable public APIs, add re-exports here in a backwards-compatible
// manner.
