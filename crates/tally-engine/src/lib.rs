#![deny(warnings)]
//! Core state machine for the Tally keypad calculator.
//!
//! This crate provides [`TallyEngine`], the component governing how keypad
//! events mutate numeric-entry state and when a computation is triggered.
//! The engine is decoupled from any rendering technology through the sink
//! traits in [`sink`]: after every mutating operation it hands the
//! formatted operand string and its font-size tier to a [`DisplaySink`],
//! and mirrors operator selection to an optional [`KeypadHighlightSink`].
//!
//! The engine is single-threaded and synchronous: each operation runs to
//! completion before the next, and every invalid input is absorbed as a
//! silent no-op rather than an error.

/// Render-side formatting of operand strings
mod display;
/// The calculator state machine
mod engine;
/// Output-sink traits and stock implementations
pub mod sink;

pub use engine::TallyEngine;
pub use sink::{
    DisplaySink, KeypadHighlightSink, NoHighlight, NullDisplay, RecordingDisplay,
    RecordingHighlight,
};
