//! Output-sink traits decoupling the state machine from rendering.
//!
//! Hosts implement [`DisplaySink`] (and optionally
//! [`KeypadHighlightSink`]) and hand them to the engine at construction.
//! The engine's concurrency model is single-threaded and synchronous, so
//! the traits carry no `Send + Sync` bound and the recording
//! implementations share state through `Rc<RefCell<..>>`.

use std::cell::RefCell;
use std::rc::Rc;

use tally_types::{DisplayTier, Operator};

/// Receives the rendered operand text after every engine mutation.
pub trait DisplaySink {
    /// Render `text` at the given font-size tier.
    fn show(&mut self, text: &str, tier: DisplayTier);
}

/// Receives highlight commands for the operator keys.
///
/// `clear_highlight` is always issued before `highlight`, mirroring a
/// button collection where at most one key is marked at a time.
pub trait KeypadHighlightSink {
    /// Remove the highlight from every operator key.
    fn clear_highlight(&mut self);
    /// Mark the key matching `op` as the active operator.
    fn highlight(&mut self, op: Operator);
}

/// Highlight sink that drops every command, for hosts without operator
/// keys.
#[derive(Debug, Default)]
pub struct NoHighlight;

impl KeypadHighlightSink for NoHighlight {
    fn clear_highlight(&mut self) {}

    fn highlight(&mut self, _op: Operator) {}
}

/// Display sink that discards every frame, for hosts that read the engine
/// state directly (and for benchmarks).
#[derive(Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn show(&mut self, _text: &str, _tier: DisplayTier) {}
}

/// Display sink that records every frame it is shown.
///
/// Cloning yields a second handle onto the same frame list, so a caller
/// can keep one handle and move the other into the engine.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    frames: Rc<RefCell<Vec<(String, DisplayTier)>>>,
}

impl RecordingDisplay {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recently rendered frame, or `""` before the first.
    pub fn last_text(&self) -> String {
        self.frames.borrow().last().map(|(text, _)| text.clone()).unwrap_or_default()
    }

    /// Tier of the most recently rendered frame.
    pub fn last_tier(&self) -> Option<DisplayTier> {
        self.frames.borrow().last().map(|(_, tier)| *tier)
    }

    /// Every frame rendered so far, oldest first.
    pub fn frames(&self) -> Vec<(String, DisplayTier)> {
        self.frames.borrow().clone()
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }
}

impl DisplaySink for RecordingDisplay {
    fn show(&mut self, text: &str, tier: DisplayTier) {
        self.frames.borrow_mut().push((text.to_string(), tier));
    }
}

/// Highlight sink that mirrors the currently highlighted operator key.
#[derive(Debug, Clone, Default)]
pub struct RecordingHighlight {
    active: Rc<RefCell<Option<Operator>>>,
    clears: Rc<RefCell<usize>>,
}

impl RecordingHighlight {
    /// Create a recorder with no key highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operator key currently highlighted, if any.
    pub fn active(&self) -> Option<Operator> {
        *self.active.borrow()
    }

    /// How many clear-all commands have been issued.
    pub fn clear_count(&self) -> usize {
        *self.clears.borrow()
    }
}

impl KeypadHighlightSink for RecordingHighlight {
    fn clear_highlight(&mut self) {
        *self.active.borrow_mut() = None;
        *self.clears.borrow_mut() += 1;
    }

    fn highlight(&mut self, op: Operator) {
        *self.active.borrow_mut() = Some(op);
    }
}
