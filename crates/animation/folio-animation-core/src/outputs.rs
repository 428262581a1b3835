//! Output contracts from the staged animations.
//!
//! Timer-driven components return the events each callback produced so
//! adapters (wasm, tests) can forward them without registering closures.

use serde::{Deserialize, Serialize};

use crate::printer::PrinterPhase;

/// Discrete signals emitted while advancing a staged animation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CoreEvent {
    /// A sequencer stage was entered `at_ms` after the trigger.
    StageEntered {
        stage: String,
        index: usize,
        at_ms: f64,
    },
    /// The final stage ran; the sequencer is idle again.
    SequenceCompleted { at_ms: f64 },
    SequenceCancelled,
    /// The printer moved to a new phase.
    PhaseChanged { phase: PrinterPhase },
    /// The hero greeting grew by one character.
    GreetingTyped { text: String },
    /// The hero intro finished; the cipher heading may start.
    CipherReady,
}
