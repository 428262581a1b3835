//! Folio Animation Core (engine-agnostic)
//!
//! Animations behind the portfolio page, written as host-driven state
//! machines. Nothing in this crate owns a real timer or frame loop: the
//! cipher reveal asks a [`Ticker`] for display refreshes and the staged
//! animations ask a [`Clock`] for timeouts. Browser adapters map those onto
//! `requestAnimationFrame`/`setTimeout`; tests use [`VirtualTicker`] and
//! [`VirtualClock`].
//!
//! - [`cipher`]: scrambled text resolving into a target string, left to right.
//! - [`sequencer`]: named stages entered in order after fixed delays.
//! - [`printer`]: the printer/paper animation composed on the sequencer.
//! - [`intro`]: the hero greeting typed out before the cipher starts.

pub mod cipher;
pub mod config;
pub mod error;
pub mod ids;
pub mod intro;
pub mod outputs;
pub mod printer;
pub mod random;
pub mod sequencer;
pub mod ticker;

// Re-exports for consumers (adapters)
pub use cipher::{CipherFrame, CipherReveal, CipherState, TickResult};
pub use config::{CipherConfig, Config, DEFAULT_ALPHABET};
pub use error::ConfigError;
pub use ids::{FrameId, IdAllocator, TimerId};
pub use intro::{HeroIntro, IntroConfig};
pub use outputs::CoreEvent;
pub use printer::{AnimatedPrinter, PaperLine, PaperLineKind, PrinterPhase};
pub use random::{RandomSource, RngSource};
pub use sequencer::{Sequencer, Stage, StageTable};
pub use ticker::{Clock, Ticker, VirtualClock, VirtualTicker};
