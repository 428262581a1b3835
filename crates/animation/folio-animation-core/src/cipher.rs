//! Cipher reveal: scrambled noise that resolves into a target string.
//!
//! Each acting tick the frontier character either locks in (a Bernoulli
//! roll, or forced once the per-position frame budget runs out) or is
//! rescrambled; everything right of the frontier is rescrambled too.
//! Positions left of the frontier never change again.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::CipherConfig;
use crate::error::ConfigError;
use crate::ids::FrameId;
use crate::random::RandomSource;
use crate::ticker::{Ticker, VirtualTicker};

/// Per-animation state.
///
/// Invariant: `revealed[i]` holds exactly for `i < frontier`, and those
/// positions display `target[i]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherState {
    pub target: Vec<char>,
    pub revealed: Vec<bool>,
    pub displayed: Vec<char>,
    pub frontier: usize,
    pub frame_count: u64,
}

impl CipherState {
    fn new(target: Vec<char>) -> Self {
        let len = target.len();
        Self {
            displayed: vec![' '; len],
            revealed: vec![false; len],
            target,
            frontier: 0,
            frame_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.frontier == self.target.len()
    }

    pub fn displayed_text(&self) -> String {
        self.displayed.iter().collect()
    }
}

/// Renderer-facing snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherFrame {
    pub text: String,
    pub revealed: Vec<bool>,
    pub complete: bool,
}

/// What one frame callback did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickResult {
    /// Not our frame (stale, cancelled, or nothing running).
    Ignored,
    /// Off-cadence tick; nothing changed.
    Skipped,
    /// Frontier rolled and stayed scrambled.
    Scrambled,
    /// Frontier locked in at `index`.
    Locked { index: usize, forced: bool },
    /// Last position locked; no further frames requested.
    Completed,
}

impl TickResult {
    /// Whether this tick ran the reveal step.
    pub fn acted(self) -> bool {
        matches!(
            self,
            TickResult::Scrambled | TickResult::Locked { .. } | TickResult::Completed
        )
    }
}

/// Cipher reveal engine driven by an injected [`Ticker`] and [`RandomSource`].
#[derive(Debug)]
pub struct CipherReveal<T, R> {
    cfg: CipherConfig,
    alphabet: Vec<char>,
    ticker: T,
    rng: R,
    state: CipherState,
    pending: Option<FrameId>,
    started: bool,
}

impl<T: Ticker, R: RandomSource> CipherReveal<T, R> {
    pub fn new(cfg: CipherConfig, ticker: T, rng: R) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            alphabet: cfg.alphabet.chars().collect(),
            cfg,
            ticker,
            rng,
            state: CipherState::default(),
            pending: None,
            started: false,
        })
    }

    /// Begin revealing `target`, discarding any animation in progress.
    ///
    /// An empty target is complete on return and requests no frame.
    pub fn start(&mut self, target: &str) {
        self.cancel_pending();
        self.started = true;
        self.state = CipherState::new(target.chars().collect());
        if self.state.is_empty() {
            debug!("cipher: empty target, nothing to reveal");
            return;
        }
        let Self {
            state,
            rng,
            alphabet,
            ..
        } = self;
        for slot in state.displayed.iter_mut() {
            *slot = rng.sample_char(alphabet);
        }
        self.pending = Some(self.ticker.request_frame());
        debug!("cipher: started, {} chars", self.state.len());
    }

    /// Cancel the pending frame. The state freezes where it is.
    pub fn stop(&mut self) {
        if self.cancel_pending() {
            debug!(
                "cipher: stopped at {}/{}",
                self.state.frontier,
                self.state.len()
            );
        }
    }

    /// Handle a frame callback from the host.
    pub fn on_frame(&mut self, id: FrameId) -> TickResult {
        if self.pending != Some(id) {
            return TickResult::Ignored;
        }
        self.pending = None;
        let result = self.tick();
        if !self.state.is_complete() {
            self.pending = Some(self.ticker.request_frame());
        }
        result
    }

    fn tick(&mut self) -> TickResult {
        let Self {
            cfg,
            alphabet,
            rng,
            state,
            ..
        } = self;
        state.frame_count += 1;
        if state.frame_count % cfg.tick_divisor != 0 {
            return TickResult::Skipped;
        }

        let at = state.frontier;
        let rolled = rng.chance(cfg.lock_probability);
        // Saturates: a huge budget means lock-in is never forced.
        let forced = state.frame_count > (at as u64 + 1).saturating_mul(cfg.frame_budget);
        let locked = rolled || forced;
        if locked {
            state.revealed[at] = true;
            state.displayed[at] = state.target[at];
            state.frontier += 1;
        } else {
            state.displayed[at] = rng.sample_char(alphabet);
        }
        for slot in state.displayed.iter_mut().skip(at + 1) {
            *slot = rng.sample_char(alphabet);
        }

        if state.is_complete() {
            debug!("cipher: complete after {} frames", state.frame_count);
            TickResult::Completed
        } else if locked {
            trace!("cipher: locked {at} (forced: {})", forced && !rolled);
            TickResult::Locked {
                index: at,
                forced: forced && !rolled,
            }
        } else {
            TickResult::Scrambled
        }
    }

    fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(id) => {
                self.ticker.cancel_frame(id);
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// True once a started animation has revealed every character.
    pub fn is_complete(&self) -> bool {
        self.started && self.state.is_complete()
    }

    pub fn state(&self) -> &CipherState {
        &self.state
    }

    pub fn frame(&self) -> CipherFrame {
        CipherFrame {
            text: self.state.displayed_text(),
            revealed: self.state.revealed.clone(),
            complete: self.is_complete(),
        }
    }

    pub fn config(&self) -> &CipherConfig {
        &self.cfg
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }
}

impl<R: RandomSource> CipherReveal<VirtualTicker, R> {
    /// Fire the pending virtual frame, if any.
    pub fn step(&mut self) -> TickResult {
        match self.ticker.fire() {
            Some(id) => self.on_frame(id),
            None => TickResult::Ignored,
        }
    }

    /// Step until complete or `max_frames` frames have fired.
    /// Returns the number of frames fired.
    pub fn run_to_completion(&mut self, max_frames: u64) -> u64 {
        let mut fired = 0;
        while fired < max_frames && self.ticker.pending().is_some() {
            self.step();
            fired += 1;
        }
        fired
    }
}
