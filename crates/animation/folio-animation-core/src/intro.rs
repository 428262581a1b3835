//! Hero intro: the greeting typed out before the cipher heading starts.
//!
//! Timeline after mount: wait `initial_delay_ms`, type one character every
//! `char_interval_ms`, and once the greeting is exhausted wait one more
//! interval plus `settle_delay_ms` before signalling [`CoreEvent::CipherReady`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ids::TimerId;
use crate::outputs::CoreEvent;
use crate::ticker::{Clock, VirtualClock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub greeting: String,
    pub initial_delay_ms: u32,
    pub char_interval_ms: u32,
    pub settle_delay_ms: u32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            greeting: "Hi, I am ".to_string(),
            initial_delay_ms: 1000,
            char_interval_ms: 100,
            settle_delay_ms: 300,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Type,
    Settle,
}

#[derive(Debug)]
pub struct HeroIntro<C> {
    cfg: IntroConfig,
    clock: C,
    greeting: Vec<char>,
    typed: usize,
    mounted: bool,
    ready: bool,
    pending: Option<(TimerId, Step)>,
}

impl<C: Clock> HeroIntro<C> {
    pub fn new(cfg: IntroConfig, clock: C) -> Self {
        Self {
            greeting: cfg.greeting.chars().collect(),
            cfg,
            clock,
            typed: 0,
            mounted: false,
            ready: false,
            pending: None,
        }
    }

    /// Start the intro. Only the first call per instance does anything.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.schedule(self.cfg.initial_delay_ms, Step::Type);
        debug!("intro: mounted");
        true
    }

    pub fn on_timer(&mut self, id: TimerId) -> Vec<CoreEvent> {
        let step = match self.pending {
            Some((pending, step)) if pending == id => step,
            _ => return Vec::new(),
        };
        self.pending = None;
        match step {
            Step::Type if self.typed < self.greeting.len() => {
                self.typed += 1;
                self.schedule(self.cfg.char_interval_ms, Step::Type);
                vec![CoreEvent::GreetingTyped {
                    text: self.greeting_text(),
                }]
            }
            Step::Type => {
                self.schedule(self.cfg.settle_delay_ms, Step::Settle);
                Vec::new()
            }
            Step::Settle => {
                self.ready = true;
                debug!("intro: cipher ready");
                vec![CoreEvent::CipherReady]
            }
        }
    }

    /// Stop any pending step. A cancelled intro does not restart.
    pub fn cancel(&mut self) {
        if let Some((id, _)) = self.pending.take() {
            self.clock.clear_timeout(id);
        }
    }

    fn schedule(&mut self, delay_ms: u32, step: Step) {
        self.pending = Some((self.clock.set_timeout(delay_ms), step));
    }

    pub fn greeting_text(&self) -> String {
        self.greeting[..self.typed].iter().collect()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl HeroIntro<VirtualClock> {
    pub fn advance(&mut self, dt_ms: f64) -> Vec<CoreEvent> {
        let until = self.clock.now_ms() + dt_ms;
        let mut events = Vec::new();
        while let Some(id) = self.clock.pop_due(until) {
            events.extend(self.on_timer(id));
        }
        self.clock.settle(until);
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_is_one_shot() {
        let mut intro = HeroIntro::new(IntroConfig::default(), VirtualClock::new());
        assert!(intro.mount());
        assert!(!intro.mount());
        assert_eq!(intro.clock().pending_count(), 1);
    }

    #[test]
    fn nothing_before_initial_delay() {
        let mut intro = HeroIntro::new(IntroConfig::default(), VirtualClock::new());
        intro.mount();
        assert!(intro.advance(999.0).is_empty());
        assert_eq!(intro.greeting_text(), "");
        assert_eq!(
            intro.advance(1.0),
            vec![CoreEvent::GreetingTyped { text: "H".into() }]
        );
    }

    #[test]
    fn cancel_stops_typing() {
        let mut intro = HeroIntro::new(IntroConfig::default(), VirtualClock::new());
        intro.mount();
        intro.advance(1_250.0);
        intro.cancel();
        assert!(intro.advance(10_000.0).is_empty());
        assert!(!intro.is_ready());
        assert_eq!(intro.greeting_text(), "Hi,");
    }
}
