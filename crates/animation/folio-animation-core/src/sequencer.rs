//! Staged animation sequencer.
//!
//! A fixed table of named stages, each entered once per run after its delay
//! from the trigger instant. Entering the last stage completes the run:
//! the completion hook fires and every stage flag resets, ready for the next
//! trigger. Triggering while a run is in flight does nothing.

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ids::TimerId;
use crate::outputs::CoreEvent;
use crate::ticker::{Clock, VirtualClock};

pub const STAGE_COMPRESS: &str = "compress";
pub const STAGE_PAPER_SLIDE: &str = "paper-slide";
pub const STAGE_PRINT_LINES: &str = "print-lines";
pub const STAGE_COMPLETE: &str = "complete";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    /// Delay from the trigger instant.
    pub delay_ms: u32,
}

impl Stage {
    pub fn new(name: impl Into<String>, delay_ms: u32) -> Self {
        Self {
            name: name.into(),
            delay_ms,
        }
    }
}

/// Ordered stage list. Names are unique and delays strictly increase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageTable {
    stages: Vec<Stage>,
}

impl StageTable {
    pub fn new(stages: Vec<Stage>) -> Result<Self, ConfigError> {
        let table = Self { stages };
        table.validate()?;
        Ok(table)
    }

    /// compress → paper-slide → print-lines → complete.
    pub fn printer() -> Self {
        Self {
            stages: vec![
                Stage::new(STAGE_COMPRESS, 0),
                Stage::new(STAGE_PAPER_SLIDE, 800),
                Stage::new(STAGE_PRINT_LINES, 1500),
                Stage::new(STAGE_COMPLETE, 4000),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.is_empty() {
            return Err(ConfigError::EmptyStageTable);
        }
        for (i, stage) in self.stages.iter().enumerate() {
            if self.stages[..i].iter().any(|s| s.name == stage.name) {
                return Err(ConfigError::DuplicateStage {
                    name: stage.name.clone(),
                });
            }
            if let Some(prev) = i.checked_sub(1).map(|p| &self.stages[p]) {
                if stage.delay_ms <= prev.delay_ms {
                    return Err(ConfigError::StageOrder {
                        name: stage.name.clone(),
                        delay_ms: stage.delay_ms,
                        previous_ms: prev.delay_ms,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.name == name)
    }

    /// Delay of the final stage, i.e. the length of one run.
    pub fn total_ms(&self) -> u32 {
        self.stages.last().map_or(0, |s| s.delay_ms)
    }
}

impl Default for StageTable {
    fn default() -> Self {
        Self::printer()
    }
}

type StageHook = Box<dyn FnMut(&Stage)>;
type CompleteHook = Box<dyn FnMut()>;

/// State of one in-flight run.
#[derive(Debug)]
struct Run {
    started_ms: f64,
    entered: Vec<bool>,
    active: Option<usize>,
    timers: Vec<(TimerId, usize)>,
}

/// Stage sequencer driven by an injected [`Clock`].
pub struct Sequencer<C> {
    table: StageTable,
    clock: C,
    run: Option<Run>,
    on_stage: Option<StageHook>,
    on_complete: Option<CompleteHook>,
}

impl<C: fmt::Debug> fmt::Debug for Sequencer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequencer")
            .field("table", &self.table)
            .field("clock", &self.clock)
            .field("run", &self.run)
            .finish_non_exhaustive()
    }
}

impl<C: Clock> Sequencer<C> {
    pub fn new(table: StageTable, clock: C) -> Result<Self, ConfigError> {
        table.validate()?;
        Ok(Self::from_validated(table, clock))
    }

    // Caller guarantees `table` already passed validation.
    pub(crate) fn from_validated(table: StageTable, clock: C) -> Self {
        Self {
            table,
            clock,
            run: None,
            on_stage: None,
            on_complete: None,
        }
    }

    /// Register a hook called as each stage is entered.
    pub fn with_stage_hook(mut self, hook: impl FnMut(&Stage) + 'static) -> Self {
        self.on_stage = Some(Box::new(hook));
        self
    }

    /// Register a hook called once per run, after the final stage is entered
    /// and before the flags reset.
    pub fn with_completion(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Start a run. Returns `None` if one is already in flight.
    ///
    /// Zero-delay stages are entered before this returns; their events are
    /// in the returned list.
    pub fn trigger(&mut self) -> Option<Vec<CoreEvent>> {
        if self.run.is_some() {
            trace!("sequencer: trigger ignored, already running");
            return None;
        }
        let mut run = Run {
            started_ms: self.clock.now_ms(),
            entered: vec![false; self.table.len()],
            active: None,
            timers: Vec::new(),
        };
        let mut immediate = None;
        for (idx, stage) in self.table.stages().iter().enumerate() {
            if stage.delay_ms == 0 {
                immediate = Some(idx);
            } else {
                run.timers.push((self.clock.set_timeout(stage.delay_ms), idx));
            }
        }
        self.run = Some(run);
        debug!("sequencer: triggered, {} stages", self.table.len());

        let mut events = Vec::new();
        if let Some(idx) = immediate {
            self.enter_through(idx, &mut events);
        }
        Some(events)
    }

    /// Handle a timer callback from the host. Unknown ids yield no events.
    pub fn on_timer(&mut self, id: TimerId) -> Vec<CoreEvent> {
        let mut events = Vec::new();
        let Some(run) = self.run.as_mut() else {
            return events;
        };
        let Some(pos) = run.timers.iter().position(|(t, _)| *t == id) else {
            return events;
        };
        let (_, idx) = run.timers.remove(pos);
        self.enter_through(idx, &mut events);
        events
    }

    /// Cancel the run in flight, clearing every outstanding timer.
    /// Returns false if nothing was running.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.reset();
        if cancelled {
            debug!("sequencer: cancelled");
        }
        cancelled
    }

    fn reset(&mut self) -> bool {
        let Some(run) = self.run.take() else {
            return false;
        };
        for (id, _) in run.timers {
            self.clock.clear_timeout(id);
        }
        true
    }

    // Enter every not-yet-entered stage up to and including `idx`, in table
    // order, so a late or reordered host callback cannot skip a stage.
    fn enter_through(&mut self, idx: usize, events: &mut Vec<CoreEvent>) {
        let last = self.table.len() - 1;
        for i in 0..=idx {
            let Some(run) = self.run.as_mut() else {
                return;
            };
            if run.entered[i] {
                continue;
            }
            if let Some(pos) = run.timers.iter().position(|(_, s)| *s == i) {
                let (id, _) = run.timers.remove(pos);
                self.clock.clear_timeout(id);
            }
            run.entered[i] = true;
            run.active = Some(i);
            let at_ms = self.clock.now_ms() - run.started_ms;
            let stage = &self.table.stages()[i];
            trace!("sequencer: entered {} at {at_ms}ms", stage.name);
            events.push(CoreEvent::StageEntered {
                stage: stage.name.clone(),
                index: i,
                at_ms,
            });
            if let Some(hook) = self.on_stage.as_mut() {
                hook(stage);
            }
            if i == last {
                if let Some(hook) = self.on_complete.as_mut() {
                    hook();
                }
                events.push(CoreEvent::SequenceCompleted { at_ms });
                self.reset();
                debug!("sequencer: completed after {at_ms}ms");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn active_stage(&self) -> Option<&Stage> {
        let idx = self.run.as_ref()?.active?;
        self.table.stages().get(idx)
    }

    /// Whether `name` has been entered in the current run.
    pub fn is_entered(&self, name: &str) -> bool {
        match (&self.run, self.table.position(name)) {
            (Some(run), Some(idx)) => run.entered[idx],
            _ => false,
        }
    }

    /// Time since the trigger, or `None` when idle.
    pub fn elapsed_ms(&self) -> Option<f64> {
        self.run
            .as_ref()
            .map(|run| self.clock.now_ms() - run.started_ms)
    }

    pub fn table(&self) -> &StageTable {
        &self.table
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

impl Sequencer<VirtualClock> {
    /// Move the virtual clock forward by `dt_ms`, firing due stages in order.
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
