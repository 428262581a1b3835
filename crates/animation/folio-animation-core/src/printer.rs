//! The printer/paper animation shown beside the hero.
//!
//! Clicking the printer runs the stage table (compress → paper-slide →
//! print-lines → complete). A single [`PrinterPhase`] replaces the separate
//! animating/sliding/printing flags, so combinations such as "printing but
//! not animating" cannot be represented.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ids::TimerId;
use crate::outputs::CoreEvent;
use crate::sequencer::{
    Sequencer, StageTable, STAGE_COMPLETE, STAGE_COMPRESS, STAGE_PAPER_SLIDE, STAGE_PRINT_LINES,
};
use crate::ticker::{Clock, VirtualClock};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterPhase {
    #[default]
    Idle,
    Compressing,
    Sliding,
    Printing,
    /// Held only while the completion is dispatched.
    Done,
}

impl PrinterPhase {
    pub fn for_stage(name: &str) -> Option<Self> {
        match name {
            STAGE_COMPRESS => Some(Self::Compressing),
            STAGE_PAPER_SLIDE => Some(Self::Sliding),
            STAGE_PRINT_LINES => Some(Self::Printing),
            STAGE_COMPLETE => Some(Self::Done),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Compressing => "compressing",
            Self::Sliding => "sliding",
            Self::Printing => "printing",
            Self::Done => "done",
        }
    }

    pub fn is_animating(self) -> bool {
        self != Self::Idle
    }

    pub fn paper_visible(self) -> bool {
        matches!(self, Self::Sliding | Self::Printing | Self::Done)
    }
}

pub(crate) fn check_stage_names(table: &StageTable) -> Result<(), ConfigError> {
    match table
        .stages()
        .iter()
        .find(|s| PrinterPhase::for_stage(&s.name).is_none())
    {
        Some(unknown) => Err(ConfigError::UnknownStage {
            name: unknown.name.clone(),
        }),
        None => Ok(()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperLineKind {
    Heading,
    Subtitle,
    Rule,
}

/// One line on the printed page, revealed `delay_ms` after the paper
/// starts sliding out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperLine {
    pub kind: PaperLineKind,
    pub delay_ms: u32,
}

const fn line(kind: PaperLineKind, delay_ms: u32) -> PaperLine {
    PaperLine { kind, delay_ms }
}

pub const PAPER_LINES: [PaperLine; 10] = [
    line(PaperLineKind::Heading, 500),
    line(PaperLineKind::Subtitle, 800),
    line(PaperLineKind::Rule, 1100),
    line(PaperLineKind::Rule, 1300),
    line(PaperLineKind::Rule, 1500),
    line(PaperLineKind::Rule, 1700),
    line(PaperLineKind::Rule, 1900),
    line(PaperLineKind::Rule, 2100),
    line(PaperLineKind::Rule, 2300),
    line(PaperLineKind::Rule, 2500),
];

/// Lines printed `ms_since_slide` after the paper appeared.
pub fn printed_lines(ms_since_slide: f64) -> usize {
    PAPER_LINES
        .iter()
        .take_while(|l| f64::from(l.delay_ms) <= ms_since_slide)
        .count()
}

type CompleteHook = Box<dyn FnMut()>;

pub struct AnimatedPrinter<C> {
    seq: Sequencer<C>,
    phase: PrinterPhase,
    on_complete: Option<CompleteHook>,
}

impl<C: std::fmt::Debug> std::fmt::Debug for AnimatedPrinter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedPrinter")
            .field("seq", &self.seq)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl<C: Clock> AnimatedPrinter<C> {
    /// Printer with the default stage table.
    pub fn new(clock: C) -> Self {
        Self {
            seq: Sequencer::from_validated(StageTable::printer(), clock),
            phase: PrinterPhase::Idle,
            on_complete: None,
        }
    }

    /// Printer with custom timings. Every stage must be a printer stage.
    pub fn with_table(table: StageTable, clock: C) -> Result<Self, ConfigError> {
        check_stage_names(&table)?;
        Ok(Self {
            seq: Sequencer::new(table, clock)?,
            phase: PrinterPhase::Idle,
            on_complete: None,
        })
    }

    /// Called once per run while the phase is `Done` (the page opens the
    /// resume modal here).
    pub fn with_completion(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Click on the printer. Ignored (no events) while a run is in flight.
    pub fn click(&mut self) -> Vec<CoreEvent> {
        match self.seq.trigger() {
            Some(events) => self.absorb(events),
            None => Vec::new(),
        }
    }

    pub fn on_timer(&mut self, id: TimerId) -> Vec<CoreEvent> {
        let events = self.seq.on_timer(id);
        self.absorb(events)
    }

    /// Abort the run in flight (unmount). Returns the resulting events.
    pub fn cancel(&mut self) -> Vec<CoreEvent> {
        if !self.seq.cancel() {
            return Vec::new();
        }
        self.phase = PrinterPhase::Idle;
        vec![
            CoreEvent::SequenceCancelled,
            CoreEvent::PhaseChanged {
                phase: PrinterPhase::Idle,
            },
        ]
    }

    fn absorb(&mut self, events: Vec<CoreEvent>) -> Vec<CoreEvent> {
        let mut out = Vec::with_capacity(events.len() * 2);
        for event in events {
            let completed = matches!(event, CoreEvent::SequenceCompleted { .. });
            let next = match &event {
                CoreEvent::StageEntered { stage, .. } => PrinterPhase::for_stage(stage),
                _ => None,
            };
            out.push(event);
            if let Some(phase) = next {
                self.set_phase(phase, &mut out);
            }
            if completed {
                self.set_phase(PrinterPhase::Done, &mut out);
                if let Some(hook) = self.on_complete.as_mut() {
                    hook();
                }
                debug!("printer: run complete");
                self.set_phase(PrinterPhase::Idle, &mut out);
            }
        }
        out
    }

    fn set_phase(&mut self, phase: PrinterPhase, out: &mut Vec<CoreEvent>) {
        if self.phase != phase {
            self.phase = phase;
            out.push(CoreEvent::PhaseChanged { phase });
        }
    }

    pub fn phase(&self) -> PrinterPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    pub fn paper_visible(&self) -> bool {
        self.phase.paper_visible()
    }

    /// Lines currently printed on the paper.
    pub fn printed_lines(&self) -> usize {
        match self.phase {
            PrinterPhase::Done => return PAPER_LINES.len(),
            phase if !phase.paper_visible() => return 0,
            _ => {}
        }
        let slide_ms = self
            .seq
            .table()
            .get(STAGE_PAPER_SLIDE)
            .map_or(0, |s| s.delay_ms);
        let elapsed = self.seq.elapsed_ms().unwrap_or(0.0);
        printed_lines(elapsed - f64::from(slide_ms))
    }

    pub fn sequencer(&self) -> &Sequencer<C> {
        &self.seq
    }
}

impl AnimatedPrinter<VirtualClock> {
    pub fn advance(&mut self, dt_ms: f64) -> Vec<CoreEvent> {
        let events = self.seq.advance(dt_ms);
        self.absorb(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::Stage;

    #[test]
    fn stage_names_map_to_phases() {
        assert_eq!(
            PrinterPhase::for_stage("paper-slide"),
            Some(PrinterPhase::Sliding)
        );
        assert_eq!(PrinterPhase::for_stage("bogus"), None);
        assert!(!PrinterPhase::Compressing.paper_visible());
        assert!(PrinterPhase::Printing.paper_visible());
    }

    #[test]
    fn rejects_foreign_stage_names() {
        let table = StageTable::new(vec![Stage::new("compress", 0), Stage::new("spin", 100)])
            .unwrap();
        assert_eq!(
            AnimatedPrinter::with_table(table, VirtualClock::new()).err(),
            Some(ConfigError::UnknownStage {
                name: "spin".into()
            })
        );
    }

    #[test]
    fn paper_lines_follow_schedule() {
        assert_eq!(printed_lines(-1.0), 0);
        assert_eq!(printed_lines(499.0), 0);
        assert_eq!(printed_lines(500.0), 1);
        assert_eq!(printed_lines(1_100.0), 3);
        assert_eq!(printed_lines(10_000.0), PAPER_LINES.len());
    }

    #[test]
    fn printed_lines_track_elapsed_time() {
        let mut p = AnimatedPrinter::new(VirtualClock::new());
        p.click();
        assert_eq!(p.printed_lines(), 0);
        p.advance(800.0);
        assert!(p.paper_visible());
        assert_eq!(p.printed_lines(), 0);
        p.advance(1_100.0);
        assert_eq!(p.printed_lines(), 3);
    }

    #[test]
    fn done_phase_shows_the_whole_page() {
        let mut p = AnimatedPrinter::new(VirtualClock::new());
        p.click();
        p.advance(4_000.0);
        assert!(!p.sequencer().is_running());
        assert_eq!(p.printed_lines(), 0);

        // Completion dispatch runs with the run already reset.
        p.phase = PrinterPhase::Done;
        assert_eq!(p.printed_lines(), PAPER_LINES.len());
    }
}
