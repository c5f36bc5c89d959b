use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::config::Timings;
use crate::error::ScareError;
use crate::prompts::PromptBuilder;
use crate::types::{ScareKind, StyleHint};

const YELL_KEYS: [&str; 5] = ["YELL_MSG_1", "YELL_MSG_2", "YELL_MSG_3", "YELL_MSG_4", "YELL_MSG_5"];

/// Injectable randomness for the yell sequence
pub trait RandomSource: Send {
    /// Uniform index in `0..len`
    fn pick(&mut self, len: usize) -> usize;

    /// `true` with the given probability
    fn chance(&mut self, probability: f64) -> bool;
}

/// Adapts any `rand` generator
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        RngSource(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.0.gen_bool(probability.clamp(0.0, 1.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    PowerDown,
    Glitch,
    Bsod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Blank,
    Bsod,
}

/// A single scripted side effect
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Sound(Sound),
    Overlay(Overlay),
    OverlayText(String),
    ClearOverlay,
    Flash,
    /// Window shake amplitude; zero restores the window
    Shake(u32),
    Say { text: String, style: StyleHint },
    EndingPopup { title: String, message: String },
}

/// Wait `delay`, then fire `effect`
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub delay: Duration,
    pub effect: Effect,
}

impl Step {
    pub fn now(effect: Effect) -> Self {
        Self::after(0, effect)
    }

    pub fn after(millis: u64, effect: Effect) -> Self {
        Self {
            delay: Duration::from_millis(millis),
            effect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Scare(ScareKind),
    /// Mission notice followed by the briefing body
    MissionBrief,
    Ending,
}

/// An ordered list of timed steps
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub kind: SequenceKind,
    pub steps: Vec<Step>,
}

impl Sequence {
    pub fn mission_brief(prompts: &PromptBuilder, timings: &Timings) -> Self {
        Self {
            kind: SequenceKind::MissionBrief,
            steps: vec![
                Step::now(Effect::Say {
                    text: prompts.line("MISSION_RECEIVED"),
                    style: StyleHint::Normal,
                }),
                Step::after(
                    timings.mission_brief_delay_ms,
                    Effect::Say {
                        text: prompts.line("INTRO_BODY"),
                        style: StyleHint::Briefing,
                    },
                ),
            ],
        }
    }

    pub fn blank_screen(prompts: &PromptBuilder, timings: &Timings) -> Self {
        Self {
            kind: SequenceKind::Scare(ScareKind::BlankScreen),
            steps: vec![
                Step::now(Effect::Sound(Sound::PowerDown)),
                Step::now(Effect::Overlay(Overlay::Blank)),
                Step::after(
                    timings.blank_glitch_ms,
                    Effect::OverlayText(prompts.line("BLANK_GLITCH_TEXT")),
                ),
                Step::now(Effect::Sound(Sound::Glitch)),
                Step::after(timings.blank_clear_ms, Effect::ClearOverlay),
            ],
        }
    }

    pub fn bsod(prompts: &PromptBuilder, timings: &Timings) -> Self {
        Self {
            kind: SequenceKind::Scare(ScareKind::Bsod),
            steps: vec![
                Step::now(Effect::Sound(Sound::Bsod)),
                Step::now(Effect::Overlay(Overlay::Bsod)),
                Step::now(Effect::OverlayText(prompts.line("BSOD_TEXT"))),
                Step::after(timings.bsod_ms, Effect::ClearOverlay),
            ],
        }
    }

    /// Rapid exclamations with growing shake; randomness is drawn up front
    pub fn yell(prompts: &PromptBuilder, timings: &Timings, rng: &mut dyn RandomSource) -> Self {
        let mut steps = Vec::new();
        for intensity in 1..=timings.yell_ticks {
            let key = YELL_KEYS[rng.pick(YELL_KEYS.len())];
            steps.push(Step::after(
                timings.yell_interval_ms,
                Effect::Say {
                    text: prompts.line(key),
                    style: StyleHint::Yell { intensity },
                },
            ));
            steps.push(Step::now(Effect::Shake(intensity)));
            if rng.chance(timings.flash_probability) {
                steps.push(Step::now(Effect::Flash));
            }
        }
        steps.push(Step::now(Effect::Shake(0)));
        steps.push(Step::now(Effect::Say {
            text: prompts.line("YELL_AFTERMATH"),
            style: StyleHint::Notice,
        }));
        Self {
            kind: SequenceKind::Scare(ScareKind::Yell),
            steps,
        }
    }

    pub fn ending(prompts: &PromptBuilder, timings: &Timings) -> Self {
        let keys = ["ENDING_MSG_1", "ENDING_MSG_2", "ENDING_MSG_3", "ENDING_MSG_4", "ENDING_MSG_5"];
        let mut steps: Vec<Step> = keys
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let delay = if i == 0 {
                    0
                } else {
                    timings.ending_gaps_ms.get(i - 1).copied().unwrap_or(2000)
                };
                Step::after(
                    delay,
                    Effect::Say {
                        text: prompts.line(key),
                        style: StyleHint::Normal,
                    },
                )
            })
            .collect();
        steps.push(Step::after(
            timings.ending_popup_ms,
            Effect::EndingPopup {
                title: prompts.line("ENDING_POPUP_TITLE"),
                message: prompts.line("ENDING_POPUP_MSG"),
            },
        ));
        Self {
            kind: SequenceKind::Ending,
            steps,
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|step| step.delay).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScareStatus {
    Idle,
    Running { kind: SequenceKind, step: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScareOutcome {
    Completed,
    Interrupted,
}

/// Plays one sequence at a time.
///
/// Steps run strictly in order; a second sequence is refused until the first has
/// finished or been interrupted.
pub struct ScareSequencer {
    status: Mutex<ScareStatus>,
    interrupted: AtomicBool,
    rng: Mutex<Box<dyn RandomSource>>,
}

impl ScareSequencer {
    pub fn new(rng: impl RandomSource + 'static) -> Self {
        Self {
            status: Mutex::new(ScareStatus::Idle),
            interrupted: AtomicBool::new(false),
            rng: Mutex::new(Box::new(rng)),
        }
    }

    pub fn status(&self) -> ScareStatus {
        *self.status_guard()
    }

    fn status_guard(&self) -> MutexGuard<'_, ScareStatus> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_running(&self) -> bool {
        self.status() != ScareStatus::Idle
    }

    /// Builds a yell sequence from this sequencer's random source
    pub fn yell(&self, prompts: &PromptBuilder, timings: &Timings) -> Sequence {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Sequence::yell(prompts, timings, rng.as_mut())
    }

    /// Stops the running sequence at its next step boundary
    pub fn interrupt(&self) {
        if self.is_running() {
            log::info!("Interrupting running sequence");
            self.interrupted.store(true, Ordering::SeqCst);
        }
    }

    fn begin(&self, kind: SequenceKind) -> Result<(), ScareError> {
        let mut status = self.status_guard();
        if *status != ScareStatus::Idle {
            return Err(ScareError::AlreadyRunning);
        }
        *status = ScareStatus::Running { kind, step: 0 };
        self.interrupted.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn finish(&self) {
        *self.status_guard() = ScareStatus::Idle;
        self.interrupted.store(false, Ordering::SeqCst);
    }

    /// Plays `sequence`, handing each effect to `sink` once its delay has elapsed
    pub async fn run<F>(&self, sequence: Sequence, mut sink: F) -> Result<ScareOutcome, ScareError>
    where
        F: FnMut(&Effect),
    {
        self.begin(sequence.kind)?;
        log::info!("▶ Playing {:?} ({} steps)", sequence.kind, sequence.steps.len());

        for (index, step) in sequence.steps.iter().enumerate() {
            if !step.delay.is_zero() {
                tokio::time::sleep(step.delay).await;
            }
            if self.interrupted.load(Ordering::SeqCst) {
                log::info!("Sequence {:?} interrupted at step {}", sequence.kind, index);
                self.finish();
                return Ok(ScareOutcome::Interrupted);
            }
            *self.status_guard() = ScareStatus::Running {
                kind: sequence.kind,
                step: index,
            };
            sink(&step.effect);
        }

        self.finish();
        log::debug!("Sequence {:?} finished", sequence.kind);
        Ok(ScareOutcome::Completed)
    }
}
