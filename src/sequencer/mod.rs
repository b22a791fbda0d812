pub mod clock;
pub mod random;

use crate::error::LaterError;
use clock::{Scheduler, TimerHandle};
use random::ProgressRandom;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

pub const COMPLETE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncrementRange {
    min: f64,
    span: f64,
}

impl IncrementRange {
    pub fn new(min: f64, span: f64) -> Result<Self, LaterError> {
        if !min.is_finite() || !span.is_finite() {
            return Err(LaterError::InvalidConfiguration(
                "progress increment bounds must be finite".to_string(),
            ));
        }
        if min <= 0.0 {
            return Err(LaterError::InvalidConfiguration(format!(
                "progress increment minimum must be greater than 0 (found {min})"
            )));
        }
        if span < 0.0 {
            return Err(LaterError::InvalidConfiguration(format!(
                "progress increment span must not be negative (found {span})"
            )));
        }
        Ok(Self { min, span })
    }

    fn sample(&self, random: &mut dyn ProgressRandom) -> f64 {
        self.min + random.next_unit() * self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettleStep {
    pub label: &'static str,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceProfile {
    name: &'static str,
    ticking_label: &'static str,
    tick_interval: Duration,
    increment: IncrementRange,
    settle: Vec<SettleStep>,
}

impl SequenceProfile {
    pub fn new(
        name: &'static str,
        ticking_label: &'static str,
        tick_interval: Duration,
        increment: IncrementRange,
        settle: Vec<SettleStep>,
    ) -> Result<Self, LaterError> {
        if tick_interval.is_zero() {
            return Err(LaterError::InvalidConfiguration(format!(
                "{name}: tick interval must be greater than 0"
            )));
        }
        if settle.is_empty() {
            return Err(LaterError::InvalidConfiguration(format!(
                "{name}: at least one settle step is required"
            )));
        }
        Ok(Self {
            name,
            ticking_label,
            tick_interval,
            increment,
            settle,
        })
    }

    pub fn recalculation(
        tick_interval: Duration,
        settle_delay: Duration,
        increment: IncrementRange,
    ) -> Result<Self, LaterError> {
        Self::new(
            "recalculation",
            "running",
            tick_interval,
            increment,
            vec![SettleStep {
                label: "completing",
                delay: settle_delay,
            }],
        )
    }

    pub fn intro(
        tick_interval: Duration,
        reveal_hold: Duration,
        final_settle: Duration,
        increment: IncrementRange,
    ) -> Result<Self, LaterError> {
        Self::new(
            "intro",
            "calculating",
            tick_interval,
            increment,
            vec![
                SettleStep {
                    label: "title-reveal",
                    delay: reveal_hold,
                },
                SettleStep {
                    label: "complete",
                    delay: final_settle,
                },
            ],
        )
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn settle_steps(&self) -> &[SettleStep] {
        &self.settle
    }
}

pub trait SequenceObserver {
    fn on_tick(&mut self, progress: f64);

    fn on_phase(&mut self, _label: &'static str) {}

    fn on_complete(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Ticking,
    Settling(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecalculationState {
    pub is_running: bool,
    pub progress: f64,
}

pub struct Sequencer<'a> {
    profile: SequenceProfile,
    random: Box<dyn ProgressRandom + 'a>,
    stage: Stage,
    progress: f64,
    pending: Option<TimerHandle>,
    observer: Option<Box<dyn SequenceObserver + 'a>>,
}

impl<'a> Sequencer<'a> {
    pub fn new(profile: SequenceProfile, random: Box<dyn ProgressRandom + 'a>) -> Self {
        Self {
            profile,
            random,
            stage: Stage::Idle,
            progress: 0.0,
            pending: None,
            observer: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_active(&self) -> bool {
        self.stage() != Stage::Idle
    }

    pub fn state(&self) -> RecalculationState {
        RecalculationState {
            is_running: self.is_active(),
            progress: self.progress,
        }
    }

    pub fn phase_label(&self) -> &'static str {
        match self.stage {
            Stage::Idle => "idle",
            Stage::Ticking => self.profile.ticking_label,
            Stage::Settling(step) => self.profile.settle_steps()[step].label,
        }
    }

    /// Returns `false`, dropping `observer`, when a run is already in flight.
    pub fn start(
        &mut self,
        scheduler: &mut dyn Scheduler,
        mut observer: Box<dyn SequenceObserver + 'a>,
    ) -> bool {
        if self.is_active() {
            debug!(
                sequence = self.profile.name,
                stage = ?self.stage,
                "start ignored, already active"
            );
            return false;
        }
        info!(sequence = self.profile.name, "sequence started");
        self.stage = Stage::Ticking;
        self.progress = 0.0;
        self.pending = Some(scheduler.schedule(self.profile.tick_interval()));
        observer.on_phase(self.profile.ticking_label);
        self.observer = Some(observer);
        true
    }

    /// Delivers a fired timer. Handles other than the one currently pending
    /// are ignored and return `false`.
    pub fn fire(&mut self, handle: TimerHandle, scheduler: &mut dyn Scheduler) -> bool {
        if self.pending != Some(handle) {
            debug!(sequence = self.profile.name, ?handle, "stale timer ignored");
            return false;
        }
        self.pending = None;
        match self.stage {
            Stage::Idle => return false,
            Stage::Ticking => self.tick(scheduler),
            Stage::Settling(step) => self.settle(step, scheduler),
        }
        true
    }

    /// Revokes the pending timer and drops the observer without notifying it.
    #[allow(dead_code)]
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        if !self.is_active() {
            return false;
        }
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        info!(sequence = self.profile.name, progress = self.progress, "sequence cancelled");
        self.observer = None;
        self.reset();
        true
    }

    fn tick(&mut self, scheduler: &mut dyn Scheduler) {
        let increment = self.profile.increment.sample(self.random.as_mut());
        self.progress = (self.progress + increment).min(COMPLETE);
        debug!(sequence = self.profile.name, progress = self.progress, "tick");
        if let Some(observer) = self.observer.as_mut() {
            observer.on_tick(self.progress);
        }

        if self.progress >= COMPLETE {
            self.enter_settle(0, scheduler);
        } else {
            self.pending = Some(scheduler.schedule(self.profile.tick_interval()));
        }
    }

    fn enter_settle(&mut self, step: usize, scheduler: &mut dyn Scheduler) {
        let settle = &self.profile.settle_steps()[step];
        self.stage = Stage::Settling(step);
        self.pending = Some(scheduler.schedule(settle.delay));
        if let Some(observer) = self.observer.as_mut() {
            observer.on_phase(settle.label);
        }
    }

    fn settle(&mut self, step: usize, scheduler: &mut dyn Scheduler) {
        if step + 1 < self.profile.settle_steps().len() {
            self.enter_settle(step + 1, scheduler);
            return;
        }
        info!(sequence = self.profile.name, "sequence complete");
        let observer = self.observer.take();
        self.reset();
        if let Some(mut observer) = observer {
            observer.on_complete();
        }
    }

    fn reset(&mut self) {
        self.stage = Stage::Idle;
        self.progress = 0.0;
        self.pending = None;
    }
}
