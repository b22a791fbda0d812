use crate::error::LaterError;
use crate::sequencer::{IncrementRange, SequenceProfile};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LaterConfig {
    pub recalculation: Option<RecalculationConfig>,
    pub intro: Option<IntroConfig>,
    pub random: Option<RandomConfig>,
}

// Durations stay signed so a negative value reaches validation instead of
// failing inside the TOML deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecalculationConfig {
    pub tick_interval_ms: Option<i64>,
    pub settle_delay_ms: Option<i64>,
    pub increment_min: Option<f64>,
    pub increment_span: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntroConfig {
    pub tick_interval_ms: Option<i64>,
    pub reveal_hold_ms: Option<i64>,
    pub final_settle_ms: Option<i64>,
    pub increment_min: Option<f64>,
    pub increment_span: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

pub const DEFAULT_RECALC_TICK_MS: i64 = 200;
pub const DEFAULT_RECALC_SETTLE_MS: i64 = 500;
pub const DEFAULT_RECALC_INCREMENT: (f64, f64) = (5.0, 15.0);

pub const DEFAULT_INTRO_TICK_MS: i64 = 150;
pub const DEFAULT_INTRO_REVEAL_MS: i64 = 2000;
pub const DEFAULT_INTRO_SETTLE_MS: i64 = 1000;
pub const DEFAULT_INTRO_INCREMENT: (f64, f64) = (2.0, 8.0);

impl LaterConfig {
    pub fn seed(&self) -> Option<u64> {
        self.random.as_ref().and_then(|random| random.seed)
    }

    pub fn recalculation_profile(&self) -> Result<SequenceProfile, LaterError> {
        let cfg = self.recalculation.clone().unwrap_or_default();
        let tick = millis(
            "recalculation.tick_interval_ms",
            cfg.tick_interval_ms.unwrap_or(DEFAULT_RECALC_TICK_MS),
        )?;
        let settle = millis(
            "recalculation.settle_delay_ms",
            cfg.settle_delay_ms.unwrap_or(DEFAULT_RECALC_SETTLE_MS),
        )?;
        let increment = IncrementRange::new(
            cfg.increment_min.unwrap_or(DEFAULT_RECALC_INCREMENT.0),
            cfg.increment_span.unwrap_or(DEFAULT_RECALC_INCREMENT.1),
        )?;
        SequenceProfile::recalculation(tick, settle, increment)
    }

    pub fn intro_profile(&self) -> Result<SequenceProfile, LaterError> {
        let cfg = self.intro.clone().unwrap_or_default();
        let tick = millis(
            "intro.tick_interval_ms",
            cfg.tick_interval_ms.unwrap_or(DEFAULT_INTRO_TICK_MS),
        )?;
        let reveal = millis(
            "intro.reveal_hold_ms",
            cfg.reveal_hold_ms.unwrap_or(DEFAULT_INTRO_REVEAL_MS),
        )?;
        let settle = millis(
            "intro.final_settle_ms",
            cfg.final_settle_ms.unwrap_or(DEFAULT_INTRO_SETTLE_MS),
        )?;
        let increment = IncrementRange::new(
            cfg.increment_min.unwrap_or(DEFAULT_INTRO_INCREMENT.0),
            cfg.increment_span.unwrap_or(DEFAULT_INTRO_INCREMENT.1),
        )?;
        SequenceProfile::intro(tick, reveal, settle, increment)
    }

    pub fn validate(&self) -> Result<(), LaterError> {
        self.recalculation_profile()?;
        self.intro_profile()?;
        Ok(())
    }
}

fn millis(key: &str, value: i64) -> Result<Duration, LaterError> {
    if value < 0 {
        return Err(LaterError::InvalidConfiguration(format!(
            "{key} must not be negative (found {value})"
        )));
    }
    Ok(Duration::from_millis(value as u64))
}
