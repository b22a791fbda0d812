use crate::error::LaterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_PROBABILITY: i32 = 0;
pub const MAX_PROBABILITY: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Positive,
    Negative,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Positive => "positive",
            Outcome::Negative => "negative",
        })
    }
}

impl FromStr for Outcome {
    type Err = LaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Outcome::Positive),
            "negative" => Ok(Outcome::Negative),
            other => Err(LaterError::InvalidArgument(format!(
                "unknown scenario type: {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "positive")]
    Up,
    #[serde(rename = "negative")]
    Down,
}

impl FromStr for Direction {
    type Err = LaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Direction::Up),
            "negative" => Ok(Direction::Down),
            other => Err(LaterError::InvalidArgument(format!(
                "unknown direction: {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub outcome: Outcome,
    pub probability: i32,
}

impl Scenario {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        outcome: Outcome,
        probability: i32,
    ) -> Result<Self, LaterError> {
        let scenario = Self {
            id: id.into(),
            text: text.into(),
            outcome,
            probability,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), LaterError> {
        if !(MIN_PROBABILITY..=MAX_PROBABILITY).contains(&self.probability) {
            return Err(LaterError::InvalidArgument(format!(
                "scenario {} has probability {} outside {}..={}",
                self.id, self.probability, MIN_PROBABILITY, MAX_PROBABILITY
            )));
        }
        Ok(())
    }

    pub fn with_probability(&self, probability: i32) -> Self {
        Self {
            probability,
            ..self.clone()
        }
    }
}
