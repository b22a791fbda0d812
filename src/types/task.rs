use crate::error::LaterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn weight(self) -> i32 {
        match self {
            Impact::High => 5,
            Impact::Medium => 3,
            Impact::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Impact {
    type Err = LaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Impact::High),
            "medium" => Ok(Impact::Medium),
            "low" => Ok(Impact::Low),
            other => Err(LaterError::InvalidArgument(format!(
                "unknown impact level: {other:?} (expected high, medium or low)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Routine,
}

impl TaskKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Routine => "routine",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub impact: Impact,
}

impl Todo {
    pub fn new(id: impl Into<String>, text: impl Into<String>, impact: Impact) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
            impact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub id: String,
    pub name: String,
    pub streak: u32,
    pub completed_today: bool,
    pub impact: Impact,
}

impl Routine {
    pub fn complete(&mut self) {
        self.completed_today = true;
        self.streak += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_weights_are_fixed() {
        assert_eq!(Impact::High.weight(), 5);
        assert_eq!(Impact::Medium.weight(), 3);
        assert_eq!(Impact::Low.weight(), 1);
    }

    #[test]
    fn impact_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Impact>().expect("should parse"), Impact::High);
        assert_eq!(" low ".parse::<Impact>().expect("should parse"), Impact::Low);
    }

    #[test]
    fn impact_rejects_unknown_level() {
        let err = "critical".parse::<Impact>().expect_err("should reject");
        assert!(matches!(err, LaterError::InvalidArgument(_)));
        assert!(err.to_string().contains("critical"));
    }

    #[test]
    fn routine_complete_increments_streak() {
        let mut routine = Routine {
            id: "1".to_string(),
            name: "Evening walk".to_string(),
            streak: 15,
            completed_today: false,
            impact: Impact::Medium,
        };
        routine.complete();
        assert!(routine.completed_today);
        assert_eq!(routine.streak, 16);
    }
}
