pub mod json;
pub mod md;

use crate::error::LaterError;
use crate::state::{AppState, DashboardStats, SubmitOutcome};
use crate::types::diary::DiaryEntry;
use crate::types::scenario::{Outcome, Scenario};
use crate::types::task::{Routine, Todo};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport<'a> {
    pub greeting: String,
    pub video: &'a str,
    pub stats: DashboardStats,
    pub positive: Vec<&'a Scenario>,
    pub negative: Vec<&'a Scenario>,
    pub todos: &'a [Todo],
    pub routines: &'a [Routine],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<&'a SubmitOutcome>,
}

impl<'a> DashboardReport<'a> {
    pub fn from_state(state: &'a AppState, submission: Option<&'a SubmitOutcome>) -> Self {
        Self {
            greeting: state.greeting(),
            video: state.current_video(),
            stats: state.stats(),
            positive: state.scenarios_by(Outcome::Positive).collect(),
            negative: state.scenarios_by(Outcome::Negative).collect(),
            todos: state.todos(),
            routines: state.routines(),
            submission,
        }
    }
}

pub fn render(report: &DashboardReport<'_>, format: OutputFormat) -> Result<String, LaterError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(LaterError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_diary(entries: &[DiaryEntry], format: OutputFormat) -> Result<String, LaterError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(entries).map_err(LaterError::Json),
        OutputFormat::Md => Ok(md::diary_to_markdown(entries)),
    }
}
