use crate::engine;
use crate::error::{LaterError, Result};
use crate::onboarding::UserProfile;
use crate::seed;
use crate::sequencer::RecalculationState;
use crate::types::diary::DiaryEntry;
use crate::types::scenario::{Direction, Outcome, Scenario};
use crate::types::task::{Impact, Routine, TaskKind, Todo};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub todo_ids: Vec<String>,
    pub routine_ids: Vec<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.todo_ids.is_empty() && self.routine_ids.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub kind: &'static str,
    pub id: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SubmitOutcome {
    pub applied: Vec<Completion>,
    pub skipped: Vec<Completion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub average_positive_probability: f64,
    pub completed_todos: usize,
    pub total_todos: usize,
    pub completed_routines: usize,
    pub total_routines: usize,
    pub total_streak: u32,
}

#[derive(Debug, Clone)]
pub struct AppState {
    todos: Vec<Todo>,
    routines: Vec<Routine>,
    scenarios: Vec<Scenario>,
    diary: Vec<DiaryEntry>,
    current_video: String,
    user: Option<UserProfile>,
}

impl AppState {
    pub fn new(
        todos: Vec<Todo>,
        routines: Vec<Routine>,
        scenarios: Vec<Scenario>,
        diary: Vec<DiaryEntry>,
    ) -> Result<Self> {
        for scenario in &scenarios {
            scenario.validate()?;
        }
        Ok(Self {
            todos,
            routines,
            scenarios,
            diary,
            current_video: seed::HERO_VIDEO.to_string(),
            user: None,
        })
    }

    pub fn seeded() -> Result<Self> {
        Self::new(seed::todos(), seed::routines(), seed::scenarios()?, seed::diary())
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn diary(&self) -> &[DiaryEntry] {
        &self.diary
    }

    pub fn current_video(&self) -> &str {
        &self.current_video
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    pub fn greeting(&self) -> String {
        match &self.user {
            Some(user) => format!("Welcome back, {}", user.name),
            None => "Welcome back".to_string(),
        }
    }

    // Todos in list order, then routines. Nothing is marked done unless every
    // scenario update succeeds.
    pub fn submit(
        &mut self,
        selection: &Selection,
        recalculation: RecalculationState,
    ) -> Result<SubmitOutcome> {
        if recalculation.is_running {
            return Err(LaterError::RecalculationInProgress);
        }
        for id in &selection.todo_ids {
            if !self.todos.iter().any(|todo| &todo.id == id) {
                return Err(unknown(TaskKind::Todo, id));
            }
        }
        for id in &selection.routine_ids {
            if !self.routines.iter().any(|routine| &routine.id == id) {
                return Err(unknown(TaskKind::Routine, id));
            }
        }

        let mut outcome = SubmitOutcome::default();
        for todo in self
            .todos
            .iter()
            .filter(|todo| selection.todo_ids.contains(&todo.id))
        {
            let completion = Completion {
                kind: TaskKind::Todo.as_str(),
                id: todo.id.clone(),
                impact: todo.impact,
            };
            if todo.completed {
                warn!(id = %todo.id, "todo already completed, skipping");
                outcome.skipped.push(completion);
            } else {
                outcome.applied.push(completion);
            }
        }
        for routine in self
            .routines
            .iter()
            .filter(|routine| selection.routine_ids.contains(&routine.id))
        {
            let completion = Completion {
                kind: TaskKind::Routine.as_str(),
                id: routine.id.clone(),
                impact: routine.impact,
            };
            if routine.completed_today {
                warn!(id = %routine.id, "routine already completed today, skipping");
                outcome.skipped.push(completion);
            } else {
                outcome.applied.push(completion);
            }
        }

        let scenarios = engine::apply_sequence(
            &self.scenarios,
            outcome.applied.iter().map(|completion| completion.impact),
            Direction::Up,
        )?;

        for completion in &outcome.applied {
            if completion.kind == TaskKind::Todo.as_str() {
                if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == completion.id) {
                    todo.completed = true;
                }
            } else if let Some(routine) = self
                .routines
                .iter_mut()
                .find(|routine| routine.id == completion.id)
            {
                routine.complete();
            }
        }

        self.scenarios = scenarios;
        info!(
            applied = outcome.applied.len(),
            skipped = outcome.skipped.len(),
            "submission processed"
        );
        Ok(outcome)
    }

    pub fn add_todo(&mut self, text: &str, impact: Impact) -> Result<&Todo> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LaterError::InvalidArgument(
                "todo text must not be empty".to_string(),
            ));
        }
        let next_id = self
            .todos
            .iter()
            .filter_map(|todo| todo.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        self.todos.push(Todo::new(next_id.to_string(), text, impact));
        info!(id = next_id, %impact, "todo added");
        Ok(&self.todos[self.todos.len() - 1])
    }

    pub fn swap_video(&mut self, at: DateTime<Utc>) {
        self.current_video = format!("{}?t={}", seed::HERO_VIDEO, at.timestamp_millis());
        info!(video = %self.current_video, "video swapped");
    }

    pub fn stats(&self) -> DashboardStats {
        let positive: Vec<i32> = self
            .scenarios
            .iter()
            .filter(|scenario| scenario.outcome == Outcome::Positive)
            .map(|scenario| scenario.probability)
            .collect();
        let average_positive_probability = if positive.is_empty() {
            0.0
        } else {
            f64::from(positive.iter().sum::<i32>()) / positive.len() as f64
        };

        DashboardStats {
            average_positive_probability,
            completed_todos: self.todos.iter().filter(|todo| todo.completed).count(),
            total_todos: self.todos.len(),
            completed_routines: self
                .routines
                .iter()
                .filter(|routine| routine.completed_today)
                .count(),
            total_routines: self.routines.len(),
            total_streak: self.routines.iter().map(|routine| routine.streak).sum(),
        }
    }

    pub fn scenarios_by(&self, outcome: Outcome) -> impl Iterator<Item = &Scenario> {
        self.scenarios()
            .iter()
            .filter(move |scenario| scenario.outcome == outcome)
    }
}

fn unknown(kind: TaskKind, id: &str) -> LaterError {
    LaterError::UnknownTask {
        kind: kind.as_str(),
        id: id.to_string(),
    }
}
