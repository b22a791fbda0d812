use crate::error::{LaterError, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

pub const TOTAL_STEPS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub google_connected: bool,
    pub face_image: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Name,
    Google,
    Face,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Name => 1,
            Step::Google => 2,
            Step::Face => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Onboarding {
    step: Step,
    name: String,
    google_connected: bool,
    face_image: Option<PathBuf>,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self::new()
    }
}

impl Onboarding {
    pub fn new() -> Self {
        Self {
            step: Step::Name,
            name: String::new(),
            google_connected: false,
            face_image: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_google_connected(&mut self, connected: bool) {
        self.google_connected = connected;
    }

    pub fn set_face_image(&mut self, path: impl Into<PathBuf>) {
        self.face_image = Some(path.into());
    }

    pub fn progress_percent(&self) -> u8 {
        ((f64::from(self.step.number()) / f64::from(TOTAL_STEPS)) * 100.0).round() as u8
    }

    pub fn is_step_valid(&self) -> bool {
        match self.step {
            Step::Name => !self.name.trim().is_empty(),
            Step::Google => true,
            Step::Face => self.face_image.is_some(),
        }
    }

    /// Yields the finished profile once the last step passes.
    pub fn next(&mut self) -> Result<Option<UserProfile>> {
        if !self.is_step_valid() {
            let reason = match self.step {
                Step::Name => "a name is required",
                Step::Google => "google step rejected",
                Step::Face => "a face image is required",
            };
            return Err(LaterError::OnboardingIncomplete(format!(
                "step {} of {}: {}",
                self.step.number(),
                TOTAL_STEPS,
                reason
            )));
        }
        match self.step {
            Step::Name => self.step = Step::Google,
            Step::Google => self.step = Step::Face,
            Step::Face => {
                let face_image = self.face_image.clone().unwrap_or_default();
                return Ok(Some(UserProfile {
                    name: self.name.trim().to_string(),
                    google_connected: self.google_connected,
                    face_image,
                }));
            }
        }
        debug!(step = self.step.number(), "onboarding advanced");
        Ok(None)
    }

    #[allow(dead_code)]
    pub fn back(&mut self) {
        self.step = match self.step {
            Step::Name | Step::Google => Step::Name,
            Step::Face => Step::Google,
        };
    }
}
