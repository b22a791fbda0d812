mod cli;
mod config;
mod engine;
mod error;
mod onboarding;
mod report;
mod seed;
mod sequencer;
mod state;
mod types;

use crate::error::LaterError;
use crate::sequencer::clock::{run_until_idle, Pace, TimerQueue};
use crate::sequencer::random::SeededRandom;
use crate::sequencer::{SequenceObserver, Sequencer};
use crate::state::{AppState, Selection};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

struct RecalculationBanner<'s> {
    state: &'s mut AppState,
    quiet: bool,
}

impl SequenceObserver for RecalculationBanner<'_> {
    fn on_tick(&mut self, progress: f64) {
        if !self.quiet {
            eprintln!("recalculating your future: {:>3}%", progress.round() as i64);
        }
    }

    fn on_complete(&mut self) {
        self.state.swap_video(Utc::now());
        if !self.quiet {
            eprintln!("recalculation complete");
        }
    }
}

struct IntroScreen;

impl SequenceObserver for IntroScreen {
    fn on_tick(&mut self, progress: f64) {
        println!("{:>3}% complete", progress.round() as i64);
    }

    fn on_phase(&mut self, label: &'static str) {
        match label {
            "calculating" => println!("Calculating Your Future"),
            "title-reveal" => println!("30 Days Later"),
            other => println!("[{other}]"),
        }
    }

    fn on_complete(&mut self) {
        println!("Welcome to your future.");
    }
}

fn pace(realtime: bool) -> Pace {
    if realtime {
        Pace::Realtime
    } else {
        Pace::Virtual
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_env("LATER_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, LaterError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Dashboard(cmd) => {
            let state = AppState::seeded()?;
            let dashboard = report::DashboardReport::from_state(&state, None);
            println!("{}", report::render(&dashboard, output_format(&cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Submit(cmd) => {
            let loaded = config::load_config(&cli.root)?;
            let selection = Selection {
                todo_ids: cmd.todos,
                routine_ids: cmd.routines,
            };
            if selection.is_empty() {
                return Err(LaterError::InvalidArgument(
                    "select at least one --todo or --routine".to_string(),
                ));
            }

            let profile = loaded.recalculation_profile()?;
            let random = SeededRandom::new(cmd.seed.or(loaded.seed()));
            let mut state = AppState::seeded()?;
            let mut queue = TimerQueue::new();

            let outcome = {
                let mut sequencer = Sequencer::new(profile, Box::new(random));
                let outcome = state.submit(&selection, sequencer.state())?;
                let banner = RecalculationBanner {
                    state: &mut state,
                    quiet: cli.quiet,
                };
                sequencer.start(&mut queue, Box::new(banner));
                run_until_idle(&mut sequencer, &mut queue, pace(cmd.realtime));
                outcome
            };

            let dashboard = report::DashboardReport::from_state(&state, Some(&outcome));
            println!("{}", report::render(&dashboard, output_format(&cmd.format))?);

            if outcome.skipped.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::AddTodo(cmd) => {
            let impact = cmd.impact.parse()?;
            let mut state = AppState::seeded()?;
            let todo = state.add_todo(&cmd.text, impact)?;
            eprintln!("added todo {}", todo.id);
            let dashboard = report::DashboardReport::from_state(&state, None);
            println!("{}", report::render(&dashboard, output_format(&cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Intro(cmd) => {
            let loaded = config::load_config(&cli.root)?;
            let profile = loaded.intro_profile()?;
            let random = SeededRandom::new(cmd.seed.or(loaded.seed()));
            let mut sequencer = Sequencer::new(profile, Box::new(random));
            let mut queue = TimerQueue::new();
            sequencer.start(&mut queue, Box::new(IntroScreen));
            run_until_idle(&mut sequencer, &mut queue, pace(cmd.realtime));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Diary(cmd) => {
            let state = AppState::seeded()?;
            println!(
                "{}",
                report::render_diary(state.diary(), output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Onboard(cmd) => {
            let mut flow = onboarding::Onboarding::new();
            let announce = |flow: &onboarding::Onboarding| {
                eprintln!(
                    "step {} of {} ({}%)",
                    flow.step().number(),
                    onboarding::TOTAL_STEPS,
                    flow.progress_percent()
                );
            };
            announce(&flow);
            flow.set_name(cmd.name);
            flow.next()?;
            announce(&flow);
            flow.set_google_connected(cmd.google);
            flow.next()?;
            announce(&flow);
            if let Some(face) = cmd.face {
                flow.set_face_image(face);
            }
            let Some(profile) = flow.next()? else {
                return Err(LaterError::OnboardingIncomplete(
                    "onboarding did not finish".to_string(),
                ));
            };

            let mut state = AppState::seeded()?;
            state.set_user(profile);
            if let Some(user) = state.user() {
                println!("name: {}", user.name);
                println!(
                    "google: {}",
                    if user.google_connected {
                        "connected"
                    } else {
                        "skipped"
                    }
                );
                println!("face image: {}", user.face_image.display());
            }
            println!("{}", state.greeting());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
