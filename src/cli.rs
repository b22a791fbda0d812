use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "later",
    version,
    about = "30 Days Later: shape your future one completed task at a time"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding later.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Dashboard(DashboardCommand),
    Submit(SubmitCommand),
    AddTodo(AddTodoCommand),
    Intro(IntroCommand),
    Diary(DiaryCommand),
    Onboard(OnboardCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct DashboardCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct SubmitCommand {
    /// Todo id to mark complete (repeatable)
    #[arg(long = "todo")]
    pub todos: Vec<String>,
    /// Routine id to mark complete (repeatable)
    #[arg(long = "routine")]
    pub routines: Vec<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Wait out the real timer delays instead of skipping ahead
    #[arg(long)]
    pub realtime: bool,
    /// Seed for the progress increments (overrides later.toml)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct AddTodoCommand {
    pub text: String,
    #[arg(long, default_value = "medium")]
    pub impact: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct IntroCommand {
    #[arg(long)]
    pub realtime: bool,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct DiaryCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct OnboardCommand {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long)]
    pub google: bool,
    #[arg(long)]
    pub face: Option<PathBuf>,
}
