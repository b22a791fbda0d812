use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaterError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("unknown {kind} id: {id}")]
    UnknownTask { kind: &'static str, id: String },

    #[error("recalculation already in progress")]
    RecalculationInProgress,

    #[error("onboarding incomplete: {0}")]
    OnboardingIncomplete(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LaterError>;
