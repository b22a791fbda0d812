pub mod config;
pub mod diary;
pub mod scenario;
pub mod task;
