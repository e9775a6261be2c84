pub mod config;
pub mod difficulty;
pub mod problem;

// config is accessed as crate::models::config::{load_config, Config, ...}
pub use difficulty::Difficulty;
pub use problem::{split_name, Problem, ProblemFilter, Status, DEFAULT_CATEGORY};
