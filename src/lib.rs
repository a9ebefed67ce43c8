//! dermtui library
//!
//! Core functionality for the skin analysis wizard: the quiz engine, the
//! static product catalog with its recommendation rules, the selection
//! set, the routine partitioner, and the TUI wizard that drives them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod profile;
pub mod quiz;
pub mod routine;
pub mod selection;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppState, Screen};
pub use catalog::{Product, base_products, concern_rules, recommend};
pub use error::{DermTuiError, Result};
pub use profile::SkinProfile;
pub use quiz::{Question, QuestionId, QuizState, questions};
pub use routine::Routine;
pub use selection::Selection;
pub use types::{
    AgeGroup, Category, Concern, Lifestyle, RoutineHabit, Sensitivity, SkinType,
};
