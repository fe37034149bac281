pub mod calculator;
pub mod kind;
pub mod sorter;

pub use calculator::{calculate_scores, ice, rice, ScoreResult};
pub use kind::ScoreKind;
pub use sorter::sort_by_score;
