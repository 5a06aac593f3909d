pub mod score;

pub use score::{generate_overall_score_and_grade, to_percentage, ScoringRules};
