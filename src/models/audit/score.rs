use serde::Serialize;
use std::fmt;

pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Canonical,
    Robots,
    Title,
    Description,
    Hreflang,
    OpenGraph,
    TwitterCard,
    Schema,
    ImageAlt,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 9] = [
        ScoreCategory::Canonical,
        ScoreCategory::Robots,
        ScoreCategory::Title,
        ScoreCategory::Description,
        ScoreCategory::Hreflang,
        ScoreCategory::OpenGraph,
        ScoreCategory::TwitterCard,
        ScoreCategory::Schema,
        ScoreCategory::ImageAlt,
    ];

    pub fn weight(self) -> u32 {
        match self {
            ScoreCategory::Canonical => 20,
            ScoreCategory::Robots => 10,
            ScoreCategory::Title => 15,
            ScoreCategory::Description => 15,
            ScoreCategory::Hreflang => 5,
            ScoreCategory::OpenGraph => 5,
            ScoreCategory::TwitterCard => 5,
            ScoreCategory::Schema => 15,
            ScoreCategory::ImageAlt => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::Canonical => "Canonical Link",
            ScoreCategory::Robots => "Meta Robots",
            ScoreCategory::Title => "Title Quality",
            ScoreCategory::Description => "Description Quality",
            ScoreCategory::Hreflang => "Hreflang Tags",
            ScoreCategory::OpenGraph => "Open Graph Tags",
            ScoreCategory::TwitterCard => "Twitter Card Tags",
            ScoreCategory::Schema => "Structured Data",
            ScoreCategory::ImageAlt => "Image Alt Text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    C,
    D,
    F,
}

// Thresholds for letter grades, highest first
pub const GRADING_SCALE: [(u32, Grade); 9] = [
    (95, Grade::APlus),
    (90, Grade::A),
    (85, Grade::AMinus),
    (80, Grade::BPlus),
    (75, Grade::B),
    (70, Grade::BMinus),
    (60, Grade::C),
    (50, Grade::D),
    (0, Grade::F),
];

impl Grade {
    pub fn from_percentage(percentage: u32) -> Grade {
        GRADING_SCALE
            .iter()
            .find(|(threshold, _)| percentage >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: ScoreCategory,
    pub weight: u32,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    pub percentage: u32,
    pub grade: Grade,
    pub breakdown: Vec<CategoryScore>,
}

impl Score {
    pub fn points_for(&self, category: ScoreCategory) -> f64 {
        self.breakdown
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.points)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_max_score() {
        let total: u32 = ScoreCategory::ALL.iter().map(|c| c.weight()).sum();
        assert_eq!(total, MAX_SCORE);
    }

    #[test]
    fn grade_thresholds_are_inclusive() {
        assert_eq!(Grade::from_percentage(100), Grade::APlus);
        assert_eq!(Grade::from_percentage(95), Grade::APlus);
        assert_eq!(Grade::from_percentage(94), Grade::A);
        assert_eq!(Grade::from_percentage(85), Grade::AMinus);
        assert_eq!(Grade::from_percentage(70), Grade::BMinus);
        assert_eq!(Grade::from_percentage(69), Grade::C);
        assert_eq!(Grade::from_percentage(55), Grade::D);
        assert_eq!(Grade::from_percentage(49), Grade::F);
        assert_eq!(Grade::from_percentage(0), Grade::F);
    }

    #[test]
    fn grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(Grade::BMinus.to_string(), "B-");
    }
}
