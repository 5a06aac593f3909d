use crate::config::DEFAULT_PARTIAL_CREDIT;
use crate::models::audit::{
    CategoryScore, Grade, LengthStatus, QualityReport, Score, ScoreCategory, TagBuckets, MAX_SCORE,
};

/// Tunables for the weighted score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRules {
    /// Share of the title/description weight earned when present but outside the range
    pub partial_credit: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            partial_credit: DEFAULT_PARTIAL_CREDIT,
        }
    }
}

pub fn generate_overall_score_and_grade(
    tags: &TagBuckets,
    quality: &QualityReport,
    rules: &ScoringRules,
) -> Score {
    let breakdown: Vec<CategoryScore> = ScoreCategory::ALL
        .iter()
        .map(|&category| CategoryScore {
            category,
            weight: category.weight(),
            points: category_points(category, tags, quality, rules),
        })
        .collect();

    let total: f64 = breakdown.iter().map(|c| c.points).sum();
    let percentage = to_percentage(total);

    Score {
        percentage,
        grade: Grade::from_percentage(percentage),
        breakdown,
    }
}

/// Rounds half to even, the way the score has always been rounded.
pub fn to_percentage(points: f64) -> u32 {
    let percentage = (points / f64::from(MAX_SCORE) * 100.0).round_ties_even();
    percentage.clamp(0.0, 100.0) as u32
}

fn length_points(status: &LengthStatus, weight: f64, rules: &ScoringRules) -> f64 {
    match status {
        LengthStatus::Optimal => weight,
        s if s.is_suboptimal() => weight * rules.partial_credit,
        _ => 0.0,
    }
}

fn presence_points(present: bool, weight: f64) -> f64 {
    if present {
        weight
    } else {
        0.0
    }
}

fn category_points(
    category: ScoreCategory,
    tags: &TagBuckets,
    quality: &QualityReport,
    rules: &ScoringRules,
) -> f64 {
    let weight = f64::from(category.weight());
    match category {
        ScoreCategory::Canonical => presence_points(tags.core.canonical.is_some(), weight),
        ScoreCategory::Robots => presence_points(
            tags.core
                .robots
                .as_ref()
                .is_some_and(|r| !r.to_lowercase().contains("noindex")),
            weight,
        ),
        ScoreCategory::Title => length_points(&quality.title.status, weight, rules),
        ScoreCategory::Description => length_points(&quality.description.status, weight, rules),
        ScoreCategory::Hreflang => presence_points(!tags.core.hreflang.is_empty(), weight),
        ScoreCategory::OpenGraph => presence_points(!tags.social.open_graph.is_empty(), weight),
        ScoreCategory::TwitterCard => {
            presence_points(!tags.social.twitter_card.is_empty(), weight)
        }
        ScoreCategory::Schema => {
            let total = tags.structured_data.len();
            if total == 0 {
                return 0.0;
            }
            let valid = quality.schema.iter().filter(|v| v.is_valid()).count();
            weight * (valid as f64 / total as f64)
        }
        ScoreCategory::ImageAlt => {
            let total = quality.image_alt.total;
            if total == 0 {
                return weight;
            }
            weight * (1.0 - quality.image_alt.missing as f64 / total as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audit::{HreflangEntry, ImageStats, StructuredDataItem};
    use crate::services::site_audit_service::quality::analyze_tag_quality;

    fn score(tags: &TagBuckets) -> Score {
        let quality = analyze_tag_quality(tags);
        generate_overall_score_and_grade(tags, &quality, &ScoringRules::default())
    }

    #[test]
    fn empty_page_only_earns_image_points() {
        let result = score(&TagBuckets::default());
        assert_eq!(result.percentage, 10);
        assert_eq!(result.grade, Grade::F);
        assert_eq!(result.points_for(ScoreCategory::ImageAlt), 10.0);
        assert_eq!(result.points_for(ScoreCategory::Schema), 0.0);
    }

    #[test]
    fn robots_noindex_earns_nothing() {
        let mut tags = TagBuckets::default();
        tags.core.robots = Some("NoIndex, follow".to_string());
        assert_eq!(score(&tags).points_for(ScoreCategory::Robots), 0.0);

        tags.core.robots = Some("index, follow".to_string());
        assert_eq!(score(&tags).points_for(ScoreCategory::Robots), 10.0);
    }

    #[test]
    fn suboptimal_lengths_get_partial_credit() {
        let mut tags = TagBuckets::default();
        tags.essential.title = Some("t".repeat(75));
        tags.core.description = Some("short".to_string());
        let quality = analyze_tag_quality(&tags);

        let half = generate_overall_score_and_grade(&tags, &quality, &ScoringRules::default());
        assert_eq!(half.points_for(ScoreCategory::Title), 7.5);
        assert_eq!(half.points_for(ScoreCategory::Description), 7.5);

        let none = generate_overall_score_and_grade(
            &tags,
            &quality,
            &ScoringRules {
                partial_credit: 0.0,
            },
        );
        assert_eq!(none.points_for(ScoreCategory::Title), 0.0);
    }

    #[test]
    fn image_alt_points_are_proportional() {
        let mut tags = TagBuckets::default();
        tags.images = ImageStats {
            total: 4,
            missing_alt: 1,
        };
        assert_eq!(score(&tags).points_for(ScoreCategory::ImageAlt), 7.5);
    }

    #[test]
    fn failed_schema_counts_in_total_only() {
        let mut tags = TagBuckets::default();
        let valid = serde_json::json!({
            "@type": "FAQPage",
            "mainEntity": [{"@type": "Question"}]
        });
        tags.structured_data.push(StructuredDataItem {
            index: 1,
            declared_type: "FAQPage".to_string(),
            snippet: String::new(),
            object: valid.as_object().cloned(),
        });
        tags.structured_data.push(StructuredDataItem::failed(2));
        assert_eq!(score(&tags).points_for(ScoreCategory::Schema), 7.5);
    }

    #[test]
    fn full_marks_reach_a_plus() {
        let mut tags = TagBuckets::default();
        tags.core.canonical = Some("https://example.com/".to_string());
        tags.core.robots = Some("index, follow".to_string());
        tags.essential.title = Some("A good title".to_string());
        tags.core.description = Some("d".repeat(120));
        tags.core.hreflang.push(HreflangEntry {
            hreflang: "x-default".to_string(),
            href: "https://example.com/".to_string(),
        });
        tags.social
            .open_graph
            .insert("og:title".to_string(), "t".to_string());
        tags.social
            .twitter_card
            .insert("twitter:card".to_string(), "summary".to_string());
        let article = serde_json::json!({
            "@type": "Article",
            "headline": "h",
            "image": "https://example.com/i.png",
            "datePublished": "2024-01-01"
        });
        tags.structured_data.push(StructuredDataItem {
            index: 1,
            declared_type: "Article".to_string(),
            snippet: String::new(),
            object: article.as_object().cloned(),
        });

        let result = score(&tags);
        assert_eq!(result.percentage, 100);
        assert_eq!(result.grade, Grade::APlus);
    }

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(to_percentage(62.5), 62);
        assert_eq!(to_percentage(63.5), 64);
        assert_eq!(to_percentage(55.0), 55);
    }
}
