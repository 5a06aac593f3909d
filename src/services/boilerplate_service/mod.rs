pub mod render;
pub mod settings;

pub use render::{build_json_ld, render_html, render_json_ld_block};
pub use settings::{load_settings, parse_settings, save_settings};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audit::Grade;
    use crate::models::boilerplate::{BoilerplateSettings, FaqEntry, SchemaShape};
    use crate::services::site_audit_service::{perform_metadata_audit, ScoringRules};
    use chrono::NaiveDate;

    #[test]
    fn default_page_audits_to_full_marks() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let html = render_html(
            &BoilerplateSettings::default(),
            SchemaShape::Article,
            &[],
            date,
        )
        .unwrap();
        let outcome =
            perform_metadata_audit(&html, "boilerplate.html", &ScoringRules::default(), "now")
                .unwrap();
        assert_eq!(outcome.score.percentage, 100);
        assert_eq!(outcome.score.grade, Grade::APlus);
        assert!(outcome.quality.render_blocking.scripts.is_empty());
    }

    #[test]
    fn faq_page_validates_as_faq_schema() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let faq = vec![FaqEntry {
            question: "What is this?".to_string(),
            answer: "A generated page.".to_string(),
        }];
        let html = render_html(&BoilerplateSettings::default(), SchemaShape::Faq, &faq, date)
            .unwrap();
        let outcome =
            perform_metadata_audit(&html, "faq.html", &ScoringRules::default(), "now").unwrap();
        assert_eq!(outcome.tags.structured_data[0].declared_type, "FAQPage");
        assert!(outcome.quality.schema[0].is_valid());
    }
}
