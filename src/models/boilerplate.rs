use crate::utils::errors::BoilerplateError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Form values for the boilerplate page; unknown keys in a settings file are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoilerplateSettings {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub site_url: String,
    pub image_url: String,
    pub og_type: String,
    pub twitter_handle: String,
    pub gtag_id: String,
    pub json_ld_type: String,
    pub json_ld_name: String,
    pub json_ld_logo: String,
}

impl Default for BoilerplateSettings {
    fn default() -> Self {
        Self {
            title: "Example Page Title".to_string(),
            description:
                "This is a generic, SEO-optimized page description for a demo project page."
                    .to_string(),
            keywords: "demo, template, boilerplate, html, seo".to_string(),
            author: "Demo Author".to_string(),
            site_url: "https://www.example.com/demo-page.html".to_string(),
            image_url: "https://www.example.com/images/social-image-placeholder.png".to_string(),
            og_type: "article".to_string(),
            twitter_handle: "@DemoHandle".to_string(),
            gtag_id: "G-XXXXXXXXXX".to_string(),
            json_ld_type: "TechArticle".to_string(),
            json_ld_name: "Example Organization".to_string(),
            json_ld_logo: "https://www.example.com/images/logo-placeholder.png".to_string(),
        }
    }
}

impl BoilerplateSettings {
    /// Copy with every field trimmed, the way form input is read
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            keywords: self.keywords.trim().to_string(),
            author: self.author.trim().to_string(),
            site_url: self.site_url.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            og_type: self.og_type.trim().to_string(),
            twitter_handle: self.twitter_handle.trim().to_string(),
            gtag_id: self.gtag_id.trim().to_string(),
            json_ld_type: self.json_ld_type.trim().to_string(),
            json_ld_name: self.json_ld_name.trim().to_string(),
            json_ld_logo: self.json_ld_logo.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemaShape {
    #[default]
    Article,
    Faq,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FromStr for FaqEntry {
    type Err = BoilerplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once("::") {
            Some((question, answer))
                if !question.trim().is_empty() && !answer.trim().is_empty() =>
            {
                Ok(FaqEntry {
                    question: question.trim().to_string(),
                    answer: answer.trim().to_string(),
                })
            }
            _ => Err(BoilerplateError::InvalidFaqEntry(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_keep_defaults() {
        let settings: BoilerplateSettings =
            serde_json::from_str(r#"{"title": "Custom", "unknown_key": 3}"#).unwrap();
        assert_eq!(settings.title, "Custom");
        assert_eq!(settings.og_type, "article");
    }

    #[test]
    fn faq_entry_parses_question_and_answer() {
        let entry: FaqEntry = "What is it? :: A boilerplate".parse().unwrap();
        assert_eq!(entry.question, "What is it?");
        assert_eq!(entry.answer, "A boilerplate");
        assert!("no separator".parse::<FaqEntry>().is_err());
        assert!("::answer only".parse::<FaqEntry>().is_err());
    }
}
