use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LengthStatus {
    Missing,
    Optimal,
    TooShort,
    TooLong { over: usize },
}

impl LengthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LengthStatus::Missing => "❌ MISSING",
            LengthStatus::Optimal => "✅ OPTIMAL",
            LengthStatus::TooShort => "⚠️ TOO SHORT",
            LengthStatus::TooLong { .. } => "⚠️ TOO LONG",
        }
    }

    /// Present but outside the recommended range
    pub fn is_suboptimal(&self) -> bool {
        matches!(self, LengthStatus::TooShort | LengthStatus::TooLong { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthVerdict {
    pub status: LengthStatus,
    pub length: usize,
    pub recommendation: String,
}

impl LengthVerdict {
    pub fn missing() -> Self {
        Self {
            status: LengthStatus::Missing,
            length: 0,
            recommendation: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AltTextVerdict {
    pub total: usize,
    pub missing: usize,
    pub recommendation: String,
}

// Sources of external scripts that load without async/defer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderBlockingVerdict {
    pub scripts: Vec<String>,
}

impl RenderBlockingVerdict {
    pub fn lines(&self) -> Vec<String> {
        if self.scripts.is_empty() {
            return vec!["✅ No obvious render-blocking JavaScript files detected.".to_string()];
        }
        let mut lines = vec![
            "⚠️ Potential render-blocking script(s) found. Consider adding `defer` or `async` to these tags."
                .to_string(),
        ];
        lines.extend(self.scripts.iter().map(|src| format!("JS: {}...", src)));
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SchemaStatus {
    Valid,
    MissingProperties { missing: Vec<String> },
    Malformed,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaVerdict {
    pub index: usize,
    pub schema_type: String,
    #[serde(flatten)]
    pub status: SchemaStatus,
}

impl SchemaVerdict {
    pub fn is_valid(&self) -> bool {
        self.status == SchemaStatus::Valid
    }

    pub fn message(&self) -> String {
        match &self.status {
            SchemaStatus::Valid => {
                format!("✅ {}: All required properties are present.", self.schema_type)
            }
            SchemaStatus::MissingProperties { missing } => format!(
                "⚠️ {}: Missing required properties: {}.",
                self.schema_type,
                missing.join(", ")
            ),
            SchemaStatus::Malformed => format!(
                "❌ {}: Cannot validate, the JSON-LD was malformed or could not be loaded.",
                self.schema_type
            ),
            SchemaStatus::Unknown => format!(
                "ℹ️ {}: Unknown schema type or no specific Google requirements.",
                self.schema_type
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub title: LengthVerdict,
    pub description: LengthVerdict,
    pub image_alt: AltTextVerdict,
    pub render_blocking: RenderBlockingVerdict,
    pub schema: Vec<SchemaVerdict>,
}
