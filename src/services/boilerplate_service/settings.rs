use crate::models::boilerplate::BoilerplateSettings;
use crate::utils::errors::BoilerplateError;
use log::info;
use serde_json::{Map, Value};
use std::path::Path;

/// Reads a settings file. Known keys override the defaults, unknown keys are ignored
/// and non-string values are taken by their JSON text.
pub async fn load_settings(path: &Path) -> Result<BoilerplateSettings, BoilerplateError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let settings = parse_settings(&raw)?;
    info!("Loaded boilerplate settings from {}", path.display());
    Ok(settings)
}

pub fn parse_settings(raw: &str) -> Result<BoilerplateSettings, BoilerplateError> {
    let parsed: Map<String, Value> = serde_json::from_str(raw)?;
    let as_strings: Map<String, Value> = parsed
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, Value::String(text))
        })
        .collect();
    Ok(serde_json::from_value(Value::Object(as_strings))?)
}

pub async fn save_settings(
    path: &Path,
    settings: &BoilerplateSettings,
) -> Result<(), BoilerplateError> {
    let json = serde_json::to_string_pretty(&settings.trimmed())?;
    tokio::fs::write(path, json).await?;
    info!("Saved boilerplate settings to {}", path.display());
    Ok(())
}
