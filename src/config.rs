use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Literal `(template id, caption lines, extension)` triple used to
/// generate deterministic test image URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFixture {
    pub template_id: String,
    pub lines: Vec<String>,
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: Url,
    pub default_extension: String,
    pub animated_extension: String,
    /// Caption lines used when a template has no example text of its own.
    pub placeholder_text: Vec<String>,
    pub test_fixtures: Vec<TestFixture>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            default_extension: "png".to_string(),
            animated_extension: "gif".to_string(),
            placeholder_text: vec!["your text".to_string(), "goes here".to_string()],
            test_fixtures: default_test_fixtures(),
        }
    }
}

fn default_test_fixtures() -> Vec<TestFixture> {
    vec![
        TestFixture {
            template_id: "fry".to_string(),
            lines: vec!["not sure if rendering".to_string(), "or placeholder".to_string()],
            extension: "png".to_string(),
        },
        TestFixture {
            template_id: "drake".to_string(),
            lines: vec!["checking by hand".to_string(), "a test gallery".to_string()],
            extension: "png".to_string(),
        },
        TestFixture {
            template_id: "ds".to_string(),
            lines: vec!["ship it friday".to_string(), "ship it monday".to_string()],
            extension: "gif".to_string(),
        },
    ]
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    parse_config(&content, path)
}

pub(crate) fn parse_config<T: serde::de::DeserializeOwned>(
    content: &str,
    file_path: &Path,
) -> Result<T> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("json");

    match extension.to_lowercase().as_str() {
        "json" => serde_json::from_str(content).context("Failed to parse JSON settings"),
        "yaml" | "yml" => serde_yaml::from_str(content).context("Failed to parse YAML settings"),
        "toml" => toml::from_str(content).context("Failed to parse TOML settings"),
        _ => Err(anyhow::anyhow!(
            "Unsupported settings file format: {}",
            extension
        )),
    }
}
