use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level project configuration loaded from `.s2h.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct S2hConfig {
    pub input: String,
    pub output: String,
    /// Overrides the base URL derived from the document.
    pub base_url: Option<String>,
    pub overwrite: bool,
    pub output_options: OutputOptions,
}

impl Default for S2hConfig {
    fn default() -> Self {
        Self {
            input: "swagger.json".to_string(),
            output: "http".to_string(),
            base_url: None,
            overwrite: false,
            output_options: OutputOptions::default(),
        }
    }
}

/// How the rendered requests are written out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    pub layout: OutputLayout,
    /// Emit `# @name <var>` under each request title.
    pub named_requests: bool,
    /// File name used by the combined layout.
    pub combined_file_name: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            layout: OutputLayout::PerTag,
            named_requests: false,
            combined_file_name: "swagger.http".to_string(),
        }
    }
}

/// How generated files are laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLayout {
    /// One `<tag>.http` file per tag.
    #[default]
    PerTag,
    /// Every request in a single file.
    Combined,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".s2h.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<S2hConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: S2hConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    log::debug!("loaded config from {}", path.display());
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r##"# swagger-to-http configuration
input: swagger.json
output: http
# base_url: https://api.example.com   # overrides the document's servers/host
overwrite: false

output_options:
  layout: per_tag             # per_tag | combined
  named_requests: false       # add "# @name <var>" to every request
  combined_file_name: swagger.http
"##
}
