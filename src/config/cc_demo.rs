use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Which storage backend the demo populates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Dense,
    #[default]
    Rle,
}

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to dump per-component rectangles as JSON, if anywhere.
    pub components_json: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct CcDemoConfig {
    pub input: PathBuf,
    /// Gray levels below this are foreground.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_threshold() -> u8 {
    128
}

pub fn load_config(path: &Path) -> Result<CcDemoConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: CcDemoConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
