use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::canvas::Rgb;
use crate::theme::ThemeRule;

#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrandConfig {
    pub gradient_start: Rgb,
    pub gradient_end: Rgb,
    pub text_color: Rgb,
    pub font_family: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            gradient_start: Rgb(59, 130, 246),
            gradient_end: Rgb(139, 92, 246),
            text_color: Rgb::WHITE,
            font_family: "Helvetica, Arial, DejaVu Sans, sans-serif".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub render: RenderConfig,
    pub brand: BrandConfig,
    pub output_dir: Option<PathBuf>,
    /// Brand theme rules, appended after the built-in table.
    pub theme_rules: Vec<ThemeRule>,
}

// Every field optional, merged over defaults. JSON5 so hand-written
// brand files can carry comments.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    width: Option<u32>,
    height: Option<u32>,
    output_dir: Option<PathBuf>,
    gradient_start: Option<Rgb>,
    gradient_end: Option<Rgb>,
    text_color: Option<Rgb>,
    font_family: Option<String>,
    #[serde(default)]
    themes: Vec<ThemeRule>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = json5::from_str(&contents)?;

    if let Some(v) = parsed.width {
        config.render.width = v;
    }
    if let Some(v) = parsed.height {
        config.render.height = v;
    }
    if let Some(v) = parsed.output_dir {
        config.output_dir = Some(v);
    }
    if let Some(v) = parsed.gradient_start {
        config.brand.gradient_start = v;
    }
    if let Some(v) = parsed.gradient_end {
        config.brand.gradient_end = v;
    }
    if let Some(v) = parsed.text_color {
        config.brand.text_color = v;
    }
    if let Some(v) = parsed.font_family {
        config.brand.font_family = v;
    }
    config.theme_rules = parsed.themes;

    Ok(config)
}
