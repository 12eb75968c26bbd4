use serde::{Deserialize, Serialize};
use std::path::Path;

/// Distance between an obstacle box edge and the exit point placed outside it.
pub const DEFAULT_ESCAPE_DISTANCE: f32 = 30.0;
/// Margin the detour candidates keep clear of the gap and the obstacle boxes.
pub const DEFAULT_DETOUR_MARGIN: f32 = 20.0;

/// Tuning knobs for the routing pipeline itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// How far outside an obstacle box the exit points sit.
    pub escape_distance: f32,
    /// Extra clearance used by the east/north/west/south detour candidates.
    pub detour_margin: f32,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            escape_distance: DEFAULT_ESCAPE_DISTANCE,
            detour_margin: DEFAULT_DETOUR_MARGIN,
        }
    }
}

/// Styling for the SVG preview emitted by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub background: String,
    pub box_fill: String,
    pub box_stroke: String,
    pub box_stroke_width: f32,
    pub line_color: String,
    pub line_width: f32,
    pub endpoint_color: String,
    pub endpoint_radius: f32,
    /// Padding added around the content when deriving the viewBox.
    pub padding: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            box_fill: "#F8FAFF".to_string(),
            box_stroke: "#C7D2E5".to_string(),
            box_stroke_width: 1.4,
            line_color: "#7A8AA6".to_string(),
            line_width: 1.4,
            endpoint_color: "#1C2430".to_string(),
            endpoint_radius: 2.5,
            padding: 24.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Shape of an on-disk config file; every field is optional so a partial
/// file overrides only what it names.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    escape_distance: Option<f32>,
    detour_margin: Option<f32>,
    background: Option<String>,
    box_fill: Option<String>,
    box_stroke: Option<String>,
    line_color: Option<String>,
    line_width: Option<f32>,
}

fn apply_config_file(config: &mut Config, parsed: ConfigFile) {
    if let Some(v) = parsed.escape_distance {
        config.router.escape_distance = v;
    }
    if let Some(v) = parsed.detour_margin {
        config.router.detour_margin = v;
    }
    if let Some(v) = parsed.background {
        config.preview.background = v;
    }
    if let Some(v) = parsed.box_fill {
        config.preview.box_fill = v;
    }
    if let Some(v) = parsed.box_stroke {
        config.preview.box_stroke = v;
    }
    if let Some(v) = parsed.line_color {
        config.preview.line_color = v;
    }
    if let Some(v) = parsed.line_width {
        config.preview.line_width = v;
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    // JSON5 accepts plain JSON, so one parse handles both.
    let parsed: ConfigFile = json5::from_str(&contents)?;
    apply_config_file(&mut config, parsed);

    Ok(config)
}
