use crate::error::{FilterError, Result};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

// Layering, lowest to highest priority:
//
//   struct defaults
//   <dir>/call_filters.toml:   [panel]
//                              duration_step_secs = 30
//   env vars:                  CALL_FILTERS_PANEL__DURATION_STEP_SECS=30
//                              (double underscore = nesting)

pub const CONFIG_FILE_NAME: &str = "call_filters.toml";
pub const ENV_PREFIX: &str = "CALL_FILTERS_";

/// Top-level tunable configuration, deserialized by figment.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub panel: PanelFileConfig,
}

/// Panel tunables (lives under `[panel]` in call_filters.toml).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PanelFileConfig {
    #[serde(default = "default_duration_step_secs")]
    pub duration_step_secs: f64,
    /// Drop option rows with a zero count unless they are checked.
    #[serde(default)]
    pub hide_empty_options: bool,
}

impl Default for PanelFileConfig {
    fn default() -> Self {
        Self {
            duration_step_secs: default_duration_step_secs(),
            hide_empty_options: false,
        }
    }
}

fn default_duration_step_secs() -> f64 {
    10.0
}

/// Panel configuration (runtime view).
#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    /// Slider step in seconds
    pub duration_step_secs: f64,
    pub hide_empty_options: bool,
}

impl PanelConfig {
    pub fn from_file(fc: &PanelFileConfig) -> Result<Self> {
        if !fc.duration_step_secs.is_finite() || fc.duration_step_secs <= 0.0 {
            return Err(FilterError::InvalidConfig(format!(
                "panel.duration_step_secs must be a positive number, got {}",
                fc.duration_step_secs
            )));
        }
        Ok(Self {
            duration_step_secs: fc.duration_step_secs,
            hide_empty_options: fc.hide_empty_options,
        })
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        let fc = PanelFileConfig::default();
        Self {
            duration_step_secs: fc.duration_step_secs,
            hide_empty_options: fc.hide_empty_options,
        }
    }
}

/// Build a figment that layers: defaults → `<dir>/call_filters.toml` → `CALL_FILTERS_*` env vars.
pub fn load_config(dir: &Path) -> Figment {
    use figment::providers::{Env, Format, Serialized, Toml};

    Figment::from(Serialized::defaults(FileConfig::default()))
        .merge(Toml::file(dir.join(CONFIG_FILE_NAME)))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

pub fn load_panel_config(dir: &Path) -> Result<PanelConfig> {
    let fc: FileConfig = load_config(dir).extract()?;
    let config = PanelConfig::from_file(&fc.panel)?;
    info!(
        step = config.duration_step_secs,
        hide_empty = config.hide_empty_options,
        "Loaded panel config from {}",
        dir.display()
    );
    Ok(config)
}
