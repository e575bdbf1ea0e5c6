use std::env;

use serde::{Deserialize, Serialize};

fn default_popup_width() -> f64 {
    320.0
}

fn default_popup_height() -> f64 {
    240.0
}

fn default_show_pitch() -> bool {
    true
}

/// Fallback popup dimensions for hosts that place before first render
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OverlayConfig {
    #[serde(default = "default_popup_width")]
    pub popup_width: f64,
    #[serde(default = "default_popup_height")]
    pub popup_height: f64,
    #[serde(default = "default_show_pitch")]
    pub show_pitch: bool,
}

impl OverlayConfig {
    pub fn new() -> Self {
        let popup_width = env::var("KASANE_POPUP_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_popup_width);

        let popup_height = env::var("KASANE_POPUP_HEIGHT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_popup_height);

        Self {
            popup_width,
            popup_height,
            ..Self::default()
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            popup_width: default_popup_width(),
            popup_height: default_popup_height(),
            show_pitch: default_show_pitch(),
        }
    }
}
