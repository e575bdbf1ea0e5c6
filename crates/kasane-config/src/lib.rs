use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::overlay::OverlayConfig;

pub mod dictionary;
pub mod overlay;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub overlay: OverlayConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            overlay: OverlayConfig::new(),
        }
    }
}
