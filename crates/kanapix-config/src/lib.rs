use serde::{Deserialize, Serialize};

use self::conversion::ConversionConfig;
use self::search::ImageSearchConfig;

pub mod conversion;
pub mod search;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub conversion: ConversionConfig,
    pub search: ImageSearchConfig,
}

impl Config {
    /// Build from environment variables, falling back to defaults.
    /// API credentials have no usable default; requests made without
    /// them go out anyway and the remote service rejects them.
    pub fn new() -> Self {
        Config {
            conversion: ConversionConfig::new(),
            search: ImageSearchConfig::new(),
        }
    }
}
