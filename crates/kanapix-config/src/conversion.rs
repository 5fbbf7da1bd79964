use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://jlp.yahooapis.jp/JIMService/V1/conversion".to_string()
}

/// Kana-to-kanji conversion endpoint settings
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConversionConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Application identifier sent as the `appid` query parameter
    #[serde(default)]
    pub app_id: String,
}

impl ConversionConfig {
    pub fn new() -> Self {
        let base_url = env::var("CONVERSION_BASE_URL").unwrap_or_else(|_| default_base_url());
        let app_id = env::var("CONVERSION_APP_ID").unwrap_or_default();

        Self { base_url, app_id }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: String::new(),
        }
    }
}
