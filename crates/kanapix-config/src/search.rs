use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://pixabay.com/api/".to_string()
}

fn default_lang() -> String {
    "ja".to_string()
}

fn default_safesearch() -> bool {
    true
}

/// Image-search endpoint settings
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ImageSearchConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Language filter sent as the `lang` query parameter
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_safesearch")]
    pub safesearch: bool,
}

impl ImageSearchConfig {
    pub fn new() -> Self {
        let base_url = env::var("IMAGE_SEARCH_BASE_URL").unwrap_or_else(|_| default_base_url());
        let api_key = env::var("IMAGE_SEARCH_API_KEY").unwrap_or_default();
        let lang = env::var("IMAGE_SEARCH_LANG").unwrap_or_else(|_| default_lang());
        let safesearch = env::var("IMAGE_SEARCH_SAFESEARCH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_safesearch);

        Self {
            base_url,
            api_key,
            lang,
            safesearch,
        }
    }
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            lang: default_lang(),
            safesearch: default_safesearch(),
        }
    }
}
