use kanapix_types::ImageResult;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed search response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the image-search endpoint
#[derive(Clone)]
pub struct ImageSearchClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    lang: String,
    safesearch: bool,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    #[serde(rename = "previewURL")]
    preview_url: Option<String>,
}

impl ImageSearchClient {
    pub fn new(base_url: String, api_key: String, lang: String, safesearch: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            lang,
            safesearch,
        }
    }

    /// Look up images for a keyword, single attempt. Each hit carrying a
    /// `previewURL` becomes one URL-only [`ImageResult`], in response order;
    /// hits without one are skipped.
    pub async fn search(&self, keyword: &str) -> Result<Vec<ImageResult>, SearchError> {
        let url = self.request_url(keyword);

        let body = self.client.get(&url).send().await?.text().await?;

        parse_hits(&body)
    }

    fn request_url(&self, keyword: &str) -> String {
        format!(
            "{}?key={}&q={}&lang={}&safesearch={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(keyword),
            self.lang,
            self.safesearch
        )
    }
}

fn parse_hits(body: &str) -> Result<Vec<ImageResult>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body)?;

    let results = response
        .hits
        .into_iter()
        .filter_map(|hit| hit.preview_url)
        .map(ImageResult::new)
        .collect();

    Ok(results)
}
