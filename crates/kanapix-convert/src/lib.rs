use kanapix_types::Candidate;

pub mod xml;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed conversion response: {0}")]
    Parse(String),
}

/// Client for the kana-to-kanji conversion endpoint
#[derive(Clone)]
pub struct ConversionClient {
    client: reqwest::Client,
    base_url: String,
    app_id: String,
}

impl ConversionClient {
    pub fn new(base_url: String, app_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            app_id,
        }
    }

    /// Convert phonetic text into an ordered candidate list, single attempt.
    /// An absent candidate path in the response yields an empty list, not
    /// an error; callers decide whether that matters.
    pub async fn convert(&self, text: &str) -> Result<Vec<Candidate>, ConvertError> {
        let url = self.request_url(text);

        let response = self.client.get(&url).send().await?;
        let body = response.text().await?;

        xml::parse_candidates(&body)
    }

    fn request_url(&self, text: &str) -> String {
        format!(
            "{}?appid={}&sentence={}",
            self.base_url,
            self.app_id,
            urlencoding::encode(text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_percent_encodes_multibyte_text() {
        let client = ConversionClient::new(
            "https://example.com/conversion".to_string(),
            "testapp".to_string(),
        );

        let url = client.request_url("さくら");
        assert_eq!(
            url,
            "https://example.com/conversion?appid=testapp&sentence=%E3%81%95%E3%81%8F%E3%82%89"
        );
    }

    #[test]
    fn request_url_passes_empty_text_through() {
        let client = ConversionClient::new(
            "https://example.com/conversion".to_string(),
            "testapp".to_string(),
        );

        let url = client.request_url("");
        assert_eq!(url, "https://example.com/conversion?appid=testapp&sentence=");
    }
}
