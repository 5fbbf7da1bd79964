use serde::{Deserialize, Serialize};

/// One kanji rendering proposed by the conversion service
pub type Candidate = String;

/// A single image-search hit. Created URL-only; bytes arrive later,
/// independently per item, once the store's fetch for it completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResult {
    pub source_url: String,
    pub bytes: Option<Vec<u8>>,
}

impl ImageResult {
    pub fn new(source_url: String) -> Self {
        Self {
            source_url,
            bytes: None,
        }
    }
}

/// Which of the two screens the session is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Converting,
    ViewingImages,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Front end submitted phonetic text for conversion
    Convert(String),
    /// Front end picked a candidate by list index
    SelectCandidate(usize),
    /// Front end closed the image screen
    DismissImages,
    /// Backend has a fresh candidate list to display
    ShowCandidates(Vec<Candidate>),
    /// Backend switched to the image screen with these source URLs
    ShowImages(Vec<String>),
    /// Bytes for one image slot landed and it can render
    ImageReady { index: usize },
}
