use kanapix_types::{Candidate, ImageResult, Screen};

/// In-memory state for one user working the two screens.
///
/// Invariants: `image_results` is non-empty only on the image screen,
/// and the candidate list is cleared the moment a selection is made.
pub struct Session {
    pub input_text: String,
    pub candidates: Vec<Candidate>,
    pub selected: Option<Candidate>,
    pub image_results: Vec<ImageResult>,
    pub screen: Screen,
}

impl Session {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            candidates: Vec::new(),
            selected: None,
            image_results: Vec::new(),
            screen: Screen::Converting,
        }
    }

    pub fn set_input(&mut self, text: String) {
        self.input_text = text;
    }

    /// Replace the candidate list wholesale
    pub fn apply_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
    }

    /// Pick a candidate by list index. Clears the candidate list and
    /// returns the picked word as the search keyword.
    pub fn select(&mut self, index: usize) -> Option<Candidate> {
        let candidate = self.candidates.get(index).cloned()?;
        self.selected = Some(candidate.clone());
        self.candidates.clear();
        Some(candidate)
    }

    /// Apply a finished search. A non-empty result list replaces the image
    /// list wholesale and moves to the image screen; an empty list is a
    /// silent no-op and the session stays put. Returns whether it moved.
    pub fn apply_search_results(&mut self, results: Vec<ImageResult>) -> bool {
        if results.is_empty() {
            return false;
        }

        self.image_results = results;
        self.screen = Screen::ViewingImages;
        true
    }

    /// Leave the image screen, discarding its results
    pub fn dismiss(&mut self) {
        self.image_results.clear();
        self.screen = Screen::Converting;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
