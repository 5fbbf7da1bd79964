//! Byte store for one image-search session.
//!
//! `begin` replaces all slots and spawns one fetch task per URL; each slot
//! fills as its own fetch completes, siblings unaffected. Slot order always
//! follows the URL list, never completion order. A new `begin` bumps the
//! generation, so completions from a superseded search are detected and
//! dropped instead of overwriting fresh state.

use std::sync::Arc;

use kanal::AsyncSender;
use kanapix_types::{AppEvent, ImageResult};
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("undecodable image bytes: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(Clone)]
pub struct ImageStore {
    client: reqwest::Client,
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    generation: u64,
    slots: Vec<ImageResult>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    /// Start a new fetch session: discard all prior slots, create URL-only
    /// slots in list order, and spawn an independent fetch per slot.
    /// `ready_tx` gets an [`AppEvent::ImageReady`] per slot that lands.
    pub async fn begin(&self, urls: Vec<String>, ready_tx: AsyncSender<AppEvent>) -> u64 {
        let generation = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            inner.slots = urls.iter().cloned().map(ImageResult::new).collect();
            inner.generation
        };

        for (index, url) in urls.into_iter().enumerate() {
            let store = self.clone();
            let tx = ready_tx.clone();

            tokio::spawn(async move {
                match fetch_image(&store.client, &url).await {
                    Ok(bytes) => {
                        if store.apply_fetched(generation, index, bytes).await {
                            let _ = tx.send(AppEvent::ImageReady { index }).await;
                        } else {
                            tracing::debug!("dropping stale image fetch for {url}");
                        }
                    }
                    // Best effort: a failed slot stays empty, no retry
                    Err(e) => tracing::warn!("image fetch failed for {url}: {e}"),
                }
            });
        }

        generation
    }

    /// Write fetched bytes into their slot. Returns false, without writing,
    /// when the fetch belongs to a superseded generation.
    pub async fn apply_fetched(&self, generation: u64, index: usize, bytes: Vec<u8>) -> bool {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            return false;
        }

        match inner.slots.get_mut(index) {
            Some(slot) => {
                slot.bytes = Some(bytes);
                true
            }
            None => false,
        }
    }

    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }

    /// Current slots, in original URL order
    pub async fn snapshot(&self) -> Vec<ImageResult> {
        self.inner.read().await.slots.clone()
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let bytes = client.get(url).send().await?.bytes().await?;
    validate_image(&bytes)?;
    Ok(bytes.to_vec())
}

/// Reject payloads that are not a decodable image (error pages, truncated
/// bodies) before they reach a display slot.
fn validate_image(bytes: &[u8]) -> Result<(), FetchError> {
    image::load_from_memory(bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_fixture() -> Vec<u8> {
        let img = image::RgbaImage::new(1, 1);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("http://images.invalid/{i}.jpg")).collect()
    }

    #[tokio::test]
    async fn begin_creates_url_only_slots_in_order() {
        let store = ImageStore::new();
        let (tx, _rx) = kanal::unbounded_async();

        store.begin(urls(3), tx).await;

        let slots = store.snapshot().await;
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[1].source_url, "http://images.invalid/1.jpg");
        assert!(slots.iter().all(|s| s.bytes.is_none()));
    }

    #[tokio::test]
    async fn completion_order_does_not_change_slot_order() {
        let store = ImageStore::new();
        let (tx, _rx) = kanal::unbounded_async();
        let generation = store.begin(urls(2), tx).await;

        // Second slot lands first
        assert!(store.apply_fetched(generation, 1, vec![2]).await);
        assert!(store.apply_fetched(generation, 0, vec![1]).await);

        let slots = store.snapshot().await;
        assert_eq!(slots[0].source_url, "http://images.invalid/0.jpg");
        assert_eq!(slots[0].bytes, Some(vec![1]));
        assert_eq!(slots[1].bytes, Some(vec![2]));
    }

    #[tokio::test]
    async fn stale_generation_is_discarded() {
        let store = ImageStore::new();
        let (tx, _rx) = kanal::unbounded_async();

        let old = store.begin(urls(2), tx.clone()).await;
        let new = store.begin(urls(1), tx).await;
        assert_ne!(old, new);

        // A fetch from the superseded search arrives late
        assert!(!store.apply_fetched(old, 1, vec![9]).await);

        let slots = store.snapshot().await;
        assert_eq!(slots.len(), 1);
        assert!(slots[0].bytes.is_none());
    }

    #[tokio::test]
    async fn out_of_range_slot_is_rejected() {
        let store = ImageStore::new();
        let (tx, _rx) = kanal::unbounded_async();
        let generation = store.begin(urls(1), tx).await;

        assert!(!store.apply_fetched(generation, 5, vec![1]).await);
    }

    #[test]
    fn validate_image_accepts_png_bytes() {
        assert!(validate_image(&png_fixture()).is_ok());
    }

    #[test]
    fn validate_image_rejects_non_image_bytes() {
        let err = validate_image(b"<html>not found</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
