use std::sync::Arc;

use kanal::AsyncSender;
use kanapix_search::ImageSearchClient;
use kanapix_types::AppEvent;

use crate::state::AppState;

/// Search images for the picked candidate. Only a non-empty result set
/// moves the session to the image screen and starts byte fetches; an
/// empty set or a failed call leaves the screen as it was.
pub async fn handle_select(
    state: Arc<AppState>,
    searcher: &ImageSearchClient,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    index: usize,
) -> anyhow::Result<()> {
    let keyword = {
        let mut session = state.session.write().await;
        session.select(index)
    };

    let Some(keyword) = keyword else {
        tracing::warn!("candidate index {index} out of range, ignoring");
        return Ok(());
    };

    match searcher.search(&keyword).await {
        Ok(results) => {
            let urls: Vec<String> = results.iter().map(|r| r.source_url.clone()).collect();

            let moved = {
                let mut session = state.session.write().await;
                session.apply_search_results(results)
            };

            if moved {
                state.store.begin(urls.clone(), app_to_ui_tx.clone()).await;
                app_to_ui_tx.send(AppEvent::ShowImages(urls)).await?;
            } else {
                tracing::info!("no images found for {keyword}");
            }
        }
        Err(e) => {
            tracing::error!("image search failed: {e}");
        }
    }

    Ok(())
}
