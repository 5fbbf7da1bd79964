use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kanapix_convert::ConversionClient;
use kanapix_search::ImageSearchClient;
use kanapix_types::AppEvent;

use crate::state::AppState;

pub mod convert;
pub mod select;

use convert::handle_convert;
use select::handle_select;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Build both API clients from config once, up front
    let (converter, searcher) = {
        let config = state.config.read().await;
        (
            ConversionClient::new(
                config.conversion.base_url.clone(),
                config.conversion.app_id.clone(),
            ),
            ImageSearchClient::new(
                config.search.base_url.clone(),
                config.search.api_key.clone(),
                config.search.lang.clone(),
                config.search.safesearch,
            ),
        )
    };

    tracing::info!("event loop started, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;
        handle_events(state.clone(), &converter, &searcher, &app_to_ui_tx, event).await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    converter: &ConversionClient,
    searcher: &ImageSearchClient,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Convert(text) => {
            tracing::debug!("convert requested for {} chars", text.chars().count());

            handle_convert(state, converter, app_to_ui_tx, text).await?;
        }
        AppEvent::SelectCandidate(index) => {
            tracing::debug!("candidate {index} selected");

            handle_select(state, searcher, app_to_ui_tx, index).await?;
        }
        AppEvent::DismissImages => {
            let mut session = state.session.write().await;
            session.dismiss();
        }
        AppEvent::ShowCandidates(_) | AppEvent::ShowImages(_) | AppEvent::ImageReady { .. } => {
            // UI-bound events, ignore in backend
        }
    }

    Ok(())
}
