use std::sync::Arc;

use kanal::AsyncSender;
use kanapix_convert::ConversionClient;
use kanapix_types::AppEvent;

use crate::state::AppState;

/// Run one conversion round trip and publish the fresh candidate list.
/// Any failure is logged and swallowed; the session keeps whatever
/// candidates it already had.
pub async fn handle_convert(
    state: Arc<AppState>,
    converter: &ConversionClient,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    text: String,
) -> anyhow::Result<()> {
    {
        let mut session = state.session.write().await;
        session.set_input(text.clone());
    }

    match converter.convert(&text).await {
        Ok(candidates) => {
            tracing::debug!("{} candidates for input", candidates.len());

            {
                let mut session = state.session.write().await;
                session.apply_candidates(candidates.clone());
            }

            app_to_ui_tx
                .send(AppEvent::ShowCandidates(candidates))
                .await?;
        }
        Err(e) => {
            tracing::error!("conversion failed: {e}");
        }
    }

    Ok(())
}
