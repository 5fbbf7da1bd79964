//! Line-driven front end: plain text converts, `/pick N` selects a
//! candidate, `/back` leaves the image screen, `/quit` exits.

use kanal::{AsyncReceiver, AsyncSender};
use kanapix_types::AppEvent;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("kana in, images out. Type phonetic text to convert;");
    println!("/pick <n> to search images, /back to return, /quit to exit.");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            event = app_to_ui_rx.recv() => {
                render(event?);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(()); // stdin closed
                };

                let line = line.trim();
                if line == "/quit" {
                    return Ok(());
                }
                if let Some(event) = parse_line(line) {
                    ui_to_app_tx.send(event).await?;
                }
            }
        }
    }
}

fn parse_line(line: &str) -> Option<AppEvent> {
    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix("/pick") {
        return match rest.trim().parse() {
            Ok(index) => Some(AppEvent::SelectCandidate(index)),
            Err(_) => {
                println!("usage: /pick <index>");
                None
            }
        };
    }

    if line == "/back" {
        return Some(AppEvent::DismissImages);
    }

    Some(AppEvent::Convert(line.to_string()))
}

fn render(event: AppEvent) {
    match event {
        AppEvent::ShowCandidates(candidates) => {
            if candidates.is_empty() {
                println!("no candidates");
            } else {
                for (index, word) in candidates.iter().enumerate() {
                    println!("  [{index}] {word}");
                }
            }
        }
        AppEvent::ShowImages(urls) => {
            println!("{} images, fetching:", urls.len());
            for (index, url) in urls.iter().enumerate() {
                println!("  [{index}] {url}");
            }
        }
        AppEvent::ImageReady { index } => {
            println!("  image {index} loaded");
        }
        // App-bound events never reach the front end
        AppEvent::Convert(_) | AppEvent::SelectCandidate(_) | AppEvent::DismissImages => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_becomes_a_convert_event() {
        assert!(matches!(parse_line("さくら"), Some(AppEvent::Convert(t)) if t == "さくら"));
    }

    #[test]
    fn pick_parses_the_index() {
        assert!(matches!(
            parse_line("/pick 2"),
            Some(AppEvent::SelectCandidate(2))
        ));
    }

    #[test]
    fn pick_without_a_number_is_rejected() {
        assert!(parse_line("/pick two").is_none());
    }

    #[test]
    fn back_dismisses_images() {
        assert!(matches!(parse_line("/back"), Some(AppEvent::DismissImages)));
    }

    #[test]
    fn empty_line_is_ignored() {
        assert!(parse_line("").is_none());
    }
}
