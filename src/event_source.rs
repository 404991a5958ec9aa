use crate::domain::events::FormEvent;
use std::io;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::SendError;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{info, instrument, warn};

/// Forwards newline-delimited JSON events to the controller until `close` or end of input.
/// Returns the number of events forwarded.
#[instrument(skip_all)]
pub async fn forward_events<R>(reader: R, tx: Sender<FormEvent>) -> Result<usize, EventSourceError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = LinesStream::new(reader.lines());
    let mut forwarded = 0;

    while let Some(line) = lines.next().await {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<FormEvent>(&line) {
            Ok(event) => {
                let close = event == FormEvent::Close;
                tx.send(event).await?;
                forwarded += 1;
                if close {
                    return Ok(forwarded);
                }
            }
            Err(e) => warn!("⚠️ Ignoring malformed event '{}': {}", line, e),
        }
    }

    info!("🔴 Input ended, closing the form");
    tx.send(FormEvent::Close).await?;
    Ok(forwarded + 1)
}

#[derive(Error, Debug)]
pub enum EventSourceError {
    #[error("unable to read events: {0}")]
    Io(#[from] io::Error),
    #[error("the form is no longer listening")]
    ChannelClosed(#[from] SendError<FormEvent>),
}
