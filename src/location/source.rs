use crate::domain::LocationFix;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, info, instrument, warn};

/// Forwards newline-delimited JSON location fixes to `tx` until end of input or until the
/// receiving side is dropped. Lines that do not parse are logged and skipped.
#[instrument(skip_all)]
pub async fn read_fixes<R>(reader: R, tx: Sender<LocationFix>) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = LinesStream::new(reader.lines());
    let mut forwarded = 0;
    let mut line_number = 0;

    while let Some(line) = lines.next().await {
        let line = line?;
        line_number += 1;

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<LocationFix>(line) {
            Ok(fix) => {
                if tx.send(fix).await.is_err() {
                    debug!("Location tracker is gone, no longer reading fixes");
                    break;
                }
                forwarded += 1;
            }
            Err(e) => warn!(line = line_number, "⚠️ Could not parse location fix: {}", e),
        }
    }

    info!("✅ Forwarded {} location fix(es)", forwarded);
    Ok(forwarded)
}
