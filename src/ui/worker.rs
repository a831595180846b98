use std::io;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc::{self, UnboundedSender};

use crate::catalog::{CatalogClient, CatalogRequest, QuerySnapshot};
use crate::ui::events::AppEvent;

/// One fetch to execute, tagged with the sequence number the app uses to
/// recognize stale outcomes.
#[derive(Debug, Clone)]
pub struct FetchCommand {
    pub seq: u64,
    pub snapshot: QuerySnapshot,
}

pub type FetchSender = UnboundedSender<FetchCommand>;

/// Spawns the fetch worker: a thread driving a current-thread runtime that
/// executes commands strictly in order, one request in flight at a time.
///
/// The request is built from the snapshot at execution time, so the
/// release-date cutoff reflects the calendar date of the request. The
/// worker exits when the command channel closes.
pub fn spawn_fetch_worker(
    client: CatalogClient,
    events: Sender<AppEvent>,
) -> io::Result<(FetchSender, JoinHandle<()>)> {
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchCommand>();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let handle = thread::spawn(move || {
        runtime.block_on(async move {
            while let Some(command) = rx.recv().await {
                let request = CatalogRequest::from_snapshot(&command.snapshot);
                tracing::debug!(
                    seq = command.seq,
                    endpoint = request.endpoint.path(),
                    "executing fetch"
                );

                let outcome = client.fetch(&request).await;
                if let Err(err) = &outcome {
                    tracing::warn!(seq = command.seq, "fetch failed: {err}");
                }

                if events
                    .send(AppEvent::FetchFinished {
                        seq: command.seq,
                        outcome,
                    })
                    .is_err()
                {
                    // UI loop is gone.
                    break;
                }
            }
        });
    });

    Ok((tx, handle))
}
