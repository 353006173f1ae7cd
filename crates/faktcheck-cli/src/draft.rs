//! Draft persistence for the interactive session.
//!
//! The draft is the raw text the user is composing. [`DraftStore`] reads and
//! writes it as a plain file; [`DebouncedDraft`] coalesces rapid edits so the
//! file is written at most once per quiet period.

use crate::config::Config;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Quiet period before a pending draft is written.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// File-backed storage for the draft text.
#[derive(Debug, Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    /// Store the draft at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store the draft at `~/.faktcheck/draft.txt`.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(Config::data_dir()?.join("draft.txt")))
    }

    /// Path of the draft file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored draft, if there is a non-empty one.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the draft. An empty draft removes the file.
    pub fn save(&self, text: &str) -> Result<()> {
        if text.is_empty() {
            return self.clear();
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Remove the stored draft.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

enum DraftMessage {
    Update(String),
    Flush(oneshot::Sender<()>),
}

/// Debounced writer in front of a [`DraftStore`].
///
/// Every [`update`](Self::update) restarts the quiet period; only the latest
/// text is written once the period elapses. Must be created inside a tokio
/// runtime.
pub struct DebouncedDraft {
    tx: mpsc::UnboundedSender<DraftMessage>,
    handle: JoinHandle<()>,
}

impl DebouncedDraft {
    /// Spawn the writer task.
    pub fn new(store: DraftStore, quiet_period: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_writer(store, quiet_period, rx));
        Self { tx, handle }
    }

    /// Schedule a write of `text`, replacing any pending one.
    pub fn update(&self, text: impl Into<String>) {
        if self.tx.send(DraftMessage::Update(text.into())).is_err() {
            warn!("Draft writer has stopped; edit not persisted");
        }
    }

    /// Write any pending text now.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(DraftMessage::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }

    /// Empty the draft and remove it from disk immediately.
    pub async fn clear(&self) {
        self.update(String::new());
        self.flush().await;
    }

    /// Write any pending text and stop the writer task.
    pub async fn shutdown(self) {
        let Self { tx, handle } = self;
        drop(tx);
        if let Err(e) = handle.await {
            warn!("Draft writer task failed: {}", e);
        }
    }
}

async fn run_writer(store: DraftStore, quiet_period: Duration, mut rx: mpsc::UnboundedReceiver<DraftMessage>) {
    let mut pending: Option<String> = None;

    loop {
        let message = if pending.is_some() {
            tokio::select! {
                message = rx.recv() => message,
                _ = tokio::time::sleep(quiet_period) => {
                    write_pending(&store, &mut pending);
                    continue;
                }
            }
        } else {
            rx.recv().await
        };

        match message {
            Some(DraftMessage::Update(text)) => pending = Some(text),
            Some(DraftMessage::Flush(ack)) => {
                write_pending(&store, &mut pending);
                let _ = ack.send(());
            }
            None => {
                write_pending(&store, &mut pending);
                break;
            }
        }
    }
}

fn write_pending(store: &DraftStore, pending: &mut Option<String>) {
    if let Some(text) = pending.take() {
        debug!("Writing draft ({} bytes) to {}", text.len(), store.path().display());
        if let Err(e) = store.save(&text) {
            warn!("Failed to persist draft: {}", e);
        }
    }
}
