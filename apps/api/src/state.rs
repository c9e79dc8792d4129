use std::sync::{Arc, Mutex, PoisonError};

use crate::config::Config;
use crate::editor::ResumeEditor;
use crate::errors::AppError;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one editor this service instance owns. Requests are serialized on the lock,
    /// mirroring one UI event being processed at a time.
    pub editor: Arc<Mutex<ResumeEditor>>,
    pub config: Config,
}

impl AppState {
    pub fn new(editor: ResumeEditor, config: Config) -> Self {
        Self {
            editor: Arc::new(Mutex::new(editor)),
            config,
        }
    }

    /// Runs `f` against the editor on the blocking pool.
    /// Storage backends are synchronous, so the mutation and its write stay off the executor.
    pub async fn with_editor<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut ResumeEditor) -> T + Send + 'static,
        T: Send + 'static,
    {
        let editor = Arc::clone(&self.editor);
        tokio::task::spawn_blocking(move || {
            let mut guard = editor.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut guard)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in editor task: {e}")))
    }
}
