//! Shared handler state.

use crate::error::AppError;
use std::path::Path;
use std::sync::Arc;
use taskboard_core::{CsvStore, ServiceResult, TrackerService};

/// Router state holding the injected tracker service.
#[derive(Clone)]
pub struct AppState {
    service: Arc<TrackerService<CsvStore>>,
}

impl AppState {
    pub fn new(service: TrackerService<CsvStore>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// State backed by CSV files inside `data_dir`.
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(TrackerService::new(CsvStore::new(data_dir)))
    }

    pub fn service(&self) -> &TrackerService<CsvStore> {
        &self.service
    }

    /// Runs one blocking service call off the async workers.
    pub(crate) async fn run<T, F>(&self, op: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(&TrackerService<CsvStore>) -> ServiceResult<T> + Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let result = tokio::task::spawn_blocking(move || op(&service))
            .await
            .map_err(AppError::Join)?;
        Ok(result?)
    }
}
