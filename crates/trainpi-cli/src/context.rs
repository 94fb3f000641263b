//! Wiring of stores and use cases for one CLI invocation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use trainpi_application::{
    AccountUseCase, CareerUseCase, DashboardService, ExceptionService, LessonService,
};
use trainpi_core::config::{LatencyConfig, TrainpiConfig};
use trainpi_core::snapshot::UserDataStore;
use trainpi_core::storage::KeyValueStore;
use trainpi_infrastructure::{FileKeyValueStore, KvAccountRepository, TrainpiPaths};

pub struct AppContext {
    kv: Arc<dyn KeyValueStore>,
    store: UserDataStore,
    latency: LatencyConfig,
}

impl AppContext {
    /// Resolves the data directory: `--data-dir`, then `storage.data_dir`
    /// from config, then the platform data directory.
    pub fn new(
        config: &TrainpiConfig,
        paths: &TrainpiPaths,
        data_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let dir = match data_dir.or_else(|| config.storage.data_dir.clone()) {
            Some(dir) => dir,
            None => paths.data_dir()?,
        };
        tracing::debug!("Using data directory {}", dir.display());

        let kv: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(dir));
        Ok(Self {
            store: UserDataStore::new(kv.clone()),
            kv,
            latency: config.latency,
        })
    }

    pub fn accounts(&self) -> AccountUseCase {
        let repository = Arc::new(KvAccountRepository::new(self.kv.clone()));
        AccountUseCase::new(repository, self.store.clone(), self.latency)
    }

    pub fn career(&self) -> CareerUseCase {
        CareerUseCase::new(self.store.clone(), self.latency)
    }

    pub fn lessons(&self) -> LessonService {
        LessonService::new(self.store.clone(), self.latency)
    }

    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(self.store.clone(), self.latency)
    }

    pub fn exceptions(&self) -> ExceptionService {
        ExceptionService::new(self.store.clone(), self.latency)
    }
}
