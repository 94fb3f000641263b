//! Storage backends, paths and configuration loading for TrainPi.

pub mod account_repository;
pub mod config_service;
pub mod file_key_value_store;
pub mod memory_key_value_store;
pub mod paths;
pub mod storage;

pub use account_repository::KvAccountRepository;
pub use config_service::ConfigService;
pub use file_key_value_store::FileKeyValueStore;
pub use memory_key_value_store::MemoryKeyValueStore;
pub use paths::{PathError, TrainpiPaths};
