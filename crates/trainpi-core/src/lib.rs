//! Core domain of the TrainPi learning-plan engine.
//!
//! Career scoring, plan building, per-user snapshots and the metrics reducer
//! live here. Storage backends and use cases are provided by the
//! infrastructure and application crates.

pub mod career;
pub mod config;
pub mod error;
pub mod plan;
pub mod snapshot;
pub mod storage;
pub mod user;

pub use error::{Result, TrainpiError};
