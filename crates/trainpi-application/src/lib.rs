//! Application layer for TrainPi.
//!
//! Use cases that coordinate the core components over a snapshot store and
//! add the configured artificial latency before resolving.

pub mod account_usecase;
pub mod career_usecase;
pub mod dashboard_service;
pub mod exception_service;
pub mod lesson_service;
mod latency;

pub use account_usecase::AccountUseCase;
pub use career_usecase::{CareerSelection, CareerUseCase};
pub use dashboard_service::DashboardService;
pub use exception_service::ExceptionService;
pub use lesson_service::LessonService;
