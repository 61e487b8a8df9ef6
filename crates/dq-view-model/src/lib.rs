//! Data-quality dashboard view models
//!
//! Wire types for the analytics API and the presentation rules the
//! browser frontend applies to them. No browser APIs are used here so the
//! whole crate is testable natively.

pub mod chart;
pub mod config;
pub mod envelope;
pub mod format;
pub mod geo;
pub mod reconcile;
pub mod region;
pub mod selection;
pub mod style;
pub mod task;

pub use config::{AppConfig, Endpoints, MapViewConfig};
pub use envelope::{ApiError, Envelope};
pub use reconcile::{StatusConflict, StatusOverlay};
pub use region::{DashboardSummary, RegionDetail, RegionIndex, RegionSummary, Severity};
pub use selection::SelectionGuard;
pub use task::{Priority, StatusPatch, Task, TaskFilter, TaskForm, TaskId, TaskStats, TaskStatus};
