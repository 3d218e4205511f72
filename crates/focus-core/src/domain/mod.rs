//! Domain model (IDs, task records, importance, snapshots, errors).

pub mod context;
pub mod errors;
pub mod ids;
pub mod importance;
mod lenient;
pub mod snapshot;
pub mod task;

pub use context::TaskContext;
pub use errors::FocusError;
pub use ids::{SubscriptionId, TaskId};
pub use importance::Importance;
pub use snapshot::Snapshot;
pub use task::{Task, TaskDraft};
