// Domain Layer - Immutable thread and queue descriptors

pub mod error;
pub mod queue;
pub mod thread_spec;

// Re-exports
pub use error::DomainError;
pub use queue::{QueueConfigurationSpec, QueueConfigurationSpecBuilder, Role};
pub use thread_spec::{StackSize, ThreadSpec};
