// Application Layer - Policies built on the domain descriptors

pub mod constants;
pub mod default_policy;
pub mod host_resolver;

// Re-exports
pub use default_policy::{create_default, thread_name, DefaultQueuePolicy, LegacyStackPolicy};
pub use host_resolver::{resolve_server_host, HostEnvironment};
