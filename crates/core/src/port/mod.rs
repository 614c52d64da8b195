// Port Layer - Interfaces for external dependencies

pub mod environment;

// Re-exports
pub use environment::EnvironmentProbe;
