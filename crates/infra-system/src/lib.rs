// Bridgequeue Infrastructure - System Adapters
// Implements: EnvironmentProbe

pub mod system_environment;

pub use system_environment::{HostInfo, SystemEnvironment};
