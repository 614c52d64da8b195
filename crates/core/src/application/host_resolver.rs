// Development server host resolution
//
// Emulators reach the development machine through a reserved loopback alias
// instead of localhost. The alias depends on the virtualization in use.

use tracing::debug;

use super::constants::{
    ALTERNATE_VIRTUALIZATION_HOST, ALTERNATE_VIRTUALIZATION_MARKER, DEFAULT_SERVER_PORT,
    DEVICE_HOST, STOCK_EMULATOR_HOST, STOCK_EMULATOR_MARKER,
};
use crate::port::EnvironmentProbe;

/// Kind of environment the bridge runs in, as far as host aliasing goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEnvironment {
    /// VirtualBox-based emulator
    AlternateVirtualization,
    /// Stock emulator
    StockEmulator,
    /// Physical device or anything unrecognized
    Device,
}

impl HostEnvironment {
    /// Classify a fingerprint; the alternate virtualization marker wins over
    /// the stock emulator marker
    pub fn detect(fingerprint: &str) -> Self {
        if fingerprint.contains(ALTERNATE_VIRTUALIZATION_MARKER) {
            HostEnvironment::AlternateVirtualization
        } else if fingerprint.contains(STOCK_EMULATOR_MARKER) {
            HostEnvironment::StockEmulator
        } else {
            HostEnvironment::Device
        }
    }

    pub fn loopback_alias(&self) -> &'static str {
        match self {
            HostEnvironment::AlternateVirtualization => ALTERNATE_VIRTUALIZATION_HOST,
            HostEnvironment::StockEmulator => STOCK_EMULATOR_HOST,
            HostEnvironment::Device => DEVICE_HOST,
        }
    }
}

/// `<alias>:<port>` address of the development server
///
/// An empty `explicit_port` falls back to the default port.
pub fn resolve_server_host(env: &dyn EnvironmentProbe, explicit_port: &str) -> String {
    let port = if explicit_port.is_empty() {
        DEFAULT_SERVER_PORT
    } else {
        explicit_port
    };

    let fingerprint = env.fingerprint();
    let host_env = HostEnvironment::detect(&fingerprint);
    let host = format!("{}:{}", host_env.loopback_alias(), port);

    debug!(fingerprint = %fingerprint, environment = ?host_env, host = %host, "Server host resolved");
    host
}
