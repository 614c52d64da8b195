// System environment implementation
// reason: sysinfo for cross-platform OS identification
use sysinfo::System;
use tracing::{debug, warn};

use bridgequeue_core::application::constants::UNKNOWN_PLATFORM_VERSION;
use bridgequeue_core::port::EnvironmentProbe;
use bridgequeue_core::{AppError, Result};

/// Environment variable overriding the detected fingerprint
pub const FINGERPRINT_ENV: &str = "BRIDGEQUEUE_FINGERPRINT";

/// Environment variable overriding the detected platform version (integer)
pub const PLATFORM_VERSION_ENV: &str = "BRIDGEQUEUE_PLATFORM_VERSION";

/// Host OS identification as reported by sysinfo
#[derive(Debug, Clone, Default)]
pub struct HostInfo {
    pub os_name: String,
    pub os_version: String,
    pub kernel_version: String,
    pub host_name: String,
}

impl HostInfo {
    pub fn collect() -> Self {
        Self {
            os_name: System::name().unwrap_or_default(),
            os_version: System::os_version().unwrap_or_default(),
            kernel_version: System::kernel_version().unwrap_or_default(),
            host_name: System::host_name().unwrap_or_default(),
        }
    }

    /// `<os name>:<os version>`
    ///
    /// Kernel release and host name stay out: both are free-form
    /// ("6.8.0-45-generic", "vbox-builder") and would hit the emulator markers.
    pub fn fingerprint(&self) -> String {
        format!("{}:{}", self.os_name, self.os_version)
    }
}

/// EnvironmentProbe backed by the host OS
///
/// Values are captured once at construction, so every query during startup
/// sees the same environment. A desktop OS version says nothing about the
/// bridge runtime's platform version, so detection reports
/// `UNKNOWN_PLATFORM_VERSION`; only an explicit override reaches the legacy
/// stack branch.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    platform_version: u32,
    fingerprint: String,
}

impl SystemEnvironment {
    /// Detect from the OS, ignoring overrides
    pub fn detect() -> Self {
        Self::from_host_info(&HostInfo::collect())
    }

    pub fn from_host_info(info: &HostInfo) -> Self {
        let fingerprint = info.fingerprint();

        debug!(
            fingerprint = %fingerprint,
            kernel_version = %info.kernel_version,
            host_name = %info.host_name,
            "System environment detected"
        );

        Self {
            platform_version: UNKNOWN_PLATFORM_VERSION,
            fingerprint,
        }
    }

    /// Replace detected values with explicit ones
    ///
    /// # Errors
    /// `AppError::Environment` if `platform_version` is not an integer
    pub fn with_overrides(
        mut self,
        fingerprint: Option<String>,
        platform_version: Option<&str>,
    ) -> Result<Self> {
        if let Some(fingerprint) = fingerprint {
            debug!(fingerprint = %fingerprint, "Fingerprint overridden");
            self.fingerprint = fingerprint;
        }
        if let Some(raw) = platform_version {
            self.platform_version = raw.trim().parse::<u32>().map_err(|e| {
                warn!(value = %raw, "Invalid platform version override");
                AppError::Environment(format!(
                    "{} must be an integer, got {:?}: {}",
                    PLATFORM_VERSION_ENV, raw, e
                ))
            })?;
        }
        Ok(self)
    }
}

impl EnvironmentProbe for SystemEnvironment {
    fn platform_version(&self) -> u32 {
        self.platform_version
    }

    fn fingerprint(&self) -> String {
        self.fingerprint.clone()
    }
}
