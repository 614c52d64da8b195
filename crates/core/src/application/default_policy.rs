// Default queue configuration policy

use tracing::{debug, info};

use super::constants::{
    LEGACY_PLATFORM_VERSION_THRESHOLD, LEGACY_STACK_SIZE_BYTES, THREAD_NAME_DOMAIN_SEPARATOR,
    THREAD_NAME_PORT_SEPARATOR,
};
use crate::domain::{QueueConfigurationSpec, Role, ThreadSpec};
use crate::error::{AppError, Result};
use crate::port::EnvironmentProbe;

/// Compatibility shim for platforms with a small default thread stack
///
/// Below `threshold` the native modules thread gets `stack_size_bytes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyStackPolicy {
    threshold: u32,
    stack_size_bytes: u64,
}

impl LegacyStackPolicy {
    /// # Errors
    /// `AppError::Config` for a zero stack size
    pub fn new(threshold: u32, stack_size_bytes: u64) -> Result<Self> {
        if stack_size_bytes == 0 {
            return Err(AppError::Config(
                "legacy stack size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            threshold,
            stack_size_bytes,
        })
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn stack_size_bytes(&self) -> u64 {
        self.stack_size_bytes
    }

    pub fn applies_to(&self, platform_version: u32) -> bool {
        platform_version < self.threshold
    }
}

impl Default for LegacyStackPolicy {
    fn default() -> Self {
        Self {
            threshold: LEGACY_PLATFORM_VERSION_THRESHOLD,
            stack_size_bytes: LEGACY_STACK_SIZE_BYTES,
        }
    }
}

/// Builds the standard two-queue configuration for a development server
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultQueuePolicy {
    legacy_stack: LegacyStackPolicy,
}

impl DefaultQueuePolicy {
    pub fn new(legacy_stack: LegacyStackPolicy) -> Self {
        Self { legacy_stack }
    }

    pub fn legacy_stack(&self) -> LegacyStackPolicy {
        self.legacy_stack
    }

    /// Create the configuration for `server_domain`/`server_port`
    ///
    /// # Arguments
    /// * `env` - Source of the platform version
    /// * `server_domain` - Development server domain, may be empty
    /// * `server_port` - Development server port, may be empty
    pub fn create(
        &self,
        env: &dyn EnvironmentProbe,
        server_domain: &str,
        server_port: &str,
    ) -> Result<QueueConfigurationSpec> {
        let native_modules_name = thread_name(Role::NativeModules, server_domain, server_port);
        let js_name = thread_name(Role::Js, server_domain, server_port);

        let platform_version = env.platform_version();
        let native_modules_spec = if self.legacy_stack.applies_to(platform_version) {
            info!(
                platform_version,
                threshold = self.legacy_stack.threshold,
                stack_size_bytes = self.legacy_stack.stack_size_bytes,
                "Legacy platform: using explicit native modules stack size"
            );
            ThreadSpec::new_explicit_stack(native_modules_name, self.legacy_stack.stack_size_bytes)
        } else {
            ThreadSpec::new_default_stack(native_modules_name)
        };

        let config = QueueConfigurationSpec::builder()
            .set_js_thread_spec(ThreadSpec::new_default_stack(js_name))?
            .set_native_modules_thread_spec(native_modules_spec)?
            .build()?;

        debug!(platform_version, "Default queue configuration created");
        Ok(config)
    }
}

/// Default configuration with the standard legacy stack policy
pub fn create_default(
    env: &dyn EnvironmentProbe,
    server_domain: &str,
    server_port: &str,
) -> Result<QueueConfigurationSpec> {
    DefaultQueuePolicy::default().create(env, server_domain, server_port)
}

/// Thread name: `<role>[_<domain>][:<port>]`
///
/// Empty parts are skipped together with their separator. Tooling parses
/// these names, so the format must not change.
pub fn thread_name(role: Role, server_domain: &str, server_port: &str) -> String {
    let mut name = String::from(role.tag());
    if !server_domain.is_empty() {
        name.push(THREAD_NAME_DOMAIN_SEPARATOR);
        name.push_str(server_domain);
    }
    if !server_port.is_empty() {
        name.push(THREAD_NAME_PORT_SEPARATOR);
        name.push_str(server_port);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StackSize;
    use crate::port::environment::mocks::MockEnvironment;

    #[test]
    fn test_thread_name_bare() {
        assert_eq!(thread_name(Role::Js, "", ""), "js");
        assert_eq!(thread_name(Role::NativeModules, "", ""), "native_modules");
    }

    #[test]
    fn test_thread_name_full() {
        assert_eq!(
            thread_name(Role::NativeModules, "myhost", "8088"),
            "native_modules_myhost:8088"
        );
    }

    #[test]
    fn test_thread_name_partial() {
        assert_eq!(thread_name(Role::Js, "myhost", ""), "js_myhost");
        assert_eq!(thread_name(Role::Js, "", "8088"), "js:8088");
    }

    #[test]
    fn test_legacy_platform_gets_explicit_stack() {
        let env = MockEnvironment::device(LEGACY_PLATFORM_VERSION_THRESHOLD - 1);
        let config = create_default(&env, "localhost", "8081").unwrap();

        let native = config.native_modules_thread_spec();
        assert_eq!(native.name(), "native_modules_localhost:8081");
        assert_eq!(native.stack_size_bytes(), Some(2_000_000));

        let js = config.js_thread_spec();
        assert_eq!(js.name(), "js_localhost:8081");
        assert_eq!(js.stack_size(), StackSize::PlatformDefault);
    }

    #[test]
    fn test_threshold_version_uses_default_stack() {
        let env = MockEnvironment::device(LEGACY_PLATFORM_VERSION_THRESHOLD);
        let config = create_default(&env, "", "").unwrap();

        assert_eq!(config.native_modules_thread_spec().name(), "native_modules");
        assert!(config.native_modules_thread_spec().stack_size_bytes().is_none());
        assert!(config.js_thread_spec().stack_size_bytes().is_none());
    }

    #[test]
    fn test_custom_legacy_policy() {
        let policy = DefaultQueuePolicy::new(LegacyStackPolicy::new(30, 4 * 1024 * 1024).unwrap());
        assert_eq!(policy.legacy_stack().threshold(), 30);
        let config = policy
            .create(&MockEnvironment::device(29), "dev", "")
            .unwrap();

        assert_eq!(
            config.native_modules_thread_spec().stack_size_bytes(),
            Some(4 * 1024 * 1024)
        );
        assert_eq!(config.js_thread_spec().name(), "js_dev");

        let modern = policy.create(&MockEnvironment::device(30), "dev", "").unwrap();
        assert!(modern.native_modules_thread_spec().stack_size_bytes().is_none());
    }

    #[test]
    fn test_legacy_policy_rejects_zero_stack() {
        assert!(matches!(
            LegacyStackPolicy::new(21, 0),
            Err(AppError::Config(_))
        ));
        assert!(LegacyStackPolicy::new(21, 1).is_ok());
    }

    #[test]
    fn test_legacy_policy_default() {
        let policy = LegacyStackPolicy::default();
        assert_eq!(policy.threshold(), 21);
        assert_eq!(policy.stack_size_bytes(), 2_000_000);
        assert_eq!(DefaultQueuePolicy::default().legacy_stack(), policy);
        assert!(policy.applies_to(20));
        assert!(!policy.applies_to(21));
    }
}
