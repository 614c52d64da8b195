// Execution environment port
// Replaces direct platform introspection so policy code stays pure

/// Environment capability queried by the default policy and host resolver
pub trait EnvironmentProbe: Send + Sync {
    /// Platform/runtime version the bridge runs on
    ///
    /// Compared against the legacy stack threshold.
    fn platform_version(&self) -> u32;

    /// Environment-identifying string
    ///
    /// Used to tell emulated or virtualized environments from physical ones.
    fn fingerprint(&self) -> String;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;

    /// Fixed-value EnvironmentProbe for testing
    #[derive(Debug, Clone)]
    pub struct MockEnvironment {
        platform_version: u32,
        fingerprint: String,
    }

    impl MockEnvironment {
        pub fn new(platform_version: u32, fingerprint: impl Into<String>) -> Self {
            Self {
                platform_version,
                fingerprint: fingerprint.into(),
            }
        }

        /// Physical device with the given platform version
        pub fn device(platform_version: u32) -> Self {
            Self::new(platform_version, "acme/phone/phone:14/REL/1234:user/release-keys")
        }
    }

    impl EnvironmentProbe for MockEnvironment {
        fn platform_version(&self) -> u32 {
            self.platform_version
        }

        fn fingerprint(&self) -> String {
            self.fingerprint.clone()
        }
    }
}
