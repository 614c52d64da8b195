// Queue Configuration Domain Model

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::domain::error::{DomainError, Result};
use crate::domain::thread_spec::ThreadSpec;

/// Queue thread role (exactly two exist)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    NativeModules,
    Js,
}

impl Role {
    /// Tag used as the thread name prefix
    pub fn tag(&self) -> &'static str {
        match self {
            Role::NativeModules => "native_modules",
            Role::Js => "js",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Fully configured specs for both queue threads of the runtime bridge
///
/// Only obtainable through [`QueueConfigurationSpecBuilder::build`], so both
/// roles are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueConfigurationSpec {
    native_modules_thread: ThreadSpec,
    js_thread: ThreadSpec,
}

impl QueueConfigurationSpec {
    pub fn builder() -> QueueConfigurationSpecBuilder {
        QueueConfigurationSpecBuilder::default()
    }

    pub fn native_modules_thread_spec(&self) -> &ThreadSpec {
        &self.native_modules_thread
    }

    pub fn js_thread_spec(&self) -> &ThreadSpec {
        &self.js_thread
    }

    pub fn thread_spec(&self, role: Role) -> &ThreadSpec {
        match role {
            Role::NativeModules => &self.native_modules_thread,
            Role::Js => &self.js_thread,
        }
    }
}

/// Set-once builder for [`QueueConfigurationSpec`]
///
/// Every setter consumes the builder; a rejected call leaves nothing to keep
/// building on.
#[derive(Debug, Default)]
pub struct QueueConfigurationSpecBuilder {
    native_modules_thread: Option<ThreadSpec>,
    js_thread: Option<ThreadSpec>,
}

impl QueueConfigurationSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the native modules thread spec
    ///
    /// # Errors
    /// `DomainError::RoleAlreadySet` if the role was assigned before, even
    /// with an equal spec.
    pub fn set_native_modules_thread_spec(mut self, spec: ThreadSpec) -> Result<Self> {
        assign_once(&mut self.native_modules_thread, Role::NativeModules, spec)?;
        Ok(self)
    }

    /// Assign the JS thread spec
    ///
    /// # Errors
    /// `DomainError::RoleAlreadySet` if the role was assigned before.
    pub fn set_js_thread_spec(mut self, spec: ThreadSpec) -> Result<Self> {
        assign_once(&mut self.js_thread, Role::Js, spec)?;
        Ok(self)
    }

    /// Finish the configuration
    ///
    /// # Errors
    /// `DomainError::MissingRole` naming the first unset role.
    pub fn build(self) -> Result<QueueConfigurationSpec> {
        let native_modules_thread = self.native_modules_thread.ok_or_else(|| {
            warn!(role = %Role::NativeModules, "Rejected incomplete queue configuration");
            DomainError::MissingRole {
                role: Role::NativeModules,
            }
        })?;
        let js_thread = self.js_thread.ok_or_else(|| {
            warn!(role = %Role::Js, "Rejected incomplete queue configuration");
            DomainError::MissingRole { role: Role::Js }
        })?;

        debug!(
            native_modules = %native_modules_thread,
            js = %js_thread,
            "Queue configuration built"
        );

        Ok(QueueConfigurationSpec {
            native_modules_thread,
            js_thread,
        })
    }
}

fn assign_once(slot: &mut Option<ThreadSpec>, role: Role, spec: ThreadSpec) -> Result<()> {
    if let Some(existing) = slot {
        warn!(
            role = %role,
            existing = %existing,
            rejected = %spec,
            "Rejected second assignment of queue thread spec"
        );
        return Err(DomainError::RoleAlreadySet { role });
    }
    *slot = Some(spec);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native() -> ThreadSpec {
        ThreadSpec::new_explicit_stack("native_modules", 2_000_000)
    }

    fn js() -> ThreadSpec {
        ThreadSpec::new_default_stack("js")
    }

    #[test]
    fn test_build_returns_given_specs() {
        let config = QueueConfigurationSpec::builder()
            .set_native_modules_thread_spec(native())
            .unwrap()
            .set_js_thread_spec(js())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.native_modules_thread_spec(), &native());
        assert_eq!(config.js_thread_spec(), &js());
        assert_eq!(config.thread_spec(Role::Js), &js());
        assert_eq!(config.thread_spec(Role::NativeModules), &native());
    }

    #[test]
    fn test_set_order_does_not_matter() {
        let config = QueueConfigurationSpecBuilder::new()
            .set_js_thread_spec(js())
            .and_then(|b| b.set_native_modules_thread_spec(native()))
            .and_then(|b| b.build())
            .unwrap();

        assert_eq!(config.js_thread_spec().name(), "js");
        assert_eq!(config.native_modules_thread_spec().name(), "native_modules");
    }

    #[test]
    fn test_native_modules_set_twice() {
        let err = QueueConfigurationSpecBuilder::new()
            .set_native_modules_thread_spec(native())
            .and_then(|b| b.set_js_thread_spec(js()))
            .and_then(|b| b.set_native_modules_thread_spec(native()))
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::RoleAlreadySet {
                role: Role::NativeModules
            }
        );
        assert!(err.to_string().contains("multiple times"));
    }

    #[test]
    fn test_js_set_twice_with_different_spec() {
        let err = QueueConfigurationSpecBuilder::new()
            .set_js_thread_spec(js())
            .and_then(|b| b.set_js_thread_spec(ThreadSpec::new_default_stack("js_other")))
            .unwrap_err();

        assert_eq!(err, DomainError::RoleAlreadySet { role: Role::Js });
    }

    #[test]
    fn test_build_missing_js() {
        let err = QueueConfigurationSpecBuilder::new()
            .set_native_modules_thread_spec(native())
            .unwrap()
            .build()
            .unwrap_err();

        assert_eq!(err, DomainError::MissingRole { role: Role::Js });
    }

    #[test]
    fn test_build_missing_native_modules() {
        let err = QueueConfigurationSpecBuilder::new()
            .set_js_thread_spec(js())
            .unwrap()
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::MissingRole {
                role: Role::NativeModules
            }
        );
    }

    #[test]
    fn test_build_empty() {
        assert!(matches!(
            QueueConfigurationSpecBuilder::new().build(),
            Err(DomainError::MissingRole { .. })
        ));
    }

    #[test]
    fn test_role_tags() {
        assert_eq!(Role::Js.tag(), "js");
        assert_eq!(Role::NativeModules.to_string(), "native_modules");
    }
}
