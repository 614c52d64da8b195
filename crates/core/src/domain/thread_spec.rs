// Thread Spec Domain Model

use serde::Serialize;
use std::fmt;

/// Stack size policy for a queue thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "policy", content = "bytes")]
pub enum StackSize {
    /// Let the platform/runtime pick the stack size
    PlatformDefault,
    /// Fixed stack size in bytes
    Explicit(u64),
}

/// Immutable description of one queue thread, assembled before the thread exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadSpec {
    name: String,
    stack_size: StackSize,
}

impl ThreadSpec {
    /// Spec whose stack size is left to the platform
    pub fn new_default_stack(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stack_size: StackSize::PlatformDefault,
        }
    }

    /// Spec with a fixed stack size
    pub fn new_explicit_stack(name: impl Into<String>, stack_size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            stack_size: StackSize::Explicit(stack_size_bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stack_size(&self) -> StackSize {
        self.stack_size
    }

    /// Explicit override, `None` when the platform default applies
    pub fn stack_size_bytes(&self) -> Option<u64> {
        match self.stack_size {
            StackSize::PlatformDefault => None,
            StackSize::Explicit(bytes) => Some(bytes),
        }
    }

    /// Thread builder carrying this spec's name and stack size
    ///
    /// Hand-off point for the downstream creator: the thread is spawned
    /// already named and sized, nothing is attached afterwards.
    ///
    /// # Example
    /// ```text
    /// let handle = spec.thread_builder().spawn(run_loop)?;
    /// ```
    pub fn thread_builder(&self) -> std::thread::Builder {
        let builder = std::thread::Builder::new().name(self.name.clone());
        match self.stack_size {
            StackSize::PlatformDefault => builder,
            StackSize::Explicit(bytes) => builder.stack_size(stack_size_for_target(bytes)),
        }
    }
}

/// Requested stack size as `usize`
///
/// Only 32-bit targets can overflow; there the request saturates at
/// `usize::MAX`, which the OS refuses, so `spawn` returns the error instead
/// of running with a silently smaller stack.
fn stack_size_for_target(bytes: u64) -> usize {
    usize::try_from(bytes).unwrap_or(usize::MAX)
}

impl fmt::Display for ThreadSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stack_size {
            StackSize::PlatformDefault => write!(f, "{} (default stack)", self.name),
            StackSize::Explicit(bytes) => write!(f, "{} ({} byte stack)", self.name, bytes),
        }
    }
}
