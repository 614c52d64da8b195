// Domain Error Types

use thiserror::Error;

use crate::domain::queue::Role;

/// Configuration-integrity violations.
///
/// Each variant is a logic bug in the caller; none of them is meant to be
/// retried or worked around.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Setting {role} queue thread spec multiple times")]
    RoleAlreadySet { role: Role },

    #[error("Missing {role} queue thread spec")]
    MissingRole { role: Role },
}

pub type Result<T> = std::result::Result<T, DomainError>;
