//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of the org chart invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid salary: {0} (must be finite and non-negative)")]
    InvalidSalary(f64),

    #[error("no employee at index {0:?}")]
    UnknownNode(Index),

    #[error("cannot attach {name} to itself")]
    SelfAttachment { name: String },

    #[error("{name} heads the org chart and cannot report to anyone")]
    RootAttachment { name: String },

    #[error("{child} already reports to {boss}")]
    AlreadyAttached { child: String, boss: String },

    #[error("attaching {child} under {parent} would create a cycle")]
    CycleDetected { child: String, parent: String },

    #[error("employee not found: {0}")]
    EmployeeNotFound(String),
}

/// Result type for org chart operations.
pub type DomainResult<T> = Result<T, DomainError>;
