//! Domain layer: the org chart arena and its queries
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod entities;
pub mod error;
pub mod sample;

pub use arena::{Descendants, OrgChart, OrgNode};
pub use entities::{Employee, Salary};
pub use error::{DomainError, DomainResult};
pub use sample::sample_org;
