//! orgtree: an organizational hierarchy modelled as an arena tree.
//!
//! The [`domain::OrgChart`] owns every employee node; relations are arena
//! indices, so boss links never own anything and cannot go stale.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
