//! # pinwall-shared
//!
//! Vocabulary shared by every Pinwall crate: identifier newtypes, hard
//! limits, the board colour palette, the rejection taxonomy returned by
//! state transitions, and the generic drag-reorder engine.

pub mod constants;
pub mod error;
pub mod ordering;
pub mod palette;
pub mod types;

pub use error::Rejection;
pub use types::{BoardId, PostId};
