//! # selection
//!
//! A uniform cursor and selection model over the two selection API families
//! an editing-surface host may provide: boundary-point ranges and legacy text
//! ranges.
//!
//! - [`SelectionAdapter`]: probes the host once and dispatches every
//!   operation on the family it found
//! - [`NodeTree`], [`RangeApi`], [`TextRangeApi`], [`SelectionHost`]: what a
//!   host implements
//! - [`Range`], [`BoundaryRange`]: range values returned to callers
//!
//! Selection access never fails from the caller's point of view. Host errors
//! are logged under the `selection` target and degrade to fallbacks.

mod adapter;
mod error;
pub mod host;
mod range;

pub use adapter::{SelectionAdapter, SelectionFamily};
pub use error::HostError;
pub use host::{NodeTree, RangeApi, SelectionHost, TextRangeApi, common_ancestor};
pub use range::{BoundaryRange, Range};
