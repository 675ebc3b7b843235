//! # docsync-sync
//!
//! Classification, transformation and the effectful tree operations.
//!
//! Call [`pipeline::populate`] to fetch and mirror upstream docs, or
//! [`pipeline::reset`] to prune the destination back to its local files.
//! The pure pieces ([`classify`], [`Transformer`]) are usable on their own.

pub mod classify;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod prune;
pub mod transform;
pub mod tree;
pub mod writer;

pub use classify::classify;
pub use error::SyncError;
pub use pipeline::{populate, reset, PopulateReport, SnapshotSource};
pub use prune::{prune, PruneReport};
pub use transform::{TransformResult, Transformer};
pub use tree::sync;
