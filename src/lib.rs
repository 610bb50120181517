//! Edge geometry compression for road-network preprocessing.
//!
//! Graph contraction removes degree-two nodes from the routing graph, but
//! their positions must stay reconstructable for turn-by-turn geometry.
//! This crate accumulates the removed chains into per-edge hop buckets and
//! finalizes them into an immutable, query-ready [`SegmentStore`].

pub mod compressor;
pub mod error;
pub mod segments;
pub mod types;

pub use compressor::{Bucket, CompressionStatistics, GeometryCompressor};
pub use error::GeometryError;
pub use segments::{SegmentDirection, SegmentEntry, SegmentStore};
pub use types::{CompressedHop, EdgeId, NodeId};
