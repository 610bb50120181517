//! Identifier and cost types shared across the compression pipeline.

use serde::{Deserialize, Serialize};

/// Node in the original (uncontracted) node-based graph.
pub type NodeId = u32;

/// Directed edge in the original node-based graph. The forward and reverse
/// traversal of one physical road segment carry distinct ids.
pub type EdgeId = u32;

/// Accumulation type for weights while chains of edges are merged.
pub type EdgeWeight = u32;

/// Accumulation type for durations while chains of edges are merged.
pub type EdgeDuration = u32;

/// Per-hop storage type for weights, narrower than [`EdgeWeight`].
pub type SegmentWeight = u16;

/// Per-hop storage type for durations, narrower than [`EdgeDuration`].
pub type SegmentDuration = u16;

pub const MAX_SEGMENT_WEIGHT: SegmentWeight = SegmentWeight::MAX;
pub const MAX_SEGMENT_DURATION: SegmentDuration = SegmentDuration::MAX;

/// One step of a compressed polyline: the hop ending at `node_id` costs
/// `weight`/`duration`. The start coordinate is implicit — it is the source
/// of the edge owning the hop sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedHop {
    pub node_id: NodeId,
    pub weight: SegmentWeight,
    pub duration: SegmentDuration,
}
