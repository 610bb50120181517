//! Finalized, query-facing segment storage.
//!
//! Produced exactly once by
//! [`to_segment_data`](crate::compressor::GeometryCompressor::to_segment_data).
//! Every directed edge that ever had geometry resolves to a
//! contiguous slice of (node, weight, duration) triples in the columnar
//! arrays below; a per-edge directory entry says where the slice lives and
//! how to read it when the geometry is shared with the mirror direction.
//!
//! Persistence is an external collaborator's concern; the store only derives
//! serde so a writer can be layered on top.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::types::{CompressedHop, EdgeId, NodeId, SegmentDuration, SegmentWeight};

/// How a consumer has to walk an edge's slice. `Reverse` only occurs for
/// the mirror direction of a zipped pair, whose hops are stored once in
/// forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentDirection {
    Forward,
    Reverse,
}

/// Directory entry locating one edge's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentEntry {
    pub geometry: u32,
    pub direction: SegmentDirection,
    pub zipped: bool,
}

/// Immutable columnar segment data. Slice `i` spans
/// `offsets[i]..offsets[i + 1]` in each of the three columns.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentStore {
    offsets: Vec<u32>,
    nodes: Vec<NodeId>,
    weights: Vec<SegmentWeight>,
    durations: Vec<SegmentDuration>,
    directory: FxHashMap<EdgeId, SegmentEntry>,
}

impl SegmentStore {
    pub(crate) fn with_capacity(n_geometries: usize, n_hops: usize) -> Self {
        let mut offsets = Vec::with_capacity(n_geometries + 1);
        offsets.push(0);
        Self {
            offsets,
            nodes: Vec::with_capacity(n_hops),
            weights: Vec::with_capacity(n_hops),
            durations: Vec::with_capacity(n_hops),
            directory: FxHashMap::default(),
        }
    }

    /// Append one bucket as the next contiguous slice; returns its geometry
    /// index.
    pub(crate) fn push_geometry(&mut self, hops: &[CompressedHop]) -> u32 {
        let geometry = (self.offsets.len() - 1) as u32;
        for hop in hops {
            self.nodes.push(hop.node_id);
            self.weights.push(hop.weight);
            self.durations.push(hop.duration);
        }
        self.offsets.push(self.nodes.len() as u32);
        geometry
    }

    pub(crate) fn insert_entry(&mut self, edge_id: EdgeId, entry: SegmentEntry) {
        self.directory.insert(edge_id, entry);
    }

    pub fn contains(&self, edge_id: EdgeId) -> bool {
        self.directory.contains_key(&edge_id)
    }

    /// Node column of the edge's slice, in stored (forward) order.
    pub fn nodes(&self, edge_id: EdgeId) -> Result<&[NodeId], GeometryError> {
        let range = self.slice_range(edge_id)?;
        Ok(&self.nodes[range])
    }

    /// Weight column of the edge's slice, in stored (forward) order.
    pub fn weights(&self, edge_id: EdgeId) -> Result<&[SegmentWeight], GeometryError> {
        let range = self.slice_range(edge_id)?;
        Ok(&self.weights[range])
    }

    /// Duration column of the edge's slice, in stored (forward) order.
    pub fn durations(&self, edge_id: EdgeId) -> Result<&[SegmentDuration], GeometryError> {
        let range = self.slice_range(edge_id)?;
        Ok(&self.durations[range])
    }

    /// The edge's hop triples, materialized in stored order. Consumers of a
    /// `Reverse` entry walk the result back to front.
    pub fn hops(&self, edge_id: EdgeId) -> Result<Vec<CompressedHop>, GeometryError> {
        let range = self.slice_range(edge_id)?;
        Ok(range
            .map(|i| CompressedHop {
                node_id: self.nodes[i],
                weight: self.weights[i],
                duration: self.durations[i],
            })
            .collect())
    }

    pub fn direction(&self, edge_id: EdgeId) -> Result<SegmentDirection, GeometryError> {
        Ok(self.entry(edge_id)?.direction)
    }

    /// Whether the edge's geometry was deduplicated against its mirror
    /// direction during zipping.
    pub fn is_zipped(&self, edge_id: EdgeId) -> Result<bool, GeometryError> {
        Ok(self.entry(edge_id)?.zipped)
    }

    pub fn entry(&self, edge_id: EdgeId) -> Result<SegmentEntry, GeometryError> {
        self.directory
            .get(&edge_id)
            .copied()
            .ok_or(GeometryError::UnknownEdge(edge_id))
    }

    pub fn n_edges(&self) -> usize {
        self.directory.len()
    }

    pub fn n_geometries(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn n_hops(&self) -> usize {
        self.nodes.len()
    }

    fn slice_range(&self, edge_id: EdgeId) -> Result<std::ops::Range<usize>, GeometryError> {
        let entry = self.entry(edge_id)?;
        let start = self.offsets[entry.geometry as usize] as usize;
        let end = self.offsets[entry.geometry as usize + 1] as usize;
        Ok(start..end)
    }
}
