//! Incremental edge-geometry compression driven by graph contraction.
//!
//! The contraction pass repeatedly bypasses degree-two nodes. Each bypass
//! merges the geometry of the removed edge into the surviving edge's hop
//! bucket, so the surviving edge keeps the full via-node chain of the road
//! it now represents. Buckets live in a slot arena with an explicit free
//! list; mirrored forward/reverse geometry can be deduplicated ("zipped")
//! into one shared slot before everything is finalized into the columnar
//! [`SegmentStore`].
//!
//! One logical writer drives all structural mutation. The only concurrent
//! access the compressor supports is clamp counting, which goes through
//! relaxed atomics so cost values may be pre-clamped from worker threads.

use std::sync::atomic::{AtomicUsize, Ordering};

use rustc_hash::FxHashMap;

use crate::error::GeometryError;
use crate::segments::{SegmentDirection, SegmentEntry, SegmentStore};
use crate::types::{
    CompressedHop, EdgeDuration, EdgeId, EdgeWeight, NodeId, SegmentDuration, SegmentWeight,
    MAX_SEGMENT_DURATION, MAX_SEGMENT_WEIGHT,
};

/// Ordered hop sequence for one directed edge, source to target.
pub type Bucket = Vec<CompressedHop>;

/// Arena slots added per growth step. Growing in batches amortizes the
/// reallocation; the value itself is tuning, not contract.
const FREE_LIST_BATCH: usize = 100;

/// Aggregate counters reported by [`GeometryCompressor::statistics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStatistics {
    pub live_buckets: usize,
    pub total_hops: usize,
    pub arena_slots: usize,
    pub free_slots: usize,
    pub zipped_pairs: usize,
    pub clamped_weights: usize,
    pub clamped_durations: usize,
}

/// Forward/reverse edge ids of zipped pairs, both resolving to the one
/// canonical arena position that holds the shared bucket.
#[derive(Debug, Default)]
struct ZippedIndex {
    forward: FxHashMap<EdgeId, u32>,
    reverse: FxHashMap<EdgeId, u32>,
}

#[derive(Debug, Default)]
pub struct GeometryCompressor {
    arena: Vec<Bucket>,
    free_list: Vec<u32>,
    raw_index: FxHashMap<EdgeId, u32>,
    zipped: Option<ZippedIndex>,
    clamped_weights: AtomicUsize,
    clamped_durations: AtomicUsize,
}

impl GeometryCompressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `removed` into `surviving` after the contraction pass bypassed
    /// `via_node`. `weight1`/`duration1` are the cost of reaching the via
    /// node over the surviving edge, `weight2`/`duration2` the cost from the
    /// via node to `target_node` over the removed edge.
    ///
    /// The surviving bucket is laid out in traversal order: an empty bucket
    /// is seeded with the via hop (the edge was still atomic, so its own
    /// geometry is exactly one hop ending at the via node); a non-empty
    /// bucket already ends at the via node. The removed edge then
    /// contributes either its full hop chain or, if it was atomic, the
    /// terminal hop ending at `target_node`.
    #[allow(clippy::too_many_arguments)]
    pub fn compress_edge(
        &mut self,
        surviving: EdgeId,
        removed: EdgeId,
        via_node: NodeId,
        target_node: NodeId,
        weight1: EdgeWeight,
        weight2: EdgeWeight,
        duration1: EdgeDuration,
        duration2: EdgeDuration,
    ) {
        let surviving_pos = match self.raw_index.get(&surviving) {
            Some(&pos) => pos,
            None => {
                let pos = self.allocate_slot();
                self.raw_index.insert(surviving, pos);
                pos
            }
        };

        if self.arena[surviving_pos as usize].is_empty() {
            let via_hop = CompressedHop {
                node_id: via_node,
                weight: self.clamp_weight(weight1),
                duration: self.clamp_duration(duration1),
            };
            self.arena[surviving_pos as usize].push(via_hop);
        }

        if let Some(&removed_pos) = self.raw_index.get(&removed) {
            // The removed edge was itself compressed: splice its whole hop
            // chain behind the surviving one and recycle its slot.
            let removed_bucket = std::mem::take(&mut self.arena[removed_pos as usize]);
            self.arena[surviving_pos as usize].extend(removed_bucket);
            self.raw_index.remove(&removed);
            self.free_list.push(removed_pos);
        } else {
            let target_hop = CompressedHop {
                node_id: target_node,
                weight: self.clamp_weight(weight2),
                duration: self.clamp_duration(duration2),
            };
            self.arena[surviving_pos as usize].push(target_hop);
        }
    }

    /// Register a single-hop bucket for an edge untouched by contraction.
    /// Only valid for edges seen for the first time.
    pub fn add_uncompressed_edge(
        &mut self,
        edge_id: EdgeId,
        target_node: NodeId,
        weight: EdgeWeight,
        duration: EdgeDuration,
    ) -> Result<(), GeometryError> {
        if self.resolve_position(edge_id).is_ok() {
            return Err(GeometryError::AlreadyRegistered(edge_id));
        }

        let hop = CompressedHop {
            node_id: target_node,
            weight: self.clamp_weight(weight),
            duration: self.clamp_duration(duration),
        };
        let pos = self.allocate_slot();
        self.arena[pos as usize].push(hop);
        self.raw_index.insert(edge_id, pos);
        Ok(())
    }

    /// Set up the zipped index pair. Must run once, after raw registration
    /// for a direction pair is complete and before any [`Self::zip_edges`].
    pub fn initialize_bothway(&mut self) -> Result<(), GeometryError> {
        if self.zipped.is_some() {
            return Err(GeometryError::BothwayAlreadyInitialized);
        }
        self.zipped = Some(ZippedIndex::default());
        Ok(())
    }

    /// Deduplicate the mirrored geometry of a forward/reverse edge pair.
    ///
    /// Hop data is never altered: the forward slot becomes the canonical
    /// shared position for both directions, the reverse slot is released to
    /// the free list, and both ids move from the raw index to their zipped
    /// index. Returns the canonical position.
    pub fn zip_edges(
        &mut self,
        forward_edge: EdgeId,
        reverse_edge: EdgeId,
    ) -> Result<u32, GeometryError> {
        if self.zipped.is_none() {
            return Err(GeometryError::BothwayNotInitialized);
        }
        let forward_pos = *self
            .raw_index
            .get(&forward_edge)
            .ok_or(GeometryError::UnknownEdge(forward_edge))?;
        let reverse_pos = *self
            .raw_index
            .get(&reverse_edge)
            .ok_or(GeometryError::UnknownEdge(reverse_edge))?;

        // Mirror images of the same physical segment have the same hop count.
        debug_assert_eq!(
            self.arena[forward_pos as usize].len(),
            self.arena[reverse_pos as usize].len()
        );

        self.raw_index.remove(&forward_edge);
        self.raw_index.remove(&reverse_edge);
        self.arena[reverse_pos as usize].clear();
        self.free_list.push(reverse_pos);

        if let Some(zipped) = self.zipped.as_mut() {
            zipped.forward.insert(forward_edge, forward_pos);
            zipped.reverse.insert(reverse_edge, forward_pos);
        }
        Ok(forward_pos)
    }

    pub fn has_entry_for_id(&self, edge_id: EdgeId) -> bool {
        self.raw_index.contains_key(&edge_id)
    }

    pub fn has_zipped_entry_for_forward_id(&self, edge_id: EdgeId) -> bool {
        self.zipped
            .as_ref()
            .is_some_and(|z| z.forward.contains_key(&edge_id))
    }

    pub fn has_zipped_entry_for_reverse_id(&self, edge_id: EdgeId) -> bool {
        self.zipped
            .as_ref()
            .is_some_and(|z| z.reverse.contains_key(&edge_id))
    }

    pub fn get_position_for_id(&self, edge_id: EdgeId) -> Result<u32, GeometryError> {
        self.raw_index
            .get(&edge_id)
            .copied()
            .ok_or(GeometryError::UnknownEdge(edge_id))
    }

    pub fn get_zipped_position_for_forward_id(
        &self,
        edge_id: EdgeId,
    ) -> Result<u32, GeometryError> {
        self.zipped
            .as_ref()
            .and_then(|z| z.forward.get(&edge_id))
            .copied()
            .ok_or(GeometryError::UnknownEdge(edge_id))
    }

    pub fn get_zipped_position_for_reverse_id(
        &self,
        edge_id: EdgeId,
    ) -> Result<u32, GeometryError> {
        self.zipped
            .as_ref()
            .and_then(|z| z.reverse.get(&edge_id))
            .copied()
            .ok_or(GeometryError::UnknownEdge(edge_id))
    }

    /// The edge's hop sequence, resolved through whichever index owns it.
    pub fn get_bucket_reference(&self, edge_id: EdgeId) -> Result<&Bucket, GeometryError> {
        let pos = self.resolve_position(edge_id)?;
        Ok(&self.arena[pos as usize])
    }

    /// True iff the edge owns no bucket in any index, i.e. it represents a
    /// single uncompressed hop with no via nodes.
    pub fn is_trivial(&self, edge_id: EdgeId) -> bool {
        self.resolve_position(edge_id).is_err()
    }

    pub fn get_first_edge_target_id(&self, edge_id: EdgeId) -> Result<NodeId, GeometryError> {
        let bucket = self.get_bucket_reference(edge_id)?;
        bucket
            .first()
            .map(|hop| hop.node_id)
            .ok_or(GeometryError::TooFewHops(edge_id))
    }

    pub fn get_last_edge_target_id(&self, edge_id: EdgeId) -> Result<NodeId, GeometryError> {
        let bucket = self.get_bucket_reference(edge_id)?;
        bucket
            .last()
            .map(|hop| hop.node_id)
            .ok_or(GeometryError::TooFewHops(edge_id))
    }

    /// Source node of the last hop, i.e. the node the second-to-last hop
    /// ends at. Needs a bucket with at least two hops.
    pub fn get_last_edge_source_id(&self, edge_id: EdgeId) -> Result<NodeId, GeometryError> {
        let bucket = self.get_bucket_reference(edge_id)?;
        if bucket.len() < 2 {
            return Err(GeometryError::TooFewHops(edge_id));
        }
        Ok(bucket[bucket.len() - 2].node_id)
    }

    /// Saturate a weight into the per-hop storage range, counting clamps.
    /// Safe to call from worker threads; the counter is a relaxed atomic.
    pub fn clamp_weight(&self, weight: EdgeWeight) -> SegmentWeight {
        if weight > MAX_SEGMENT_WEIGHT as EdgeWeight {
            self.clamped_weights.fetch_add(1, Ordering::Relaxed);
            return MAX_SEGMENT_WEIGHT;
        }
        weight as SegmentWeight
    }

    /// Saturate a duration into the per-hop storage range, counting clamps.
    pub fn clamp_duration(&self, duration: EdgeDuration) -> SegmentDuration {
        if duration > MAX_SEGMENT_DURATION as EdgeDuration {
            self.clamped_durations.fetch_add(1, Ordering::Relaxed);
            return MAX_SEGMENT_DURATION;
        }
        duration as SegmentDuration
    }

    pub fn statistics(&self) -> CompressionStatistics {
        let live = self.live_positions();
        CompressionStatistics {
            live_buckets: live.len(),
            total_hops: live.iter().map(|&p| self.arena[p as usize].len()).sum(),
            arena_slots: self.arena.len(),
            free_slots: self.free_list.len(),
            zipped_pairs: self.zipped.as_ref().map_or(0, |z| z.forward.len()),
            clamped_weights: self.clamped_weights.load(Ordering::Relaxed),
            clamped_durations: self.clamped_durations.load(Ordering::Relaxed),
        }
    }

    /// Log the aggregate counters. Read-only.
    pub fn print_statistics(&self) {
        let stats = self.statistics();
        tracing::info!(
            live_buckets = stats.live_buckets,
            total_hops = stats.total_hops,
            arena_slots = stats.arena_slots,
            free_slots = stats.free_slots,
            zipped_pairs = stats.zipped_pairs,
            clamped_weights = stats.clamped_weights,
            clamped_durations = stats.clamped_durations,
            "edge geometry compression statistics"
        );
    }

    /// One-shot finalization: lay every bucket reachable from the raw index
    /// and both zipped indices out contiguously in the columnar store and
    /// hand the result to the caller. Consumes the compressor; the arena and
    /// indices do not survive this call.
    pub fn to_segment_data(self) -> SegmentStore {
        let live = self.live_positions();
        let total_hops: usize = live.iter().map(|&p| self.arena[p as usize].len()).sum();
        let mut store = SegmentStore::with_capacity(live.len(), total_hops);

        // Zipped pairs first: one shared slice, two directory entries.
        // Sorted by forward id so the layout is deterministic.
        if let Some(zipped) = &self.zipped {
            let reverse_by_pos: FxHashMap<u32, EdgeId> =
                zipped.reverse.iter().map(|(&edge, &pos)| (pos, edge)).collect();
            let mut forward_entries: Vec<(EdgeId, u32)> =
                zipped.forward.iter().map(|(&edge, &pos)| (edge, pos)).collect();
            forward_entries.sort_unstable();

            for (forward_edge, pos) in forward_entries {
                let geometry = store.push_geometry(&self.arena[pos as usize]);
                store.insert_entry(
                    forward_edge,
                    SegmentEntry {
                        geometry,
                        direction: SegmentDirection::Forward,
                        zipped: true,
                    },
                );
                if let Some(&reverse_edge) = reverse_by_pos.get(&pos) {
                    store.insert_entry(
                        reverse_edge,
                        SegmentEntry {
                            geometry,
                            direction: SegmentDirection::Reverse,
                            zipped: true,
                        },
                    );
                }
            }
        }

        // Remaining raw buckets, one slice and one entry each.
        let mut raw_entries: Vec<(EdgeId, u32)> =
            self.raw_index.iter().map(|(&edge, &pos)| (edge, pos)).collect();
        raw_entries.sort_unstable();

        for (edge, pos) in raw_entries {
            let geometry = store.push_geometry(&self.arena[pos as usize]);
            store.insert_entry(
                edge,
                SegmentEntry {
                    geometry,
                    direction: SegmentDirection::Forward,
                    zipped: false,
                },
            );
        }

        tracing::trace!(
            n_edges = store.n_edges(),
            n_geometries = store.n_geometries(),
            n_hops = store.n_hops(),
            "finalized segment data"
        );
        store
    }

    fn resolve_position(&self, edge_id: EdgeId) -> Result<u32, GeometryError> {
        if let Some(&pos) = self.raw_index.get(&edge_id) {
            return Ok(pos);
        }
        if let Some(zipped) = self.zipped.as_ref() {
            if let Some(&pos) = zipped.forward.get(&edge_id) {
                return Ok(pos);
            }
            if let Some(&pos) = zipped.reverse.get(&edge_id) {
                return Ok(pos);
            }
        }
        Err(GeometryError::UnknownEdge(edge_id))
    }

    /// Arena positions currently owned by some index, deduplicated (a
    /// zipped pair shares one position).
    fn live_positions(&self) -> Vec<u32> {
        let mut positions: Vec<u32> = self.raw_index.values().copied().collect();
        if let Some(zipped) = self.zipped.as_ref() {
            positions.extend(zipped.forward.values().copied());
        }
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    fn allocate_slot(&mut self) -> u32 {
        loop {
            if let Some(pos) = self.free_list.pop() {
                debug_assert!(self.arena[pos as usize].is_empty());
                return pos;
            }
            self.increase_free_list();
        }
    }

    fn increase_free_list(&mut self) {
        let base = self.arena.len() as u32;
        self.arena
            .resize_with(self.arena.len() + FREE_LIST_BATCH, Bucket::new);
        for slot in base..base + FREE_LIST_BATCH as u32 {
            self.free_list.push(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop(node_id: NodeId, cost: u16) -> CompressedHop {
        CompressedHop {
            node_id,
            weight: cost,
            duration: cost,
        }
    }

    #[test]
    fn compress_pair_of_atomic_edges() {
        let mut compressor = GeometryCompressor::new();

        // A --e1--> V --e2--> T, contraction bypasses V.
        compressor.compress_edge(1, 2, 10, 20, 5, 3, 5, 3);

        assert!(!compressor.is_trivial(1));
        assert!(compressor.is_trivial(2));
        assert!(compressor.has_entry_for_id(1));
        assert!(!compressor.has_entry_for_id(2));

        let bucket = compressor.get_bucket_reference(1).unwrap();
        assert_eq!(bucket.as_slice(), &[hop(10, 5), hop(20, 3)]);

        assert_eq!(compressor.get_first_edge_target_id(1).unwrap(), 10);
        assert_eq!(compressor.get_last_edge_target_id(1).unwrap(), 20);
        assert_eq!(compressor.get_last_edge_source_id(1).unwrap(), 10);
    }

    #[test]
    fn chain_contraction_keeps_traversal_order() {
        let mut compressor = GeometryCompressor::new();

        // A --1--> v1 --2--> v2 --3--> T, contracting v1 first:
        // edge 1 survives and grows left to right.
        compressor.compress_edge(1, 2, 10, 11, 4, 6, 4, 6);
        compressor.compress_edge(1, 3, 11, 12, 10, 7, 10, 7);

        let bucket = compressor.get_bucket_reference(1).unwrap();
        assert_eq!(bucket.as_slice(), &[hop(10, 4), hop(11, 6), hop(12, 7)]);
        assert_eq!(compressor.get_last_edge_target_id(1).unwrap(), 12);
    }

    #[test]
    fn chain_contraction_reverse_order_splices_removed_bucket() {
        let mut compressor = GeometryCompressor::new();

        // Same road, contracting v2 before v1: edge 2 first absorbs edge 3,
        // then edge 1 absorbs the multi-hop bucket of edge 2.
        compressor.compress_edge(2, 3, 11, 12, 6, 7, 6, 7);
        compressor.compress_edge(1, 2, 10, 12, 4, 13, 4, 13);

        let bucket = compressor.get_bucket_reference(1).unwrap();
        assert_eq!(bucket.as_slice(), &[hop(10, 4), hop(11, 6), hop(12, 7)]);
        assert!(compressor.is_trivial(2));
        assert!(compressor.is_trivial(3));
    }

    #[test]
    fn merge_of_n_via_nodes_yields_n_plus_one_hops() {
        let mut compressor = GeometryCompressor::new();
        let n = 25u32;

        for i in 0..n {
            // Via node 100+i bypassed; target of the removed edge is 100+i+1.
            compressor.compress_edge(7, 1000 + i, 100 + i, 101 + i, 1, 1, 1, 1);
        }

        let bucket = compressor.get_bucket_reference(7).unwrap();
        assert_eq!(bucket.len(), (n + 1) as usize);
        let via_nodes: Vec<NodeId> = bucket.iter().map(|h| h.node_id).collect();
        let expected: Vec<NodeId> = (100..=100 + n).collect();
        assert_eq!(via_nodes, expected);
        assert_eq!(compressor.get_last_edge_target_id(7).unwrap(), 100 + n);
    }

    #[test]
    fn add_uncompressed_edge_registers_single_hop() {
        let mut compressor = GeometryCompressor::new();
        compressor.add_uncompressed_edge(4, 42, 9, 9).unwrap();

        let bucket = compressor.get_bucket_reference(4).unwrap();
        assert_eq!(bucket.as_slice(), &[hop(42, 9)]);
        assert_eq!(
            compressor.get_last_edge_source_id(4),
            Err(GeometryError::TooFewHops(4))
        );
    }

    #[test]
    fn double_registration_is_rejected() {
        let mut compressor = GeometryCompressor::new();
        compressor.add_uncompressed_edge(4, 42, 9, 9).unwrap();
        assert_eq!(
            compressor.add_uncompressed_edge(4, 43, 1, 1),
            Err(GeometryError::AlreadyRegistered(4))
        );
    }

    #[test]
    fn unknown_edge_lookups_are_checked_failures() {
        let compressor = GeometryCompressor::new();
        assert_eq!(
            compressor.get_position_for_id(99),
            Err(GeometryError::UnknownEdge(99))
        );
        assert_eq!(
            compressor.get_bucket_reference(99).err(),
            Some(GeometryError::UnknownEdge(99))
        );
        assert!(compressor.is_trivial(99));
    }

    #[test]
    fn out_of_range_costs_are_clamped_and_counted() {
        let mut compressor = GeometryCompressor::new();
        compressor.add_uncompressed_edge(1, 10, 70_000, 3).unwrap();

        let bucket = compressor.get_bucket_reference(1).unwrap();
        assert_eq!(bucket[0].weight, 65_535);
        assert_eq!(bucket[0].duration, 3);

        let stats = compressor.statistics();
        assert_eq!(stats.clamped_weights, 1);
        assert_eq!(stats.clamped_durations, 0);

        // Counters are monotone: one more overflow, one more count. The
        // surviving bucket already exists, so only the terminal-hop costs
        // (weight2/duration2) get clamped here.
        compressor.compress_edge(1, 2, 20, 30, 2, 90_000, 2, 70_000);
        let stats = compressor.statistics();
        assert_eq!(stats.clamped_weights, 2);
        assert_eq!(stats.clamped_durations, 1);
    }

    #[test]
    fn freed_slot_is_recycled() {
        let mut compressor = GeometryCompressor::new();

        compressor.add_uncompressed_edge(1, 10, 1, 1).unwrap();
        compressor.add_uncompressed_edge(2, 11, 1, 1).unwrap();
        let pos_2 = compressor.get_position_for_id(2).unwrap();

        // Merging edge 2 away releases its slot...
        compressor.compress_edge(1, 2, 10, 11, 1, 1, 1, 1);
        assert!(!compressor.has_entry_for_id(2));

        // ...and the next registration reuses it.
        compressor.add_uncompressed_edge(3, 12, 1, 1).unwrap();
        assert_eq!(compressor.get_position_for_id(3).unwrap(), pos_2);
    }

    #[test]
    fn no_two_live_edges_share_a_position() {
        let mut compressor = GeometryCompressor::new();
        for edge in 0..300u32 {
            compressor
                .add_uncompressed_edge(edge, 1000 + edge, 1, 1)
                .unwrap();
        }
        // Fold every odd edge into its even predecessor.
        for edge in (1..300u32).step_by(2) {
            compressor.compress_edge(edge - 1, edge, 500, 501, 1, 1, 1, 1);
        }

        let mut positions: Vec<u32> = (0..300u32)
            .step_by(2)
            .map(|edge| compressor.get_position_for_id(edge).unwrap())
            .collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), 150);
    }

    #[test]
    fn zip_shares_the_forward_bucket() {
        let mut compressor = GeometryCompressor::new();
        compressor.compress_edge(1, 10, 100, 101, 5, 3, 5, 3);
        compressor.compress_edge(2, 20, 100, 102, 3, 5, 3, 5);
        let forward_bucket = compressor.get_bucket_reference(1).unwrap().clone();

        compressor.initialize_bothway().unwrap();
        let canonical = compressor.zip_edges(1, 2).unwrap();

        assert!(!compressor.has_entry_for_id(1));
        assert!(!compressor.has_entry_for_id(2));
        assert!(compressor.has_zipped_entry_for_forward_id(1));
        assert!(compressor.has_zipped_entry_for_reverse_id(2));
        assert_eq!(
            compressor.get_zipped_position_for_forward_id(1).unwrap(),
            canonical
        );
        assert_eq!(
            compressor.get_zipped_position_for_reverse_id(2).unwrap(),
            canonical
        );

        // Zipping only moves index entries; the shared hop data is untouched.
        assert_eq!(
            compressor.get_bucket_reference(1).unwrap().as_slice(),
            forward_bucket.as_slice()
        );
        assert_eq!(
            compressor.get_bucket_reference(2).unwrap().as_slice(),
            forward_bucket.as_slice()
        );
    }

    #[test]
    fn zip_requires_initialization_exactly_once() {
        let mut compressor = GeometryCompressor::new();
        compressor.add_uncompressed_edge(1, 10, 1, 1).unwrap();
        compressor.add_uncompressed_edge(2, 11, 1, 1).unwrap();

        assert_eq!(
            compressor.zip_edges(1, 2),
            Err(GeometryError::BothwayNotInitialized)
        );
        compressor.initialize_bothway().unwrap();
        assert_eq!(
            compressor.initialize_bothway(),
            Err(GeometryError::BothwayAlreadyInitialized)
        );
        compressor.zip_edges(1, 2).unwrap();
    }

    #[test]
    fn statistics_reflect_live_state() {
        let mut compressor = GeometryCompressor::new();
        compressor.compress_edge(1, 10, 100, 101, 1, 1, 1, 1);
        compressor.compress_edge(2, 20, 100, 102, 1, 1, 1, 1);
        compressor.initialize_bothway().unwrap();
        compressor.zip_edges(1, 2).unwrap();

        let stats = compressor.statistics();
        assert_eq!(stats.live_buckets, 1);
        assert_eq!(stats.total_hops, 2);
        assert_eq!(stats.zipped_pairs, 1);
        assert!(stats.free_slots >= 1);
    }
}
