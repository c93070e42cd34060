/*!
Best-first enumeration of source-to-sink paths.

A path is ranked by its bottleneck, the smallest edge weight along it,
so a path with one weakly supported transition ranks below a path
whose transitions are all moderately supported.

Partial paths are stored as [`PathRecord`]s in an append-only arena
that lives for a single enumeration call. Each record only stores its
last node and the index of the record it extends, so branches share
their common prefix.
*/

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bstr::{BStr, ByteSlice};

#[allow(unused_imports)]
use log::{debug, trace};

use crate::{
    error::{Error, Result},
    handle::NodeId,
};

use super::{Edge, KmerGraph};

/// Bottleneck of a path that has not traversed any edge yet. Compares
/// greater than any real edge weight.
pub const UNBOUNDED_WEIGHT: u64 = u64::MAX;

/// Index of a record in the arena of one enumeration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathIx(pub usize);

/// One step of a partial path: the node it ends on, the record it
/// extends, and the smallest edge weight seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRecord {
    node_id: NodeId,
    parent: Option<PathIx>,
    bottleneck: u64,
}

impl PathRecord {
    #[inline]
    fn source(node_id: NodeId) -> Self {
        Self {
            node_id,
            parent: None,
            bottleneck: UNBOUNDED_WEIGHT,
        }
    }

    #[inline]
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    #[inline]
    pub fn parent(&self) -> Option<PathIx> {
        self.parent
    }

    #[inline]
    pub fn bottleneck(&self) -> u64 {
        self.bottleneck
    }
}

/// Append-only pool of path records. Dropped, with every record in
/// it, when the enumeration that created it returns.
#[derive(Debug, Default)]
struct PathArena {
    records: Vec<PathRecord>,
    limit: Option<usize>,
}

impl PathArena {
    fn with_limit(limit: Option<usize>) -> Self {
        Self {
            records: Vec::new(),
            limit,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    fn get(&self, ix: PathIx) -> &PathRecord {
        &self.records[ix.0]
    }

    /// Returns `None` if the record would exceed the arena's limit.
    fn push(&mut self, record: PathRecord) -> Option<PathIx> {
        if let Some(limit) = self.limit {
            if self.records.len() >= limit {
                return None;
            }
        }
        let ix = PathIx(self.records.len());
        self.records.push(record);
        Some(ix)
    }

    fn extend(&mut self, parent: PathIx, edge: &Edge) -> Option<PathIx> {
        let bottleneck = self.get(parent).bottleneck.min(edge.weight());
        self.push(PathRecord {
            node_id: edge.dest(),
            parent: Some(parent),
            bottleneck,
        })
    }

    /// The nodes of the path ending at `ix`, from the source onward.
    fn node_trace(&self, ix: PathIx) -> Vec<NodeId> {
        let mut trace = Vec::new();
        let mut current = Some(ix);
        while let Some(ix) = current {
            let record = self.get(ix);
            trace.push(record.node_id);
            current = record.parent;
        }
        trace.reverse();
        trace
    }
}

/// Heap entry; the greatest bottleneck is popped first, and among
/// equal bottlenecks the record created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    bottleneck: u64,
    path: PathIx,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bottleneck
            .cmp(&other.bottleneck)
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A reconstructed source-to-sink sequence and its bottleneck weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub sequence: Vec<u8>,
    pub weight: u64,
}

impl Candidate {
    #[inline]
    pub fn as_bstr(&self) -> &BStr {
        self.sequence.as_bstr()
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.as_bstr(), self.weight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchStatus {
    Exhausted,
    Filled,
    RecordLimit,
}

impl KmerGraph {
    /// Enumerate up to `max_paths` source-to-sink paths in order of
    /// decreasing bottleneck weight, never traversing an edge lighter
    /// than `min_weight`.
    ///
    /// Termination is only guaranteed on acyclic graphs, or on cyclic
    /// graphs where `max_paths` completions are reachable; see
    /// [`KmerGraph::enumerate_paths_capped`] for a bounded variant.
    pub fn enumerate_paths(
        &self,
        min_weight: u64,
        max_paths: usize,
    ) -> Vec<Candidate> {
        let mut paths = Vec::new();
        self.enumerate_paths_into(min_weight, max_paths, &mut paths);
        paths
    }

    /// Like [`KmerGraph::enumerate_paths`], writing into `paths`.
    ///
    /// Panics if `paths` is not empty.
    pub fn enumerate_paths_into(
        &self,
        min_weight: u64,
        max_paths: usize,
        paths: &mut Vec<Candidate>,
    ) {
        assert!(
            paths.is_empty(),
            "path enumeration requires an empty output vector"
        );
        let status = self.best_first(min_weight, max_paths, None, paths);
        debug_assert_ne!(status, SearchStatus::RecordLimit);
    }

    /// Like [`KmerGraph::enumerate_paths_into`], but gives up with
    /// [`Error::RecordLimitExceeded`] once more than `max_records` path
    /// records would be allocated. Candidates found before that point
    /// are left in `paths`.
    ///
    /// Panics if `paths` is not empty.
    pub fn enumerate_paths_capped(
        &self,
        min_weight: u64,
        max_paths: usize,
        max_records: usize,
        paths: &mut Vec<Candidate>,
    ) -> Result<()> {
        assert!(
            paths.is_empty(),
            "path enumeration requires an empty output vector"
        );
        match self.best_first(min_weight, max_paths, Some(max_records), paths)
        {
            SearchStatus::RecordLimit => Err(Error::RecordLimitExceeded {
                limit: max_records,
            }),
            _ => Ok(()),
        }
    }

    fn best_first(
        &self,
        min_weight: u64,
        max_paths: usize,
        max_records: Option<usize>,
        paths: &mut Vec<Candidate>,
    ) -> SearchStatus {
        let t = std::time::Instant::now();

        let mut arena = PathArena::with_limit(max_records);
        let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();

        let sink = self.sink_id();

        let status = match arena.push(PathRecord::source(self.source_id())) {
            None => SearchStatus::RecordLimit,
            Some(root) => {
                heap.push(QueueEntry {
                    bottleneck: UNBOUNDED_WEIGHT,
                    path: root,
                });
                self.expand(&mut arena, &mut heap, sink, min_weight, max_paths, paths)
            }
        };

        debug!(
            "enumerated {} paths ({:?}) from {} path records in {:.3} ms",
            paths.len(),
            status,
            arena.len(),
            t.elapsed().as_secs_f64() * 1000.0
        );

        status
    }

    fn expand(
        &self,
        arena: &mut PathArena,
        heap: &mut BinaryHeap<QueueEntry>,
        sink: NodeId,
        min_weight: u64,
        max_paths: usize,
        paths: &mut Vec<Candidate>,
    ) -> SearchStatus {
        loop {
            if paths.len() >= max_paths {
                return SearchStatus::Filled;
            }

            let best = match heap.pop() {
                Some(entry) => entry,
                None => return SearchStatus::Exhausted,
            };
            let record = *arena.get(best.path);

            // reaching the sink doesn't end the path, it may continue
            // through the sink's own departing edges
            if record.node_id == sink {
                let sequence = self.path_sequence(arena, best.path);
                trace!("completed path {} ({})", sequence.as_bstr(), record.bottleneck);
                paths.push(Candidate {
                    sequence,
                    weight: record.bottleneck,
                });
            }

            for edge in self.departing_edges(record.node_id) {
                if edge.weight() < min_weight {
                    continue;
                }

                let child = match arena.extend(best.path, edge) {
                    Some(child) => child,
                    None => return SearchStatus::RecordLimit,
                };

                heap.push(QueueEntry {
                    bottleneck: arena.get(child).bottleneck,
                    path: child,
                });
            }
        }
    }

    /// The full k-mer of the first node followed by the last base of
    /// each following node.
    fn path_sequence(&self, arena: &PathArena, ix: PathIx) -> Vec<u8> {
        let trace = arena.node_trace(ix);
        let mut sequence = Vec::with_capacity(self.k() + trace.len() - 1);

        let mut nodes = trace.into_iter();
        if let Some(first) = nodes.next() {
            sequence.extend_from_slice(self.label(first));
        }
        for node_id in nodes {
            sequence.push(self.label(node_id)[self.k() - 1]);
        }

        sequence
    }
}
