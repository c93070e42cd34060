/*!

`KmerGraph` node and edge definitions

*/

use bstr::{BStr, ByteSlice};

use crate::handle::{EdgeIx, NodeId};

/// A single k-mer. The departing edges are owned by the graph; the
/// node only holds their indices, in the order the edges were created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(super) id: NodeId,
    pub(super) label: Vec<u8>,
    pub(super) departing_edges: Vec<EdgeIx>,
}

impl Node {
    pub(super) fn new(id: NodeId, label: &[u8]) -> Node {
        Node {
            id,
            label: label.into(),
            departing_edges: vec![],
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &[u8] {
        &self.label
    }

    #[inline]
    pub fn label_bstr(&self) -> &BStr {
        self.label.as_bstr()
    }

    #[inline]
    pub fn departing_edges(&self) -> &[EdgeIx] {
        &self.departing_edges
    }

    #[inline]
    pub fn out_degree(&self) -> usize {
        self.departing_edges.len()
    }
}

/// A transition between two overlapping k-mers, weighted by the
/// number of times it has been observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub(super) source: NodeId,
    pub(super) dest: NodeId,
    pub(super) weight: u64,
}

impl Edge {
    pub(super) fn new(source: NodeId, dest: NodeId) -> Edge {
        Edge {
            source,
            dest,
            weight: 0,
        }
    }

    /// Weights only ever accumulate; saturates rather than wrapping.
    #[inline]
    pub(super) fn add_weight(&mut self, weight: u64) {
        self.weight = self.weight.saturating_add(weight);
    }

    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    #[inline]
    pub fn dest(&self) -> NodeId {
        self.dest
    }

    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }
}
