//! Iterators used to implement the
//! [`weightedgraph`](crate::weightedgraph) traits for `&KmerGraph`.
//!
//! These are plain structs rather than `std::iter::Map` wrappers so
//! that they can be named as associated types.

use crate::handle::{EdgeIx, NodeId};

use super::Edge;

/// Iterator over the node IDs of a graph with dense IDs.
#[derive(Debug, Clone)]
pub struct NodeIdsIter {
    range: std::ops::Range<u64>,
}

impl NodeIdsIter {
    #[inline]
    pub(super) fn new(node_count: usize) -> Self {
        Self {
            range: 0..node_count as u64,
        }
    }
}

impl Iterator for NodeIdsIter {
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        self.range.next().map(NodeId)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

/// Iterator over the departing edges of a node, yielding
/// `(destination, weight)`.
#[derive(Debug, Clone)]
pub struct SuccessorsIter<'a> {
    edges: &'a [Edge],
    iter: std::slice::Iter<'a, EdgeIx>,
}

impl<'a> SuccessorsIter<'a> {
    #[inline]
    pub(super) fn new(edges: &'a [Edge], departing: &'a [EdgeIx]) -> Self {
        Self {
            edges,
            iter: departing.iter(),
        }
    }
}

impl<'a> Iterator for SuccessorsIter<'a> {
    type Item = (NodeId, u64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let ix = self.iter.next()?;
        let edge = &self.edges[ix.index()];
        Some((edge.dest, edge.weight))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator over all edges of a graph, yielding
/// `(source, destination, weight)`.
#[derive(Debug, Clone)]
pub struct EdgesIter<'a> {
    iter: std::slice::Iter<'a, Edge>,
}

impl<'a> EdgesIter<'a> {
    #[inline]
    pub(super) fn new(edges: &'a [Edge]) -> Self {
        Self { iter: edges.iter() }
    }
}

impl<'a> Iterator for EdgesIter<'a> {
    type Item = (NodeId, NodeId, u64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.iter.next()?;
        Some((edge.source, edge.dest, edge.weight))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
