/*!
Traits for immutable access to the nodes and weighted edges of a
directed graph.

The traits are meant to be implemented on references to graphs, e.g.
`&'a KmerGraph`, so that the associated iterator types can borrow
from the graph. Algorithms take a `G: WeightedGraphRef` by value,
which for a reference is a cheap copy.
*/

use crate::handle::NodeId;

/// Access to all the nodes in a graph.
pub trait AllNodes: Sized {
    type Nodes: Iterator<Item = NodeId>;

    fn all_nodes(self) -> Self::Nodes;

    #[inline]
    fn node_count(self) -> usize {
        self.all_nodes().count()
    }

    #[inline]
    fn has_node<I: Into<NodeId>>(self, n_id: I) -> bool {
        let n_id = n_id.into();
        self.all_nodes().any(|id| id == n_id)
    }
}

/// Access to all the edges in a graph, as `(from, to, weight)` triples.
pub trait AllEdges: Sized {
    type Edges: Iterator<Item = (NodeId, NodeId, u64)>;

    fn all_edges(self) -> Self::Edges;

    #[inline]
    fn edge_count(self) -> usize {
        self.all_edges().count()
    }
}

/// Access to the departing edges of a single node, as
/// `(destination, weight)` pairs.
pub trait NodeSuccessors: Sized {
    type Successors: Iterator<Item = (NodeId, u64)>;

    /// Implementations may panic if `id` is not in the graph.
    fn successors(self, id: NodeId) -> Self::Successors;

    #[inline]
    fn out_degree(self, id: NodeId) -> usize {
        self.successors(id).count()
    }
}

/// Convenience trait for collecting the access traits in a single
/// bound. Automatically implemented for anything that implements all
/// of them and is `Copy`, which in practice means graph references.
pub trait WeightedGraphRef: AllNodes + AllEdges + NodeSuccessors + Copy {}

impl<T> WeightedGraphRef for T where
    T: AllNodes + AllEdges + NodeSuccessors + Copy
{
}
