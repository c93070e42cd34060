/*!
A weighted k-mer graph for local assembly, with best-first enumeration
of source-to-sink paths ranked by their weakest edge.
*/

use crate::{handle::NodeId, weightedgraph::*};

pub mod graph;
pub mod iter;
pub mod node;
pub mod path;

#[cfg(test)]
mod quickcheck;

pub use self::{
    graph::KmerGraph,
    iter::{EdgesIter, NodeIdsIter, SuccessorsIter},
    node::{Edge, Node},
    path::{Candidate, PathIx, PathRecord, UNBOUNDED_WEIGHT},
};

impl<'a> AllNodes for &'a KmerGraph {
    type Nodes = NodeIdsIter;

    #[inline]
    fn all_nodes(self) -> Self::Nodes {
        NodeIdsIter::new(self.nodes().len())
    }

    #[inline]
    fn node_count(self) -> usize {
        self.nodes().len()
    }

    #[inline]
    fn has_node<I: Into<NodeId>>(self, n_id: I) -> bool {
        self.get_node(n_id.into()).is_some()
    }
}

impl<'a> AllEdges for &'a KmerGraph {
    type Edges = EdgesIter<'a>;

    #[inline]
    fn all_edges(self) -> Self::Edges {
        EdgesIter::new(self.edges())
    }

    #[inline]
    fn edge_count(self) -> usize {
        self.edges().len()
    }
}

impl<'a> NodeSuccessors for &'a KmerGraph {
    type Successors = SuccessorsIter<'a>;

    #[inline]
    fn successors(self, id: NodeId) -> Self::Successors {
        let node = self.get_node_unchecked(id);
        SuccessorsIter::new(self.edges(), node.departing_edges())
    }

    #[inline]
    fn out_degree(self, id: NodeId) -> usize {
        self.get_node_unchecked(id).out_degree()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_ref_traits() {
        let mut graph = KmerGraph::new(3, b"CCAAGTT");
        graph.add_sequence(b"CCATGTT", 2);

        let g = &graph;

        assert_eq!(AllNodes::node_count(g), 8);
        assert_eq!(AllEdges::edge_count(g), 8);
        assert!(AllNodes::has_node(g, NodeId(7)));
        assert!(!AllNodes::has_node(g, NodeId(8)));

        let ids: Vec<_> = g.all_nodes().collect();
        assert_eq!(ids.len(), 8);
        assert_eq!(ids[0], graph.source_id());

        let cca = graph.node_id(b"CCA");
        let succ: Vec<_> = g.successors(cca).collect();
        assert_eq!(
            succ,
            vec![(graph.node_id(b"CAA"), 1), (graph.node_id(b"CAT"), 2)]
        );
        assert_eq!(NodeSuccessors::out_degree(g, cca), 2);

        let total: u64 = g.all_edges().map(|(_, _, w)| w).sum();
        assert_eq!(total, 4 + 4 * 2);
    }
}
