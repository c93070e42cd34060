use fnv::FnvHashMap;

use bstr::ByteSlice;

#[allow(unused_imports)]
use log::{debug, info, trace};

use crate::{
    algorithms,
    error::{Error, Result},
    handle::{EdgeIx, NodeId},
};

use super::{Edge, Node};

/// A weighted k-mer graph built from a reference window and the reads
/// that cover it.
///
/// Nodes are the distinct k-mers seen so far, and an edge from `a` to
/// `b` means `b` followed `a` in some ingested sequence, i.e. the two
/// k-mers overlap by `k - 1` bases. The first and last k-mers of the
/// seed sequence are the source and sink of every enumerated path.
#[derive(Debug, Clone)]
pub struct KmerGraph {
    k: usize,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    kmer_ids: FnvHashMap<Vec<u8>, NodeId>,
    edge_ids: FnvHashMap<(NodeId, NodeId), EdgeIx>,
    source: NodeId,
    sink: NodeId,
}

impl KmerGraph {
    /// Create a graph with k-mer length `k`, seeded with `seed` at
    /// weight 1.
    ///
    /// Panics if `k` is zero or `seed` is shorter than `k`.
    pub fn new(k: usize, seed: &[u8]) -> KmerGraph {
        Self::with_seed_weight(k, seed, 1)
    }

    /// Like [`KmerGraph::new`], but the seed's transitions are added
    /// with `seed_weight`. A weight of zero creates the seed's nodes
    /// and edges without contributing any support.
    pub fn with_seed_weight(
        k: usize,
        seed: &[u8],
        seed_weight: u64,
    ) -> KmerGraph {
        assert!(k > 0, "k-mer length must be at least 1");
        assert!(
            seed.len() >= k,
            "seed sequence of length {} is shorter than k = {}",
            seed.len(),
            k
        );

        let mut graph = KmerGraph {
            k,
            nodes: Vec::new(),
            edges: Vec::new(),
            kmer_ids: FnvHashMap::default(),
            edge_ids: FnvHashMap::default(),
            source: NodeId(0),
            sink: NodeId(0),
        };

        // a seed of exactly k bases has no transitions, so the
        // endpoints have to be created here
        graph.source = graph.get_or_create_node(&seed[..k]);
        graph.sink = graph.get_or_create_node(&seed[seed.len() - k..]);
        graph.add_sequence(seed, seed_weight);

        graph
    }

    /// Add every transition between consecutive k-mers of `seq`,
    /// increasing each edge's weight by `weight`. Sequences of length
    /// `k` or less contain no transitions and are ignored.
    pub fn add_sequence(&mut self, seq: &[u8], weight: u64) {
        if seq.len() <= self.k {
            return;
        }

        let mut prev = self.get_or_create_node(&seq[..self.k]);
        for kmer in seq.windows(self.k).skip(1) {
            let next = self.get_or_create_node(kmer);
            self.increment_edge(prev, next, weight);
            prev = next;
        }
    }

    fn get_or_create_node(&mut self, kmer: &[u8]) -> NodeId {
        debug_assert_eq!(kmer.len(), self.k);

        if let Some(&id) = self.kmer_ids.get(kmer) {
            return id;
        }

        let id = NodeId::from(self.nodes.len());
        self.nodes.push(Node::new(id, kmer));
        self.kmer_ids.insert(kmer.to_vec(), id);
        id
    }

    fn increment_edge(&mut self, from: NodeId, to: NodeId, weight: u64) {
        let edge_ix = match self.edge_ids.get(&(from, to)) {
            Some(&ix) => ix,
            None => {
                let ix = EdgeIx(self.edges.len());
                self.edges.push(Edge::new(from, to));
                self.edge_ids.insert((from, to), ix);
                self.nodes[from.index()].departing_edges.push(ix);
                ix
            }
        };

        self.edges[edge_ix.index()].add_weight(weight);
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn source_id(&self) -> NodeId {
        self.source
    }

    #[inline]
    pub fn sink_id(&self) -> NodeId {
        self.sink
    }

    pub fn source_kmer(&self) -> &[u8] {
        self.label(self.source)
    }

    pub fn sink_kmer(&self) -> &[u8] {
        self.label(self.sink)
    }

    /// The nodes of the graph, indexed by `NodeId`.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The edges of the graph, in creation order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn get_node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(node_id.index())
    }

    pub fn get_node_unchecked(&self, node_id: NodeId) -> &Node {
        self.nodes.get(node_id.index()).unwrap_or_else(|| {
            panic!("Tried getting a node that doesn't exist, ID: {}", node_id)
        })
    }

    #[inline]
    pub fn get_node_id(&self, kmer: &[u8]) -> Option<NodeId> {
        self.kmer_ids.get(kmer).copied()
    }

    /// Look up the node for a k-mer that is known to be in the graph.
    ///
    /// Panics if the k-mer has never been inserted.
    pub fn node_id(&self, kmer: &[u8]) -> NodeId {
        self.get_node_id(kmer).unwrap_or_else(|| {
            panic!("Tried looking up a k-mer that isn't in the graph: {}", kmer.as_bstr())
        })
    }

    /// The k-mer of a node that is known to be in the graph.
    ///
    /// Panics if `node_id` is not in the graph.
    pub fn label(&self, node_id: NodeId) -> &[u8] {
        &self.get_node_unchecked(node_id).label
    }

    #[inline]
    pub fn edge(&self, edge_ix: EdgeIx) -> &Edge {
        &self.edges[edge_ix.index()]
    }

    /// Iterate through the edges departing the given node.
    pub fn departing_edges(
        &self,
        node_id: NodeId,
    ) -> impl Iterator<Item = &Edge> + '_ {
        self.get_node_unchecked(node_id)
            .departing_edges
            .iter()
            .map(move |&ix| self.edge(ix))
    }

    /// The accumulated weight of the transition `from -> to`, if both
    /// k-mers and the edge exist.
    pub fn edge_weight(&self, from: &[u8], to: &[u8]) -> Option<u64> {
        let from = self.get_node_id(from)?;
        let to = self.get_node_id(to)?;
        let ix = self.edge_ids.get(&(from, to))?;
        Some(self.edge(*ix).weight)
    }

    /// Whether the graph contains any directed cycle. Path enumeration
    /// is only guaranteed to terminate on acyclic graphs.
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(self)
    }

    /// Find the smallest k in `min_k..=max_k` for which the graph built
    /// from `reference` alone is acyclic.
    ///
    /// Values of k that can't produce a graph, i.e. zero or anything
    /// longer than `reference`, are skipped. Returns
    /// [`Error::NoAcyclicKmerLength`] if no k qualifies.
    pub fn select_kmer_length(
        reference: &[u8],
        min_k: usize,
        max_k: usize,
    ) -> Result<usize> {
        let lower = min_k.max(1);
        let upper = max_k.min(reference.len());

        for k in lower..=upper {
            let graph = KmerGraph::new(k, reference);
            let cyclic = graph.has_cycle();
            debug!(
                "k = {}: {} nodes, {} edges, {}",
                k,
                graph.node_count(),
                graph.edge_count(),
                if cyclic { "cyclic" } else { "acyclic" }
            );
            if !cyclic {
                debug!("selected k-mer length {}", k);
                return Ok(k);
            }
        }

        Err(Error::NoAcyclicKmerLength { min_k, max_k })
    }
}
