/*!
Local assembly of one reference window: pick a k-mer length, build the
graph from the reference and the reads, and enumerate the best
supported candidate sequences.
*/

use serde::{Deserialize, Serialize};

#[allow(unused_imports)]
use log::{debug, info};

use crate::{
    error::Result,
    kmergraph::{Candidate, KmerGraph},
};

/// Parameters for [`assemble`]. Missing fields take their default
/// values when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyParams {
    /// Smallest k-mer length to try.
    pub min_k: usize,
    /// Largest k-mer length to try.
    pub max_k: usize,
    /// Weight given to the reference's own transitions.
    pub reference_weight: u64,
    /// Edges lighter than this are never traversed.
    pub min_weight: u64,
    /// Maximum number of candidates to return.
    pub max_paths: usize,
    /// Give up enumerating after allocating this many path records.
    pub max_path_records: Option<usize>,
}

impl Default for AssemblyParams {
    fn default() -> Self {
        Self {
            min_k: 10,
            max_k: 64,
            reference_weight: 1,
            min_weight: 2,
            max_paths: 16,
            max_path_records: None,
        }
    }
}

impl AssemblyParams {
    pub fn with_kmer_range(mut self, min_k: usize, max_k: usize) -> Self {
        self.min_k = min_k;
        self.max_k = max_k;
        self
    }

    pub fn with_reference_weight(mut self, weight: u64) -> Self {
        self.reference_weight = weight;
        self
    }

    pub fn with_min_weight(mut self, min_weight: u64) -> Self {
        self.min_weight = min_weight;
        self
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    pub fn with_max_path_records(mut self, max_records: usize) -> Self {
        self.max_path_records = Some(max_records);
        self
    }
}

/// An observed read and the number of times it should count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedRead {
    pub sequence: Vec<u8>,
    pub weight: u64,
}

impl WeightedRead {
    pub fn new(sequence: &[u8], weight: u64) -> Self {
        Self {
            sequence: sequence.into(),
            weight,
        }
    }
}

/// The candidates assembled for one window, and the k they were
/// assembled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAssembly {
    pub k: usize,
    pub candidates: Vec<Candidate>,
}

/// Build the graph for `reference` with k-mer length `k`, and ingest
/// all reads into it.
pub fn build_graph(
    k: usize,
    reference: &[u8],
    reference_weight: u64,
    reads: &[WeightedRead],
) -> KmerGraph {
    let mut graph = KmerGraph::with_seed_weight(k, reference, reference_weight);
    for read in reads {
        graph.add_sequence(&read.sequence, read.weight);
    }
    debug!(
        "built graph with k = {} from {} reads: {} nodes, {} edges",
        k,
        reads.len(),
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

/// Assemble candidate sequences for a reference window.
///
/// Chooses the smallest k in the configured range that gives an
/// acyclic reference graph, builds the full graph from the reference
/// and `reads`, and enumerates source-to-sink paths. The graph may
/// still contain cycles introduced by the reads; set
/// `max_path_records` to bound the search in that case.
pub fn assemble(
    reference: &[u8],
    reads: &[WeightedRead],
    params: &AssemblyParams,
) -> Result<LocalAssembly> {
    let k = KmerGraph::select_kmer_length(reference, params.min_k, params.max_k)?;

    let graph = build_graph(k, reference, params.reference_weight, reads);

    let mut candidates = Vec::new();
    match params.max_path_records {
        Some(max_records) => graph.enumerate_paths_capped(
            params.min_weight,
            params.max_paths,
            max_records,
            &mut candidates,
        )?,
        None => graph.enumerate_paths_into(
            params.min_weight,
            params.max_paths,
            &mut candidates,
        ),
    }

    Ok(LocalAssembly { k, candidates })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Error;

    #[test]
    fn params_builder() {
        let params = AssemblyParams::default()
            .with_kmer_range(3, 8)
            .with_min_weight(1)
            .with_max_paths(4)
            .with_reference_weight(0)
            .with_max_path_records(100);

        assert_eq!(params.min_k, 3);
        assert_eq!(params.max_k, 8);
        assert_eq!(params.min_weight, 1);
        assert_eq!(params.max_paths, 4);
        assert_eq!(params.reference_weight, 0);
        assert_eq!(params.max_path_records, Some(100));
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: AssemblyParams =
            serde_json::from_str(r#"{ "min_k": 5, "max_paths": 3 }"#).unwrap();

        assert_eq!(params.min_k, 5);
        assert_eq!(params.max_paths, 3);
        assert_eq!(params.max_k, AssemblyParams::default().max_k);
        assert_eq!(params.max_path_records, None);

        let json = serde_json::to_string(&params).unwrap();
        let back: AssemblyParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn assembles_two_alleles() {
        let reads = vec![
            WeightedRead::new(b"CCAAGTT", 3),
            WeightedRead::new(b"CCATGTT", 7),
            WeightedRead::new(b"CCAT", 1),
        ];
        let params = AssemblyParams::default()
            .with_kmer_range(2, 5)
            .with_min_weight(2);

        let res = assemble(b"CCAAGTT", &reads, &params).unwrap();

        // every 2-mer of the reference is distinct
        assert_eq!(res.k, 2);
        assert_eq!(res.candidates.len(), 2);
        assert_eq!(res.candidates[0].sequence, b"CCATGTT".to_vec());
        assert_eq!(res.candidates[0].weight, 7);
        assert_eq!(res.candidates[1].sequence, b"CCAAGTT".to_vec());
        assert_eq!(res.candidates[1].weight, 4);
    }

    #[test]
    fn no_acyclic_k() {
        let params = AssemblyParams::default().with_kmer_range(1, 3);
        assert_eq!(
            assemble(b"ACACACAC", &[], &params),
            Err(Error::NoAcyclicKmerLength { min_k: 1, max_k: 3 })
        );
    }

    #[test]
    fn capped_assembly() {
        let reads = vec![WeightedRead::new(b"CCATGTT", 7)];
        let params = AssemblyParams::default()
            .with_kmer_range(3, 5)
            .with_min_weight(1)
            .with_max_path_records(1);

        assert_eq!(
            assemble(b"CCAAGTT", &reads, &params),
            Err(Error::RecordLimitExceeded { limit: 1 })
        );
    }
}
