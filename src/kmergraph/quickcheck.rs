use ::quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

use super::{Candidate, KmerGraph, UNBOUNDED_WEIGHT};

const K: usize = 4;

/// Caps enumeration on graphs where random reads created cycles.
const RECORD_LIMIT: usize = 20_000;

#[derive(Debug, Clone)]
struct Dna(Vec<u8>);

impl Arbitrary for Dna {
    fn arbitrary<G: Gen>(g: &mut G) -> Dna {
        let raw: Vec<u8> = Arbitrary::arbitrary(g);
        Dna(raw.into_iter().map(|b| b"ACGT"[(b % 4) as usize]).collect())
    }
}

#[derive(Debug, Clone)]
struct LocalWindow {
    reference: Dna,
    reads: Vec<(Dna, u8)>,
}

impl Arbitrary for LocalWindow {
    fn arbitrary<G: Gen>(g: &mut G) -> LocalWindow {
        let reference = Dna::arbitrary(g);
        let count = usize::arbitrary(g) % 6;

        // reads are mostly copies of the reference with a few bases
        // changed, so that they share k-mers with it
        let reads = (0..count)
            .map(|_| {
                let mut read = reference.0.clone();
                for _ in 0..(usize::arbitrary(g) % 3) {
                    if read.is_empty() {
                        break;
                    }
                    let pos = usize::arbitrary(g) % read.len();
                    read[pos] = b"ACGT"[(u8::arbitrary(g) % 4) as usize];
                }
                (Dna(read), u8::arbitrary(g))
            })
            .collect();

        LocalWindow { reference, reads }
    }
}

impl LocalWindow {
    fn build(&self) -> Option<KmerGraph> {
        if self.reference.0.len() < K {
            return None;
        }
        let mut graph = KmerGraph::new(K, &self.reference.0);
        for (read, weight) in self.reads.iter() {
            graph.add_sequence(&read.0, u64::from(*weight));
        }
        Some(graph)
    }
}

fn enumerate(
    graph: &KmerGraph,
    min_weight: u64,
    max_paths: usize,
) -> Vec<Candidate> {
    let mut paths = Vec::new();
    // hitting the cap still leaves a valid prefix of the results
    let _ = graph.enumerate_paths_capped(
        min_weight,
        max_paths,
        RECORD_LIMIT,
        &mut paths,
    );
    paths
}

/// The smallest edge weight along `seq`, or `None` if it uses a
/// transition that isn't in the graph.
fn walk_bottleneck(graph: &KmerGraph, seq: &[u8]) -> Option<u64> {
    let kmers: Vec<&[u8]> = seq.windows(graph.k()).collect();
    let mut bottleneck = UNBOUNDED_WEIGHT;
    for pair in kmers.windows(2) {
        let weight = graph.edge_weight(pair[0], pair[1])?;
        bottleneck = bottleneck.min(weight);
    }
    Some(bottleneck)
}

fn double_ingestion_doubles_weights(seq: Dna, weight: u8) -> TestResult {
    if seq.0.len() < K {
        return TestResult::discard();
    }
    let weight = u64::from(weight);

    let mut once = KmerGraph::with_seed_weight(K, &seq.0, 0);
    let mut twice = once.clone();

    once.add_sequence(&seq.0, weight);
    twice.add_sequence(&seq.0, weight);
    twice.add_sequence(&seq.0, weight);

    let res = once.edge_count() == twice.edge_count()
        && once
            .edges()
            .iter()
            .zip(twice.edges().iter())
            .all(|(a, b)| b.weight() == 2 * a.weight());

    TestResult::from_bool(res)
}

fn results_are_bounded_and_ordered(
    window: LocalWindow,
    min_weight: u8,
    max_paths: u8,
) -> TestResult {
    let graph = match window.build() {
        Some(graph) => graph,
        None => return TestResult::discard(),
    };
    let min_weight = u64::from(min_weight % 8);
    let max_paths = usize::from(max_paths % 10);

    let paths = enumerate(&graph, min_weight, max_paths);

    if paths.len() > max_paths {
        return TestResult::failed();
    }

    let ordered = paths.windows(2).all(|w| w[0].weight >= w[1].weight);

    TestResult::from_bool(ordered)
}

fn results_respect_min_weight(
    window: LocalWindow,
    min_weight: u8,
) -> TestResult {
    let graph = match window.build() {
        Some(graph) => graph,
        None => return TestResult::discard(),
    };
    let min_weight = u64::from(min_weight % 8);

    let paths = enumerate(&graph, min_weight, 8);

    let res = paths.iter().all(|cand| {
        cand.sequence.starts_with(graph.source_kmer())
            && cand.sequence.ends_with(graph.sink_kmer())
            && match walk_bottleneck(&graph, &cand.sequence) {
                Some(bottleneck) => {
                    bottleneck == cand.weight && bottleneck >= min_weight
                }
                None => false,
            }
    });

    TestResult::from_bool(res)
}

fn acyclic_reference_is_found(reference: Dna) -> TestResult {
    if reference.0.len() < K {
        return TestResult::discard();
    }
    let graph = KmerGraph::new(K, &reference.0);
    if graph.has_cycle() {
        return TestResult::discard();
    }

    let paths = graph.enumerate_paths(1, 1);
    TestResult::from_bool(
        paths.len() == 1
            && paths[0].sequence == reference.0
            && (paths[0].weight == 1 || reference.0.len() == K),
    )
}

#[test]
fn prop_double_ingestion() {
    QuickCheck::new().tests(500).quickcheck(
        double_ingestion_doubles_weights as fn(Dna, u8) -> TestResult,
    );
}

#[test]
fn prop_bounded_and_ordered() {
    QuickCheck::new().tests(300).quickcheck(
        results_are_bounded_and_ordered
            as fn(LocalWindow, u8, u8) -> TestResult,
    );
}

#[test]
fn prop_min_weight() {
    QuickCheck::new().tests(300).quickcheck(
        results_respect_min_weight as fn(LocalWindow, u8) -> TestResult,
    );
}

#[test]
fn prop_acyclic_reference() {
    QuickCheck::new()
        .tests(300)
        .quickcheck(acyclic_reference_is_found as fn(Dna) -> TestResult);
}
