/*!
Weighted k-mer graphs for assembling candidate haplotypes in a small
reference window.

# Overview

A [`KmerGraph`](kmergraph::KmerGraph) is seeded with a reference
sequence, whose first and last k-mers become the source and sink of
the graph, and then fed the reads observed over that window. Each
read contributes its weight to every k-mer transition it contains.

Candidate sequences are the source-to-sink paths through the graph,
enumerated best-first by their *bottleneck*, the weight of their least
supported transition.

The usual flow is:

1. pick the smallest k for which the reference alone gives an acyclic
   graph, with
   [`KmerGraph::select_kmer_length`](kmergraph::KmerGraph::select_kmer_length),
2. build the graph from the reference and the reads,
3. call [`enumerate_paths`](kmergraph::KmerGraph::enumerate_paths).

[`assembly::assemble`] does all three in one call.

# Modules

* [`handle`] defines the [`NodeId`](handle::NodeId) and
  [`EdgeIx`](handle::EdgeIx) newtypes
* [`weightedgraph`] has the traits for read access to weighted
  directed graphs, which the functions in [`algorithms`] are generic
  over
* [`kmergraph`] is the graph itself, and path enumeration
* [`quality`] maps base quality codes to log-likelihoods and back
* [`conversion`] exports a graph as GFA

*/

pub mod handle;

pub mod weightedgraph;

pub mod kmergraph;

pub mod algorithms;
pub mod assembly;
pub mod conversion;
pub mod error;
pub mod quality;

pub use error::{Error, Result};
