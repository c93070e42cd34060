use crate::kmergraph::KmerGraph;

use gfa::gfa::{Link, Orientation, Segment, GFA};

use bstr::BString;

/// GFA segment name for a node; GFA names must be positive.
#[inline]
pub fn segment_name(node: &crate::kmergraph::Node) -> usize {
    usize::from(node.id()) + 1
}

/// Export a k-mer graph as GFA, with one segment per k-mer and one
/// forward-to-forward link per edge. Consecutive k-mers overlap by
/// `k - 1` bases, which is recorded as the link's CIGAR overlap.
///
/// Edge weights are not carried over.
pub fn to_gfa(graph: &KmerGraph) -> GFA<usize, ()> {
    let mut gfa = GFA::new();

    for node in graph.nodes() {
        let segment = Segment {
            name: segment_name(node),
            sequence: BString::from(node.label()),
            optional: (),
        };
        gfa.segments.push(segment);
    }

    let overlap = BString::from(format!("{}M", graph.k() - 1));

    for edge in graph.edges() {
        let from_segment = segment_name(graph.get_node_unchecked(edge.source()));
        let to_segment = segment_name(graph.get_node_unchecked(edge.dest()));

        let link = Link {
            from_segment,
            from_orient: Orientation::Forward,
            to_segment,
            to_orient: Orientation::Forward,
            overlap: overlap.clone(),
            optional: (),
        };

        gfa.links.push(link);
    }

    gfa
}
