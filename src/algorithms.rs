use std::collections::VecDeque;

use fnv::FnvHashMap;

#[allow(unused_imports)]
use log::{debug, trace};

use crate::{handle::NodeId, weightedgraph::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Open,
    Done,
}

/// Returns `true` if the graph contains a directed cycle, including
/// self-loops.
///
/// Iterative depth-first search; a cycle exists iff the search finds
/// an edge back to a node that is still on the stack.
pub fn has_cycle<G: WeightedGraphRef>(graph: G) -> bool {
    let mut marks: FnvHashMap<NodeId, Mark> = FnvHashMap::default();
    let mut stack: Vec<(NodeId, G::Successors)> = Vec::new();

    for start in graph.all_nodes() {
        if marks.contains_key(&start) {
            continue;
        }

        marks.insert(start, Mark::Open);
        stack.push((start, graph.successors(start)));

        loop {
            let (node, next) = match stack.last_mut() {
                Some((node, successors)) => (*node, successors.next()),
                None => break,
            };

            match next {
                Some((next, _)) => match marks.get(&next) {
                    Some(Mark::Open) => {
                        trace!("back edge {} -> {}", node, next);
                        return true;
                    }
                    Some(Mark::Done) => (),
                    None => {
                        marks.insert(next, Mark::Open);
                        stack.push((next, graph.successors(next)));
                    }
                },
                None => {
                    marks.insert(node, Mark::Done);
                    stack.pop();
                }
            }
        }
    }

    false
}

/// Order the nodes so that every edge points forward, using Kahn's
/// algorithm. Returns `None` if the graph has a cycle.
///
/// Nodes with no remaining incoming edges are emitted in the order
/// `all_nodes` produces them.
pub fn topological_order<G: WeightedGraphRef>(graph: G) -> Option<Vec<NodeId>> {
    let mut in_degree: FnvHashMap<NodeId, usize> =
        graph.all_nodes().map(|id| (id, 0)).collect();

    for (_, to, _) in graph.all_edges() {
        *in_degree.entry(to).or_default() += 1;
    }

    let mut queue: VecDeque<NodeId> = graph
        .all_nodes()
        .filter(|id| in_degree.get(id).copied() == Some(0))
        .collect();

    let mut order = Vec::with_capacity(in_degree.len());

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for (next, _) in graph.successors(node) {
            if let Some(degree) = in_degree.get_mut(&next) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(next);
                }
            }
        }
    }

    if order.len() == in_degree.len() {
        Some(order)
    } else {
        debug!(
            "no topological order, {} of {} nodes are on or behind a cycle",
            in_degree.len() - order.len(),
            in_degree.len()
        );
        None
    }
}
