//! Weighted shortest paths over ad-hoc graphs
//!
//! Graphs here are throwaway adjacency maps built fresh per query; there is
//! no persistent graph type. Edge weights must be non-negative, which `u64`
//! enforces at the type level, but a relaxation that would undercut an
//! already-settled node still aborts loudly in case a cost map was mutated
//! mid-query.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::GraphError;

/// Adjacency-with-costs representation: source node to (destination, cost).
pub type EdgeCosts<T> = HashMap<T, HashMap<T, u64>>;

/// Convert a node-weighted graph into an edge-weighted one.
///
/// Many grid problems attach costs to nodes rather than edges. Each edge
/// u -> v inherits the cost of its destination v, so a path's edge costs sum
/// to the node costs of everything after the start. The start node is never a
/// destination: callers must account for its cost separately.
pub fn node_costs_to_edge_costs<T>(
    node_costs: &HashMap<T, u64>,
    edges: &HashMap<T, Vec<T>>,
) -> EdgeCosts<T>
where
    T: Eq + Hash + Clone,
{
    edges
        .iter()
        .map(|(src, dsts)| {
            let costs = dsts.iter().map(|dst| (dst.clone(), node_costs[dst])).collect();
            (src.clone(), costs)
        })
        .collect()
}

/// Minimal total cost from `start` to `end` by Dijkstra's algorithm.
///
/// # Errors
///
/// [`GraphError::NoPath`] if `end` is unreachable from `start`, so callers
/// cannot mistake "unreachable" for a zero-cost path.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use puzzle_math::dijkstra;
///
/// let edges = HashMap::from([("a", HashMap::from([("b", 5)]))]);
/// assert_eq!(dijkstra(&"a", &"b", &edges).unwrap(), 5);
/// assert!(dijkstra(&"b", &"a", &edges).is_err());
/// ```
pub fn dijkstra<T>(start: &T, end: &T, edge_costs: &EdgeCosts<T>) -> Result<u64, GraphError>
where
    T: Eq + Hash + Ord + Clone + Debug,
{
    let mut frontier = BinaryHeap::from([Reverse((0u64, start.clone()))]);
    let mut min_cost: HashMap<T, u64> = HashMap::new();

    while let Some(Reverse((cost, node))) = frontier.pop() {
        // The frontier holds stale duplicates for nodes relaxed more than
        // once; only the first (cheapest) pop settles a node.
        if let Some(&settled) = min_cost.get(&node) {
            assert!(cost >= settled, "frontier produced {node:?} below its settled cost");
            continue;
        }
        min_cost.insert(node.clone(), cost);

        if node == *end {
            return Ok(cost);
        }

        let Some(neighbors) = edge_costs.get(&node) else {
            continue;
        };
        for (dst, &step) in neighbors {
            if let Some(&settled) = min_cost.get(dst) {
                assert!(
                    cost + step >= settled,
                    "relaxation of {dst:?} below its settled cost; negative edge weight?"
                );
                continue;
            }
            frontier.push(Reverse((cost + step, dst.clone())));
        }
    }

    Err(GraphError::NoPath(format!("{start:?}"), format!("{end:?}")))
}
