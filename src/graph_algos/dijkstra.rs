use crate::errors::SearchError;
use crate::collections::FxHashSet;
use super::{reconstruct_path, GraphNodeMap, OpenList, NO_PARENT};

use std::{hash::Hash, fmt::Debug};
use indexmap::map::Entry::{Occupied, Vacant};


/// Identify the shortest path using Dijkstra's Algorithm (uniform-cost search)
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Every edge costs one step
pub fn dijkstra<N, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal);

    if let Some(goal_index) = goal_index {
        let path = reconstruct_path(&node_map, goal_index)?;
        log::debug!("dijkstra: path of {} nodes, {} nodes discovered", path.len(), node_map.len());
        Ok(path)
    } else {
        log::debug!("dijkstra: no path, {} nodes discovered", node_map.len());
        Err(SearchError::NoPathFound)
    }
}


/// Returns a full map of the graph, includes all (reachable) nodes with
/// (parent_index, distance from start)
pub fn dijkstra_distances<N, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, usize>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = N>,
    {

    let (node_map, _) = build_dijkstra_graph(start, neighbors, |_| false);
    node_map
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, usize>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool,
    {

    // Nodes to visit, ordered by cost from the start node
    // A node can be queued several times; only its first extraction counts
    let mut nodes_to_visit: OpenList<usize> = OpenList::new();

    // Every discovered node with (parent_index, best known cost)
    // for the start node, parent_index is NO_PARENT
    let mut nodes_map: GraphNodeMap<N, usize> = GraphNodeMap::default();
    let start_index = nodes_map.insert_full(start, (NO_PARENT, 0)).0;
    nodes_to_visit.push(start_index, 0);

    // finalized nodes - cost is known, no longer need to visit
    let mut visited: FxHashSet<usize> = FxHashSet::default();

    while let Some((index, _)) = nodes_to_visit.pop() {

        if !visited.insert(index) {
            continue;
        }

        let Some((node, &(_, cost))) = nodes_map.get_index(index) else {
            continue;
        };

        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        let new_cost = cost + 1;

        for neighbor in neighbors(node) {

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // We've found a better path to this neighbor
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            nodes_to_visit.push(neighbor_index, new_cost);
        }
    }

    (nodes_map, None)
}
