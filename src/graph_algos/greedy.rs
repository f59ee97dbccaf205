use crate::errors::SearchError;
use crate::collections::FxHashSet;
use super::{reconstruct_path, GraphNodeMap, OpenList, NO_PARENT};

use std::{hash::Hash, fmt::Debug};
use indexmap::map::Entry::{Occupied, Vacant};


/// Greedy Best-First Search
/// https://en.wikipedia.org/wiki/Best-first_search#Greedy_BFS
/// Always expands the open node with the lowest heuristic value, ignoring the
/// cost already travelled. Fast on open maps but the path is not guaranteed
/// to be the shortest
/// With a constant heuristic nodes are expanded in insertion order
pub fn greedy_best_first<N, C, IT, NN, H, G>(start: N, neighbors: NN, heuristic_fn: H, goal: G) -> Result<Vec<N>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    H: Fn(&N) -> C, // heuristic function
    C: Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let (node_map, goal_index) = build_greedy_graph(start, neighbors, heuristic_fn, goal);

    match goal_index {
        Some(goal_index) => {
            let path = reconstruct_path(&node_map, goal_index)?;
            log::debug!("greedy: path of {} nodes, {} nodes discovered", path.len(), node_map.len());
            Ok(path)
        }
        None => {
            log::debug!("greedy: no path, {} nodes discovered", node_map.len());
            Err(SearchError::NoPathFound)
        }
    }
}


/// Traverses the graph ordered by heuristic only
/// Returns every discovered node with (parent_index, heuristic) along with the index of the goal node
/// The first node to discover a neighbor stays its parent; unvisited
/// neighbors are queued again on every rediscovery without comparing costs
fn build_greedy_graph<N, C, IT, NN, H, G>(start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = N>,
    H: Fn(&N) -> C,
    C: Ord + Copy + Debug,
    G: Fn(&N) -> bool,
{
    let mut open_list: OpenList<C> = OpenList::new();

    let start_h = heuristic_fn(&start);
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();
    let start_index = nodes_map.insert_full(start, (NO_PARENT, start_h)).0;
    open_list.push(start_index, start_h);

    let mut visited: FxHashSet<usize> = FxHashSet::default();

    while let Some((index, _)) = open_list.pop() {

        if !visited.insert(index) {
            continue;
        }

        let Some((node, _)) = nodes_map.get_index(index) else {
            continue;
        };

        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        for neighbor in neighbors(node) {
            let (neighbor_index, h_cost) = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let h_cost = heuristic_fn(e.key());
                    let i = e.index();
                    e.insert((index, h_cost));
                    (i, h_cost)
                }
                Occupied(e) => (e.index(), e.get().1),
            };

            if !visited.contains(&neighbor_index) {
                open_list.push(neighbor_index, h_cost);
            }
        }
    }

    (nodes_map, None)
}
