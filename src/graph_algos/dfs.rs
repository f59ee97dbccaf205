use crate::errors::SearchError;
use crate::collections::FxHashSet;
use super::{reconstruct_path, GraphNodeMap, NO_PARENT};

use std::{hash::Hash, fmt::Debug};
use indexmap::map::Entry::{Occupied, Vacant};


/// Depth-First Search
/// https://en.wikipedia.org/wiki/Depth-first_search
/// From start Node, follow the first neighbor as deep as possible before backtracking
/// The returned path is valid but not necessarily the shortest
pub fn dfs<N, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let (node_map, goal_index) = build_dfs_graph(start, neighbors, goal);

    match goal_index {
        Some(goal_index) => {
            let path = reconstruct_path(&node_map, goal_index)?;
            log::debug!("dfs: path of {} nodes, {} nodes discovered", path.len(), node_map.len());
            Ok(path)
        }
        None => {
            log::debug!("dfs: no path, {} nodes discovered", node_map.len());
            Err(SearchError::NoPathFound)
        }
    }
}


/// Traverses the graph depth first using an explicit stack
/// Returns every discovered node with (parent_index, depth) along with the index of the goal node
/// Nodes are marked visited when popped, so a node may sit on the stack more than once;
/// the latest push of an unvisited node owns its parent entry
fn build_dfs_graph<N, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, usize>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool,
{
    let mut nodes_map: GraphNodeMap<N, usize> = GraphNodeMap::default();
    let start_index = nodes_map.insert_full(start, (NO_PARENT, 0)).0;

    let mut visited: FxHashSet<usize> = FxHashSet::default();
    let mut stack: Vec<usize> = vec![start_index];

    while let Some(index) = stack.pop() {

        if !visited.insert(index) {
            continue;
        }

        let Some((node, &(_, depth))) = nodes_map.get_index(index) else {
            continue;
        };

        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        // Push in reverse so the first yielded neighbor is popped first
        let children: Vec<N> = neighbors(node).into_iter().collect();
        for neighbor in children.into_iter().rev() {
            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let i = e.index();
                    e.insert((index, depth + 1));
                    i
                }
                Occupied(mut e) => {
                    if visited.contains(&e.index()) {
                        continue;
                    }
                    e.insert((index, depth + 1));
                    e.index()
                }
            };
            stack.push(neighbor_index);
        }
    }

    (nodes_map, None)
}
