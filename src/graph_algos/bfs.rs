use crate::errors::SearchError;
use super::{reconstruct_path, GraphNodeMap, NO_PARENT};

use std::{collections::VecDeque, hash::Hash, fmt::Debug};
use indexmap::map::Entry::Vacant;


/// Breadth-First Search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// From start Node, expand level by level until a node meets the goal criteria
/// Every edge costs one step, so the returned path has the fewest edges
pub fn bfs<N, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let (node_map, goal_index) = build_bfs_graph(start, neighbors, goal);

    match goal_index {
        Some(goal_index) => {
            let path = reconstruct_path(&node_map, goal_index)?;
            log::debug!("bfs: path of {} nodes, {} nodes discovered", path.len(), node_map.len());
            Ok(path)
        }
        None => {
            log::debug!("bfs: no path, {} nodes discovered", node_map.len());
            Err(SearchError::NoPathFound)
        }
    }
}


/// Traverses the graph breadth first
/// Returns every discovered node with (parent_index, depth) along with the index of the goal node
/// A node is marked visited when it is enqueued, so it is never queued twice
fn build_bfs_graph<N, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, usize>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool,
{
    // Presence in the map doubles as the visited set
    let mut nodes_map: GraphNodeMap<N, usize> = GraphNodeMap::default();
    let start_index = nodes_map.insert_full(start, (NO_PARENT, 0)).0;

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(start_index);

    while let Some(index) = queue.pop_front() {

        let Some((node, &(_, depth))) = nodes_map.get_index(index) else {
            continue;
        };

        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        for neighbor in neighbors(node) {
            if let Vacant(e) = nodes_map.entry(neighbor) {
                let neighbor_index = e.index();
                e.insert((index, depth + 1));
                queue.push_back(neighbor_index);
            }
        }
    }

    (nodes_map, None)
}
