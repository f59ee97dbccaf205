use crate::errors::SearchError;
use super::{GraphNodeMap, NO_PARENT};

/// Walk the parent chain from the goal node back to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn reconstruct_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, SearchError>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = goal_index;

    while current_index != NO_PARENT {
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => return Err(SearchError::BrokenParentChain(current_index)),
        }
        // A chain longer than the map means a cycle
        if path.len() > node_map.len() {
            return Err(SearchError::BrokenParentChain(current_index));
        }
    }

    if path.is_empty() {
        return Err(SearchError::NoPathFound);
    }

    path.reverse();
    Ok(path)
}

/// Number of unit-cost edges along a path
pub fn path_cost<N>(path: &[N]) -> usize {
    path.len().saturating_sub(1)
}
