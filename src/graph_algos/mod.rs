pub mod bfs;
pub mod dfs;
pub mod iddfs;
pub mod dijkstra;
pub mod greedy;
pub mod a_star;
mod open_list;
mod path;

#[cfg(test)]
pub(crate) mod test_graphs;
#[cfg(test)]
mod properties;

use path::reconstruct_path;
use open_list::OpenList;

pub use path::path_cost;

use crate::collections::FxIndexMap;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost (or depth / priority) recorded when the node was reached
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the value attached to the node by the algorithm
/// The start node always sits at index 0 with parent usize::MAX
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index marking the root of the search tree
pub(crate) const NO_PARENT: usize = usize::MAX;
