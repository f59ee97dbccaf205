use crate::errors::SearchError;
use crate::collections::FxHashSet;
use super::{reconstruct_path, GraphNodeMap, OpenList, NO_PARENT};

use std::{hash::Hash, fmt::Debug};
use num_traits::{One, Zero};
use indexmap::map::Entry::{Occupied, Vacant};


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until node meets goal criteria
    /// Every edge costs C::one(); nodes are expanded by cost + heuristic
    /// The Approach has 2 requirements for the path to be the shortest:
    /// 1. The heuristic function must be admissible (never overestimates the true cost to reach the goal)
    /// 2. The heuristic should be consistent, otherwise a node can be finalized before its cheapest path is known
    /// A zero heuristic makes A* behave like Dijkstra
    /// C is chosen by the caller: cost + heuristic must fit in C, a narrow type
    /// such as u8 overflows (and panics in debug builds) on long paths or large estimates
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<Vec<N>, SearchError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = N>,
        C: Zero + One + Ord + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        let (node_map, goal_index) = self.build_graph(start, neighbors, heuristic_fn, goal_fn);

        match goal_index {
            Some(goal_index) => {
                let path = reconstruct_path(&node_map, goal_index)?;
                log::debug!("a_star: path of {} nodes, {} nodes discovered", path.len(), node_map.len());
                Ok(path)
            }
            None => {
                log::debug!("a_star: no path, {} nodes discovered", node_map.len());
                Err(SearchError::NoPathFound)
            }
        }
    }


    /// Traverses the graph using A* algorithm
    /// Returns a map of nodes with their smallest known costs along with the index of the goal node
    fn build_graph<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = N>,
        C: Zero + One + Ord + Copy + Debug,
        H: Fn(&N) -> C,
        G: Fn(&N) -> bool
    {
        // Open List
        // Nodes that need to be evaluated, sorted by f_cost (cost + heuristic)
        let mut open_list: OpenList<C> = OpenList::new();

        // Every discovered node with (parent_index, best known cost)
        // for the start node, parent_index is NO_PARENT
        let mut node_map: GraphNodeMap<N, C> = GraphNodeMap::default();
        let start_h = heuristic_fn(&start);
        let start_index = node_map.insert_full(start, (NO_PARENT, C::zero())).0;
        open_list.push(start_index, start_h);

        // Closed List - nodes whose cost is final
        let mut closed_list: FxHashSet<usize> = FxHashSet::default();
        let mut peak_open = open_list.len();

        while let Some((index, _)) = open_list.pop() {

            if !closed_list.insert(index) {
                continue;
            }

            let Some((node, &(_, cost))) = node_map.get_index(index) else {
                continue;
            };

            if goal_fn(node) {
                log::trace!("a_star: open list peaked at {peak_open} entries");
                return (node_map, Some(index));
            }

            // new cost to reach a neighbor = node cost + one step
            let new_cost = cost + C::one();

            for neighbor in neighbors(node) {

                // heuristic is only evaluated for neighbors that get queued
                let (neighbor_index, h_cost) = match node_map.entry(neighbor) {
                    Vacant(e) => {
                        // This is the first time we're seeing this neighbor
                        let h_cost: C = heuristic_fn(e.key());
                        let i = e.index();
                        e.insert((index, new_cost));
                        (i, h_cost)
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            // We've found a better path to this neighbor
                            let h_cost: C = heuristic_fn(e.key());
                            e.insert((index, new_cost));
                            (e.index(), h_cost)
                        } else {
                            // The existing path is better, do nothing
                            continue;
                        }
                    }
                };

                open_list.push(neighbor_index, new_cost + h_cost);
            }
            peak_open = peak_open.max(open_list.len());
        }

        log::trace!("a_star: open list peaked at {peak_open} entries");
        (node_map, None)
    }
}
