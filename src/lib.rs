//! Graph search over caller defined state spaces.
//!
//! Every search takes a start node, a `neighbors` function and a goal
//! predicate; the informed searches also take a heuristic. Nodes are any
//! `Eq + Hash + Clone` value, identified by their content: a node rebuilt by
//! `neighbors` is the same vertex as an equal one seen earlier. Every edge
//! costs one step.
//!
//! | Search | Frontier | Shortest path |
//! |---|---|---|
//! | [`bfs`] | FIFO queue | yes |
//! | [`dfs`] | LIFO stack | no |
//! | [`iddfs`] | depth limited stack | no, but bounded by `max_depth` |
//! | [`dijkstra`] | open list by cost | yes |
//! | [`greedy_best_first`] | open list by heuristic | no |
//! | [`AStar::plan`] | open list by cost + heuristic | with an admissible heuristic |
//!
//! A found path runs from the start to the goal inclusive. When the goal
//! cannot be reached, every search returns [`SearchError::NoPathFound`].

pub mod errors;
pub mod config;
pub mod heuristic;
pub mod graph_algos;
mod collections;

pub use collections::{FxHashSet, FxIndexMap};
pub use config::{Algorithm, SearchConfig, DEFAULT_MAX_DEPTH};
pub use errors::SearchError;
pub use graph_algos::{
    a_star::AStar,
    bfs::bfs,
    dfs::dfs,
    dijkstra::{dijkstra, dijkstra_distances},
    greedy::greedy_best_first,
    iddfs::iddfs,
    path_cost,
    GraphNodeMap,
};
