//! Algorithm selection.
//!
//! [`SearchConfig`] names one of the six searches and carries the depth bound
//! used by iterative deepening, so callers (a UI dropdown, a config file) can
//! pick an algorithm at runtime and run it through a single entry point.

use std::{fmt, hash::Hash, fmt::Debug, str::FromStr};
use num_traits::{One, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::SearchError;
use crate::graph_algos::{a_star::AStar, bfs::bfs, dfs::dfs, dijkstra::dijkstra, greedy::greedy_best_first, iddfs::iddfs};

/// Depth bound for iterative deepening when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 256;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Iddfs,
    Dijkstra,
    Greedy,
    AStar,
}

impl Algorithm {

    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Iddfs,
        Algorithm::Dijkstra,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Iddfs => "iddfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Greedy => "greedy",
            Algorithm::AStar => "a_star",
        }
    }

    /// Uses the heuristic function
    pub fn is_informed(self) -> bool {
        matches!(self, Algorithm::Greedy | Algorithm::AStar)
    }

    /// Returns a path with the fewest edges
    /// A* only when the heuristic is admissible and consistent
    pub fn is_optimal(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::Dijkstra | Algorithm::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "bfs" | "breadth_first" => Ok(Algorithm::Bfs),
            "dfs" | "depth_first" => Ok(Algorithm::Dfs),
            "iddfs" | "iterative_deepening" => Ok(Algorithm::Iddfs),
            "dijkstra" | "ucs" | "uniform_cost" => Ok(Algorithm::Dijkstra),
            "greedy" | "best_first" => Ok(Algorithm::Greedy),
            "a_star" | "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}


/// Which search to run and how
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Only read by iterative deepening
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SearchConfig {

    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm, ..Self::default() }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Run the configured algorithm from start until a node meets goal criteria
    /// The heuristic is only consulted by greedy best-first and A*
    pub fn search<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal: G) -> Result<Vec<N>, SearchError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = N>,
        H: Fn(&N) -> C,
        C: Zero + One + Ord + Copy + Debug,
        G: Fn(&N) -> bool,
        {

        log::debug!("running {} from {:?}", self.algorithm, start);

        match self.algorithm {
            Algorithm::Bfs => bfs(start, neighbors, goal),
            Algorithm::Dfs => dfs(start, neighbors, goal),
            Algorithm::Iddfs => iddfs(start, neighbors, goal, self.max_depth),
            Algorithm::Dijkstra => dijkstra(start, neighbors, goal),
            Algorithm::Greedy => greedy_best_first(start, neighbors, heuristic_fn, goal),
            Algorithm::AStar => AStar{}.plan(start, neighbors, heuristic_fn, goal),
        }
    }
}
