//! Graph fixtures shared by the algorithm tests.

use std::collections::HashMap;

/// Grid cell used as a node in the grid fixtures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Cell {
    pub x: i32,
    pub y: i32,
}

pub(crate) const fn cell(x: i32, y: i32) -> Cell {
    Cell { x, y }
}

/// n x n grid with blocked cells, 4-connected
/// Neighbor order: up, down, left, right
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    pub n: i32,
    pub blocked: Vec<Cell>,
}

impl Grid {

    pub fn open(n: i32) -> Self {
        Self { n, blocked: Vec::new() }
    }

    pub fn with_blocked(n: i32, blocked: Vec<Cell>) -> Self {
        Self { n, blocked }
    }

    pub fn is_open(&self, c: Cell) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.n && c.y < self.n && !self.blocked.contains(&c)
    }

    pub fn neighbors(&self, c: &Cell) -> Vec<Cell> {
        [
            cell(c.x, c.y - 1),
            cell(c.x, c.y + 1),
            cell(c.x - 1, c.y),
            cell(c.x + 1, c.y),
        ]
        .into_iter()
        .filter(|&n| self.is_open(n))
        .collect()
    }

    pub fn corner(&self) -> Cell {
        cell(self.n - 1, self.n - 1)
    }
}

/// Manhattan distance between two cells
pub(crate) fn manhattan(a: &Cell, b: &Cell) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Build an adjacency map from (from, to) pairs, keeping insertion order of the edges
pub(crate) fn string_graph(edges: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
    let mut graph: HashMap<String, Vec<String>> = HashMap::new();
    for (from, to) in edges {
        graph.entry(from.to_string()).or_default().push(to.to_string());
        graph.entry(to.to_string()).or_default();
    }
    graph
}

/// Same as string_graph but every edge is added in both directions
pub(crate) fn undirected_graph(edges: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
    let mut graph: HashMap<String, Vec<String>> = HashMap::new();
    for (a, b) in edges {
        graph.entry(a.to_string()).or_default().push(b.to_string());
        graph.entry(b.to_string()).or_default().push(a.to_string());
    }
    graph
}

// Helper function to create a neighbor function from a graph
pub(crate) fn create_neighbor_fn(graph: &HashMap<String, Vec<String>>) -> impl Fn(&String) -> Vec<String> + '_ {
    move |node: &String| {
        graph.get(node).cloned().unwrap_or_default()
    }
}

pub(crate) fn strings(nodes: &[&str]) -> Vec<String> {
    nodes.iter().map(|s| s.to_string()).collect()
}

/// Assert that a path starts at start, ends at a goal and follows edges
pub(crate) fn assert_valid_path<N, NN, G>(path: &[N], start: &N, neighbors: NN, goal: G)
where
    N: PartialEq + std::fmt::Debug,
    NN: Fn(&N) -> Vec<N>,
    G: Fn(&N) -> bool,
{
    assert!(!path.is_empty(), "path must never be empty");
    assert_eq!(&path[0], start, "path must begin at the start node");
    assert!(goal(&path[path.len() - 1]), "path must end at a goal node");
    for pair in path.windows(2) {
        assert!(
            neighbors(&pair[0]).contains(&pair[1]),
            "{:?} -> {:?} is not an edge",
            pair[0],
            pair[1]
        );
    }
}
