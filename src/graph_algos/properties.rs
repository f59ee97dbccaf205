//! Cross-algorithm checks over seeded random grids.

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{a_star::AStar, bfs::bfs, dfs::dfs, dijkstra::dijkstra, greedy::greedy_best_first, iddfs::iddfs};
use super::test_graphs::*;
use crate::errors::SearchError;
use crate::heuristic::zero;

const SEEDS: u64 = 40;

/// Grid with roughly a quarter of the cells blocked; start and goal stay open
fn random_grid(rng: &mut StdRng, n: i32) -> Grid {
    let mut blocked = Vec::new();
    for x in 0..n {
        for y in 0..n {
            let c = cell(x, y);
            if c != cell(0, 0) && c != cell(n - 1, n - 1) && rng.random_bool(0.25) {
                blocked.push(c);
            }
        }
    }
    Grid::with_blocked(n, blocked)
}

fn grids() -> impl Iterator<Item = Grid> {
    (0..SEEDS).map(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.random_range(2..9);
        random_grid(&mut rng, n)
    })
}

#[test]
fn test_optimal_searches_agree_on_length() {
    for grid in grids() {
        let goal = grid.corner();
        let neighbors = |c: &Cell| grid.neighbors(c);
        let is_goal = |c: &Cell| *c == goal;

        let by_bfs = bfs(cell(0, 0), neighbors, is_goal);
        let by_dijkstra = dijkstra(cell(0, 0), neighbors, is_goal);
        let by_blind_a_star = AStar{}.plan(cell(0, 0), neighbors, zero::<Cell, u32>, is_goal);
        let by_a_star = AStar{}.plan(cell(0, 0), neighbors, |c| manhattan(c, &goal), is_goal);

        match by_bfs {
            Ok(path) => {
                assert_valid_path(&path, &cell(0, 0), neighbors, is_goal);
                assert_eq!(by_dijkstra.map(|p| p.len()), Ok(path.len()));
                assert_eq!(by_blind_a_star.map(|p| p.len()), Ok(path.len()));
                assert_eq!(by_a_star.map(|p| p.len()), Ok(path.len()));
            }
            Err(err) => {
                assert_eq!(err, SearchError::NoPathFound);
                assert_eq!(by_dijkstra, Err(SearchError::NoPathFound));
                assert_eq!(by_blind_a_star, Err(SearchError::NoPathFound));
                assert_eq!(by_a_star, Err(SearchError::NoPathFound));
            }
        }
    }
}

#[test]
fn test_all_searches_agree_on_reachability() {
    for grid in grids() {
        let goal = grid.corner();
        let neighbors = |c: &Cell| grid.neighbors(c);
        let is_goal = |c: &Cell| *c == goal;
        // Deep enough that the bound never cuts a DFS branch short
        let unbounded = (grid.n * grid.n) as usize;

        let reachable = bfs(cell(0, 0), neighbors, is_goal).is_ok();

        for result in [
            dfs(cell(0, 0), neighbors, is_goal),
            iddfs(cell(0, 0), neighbors, is_goal, unbounded),
            greedy_best_first(cell(0, 0), neighbors, |c| manhattan(c, &goal), is_goal),
        ] {
            match result {
                Ok(path) => {
                    assert!(reachable);
                    assert_valid_path(&path, &cell(0, 0), neighbors, is_goal);
                }
                Err(err) => {
                    assert!(!reachable);
                    assert_eq!(err, SearchError::NoPathFound);
                }
            }
        }
    }
}

#[test]
fn test_iddfs_depth_bound() {
    for grid in grids() {
        let goal = grid.corner();
        let neighbors = |c: &Cell| grid.neighbors(c);
        let is_goal = |c: &Cell| *c == goal;

        let Ok(shortest) = bfs(cell(0, 0), neighbors, is_goal) else {
            continue;
        };
        let depth = shortest.len() - 1;

        assert_eq!(iddfs(cell(0, 0), neighbors, is_goal, depth - 1), Err(SearchError::NoPathFound));

        // Any path found within a bound has at most that many edges
        let bound = depth + 4;
        if let Ok(path) = iddfs(cell(0, 0), neighbors, is_goal, bound) {
            assert!(path.len() - 1 <= bound);
            assert!(path.len() >= shortest.len());
            assert_valid_path(&path, &cell(0, 0), neighbors, is_goal);
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    for grid in grids().take(10) {
        let goal = grid.corner();
        let neighbors = |c: &Cell| grid.neighbors(c);
        let is_goal = |c: &Cell| *c == goal;
        let heuristic = |c: &Cell| manhattan(c, &goal);

        assert_eq!(bfs(cell(0, 0), neighbors, is_goal), bfs(cell(0, 0), neighbors, is_goal));
        assert_eq!(dfs(cell(0, 0), neighbors, is_goal), dfs(cell(0, 0), neighbors, is_goal));
        assert_eq!(iddfs(cell(0, 0), neighbors, is_goal, 30), iddfs(cell(0, 0), neighbors, is_goal, 30));
        assert_eq!(dijkstra(cell(0, 0), neighbors, is_goal), dijkstra(cell(0, 0), neighbors, is_goal));
        assert_eq!(
            greedy_best_first(cell(0, 0), neighbors, heuristic, is_goal),
            greedy_best_first(cell(0, 0), neighbors, heuristic, is_goal)
        );
        assert_eq!(
            AStar{}.plan(cell(0, 0), neighbors, heuristic, is_goal),
            AStar{}.plan(cell(0, 0), neighbors, heuristic, is_goal)
        );
    }
}

#[test]
fn test_open_grids_have_manhattan_length_paths() {
    for n in 1..12 {
        let grid = Grid::open(n);
        let goal = grid.corner();
        let neighbors = |c: &Cell| grid.neighbors(c);
        let is_goal = |c: &Cell| *c == goal;
        let expected = (2 * (n - 1) + 1) as usize;

        assert_eq!(bfs(cell(0, 0), neighbors, is_goal).map(|p| p.len()), Ok(expected));
        assert_eq!(dijkstra(cell(0, 0), neighbors, is_goal).map(|p| p.len()), Ok(expected));
        assert_eq!(AStar{}.plan(cell(0, 0), neighbors, |c| manhattan(c, &goal), is_goal).map(|p| p.len()), Ok(expected));
    }
}
