//! Helpers shared by integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use tui_maze::core::Grid;
use tui_maze::types::{Direction, Position};

/// Breadth-first search over open cells. Returns the steps from `from` to `to`.
pub fn shortest_path(grid: &Grid, from: Position, to: Position) -> Option<Vec<Direction>> {
    let mut prev: HashMap<Position, (Position, Direction)> = HashMap::new();
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);

    while let Some(pos) = queue.pop_front() {
        if pos == to {
            let mut steps = Vec::new();
            let mut cur = to;
            while cur != from {
                let (p, dir) = prev[&cur];
                steps.push(dir);
                cur = p;
            }
            steps.reverse();
            return Some(steps);
        }
        for dir in grid.open_directions(pos) {
            let (dr, dc) = dir.delta();
            let Some(next) = pos.offset(dr, dc, grid.size()) else {
                continue;
            };
            if seen.insert(next) {
                prev.insert(next, (pos, dir));
                queue.push_back(next);
            }
        }
    }
    None
}

/// Every open cell reachable from `from`.
pub fn reachable(grid: &Grid, from: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(pos) = queue.pop_front() {
        for next in grid.open_neighbors(pos) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Number of orthogonally adjacent open pairs.
pub fn open_edges(grid: &Grid) -> usize {
    grid.iter()
        .filter(|(_, c)| c.is_open())
        .map(|(pos, _)| {
            [(0, 1), (1, 0)]
                .iter()
                .filter(|&&(dr, dc)| {
                    pos.offset(dr, dc, grid.size())
                        .is_some_and(|n| grid.is_open(n))
                })
                .count()
        })
        .sum()
}
