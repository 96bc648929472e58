//! Generator tests - structural guarantees across seeds and sizes

mod common;

use common::{open_edges, reachable, shortest_path};
use tui_maze::core::{generate, CarveOrder, MazeError, MazeGenerator, MazeSize, SimpleRng};
use tui_maze::types::{Cell, DEFAULT_MAZE_SIZE, MIN_MAZE_SIZE};

const ORDERS: [CarveOrder; 2] = [CarveOrder::Fixed, CarveOrder::Shuffled];

fn sizes() -> impl Iterator<Item = usize> {
    MIN_MAZE_SIZE..=31
}

#[test]
fn test_open_cells_form_one_tree() {
    for order in ORDERS {
        for size in sizes() {
            for seed in 0..12u32 {
                let gen = MazeGenerator::new(MazeSize::new(size).unwrap()).with_carve_order(order);
                let maze = gen.generate(&mut SimpleRng::new(seed * 31 + size as u32));
                let open = maze.grid.open_count();

                // Connected: everything open is reachable from the start.
                assert_eq!(
                    reachable(&maze.grid, maze.start).len(),
                    open,
                    "disconnected: size={} seed={} order={:?}",
                    size,
                    seed,
                    order
                );
                // Acyclic: a connected graph with V-1 edges is a tree.
                assert_eq!(
                    open_edges(&maze.grid),
                    open - 1,
                    "cycle: size={} seed={} order={:?}",
                    size,
                    seed,
                    order
                );
            }
        }
    }
}

#[test]
fn test_exit_is_reachable_and_distinct() {
    for order in ORDERS {
        for seed in 0..200u32 {
            let gen = MazeGenerator::new(MazeSize::default()).with_carve_order(order);
            let maze = gen.generate(&mut SimpleRng::new(seed));
            assert_ne!(maze.exit, maze.start, "seed={}", seed);
            assert_eq!(maze.grid.get(maze.exit), Some(Cell::Exit));
            let path = shortest_path(&maze.grid, maze.start, maze.exit);
            assert!(path.is_some_and(|p| !p.is_empty()), "seed={}", seed);
        }
    }
}

#[test]
fn test_exactly_one_exit() {
    for size in sizes() {
        let maze = generate(size, &mut SimpleRng::new(size as u32)).unwrap();
        let exits = maze.grid.cells().iter().filter(|&&c| c == Cell::Exit).count();
        assert_eq!(exits, 1, "size={}", size);
        assert_eq!(maze.grid.find_exit(), Some(maze.exit));
    }
}

#[test]
fn test_generation_is_deterministic() {
    for order in ORDERS {
        let gen = MazeGenerator::new(MazeSize::default()).with_carve_order(order);
        let mut a = SimpleRng::new(2024);
        let mut b = SimpleRng::new(2024);
        for _ in 0..10 {
            assert_eq!(gen.generate(&mut a), gen.generate(&mut b));
        }
    }
}

#[test]
fn test_start_positions_cover_the_grid() {
    let gen = MazeGenerator::new(MazeSize::default());
    let mut rng = SimpleRng::new(8);
    let mut rows = [false; DEFAULT_MAZE_SIZE];
    let mut cols = [false; DEFAULT_MAZE_SIZE];
    for _ in 0..500 {
        let maze = gen.generate(&mut rng);
        rows[maze.start.row] = true;
        cols[maze.start.col] = true;
    }
    assert!(rows.iter().all(|&r| r));
    assert!(cols.iter().all(|&c| c));
}

#[test]
fn test_large_maze_does_not_overflow_the_stack() {
    let gen = MazeGenerator::new(MazeSize::new(401).unwrap());
    let maze = gen.generate(&mut SimpleRng::new(1));
    assert_eq!(reachable(&maze.grid, maze.start).len(), maze.grid.open_count());
}

#[test]
fn test_pathological_sizes_are_rejected() {
    for size in 0..MIN_MAZE_SIZE {
        assert_eq!(
            generate(size, &mut SimpleRng::new(1)).unwrap_err(),
            MazeError::SizeTooSmall {
                size,
                min: MIN_MAZE_SIZE
            }
        );
    }
}
