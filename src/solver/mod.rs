use crate::frontier::Frontier;
use crate::grid_model::GridModel;
use crate::search::traverse;
use crate::{N_SMALLVEC_SIZE, STEP_COST};
use core::fmt;
use grid_util::Point;
use itertools::Itertools;
use log::{info, warn};
use smallvec::SmallVec;
use std::time::Instant;

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// A search strategy on a [GridModel]. Implementors only choose the [Frontier]; expansion order,
/// parent bookkeeping and path reconstruction are shared.
pub trait GridSolver {
    type Frontier: Frontier<i32>;

    fn frontier(&self) -> Self::Frontier;

    fn successors(
        &self,
        grid: &GridModel,
        node: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        grid.cardinal_neighbours(node)
    }

    /// Uses [STEP_COST] for every cardinal move.
    fn cost(&self, p1: &Point, p2: &Point) -> i32 {
        p1.manhattan_distance(p2) * STEP_COST
    }

    fn get_path_cost(&self, path: &[Point]) -> i32 {
        path.iter()
            .tuple_windows()
            .map(|(p1, p2)| self.cost(p1, p2))
            .sum()
    }

    /// Computes a path from start to goal inclusive, or [None] once every cell reachable from
    /// start has been expanded without meeting the goal.
    fn get_path_single_goal(
        &self,
        grid: &GridModel,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        traverse(
            &start,
            self.frontier(),
            |node| self.successors(grid, node),
            |node| *node == goal,
        )
        .map(|(v, _c)| v)
    }
}

/// Selects one of the three solvers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    #[default]
    Dfs,
    Bfs,
    Dijkstra,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Dfs, Strategy::Bfs, Strategy::Dijkstra];

    /// The strategy after this one, wrapping around.
    pub fn next(self) -> Strategy {
        match self {
            Strategy::Dfs => Strategy::Bfs,
            Strategy::Bfs => Strategy::Dijkstra,
            Strategy::Dijkstra => Strategy::Dfs,
        }
    }

    pub fn get_path_single_goal(
        self,
        grid: &GridModel,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        match self {
            Strategy::Dfs => DfsSolver.get_path_single_goal(grid, start, goal),
            Strategy::Bfs => BfsSolver.get_path_single_goal(grid, start, goal),
            Strategy::Dijkstra => DijkstraSolver.get_path_single_goal(grid, start, goal),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Strategy::Dfs => "DFS",
            Strategy::Bfs => "BFS",
            Strategy::Dijkstra => "Dijkstra",
        })
    }
}

/// Outcome of [find_path]. `path` is empty when `found` is false.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    pub found: bool,
    pub path: Vec<Point>,
    pub elapsed_millis: f32,
}

/// Runs `strategy` from `start` to `goal` and times it.
///
/// The caller is responsible for passing distinct in-bounds endpoints. Not finding a path is a
/// regular outcome, reported through [SearchResult::found].
pub fn find_path(grid: &GridModel, start: Point, goal: Point, strategy: Strategy) -> SearchResult {
    info!("Searching from {} to {} using {}", start, goal, strategy);
    let timer = Instant::now();
    let path = strategy.get_path_single_goal(grid, start, goal);
    let elapsed_millis = timer.elapsed().as_secs_f32() * 1000.0;
    match path {
        Some(path) => {
            if !is_valid_path(grid, &path, start, goal) {
                warn!("{} returned an invalid path: {:?}", strategy, path);
            }
            info!(
                "{} found a path of {} cells in {} ms",
                strategy,
                path.len(),
                elapsed_millis
            );
            SearchResult {
                found: true,
                path,
                elapsed_millis,
            }
        }
        None => {
            info!("{} is not reachable from {}", goal, start);
            SearchResult {
                found: false,
                path: Vec::new(),
                elapsed_millis,
            }
        }
    }
}

/// Checks that `path` runs from `start` to `goal` over traversable cells in unit cardinal steps.
pub fn is_valid_path(grid: &GridModel, path: &[Point], start: Point, goal: Point) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&goal)
        && path.iter().all(|&p| grid.is_traversable(p))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.manhattan_distance(b) == 1)
}
