//! # grid_search
//!
//! Path search on a small editable grid. A [GridModel] holds empty cells, walls and the
//! designated start and goal; [find_path] connects start and goal with one of three
//! [Strategy] values:
//!
//! - **DFS** ([DfsSolver](solver::dfs::DfsSolver)): stack frontier, finds *a* path.
//! - **BFS** ([BfsSolver](solver::bfs::BfsSolver)): queue frontier, finds a path with the
//!   fewest steps.
//! - **Dijkstra** ([DijkstraSolver](solver::dijkstra::DijkstraSolver)): cost-ordered frontier
//!   with relaxation, same path length as BFS on this uniform-cost grid.
//!
//! Movement is restricted to the four cardinal directions, expanded in the order up, right,
//! down, left, which makes every search deterministic. All strategies share one traversal in
//! [search] and differ only in their [Frontier](frontier::Frontier).
//!
//! [Visualizer] keeps the editing session around the engine: start and goal selection, wall
//! toggling, strategy selection and the status lines a front-end displays.
pub mod app;
pub mod frontier;
pub mod grid_model;
pub mod search;
pub mod solver;

pub use app::{Stage, Visualizer};
pub use grid_model::{CellState, GridModel, GridParseError};
pub use solver::{find_path, is_valid_path, GridSolver, SearchResult, Strategy};

/// Number of rows of the default grid.
pub const ROWS: usize = 16;
/// Number of columns of the default grid.
pub const COLS: usize = 16;
/// Cost of a single cardinal step.
pub const STEP_COST: i32 = 1;
/// Inline capacity of neighbour lists, one slot per cardinal direction.
pub const N_SMALLVEC_SIZE: usize = 4;
