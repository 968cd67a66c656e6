use crate::frontier::LifoFrontier;
use crate::solver::GridSolver;

/// Depth-first search. The stack makes the most recently discovered cell the next one to expand,
/// so the returned path is valid but usually not the shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = LifoFrontier<i32>;

    fn frontier(&self) -> Self::Frontier {
        LifoFrontier::default()
    }
}
