use crate::frontier::FifoFrontier;
use crate::solver::GridSolver;

/// Breadth-first search. Cells are expanded in order of distance from the start, so with unit
/// step costs the first path to reach the goal has the fewest steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier<i32>;

    fn frontier(&self) -> Self::Frontier {
        FifoFrontier::default()
    }
}
