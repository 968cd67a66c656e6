use crate::frontier::CostOrderedFrontier;
use crate::solver::GridSolver;

/// Dijkstra's uniform-cost search. Nodes are expanded cheapest first and re-opened whenever a
/// strictly cheaper route to them is found. On this grid every step costs the same, so the path
/// has the same length as the one found by [BfsSolver](crate::solver::bfs::BfsSolver).
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Frontier = CostOrderedFrontier<i32>;

    fn frontier(&self) -> Self::Frontier {
        CostOrderedFrontier::default()
    }
}
