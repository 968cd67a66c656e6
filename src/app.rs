//! Editing session on top of the search engine: the state a front-end keeps between clicks.
//! Front-ends translate input into cell coordinates and button actions, call into a
//! [Visualizer] and draw what it reports.
use crate::grid_model::{CellState, GridModel};
use crate::solver::{find_path, SearchResult, Strategy};
use core::fmt;
use grid_util::Point;
use log::{debug, info};

/// Status shown when a search is requested before both endpoints are placed.
pub const MISSING_ENDPOINTS: &str = "Set start and goal cells first!";
pub const PATH_FOUND: &str = "Path found!";
pub const NO_PATH: &str = "No path exists!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    SelectStart,
    SelectGoal,
    EditWalls,
    ShowResult,
}

impl Stage {
    pub fn prompt(self) -> &'static str {
        match self {
            Stage::SelectStart => "Select start cell",
            Stage::SelectGoal => "Select goal cell",
            Stage::EditWalls => "Add walls, then find path",
            Stage::ShowResult => "",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Visualizer {
    grid: GridModel,
    strategy: Strategy,
    stage: Stage,
    result: Option<SearchResult>,
    status: Option<&'static str>,
}

impl Visualizer {
    /// Wraps an existing grid. The stage is picked from the endpoints the grid already has.
    pub fn new(grid: GridModel) -> Visualizer {
        let stage = match (grid.start(), grid.goal()) {
            (Some(_), Some(_)) => Stage::EditWalls,
            (Some(_), None) => Stage::SelectGoal,
            _ => Stage::SelectStart,
        };
        Visualizer {
            grid,
            stage,
            ..Default::default()
        }
    }
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }
    /// The path of the last search, empty if there is none.
    pub fn path(&self) -> &[Point] {
        self.result
            .as_ref()
            .map(|r| r.path.as_slice())
            .unwrap_or_default()
    }

    /// Applies a click on a cell according to the current stage. Returns [true] if the grid or
    /// stage changed.
    pub fn handle_cell_click(&mut self, point: Point) -> bool {
        if !self.grid.in_bounds(point) {
            debug!("Click at {} is outside the grid", point);
            return false;
        }
        match self.stage {
            Stage::SelectStart => {
                self.grid.set_cell(point, CellState::Start);
                self.stage = Stage::SelectGoal;
            }
            Stage::SelectGoal => {
                if self.grid.start() == Some(point) {
                    return false;
                }
                self.grid.set_cell(point, CellState::Goal);
                self.stage = Stage::EditWalls;
            }
            Stage::EditWalls | Stage::ShowResult => {
                if self.grid.is_protected(point) {
                    return false;
                }
                self.grid.toggle_wall(point);
                if self.stage == Stage::ShowResult {
                    // The old path may now cross a wall.
                    self.result = None;
                    self.stage = Stage::EditWalls;
                }
            }
        }
        self.status = None;
        true
    }

    /// Runs the selected strategy between the current endpoints. If either is unset the engine
    /// is not called; the status line asks for them instead and [None] is returned.
    pub fn find_path(&mut self) -> Option<&SearchResult> {
        let (Some(start), Some(goal)) = (self.grid.start(), self.grid.goal()) else {
            info!("Search requested without start and goal");
            self.status = Some(MISSING_ENDPOINTS);
            return None;
        };
        let result = find_path(&self.grid, start, goal, self.strategy);
        self.status = None;
        self.stage = Stage::ShowResult;
        Some(&*self.result.insert(result))
    }

    pub fn cycle_strategy(&mut self) {
        self.strategy = self.strategy.next();
        debug!("Selected {}", self.strategy);
    }

    /// Empties the grid and starts over from start selection. The strategy is kept.
    pub fn reset(&mut self) {
        info!("Resetting grid");
        self.grid.clear();
        self.stage = Stage::SelectStart;
        self.result = None;
        self.status = None;
    }

    pub fn status_line(&self) -> &'static str {
        if let Some(status) = self.status {
            return status;
        }
        match (self.stage, &self.result) {
            (Stage::ShowResult, Some(result)) if result.found => PATH_FOUND,
            (Stage::ShowResult, _) => NO_PATH,
            (stage, _) => stage.prompt(),
        }
    }

    /// Elapsed time of the last search while its result is shown, otherwise empty.
    pub fn time_line(&self) -> String {
        match (self.stage, &self.result) {
            (Stage::ShowResult, Some(result)) => {
                format!("Execution time: {:.6} ms", result.elapsed_millis)
            }
            _ => String::new(),
        }
    }

    pub fn strategy_label(&self) -> String {
        format!("Algorithm: {}", self.strategy)
    }
}

impl fmt::Display for Visualizer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.grid.render_path(self.path()))
    }
}
