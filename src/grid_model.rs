use crate::{COLS, N_SMALLVEC_SIZE, ROWS, STEP_COST};
use core::fmt;
use grid_util::{Grid, Point, SimpleGrid};
use log::debug;
use smallvec::SmallVec;
use std::str::FromStr;
use thiserror::Error;

/// Unit offsets in expansion order: up, right, down, left. Rows grow downwards, so up is -y.
/// Every solver iterates neighbours in this order, which decides between equally long paths.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    Start,
    Goal,
}

impl CellState {
    pub fn is_traversable(self) -> bool {
        self != CellState::Wall
    }
    /// Character used by the text form of a grid.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::Goal => 'G',
        }
    }
    pub fn from_symbol(symbol: char) -> Option<CellState> {
        match symbol {
            '.' => Some(CellState::Empty),
            '#' => Some(CellState::Wall),
            'S' => Some(CellState::Start),
            'G' => Some(CellState::Goal),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridParseError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell symbol {symbol:?} at ({x}, {y})")]
    UnknownCell { symbol: char, x: usize, y: usize },
    #[error("more than one start cell")]
    DuplicateStart,
    #[error("more than one goal cell")]
    DuplicateGoal,
}

/// [GridModel] holds the [CellState] of every cell of a fixed-size grid together with the
/// designated start and goal.
#[derive(Clone, Debug)]
pub struct GridModel {
    cells: SimpleGrid<CellState>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Default for GridModel {
    fn default() -> GridModel {
        GridModel::new(COLS, ROWS)
    }
}

impl GridModel {
    /// Creates an empty grid with `width` columns and `height` rows.
    pub fn new(width: usize, height: usize) -> GridModel {
        GridModel {
            cells: SimpleGrid::new(width, height, CellState::Empty),
            start: None,
            goal: None,
        }
    }
    pub fn width(&self) -> usize {
        self.cells.width()
    }
    pub fn height(&self) -> usize {
        self.cells.height()
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        self.cells.point_in_bounds(point)
    }
    pub fn cell(&self, point: Point) -> Option<CellState> {
        self.in_bounds(point).then(|| self.cells.get_point(point))
    }
    pub fn is_traversable(&self, point: Point) -> bool {
        self.cell(point).is_some_and(CellState::is_traversable)
    }
    /// Whether `point` is the current start or goal, which wall edits must leave alone.
    pub fn is_protected(&self, point: Point) -> bool {
        self.start == Some(point) || self.goal == Some(point)
    }

    /// The traversable in-bounds neighbours of `point` in [DIRECTIONS] order, each with its
    /// step cost.
    pub fn cardinal_neighbours(
        &self,
        point: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| *point + Point::new(dx, dy))
            .filter(|&p| self.is_traversable(p))
            .map(|p| (p, STEP_COST))
            .collect()
    }

    /// Overwrites a cell. Out-of-bounds points are ignored. Placing a start (goal) moves it: the
    /// previous start (goal) cell becomes empty. Overwriting the start or goal cell with anything
    /// else unsets it.
    pub fn set_cell(&mut self, point: Point, state: CellState) {
        let Some(previous) = self.cell(point) else {
            debug!("Ignoring edit of {} outside the grid", point);
            return;
        };
        if previous == state {
            return;
        }
        match previous {
            CellState::Start => self.start = None,
            CellState::Goal => self.goal = None,
            _ => {}
        }
        let displaced = match state {
            CellState::Start => self.start.replace(point),
            CellState::Goal => self.goal.replace(point),
            _ => None,
        };
        if let Some(old) = displaced {
            self.cells.set_point(old, CellState::Empty);
        }
        self.cells.set_point(point, state);
    }

    /// Flips an empty cell to a wall and back. Start, goal and out-of-bounds points are left
    /// untouched.
    pub fn toggle_wall(&mut self, point: Point) {
        if self.is_protected(point) {
            debug!("{} is an endpoint, not toggling wall", point);
            return;
        }
        match self.cell(point) {
            Some(CellState::Empty) => self.set_cell(point, CellState::Wall),
            Some(CellState::Wall) => self.set_cell(point, CellState::Empty),
            Some(_) => {}
            None => debug!("Ignoring wall toggle at {} outside the grid", point),
        }
    }

    /// Clears every cell and unsets start and goal.
    pub fn clear(&mut self) {
        self.cells = SimpleGrid::new(self.width(), self.height(), CellState::Empty);
        self.start = None;
        self.goal = None;
    }

    /// Text form of the grid with `path` drawn as `*` over the empty cells it crosses.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut symbols = self
            .cells
            .values
            .iter()
            .map(|c| c.symbol())
            .collect::<Vec<char>>();
        for &p in path {
            if self.cell(p) == Some(CellState::Empty) {
                symbols[self.cells.get_ix_point(&p)] = '*';
            }
        }
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for row in symbols.chunks(self.width().max(1)) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}

impl FromStr for GridModel {
    type Err = GridParseError;

    /// Parses the text form produced by [Display](fmt::Display): one row per line, blank lines
    /// and surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>();
        let width = rows.first().ok_or(GridParseError::Empty)?.chars().count();
        let mut grid = GridModel::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let state = CellState::from_symbol(symbol)
                    .ok_or(GridParseError::UnknownCell { symbol, x, y })?;
                match state {
                    CellState::Start if grid.start.is_some() => {
                        return Err(GridParseError::DuplicateStart)
                    }
                    CellState::Goal if grid.goal.is_some() => {
                        return Err(GridParseError::DuplicateGoal)
                    }
                    _ => {}
                }
                grid.set_cell(Point::new(x as i32, y as i32), state);
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> GridModel {
        s.parse().unwrap()
    }

    #[test]
    fn default_grid_is_empty() {
        let grid = GridModel::default();
        assert_eq!((grid.width(), grid.height()), (COLS, ROWS));
        assert_eq!(grid.start(), None);
        assert_eq!(grid.goal(), None);
        assert!(grid.cells.values.iter().all(|c| *c == CellState::Empty));
    }

    #[test]
    fn bounds() {
        let grid = GridModel::new(3, 2);
        assert!(grid.in_bounds(Point::new(0, 0)));
        assert!(grid.in_bounds(Point::new(2, 1)));
        assert!(!grid.in_bounds(Point::new(3, 0)));
        assert!(!grid.in_bounds(Point::new(0, 2)));
        assert!(!grid.in_bounds(Point::new(-1, 0)));
        assert!(!grid.in_bounds(Point::new(0, -1)));
        assert_eq!(grid.cell(Point::new(5, 5)), None);
    }

    #[test]
    fn out_of_bounds_edits_are_ignored() {
        let mut grid = GridModel::new(3, 3);
        let before = grid.to_string();
        grid.set_cell(Point::new(3, 1), CellState::Wall);
        grid.set_cell(Point::new(-1, -1), CellState::Start);
        grid.toggle_wall(Point::new(1, 7));
        assert_eq!(grid.to_string(), before);
        assert_eq!(grid.start(), None);
    }

    #[test]
    fn toggle_wall_flips_empty_cells() {
        let mut grid = GridModel::new(3, 3);
        let p = Point::new(1, 1);
        grid.toggle_wall(p);
        assert_eq!(grid.cell(p), Some(CellState::Wall));
        assert!(!grid.is_traversable(p));
        grid.toggle_wall(p);
        assert_eq!(grid.cell(p), Some(CellState::Empty));
    }

    #[test]
    fn toggle_wall_leaves_endpoints_alone() {
        let mut grid = parse("S..\n...\n..G");
        let before = grid.to_string();
        grid.toggle_wall(Point::new(0, 0));
        grid.toggle_wall(Point::new(2, 2));
        assert_eq!(grid.to_string(), before);
        assert_eq!(grid.start(), Some(Point::new(0, 0)));
        assert_eq!(grid.goal(), Some(Point::new(2, 2)));
    }

    #[test]
    fn placing_start_moves_it() {
        let mut grid = GridModel::new(3, 1);
        grid.set_cell(Point::new(0, 0), CellState::Start);
        grid.set_cell(Point::new(2, 0), CellState::Start);
        assert_eq!(grid.start(), Some(Point::new(2, 0)));
        assert_eq!(grid.to_string(), "..S\n");
    }

    #[test]
    fn overwriting_goal_unsets_it() {
        let mut grid = GridModel::new(3, 1);
        grid.set_cell(Point::new(1, 0), CellState::Goal);
        grid.set_cell(Point::new(1, 0), CellState::Wall);
        assert_eq!(grid.goal(), None);
        assert_eq!(grid.to_string(), ".#.\n");
    }

    #[test]
    fn clear_resets_everything() {
        let mut grid = parse("S#.\n.#.\n..G");
        grid.clear();
        assert_eq!(grid.start(), None);
        assert_eq!(grid.goal(), None);
        assert_eq!(grid.to_string(), "...\n...\n...\n");
    }

    #[test]
    fn neighbours_follow_direction_order() {
        let grid = GridModel::new(3, 3);
        let centre = grid
            .cardinal_neighbours(&Point::new(1, 1))
            .into_iter()
            .map(|(p, _)| p)
            .collect::<Vec<_>>();
        assert_eq!(
            centre,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
        let corner = grid.cardinal_neighbours(&Point::new(0, 0));
        assert_eq!(corner.len(), 2);
    }

    #[test]
    fn neighbours_skip_walls() {
        let grid = parse(".#.\n...\n...");
        let n = grid.cardinal_neighbours(&Point::new(1, 1));
        assert!(n.iter().all(|(p, c)| *p != Point::new(1, 0) && *c == STEP_COST));
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn parse_round_trips_display() {
        let text = "S.#.\n.##.\n...G\n";
        assert_eq!(parse(text).to_string(), text);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<GridModel>().unwrap_err(), GridParseError::Empty);
        assert_eq!(
            "...\n..".parse::<GridModel>().unwrap_err(),
            GridParseError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            "..x".parse::<GridModel>().unwrap_err(),
            GridParseError::UnknownCell {
                symbol: 'x',
                x: 2,
                y: 0
            }
        );
        assert_eq!(
            "S.S".parse::<GridModel>().unwrap_err(),
            GridParseError::DuplicateStart
        );
        assert_eq!(
            "G.G".parse::<GridModel>().unwrap_err(),
            GridParseError::DuplicateGoal
        );
    }

    #[test]
    fn render_path_marks_empty_cells_only() {
        let grid = parse("S..\n.#.\n..G");
        let path = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(2, 1),
            Point::new(2, 2),
        ];
        assert_eq!(grid.render_path(&path), "S**\n.#*\n..G\n");
    }

    /// Diagonal contact does not make cells neighbours on a 4-grid.
    #[test]
    fn diagonal_cells_are_not_neighbours() {
        //  ___
        // | #|
        // |# |
        //  __
        let grid = parse(".#\n#.");
        assert!(grid.cardinal_neighbours(&Point::new(0, 0)).is_empty());
        assert!(grid.cardinal_neighbours(&Point::new(1, 1)).is_empty());
    }

    #[test]
    fn moving_start_empties_old_cell() {
        let mut grid = parse("S#\n.G");
        grid.set_cell(Point::new(0, 1), CellState::Start);
        assert_eq!(grid.cell(Point::new(0, 0)), Some(CellState::Empty));
        assert_eq!(grid.to_string(), ".#\nSG\n");
    }
}
