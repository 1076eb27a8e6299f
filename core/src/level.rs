use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Static layout of one puzzle: cells, particle starts and goals.
///
/// Levels deserialized from external data bypass the constructors; run
/// [`Level::validate`] (or load them through [`LevelSet::new`]) before play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    name: String,
    grid: Array2<Cell>,
    red_start: Coord2,
    blue_start: Coord2,
    red_goal: Coord2,
    blue_goal: Coord2,
}

impl Level {
    fn new_unchecked(
        name: String,
        grid: Array2<Cell>,
        red_goal: Coord2,
        blue_goal: Coord2,
    ) -> Self {
        Self {
            name,
            grid,
            red_start: DEFAULT_RED_START,
            blue_start: DEFAULT_BLUE_START,
            red_goal,
            blue_goal,
        }
    }

    /// Builds a level from row-major cell codes (`rows[y][x]`), as levels are authored.
    pub fn from_rows<R: AsRef<[u8]>>(
        name: impl Into<String>,
        rows: &[R],
        red_goal: Coord2,
        blue_goal: Coord2,
    ) -> Result<Self> {
        let size = usize::from(GRID_SIZE);
        if rows.len() != size || rows.iter().any(|row| row.as_ref().len() != size) {
            return Err(PuzzleError::InvalidBoardShape);
        }

        let mut grid = Array2::default([size, size]);
        for (y, row) in rows.iter().enumerate() {
            for (x, &code) in row.as_ref().iter().enumerate() {
                grid[[x, y]] = Cell::from_code(code)?;
            }
        }

        Self::from_grid(name, grid, red_goal, blue_goal)
    }

    /// Builds a level from a grid already indexed by `[x, y]`.
    pub fn from_grid(
        name: impl Into<String>,
        grid: Array2<Cell>,
        red_goal: Coord2,
        blue_goal: Coord2,
    ) -> Result<Self> {
        let level = Self::new_unchecked(name.into(), grid, red_goal, blue_goal);
        level.validate()?;
        Ok(level)
    }

    /// Overrides the default particle starts.
    pub fn with_starts(mut self, red_start: Coord2, blue_start: Coord2) -> Result<Self> {
        self.red_start = red_start;
        self.blue_start = blue_start;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let size = usize::from(GRID_SIZE);
        if self.grid.dim() != (size, size) {
            return Err(PuzzleError::InvalidBoardShape);
        }

        for anchor in [
            self.red_start,
            self.blue_start,
            self.red_goal,
            self.blue_goal,
        ] {
            match self.cell(anchor) {
                None => return Err(PuzzleError::InvalidCoords),
                Some(Cell::Wall) => return Err(PuzzleError::BlockedAnchor),
                Some(_) => {}
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Array2<Cell> {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        (GRID_SIZE, GRID_SIZE)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (max_x, max_y) = self.size();
        coords.0 < max_x && coords.1 < max_y
    }

    /// Cell at `coords`, or `None` outside the grid.
    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.grid.get(coords.to_nd_index()).copied()
    }

    pub fn red_start(&self) -> Coord2 {
        self.red_start
    }

    pub fn blue_start(&self) -> Coord2 {
        self.blue_start
    }

    pub fn red_goal(&self) -> Coord2 {
        self.red_goal
    }

    pub fn blue_goal(&self) -> Coord2 {
        self.blue_goal
    }

    /// Exact goal match: red on the red goal and blue on the blue goal.
    pub fn is_solved_by(&self, red: Coord2, blue: Coord2) -> bool {
        red == self.red_goal && blue == self.blue_goal
    }

    pub fn tutorial() -> Self {
        builtin("Tutorial: Basic Movement", &TUTORIAL, (7, 6), (2, 1))
    }

    pub fn quantum_swap() -> Self {
        builtin("Level 1: Quantum Swap", &QUANTUM_SWAP, (6, 1), (1, 6))
    }
}

const E: Cell = Cell::Empty;
const S: Cell = Cell::SwapGate;
const P: Cell = Cell::PhaseGate;
const W: Cell = Cell::Wall;

type Rows = [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize];

#[rustfmt::skip]
const TUTORIAL: Rows = [
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, S, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, P, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
];

#[rustfmt::skip]
const QUANTUM_SWAP: Rows = [
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, S, E, E, E, E, E],
    [E, E, E, W, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, P, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
];

fn builtin(name: &str, rows: &Rows, red_goal: Coord2, blue_goal: Coord2) -> Level {
    let size = usize::from(GRID_SIZE);
    let grid = Array2::from_shape_fn((size, size), |(x, y)| rows[y][x]);
    Level::new_unchecked(name.into(), grid, red_goal, blue_goal)
}

/// Ordered, non-empty table of levels played in sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Level>", into = "Vec<Level>")]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    pub fn new(levels: Vec<Level>) -> Result<Self> {
        if levels.is_empty() {
            return Err(PuzzleError::NoLevels);
        }
        for level in &levels {
            level.validate()?;
        }
        Ok(Self { levels })
    }

    /// The two hand-authored levels.
    pub fn builtin() -> Self {
        Self {
            levels: alloc::vec![Level::tutorial(), Level::quantum_swap()],
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Level> {
        self.levels
            .get(index)
            .ok_or(PuzzleError::UnknownLevel(index))
    }

    /// Index played after `index`, wrapping back to the first level.
    pub fn next_index(&self, index: usize) -> usize {
        let next = index.saturating_add(1);
        if next >= self.levels.len() {
            log::debug!("Last level finished, wrapping back to level 0");
            0
        } else {
            next
        }
    }

    pub fn first(&self) -> &Level {
        &self.levels[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

impl Index<usize> for LevelSet {
    type Output = Level;

    fn index(&self, index: usize) -> &Self::Output {
        &self.levels[index]
    }
}

impl TryFrom<Vec<Level>> for LevelSet {
    type Error = PuzzleError;

    fn try_from(levels: Vec<Level>) -> Result<Self> {
        Self::new(levels)
    }
}

impl From<LevelSet> for Vec<Level> {
    fn from(set: LevelSet) -> Self {
        set.levels
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Looks up one of the built-in levels.
pub fn load_level(index: usize) -> Result<Level> {
    LevelSet::builtin().get(index).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_levels_are_valid() {
        let levels = LevelSet::builtin();
        assert_eq!(levels.len(), 2);
        for level in levels.iter() {
            assert_eq!(level.validate(), Ok(()));
            assert_eq!(level.red_start(), (1, 1));
            assert_eq!(level.blue_start(), (6, 6));
        }
    }

    #[test]
    fn builtin_grids_are_indexed_by_column_then_row() {
        let tutorial = load_level(0).unwrap();
        assert_eq!(tutorial.name(), "Tutorial: Basic Movement");
        assert_eq!(tutorial.cell((2, 2)), Some(Cell::SwapGate));
        assert_eq!(tutorial.cell((5, 5)), Some(Cell::PhaseGate));
        assert_eq!(tutorial.cell((3, 3)), Some(Cell::Empty));
        assert_eq!(tutorial.cell((8, 0)), None);

        let swap = load_level(1).unwrap();
        assert_eq!(swap.cell((3, 3)), Some(Cell::Wall));
        assert_eq!(swap.red_goal(), (6, 1));
        assert_eq!(swap.blue_goal(), (1, 6));
    }

    #[test]
    fn unknown_index_is_reported() {
        assert_eq!(load_level(2), Err(PuzzleError::UnknownLevel(2)));
    }

    #[test]
    fn next_index_wraps_to_first_level() {
        let levels = LevelSet::builtin();
        assert_eq!(levels.next_index(0), 1);
        assert_eq!(levels.next_index(1), 0);
    }

    #[test]
    fn from_rows_matches_builtin_table() {
        let mut rows = [[0u8; 8]; 8];
        rows[2][2] = 1;
        rows[5][5] = 2;
        rows[3][3] = 3;
        let level = Level::from_rows("Level 1: Quantum Swap", &rows, (6, 1), (1, 6)).unwrap();
        assert_eq!(level, Level::quantum_swap());
    }

    #[test]
    fn from_rows_rejects_bad_shapes_and_codes() {
        let short = [[0u8; 8]; 7];
        assert_eq!(
            Level::from_rows("short", &short, (0, 0), (1, 1)),
            Err(PuzzleError::InvalidBoardShape)
        );

        let mut rows = [[0u8; 8]; 8];
        rows[4][4] = 9;
        assert_eq!(
            Level::from_rows("bad", &rows, (0, 0), (1, 1)),
            Err(PuzzleError::InvalidCell(9))
        );
    }

    #[test]
    fn anchors_must_be_in_bounds_and_open() {
        let mut rows = [[0u8; 8]; 8];
        rows[0][7] = 3;
        assert_eq!(
            Level::from_rows("oob", &rows, (8, 0), (1, 1)),
            Err(PuzzleError::InvalidCoords)
        );
        assert_eq!(
            Level::from_rows("walled", &rows, (7, 0), (1, 1)),
            Err(PuzzleError::BlockedAnchor)
        );

        let level = Level::from_rows("starts", &rows, (0, 0), (1, 1)).unwrap();
        assert_eq!(
            level.clone().with_starts((7, 0), (2, 2)),
            Err(PuzzleError::BlockedAnchor)
        );
        let moved = level.with_starts((3, 3), (4, 4)).unwrap();
        assert_eq!(moved.red_start(), (3, 3));
    }

    #[test]
    fn empty_level_set_is_rejected() {
        assert_eq!(LevelSet::new(Vec::new()), Err(PuzzleError::NoLevels));
    }
}
