//! Fixed occupancy grid.

/// What a map query finds at an integer cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    OutOfBounds,
}

impl Cell {
    /// Walls and anything off the grid stop rays and players alike.
    #[inline]
    pub fn is_blocking(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

/// Compiled-in level. The outer index is x, the inner index is y.
pub const BEYOND_DEATH_LAYOUT: [[u8; 10]; 10] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 0, 1, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 0, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Rectangular wall grid, immutable once built.
#[derive(Clone, Debug)]
pub struct Maze {
    width: usize,
    height: usize,
    // walls[x][y]
    walls: Vec<Vec<bool>>,
}

impl Maze {
    /// Builds a maze from columns of cell codes (`0` empty, anything else wall).
    ///
    /// Panics if the grid is empty or its columns differ in length.
    pub fn from_columns<C: AsRef<[u8]>>(columns: &[C]) -> Self {
        assert!(!columns.is_empty(), "maze needs at least one column");
        let height = columns[0].as_ref().len();
        assert!(height > 0, "maze needs at least one row");
        let walls: Vec<Vec<bool>> = columns
            .iter()
            .map(|col| {
                let col = col.as_ref();
                assert_eq!(col.len(), height, "maze columns must all have the same length");
                col.iter().map(|&c| c != 0).collect()
            })
            .collect();
        Self { width: walls.len(), height, walls }
    }

    pub fn beyond_death() -> Self {
        Self::from_columns(&BEYOND_DEATH_LAYOUT)
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Cell::OutOfBounds;
        }
        if self.walls[x as usize][y as usize] { Cell::Wall } else { Cell::Empty }
    }

    /// Looks up the cell containing a continuous map position.
    #[inline]
    pub fn cell_at_pos(&self, x: f32, y: f32) -> Cell {
        // floor, so -0.5 lands in cell -1 rather than cell 0
        self.cell_at(x.floor() as i32, y.floor() as i32)
    }
}
