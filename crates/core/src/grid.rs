//! Grid module - the occupancy map the camera moves through
//!
//! The grid is an N x N matrix of tiles stored as a flat row-major vector.
//! Construction is the only checked boundary in the renderer: a grid is
//! square and its border is walls, or it does not exist. The ray marcher
//! relies on the enclosed border to guarantee that every ray cast from
//! inside the map terminates on a wall.
//!
//! Coordinates: (row, col) where row grows downward (+Y in world units) and
//! col grows rightward (+X).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::MAP_SIZE;

/// The built-in map: `#` is a wall, space is empty.
pub const DEFAULT_MAP: [&str; MAP_SIZE] = [
    "########",
    "# #    #",
    "# #  ###",
    "#      #",
    "##     #",
    "#  ### #",
    "#   #  #",
    "########",
];

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Empty,
}

impl Tile {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            ' ' => Some(Tile::Empty),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Empty => ' ',
        }
    }

    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }
}

/// Why a map was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// No rows at all.
    Empty,
    /// A row's length differs from the number of rows.
    NotSquare { row: usize, len: usize, side: usize },
    /// A character other than `#` or space.
    UnknownTile { row: usize, col: usize, ch: char },
    /// A border cell is not a wall.
    NotEnclosed { row: usize, col: usize },
}

impl GridError {
    pub fn code(self) -> &'static str {
        match self {
            GridError::Empty => "empty_map",
            GridError::NotSquare { .. } => "not_square",
            GridError::UnknownTile { .. } => "unknown_tile",
            GridError::NotEnclosed { .. } => "not_enclosed",
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GridError::Empty => write!(f, "map has no rows"),
            GridError::NotSquare { row, len, side } => write!(
                f,
                "row {} has {} cells but the map has {} rows (maps must be square)",
                row, len, side
            ),
            GridError::UnknownTile { row, col, ch } => {
                write!(f, "unknown tile {:?} at row {}, col {}", ch, row, col)
            }
            GridError::NotEnclosed { row, col } => write!(
                f,
                "border cell at row {}, col {} is not a wall (maps must be fully enclosed)",
                row, col
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Square, wall-enclosed occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    side: usize,
    /// Row-major tiles (row * side + col).
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid from row strings, validating shape and enclosure.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let side = rows.len();
        if side == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(side * side);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != side {
                return Err(GridError::NotSquare { row, len, side });
            }
            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(GridError::UnknownTile { row, col, ch })?;
                tiles.push(tile);
            }
        }

        let grid = Self { side, tiles };
        grid.check_enclosed()?;
        Ok(grid)
    }

    /// The built-in 8x8 map.
    pub fn builtin() -> Self {
        // DEFAULT_MAP is covered by `builtin_map_is_valid`.
        Self::from_rows(&DEFAULT_MAP).unwrap_or_else(|e| unreachable!("built-in map: {}", e))
    }

    fn check_enclosed(&self) -> Result<(), GridError> {
        let last = self.side - 1;
        for i in 0..self.side {
            for (row, col) in [(0, i), (last, i), (i, 0), (i, last)] {
                if !self.tiles[self.index(row, col)].is_wall() {
                    return Err(GridError::NotEnclosed { row, col });
                }
            }
        }
        Ok(())
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    /// Number of rows (and columns).
    pub fn side(&self) -> usize {
        self.side
    }

    /// Tile at (row, col), or None out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.side || col >= self.side {
            return None;
        }
        Some(self.tiles[self.index(row, col)])
    }

    /// Signed lookup used by the ray marcher; negative indices are out of bounds.
    #[inline]
    pub fn is_wall(&self, row: i64, col: i64) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        matches!(self.get(row as usize, col as usize), Some(Tile::Wall))
    }

    /// Iterate `(row, col, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &tile)| (i / self.side, i % self.side, tile))
    }

    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.side)
            .map(|row| row.iter().map(|t| t.as_char()).collect())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse the plain text map format: one row per line, trailing `\r`
    /// stripped, blank trailing lines ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        while rows.last().is_some_and(|l| l.is_empty()) {
            rows.pop();
        }
        Self::from_rows(&rows)
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_map_is_valid() {
        let grid = Grid::from_rows(&DEFAULT_MAP).unwrap();
        assert_eq!(grid.side(), MAP_SIZE);
        assert_eq!(grid.get(1, 2), Some(Tile::Wall));
        assert_eq!(grid.get(1, 1), Some(Tile::Empty));
        assert_eq!(grid.get(8, 0), None);
    }

    #[test]
    fn rejects_open_border() {
        let err = Grid::from_rows(&["###", "  #", "###"]).unwrap_err();
        assert_eq!(err, GridError::NotEnclosed { row: 1, col: 0 });
        assert_eq!(err.code(), "not_enclosed");
    }

    #[test]
    fn rejects_non_square() {
        let err = Grid::from_rows(&["###", "# #"]).unwrap_err();
        assert_eq!(err, GridError::NotSquare { row: 0, len: 3, side: 2 });
    }

    #[test]
    fn rejects_unknown_tiles() {
        let err = Grid::from_rows(&["###", "#x#", "###"]).unwrap_err();
        assert_eq!(err, GridError::UnknownTile { row: 1, col: 1, ch: 'x' });
    }

    #[test]
    fn rejects_empty() {
        let rows: [&str; 0] = [];
        assert_eq!(Grid::from_rows(&rows), Err(GridError::Empty));
    }

    #[test]
    fn parses_text_with_crlf_and_trailing_blank_lines() {
        let grid: Grid = "###\r\n# #\r\n###\r\n\r\n".parse().unwrap();
        assert_eq!(grid.side(), 3);
        assert_eq!(grid.get(1, 1), Some(Tile::Empty));
    }

    #[test]
    fn signed_lookup_treats_negative_as_open() {
        let grid = Grid::builtin();
        assert!(!grid.is_wall(-1, 0));
        assert!(!grid.is_wall(0, -1));
        assert!(grid.is_wall(0, 0));
        assert!(!grid.is_wall(0, 8));
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let json = serde_json::to_string(&Grid::builtin()).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Grid::builtin());

        let open = serde_json::to_string(&["###", "#  ", "###"]).unwrap();
        assert!(serde_json::from_str::<Grid>(&open).is_err());
    }
}
