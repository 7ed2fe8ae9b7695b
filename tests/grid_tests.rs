//! Grid loading and validation through the public API.

use tui_raycaster::core::{Grid, GridError, Tile, DEFAULT_MAP};
use tui_raycaster::types::MAP_SIZE;

#[test]
fn builtin_grid_round_trips_to_its_literal() {
    let grid = Grid::builtin();
    assert_eq!(grid.side(), MAP_SIZE);
    assert_eq!(grid.rows(), DEFAULT_MAP.map(String::from).to_vec());
}

#[test]
fn border_cells_are_walls() {
    let grid = Grid::builtin();
    let last = grid.side() - 1;
    for i in 0..grid.side() {
        assert_eq!(grid.get(0, i), Some(Tile::Wall));
        assert_eq!(grid.get(last, i), Some(Tile::Wall));
        assert_eq!(grid.get(i, 0), Some(Tile::Wall));
        assert_eq!(grid.get(i, last), Some(Tile::Wall));
    }
}

#[test]
fn one_by_one_wall_is_a_valid_grid() {
    let grid: Grid = "#".parse().unwrap();
    assert_eq!(grid.side(), 1);
}

#[test]
fn open_corner_is_rejected() {
    let err = "### \n#  #\n#  #\n####".parse::<Grid>().unwrap_err();
    assert_eq!(err, GridError::NotEnclosed { row: 0, col: 3 });
    assert!(err.to_string().contains("row 0, col 3"));
}

#[test]
fn iter_visits_cells_in_row_major_order() {
    let grid = Grid::builtin();
    let cells: Vec<_> = grid.iter().take(3).collect();
    assert_eq!(
        cells,
        vec![(0, 0, Tile::Wall), (0, 1, Tile::Wall), (0, 2, Tile::Wall)]
    );
    assert_eq!(grid.iter().count(), MAP_SIZE * MAP_SIZE);
}
