use flotilla::{Cell, GameError, Grid};

#[test]
fn new_grid_is_all_water() {
    let grid = Grid::new(4).unwrap();
    assert_eq!(grid.size(), 4);
    assert_eq!(grid.count(Cell::Water), 16);
    assert!(grid.iter().all(|(_, _, cell)| cell == Cell::Water));
}

#[test]
fn zero_size_is_rejected() {
    assert!(matches!(
        Grid::new(0),
        Err(GameError::InvalidConfiguration(_))
    ));
}

#[test]
fn set_and_get_roundtrip() {
    let mut grid = Grid::new(5).unwrap();
    grid.set(1, 2, Cell::Ship).unwrap();
    assert_eq!(grid.get(1, 2).unwrap(), Cell::Ship);
    // transposed coordinate is untouched
    assert_eq!(grid.get(2, 1).unwrap(), Cell::Water);
    assert_eq!(grid.count(Cell::Ship), 1);
}

#[test]
fn out_of_bounds_access_is_an_error() {
    let mut grid = Grid::new(3).unwrap();
    assert_eq!(
        grid.get(3, 0).unwrap_err(),
        GameError::OutOfBounds { x: 3, y: 0, bound: 3 }
    );
    assert_eq!(
        grid.set(0, 3, Cell::Wreck).unwrap_err(),
        GameError::OutOfBounds { x: 0, y: 3, bound: 3 }
    );
    assert!(grid.get(2, 2).is_ok());
}

#[test]
fn iter_is_row_major() {
    let grid = Grid::new(2).unwrap();
    let coords: Vec<(usize, usize)> = grid.iter().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
}
