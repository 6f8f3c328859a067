//! Cell arena and wall-state primitives shared by carving, role assignment,
//! and the graph builders.

use crate::types::{Direction, MazeError, Role};

/// A single grid unit: identity, coordinates, wall state, role tag.
///
/// Wall mutation only happens through [`Grid::knock_down_wall`] so the wall
/// relation stays symmetric; consumers get a read-only view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    code: usize,
    row: usize,
    column: usize,
    walls: [bool; 4],
    role: Option<Role>,
}

impl Cell {
    fn new(code: usize, row: usize, column: usize) -> Self {
        Self { code, row, column, walls: [true; 4], role: None }
    }

    /// Unique identifier, `row * columns + column`; doubles as the cell's
    /// index in the adjacency matrix.
    pub fn code(&self) -> usize {
        self.code
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// `true` while the wall is intact (no passage in that direction).
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// A cell with all four walls intact has never been visited by the carver.
    pub fn is_virgin(&self) -> bool {
        self.walls.iter().all(|&intact| intact)
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub(crate) fn wall_bits(&self) -> u8 {
        self.walls
            .iter()
            .enumerate()
            .fold(0, |bits, (index, &intact)| bits | (u8::from(intact) << index))
    }
}

/// Fixed-size arena of cells indexed by code. Allocated once, never resized.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn new(rows: usize, columns: usize) -> Result<Self, MazeError> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(Cell::new(row * columns + column, row, column));
            }
        }
        Ok(Self { rows, columns, cells })
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn columns(&self) -> usize {
        self.columns
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn cell(&self, code: usize) -> &Cell {
        &self.cells[code]
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cell_at(&self, row: usize, column: usize) -> Result<&Cell, MazeError> {
        Ok(&self.cells[self.code_of(row, column)?])
    }

    pub(crate) fn code_of(&self, row: usize, column: usize) -> Result<usize, MazeError> {
        if row >= self.rows || column >= self.columns {
            return Err(MazeError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }

    /// Code of the cell across `direction`, if it exists.
    pub(crate) fn neighbor(&self, code: usize, direction: Direction) -> Option<usize> {
        let cell = self.cell(code);
        let (row_delta, column_delta) = direction.offset();
        let row = cell.row.checked_add_signed(row_delta)?;
        let column = cell.column.checked_add_signed(column_delta)?;
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    /// Neighbors whose walls are all still intact, with the direction to reach
    /// each. This is the carver's candidate set.
    pub(crate) fn unvisited_neighbors(&self, code: usize) -> Vec<(Direction, usize)> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let neighbor = self.neighbor(code, direction)?;
                self.cell(neighbor).is_virgin().then_some((direction, neighbor))
            })
            .collect()
    }

    /// Cells reachable from `code` through an already knocked-down wall.
    pub(crate) fn open_neighbors(&self, code: usize) -> Vec<usize> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                if self.cell(code).has_wall(direction) {
                    return None;
                }
                self.neighbor(code, direction)
            })
            .collect()
    }

    /// Removes the wall between two adjacent cells, updating both sides in one
    /// place so the symmetry invariant cannot drift.
    pub(crate) fn knock_down_wall(&mut self, first: usize, second: usize) -> Result<(), MazeError> {
        let direction = self
            .direction_between(first, second)
            .ok_or(MazeError::InvalidAdjacency { first, second })?;
        self.cells[first].walls[direction.index()] = false;
        self.cells[second].walls[direction.opposite().index()] = false;
        Ok(())
    }

    fn direction_between(&self, first: usize, second: usize) -> Option<Direction> {
        if first >= self.cells.len() || second >= self.cells.len() {
            return None;
        }
        Direction::ALL
            .into_iter()
            .find(|&direction| self.neighbor(first, direction) == Some(second))
    }

    pub(crate) fn set_role(&mut self, code: usize, role: Option<Role>) {
        self.cells[code].role = role;
    }

    pub(crate) fn clear_roles(&mut self) {
        for cell in &mut self.cells {
            cell.role = None;
        }
    }

    /// `(row, column)` of every cell tagged with `role`, in row-major scan order.
    pub(crate) fn positions_of_type(&self, role: Role) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|cell| cell.role == Some(role))
            .map(|cell| (cell.row, cell.column))
            .collect()
    }

    /// First cell carrying `role` in scan order.
    pub(crate) fn find_role(&self, role: Role) -> Option<usize> {
        self.cells.iter().find(|cell| cell.role == Some(role)).map(Cell::code)
    }

    pub(crate) fn enemy_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| matches!(cell.role, Some(Role::Enemy(_)))).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_cells_are_virgin_with_scan_order_codes() {
        let grid = Grid::new(3, 4).expect("dimensions are valid");
        assert_eq!(grid.cell_count(), 12);
        for row in 0..3 {
            for column in 0..4 {
                let cell = grid.cell_at(row, column).expect("coordinates are in range");
                assert_eq!(cell.code(), row * 4 + column);
                assert!(cell.is_virgin());
                assert_eq!(cell.role(), None);
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            MazeError::InvalidDimensions { rows: 0, columns: 5 }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            MazeError::InvalidDimensions { rows: 5, columns: 0 }
        );
    }

    #[test]
    fn cell_at_rejects_out_of_bounds_coordinates() {
        let grid = Grid::new(2, 2).expect("dimensions are valid");
        assert_eq!(
            grid.cell_at(2, 0).unwrap_err(),
            MazeError::OutOfBounds { row: 2, column: 0, rows: 2, columns: 2 }
        );
        assert_eq!(
            grid.cell_at(0, 2).unwrap_err(),
            MazeError::OutOfBounds { row: 0, column: 2, rows: 2, columns: 2 }
        );
    }

    #[test]
    fn knock_down_wall_opens_both_sides() {
        let mut grid = Grid::new(2, 2).expect("dimensions are valid");
        grid.knock_down_wall(0, 1).expect("cells 0 and 1 are adjacent");
        assert!(!grid.cell(0).has_wall(Direction::East));
        assert!(!grid.cell(1).has_wall(Direction::West));
        assert!(grid.cell(0).has_wall(Direction::South));
        assert_eq!(grid.open_neighbors(0), vec![1]);
        assert_eq!(grid.open_neighbors(1), vec![0]);
    }

    #[test]
    fn knock_down_wall_rejects_non_adjacent_cells() {
        let mut grid = Grid::new(2, 2).expect("dimensions are valid");
        assert_eq!(
            grid.knock_down_wall(0, 3).unwrap_err(),
            MazeError::InvalidAdjacency { first: 0, second: 3 }
        );
        assert_eq!(
            grid.knock_down_wall(0, 0).unwrap_err(),
            MazeError::InvalidAdjacency { first: 0, second: 0 }
        );
        assert!(grid.cell(0).is_virgin());
        assert!(grid.cell(3).is_virgin());
    }

    #[test]
    fn unvisited_neighbors_shrink_as_walls_fall() {
        let mut grid = Grid::new(2, 2).expect("dimensions are valid");
        assert_eq!(grid.unvisited_neighbors(0).len(), 2);
        grid.knock_down_wall(0, 1).expect("cells 0 and 1 are adjacent");
        // Cell 1 is no longer virgin, so only the southern neighbor remains.
        assert_eq!(grid.unvisited_neighbors(0), vec![(Direction::South, 2)]);
        assert_eq!(grid.unvisited_neighbors(3).len(), 1);
    }

    #[test]
    fn role_queries_report_scan_order_positions() {
        let mut grid = Grid::new(2, 3).expect("dimensions are valid");
        grid.set_role(4, Some(Role::Player));
        grid.set_role(1, Some(Role::Key));
        assert_eq!(grid.positions_of_type(Role::Player), vec![(1, 1)]);
        assert_eq!(grid.positions_of_type(Role::Key), vec![(0, 1)]);
        assert_eq!(grid.positions_of_type(Role::Door), Vec::new());
        assert_eq!(grid.find_role(Role::Player), Some(4));
        grid.clear_roles();
        assert_eq!(grid.find_role(Role::Player), None);
    }
}
