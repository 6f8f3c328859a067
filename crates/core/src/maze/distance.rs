//! Shortest hop-count queries over the full adjacency matrix.

use std::collections::BTreeSet;

use super::model::AdjacencyMatrix;

impl AdjacencyMatrix {
    /// Shortest hop count from `from` to `to`, relaxing only open
    /// (`weight == 1`) arcs. Returns `None` when `to` is unreachable or either
    /// index is outside the matrix.
    pub fn distance(&self, from: usize, to: usize) -> Option<u32> {
        if from >= self.size || to >= self.size {
            return None;
        }

        let mut settled = vec![false; self.size];
        let mut best = vec![u32::MAX; self.size];
        best[from] = 0;
        let mut open = BTreeSet::from([(0_u32, from)]);

        while let Some((cost, node)) = open.pop_first() {
            if settled[node] {
                continue;
            }
            settled[node] = true;
            if node == to {
                return Some(cost);
            }
            for next in 0..self.size {
                if settled[next] || self.at(node, next) != 1 {
                    continue;
                }
                let candidate = cost + 1;
                if candidate < best[next] {
                    best[next] = candidate;
                    open.insert((candidate, next));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::adjacency::build_adjacency;
    use super::super::grid::Grid;
    use crate::types::MazeError;

    fn open_corridor(length: usize) -> Result<Grid, MazeError> {
        let mut grid = Grid::new(1, length)?;
        for code in 0..length - 1 {
            grid.knock_down_wall(code, code + 1)?;
        }
        Ok(grid)
    }

    #[test]
    fn distance_to_self_is_zero() {
        let grid = open_corridor(4).expect("carving succeeds");
        let matrix = build_adjacency(&grid);
        for code in 0..4 {
            assert_eq!(matrix.distance(code, code), Some(0));
        }
    }

    #[test]
    fn distance_is_symmetric_on_a_role_free_corridor() {
        let grid = open_corridor(5).expect("carving succeeds");
        let matrix = build_adjacency(&grid);
        assert_eq!(matrix.distance(0, 4), Some(4));
        assert_eq!(matrix.distance(4, 0), Some(4));
        assert_eq!(matrix.distance(1, 3), Some(2));
        assert_eq!(matrix.distance(3, 1), Some(2));
    }

    #[test]
    fn walled_off_cells_are_unreachable() {
        let mut grid = Grid::new(2, 2).expect("dimensions are valid");
        grid.knock_down_wall(0, 1).expect("cells 0 and 1 are adjacent");
        let matrix = build_adjacency(&grid);
        assert_eq!(matrix.distance(0, 1), Some(1));
        assert_eq!(matrix.distance(0, 2), None);
        assert_eq!(matrix.distance(0, 3), None);
    }

    #[test]
    fn out_of_range_indices_yield_none() {
        let grid = open_corridor(3).expect("carving succeeds");
        let matrix = build_adjacency(&grid);
        assert_eq!(matrix.distance(0, matrix.size), None);
        assert_eq!(matrix.distance(matrix.size, 0), None);
    }
}
