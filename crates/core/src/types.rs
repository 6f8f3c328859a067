use thiserror::Error;

/// Compass direction of one of a cell's four walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// `(row, column)` delta toward the neighboring cell across this wall.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnemyKind {
    Chaser,
    Sentry,
    Prowler,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Chaser, EnemyKind::Sentry, EnemyKind::Prowler];
}

/// Role tag carried by a cell. Set only by role assignment, read-only elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Player,
    Door,
    Key,
    Enemy(EnemyKind),
}

impl Role {
    /// Key and enemy cells own an auxiliary sink index in the adjacency matrix
    /// and split into entry/captured nodes in the reduced graph.
    pub fn has_auxiliary_sink(self) -> bool {
        matches!(self, Role::Key | Role::Enemy(_))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("grid dimensions {rows}x{columns} must both be at least 1")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("coordinates ({row}, {column}) fall outside a {rows}x{columns} grid")]
    OutOfBounds { row: usize, column: usize, rows: usize, columns: usize },
    #[error("cells {first} and {second} are not adjacent")]
    InvalidAdjacency { first: usize, second: usize },
    #[error("cannot place {required} role cells in a grid of {available} cells")]
    InfeasiblePlacement { required: usize, available: usize },
    #[error("carving stack emptied after visiting {visited} of {total} cells")]
    InvariantViolation { visited: usize, total: usize },
    #[error("no cell carries the {0:?} role")]
    MissingRole(Role),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_pairs_are_involutions() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let (row_delta, column_delta) = direction.offset();
            let (opposite_row_delta, opposite_column_delta) = direction.opposite().offset();
            assert_eq!((row_delta, column_delta), (-opposite_row_delta, -opposite_column_delta));
        }
    }

    #[test]
    fn only_key_and_enemy_roles_own_sinks() {
        assert!(Role::Key.has_auxiliary_sink());
        for kind in EnemyKind::ALL {
            assert!(Role::Enemy(kind).has_auxiliary_sink());
        }
        assert!(!Role::Player.has_auxiliary_sink());
        assert!(!Role::Door.has_auxiliary_sink());
    }
}
