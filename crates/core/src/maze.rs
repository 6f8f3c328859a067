//! Maze construction domain split into coherent submodules.
//!
//! Phases run in a strict order against one exclusively owned grid:
//! generate, then assign roles, then build matrices. The matrix builders are
//! pure reads over the finished grid and rebuild their artifacts from scratch
//! on every call.

pub mod model;

mod adjacency;
mod distance;
mod generator;
mod grid;
mod reduce;
mod roles;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use xxhash_rust::xxh3::xxh3_64;

pub use grid::Cell;
pub use model::{AdjacencyMatrix, CorridorPath, NodeId, ReducedGraph};

use crate::types::{MazeError, Role};

pub const DEFAULT_ENEMY_COUNT: usize = 3;

/// Grid maze with special role cells and derived graph artifacts.
///
/// Identical seeds and identical call sequences produce byte-identical mazes;
/// all randomness flows through one seeded stream.
pub struct Maze {
    grid: grid::Grid,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Maze {
    pub fn new(rows: usize, columns: usize, seed: u64) -> Result<Self, MazeError> {
        Ok(Self { grid: grid::Grid::new(rows, columns)?, rng: ChaCha8Rng::seed_from_u64(seed), seed })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Carves a spanning-tree maze starting from the given cell. The start
    /// coordinates are bounds-checked before any wall is touched.
    pub fn generate(&mut self, start_row: usize, start_col: usize) -> Result<(), MazeError> {
        let start = self.grid.code_of(start_row, start_col)?;
        generator::carve_spanning_tree(&mut self.grid, start, &mut self.rng)
    }

    /// Tags one player, one door, one key, and `enemy_count` enemies on
    /// distinct cells, replacing any previous assignment.
    pub fn assign_roles(&mut self, enemy_count: usize) -> Result<(), MazeError> {
        roles::assign_roles(&mut self.grid, enemy_count, &mut self.rng)
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Result<&Cell, MazeError> {
        self.grid.cell_at(row, column)
    }

    pub fn cell_code_of(&self, row: usize, column: usize) -> Result<usize, MazeError> {
        self.grid.code_of(row, column)
    }

    /// `(row, column)` of every cell tagged with `role`, in row-major scan order.
    pub fn positions_of_type(&self, role: Role) -> Vec<(usize, usize)> {
        self.grid.positions_of_type(role)
    }

    /// Full adjacency matrix with one auxiliary sink per key/enemy cell.
    pub fn adjacency(&self) -> AdjacencyMatrix {
        adjacency::build_adjacency(&self.grid)
    }

    /// Collapses corridors starting from the player cell and returns the
    /// doubled path set (every path plus its reverse).
    pub fn reduce(&self) -> Result<Vec<CorridorPath>, MazeError> {
        let player = self
            .grid
            .find_role(Role::Player)
            .ok_or(MazeError::MissingRole(Role::Player))?;
        Ok(reduce::collapse_corridors(&self.grid, player))
    }

    /// Compact weighted matrix plus vertex index map for a path set produced
    /// by [`Maze::reduce`].
    pub fn to_compact_matrix(&self, paths: &[CorridorPath]) -> ReducedGraph {
        reduce::compact_matrix(&self.grid, paths)
    }

    pub fn reduced_graph(&self) -> Result<ReducedGraph, MazeError> {
        let paths = self.reduce()?;
        Ok(self.to_compact_matrix(&paths))
    }

    /// Canonical byte encoding of dimensions, wall state, and role tags.
    /// Two mazes are structurally identical iff their encodings match.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.grid.rows() as u32).to_le_bytes());
        bytes.extend((self.grid.columns() as u32).to_le_bytes());
        for cell in self.grid.cells() {
            bytes.push(cell.wall_bits());
            bytes.push(match cell.role() {
                None => 0,
                Some(Role::Player) => 1,
                Some(Role::Door) => 2,
                Some(Role::Key) => 3,
                Some(Role::Enemy(kind)) => {
                    4 + crate::types::EnemyKind::ALL
                        .iter()
                        .position(|&candidate| candidate == kind)
                        .unwrap_or(0) as u8
                }
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

/// Convenience composition of the full pipeline: construct, carve from
/// `(0, 0)`, assign roles.
pub fn generate_maze(
    rows: usize,
    columns: usize,
    enemy_count: usize,
    seed: u64,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::new(rows, columns, seed)?;
    maze.generate(0, 0)?;
    maze.assign_roles(enemy_count)?;
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn generate_maze_matches_the_manual_sequence() {
        let from_helper = generate_maze(5, 4, 3, 77).expect("generation succeeds");

        let mut manual = Maze::new(5, 4, 77).expect("dimensions are valid");
        manual.generate(0, 0).expect("carving succeeds");
        manual.assign_roles(3).expect("placement is feasible");

        assert_eq!(from_helper.canonical_bytes(), manual.canonical_bytes());
        assert_eq!(from_helper.fingerprint(), manual.fingerprint());
    }

    #[test]
    fn two_by_two_maze_yields_expected_artifacts() {
        let maze = generate_maze(2, 2, 0, 5).expect("generation succeeds");

        let open_walls: usize = (0..2)
            .flat_map(|row| (0..2).map(move |column| (row, column)))
            .map(|(row, column)| {
                let cell = maze.cell_at(row, column).expect("coordinates are in range");
                Direction::ALL.into_iter().filter(|&d| !cell.has_wall(d)).count()
            })
            .sum();
        assert_eq!(open_walls / 2, 3, "2x2 spanning tree has exactly 3 open walls");

        let matrix = maze.adjacency();
        assert_eq!(matrix.size, 5, "4 cells + 1 key sink even with enemy_count = 0");

        let tagged = [Role::Player, Role::Door, Role::Key]
            .into_iter()
            .map(|role| maze.positions_of_type(role).len())
            .collect::<Vec<_>>();
        assert_eq!(tagged, vec![1, 1, 1]);

        let mut crowded = Maze::new(2, 2, 5).expect("dimensions are valid");
        crowded.generate(0, 0).expect("carving succeeds");
        assert_eq!(
            crowded.assign_roles(2).unwrap_err(),
            MazeError::InfeasiblePlacement { required: 5, available: 4 }
        );
    }

    #[test]
    fn generate_rejects_out_of_bounds_start() {
        let mut maze = Maze::new(3, 3, 0).expect("dimensions are valid");
        assert_eq!(
            maze.generate(3, 0).unwrap_err(),
            MazeError::OutOfBounds { row: 3, column: 0, rows: 3, columns: 3 }
        );
    }

    #[test]
    fn reduce_requires_an_assigned_player() {
        let mut maze = Maze::new(3, 3, 8).expect("dimensions are valid");
        maze.generate(0, 0).expect("carving succeeds");
        assert_eq!(maze.reduce().unwrap_err(), MazeError::MissingRole(Role::Player));
    }

    #[test]
    fn reduced_graph_composes_reduce_and_compact() {
        let maze = generate_maze(4, 5, 2, 31).expect("generation succeeds");
        let paths = maze.reduce().expect("player is assigned");
        let composed = maze.reduced_graph().expect("player is assigned");
        assert_eq!(composed, maze.to_compact_matrix(&paths));
        assert_eq!(composed.size, paths.len() + 1 + 2);
    }

    #[test]
    fn role_queries_never_disturb_wall_state() {
        let maze = generate_maze(4, 4, 1, 13).expect("generation succeeds");
        let before = maze.canonical_bytes();
        let _ = maze.positions_of_type(Role::Key);
        let _ = maze.adjacency();
        let _ = maze.reduced_graph().expect("player is assigned");
        assert_eq!(maze.canonical_bytes(), before);
    }
}
