pub mod maze;
pub mod types;

pub use maze::{
    AdjacencyMatrix, Cell, CorridorPath, DEFAULT_ENEMY_COUNT, Maze, NodeId, ReducedGraph,
    generate_maze,
};
pub use types::*;
