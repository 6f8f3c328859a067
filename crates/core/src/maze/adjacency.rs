//! Wall state to adjacency matrix conversion with per-role sink nodes.

use super::grid::Grid;
use super::model::AdjacencyMatrix;
use crate::types::Role;

/// Builds the full adjacency matrix from scratch.
///
/// Matrix size is `cell_count + 1 + enemy_cell_count`: one sink index is
/// reserved for the key even when no roles are assigned, plus one per enemy
/// cell. Sinks are allocated in row-major cell-scan order, which fixes which
/// enemy owns which index across runs.
///
/// Key and enemy cells are wired from their sink rather than their own code:
/// passage through the key cell always means the key has been collected, and
/// enemy cells behave the same way except their `cell -> sink` arc carries
/// weight 0 instead of 1. Both weights are deliberate; flow consumers rely on
/// the must-pass (1) versus zero-cost (0) distinction.
pub(super) fn build_adjacency(grid: &Grid) -> AdjacencyMatrix {
    let cell_count = grid.cell_count();
    let size = cell_count + 1 + grid.enemy_cell_count();
    let mut matrix = AdjacencyMatrix::zeroed(size);
    let mut next_sink = cell_count;

    for code in 0..cell_count {
        let face = match grid.cell(code).role() {
            Some(Role::Key) => {
                let sink = next_sink;
                next_sink += 1;
                matrix.set(code, sink, 1);
                matrix.key_sink = Some((code, sink));
                sink
            }
            Some(Role::Enemy(_)) => {
                let sink = next_sink;
                next_sink += 1;
                matrix.set(code, sink, 0);
                matrix.enemy_sinks.push((code, sink));
                sink
            }
            Some(Role::Player) => {
                matrix.player_code = Some(code);
                code
            }
            Some(Role::Door) => {
                matrix.door_code = Some(code);
                code
            }
            None => code,
        };
        for neighbor in grid.open_neighbors(code) {
            matrix.set(face, neighbor, 1);
            matrix.set(neighbor, face, 1);
        }
    }
    matrix
}
