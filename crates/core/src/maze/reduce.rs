//! Corridor collapsing: turns the per-cell grid graph into a compact weighted
//! graph of junctions, terminals, and role cells.

use super::grid::Grid;
use super::model::{CorridorPath, NodeId, ReducedGraph};
use crate::types::Role;

/// Walks the open-wall graph from `start`, collapsing every maximal run of
/// role-free degree-2 cells into a single path.
///
/// The traversal is an explicit worklist over `(cell, path-so-far)` items; the
/// visited array is owned by this call, so there is no shared mutable state
/// between steps. Over a spanning tree every cell enters the worklist exactly
/// once. The returned set is doubled with every path's reverse, since
/// corridors are bidirectional but are only discovered in one direction.
pub(super) fn collapse_corridors(grid: &Grid, start: usize) -> Vec<CorridorPath> {
    let mut visited = vec![false; grid.cell_count()];
    let mut paths: Vec<CorridorPath> = Vec::new();
    let mut worklist: Vec<(usize, Vec<usize>)> = vec![(start, Vec::new())];

    while let Some((code, mut cells)) = worklist.pop() {
        if visited[code] {
            continue;
        }
        visited[code] = true;
        cells.push(code);

        let neighbors = grid.open_neighbors(code);
        let pending: Vec<usize> =
            neighbors.iter().copied().filter(|&neighbor| !visited[neighbor]).collect();

        let terminal = neighbors.len() == 1 || pending.is_empty();
        if !terminal && grid.cell(code).role().is_none() && pending.len() == 1 {
            // Corridor interior: keep extending the same path.
            worklist.push((pending[0], cells));
            continue;
        }

        // Terminal, bifurcation, or role cell: commit and fan out fresh
        // one-cell paths. A terminal only has pending neighbors when the
        // traversal was seeded on a leaf.
        for &neighbor in pending.iter().rev() {
            worklist.push((neighbor, vec![code]));
        }
        paths.push(CorridorPath { cells });
    }

    let reversed: Vec<CorridorPath> = paths.iter().map(CorridorPath::reversed).collect();
    paths.extend(reversed);
    paths
}

/// Converts the doubled path set into the compact weighted matrix plus its
/// vertex index map.
///
/// A path starting on a key or enemy cell records the capture split instead of
/// a plain edge: `Captured(start) -> Entry(end)` with the corridor weight and
/// `Entry(start) -> Captured(start)` with weight 1. The matrix is sized
/// `paths.len() + 1 + enemy_cell_count`, which always bounds the number of
/// distinct vertices the edge scan can discover.
pub(super) fn compact_matrix(grid: &Grid, paths: &[CorridorPath]) -> ReducedGraph {
    let size = paths.len() + 1 + grid.enemy_cell_count();
    let mut graph = ReducedGraph::zeroed(size);

    let mut edges: Vec<(NodeId, NodeId, u32)> = Vec::new();
    for path in paths {
        let Some((start, end)) = path.endpoints() else { continue };
        let splits = grid.cell(start).role().is_some_and(Role::has_auxiliary_sink);
        if splits {
            edges.push((NodeId::Captured(start), NodeId::Entry(end), path.weight()));
            edges.push((NodeId::Entry(start), NodeId::Captured(start), 1));
        } else {
            edges.push((NodeId::Entry(start), NodeId::Entry(end), path.weight()));
        }
    }

    for (from, to, weight) in edges {
        let from_index = graph.index_or_insert(from);
        let to_index = graph.index_or_insert(to);
        graph.set(from_index, to_index, weight);
    }
    graph
}
