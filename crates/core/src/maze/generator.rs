//! Randomized depth-first backtracker that carves a spanning tree into the grid.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::grid::Grid;
use crate::types::MazeError;

/// Knocks down walls until every cell has been visited exactly once.
///
/// Each knock-down connects a virgin cell to the visited region, so the
/// open-wall graph is a spanning tree by construction: `cell_count - 1` edges
/// and no cycles. The backtrack stack emptying early means the grid is not
/// connected, which a freshly allocated grid cannot be; that state is fatal
/// and propagates as [`MazeError::InvariantViolation`].
pub(super) fn carve_spanning_tree(
    grid: &mut Grid,
    start: usize,
    rng: &mut ChaCha8Rng,
) -> Result<(), MazeError> {
    let total = grid.cell_count();
    let mut stack: Vec<usize> = Vec::new();
    let mut current = start;
    let mut visited = 1_usize;

    while visited < total {
        let candidates = grid.unvisited_neighbors(current);
        if candidates.is_empty() {
            match stack.pop() {
                Some(previous) => current = previous,
                None => return Err(MazeError::InvariantViolation { visited, total }),
            }
            continue;
        }
        let (_, chosen) = candidates[(rng.next_u64() as usize) % candidates.len()];
        grid.knock_down_wall(current, chosen)?;
        stack.push(current);
        current = chosen;
        visited += 1;
    }
    Ok(())
}
