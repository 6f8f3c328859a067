//! Uniform without-replacement placement of the player, door, key, and enemies.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::grid::Grid;
use crate::types::{EnemyKind, MazeError, Role};

/// Tags `enemy_count + 3` distinct cells, sampled uniformly from the whole
/// grid. Feasibility is checked before any sampling happens so a grid that is
/// too small fails immediately instead of looping on retries.
pub(super) fn assign_roles(
    grid: &mut Grid,
    enemy_count: usize,
    rng: &mut ChaCha8Rng,
) -> Result<(), MazeError> {
    let required = enemy_count + 3;
    let available = grid.cell_count();
    if required > available {
        return Err(MazeError::InfeasiblePlacement { required, available });
    }

    grid.clear_roles();

    // Partial Fisher-Yates: the first `required` slots end up holding a
    // uniform sample of distinct cell codes.
    let mut codes: Vec<usize> = (0..available).collect();
    for slot in 0..required {
        let pick = slot + (rng.next_u64() as usize) % (available - slot);
        codes.swap(slot, pick);
    }

    grid.set_role(codes[0], Some(Role::Player));
    grid.set_role(codes[1], Some(Role::Door));
    grid.set_role(codes[2], Some(Role::Key));
    for enemy_index in 0..enemy_count {
        let kind = EnemyKind::ALL[enemy_index % EnemyKind::ALL.len()];
        grid.set_role(codes[3 + enemy_index], Some(Role::Enemy(kind)));
    }
    Ok(())
}
