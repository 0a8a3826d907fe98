//! Spawn direction picking.

use crate::rng::{shuffle, RandomSource};
use crate::types::Direction;

/// Pick a direction uniformly among the enabled ones.
///
/// `enabled` is indexed like [`Direction::ALL`]. Shuffles the four candidates
/// and returns the first enabled one, which is uniform over the enabled set.
/// `None` means nothing is enabled and no entity should spawn.
pub fn pick_direction<R: RandomSource + ?Sized>(rng: &mut R, enabled: [bool; 4]) -> Option<Direction> {
    if !enabled.iter().any(|&on| on) {
        return None;
    }
    let mut candidates = Direction::ALL;
    shuffle(rng, &mut candidates);
    candidates.into_iter().find(|d| enabled[d.index()])
}
