//! Spring force accumulation.

use crate::float::Float;
use crate::mass::Mass;
use crate::spring::Spring;

/// Adds every spring's force into the `force` field of its two endpoints.
///
/// Forces are summed, never overwritten, since a mass usually belongs to several
/// springs. Springs whose endpoints coincide contribute nothing this sub-step.
/// Returns how many springs were skipped that way.
pub fn accumulate_spring_forces<F: Float>(springs: &[Spring<F>], masses: &mut [Mass<F>]) -> usize {
    let mut skipped = 0;
    for (index, spring) in springs.iter().enumerate() {
        match spring.force_on_b(masses) {
            Some(force) => {
                masses[spring.a].add_force(-force);
                masses[spring.b].add_force(force);
            }
            None => {
                log::trace!("spring {} has coincident endpoints, skipping", index);
                skipped += 1;
            }
        }
    }
    skipped
}
