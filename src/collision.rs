//! Brute-force point proximity queries.

use crate::float::Float;
use crate::mass::Mass;
use crate::vec::Vec3;

/// Finds the first mass, other than `index`, whose current position lies
/// strictly within `tolerance` of `candidate` on every axis.
///
/// Scans all masses; there is no spatial index.
pub fn find_contact<F: Float>(
    index: usize,
    candidate: Vec3<F>,
    masses: &[Mass<F>],
    tolerance: F,
) -> Option<usize> {
    masses.iter().enumerate().position(|(j, other)| {
        j != index
            && candidate.x.within(other.position.x, tolerance)
            && candidate.y.within(other.position.y, tolerance)
            && candidate.z.within(other.position.z, tolerance)
    })
}
