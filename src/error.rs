//! Error types for scene construction and selection.

use core::fmt;

/// Errors that can occur when selecting or assembling a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Scene number is not one of the presets (1 through 5).
    UnknownScene(u8),
    /// A free mass must have positive, finite mass.
    InvalidMass { index: usize },
    /// A spring endpoint does not name a mass in the scene.
    MassOutOfBounds { index: usize, count: usize },
    /// A spring connects a mass to itself.
    SelfSpring { index: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::UnknownScene(n) => write!(f, "unknown scene {} (expected 1 to 5)", n),
            PhysicsError::InvalidMass { index } => {
                write!(f, "mass {} must be positive and finite", index)
            }
            PhysicsError::MassOutOfBounds { index, count } => {
                write!(f, "mass index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::SelfSpring { index } => {
                write!(f, "spring {} connects a mass to itself", index)
            }
        }
    }
}
