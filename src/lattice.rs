//! Cubic mass lattice (volumetric soft block).

use crate::boundary::Boundary;
use crate::float::Float;
use crate::mass::Mass;
use crate::scene::Scene;
use crate::spring::Spring;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Configuration for an `n x n x n` lattice of free masses.
///
/// Each in-layer diagonal gets exactly one shear spring. A lattice that pushed
/// every diagonal once per node visit would be roughly 26 times stiffer in shear
/// and sag less on landing; raise `shear_stiffness` to reproduce that.
pub struct LatticeConfig<F: Float> {
    pub size: usize,
    pub spacing: F,
    pub particle_mass: F,
    pub stiffness: F,
    pub shear_stiffness: F,
}

impl<F: Float> Default for LatticeConfig<F> {
    fn default() -> Self {
        LatticeConfig {
            size: 3,
            spacing: F::from_f32(5.0),
            particle_mass: F::from_f32(0.5),
            stiffness: F::from_f32(10.0),
            shear_stiffness: F::from_f32(8.0),
        }
    }
}

impl<F: Float> LatticeConfig<F> {
    /// Build the lattice.
    ///
    /// Mass `(layer, row, col)` has index `layer * n^2 + row * n + col` and sits
    /// at `(col, -row, -layer) * spacing`, so rows run downwards and layers run
    /// into the screen.
    ///
    /// Springs:
    /// - Structural: next column, next row, next layer (rest = spacing)
    /// - Shear: in-layer diagonals down-right and down-left (rest = spacing * sqrt(2))
    pub fn build(&self) -> Scene<F> {
        let n = self.size.max(1);
        let layer = n * n;
        let spacing = self.spacing;
        let mut masses = AllocVec::with_capacity(layer * n);
        let mut springs = AllocVec::new();

        for l in 0..n {
            for row in 0..n {
                for col in 0..n {
                    let pos = Vec3::new(
                        F::from_usize(col) * spacing,
                        -(F::from_usize(row) * spacing),
                        -(F::from_usize(l) * spacing),
                    );
                    masses.push(Mass::new(pos, self.particle_mass));
                }
            }
        }

        let diag_length = (spacing * spacing + spacing * spacing).sqrt();

        // Structural within a layer: right and down neighbours
        for i in 0..masses.len() {
            let (row, col) = ((i % layer) / n, i % n);
            if col + 1 < n {
                springs.push(Spring::new(i, i + 1, self.stiffness, spacing));
            }
            if row + 1 < n {
                springs.push(Spring::new(i, i + n, self.stiffness, spacing));
            }
        }

        // Structural between layers
        for i in 0..(masses.len() - layer) {
            springs.push(Spring::new(i, i + layer, self.stiffness, spacing));
        }

        // Shear: down-right
        for i in 0..masses.len() {
            let (row, col) = ((i % layer) / n, i % n);
            if row + 1 < n && col + 1 < n {
                springs.push(Spring::new(i, i + n + 1, self.shear_stiffness, diag_length));
            }
        }

        // Shear: down-left
        for i in 0..masses.len() {
            let (row, col) = ((i % layer) / n, i % n);
            if row + 1 < n && col > 0 {
                springs.push(Spring::new(i, i + n - 1, self.shear_stiffness, diag_length));
            }
        }

        Scene::from_parts(masses, springs, Boundary::Free)
    }
}
