//! Cloth grids with structural and shear springs.

use crate::boundary::Boundary;
use crate::float::Float;
use crate::mass::Mass;
use crate::scene::Scene;
use crate::spring::Spring;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Initial shape of a cloth grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClothLayout<F: Float> {
    /// Hanging sheet. Each row is lifted by its column offset, so the sheet
    /// starts slanted, and every mass is pushed `depth_step` further along -Z
    /// than the one before it.
    Draped { depth_step: F },
    /// Horizontal sheet at `y = 0`, rows running along -Z.
    Flat,
}

/// Configuration for a cloth grid.
pub struct ClothConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub spacing: F,
    pub structural_stiffness: F,
    pub shear_stiffness: F,
    pub particle_mass: F,
    pub layout: ClothLayout<F>,
    pub pin_top_row: bool,
}

impl<F: Float> ClothConfig<F> {
    /// 50x50 sheet hanging from its first row.
    pub fn draped() -> Self {
        ClothConfig {
            cols: 50,
            rows: 50,
            spacing: F::two(),
            structural_stiffness: F::from_f32(50.0),
            shear_stiffness: F::from_f32(45.0),
            particle_mass: F::from_f32(0.5),
            layout: ClothLayout::Draped { depth_step: F::from_f32(0.1) },
            pin_top_row: true,
        }
    }

    /// 50x50 flat sheet with nothing pinned.
    pub fn falling() -> Self {
        ClothConfig { layout: ClothLayout::Flat, pin_top_row: false, ..Self::draped() }
    }

    /// Index of the mass at `(col, row)`.
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    fn position(&self, col: usize, row: usize) -> Vec3<F> {
        let x = F::from_usize(col) * self.spacing;
        let down = F::from_usize(row) * self.spacing;
        match self.layout {
            ClothLayout::Draped { depth_step } => {
                let z = -(F::from_usize(self.index(col, row)) * depth_step);
                Vec3::new(x, x - down, z)
            }
            ClothLayout::Flat => Vec3::new(x, F::zero(), -down),
        }
    }

    /// Build the grid. Mass `(col, row)` has index `row * cols + col`.
    ///
    /// Creates 2 types of springs:
    /// - Structural: horizontal + vertical neighbours (rest = spacing)
    /// - Shear: both diagonals of every cell (rest = spacing * sqrt(2))
    ///
    /// Walking the masses in index order, each one emits its rightward spring,
    /// then its down-right and down-left diagonals. All vertical springs follow
    /// at the end.
    pub fn build(&self) -> Scene<F> {
        let cols = self.cols.max(1);
        let rows = self.rows.max(1);
        let spacing = self.spacing;
        let mut masses = AllocVec::with_capacity(cols * rows);
        let mut springs = AllocVec::new();

        for row in 0..rows {
            for col in 0..cols {
                let pos = self.position(col, row);
                if row == 0 && self.pin_top_row {
                    masses.push(Mass::fixed(pos, self.particle_mass));
                } else {
                    masses.push(Mass::new(pos, self.particle_mass));
                }
            }
        }

        let diag_length = (spacing * spacing + spacing * spacing).sqrt();

        // Horizontal and shear, interleaved per mass
        for row in 0..rows {
            for col in 0..cols {
                let a = row * cols + col;
                let has_below = row + 1 < rows;
                if col + 1 < cols {
                    springs.push(Spring::new(a, a + 1, self.structural_stiffness, spacing));
                    if has_below {
                        springs.push(Spring::new(a, a + cols + 1, self.shear_stiffness, diag_length));
                    }
                }
                if has_below && col > 0 {
                    springs.push(Spring::new(a, a + cols - 1, self.shear_stiffness, diag_length));
                }
            }
        }

        // Structural: vertical
        for a in 0..(cols * (rows - 1)) {
            springs.push(Spring::new(a, a + cols, self.structural_stiffness, spacing));
        }

        Scene::from_parts(masses, springs, Boundary::Free)
    }
}
