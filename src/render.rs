//! Flat vertex lists for a renderer.
//!
//! Nothing here touches a graphics API; these just lay out the scene's current
//! state the way a triangle/line batch expects it.

use crate::float::Float;
use crate::scene::Scene;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Two triangles per mass: a `width`-sized square in the xy-plane centred on it.
pub fn quad_vertices<F: Float>(positions: &[Vec3<F>], width: F) -> AllocVec<Vec3<F>> {
    let h = width * F::half();
    let mut verts = AllocVec::with_capacity(positions.len() * 6);
    for p in positions {
        let corner = |dx: F, dy: F| Vec3::new(p.x + dx, p.y + dy, p.z);
        verts.push(corner(-h, -h));
        verts.push(corner(-h, h));
        verts.push(corner(h, h));
        verts.push(corner(h, h));
        verts.push(corner(h, -h));
        verts.push(corner(-h, -h));
    }
    verts
}

/// Two vertices per spring, its endpoints, in spring order.
pub fn line_vertices<F: Float>(scene: &Scene<F>) -> AllocVec<Vec3<F>> {
    let mut verts = AllocVec::with_capacity(scene.spring_count() * 2);
    for (a, b) in scene.spring_endpoints() {
        verts.push(a);
        verts.push(b);
    }
    verts
}

/// `[x0, y0, z0, x1, y1, z1, ...]`
pub fn flatten<F: Float>(vertices: &[Vec3<F>]) -> AllocVec<F> {
    vertices.iter().flat_map(|v| [v.x, v.y, v.z]).collect()
}
