//! Periodic lattice enumeration and cell wireframe geometry

use lin_alg::f32::Vec3;

use crate::cell::CrystalBasis;
use crate::primitives::Segment;

/// Integer offset identifying one periodic replica of the unit cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticeOffset {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl LatticeOffset {
    pub const ORIGIN: LatticeOffset = LatticeOffset { a: 0, b: 0, c: 0 };

    pub fn new(a: i32, b: i32, c: i32) -> Self {
        LatticeOffset { a, b, c }
    }

    /// The offset as a fractional-coordinate vector
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.a as f32, self.b as f32, self.c as f32)
    }
}

/// Enumerate every replica of an `na` × `nb` × `nc` supercell.
///
/// Lazy and restartable (clone the iterator to restart). Row-major order
/// with `a` outermost and `c` innermost; callers derive object names from
/// this order, so it must stay fixed.
pub fn enumerate_cells(repeats: [u32; 3]) -> impl Iterator<Item = LatticeOffset> + Clone {
    let [na, nb, nc] = repeats;
    (0..na).flat_map(move |i| {
        (0..nb).flat_map(move |j| {
            (0..nc).map(move |k| LatticeOffset::new(i as i32, j as i32, k as i32))
        })
    })
}

/// Wireframe edges of one unit cell replica.
///
/// Twelve segments (24 endpoints): for each axis direction, one edge from
/// each of the four corners spanned by the other two axes. The whole frame
/// is translated by `offset` cells.
pub fn cell_edge_segments(basis: &CrystalBasis, offset: LatticeOffset) -> Vec<Segment> {
    let axes = [basis.axis(0), basis.axis(1), basis.axis(2)];
    let shift = basis.to_cartesian(offset.as_vec3());

    let mut segments = Vec::with_capacity(12);
    for i in 0..3 {
        let vi = axes[i];
        let vj = axes[(i + 1) % 3];
        let vk = axes[(i + 2) % 3];
        let corners = [Vec3::new(0.0, 0.0, 0.0), vj, vk, vj + vk];
        for corner in corners {
            let start = shift + corner;
            segments.push(Segment::new(start, start + vi));
        }
    }
    segments
}
