//! Symmetry mate placement
//!
//! Given a cell basis and the space group's symmetry operations (4×4 affine
//! matrices in fractional coordinates), compute the model-space transform
//! placing each symmetry mate inside a requested replica cell. The wrap rule
//! keeps the copy whose bounding-box center falls within that cell.

use lin_alg::f32::{Mat4, Vec3};

use crate::cell::CrystalBasis;
use crate::lattice::LatticeOffset;
use crate::linalg::{mul_mat4, transform_mat4};

/// Fractional centers within this distance of an integer sit on a cell
/// boundary; they are snapped before the floor so the wrap pulls them toward
/// the origin cell regardless of which side f32 rounding landed them on.
const WRAP_EPS: f32 = 1e-4;

/// Model-space placement for one symmetry mate
#[derive(Debug, Clone)]
pub struct PlacedCopy {
    /// Row-major 4×4 transform to apply to a duplicate of the source object
    pub transform: Mat4,
    /// 1-based position of the operator in the space group table; used for
    /// deterministic naming and coloring only
    pub operator_index: usize,
}

/// Place every symmetry mate of one replica cell.
///
/// `operators` are fractional-coordinate matrices in space group table order,
/// which is preserved in the output. `center` is the Cartesian center of the
/// source object (bounding-box midpoint). An empty operator list yields an
/// empty result; a cell with no mates is valid.
pub fn place_symmetry_mates(
    basis: &CrystalBasis,
    operators: &[Mat4],
    center: Vec3,
    offset: LatticeOffset,
) -> Vec<PlacedCopy> {
    let center_frac = basis.to_fractional(center);

    operators
        .iter()
        .enumerate()
        .map(|(i, op)| {
            // Wrap the transformed center back into the origin cell, then
            // shift into the target replica.
            let moved = transform_mat4(op, center_frac);
            let wrap = Vec3::new(
                floor_snapped(moved.x),
                floor_snapped(moved.y),
                floor_snapped(moved.z),
            );

            let mut adjusted = op.clone();
            adjusted.data[3] += offset.a as f32 - wrap.x;
            adjusted.data[7] += offset.b as f32 - wrap.y;
            adjusted.data[11] += offset.c as f32 - wrap.z;

            // Conjugate the fractional operator into model space
            let transform = mul_mat4(basis.matrix(), &mul_mat4(&adjusted, basis.inverse()));

            PlacedCopy {
                transform,
                operator_index: i + 1,
            }
        })
        .collect()
}

/// Floor with boundary snapping: values within [`WRAP_EPS`] of an integer
/// floor to that integer, whichever side of it they fall on.
fn floor_snapped(v: f32) -> f32 {
    let nearest = v.round();
    if (v - nearest).abs() < WRAP_EPS {
        nearest
    } else {
        v.floor()
    }
}
