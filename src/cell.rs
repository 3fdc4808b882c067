//! Crystallographic unit cell basis
//!
//! Converts unit cell parameters (edge lengths a, b, c and angles alpha,
//! beta, gamma) into the 4×4 basis transformation mapping fractional lattice
//! coordinates to Cartesian model space. The math follows PyMOL's
//! `Crystal.cpp` fractional/real conversion, restricted to the triclinic
//! general case.

use lin_alg::f32::{Mat4, Vec3};

use crate::error::{CellError, CellResult};
use crate::linalg::{invert_3x3, mat3x3_to_mat4, transform_mat4};

/// Unit cell parameters as reported by the host's symmetry record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellParameters {
    /// Edge lengths (a, b, c) in Angstroms
    pub edges: [f32; 3],
    /// Inter-axial angles (alpha, beta, gamma) in degrees
    pub angles: [f32; 3],
}

impl CellParameters {
    pub fn new(edges: [f32; 3], angles: [f32; 3]) -> Self {
        CellParameters { edges, angles }
    }
}

/// Unit cell basis with precomputed forward and inverse transforms
///
/// The upper-left 3×3 block's columns are the Cartesian images of the unit
/// lattice vectors a, b, c; translation is identity. Immutable once built;
/// rebuild whenever cell parameters are re-read from the host.
#[derive(Debug, Clone)]
pub struct CrystalBasis {
    params: CellParameters,
    /// Fractional-to-Cartesian, row-major 4×4
    matrix: Mat4,
    /// Cartesian-to-fractional, row-major 4×4
    inverse: Mat4,
}

impl CrystalBasis {
    /// Build the basis transformation from cell parameters.
    ///
    /// Fails with a domain error on degenerate input: non-positive edges,
    /// `sin(gamma) == 0`, or an angle triple whose c-axis term has no real
    /// square root. NaN never propagates out of here.
    pub fn build(params: &CellParameters) -> CellResult<CrystalBasis> {
        let [a, b, c] = params.edges;
        let [alpha, beta, gamma] = params.angles;

        for (axis, value) in [('a', a), ('b', b), ('c', c)] {
            if !(value > 0.0) {
                return Err(CellError::NonPositiveEdge { axis, value });
            }
        }

        let cos_a = alpha.to_radians().cos();
        let cos_b = beta.to_radians().cos();
        let cos_g = gamma.to_radians().cos();
        let sin_g = gamma.to_radians().sin();

        // gamma of 0 or 180 degrees
        if sin_g.abs() < 1e-6 {
            return Err(CellError::DegenerateGamma { gamma });
        }

        // Column 0 is the unit x vector; columns 1 and 2 tilt b and c.
        let m01 = cos_g;
        let m11 = sin_g;
        let m02 = cos_b;
        let m12 = (cos_a - m01 * m02) / m11;

        let radicand = 1.0 - m02 * m02 - m12 * m12;
        if radicand < 0.0 {
            return Err(CellError::InvalidAngles { alpha, beta, gamma });
        }
        let m22 = radicand.sqrt();

        // Scale each column by its edge length (homogeneous entry stays 1)
        let m3 = [
            a, b * m01, c * m02, //
            0.0, b * m11, c * m12, //
            0.0, 0.0, c * m22,
        ];

        // Upper triangular with positive diagonal, so always invertible here
        let inv3 = invert_3x3(&m3).ok_or(CellError::InvalidAngles { alpha, beta, gamma })?;

        Ok(CrystalBasis {
            params: *params,
            matrix: mat3x3_to_mat4(&m3),
            inverse: mat3x3_to_mat4(&inv3),
        })
    }

    /// The cell parameters this basis was built from
    pub fn params(&self) -> &CellParameters {
        &self.params
    }

    /// Fractional-to-Cartesian transform (row-major 4×4)
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Cartesian-to-fractional transform (row-major 4×4)
    pub fn inverse(&self) -> &Mat4 {
        &self.inverse
    }

    /// Cartesian image of unit lattice vector `i` (0 = a, 1 = b, 2 = c)
    pub fn axis(&self, i: usize) -> Vec3 {
        let m = &self.matrix.data;
        Vec3::new(m[i], m[4 + i], m[8 + i])
    }

    /// Transform fractional coordinates to Cartesian model space
    pub fn to_cartesian(&self, frac: Vec3) -> Vec3 {
        transform_mat4(&self.matrix, frac)
    }

    /// Transform a Cartesian point to fractional coordinates
    pub fn to_fractional(&self, v: Vec3) -> Vec3 {
        transform_mat4(&self.inverse, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_cubic_cell_is_diagonal() {
        let params = CellParameters::new([10.0, 10.0, 10.0], [90.0, 90.0, 90.0]);
        let basis = CrystalBasis::build(&params).unwrap();
        let expect = [
            10.0, 0.0, 0.0, 0.0, //
            0.0, 10.0, 0.0, 0.0, //
            0.0, 0.0, 10.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        for (got, want) in basis.matrix().data.iter().zip(expect.iter()) {
            assert!(approx(*got, *want), "got {:?}", basis.matrix().data);
        }
    }

    #[test]
    fn test_column_norms_equal_edges() {
        let params = CellParameters::new([10.0, 20.0, 30.0], [83.0, 97.0, 105.0]);
        let basis = CrystalBasis::build(&params).unwrap();
        for (i, edge) in params.edges.iter().enumerate() {
            let v = basis.axis(i);
            let norm = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
            assert!(approx(norm, *edge), "axis {} norm {} != {}", i, norm, edge);
        }
    }

    #[test]
    fn test_fractional_round_trip_monoclinic() {
        let params = CellParameters::new([10.0, 20.0, 30.0], [90.0, 100.0, 90.0]);
        let basis = CrystalBasis::build(&params).unwrap();
        let v = Vec3::new(5.0, 10.0, 15.0);
        let frac = basis.to_fractional(v);
        let back = basis.to_cartesian(frac);
        assert!(approx(back.x, v.x));
        assert!(approx(back.y, v.y));
        assert!(approx(back.z, v.z));
    }

    #[test]
    fn test_gamma_zero_is_domain_error() {
        let params = CellParameters::new([10.0, 10.0, 10.0], [90.0, 90.0, 0.0]);
        assert!(matches!(
            CrystalBasis::build(&params),
            Err(CellError::DegenerateGamma { .. })
        ));
        let params = CellParameters::new([10.0, 10.0, 10.0], [90.0, 90.0, 180.0]);
        assert!(matches!(
            CrystalBasis::build(&params),
            Err(CellError::DegenerateGamma { .. })
        ));
    }

    #[test]
    fn test_impossible_angles_are_domain_error() {
        // alpha/beta near-collinear with gamma leaves no room for a real c axis
        let params = CellParameters::new([10.0, 10.0, 10.0], [170.0, 10.0, 90.0]);
        assert!(matches!(
            CrystalBasis::build(&params),
            Err(CellError::InvalidAngles { .. })
        ));
    }

    #[test]
    fn test_negative_edge_is_domain_error() {
        let params = CellParameters::new([10.0, -1.0, 10.0], [90.0, 90.0, 90.0]);
        assert!(matches!(
            CrystalBasis::build(&params),
            Err(CellError::NonPositiveEdge { axis: 'b', .. })
        ));
    }
}
