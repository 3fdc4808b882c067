//! Row-major 4×4 / 3×3 matrix helpers
//!
//! Homogeneous transformation utilities over `lin_alg`'s fixed-size types,
//! following PyMOL's row-major matrix conventions. All shapes here are fixed
//! at 3 or 4; no dynamic arrays.

use lin_alg::f32::{Mat4, Vec3};

/// Embed a 3×3 rotation/scale block into a homogeneous 4×4 matrix
/// (zero translation, unit bottom-right)
pub fn mat3x3_to_mat4(m: &[f32; 9]) -> Mat4 {
    Mat4 {
        data: [
            m[0], m[1], m[2], 0.0, //
            m[3], m[4], m[5], 0.0, //
            m[6], m[7], m[8], 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    }
}

/// Multiply two row-major 4×4 matrices: result = left * right
pub fn mul_mat4(left: &Mat4, right: &Mat4) -> Mat4 {
    let l = &left.data;
    let r = &right.data;
    let mut out = [0.0f32; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = l[row * 4] * r[col]
                + l[row * 4 + 1] * r[4 + col]
                + l[row * 4 + 2] * r[8 + col]
                + l[row * 4 + 3] * r[12 + col];
        }
    }
    Mat4 { data: out }
}

/// Apply an affine matrix to a point, translation included (w = 1)
pub fn transform_mat4(m: &Mat4, v: Vec3) -> Vec3 {
    Vec3::new(
        m.data[0] * v.x + m.data[1] * v.y + m.data[2] * v.z + m.data[3],
        m.data[4] * v.x + m.data[5] * v.y + m.data[6] * v.z + m.data[7],
        m.data[8] * v.x + m.data[9] * v.y + m.data[10] * v.z + m.data[11],
    )
}

/// Read the translation column of a row-major 4×4 matrix
pub fn translation_of(m: &Mat4) -> Vec3 {
    Vec3::new(m.data[3], m.data[7], m.data[11])
}

/// Whether a transform is the identity within a small tolerance
pub fn is_identity_mat4(m: &Mat4) -> bool {
    m.data.iter().enumerate().all(|(idx, v)| {
        // Diagonal entries sit at every fifth slot of the row-major data
        let expect = if idx % 5 == 0 { 1.0 } else { 0.0 };
        (v - expect).abs() < 1e-4
    })
}

/// Invert a 3×3 row-major matrix using Cramer's rule
///
/// Returns `None` if the determinant is (numerically) zero.
pub fn invert_3x3(m: &[f32; 9]) -> Option<[f32; 9]> {
    let [a, b, c, d, e, f, g, h, i] = *m;

    let det = a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g);
    if det.abs() < 1e-30 {
        return None;
    }
    let inv_det = 1.0 / det;

    Some([
        (e * i - f * h) * inv_det,
        (c * h - b * i) * inv_det,
        (b * f - c * e) * inv_det,
        (f * g - d * i) * inv_det,
        (a * i - c * g) * inv_det,
        (c * d - a * f) * inv_det,
        (d * h - e * g) * inv_det,
        (b * g - a * h) * inv_det,
        (a * e - b * d) * inv_det,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3x3_to_mat4() {
        let m3 = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let m4 = mat3x3_to_mat4(&m3);
        assert_eq!(m4.data[0], 1.0);
        assert_eq!(m4.data[6], 6.0);
        assert_eq!(m4.data[3], 0.0); // col 3
        assert_eq!(m4.data[12], 0.0); // row 3
        assert_eq!(m4.data[15], 1.0);
    }

    fn shift_by(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4 {
            data: [
                1.0, 0.0, 0.0, x, //
                0.0, 1.0, 0.0, y, //
                0.0, 0.0, 1.0, z, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    #[test]
    fn test_mul_identity() {
        let id = mat3x3_to_mat4(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let t = shift_by(1.0, 2.0, 3.0);
        let out = mul_mat4(&id, &t);
        assert_eq!(out.data, t.data);
        assert!(is_identity_mat4(&mul_mat4(&id, &id)));
    }

    #[test]
    fn test_transform_with_translation() {
        let t = shift_by(1.0, 2.0, 3.0);
        let v = transform_mat4(&t, Vec3::new(10.0, 20.0, 30.0));
        assert_eq!((v.x, v.y, v.z), (11.0, 22.0, 33.0));
        let back = translation_of(&t);
        assert_eq!((back.x, back.y, back.z), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_invert_3x3() {
        // Upper triangular, the shape a cell basis takes
        let m = [2.0, 1.0, 0.5, 0.0, 3.0, 0.25, 0.0, 0.0, 4.0];
        let inv = invert_3x3(&m).unwrap();
        // m * inv should be identity
        let mut prod = [0.0f32; 9];
        for r in 0..3 {
            for c in 0..3 {
                prod[r * 3 + c] = (0..3).map(|k| m[r * 3 + k] * inv[k * 3 + c]).sum();
            }
        }
        for (idx, v) in prod.iter().enumerate() {
            let expect = if idx % 4 == 0 { 1.0 } else { 0.0 };
            assert!((v - expect).abs() < 1e-5, "prod[{}] = {}", idx, v);
        }
    }

    #[test]
    fn test_invert_singular() {
        assert!(invert_3x3(&[1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0, 0.0, 0.0]).is_none());
    }
}
