//! Symmetry operation triplet parsing
//!
//! Symmetry tables express operators as xyz triplets like `"-x+1/2,y,-z"`
//! (one comma-separated expression per row). This parses a triplet into a
//! 4×4 row-major matrix in fractional coordinates. Malformed input is a hard
//! error; the table is trusted data and silence would hide corruption.

use lin_alg::f32::Mat4;

use crate::error::{CellError, CellResult};

/// Parse an xyz triplet like `"-x+1/2,y,-z"` into a fractional-space matrix.
///
/// Each component defines one row of the 3×3 rotation part plus its
/// translation: `-x+1/2` means coefficient -1 for x and translation 1/2.
pub fn parse_symop(op: &str) -> CellResult<Mat4> {
    let rows: Vec<&str> = op.split(',').collect();
    if rows.len() != 3 {
        return Err(CellError::bad_symop(
            op,
            format!("expected 3 components, got {}", rows.len()),
        ));
    }

    let mut mat = [0.0f32; 16];
    mat[15] = 1.0;

    for (row, expr) in rows.iter().enumerate() {
        let (coeffs, trans) = parse_component(op, expr.trim())?;
        mat[row * 4] = coeffs[0];
        mat[row * 4 + 1] = coeffs[1];
        mat[row * 4 + 2] = coeffs[2];
        mat[row * 4 + 3] = trans;
    }

    Ok(Mat4 { data: mat })
}

/// Parse one component like `-x+1/2` or `y-z` into ([cx, cy, cz], translation)
fn parse_component(op: &str, expr: &str) -> CellResult<([f32; 3], f32)> {
    let mut coeffs = [0.0f32; 3];
    let mut trans = 0.0f32;
    let mut saw_term = false;

    let chars: Vec<char> = expr.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let sign = match chars[i] {
            '-' => {
                i += 1;
                -1.0
            }
            '+' => {
                i += 1;
                1.0
            }
            _ => 1.0,
        };

        let Some(&c) = chars.get(i) else {
            return Err(CellError::bad_symop(op, "dangling sign"));
        };

        match c {
            'x' | 'X' => {
                coeffs[0] += sign;
                i += 1;
            }
            'y' | 'Y' => {
                coeffs[1] += sign;
                i += 1;
            }
            'z' | 'Z' => {
                coeffs[2] += sign;
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let numerator: f32 = chars[start..i]
                    .iter()
                    .collect::<String>()
                    .parse()
                    .map_err(|_| CellError::bad_symop(op, "invalid number"))?;

                // Optional fraction denominator, e.g. 1/2
                let value = if chars.get(i) == Some(&'/') {
                    i += 1;
                    let start = i;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                    let denominator: f32 = chars[start..i]
                        .iter()
                        .collect::<String>()
                        .parse()
                        .map_err(|_| CellError::bad_symop(op, "invalid denominator"))?;
                    if denominator == 0.0 {
                        return Err(CellError::bad_symop(op, "zero denominator"));
                    }
                    numerator / denominator
                } else {
                    numerator
                };
                trans += sign * value;
            }
            ' ' => {
                i += 1;
                continue;
            }
            other => {
                return Err(CellError::bad_symop(
                    op,
                    format!("unexpected character '{}'", other),
                ));
            }
        }
        saw_term = true;
    }

    if !saw_term {
        return Err(CellError::bad_symop(op, "empty component"));
    }

    Ok((coeffs, trans))
}
