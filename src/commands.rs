//! Supercell and symmetry mate drivers
//!
//! High-level routines tying the pure cell math to the injected [`Host`]
//! boundary: fetch symmetry, build the basis, enumerate replica cells, and
//! hand wireframe geometry and placed duplicates back to the host.

use lin_alg::f32::Vec3;

use crate::cell::CrystalBasis;
use crate::error::CellResult;
use crate::host::{ColorSpec, Host};
use crate::lattice::{cell_edge_segments, enumerate_cells, LatticeOffset};
use crate::primitives::{Primitive, Segment};
use crate::symmetry::place_symmetry_mates;

/// Result of a supercell construction
#[derive(Debug, Clone)]
pub struct SupercellGeometry {
    /// Wireframe edges for every replica cell, in replica order
    pub segments: Vec<Segment>,
    /// Number of symmetry mate objects created via the host
    pub mates: usize,
}

impl SupercellGeometry {
    /// The wireframe as a draw list of line primitives in a single color,
    /// ready to hand to the host
    pub fn wire_primitives(&self, color: [f32; 3]) -> Vec<Primitive> {
        self.segments
            .iter()
            .map(|s| Primitive::Line {
                start: s.start,
                end: s.end,
                color,
            })
            .collect()
    }
}

/// Create all symmetry mates of `object` for one replica cell.
///
/// New objects are named `{prefix}{n}` with `n` the 1-based operator index,
/// and colored by palette index `n + 1` so mates are distinguishable at a
/// glance. Returns the number of mates created; zero operators (unknown or
/// symmetry-free space group) is a valid empty result.
pub fn symexp_cell<H: Host + ?Sized>(
    host: &mut H,
    prefix: &str,
    object: &str,
    offset: LatticeOffset,
) -> CellResult<usize> {
    let sym = host.get_symmetry(object)?;
    let basis = CrystalBasis::build(&sym.cell)?;
    let operators = host.symmetry_operators(&sym.space_group)?;
    let center = object_center(host, object)?;

    let copies = place_symmetry_mates(&basis, &operators, center, offset);
    let count = copies.len();

    for copy in &copies {
        let name = format!("{}{}", prefix, copy.operator_index);
        host.duplicate_and_transform(&name, object, &copy.transform)?;
        host.color_object(&name, ColorSpec::Index(copy.operator_index as u32 + 1))?;
    }

    log::debug!(
        "symexp_cell: {} mates of '{}' in cell ({}, {}, {})",
        count,
        object,
        offset.a,
        offset.b,
        offset.c
    );
    Ok(count)
}

/// Build an `na` × `nb` × `nc` supercell around `object`.
///
/// Returns the wireframe segments for every replica cell (row-major replica
/// order, 12 segments each) for the caller to draw. With `with_mates`, also
/// creates the symmetry mates of each replica via the host, named
/// `m{i}{j}{k}_{n}`.
pub fn supercell<H: Host + ?Sized>(
    host: &mut H,
    object: &str,
    repeats: [u32; 3],
    with_mates: bool,
) -> CellResult<SupercellGeometry> {
    let sym = host.get_symmetry(object)?;
    let basis = CrystalBasis::build(&sym.cell)?;

    // Fetch once; each replica reuses the same operators and center
    let operators = if with_mates {
        host.symmetry_operators(&sym.space_group)?
    } else {
        Vec::new()
    };
    let center = if with_mates {
        object_center(host, object)?
    } else {
        Vec3::new(0.0, 0.0, 0.0)
    };

    let mut segments = Vec::new();
    let mut mates = 0;

    for offset in enumerate_cells(repeats) {
        segments.extend(cell_edge_segments(&basis, offset));

        if with_mates {
            for copy in place_symmetry_mates(&basis, &operators, center, offset) {
                let name = format!(
                    "m{}{}{}_{}",
                    offset.a, offset.b, offset.c, copy.operator_index
                );
                host.duplicate_and_transform(&name, object, &copy.transform)?;
                host.color_object(&name, ColorSpec::Index(copy.operator_index as u32 + 1))?;
                mates += 1;
            }
        }
    }

    log::info!(
        "supercell: {}x{}x{} cells of '{}', {} segments, {} mates",
        repeats[0],
        repeats[1],
        repeats[2],
        object,
        segments.len(),
        mates
    );
    Ok(SupercellGeometry { segments, mates })
}

fn object_center<H: Host + ?Sized>(host: &H, object: &str) -> CellResult<Vec3> {
    let (min, max) = host.get_extent(object)?;
    Ok((min + max) * 0.5)
}
