//! Injected host boundary
//!
//! The core never talks to a scene graph directly; everything it needs from
//! the molecular-graphics host comes through this trait. Host failures
//! (missing object, bad name) propagate unmodified as boxed errors; the core
//! neither retries nor suppresses them.

use lin_alg::f32::{Mat4, Vec3};

use crate::cell::CellParameters;
use crate::error::HostError;

/// Crystallographic symmetry record for one object
#[derive(Debug, Clone)]
pub struct SymmetryInfo {
    pub cell: CellParameters,
    pub space_group: String,
}

/// Color argument for the host's color command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// Host palette index
    Index(u32),
    /// Named or hex color resolved by the host
    Name(String),
}

/// Host-side operations the cell tools depend on.
///
/// Implemented by the embedding application (or a mock in tests) and passed
/// into the driver functions in [`crate::commands`].
pub trait Host {
    /// Cell parameters plus space group symbol for an object
    fn get_symmetry(&self, object: &str) -> Result<SymmetryInfo, HostError>;

    /// Ordered fractional-coordinate operator matrices for a space group.
    ///
    /// An unknown symbol may return an empty list; the placer treats that as
    /// a cell with no symmetry mates.
    fn symmetry_operators(&self, space_group: &str) -> Result<Vec<Mat4>, HostError>;

    /// Axis-aligned bounding box of an object as (min corner, max corner)
    fn get_extent(&self, object: &str) -> Result<(Vec3, Vec3), HostError>;

    /// Duplicate `source` under `name` and apply `transform` to the copy
    fn duplicate_and_transform(
        &mut self,
        name: &str,
        source: &str,
        transform: &Mat4,
    ) -> Result<(), HostError>;

    /// Color an object by palette index or name
    fn color_object(&mut self, object: &str, color: ColorSpec) -> Result<(), HostError>;
}
