//! Crystallographic cell visualization helpers
//!
//! Cell-axes and supercell construction for a molecular-graphics host:
//!
//! - [`CrystalBasis`] - unit cell parameters to fractional↔Cartesian basis
//! - [`enumerate_cells`] / [`cell_edge_segments`] - supercell lattice and
//!   wireframe geometry
//! - [`place_symmetry_mates`] - model-space transforms placing space group
//!   symmetry mates inside each replica cell
//! - [`cell_axes_primitives`] - VMD-style axis arrow geometry
//! - [`Host`] - the injected boundary to the embedding application's scene
//!   graph; [`supercell`] and [`symexp_cell`] drive it
//!
//! The math core is pure and synchronous; everything stateful (scene
//! registry, camera, drawing, the symmetry table) lives behind [`Host`].
//!
//! # Example
//!
//! ```ignore
//! use pymol_supercell::{supercell, Host};
//!
//! // host implements Host for the embedding application
//! let geometry = supercell(&mut host, "1abc", [2, 2, 2], true)?;
//! draw_lines(&geometry.segments);
//! ```

pub mod axes;
pub mod cell;
pub mod commands;
pub mod error;
pub mod host;
pub mod lattice;
pub mod linalg;
pub mod primitives;
pub mod symmetry;
pub mod symop;
pub mod view;

pub use axes::{cell_axes_primitives, AxisColors};
pub use cell::{CellParameters, CrystalBasis};
pub use commands::{supercell, symexp_cell, SupercellGeometry};
pub use error::{CellError, CellResult, HostError};
pub use host::{ColorSpec, Host, SymmetryInfo};
pub use lattice::{cell_edge_segments, enumerate_cells, LatticeOffset};
pub use primitives::{Primitive, Segment};
pub use symmetry::{place_symmetry_mates, PlacedCopy};
pub use symop::parse_symop;
pub use view::{ViewState, ViewTracker};
