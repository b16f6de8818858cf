//! `slabform` is a library to compute formwork part layouts for building slabs.
//! Given a working rectangle, a slab outline and a selection of parts from a
//! catalog, it generates the placement points for every part category of the
//! assembly: casts, joists (lp), beams (ld), edge beams (lds) and head pieces.
//!
//! All placement categories are derived from one rotated lattice model and
//! computed in parallel by the [`layout::orchestrator`].

/// Entities modelling parts, layout options and results
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing slab instances into and exporting layouts out of this library
pub mod io;

/// The layout engine itself: lattice generation, placement strategies and orchestration
pub mod layout;

/// Helper functions which do not belong to any specific module
pub mod util;
