//! Procedural placement of the ornament population
//!
//! Every ornament gets two anchors: a point on a spiral that winds up a
//! cone (the formed tree) and a point on a thick spherical shell around it
//! (the chaos cloud).

mod params;
mod generator;

pub use params::PlacementParams;
pub use generator::{PlacementGenerator, PlacementError, sample_height_norm};
