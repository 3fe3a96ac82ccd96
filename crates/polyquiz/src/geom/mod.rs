//! 2D lattice geometry for the polygon puzzle.
//!
//! Purpose
//! - Provide a single mutable polygon type (`Polygon`) built vertex by vertex
//!   under a cumulative non-degeneracy rule, plus the stateless area checks it
//!   delegates to.
//! - Keep the API minimal: proposals either land or they don't, reported as a
//!   plain bool; nothing here panics on user-shaped input.
//!
//! Validity here means "non-zero shoelace area", not "simple polygon": a
//! self-intersecting vertex order with non-zero area still counts as valid.
//! Downstream behavior depends on exactly this rule, so it must not be
//! tightened.

mod area;
mod polygon;
pub mod rand;
mod types;

pub use area::{is_valid_shape, shoelace_area};
pub use polygon::Polygon;
pub use types::Coord;
