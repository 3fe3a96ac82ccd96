//! Shoelace area and the validity rule derived from it.
//!
//! Both functions are total: any slice, including the empty one, yields a
//! finite non-negative answer. Fewer than 3 vertices always gives area 0,
//! which callers rely on (`is_valid_shape` is the completeness gate).

use super::types::Coord;

/// Absolute shoelace area of the closed traversal of `coords`.
///
/// The polygon is implicitly closed from the last vertex back to the first.
/// Vertex order matters: a self-intersecting order can cancel cross terms and
/// report a smaller (possibly zero) area.
pub fn shoelace_area(coords: &[Coord]) -> f64 {
    let n = coords.len();
    let mut acc = 0.0_f64;
    for i in 0..n {
        let p = coords[i].to_vec();
        let q = coords[(i + 1) % n].to_vec();
        acc += p.x * q.y - q.x * p.y;
    }
    (acc / 2.0).abs()
}

/// Area-based degeneracy check: true iff the shoelace area is non-zero.
///
/// Not a simple-polygon test. A self-intersecting vertex order with non-zero
/// area passes; collinear or coincident points (and any list shorter than 3)
/// fail.
#[inline]
pub fn is_valid_shape(coords: &[Coord]) -> bool {
    shoelace_area(coords) > 0.0
}
