//! Incrementally built polygon with a cumulative non-degeneracy invariant.
//!
//! Construction model
//! - Vertices arrive one at a time through `propose`. The first two are always
//!   accepted (no area is definable yet); from then on a candidate is accepted
//!   only if the whole list, candidate included, still has non-zero shoelace
//!   area. Duplicates are rejected outright at any length.
//! - The list never shrinks and there is no "locked" state: a complete polygon
//!   may keep growing through further accepted proposals.
//!
//! Queries
//! - `is_complete`: at least 3 vertices and non-zero area.
//! - `contains`: ray casting (horizontal ray to +x, crossing parity). Callers
//!   should only query a complete polygon; parity for points exactly on an
//!   edge is implementation-defined, as usual for ray casting.

use std::fmt;

use super::area::is_valid_shape;
use super::types::Coord;

/// Ordered vertex list; insertion order defines the boundary traversal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Coord>,
}

impl Polygon {
    /// Empty polygon, ready for incremental construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded polygon. Performs no validation; the random sampler and
    /// tests use this to bypass the incremental rule.
    pub fn from_vertices(vertices: Vec<Coord>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Coord] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Attempt to append `candidate`. Appends and returns true iff accepted;
    /// on rejection the vertex list is untouched.
    ///
    /// Rejection rules, in order:
    /// 1. `candidate` already present (structural equality).
    /// 2. The list already has >= 3 vertices and appending `candidate` would
    ///    drive the shoelace area to zero.
    pub fn propose(&mut self, candidate: Coord) -> bool {
        if self.vertices.contains(&candidate) {
            return false;
        }
        if self.vertices.len() >= 3 {
            let mut hypothetical = self.vertices.clone();
            hypothetical.push(candidate);
            if !is_valid_shape(&hypothetical) {
                return false;
            }
        }
        self.vertices.push(candidate);
        true
    }

    /// True once the list has at least 3 vertices and non-zero shoelace area.
    pub fn is_complete(&self) -> bool {
        self.vertices.len() >= 3 && is_valid_shape(&self.vertices)
    }

    /// Ray-cast containment query: parity of boundary crossings of the
    /// horizontal ray from `point` towards +x.
    ///
    /// Precondition (unguarded): the polygon is complete. Each vertex is
    /// paired with its previous neighbor, wrapping, so the boundary is closed.
    /// The straddle test guarantees distinct y values before the intercept
    /// division.
    pub fn contains(&self, point: Coord) -> bool {
        let n = self.vertices.len();
        let p = point.to_vec();
        let mut j = n.saturating_sub(1);
        let mut inside = false;
        for i in 0..n {
            let vi = self.vertices[i].to_vec();
            let vj = self.vertices[j].to_vec();
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// 1-indexed vertex listing, one per line, for the interactive shell.
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:{}", i + 1, v)?;
        }
        Ok(())
    }
}
