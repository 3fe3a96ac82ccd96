//! Lattice coordinate type shared by the whole engine.

use nalgebra::Vector2;
use std::fmt;

/// Integer lattice coordinate. Equality is structural, so `Coord` works as a
/// duplicate-detection key inside `Polygon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// f64 view for area and intercept arithmetic.
    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl From<(i64, i64)> for Coord {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
