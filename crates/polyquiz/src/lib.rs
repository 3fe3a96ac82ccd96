//! Polygon puzzle engine.
//!
//! Core pieces
//! - `geom::area`: shoelace area and the area-based shape validity check.
//! - `geom::Polygon`: incremental polygon construction and the ray-cast
//!   point-in-polygon query.
//! - `geom::rand`: uniform random polygon sampler with replay tokens.
//!
//! The interactive shell lives in the sibling `cli` crate and talks to this
//! crate only through `Polygon` and `geom::rand`.

pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{
        draw_polygon_default, draw_polygon_uniform, ReplayToken, UniformCfg, VertexCount,
    };
    pub use crate::geom::{is_valid_shape, shoelace_area, Coord, Polygon};
}
