//! Uniform random polygons on a small lattice (replay tokens for
//! reproducibility).
//!
//! Model
//! - Draw a vertex count, then that many independent uniform lattice points.
//!   No dedup, no degeneracy retry: the sampler deliberately bypasses the
//!   incremental `propose` rule, so a drawn polygon may fail `is_complete()`.
//!   Callers that care must re-check completeness themselves.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;
use super::types::Coord;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Uniform lattice sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct UniformCfg {
    pub vertex_count: VertexCount,
    /// Coordinates are drawn from `0..=coord_max` on each axis independently.
    pub coord_max: i64,
}

impl Default for UniformCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 8 },
            coord_max: 10,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn draw_with<R: Rng>(cfg: UniformCfg, rng: &mut R) -> Polygon {
    let n = cfg.vertex_count.sample(rng);
    let hi = cfg.coord_max.max(0);
    let vertices = (0..n)
        .map(|_| Coord::new(rng.gen_range(0..=hi), rng.gen_range(0..=hi)))
        .collect();
    Polygon::from_vertices(vertices)
}

/// Draw a random polygon: `n` vertices, each uniform in the cfg's lattice box.
pub fn draw_polygon_uniform(cfg: UniformCfg, tok: ReplayToken) -> Polygon {
    draw_with(cfg, &mut tok.to_std_rng())
}

/// Default draw for callers without a replay token (entropy-seeded).
pub fn draw_polygon_default() -> Polygon {
    draw_with(UniformCfg::default(), &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = UniformCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_uniform(cfg, tok);
        let p2 = draw_polygon_uniform(cfg, tok);
        assert_eq!(p1, p2);
    }

    #[test]
    fn draws_stay_in_range() {
        let cfg = UniformCfg::default();
        for index in 0..200 {
            let p = draw_polygon_uniform(cfg, ReplayToken { seed: 9, index });
            assert!((3..=8).contains(&p.len()));
            for v in p.vertices() {
                assert!((0..=10).contains(&v.x));
                assert!((0..=10).contains(&v.y));
            }
        }
    }

    #[test]
    fn fixed_count_is_clamped_to_triangle() {
        let cfg = UniformCfg {
            vertex_count: VertexCount::Fixed(1),
            coord_max: 10,
        };
        let p = draw_polygon_uniform(cfg, ReplayToken { seed: 0, index: 0 });
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn default_draw_in_range() {
        let p = draw_polygon_default();
        assert!((3..=8).contains(&p.len()));
        for v in p.vertices() {
            assert!((0..=10).contains(&v.x));
            assert!((0..=10).contains(&v.y));
        }
    }
}
