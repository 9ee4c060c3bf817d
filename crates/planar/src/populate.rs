//! Uniform random points inside a polygon (rejection sampling).
//!
//! Model
//! - Draw uniformly in the polygon's bounding box; keep a draw iff it lies in
//!   the polygon (closed) and in none of the `exclude` polygons.
//! - Determinism: a seed fixes the `StdRng` stream and sampling is serial, so
//!   the same `(polygon, count, seed, exclude)` always returns the same points.
//!
//! Liveness
//! - Acceptance probability is `area(polygon \ excludes) / area(bbox)`. For
//!   near-degenerate inputs this can be arbitrarily small, so the loop gives up
//!   after `max_consecutive_rejections` misses in a row. `None` disables the cap.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::polygon::Polygon;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PopulateCfg {
    pub max_consecutive_rejections: Option<u64>,
}

impl Default for PopulateCfg {
    fn default() -> Self {
        Self {
            max_consecutive_rejections: Some(1_000_000),
        }
    }
}

/// Exactly `count` uniform points inside `polygon` and outside every `exclude` polygon.
///
/// `seed = None` seeds from OS entropy.
pub fn populate(
    polygon: &Polygon,
    count: usize,
    seed: Option<u64>,
    exclude: &[Polygon],
    cfg: PopulateCfg,
) -> Result<Vec<Vector2<f64>>> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    populate_with_rng(polygon, count, exclude, cfg, &mut rng)
}

/// Same as [`populate`] but draws from a caller-provided RNG.
pub fn populate_with_rng<R: Rng>(
    polygon: &Polygon,
    count: usize,
    exclude: &[Polygon],
    cfg: PopulateCfg,
    rng: &mut R,
) -> Result<Vec<Vector2<f64>>> {
    let bb = polygon.bbox();
    let mut points = Vec::with_capacity(count);
    let mut rejections = 0u64;
    let mut draws = 0u64;
    while points.len() < count {
        let p = Vector2::new(
            lerp(bb.min.x, bb.max.x, rng.gen_range(0.0..=1.0)),
            lerp(bb.min.y, bb.max.y, rng.gen_range(0.0..=1.0)),
        );
        draws += 1;
        if accepts(polygon, exclude, p) {
            points.push(p);
            rejections = 0;
            continue;
        }
        rejections += 1;
        if let Some(cap) = cfg.max_consecutive_rejections {
            if rejections >= cap {
                tracing::warn!(
                    accepted = points.len(),
                    requested = count,
                    rejections,
                    "rejection sampling gave up"
                );
                return Err(Error::SamplingExhausted {
                    accepted: points.len(),
                    requested: count,
                    rejections,
                });
            }
        }
    }
    tracing::debug!(count, draws, excludes = exclude.len(), "populate");
    Ok(points)
}

/// Stays finite and within `[lo, hi]` for any finite bounds, even when
/// `hi - lo` overflows.
#[inline]
fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    (lo * (1.0 - t) + hi * t).clamp(lo, hi)
}

#[inline]
fn accepts(polygon: &Polygon, exclude: &[Polygon], p: Vector2<f64>) -> bool {
    polygon.contains(p, true) && !exclude.iter().any(|ex| ex.contains(p, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::from_xy(&[[x0, y0], [x1, y0], [x1, y1], [x0, y1]]).unwrap()
    }

    fn triangle() -> Polygon {
        Polygon::from_xy(&[[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]).unwrap()
    }

    #[test]
    fn returns_exactly_count_points_inside() {
        let tri = triangle();
        let pts = populate(&tri, 200, Some(7), &[], PopulateCfg::default()).unwrap();
        assert_eq!(pts.len(), 200);
        assert!(pts.iter().all(|p| tri.contains(*p, true)));
    }

    #[test]
    fn excluded_holes_stay_empty() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        let holes = [rect(2.0, 2.0, 5.0, 5.0), rect(6.0, 6.0, 9.0, 8.0)];
        let pts = populate(&outer, 500, Some(11), &holes, PopulateCfg::default()).unwrap();
        assert_eq!(pts.len(), 500);
        for p in &pts {
            assert!(outer.contains(*p, true));
            assert!(holes.iter().all(|h| !h.contains(*p, true)), "{p:?} in hole");
        }
    }

    #[test]
    fn seed_makes_draws_reproducible() {
        let tri = triangle();
        let a = populate(&tri, 50, Some(42), &[], PopulateCfg::default()).unwrap();
        let b = populate(&tri, 50, Some(42), &[], PopulateCfg::default()).unwrap();
        let c = populate(&tri, 50, Some(43), &[], PopulateCfg::default()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn bounds_wider_than_f64_range_still_sample() {
        let huge = rect(-1e308, -1e308, 1e308, 1e308);
        assert!(huge.bbox().width().is_infinite());
        let pts = populate(&huge, 3, Some(1), &[], PopulateCfg::default()).unwrap();
        assert_eq!(pts.len(), 3);
        for p in &pts {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!(huge.bbox().contains(*p));
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let pts = populate(&triangle(), 0, None, &[], PopulateCfg::default()).unwrap();
        assert!(pts.is_empty());
    }

    #[test]
    fn fully_excluded_polygon_hits_the_cap() {
        let sq = rect(0.0, 0.0, 1.0, 1.0);
        let cfg = PopulateCfg {
            max_consecutive_rejections: Some(1_000),
        };
        let err = populate(&sq, 3, Some(1), &[sq.clone()], cfg).unwrap_err();
        match err {
            Error::SamplingExhausted {
                accepted,
                requested,
                rejections,
            } => {
                assert_eq!(accepted, 0);
                assert_eq!(requested, 3);
                assert_eq!(rejections, 1_000);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
