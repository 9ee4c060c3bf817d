//! Point-in-polygon classification by ray casting.
//!
//! Purpose
//! - Partition a batch of points into inside/outside of one polygon.
//! - Boundary points count as inside iff `closed` is true.
//!
//! Algorithm
//! - Fast reject against the polygon's bounding box.
//! - Walk edges in order; a point exactly on an edge (exact tolerance) is
//!   decided immediately. Otherwise toggle parity for every edge whose y-span
//!   straddles the point and whose x-intercept lies left of it.
//! - Each point is tagged independently (rayon for large batches), then a
//!   two-ended fill writes one index vector: inside indices at the front in
//!   scan order, outside indices at the back in reverse scan order.

use nalgebra::Vector2;
use rayon::prelude::*;

use crate::polygon::Polygon;
use crate::segment::on_segment;
use crate::types::Tolerance;

/// Batches at least this large are tagged in parallel.
const PARALLEL_MIN_POINTS: usize = 4096;

/// Result of partitioning a point batch by a polygon.
///
/// `indices[..inside_count]` are inside points in increasing index order;
/// `indices[inside_count..]` are outside points in decreasing index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Separation {
    pub indices: Vec<usize>,
    pub inside_count: usize,
}

impl Separation {
    #[inline]
    pub fn inside(&self) -> &[usize] {
        &self.indices[..self.inside_count]
    }

    /// Outside half as stored (reverse scan order).
    #[inline]
    pub fn outside_raw(&self) -> &[usize] {
        &self.indices[self.inside_count..]
    }

    /// Outside half in forward scan order.
    pub fn outside(&self) -> Vec<usize> {
        self.outside_raw().iter().rev().copied().collect()
    }

    #[inline]
    pub fn outside_count(&self) -> usize {
        self.indices.len() - self.inside_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Polygon {
    /// Membership of a single point.
    pub fn contains(&self, p: Vector2<f64>, closed: bool) -> bool {
        if !self.bbox().contains(p) {
            return false;
        }
        let mut inside = false;
        for edge in self.edges() {
            if on_segment(p, &edge, Tolerance::EXACT) {
                return closed;
            }
            let (pi, pj) = (edge.p0, edge.p1);
            let straddles = (pi.y < p.y && pj.y >= p.y) || (pj.y < p.y && pi.y >= p.y);
            if straddles && pi.x + (p.y - pi.y) / (pj.y - pi.y) * (pj.x - pi.x) < p.x {
                inside = !inside;
            }
        }
        inside
    }
}

/// Partition `points` by `polygon`.
pub fn separate(points: &[Vector2<f64>], polygon: &Polygon, closed: bool) -> Separation {
    let tags: Vec<bool> = if points.len() >= PARALLEL_MIN_POINTS {
        points
            .par_iter()
            .map(|p| polygon.contains(*p, closed))
            .collect()
    } else {
        points.iter().map(|p| polygon.contains(*p, closed)).collect()
    };
    let sep = partition_tags(&tags);
    tracing::debug!(
        points = points.len(),
        inside = sep.inside_count,
        vertices = polygon.len(),
        closed,
        "separate"
    );
    sep
}

/// Two-ended fill: `true` tags from the front, `false` tags from the back.
fn partition_tags(tags: &[bool]) -> Separation {
    let n = tags.len();
    let mut indices = vec![0usize; n];
    let mut front = 0;
    let mut back = n;
    for (k, &inside) in tags.iter().enumerate() {
        if inside {
            indices[front] = k;
            front += 1;
        } else {
            back -= 1;
            indices[back] = k;
        }
    }
    debug_assert_eq!(front, back);
    Separation {
        indices,
        inside_count: front,
    }
}
