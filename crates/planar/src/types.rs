//! Basic planar value types and tolerances.
//!
//! - `Tolerance`: relative/absolute closeness used by the segment predicates.
//! - `Segment`: ordered pair of endpoints, possibly degenerate.
//! - `BBox`: axis-aligned bounds used for fast rejects and sampling windows.

use nalgebra::Vector2;

use crate::error::{Error, Result};

/// Closeness tolerances for segment predicates.
///
/// `is_close(a, b)` holds when `|a - b| <= atol + rtol * |b|`. Comparisons
/// against zero therefore reduce to the absolute tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

impl Tolerance {
    /// No slack at all; used by the polygon boundary test.
    pub const EXACT: Tolerance = Tolerance {
        rtol: 0.0,
        atol: 0.0,
    };

    pub fn new(rtol: f64, atol: f64) -> Result<Self> {
        let tol = Self { rtol, atol };
        tol.validate()?;
        Ok(tol)
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.rtol) && ok(self.atol) {
            Ok(())
        } else {
            Err(Error::InvalidTolerance {
                rtol: self.rtol,
                atol: self.atol,
            })
        }
    }

    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }

    #[inline]
    pub fn is_zero(&self, a: f64) -> bool {
        self.is_close(a, 0.0)
    }
}

/// Finite line segment from `p0` to `p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p0: Vector2<f64>,
    pub p1: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(p0: Vector2<f64>, p1: Vector2<f64>) -> Self {
        Self { p0, p1 }
    }

    /// Direction vector `p1 - p0` (zero for a degenerate segment).
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.p1 - self.p0
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }

    /// Point at parameter `u` along the segment (`u = 0` is `p0`, `u = 1` is `p1`).
    #[inline]
    pub fn point_at(&self, u: f64) -> Vector2<f64> {
        self.p0 + self.direction() * u
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }
}

impl From<[[f64; 2]; 2]> for Segment {
    fn from(v: [[f64; 2]; 2]) -> Self {
        Self::new(Vector2::new(v[0][0], v[0][1]), Vector2::new(v[1][0], v[1][1]))
    }
}

/// Axis-aligned bounding box (closed on all sides).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BBox {
    /// Bounds of a point set; `None` when empty.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let mut bb = Self {
            min: first,
            max: first,
        };
        for p in &points[1..] {
            bb.min.x = bb.min.x.min(p.x);
            bb.min.y = bb.min.y.min(p.y);
            bb.max.x = bb.max.x.max(p.x);
            bb.max.y = bb.max.y.max(p.y);
        }
        Some(bb)
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
