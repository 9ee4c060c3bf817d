//! Segment predicates: point-on-segment and segment/segment intersection.
//!
//! Purpose
//! - `on_segment` decides membership of a point in a finite segment within
//!   tolerance; the polygon classifier calls it once per edge.
//! - `intersect` classifies two segments as crossing, disjoint, parallel or
//!   collinear and returns the shared geometry.
//!
//! Numerics
//! - Collinearity of a point uses the cross product relative to `|b|²`
//!   (relative tolerance) unless the segment is degenerate, in which case the
//!   absolute tolerance applies.
//! - The parallel test compares the 2×2 determinant against zero, which with
//!   numpy-style closeness reduces to `|denom| <= atol`.

mod collinear;

use nalgebra::Vector2;

use crate::error::Result;
use crate::types::{Segment, Tolerance};

pub(crate) use collinear::{CollinearCase, CollinearFlags};

/// True when `point` lies on the finite segment within `tol`.
///
/// A degenerate segment (`p0 == p1`) only contains the identical point.
pub fn on_segment(point: Vector2<f64>, seg: &Segment, tol: Tolerance) -> bool {
    let a = point - seg.p0;
    let b = seg.direction();
    let a_normal = Vector2::new(a.y, -a.x);

    let nominator = a_normal.dot(&b).abs();
    let denominator = b.dot(&b);
    let collinear = if denominator == 0.0 {
        nominator <= tol.atol
    } else {
        nominator / denominator <= tol.rtol
    };
    if !collinear {
        return false;
    }
    // On the infinite extension: reject points before p0 or past p1.
    a.dot(&b) >= 0.0 && a.norm() <= b.norm()
}

/// Relationship between two segments, with the shared geometry when there is one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    NoIntersection,
    Point(Vector2<f64>),
    /// Collinear segments sharing the returned sub-segment.
    CollinearOverlap(Segment),
    CollinearDisjoint,
    Parallel,
}

/// Status tag of an [`Intersection`], with the legacy numeric codes 0..=4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    NoIntersection = 0,
    PointIntersection = 1,
    CollinearOverlap = 2,
    CollinearDisjoint = 3,
    Parallel = 4,
}

impl Status {
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::NoIntersection => "no_intersection",
            Status::PointIntersection => "point_intersection",
            Status::CollinearOverlap => "collinear_overlap",
            Status::CollinearDisjoint => "collinear_disjoint",
            Status::Parallel => "parallel",
        }
    }
}

impl Intersection {
    pub fn status(&self) -> Status {
        match self {
            Intersection::NoIntersection => Status::NoIntersection,
            Intersection::Point(_) => Status::PointIntersection,
            Intersection::CollinearOverlap(_) => Status::CollinearOverlap,
            Intersection::CollinearDisjoint => Status::CollinearDisjoint,
            Intersection::Parallel => Status::Parallel,
        }
    }

    pub fn point(&self) -> Option<Vector2<f64>> {
        match self {
            Intersection::Point(p) => Some(*p),
            _ => None,
        }
    }

    pub fn overlap(&self) -> Option<Segment> {
        match self {
            Intersection::CollinearOverlap(s) => Some(*s),
            _ => None,
        }
    }
}

/// Intersect two finite segments.
///
/// Errors
/// - `Error::InconsistentCollinear` when the collinear endpoint flags reach a
///   state no pair of collinear segments can produce.
pub fn intersect(s0: &Segment, s1: &Segment, tol: Tolerance) -> Result<Intersection> {
    let (x0, y0, x1, y1) = (s0.p0.x, s0.p0.y, s0.p1.x, s0.p1.y);
    let (x2, y2, x3, y3) = (s1.p0.x, s1.p0.y, s1.p1.x, s1.p1.y);

    let denom = (y3 - y2) * (x1 - x0) - (x3 - x2) * (y1 - y0);
    let u0 = (x3 - x2) * (y0 - y2) - (y3 - y2) * (x0 - x2);
    let u1 = (x2 - x0) * (y1 - y0) - (y2 - y0) * (x1 - x0);

    if tol.is_zero(denom) {
        if tol.is_zero(u0) && tol.is_zero(u1) {
            let flags = CollinearFlags::probe(s0, s1, tol);
            return CollinearCase::from(flags).resolve(s0, s1);
        }
        return Ok(Intersection::Parallel);
    }

    let u0 = u0 / denom;
    let u1 = u1 / denom;
    let p = s0.point_at(u0);
    debug_assert!(
        parametrisations_agree(s0, s1, u0, u1, denom),
        "intersection point differs between segments: s0={s0:?}, s1={s1:?}"
    );

    if (0.0..=1.0).contains(&u0) && (0.0..=1.0).contains(&u1) {
        Ok(Intersection::Point(p))
    } else {
        Ok(Intersection::NoIntersection)
    }
}

/// `s0(u0)` and `s1(u1)` name the same point up to rounding at the scale of
/// the coordinates. Nearly parallel pairs are ill-conditioned and pass.
fn parametrisations_agree(s0: &Segment, s1: &Segment, u0: f64, u1: f64, denom: f64) -> bool {
    if denom.abs() <= 1e-6 * s0.direction().norm() * s1.direction().norm() {
        return true;
    }
    let (p, q) = (s0.point_at(u0), s1.point_at(u1));
    let scale = [s0.p0, s0.p1, s1.p0, s1.p1, p]
        .iter()
        .map(|v| v.amax())
        .fold(1.0, f64::max);
    let floor = Tolerance {
        rtol: Tolerance::default().rtol,
        atol: Tolerance::default().atol * scale,
    };
    floor.is_close(p.x, q.x) && floor.is_close(p.y, q.y)
}
