//! Piecewise functions over overlapping polygon regions.
//!
//! A `RegionFunction` holds an ordered list of `(polygon, value)` pairs plus a
//! default. Evaluation starts from the default and lets every region, in list
//! order, overwrite the points it contains (closed test). Later regions win
//! where regions overlap.

use std::fmt;

use nalgebra::Vector2;

use crate::classify::separate;
use crate::error::{Error, Result};
use crate::polygon::Polygon;

type PointFn = dyn Fn(f64, f64) -> f64 + Send + Sync;

/// Constant value or point-wise function attached to a region.
pub enum RegionValue {
    Constant(f64),
    Function(Box<PointFn>),
}

impl RegionValue {
    pub fn function(f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Function(Box::new(f))
    }

    #[inline]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match self {
            RegionValue::Constant(c) => *c,
            RegionValue::Function(f) => f(x, y),
        }
    }
}

impl From<f64> for RegionValue {
    fn from(c: f64) -> Self {
        Self::Constant(c)
    }
}

impl fmt::Debug for RegionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionValue::Constant(c) => f.debug_tuple("Constant").field(c).finish(),
            RegionValue::Function(_) => f.write_str("Function(..)"),
        }
    }
}

#[derive(Debug)]
pub struct Region {
    pub polygon: Polygon,
    pub value: RegionValue,
}

impl Region {
    pub fn new(polygon: Polygon, value: impl Into<RegionValue>) -> Self {
        Self {
            polygon,
            value: value.into(),
        }
    }
}

/// `f(x, y)` defined by the last region containing each point.
#[derive(Debug)]
pub struct RegionFunction {
    regions: Vec<Region>,
    default: RegionValue,
}

impl RegionFunction {
    pub fn new(regions: Vec<Region>, default: impl Into<RegionValue>) -> Self {
        Self {
            regions,
            default: default.into(),
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Evaluate at the points `(xs[i], ys[i])`.
    ///
    /// Errors
    /// - `Error::Shape` when `xs` and `ys` differ in length.
    pub fn evaluate(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<f64>> {
        if xs.len() != ys.len() {
            return Err(Error::shape(format!(
                "x and y must have the same length (got {} and {})",
                xs.len(),
                ys.len()
            )));
        }
        let points: Vec<Vector2<f64>> = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Vector2::new(x, y))
            .collect();
        let mut z: Vec<f64> = points.iter().map(|p| self.default.eval(p.x, p.y)).collect();

        let mut hits = 0usize;
        for region in &self.regions {
            let sep = separate(&points, &region.polygon, true);
            hits += sep.inside_count;
            for &i in sep.inside() {
                z[i] = region.value.eval(points[i].x, points[i].y);
            }
        }

        if hits == 0 && !points.is_empty() {
            let (x_lo, x_hi) = range(xs);
            let (y_lo, y_hi) = range(ys);
            tracing::warn!(
                points = points.len(),
                regions = self.regions.len(),
                x_lo,
                x_hi,
                y_lo,
                y_hi,
                "no points fell within any region"
            );
        }
        Ok(z)
    }
}

fn range(v: &[f64]) -> (f64, f64) {
    v.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::from_xy(&[[x0, y0], [x1, y0], [x1, y1], [x0, y1]]).unwrap()
    }

    #[test]
    fn default_constant_everywhere_without_regions() {
        let f = RegionFunction::new(Vec::new(), 0.03);
        let z = f.evaluate(&[0.0, 10.0], &[0.0, -5.0]).unwrap();
        assert_eq!(z, vec![0.03, 0.03]);
    }

    #[test]
    fn last_region_wins_on_overlap() {
        let f = RegionFunction::new(
            vec![
                Region::new(rect(0.0, 0.0, 2.0, 2.0), 1.0),
                Region::new(rect(1.0, 1.0, 3.0, 3.0), 2.0),
            ],
            0.0,
        );
        let z = f
            .evaluate(&[0.5, 1.5, 2.5, 5.0], &[0.5, 1.5, 2.5, 5.0])
            .unwrap();
        assert_eq!(z, vec![1.0, 2.0, 2.0, 0.0]);
    }

    #[test]
    fn functions_are_evaluated_at_member_points() {
        let f = RegionFunction::new(
            vec![Region::new(
                rect(0.0, 0.0, 1.0, 1.0),
                RegionValue::function(|x, y| x + 10.0 * y),
            )],
            RegionValue::function(|x, _| -x),
        );
        let z = f.evaluate(&[0.5, 4.0], &[0.25, 0.0]).unwrap();
        assert_eq!(z, vec![3.0, -4.0]);
    }

    #[test]
    fn boundary_points_belong_to_region() {
        let f = RegionFunction::new(vec![Region::new(rect(0.0, 0.0, 1.0, 1.0), 7.0)], 0.0);
        assert_eq!(f.evaluate(&[1.0], &[0.5]).unwrap(), vec![7.0]);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let f = RegionFunction::new(Vec::new(), 0.0);
        assert!(matches!(f.evaluate(&[0.0, 1.0], &[0.0]), Err(Error::Shape(_))));
    }

    #[test]
    fn no_hits_still_returns_defaults() {
        let f = RegionFunction::new(vec![Region::new(rect(0.0, 0.0, 1.0, 1.0), 7.0)], 1.5);
        assert_eq!(f.evaluate(&[5.0, 6.0], &[5.0, 6.0]).unwrap(), vec![1.5, 1.5]);
        assert_eq!(f.regions().len(), 1);
    }
}
