//! Call surface accepting single points or batches in several array shapes.
//!
//! Every entry point converts its inputs through [`AsPointArray`], validates
//! shape before computing anything, and then delegates to the typed kernels
//! in `segment`, `classify`, `polygon` and `populate`.
//!
//! Accepted inputs
//! - single point: `Vector2<f64>`, `[f64; 2]`, `(f64, f64)`, or a 1-D
//!   `[f64]`/`Vec<f64>` of length 2 (reshaped to a one-row batch);
//! - batches: slices, vecs and arrays of `[f64; 2]` or `Vector2<f64>`,
//!   `Vec<Vec<f64>>` rows, `nalgebra::DMatrix<f64>` with two columns, and
//!   `Polygon` (its vertices).

use nalgebra::{DMatrix, Vector2};

use crate::classify::{separate, Separation};
use crate::error::{Error, Result};
use crate::polygon::Polygon;
use crate::populate::{populate, PopulateCfg};
use crate::segment::{intersect, on_segment, Intersection};
use crate::types::{Segment, Tolerance};

/// Rows of `(x, y)` plus whether the source was a single 1-D pair.
#[derive(Clone, Debug, PartialEq)]
pub struct PointArray {
    pub points: Vec<Vector2<f64>>,
    pub one_dimensional: bool,
}

impl PointArray {
    fn single(p: Vector2<f64>) -> Self {
        Self {
            points: vec![p],
            one_dimensional: true,
        }
    }

    fn batch(points: Vec<Vector2<f64>>) -> Self {
        Self {
            points,
            one_dimensional: false,
        }
    }

    fn ensure_finite(&self, what: &'static str) -> Result<()> {
        match self
            .points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            Some(k) => Err(Error::conversion(
                what,
                format!("row {k} is not finite: {:?}", self.points[k]),
            )),
            None => Ok(()),
        }
    }
}

/// Conversion of caller data into an `N x 2` point array.
pub trait AsPointArray {
    fn point_array(&self) -> Result<PointArray>;
}

impl AsPointArray for Vector2<f64> {
    fn point_array(&self) -> Result<PointArray> {
        Ok(PointArray::single(*self))
    }
}

impl AsPointArray for [f64; 2] {
    fn point_array(&self) -> Result<PointArray> {
        Ok(PointArray::single(Vector2::new(self[0], self[1])))
    }
}

impl AsPointArray for (f64, f64) {
    fn point_array(&self) -> Result<PointArray> {
        Ok(PointArray::single(Vector2::new(self.0, self.1)))
    }
}

impl AsPointArray for [f64] {
    fn point_array(&self) -> Result<PointArray> {
        match self {
            [x, y] => Ok(PointArray::single(Vector2::new(*x, *y))),
            _ => Err(Error::shape(format!(
                "point array must have two columns (x,y), got {} values",
                self.len()
            ))),
        }
    }
}

impl AsPointArray for Vec<f64> {
    fn point_array(&self) -> Result<PointArray> {
        self.as_slice().point_array()
    }
}

impl AsPointArray for [[f64; 2]] {
    fn point_array(&self) -> Result<PointArray> {
        Ok(PointArray::batch(
            self.iter().map(|p| Vector2::new(p[0], p[1])).collect(),
        ))
    }
}

impl<const N: usize> AsPointArray for [[f64; 2]; N] {
    fn point_array(&self) -> Result<PointArray> {
        self.as_slice().point_array()
    }
}

impl AsPointArray for Vec<[f64; 2]> {
    fn point_array(&self) -> Result<PointArray> {
        self.as_slice().point_array()
    }
}

impl AsPointArray for [Vector2<f64>] {
    fn point_array(&self) -> Result<PointArray> {
        Ok(PointArray::batch(self.to_vec()))
    }
}

impl AsPointArray for Vec<Vector2<f64>> {
    fn point_array(&self) -> Result<PointArray> {
        self.as_slice().point_array()
    }
}

impl AsPointArray for [Vec<f64>] {
    fn point_array(&self) -> Result<PointArray> {
        let Some(first) = self.first() else {
            return Ok(PointArray::batch(Vec::new()));
        };
        let width = first.len();
        if let Some(k) = self.iter().position(|row| row.len() != width) {
            return Err(Error::conversion(
                "points",
                format!(
                    "ragged rows: row 0 has {width} values, row {k} has {}",
                    self[k].len()
                ),
            ));
        }
        if width != 2 {
            return Err(Error::shape(format!(
                "point array must have two columns, got {width}"
            )));
        }
        Ok(PointArray::batch(
            self.iter().map(|r| Vector2::new(r[0], r[1])).collect(),
        ))
    }
}

impl AsPointArray for Vec<Vec<f64>> {
    fn point_array(&self) -> Result<PointArray> {
        self.as_slice().point_array()
    }
}

impl AsPointArray for DMatrix<f64> {
    fn point_array(&self) -> Result<PointArray> {
        if self.ncols() != 2 {
            return Err(Error::shape(format!(
                "point array must have two columns, got {}",
                self.ncols()
            )));
        }
        Ok(PointArray::batch(
            self.row_iter().map(|r| Vector2::new(r[0], r[1])).collect(),
        ))
    }
}

impl AsPointArray for Polygon {
    fn point_array(&self) -> Result<PointArray> {
        Ok(PointArray::batch(self.vertices().to_vec()))
    }
}

/// Options for batch classification.
#[derive(Clone, Copy, Debug)]
pub struct SeparateOpts {
    /// Boundary points count as inside.
    pub closed: bool,
    /// Validate finiteness of inputs. Disable only for trusted callers.
    pub check_input: bool,
}

impl Default for SeparateOpts {
    fn default() -> Self {
        Self {
            closed: true,
            check_input: true,
        }
    }
}

fn to_points<P: AsPointArray + ?Sized>(points: &P, check_input: bool) -> Result<Vec<Vector2<f64>>> {
    let arr = points.point_array()?;
    if check_input {
        arr.ensure_finite("points")?;
    }
    Ok(arr.points)
}

fn to_polygon<Q: AsPointArray + ?Sized>(polygon: &Q, check_input: bool) -> Result<Polygon> {
    let arr = polygon.point_array()?;
    if arr.one_dimensional {
        return Err(Error::shape("polygon array must be a 2d array of vertices"));
    }
    if check_input {
        Polygon::new(arr.points)
    } else {
        Polygon::new_unchecked(arr.points)
    }
}

fn to_segment<S: AsPointArray + ?Sized>(segment: &S) -> Result<Segment> {
    let arr = segment.point_array()?;
    arr.ensure_finite("segment")?;
    match arr.points.as_slice() {
        [p0, p1] if !arr.one_dimensional => Ok(Segment::new(*p0, *p1)),
        _ => Err(Error::shape(format!(
            "segment must be two endpoints [[x0, y0], [x1, y1]], got {} row(s)",
            arr.points.len()
        ))),
    }
}

fn to_single_point<P: AsPointArray + ?Sized>(point: &P, caller: &str) -> Result<Vector2<f64>> {
    let arr = point.point_array()?;
    arr.ensure_finite("point")?;
    match arr.points.as_slice() {
        [p] => Ok(*p),
        pts => Err(Error::Cardinality(format!(
            "{caller} must be invoked with one point only, got {}",
            pts.len()
        ))),
    }
}

/// Partition `points` by `polygon`; see [`Separation`] for the index layout.
///
/// `[[0.5, 0.5], [1.0, -0.5], [0.3, 0.2]]` against the unit square gives
/// indices `[0, 2, 1]` with `inside_count == 2`.
pub fn separate_points_by_polygon<P, Q>(
    points: &P,
    polygon: &Q,
    opts: SeparateOpts,
) -> Result<Separation>
where
    P: AsPointArray + ?Sized,
    Q: AsPointArray + ?Sized,
{
    let polygon = to_polygon(polygon, opts.check_input)?;
    let points = to_points(points, opts.check_input)?;
    Ok(separate(&points, &polygon, opts.closed))
}

fn separate_checked<P, Q>(points: &P, polygon: &Q, closed: bool) -> Result<Separation>
where
    P: AsPointArray + ?Sized,
    Q: AsPointArray + ?Sized,
{
    separate_points_by_polygon(
        points,
        polygon,
        SeparateOpts {
            closed,
            check_input: true,
        },
    )
}

/// Indices of points inside `polygon`, in input order.
pub fn inside_polygon<P, Q>(points: &P, polygon: &Q, closed: bool) -> Result<Vec<usize>>
where
    P: AsPointArray + ?Sized,
    Q: AsPointArray + ?Sized,
{
    Ok(separate_checked(points, polygon, closed)?.inside().to_vec())
}

/// Indices of points outside `polygon`, in input order.
pub fn outside_polygon<P, Q>(points: &P, polygon: &Q, closed: bool) -> Result<Vec<usize>>
where
    P: AsPointArray + ?Sized,
    Q: AsPointArray + ?Sized,
{
    Ok(separate_checked(points, polygon, closed)?.outside())
}

/// `(inside, outside)` index lists, both in input order.
pub fn in_and_outside_polygon<P, Q>(
    points: &P,
    polygon: &Q,
    closed: bool,
) -> Result<(Vec<usize>, Vec<usize>)>
where
    P: AsPointArray + ?Sized,
    Q: AsPointArray + ?Sized,
{
    let sep = separate_checked(points, polygon, closed)?;
    Ok((sep.inside().to_vec(), sep.outside()))
}

/// Membership of exactly one point.
///
/// Errors
/// - `Error::Cardinality` when `point` holds zero or several points.
pub fn is_inside_polygon<P, Q>(point: &P, polygon: &Q, closed: bool) -> Result<bool>
where
    P: AsPointArray + ?Sized,
    Q: AsPointArray + ?Sized,
{
    let p = to_single_point(point, "is_inside_polygon")?;
    let polygon = to_polygon(polygon, true)?;
    Ok(polygon.contains(p, closed))
}

/// Negation of [`is_inside_polygon`] under the same `closed` convention.
pub fn is_outside_polygon<P, Q>(point: &P, polygon: &Q, closed: bool) -> Result<bool>
where
    P: AsPointArray + ?Sized,
    Q: AsPointArray + ?Sized,
{
    let p = to_single_point(point, "is_outside_polygon")?;
    let polygon = to_polygon(polygon, true)?;
    Ok(!polygon.contains(p, closed))
}

/// Whether `point` lies on the finite segment `[[x0, y0], [x1, y1]]`.
pub fn point_on_line<P, S>(point: &P, segment: &S, tol: Tolerance) -> Result<bool>
where
    P: AsPointArray + ?Sized,
    S: AsPointArray + ?Sized,
{
    tol.validate()?;
    let p = to_single_point(point, "point_on_line")?;
    let seg = to_segment(segment)?;
    Ok(on_segment(p, &seg, tol))
}

/// Relationship between two segments; see [`Intersection`].
pub fn intersection<S0, S1>(segment0: &S0, segment1: &S1, tol: Tolerance) -> Result<Intersection>
where
    S0: AsPointArray + ?Sized,
    S1: AsPointArray + ?Sized,
{
    tol.validate()?;
    let s0 = to_segment(segment0)?;
    let s1 = to_segment(segment1)?;
    intersect(&s0, &s1, tol)
}

pub fn polygon_area<Q: AsPointArray + ?Sized>(polygon: &Q) -> Result<f64> {
    Ok(to_polygon(polygon, true)?.area())
}

/// `count` uniform points inside `polygon`, avoiding every `exclude` polygon.
pub fn populate_polygon<Q: AsPointArray + ?Sized>(
    polygon: &Q,
    count: usize,
    seed: Option<u64>,
    exclude: &[Polygon],
    cfg: PopulateCfg,
) -> Result<Vec<Vector2<f64>>> {
    let polygon = to_polygon(polygon, true)?;
    populate(&polygon, count, seed, exclude, cfg)
}
