//! Simple polygons as closed vertex rings.
//!
//! Conventions
//! - Vertices are stored as given; winding (CW/CCW) is immaterial for area and
//!   containment, and the first vertex may be repeated as the last.
//! - Polygons may be non-convex. A hole is modelled as a separate polygon that
//!   callers test independently (see `populate` and `region`).
//! - The bounding box is computed once at construction and reused by the
//!   classifier for fast rejects.

use nalgebra::Vector2;

use crate::error::{Error, Result};
use crate::types::{BBox, Segment};

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2<f64>>,
    bbox: BBox,
}

impl Polygon {
    /// Build from a vertex ring with at least one finite vertex.
    pub fn new(vertices: Vec<Vector2<f64>>) -> Result<Self> {
        if let Some(k) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(Error::conversion(
                "polygon",
                format!("vertex {k} is not finite: {:?}", vertices[k]),
            ));
        }
        Self::new_unchecked(vertices)
    }

    /// Build without the finiteness scan. Still rejects an empty ring.
    pub fn new_unchecked(vertices: Vec<Vector2<f64>>) -> Result<Self> {
        let bbox = BBox::from_points(&vertices)
            .ok_or_else(|| Error::shape("polygon must have at least one vertex"))?;
        Ok(Self { vertices, bbox })
    }

    pub fn from_xy(xy: &[[f64; 2]]) -> Result<Self> {
        Self::new(xy.iter().map(|p| Vector2::new(p[0], p[1])).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; construction rejects empty rings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn bbox(&self) -> BBox {
        self.bbox
    }

    /// Edges `v[i] -> v[(i + 1) % n]`, closing the ring.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Unsigned area via the shoelace formula.
    ///
    /// The ring is shifted so its bounding-box minimum sits at the origin first;
    /// this keeps the cross products small for far-from-origin coordinates.
    /// Self-intersecting rings give the magnitude of the signed sum.
    pub fn area(&self) -> f64 {
        let origin = self.bbox.min;
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let p = self.vertices[i] - origin;
            let q = self.vertices[(i + 1) % n] - origin;
            sum += p.x * q.y - q.x * p.y;
        }
        (sum / 2.0).abs()
    }
}
