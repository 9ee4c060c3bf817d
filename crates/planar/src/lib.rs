//! Planar polygon kernel.
//!
//! Point-in-polygon classification, segment predicates, polygon area, region
//! functions and rejection sampling over finite `(x, y)` coordinates in one
//! consistent planar frame.
//!
//! Layout
//! - `types`, `segment`: tolerances, segments, point-on-segment, intersection.
//! - `polygon`, `classify`: vertex rings, area, ray casting, batch partition.
//! - `region`, `populate`: consumers of the classifier.
//! - `io`: plain-text polygon files.
//! - `api`: entry points accepting single points or batches in several shapes.

pub mod api;
pub mod classify;
pub mod error;
pub mod io;
pub mod polygon;
pub mod populate;
pub mod region;
pub mod segment;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use classify::{separate, Separation};
pub use error::{Error, Result};
pub use nalgebra::Vector2 as Vec2;
pub use polygon::Polygon;
pub use populate::{populate, PopulateCfg};
pub use region::{Region, RegionFunction, RegionValue};
pub use segment::{intersect, on_segment, Intersection, Status};
pub use types::{BBox, Segment, Tolerance};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{
        in_and_outside_polygon, inside_polygon, intersection, is_inside_polygon,
        is_outside_polygon, outside_polygon, point_on_line, polygon_area, populate_polygon,
        separate_points_by_polygon, AsPointArray, SeparateOpts,
    };
    pub use crate::io::{read_polygon, write_polygon};
    pub use crate::{
        Error, Intersection, Polygon, PopulateCfg, Region, RegionFunction, RegionValue, Segment,
        Separation, Status, Tolerance, Vec2,
    };
}
