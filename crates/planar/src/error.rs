//! Error type shared by every entry point of the crate.
//!
//! Variants follow the failure classes callers need to tell apart: bad input
//! shape, inputs that cannot be turned into finite coordinates, misuse of the
//! single-point predicates, and internal consistency failures that indicate a
//! logic defect rather than bad input.

use nalgebra::Vector2;
use thiserror::Error;

/// Errors raised by the polygon kernel.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong dimensionality or column count, detected before any computation.
    #[error("invalid input shape: {0}")]
    Shape(String),

    /// Input rows could not be turned into a numeric `N x 2` array.
    #[error("could not convert {what} to numeric array: {reason}")]
    Conversion { what: &'static str, reason: String },

    #[error("tolerances must be finite and non-negative (rtol={rtol}, atol={atol})")]
    InvalidTolerance { rtol: f64, atol: f64 },

    /// The collinear overlap flags reached a state that cannot occur for two
    /// collinear segments. Carries both segments for diagnosis.
    #[error(
        "internal error: inconsistent collinear state for p0={p0:?}, p1={p1:?}, p2={p2:?}, p3={p3:?}"
    )]
    InconsistentCollinear {
        p0: Vector2<f64>,
        p1: Vector2<f64>,
        p2: Vector2<f64>,
        p3: Vector2<f64>,
    },

    /// A single-point predicate was called with a batch.
    #[error("{0}")]
    Cardinality(String),

    #[error(
        "sampling gave up after {rejections} consecutive rejections ({accepted} of {requested} points accepted)"
    )]
    SamplingExhausted {
        accepted: usize,
        requested: usize,
        rejections: u64,
    },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::Shape(reason.into())
    }

    pub(crate) fn conversion(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Conversion {
            what,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
