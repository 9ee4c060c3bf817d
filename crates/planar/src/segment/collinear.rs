//! Overlap resolution for collinear segments.
//!
//! Segment 0 is `(p0, p1)`, segment 1 is `(p2, p3)`. Each endpoint is tested
//! against the other segment; the four flags select one of a fixed set of
//! cases. The four states with exactly one flag set are impossible for truly
//! collinear segments and surface as `Error::InconsistentCollinear`.

use super::{on_segment, Intersection};
use crate::error::{Error, Result};
use crate::types::{Segment, Tolerance};

/// Endpoint containment flags `(0 start on 1, 0 end on 1, 1 start on 0, 1 end on 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CollinearFlags {
    pub start0_on_1: bool,
    pub end0_on_1: bool,
    pub start1_on_0: bool,
    pub end1_on_0: bool,
}

impl CollinearFlags {
    pub fn probe(s0: &Segment, s1: &Segment, tol: Tolerance) -> Self {
        Self {
            start0_on_1: on_segment(s0.p0, s1, tol),
            end0_on_1: on_segment(s0.p1, s1, tol),
            start1_on_0: on_segment(s1.p0, s0, tol),
            end1_on_0: on_segment(s1.p1, s0, tol),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CollinearCase {
    Disjoint,
    /// Segment 0 lies within segment 1: `[p0, p1]`.
    FirstInSecond,
    /// Segment 1 lies within segment 0: `[p2, p3]`.
    SecondInFirst,
    /// `[p0, p3]`
    SameDirectionFromFirst,
    /// `[p2, p1]`
    SameDirectionFromSecond,
    /// `[p0, p2]`
    OppositeFromFirst,
    /// `[p3, p1]`
    OppositeFromSecond,
    Impossible,
}

impl From<CollinearFlags> for CollinearCase {
    fn from(f: CollinearFlags) -> Self {
        use CollinearCase::*;
        match (f.start0_on_1, f.end0_on_1, f.start1_on_0, f.end1_on_0) {
            (false, false, false, false) => Disjoint,
            (true, true, _, _) => FirstInSecond,
            (false, false, true, true) | (false, true, true, true) | (true, false, true, true) => {
                SecondInFirst
            }
            (true, false, false, true) => SameDirectionFromFirst,
            (false, true, true, false) => SameDirectionFromSecond,
            (true, false, true, false) => OppositeFromFirst,
            (false, true, false, true) => OppositeFromSecond,
            (true, false, false, false)
            | (false, true, false, false)
            | (false, false, true, false)
            | (false, false, false, true) => Impossible,
        }
    }
}

impl CollinearCase {
    pub fn resolve(self, s0: &Segment, s1: &Segment) -> Result<Intersection> {
        let (p0, p1, p2, p3) = (s0.p0, s0.p1, s1.p0, s1.p1);
        let overlap = |a, b| Ok(Intersection::CollinearOverlap(Segment::new(a, b)));
        match self {
            CollinearCase::Disjoint => Ok(Intersection::CollinearDisjoint),
            CollinearCase::FirstInSecond => overlap(p0, p1),
            CollinearCase::SecondInFirst => overlap(p2, p3),
            CollinearCase::SameDirectionFromFirst => overlap(p0, p3),
            CollinearCase::SameDirectionFromSecond => overlap(p2, p1),
            CollinearCase::OppositeFromFirst => overlap(p0, p2),
            CollinearCase::OppositeFromSecond => overlap(p3, p1),
            CollinearCase::Impossible => Err(Error::InconsistentCollinear { p0, p1, p2, p3 }),
        }
    }
}
