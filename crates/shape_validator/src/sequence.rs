//! Ordering and structural checks of shape points.

use gtfs::domain_model::shape::ShapePoint;
use utility::geo::GeoPoint;

use crate::finding::{FindingKind, SequenceIssue};

/// Sorts points ascending by sequence number. Ties keep their input order.
pub fn sort_by_sequence(points: &mut [ShapePoint]) {
    points.sort_by_key(|point| point.sequence);
}

pub fn range_findings(position: &GeoPoint) -> Vec<FindingKind> {
    let mut findings = Vec::new();
    if !position.latitude_in_range() {
        findings.push(FindingKind::LatitudeOutOfRange {
            latitude: position.latitude,
        });
    }
    if !position.longitude_in_range() {
        findings.push(FindingKind::LongitudeOutOfRange {
            longitude: position.longitude,
        });
    }
    findings
}

/// Expected-counter check over points visited in sorted order. The counter
/// starts at 0, so a shape is expected to start at sequence 1.
#[derive(Debug, Default)]
pub struct SequenceCheck {
    counter: u32,
}

impl SequenceCheck {
    /// Checks `sequence` against the counter, then moves the counter to it so
    /// each gap or duplicate is reported once.
    pub fn advance(&mut self, sequence: u32) -> Option<SequenceIssue> {
        let issue = match sequence.checked_sub(self.counter) {
            Some(1) => None,
            // A point that does not come after its predecessor. Unreachable
            // after sorting except for equal numbers.
            Some(0) | None => Some(SequenceIssue::Duplicate),
            Some(delta) => Some(SequenceIssue::Missing { count: delta - 1 }),
        };
        self.counter = sequence;
        issue
    }
}
