//! Flat input records supplied by the external data loader

use crate::node::YearRange;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One publication-count record, CSV-derived and already validated upstream
///
/// The tree builder treats the record list as an opaque in-memory sequence;
/// parsing and loading live outside this crate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicationRecord {
    /// Person id from the source dataset
    pub id: String,
    /// Person display name
    pub name: String,
    pub year: i32,
    /// Publication count for this person in this year
    pub pubs: u32,
    pub department: String,
    pub faculty: String,
    pub university: String,
}

/// Smallest range covering every record's year
///
/// Returns [`YearRange::EMPTY`] for an empty record list.
pub fn year_limits(records: &[PublicationRecord]) -> YearRange {
    let mut range = YearRange::EMPTY;
    for record in records {
        range.widen(record.year);
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32) -> PublicationRecord {
        PublicationRecord {
            id: "p1".to_string(),
            name: "A".to_string(),
            year,
            pubs: 1,
            department: "D1".to_string(),
            faculty: "F1".to_string(),
            university: "U1".to_string(),
        }
    }

    #[test]
    fn test_year_limits() {
        let records = vec![record(2004), record(1998), record(2001)];
        assert_eq!(year_limits(&records), YearRange::new(1998, 2004));
    }

    #[test]
    fn test_year_limits_empty() {
        assert!(year_limits(&[]).is_empty());
    }
}
