use crate::utils::Result;
use serde::{Deserialize, Serialize};

/// Inclusive 1-based genomic interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomicRegion {
    pub contig: String,
    pub start: u32,
    pub end: u32,
}

impl GenomicRegion {
    pub fn new(contig: impl Into<String>, start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(format!("Invalid region: start {} > end {}", start, end));
        }

        Ok(Self {
            contig: contig.into(),
            start,
            end,
        })
    }

    pub fn size(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn intersect_position(&self, position: u32) -> bool {
        position >= self.start && position <= self.end
    }

    /// Fraction of this region covered by `[start, end]`, as a percentage.
    /// Negative when the intervals are disjoint.
    pub fn overlap_percentage(&self, start: u32, end: u32) -> f64 {
        let overlap = self.end.min(end) as i64 - self.start.max(start) as i64 + 1;
        100.0 * overlap as f64 / self.size() as f64
    }
}
