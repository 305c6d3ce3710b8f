use crate::counts::{Dimension, DimensionCounts, calculate_dimension_counts};
use crate::filters::apply_all_filters;
use crate::search::search_records;
use crate::state::FilterState;
use crate::stats::DatasetStats;
use crate::types::CallRecord;

/// Borrowing query builder over a record slice.
pub struct CallQuery<'a> {
    records: &'a [CallRecord],
}

impl<'a> CallQuery<'a> {
    pub fn new(records: &'a [CallRecord]) -> Self {
        Self { records }
    }

    pub fn all(&self) -> Vec<&'a CallRecord> {
        self.records.iter().collect()
    }

    pub fn filtered(&self, filters: &FilterState) -> Vec<&'a CallRecord> {
        apply_all_filters(self.records, filters)
    }

    pub fn search(&self, query: &str) -> Vec<&'a CallRecord> {
        search_records(self.records, query)
    }

    /// Records passing `filters` and then matching `query`.
    pub fn filtered_search(&self, filters: &FilterState, query: &str) -> Vec<&'a CallRecord> {
        search_records(apply_all_filters(self.records, filters), query)
    }

    pub fn counts(&self, dimension: Dimension) -> DimensionCounts {
        calculate_dimension_counts(self.records, dimension)
    }

    pub fn total_duration(&self) -> f64 {
        self.records.iter().filter_map(|r| r.call_duration).sum()
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats::from_records(self.records)
    }
}
