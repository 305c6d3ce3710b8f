use crate::error::FilterError;
use crate::types::{CallRecord, TriState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A categorical axis records can be bucketed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    ResolutionType,
    Achieved,
    CallerType,
    PrimaryIntent,
    Transfer,
    MultiCase,
}

impl Dimension {
    pub const ALL: [Self; 6] = [
        Self::ResolutionType,
        Self::Achieved,
        Self::CallerType,
        Self::PrimaryIntent,
        Self::Transfer,
        Self::MultiCase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResolutionType => "resolution_type",
            Self::Achieved => "achieved",
            Self::CallerType => "caller_type",
            Self::PrimaryIntent => "primary_intent",
            Self::Transfer => "transfer",
            Self::MultiCase => "multi_case",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ResolutionType => "Resolution Type",
            Self::Achieved => "Resolution Achieved",
            Self::CallerType => "Caller Type",
            Self::PrimaryIntent => "Primary Intent",
            Self::Transfer => "Transfer Status",
            Self::MultiCase => "Multi-Case Details",
        }
    }

    /// The bucket a record falls in, using the same labels the predicates match on.
    pub fn label_for<'r>(&self, record: &'r CallRecord) -> &'r str {
        match self {
            Self::ResolutionType => &record.resolution_type,
            Self::CallerType => &record.caller_type,
            Self::PrimaryIntent => record.primary_intent_label(),
            Self::Achieved => record.achieved_status().as_str(),
            Self::Transfer => record.transfer_status().as_str(),
            Self::MultiCase => record.multi_case_status().as_str(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| FilterError::UnknownLabel {
                kind: "dimension",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Bucket {
    pub count: usize,
    /// Sum of call durations in seconds; records without one add nothing.
    pub total_duration: f64,
}

/// Per-label buckets for one dimension. Only labels that occur are present.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct DimensionCounts(BTreeMap<String, Bucket>);

impl DimensionCounts {
    pub fn get(&self, label: &str) -> Option<&Bucket> {
        self.0.get(label)
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.get(label).map(|b| b.count).unwrap_or(0)
    }

    /// Summed count across buckets.
    pub fn total(&self) -> usize {
        self.0.values().map(|b| b.count).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bucket)> {
        self.0.iter().map(|(label, bucket)| (label.as_str(), bucket))
    }
}

pub fn calculate_dimension_counts<'a, I>(records: I, dimension: Dimension) -> DimensionCounts
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let mut counts: BTreeMap<String, Bucket> = BTreeMap::new();

    for record in records {
        let bucket = counts
            .entry(dimension.label_for(record).to_string())
            .or_default();
        bucket.count += 1;
        bucket.total_duration += record.call_duration.unwrap_or(0.0);
    }

    trace!(%dimension, buckets = counts.len(), "counted dimension");
    DimensionCounts(counts)
}
