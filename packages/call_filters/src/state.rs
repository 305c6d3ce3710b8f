//! Filter state owned by the viewer's store, plus partial updates to it.

use crate::error::{FilterError, Result};
use crate::selection::Selection;
use crate::stats::DatasetStats;
use crate::types::{AchievedStatus, MultiCaseStatus, TransferStatus};
use serde::{Deserialize, Serialize};

/// Closed `[min, max]` range of call durations in seconds.
///
/// Serialized as a two-element array to match the slider's value shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct DurationRange {
    min: f64,
    max: f64,
}

impl DurationRange {
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(FilterError::InvalidDurationRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Covers every finite duration.
    pub fn full() -> Self {
        Self {
            min: f64::MIN,
            max: f64::MAX,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, secs: f64) -> bool {
        secs >= self.min && secs <= self.max
    }

    /// Narrows this range so both ends fall inside `bounds`.
    pub fn clamp_to(&self, bounds: &DurationRange) -> Self {
        Self {
            min: self.min.clamp(bounds.min, bounds.max),
            max: self.max.clamp(bounds.min, bounds.max),
        }
    }
}

impl Default for DurationRange {
    fn default() -> Self {
        Self::full()
    }
}

impl TryFrom<(f64, f64)> for DurationRange {
    type Error = FilterError;

    fn try_from((min, max): (f64, f64)) -> Result<Self> {
        Self::new(min, max)
    }
}

impl From<DurationRange> for (f64, f64) {
    fn from(range: DurationRange) -> Self {
        (range.min, range.max)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub resolution_types: Selection<String>,

    #[serde(default)]
    pub achieved_status: Selection<AchievedStatus>,

    #[serde(default)]
    pub caller_types: Selection<String>,

    #[serde(default)]
    pub primary_intents: Selection<String>,

    #[serde(default)]
    pub transfer_status: Selection<TransferStatus>,

    #[serde(default)]
    pub duration_range: DurationRange,

    #[serde(default)]
    pub multi_case: Selection<MultiCaseStatus>,
}

impl FilterState {
    /// The reset state for a dataset: nothing selected, duration spanning
    /// what the dataset actually contains.
    pub fn for_dataset(stats: &DatasetStats) -> Self {
        Self {
            duration_range: stats.duration_range.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Overwrites only the fields present in `update`.
    pub fn apply(&mut self, update: FilterUpdate) {
        let FilterUpdate {
            resolution_types,
            achieved_status,
            caller_types,
            primary_intents,
            transfer_status,
            duration_range,
            multi_case,
        } = update;

        if let Some(v) = resolution_types {
            self.resolution_types = v;
        }
        if let Some(v) = achieved_status {
            self.achieved_status = v;
        }
        if let Some(v) = caller_types {
            self.caller_types = v;
        }
        if let Some(v) = primary_intents {
            self.primary_intents = v;
        }
        if let Some(v) = transfer_status {
            self.transfer_status = v;
        }
        if let Some(v) = duration_range {
            self.duration_range = v;
        }
        if let Some(v) = multi_case {
            self.multi_case = v;
        }
    }

    /// Copy of this state with `update` applied.
    pub fn with(mut self, update: FilterUpdate) -> Self {
        self.apply(update);
        self
    }
}

/// Partial change to a [`FilterState`]; `None` leaves a field as is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_types: Option<Selection<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_status: Option<Selection<AchievedStatus>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_types: Option<Selection<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_intents: Option<Selection<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_status: Option<Selection<TransferStatus>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_range: Option<DurationRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_case: Option<Selection<MultiCaseStatus>>,
}

impl FilterUpdate {
    pub fn resolution_types(selection: Selection<String>) -> Self {
        Self {
            resolution_types: Some(selection),
            ..Self::default()
        }
    }

    pub fn achieved_status(selection: Selection<AchievedStatus>) -> Self {
        Self {
            achieved_status: Some(selection),
            ..Self::default()
        }
    }

    pub fn caller_types(selection: Selection<String>) -> Self {
        Self {
            caller_types: Some(selection),
            ..Self::default()
        }
    }

    pub fn primary_intents(selection: Selection<String>) -> Self {
        Self {
            primary_intents: Some(selection),
            ..Self::default()
        }
    }

    pub fn transfer_status(selection: Selection<TransferStatus>) -> Self {
        Self {
            transfer_status: Some(selection),
            ..Self::default()
        }
    }

    pub fn duration_range(range: DurationRange) -> Self {
        Self {
            duration_range: Some(range),
            ..Self::default()
        }
    }

    pub fn multi_case(selection: Selection<MultiCaseStatus>) -> Self {
        Self {
            multi_case: Some(selection),
            ..Self::default()
        }
    }
}
