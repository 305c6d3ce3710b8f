use crate::state::DurationRange;
use crate::types::CallRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Options the panel offers for a dataset, derived from its records.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DatasetStats {
    pub total_records: usize,
    pub resolution_types: Vec<String>,
    pub caller_types: Vec<String>,
    pub primary_intents: Vec<String>,
    /// `None` when no record has a duration.
    pub duration_range: Option<DurationRange>,
}

impl DatasetStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CallRecord>,
    {
        let mut total_records = 0;
        let mut resolution_types = BTreeSet::new();
        let mut caller_types = BTreeSet::new();
        let mut primary_intents = BTreeSet::new();
        let mut bounds: Option<(f64, f64)> = None;

        for record in records {
            total_records += 1;
            resolution_types.insert(record.resolution_type.as_str());
            caller_types.insert(record.caller_type.as_str());
            primary_intents.insert(record.primary_intent_label());

            if let Some(secs) = record.call_duration.filter(|d| !d.is_nan()) {
                bounds = Some(match bounds {
                    Some((min, max)) => (min.min(secs), max.max(secs)),
                    None => (secs, secs),
                });
            }
        }

        Self {
            total_records,
            resolution_types: resolution_types.into_iter().map(str::to_string).collect(),
            caller_types: caller_types.into_iter().map(str::to_string).collect(),
            primary_intents: primary_intents.into_iter().map(str::to_string).collect(),
            duration_range: bounds.and_then(|(min, max)| DurationRange::new(min, max).ok()),
        }
    }
}
