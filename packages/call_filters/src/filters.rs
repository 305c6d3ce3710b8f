//! Per-record predicates and the combined reducer.
//!
//! Every categorical predicate accepts all records when its selection is
//! [`Selection::Unrestricted`]. The duration predicate is the exception: a
//! record without a duration never passes it, whatever the range.

use crate::selection::Selection;
use crate::state::{DurationRange, FilterState};
use crate::types::{AchievedStatus, CallRecord, MultiCaseStatus, TransferStatus, TriState};
use tracing::debug;

pub fn matches_resolution_type(record: &CallRecord, types: &Selection<String>) -> bool {
    types.allows(record.resolution_type.as_str())
}

pub fn matches_achieved(record: &CallRecord, status: &Selection<AchievedStatus>) -> bool {
    matches_tri_state(record.resolution_achieved, status)
}

pub fn matches_caller_type(record: &CallRecord, types: &Selection<String>) -> bool {
    types.allows(record.caller_type.as_str())
}

pub fn matches_primary_intent(record: &CallRecord, intents: &Selection<String>) -> bool {
    intents.allows(record.primary_intent_label())
}

pub fn matches_transfer_success(record: &CallRecord, status: &Selection<TransferStatus>) -> bool {
    matches_tri_state(record.transfer_success, status)
}

pub fn matches_duration(record: &CallRecord, range: &DurationRange) -> bool {
    match record.call_duration {
        Some(secs) => range.contains(secs),
        None => false,
    }
}

pub fn matches_multi_case(record: &CallRecord, values: &Selection<MultiCaseStatus>) -> bool {
    matches_tri_state(record.multi_case_details, values)
}

fn matches_tri_state<T: TriState>(flag: Option<bool>, selection: &Selection<T>) -> bool {
    selection.allows(&T::from_flag(flag))
}

pub fn matches_all(record: &CallRecord, filters: &FilterState) -> bool {
    matches_resolution_type(record, &filters.resolution_types)
        && matches_achieved(record, &filters.achieved_status)
        && matches_caller_type(record, &filters.caller_types)
        && matches_primary_intent(record, &filters.primary_intents)
        && matches_transfer_success(record, &filters.transfer_status)
        && matches_duration(record, &filters.duration_range)
        && matches_multi_case(record, &filters.multi_case)
}

/// Keeps every record passing [`matches_all`], in input order.
pub fn apply_all_filters<'a, I>(records: I, filters: &FilterState) -> Vec<&'a CallRecord>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let mut total = 0usize;
    let kept: Vec<&'a CallRecord> = records
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|record| matches_all(record, filters))
        .collect();

    debug!(total, kept = kept.len(), "applied filters");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FilterUpdate;

    fn example_records() -> Vec<CallRecord> {
        vec![
            CallRecord::new("first", "closed", "parent")
                .with_resolution_achieved(true)
                .with_call_duration(120.0),
            CallRecord::new("second", "open", "staff").with_resolution_achieved(false),
        ]
    }

    fn strings(values: &[&str]) -> Selection<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_achieved_filter_example() {
        let records = example_records();
        let filters = FilterState::default().with(FilterUpdate::achieved_status(
            Selection::from_values([AchievedStatus::Resolved]),
        ));

        let result = apply_all_filters(&records, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "first");
    }

    #[test]
    fn test_unrestricted_state_drops_only_missing_durations() {
        let records = example_records();
        let result = apply_all_filters(&records, &FilterState::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "first");
    }

    #[test]
    fn test_missing_duration_never_matches() {
        let record = CallRecord::new("a", "closed", "parent");
        assert!(!matches_duration(&record, &DurationRange::full()));
        assert!(!matches_duration(&record, &DurationRange::new(0.0, 0.0).unwrap()));
    }

    #[test]
    fn test_duration_bounds_are_inclusive() {
        let record = CallRecord::new("a", "closed", "parent").with_call_duration(60.0);
        assert!(matches_duration(&record, &DurationRange::new(60.0, 60.0).unwrap()));
        assert!(!matches_duration(&record, &DurationRange::new(61.0, 90.0).unwrap()));
    }

    #[test]
    fn test_categorical_matches_raw_value() {
        let record = CallRecord::new("a", "callback_scheduled", "parent");
        assert!(matches_resolution_type(&record, &Selection::Unrestricted));
        assert!(matches_resolution_type(&record, &strings(&["callback_scheduled"])));
        assert!(!matches_resolution_type(&record, &strings(&["Callback_Scheduled"])));
        assert!(matches_caller_type(&record, &strings(&["staff", "parent"])));
        assert!(!matches_caller_type(&record, &strings(&["staff"])));
    }

    #[test]
    fn test_missing_intent_matches_unknown() {
        let record = CallRecord::new("a", "closed", "parent");
        assert!(matches_primary_intent(&record, &strings(&["unknown"])));
        assert!(!matches_primary_intent(&record, &strings(&["billing"])));

        let billing = record.with_primary_intent("billing");
        assert!(matches_primary_intent(&billing, &strings(&["billing"])));
        assert!(!matches_primary_intent(&billing, &strings(&["unknown"])));
    }

    #[test]
    fn test_achieved_tri_state() {
        let unknown = CallRecord::new("a", "closed", "parent");
        let resolved = unknown.clone().with_resolution_achieved(true);
        let unresolved = unknown.clone().with_resolution_achieved(false);

        let only_unresolved = Selection::from_values([AchievedStatus::Unresolved]);
        assert!(matches_achieved(&unresolved, &only_unresolved));
        assert!(!matches_achieved(&resolved, &only_unresolved));
        assert!(!matches_achieved(&unknown, &only_unresolved));

        let only_unknown = Selection::from_values([AchievedStatus::Unknown]);
        assert!(matches_achieved(&unknown, &only_unknown));
        assert!(!matches_achieved(&resolved, &only_unknown));
        assert!(!matches_achieved(&unresolved, &only_unknown));
    }

    #[test]
    fn test_transfer_tri_state() {
        let none = CallRecord::new("a", "closed", "parent");
        let ok = none.clone().with_transfer_success(true);
        let failed = none.clone().with_transfer_success(false);

        let only_no_transfer = Selection::from_values([TransferStatus::NoTransfer]);
        assert!(matches_transfer_success(&none, &only_no_transfer));
        assert!(!matches_transfer_success(&ok, &only_no_transfer));
        assert!(!matches_transfer_success(&failed, &only_no_transfer));

        let ok_or_failed =
            Selection::from_values([TransferStatus::Successful, TransferStatus::Failed]);
        assert!(!matches_transfer_success(&none, &ok_or_failed));
        assert!(matches_transfer_success(&ok, &ok_or_failed));
        assert!(matches_transfer_success(&failed, &ok_or_failed));

        let only_failed = Selection::from_values([TransferStatus::Failed]);
        assert!(matches_transfer_success(&failed, &only_failed));
        assert!(!matches_transfer_success(&ok, &only_failed));
        assert!(!matches_transfer_success(&none, &only_failed));
    }

    #[test]
    fn test_multi_case_tri_state() {
        let unknown = CallRecord::new("a", "closed", "parent");
        let multi = unknown.clone().with_multi_case(true);

        let only_unknown = Selection::from_values([MultiCaseStatus::Unknown]);
        assert!(matches_multi_case(&unknown, &only_unknown));
        assert!(!matches_multi_case(&multi, &only_unknown));
        assert!(matches_multi_case(&multi, &Selection::Unrestricted));

        let single = unknown.clone().with_multi_case(false);
        let only_false = Selection::from_values([MultiCaseStatus::False]);
        assert!(matches_multi_case(&single, &only_false));
        assert!(!matches_multi_case(&single, &only_unknown));
        assert!(!matches_multi_case(&multi, &only_false));
        assert!(!matches_multi_case(&unknown, &only_false));
    }

    #[test]
    fn test_all_filters_combine_with_and() {
        let records = vec![
            CallRecord::new("a", "closed", "parent").with_call_duration(30.0),
            CallRecord::new("b", "closed", "staff").with_call_duration(30.0),
            CallRecord::new("c", "open", "parent").with_call_duration(30.0),
            CallRecord::new("d", "closed", "parent").with_call_duration(300.0),
        ];
        let filters = FilterState {
            resolution_types: strings(&["closed"]),
            caller_types: strings(&["parent"]),
            duration_range: DurationRange::new(0.0, 60.0).unwrap(),
            ..FilterState::default()
        };

        let names: Vec<&str> = apply_all_filters(&records, &filters)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["a"]);
    }

    #[test]
    fn test_filtering_preserves_order() {
        let records: Vec<CallRecord> = (0..5)
            .map(|i| CallRecord::new(format!("call-{i}"), "closed", "parent").with_call_duration(i as f64))
            .collect();
        let names: Vec<&str> = apply_all_filters(&records, &FilterState::default())
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["call-0", "call-1", "call-2", "call-3", "call-4"]);
    }
}
