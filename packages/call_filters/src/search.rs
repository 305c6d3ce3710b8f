use crate::types::CallRecord;
use tracing::debug;

/// Case-insensitive substring search over name, final outcome, caller type and path.
///
/// A blank query keeps every record.
pub fn search_records<'a, I>(records: I, query: &str) -> Vec<&'a CallRecord>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    if query.trim().is_empty() {
        return records.into_iter().collect();
    }

    let search_lower = query.to_lowercase();
    let matches: Vec<&'a CallRecord> = records
        .into_iter()
        .filter(|record| {
            [
                &record.name,
                &record.final_outcome,
                &record.caller_type,
                &record.path,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&search_lower))
        })
        .collect();

    debug!(query, matches = matches.len(), "searched records");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<CallRecord> {
        vec![
            CallRecord::new("Smith_Intake.json", "closed", "parent")
                .with_final_outcome("Enrollment confirmed")
                .with_path("2024/march/Smith_Intake.json"),
            CallRecord::new("call-17.json", "open", "staff")
                .with_final_outcome("Left voicemail")
                .with_path("2024/april/call-17.json"),
        ]
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let records = records();
        assert_eq!(search_records(&records, "").len(), 2);
        assert_eq!(search_records(&records, "   \t").len(), 2);
    }

    #[test]
    fn test_search_ignores_case() {
        let records = records();
        let results = search_records(&records, "SMITH");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Smith_Intake.json");

        let results = search_records(&records, "VoiceMail");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "call-17.json");
    }

    #[test]
    fn test_search_covers_caller_type_and_path() {
        let records = records();
        assert_eq!(search_records(&records, "Staff")[0].name, "call-17.json");
        assert_eq!(search_records(&records, "march")[0].name, "Smith_Intake.json");
        assert!(search_records(&records, "billing").is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed_when_matching() {
        let records = records();
        assert_eq!(search_records(&records, " confirmed").len(), 1);
        assert!(search_records(&records, "confirmed ").is_empty());
    }
}
