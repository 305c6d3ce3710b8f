//! View-model for the filter sidebar.
//!
//! Everything here is derived: build a [`FilterPanel`] from the current
//! records and filter state each time either changes.

use crate::config::PanelConfig;
use crate::counts::{Dimension, DimensionCounts, calculate_dimension_counts};
use crate::filters::apply_all_filters;
use crate::selection::Selection;
use crate::state::{DurationRange, FilterState};
use crate::stats::DatasetStats;
use crate::types::{AchievedStatus, CallRecord, MultiCaseStatus, TransferStatus, TriState};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPanel {
    pub summary: PanelSummary,
    pub sections: Vec<FilterSection>,
    pub duration: DurationSlider,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSummary {
    pub filtered: usize,
    pub total: usize,
    pub total_duration_secs: f64,
}

impl PanelSummary {
    pub fn duration_display(&self) -> String {
        format_duration(self.total_duration_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSection {
    pub dimension: Dimension,
    pub title: &'static str,
    /// Badge count: explicitly selected options.
    pub selected: usize,
    pub options: Vec<OptionRow>,
}

impl FilterSection {
    pub fn option(&self, value: &str) -> Option<&OptionRow> {
        self.options.iter().find(|o| o.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionRow {
    pub value: String,
    pub label: String,
    pub checked: bool,
    pub count: usize,
    pub percent: u32,
    /// `"count | percent%"`
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: DurationRange,
}

impl DurationSlider {
    pub fn value_display(&self) -> (String, String) {
        (
            format_duration(self.value.min()),
            format_duration(self.value.max()),
        )
    }
}

impl FilterPanel {
    pub fn build(
        records: &[CallRecord],
        filters: &FilterState,
        stats: &DatasetStats,
        config: &PanelConfig,
    ) -> Self {
        let filtered = apply_all_filters(records, filters);
        let total = filtered.len();
        let counts = |dimension| calculate_dimension_counts(filtered.iter().copied(), dimension);

        let summary = PanelSummary {
            filtered: total,
            total: records.len(),
            total_duration_secs: filtered.iter().filter_map(|r| r.call_duration).sum(),
        };

        let sections = vec![
            categorical_section(
                Dimension::ResolutionType,
                &stats.resolution_types,
                &filters.resolution_types,
                &counts(Dimension::ResolutionType),
                total,
                config,
            ),
            tri_state_section::<AchievedStatus>(
                Dimension::Achieved,
                &filters.achieved_status,
                &counts(Dimension::Achieved),
                total,
                config,
            ),
            categorical_section(
                Dimension::CallerType,
                &stats.caller_types,
                &filters.caller_types,
                &counts(Dimension::CallerType),
                total,
                config,
            ),
            categorical_section(
                Dimension::PrimaryIntent,
                &stats.primary_intents,
                &filters.primary_intents,
                &counts(Dimension::PrimaryIntent),
                total,
                config,
            ),
            tri_state_section::<TransferStatus>(
                Dimension::Transfer,
                &filters.transfer_status,
                &counts(Dimension::Transfer),
                total,
                config,
            ),
            tri_state_section::<MultiCaseStatus>(
                Dimension::MultiCase,
                &filters.multi_case,
                &counts(Dimension::MultiCase),
                total,
                config,
            ),
        ];

        // No durations in the dataset: pin the slider to zero.
        let bounds = stats.duration_range.unwrap_or(DurationRange::ZERO);
        let duration = DurationSlider {
            min: bounds.min(),
            max: bounds.max(),
            step: config.duration_step_secs,
            value: filters.duration_range.clamp_to(&bounds),
        };

        debug!(
            filtered = summary.filtered,
            total = summary.total,
            "built filter panel"
        );

        Self {
            summary,
            sections,
            duration,
        }
    }

    pub fn section(&self, dimension: Dimension) -> Option<&FilterSection> {
        self.sections.iter().find(|s| s.dimension == dimension)
    }
}

fn categorical_section(
    dimension: Dimension,
    values: &[String],
    selection: &Selection<String>,
    counts: &DimensionCounts,
    total: usize,
    config: &PanelConfig,
) -> FilterSection {
    let rows = values.iter().map(|value| {
        option_row(
            value.clone(),
            humanize_label(value),
            selection.contains(value.as_str()),
            counts.count_of(value),
            total,
        )
    });
    section(dimension, selection.len(), rows, config)
}

fn tri_state_section<T: TriState>(
    dimension: Dimension,
    selection: &Selection<T>,
    counts: &DimensionCounts,
    total: usize,
    config: &PanelConfig,
) -> FilterSection {
    let rows = T::ALL.into_iter().map(|status| {
        option_row(
            status.as_str().to_string(),
            status.display_label().to_string(),
            selection.contains(&status),
            counts.count_of(status.as_str()),
            total,
        )
    });
    section(dimension, selection.len(), rows, config)
}

fn section(
    dimension: Dimension,
    selected: usize,
    rows: impl Iterator<Item = OptionRow>,
    config: &PanelConfig,
) -> FilterSection {
    FilterSection {
        dimension,
        title: dimension.title(),
        selected,
        options: rows
            .filter(|row| !config.hide_empty_options || row.count > 0 || row.checked)
            .collect(),
    }
}

fn option_row(value: String, label: String, checked: bool, count: usize, total: usize) -> OptionRow {
    let percent = percent_of(count, total);
    OptionRow {
        value,
        label,
        checked,
        count,
        percent,
        display: format_count_with_percent(count, total),
    }
}

/// Rounded share of `total`, or 0 when `total` is 0.
pub fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

pub fn format_count_with_percent(count: usize, total: usize) -> String {
    if total == 0 {
        return "0 | 0%".to_string();
    }
    format!("{} | {}%", count, percent_of(count, total))
}

/// Formats whole seconds as `1h 2m 3s`, `2m 3s` or `3s`. Fractions are dropped
/// and negative input reads as zero.
pub fn format_duration(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// `callback_scheduled` → `callback scheduled`
pub fn humanize_label(value: &str) -> String {
    value.replace('_', " ")
}
