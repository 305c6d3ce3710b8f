//! # Call Filters
//!
//! Filtering and aggregation core for a call-record dataset viewer.
//!
//! ## Overview
//!
//! Records are narrowed along five categorical axes plus a duration range, and
//! the narrowed list is then bucketed per axis to show live counts next to each
//! option. This library provides:
//! - Type-safe call records and tri-state labels
//! - Per-record predicates and an "apply all filters" reducer
//! - Per-dimension counts with summed durations
//! - Case-insensitive text search
//! - A derived view-model for the filter sidebar
//!
//! Every operation is a pure function of its inputs. The store that owns the
//! records and the filter state lives outside this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use call_filters::{
//!     AchievedStatus, CallRecord, Dimension, FilterState, FilterUpdate, Selection,
//!     apply_all_filters, calculate_dimension_counts,
//! };
//!
//! let records = vec![
//!     CallRecord::new("first", "closed", "parent")
//!         .with_resolution_achieved(true)
//!         .with_call_duration(120.0),
//!     CallRecord::new("second", "open", "staff").with_resolution_achieved(false),
//! ];
//!
//! let filters = FilterState::default().with(FilterUpdate::achieved_status(
//!     Selection::from_values([AchievedStatus::Resolved]),
//! ));
//!
//! let filtered = apply_all_filters(&records, &filters);
//! assert_eq!(filtered.len(), 1);
//!
//! let counts = calculate_dimension_counts(filtered.iter().copied(), Dimension::CallerType);
//! assert_eq!(counts.count_of("parent"), 1);
//! ```
//!
//! ## Selections
//!
//! An empty selection means "accept everything". That convention is spelled out
//! as [`Selection::Unrestricted`] rather than an empty list, and a restriction
//! can never be empty:
//!
//! ```rust
//! use call_filters::Selection;
//!
//! let mut callers: Selection<String> = Selection::Unrestricted;
//! callers.toggle("parent".to_string(), true);
//! assert!(!callers.allows("staff"));
//!
//! callers.toggle("parent".to_string(), false);
//! assert!(callers.is_unrestricted());
//! ```
//!
//! ## Panel
//!
//! ```rust
//! use call_filters::{CallRecord, DatasetStats, FilterPanel, FilterState, PanelConfig};
//!
//! let records = vec![CallRecord::new("a", "closed", "parent").with_call_duration(95.0)];
//! let stats = DatasetStats::from_records(&records);
//! let filters = FilterState::for_dataset(&stats);
//!
//! let panel = FilterPanel::build(&records, &filters, &stats, &PanelConfig::default());
//! assert_eq!(panel.summary.duration_display(), "1m 35s");
//! ```

pub mod config;
pub mod counts;
pub mod error;
pub mod filters;
pub mod panel;
pub mod query;
pub mod search;
pub mod selection;
pub mod state;
pub mod stats;
pub mod types;

pub use config::{FileConfig, PanelConfig, PanelFileConfig, load_config, load_panel_config};
pub use counts::{Bucket, Dimension, DimensionCounts, calculate_dimension_counts};
pub use error::{FilterError, Result};
pub use filters::{
    apply_all_filters, matches_achieved, matches_all, matches_caller_type, matches_duration,
    matches_multi_case, matches_primary_intent, matches_resolution_type, matches_transfer_success,
};
pub use panel::{
    DurationSlider, FilterPanel, FilterSection, OptionRow, PanelSummary,
    format_count_with_percent, format_duration,
};
pub use query::CallQuery;
pub use search::search_records;
pub use selection::{Restriction, Selection};
pub use state::{DurationRange, FilterState, FilterUpdate};
pub use stats::DatasetStats;
pub use types::{AchievedStatus, CallRecord, MultiCaseStatus, TransferStatus, TriState};
