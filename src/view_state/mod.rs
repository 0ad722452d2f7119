//! Display projections (pure).
//!
//! Read-only derivations over the tree store for the rendering
//! collaborator: child counts, summary rows, and badge colors. Nothing
//! in here holds state or mutates anything.

pub mod styles;
pub mod summary;

// Re-export for convenience
pub use styles::{color_for_priority, color_for_priority_label, color_for_tag, BadgeColor};
pub use summary::{
    count_data_sets, count_test_cases, format_values, ScenarioSummary, TestCaseSummary,
};
