//! Badge color lookup tables.
//!
//! Fixed mappings from tags and priorities to abstract badge colors.
//! The rendering collaborator maps [`BadgeColor`] onto its own theme;
//! this crate only decides which bucket a label falls into. Unknown
//! labels always land on the gray fallback rather than failing.

use crate::model::Priority;

/// Abstract badge color bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    /// High-attention red.
    Red,
    /// Warning orange.
    Orange,
    /// Caution yellow.
    Yellow,
    /// Positive green.
    Green,
    /// Informational blue.
    Blue,
    /// Deep indigo.
    Indigo,
    /// Accent purple.
    Purple,
    /// Neutral fallback.
    Gray,
}

/// Badge color for a test case tag.
///
/// Known tags get the dashboard's fixed palette; anything else falls
/// back to [`BadgeColor::Gray`].
pub fn color_for_tag(tag: &str) -> BadgeColor {
    match tag {
        "Regression" => BadgeColor::Blue,
        "Smoke" => BadgeColor::Green,
        "Critical" => BadgeColor::Red,
        "Negative" => BadgeColor::Orange,
        "Validation" => BadgeColor::Purple,
        "Integration" => BadgeColor::Indigo,
        _ => BadgeColor::Gray,
    }
}

/// Badge color for a scenario priority.
pub fn color_for_priority(priority: Priority) -> BadgeColor {
    match priority {
        Priority::High => BadgeColor::Red,
        Priority::Medium => BadgeColor::Yellow,
        Priority::Low => BadgeColor::Green,
    }
}

/// Badge color for a raw priority label, for callers that render wire
/// data without parsing it first. Unrecognized labels fall back to
/// [`BadgeColor::Gray`].
pub fn color_for_priority_label(label: &str) -> BadgeColor {
    match Priority::parse(label) {
        Some(priority) => color_for_priority(priority),
        None => BadgeColor::Gray,
    }
}

// ===== Tests =====
