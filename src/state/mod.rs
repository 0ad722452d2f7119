//! UI-session state (pure).
//!
//! The expansion tracker and the dashboard aggregate that keeps it
//! consistent with the tree store. All transitions are synchronous and
//! testable without any rendering layer.

pub mod dashboard_state;
pub mod expansion;

// Re-export for convenience
pub use dashboard_state::DashboardState;
pub use expansion::ExpansionTracker;
