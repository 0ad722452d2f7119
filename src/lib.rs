//! Testdeck
//!
//! Tree-state engine for a test-management dashboard: projects own
//! scenarios, scenarios own test cases, test cases own test data sets.
//! This crate holds the in-memory tree, its mutation operations
//! (create, edit, duplicate, delete with cascade), the expand/collapse
//! UI state, form-draft normalization, and display projections.
//!
//! Rendering, routing, and the backing REST service are external
//! collaborators. They consume this crate through [`state::DashboardState`]
//! and seed it via [`source::ScenarioSource`].

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod store;
pub mod view_state;
