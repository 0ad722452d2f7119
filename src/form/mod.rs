//! Form adapter: drafts, patches, and normalization.
//!
//! The modal forms hand over raw, unvalidated user input. Everything
//! here turns that input into clean drafts the store will accept, or a
//! field-level [`ValidationError`](crate::model::ValidationError) the
//! form can attach to the right input.

pub mod draft;

pub use draft::{
    normalize_data_set_draft, normalize_scenario_draft, normalize_test_case_draft, DataSetDraft,
    DataSetPatch, ScenarioDraft, ScenarioPatch, TestCaseDraft, TestCasePatch,
};
