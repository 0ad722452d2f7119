//! Test data sets: named input/expected-output pairs for a test case.

use crate::model::{DataSetId, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ===== ScalarValue =====

/// A single value inside a data-set mapping.
///
/// The dashboard's data sets are loose key/value objects on the wire;
/// in memory they are a closed scalar variant so every value the engine
/// accepts is guaranteed to serialize back unchanged. Integer and float
/// are distinct variants to keep `42` and `42.5` lossless round trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON integer.
    Int(i64),
    /// JSON non-integer number.
    Float(f64),
    /// JSON string.
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => f.write_str("null"),
            ScalarValue::Bool(b) => write!(f, "{b}"),
            ScalarValue::Int(n) => write!(f, "{n}"),
            ScalarValue::Float(n) => write!(f, "{n}"),
            ScalarValue::Text(s) => f.write_str(s),
        }
    }
}

/// Ordered mapping of field names to scalar values.
///
/// Key order is deterministic (lexicographic), which keeps serialized
/// documents stable across load/save cycles.
pub type ValueMap = BTreeMap<String, ScalarValue>;

// ===== TestDataSet =====

/// A named input/expected-output pair used to parameterize one test
/// case execution.
#[derive(Debug, Clone, PartialEq)]
pub struct TestDataSet {
    id: DataSetId,
    name: String,
    input_values: ValueMap,
    expected_output: ValueMap,
    version: String,
    last_updated: DateTime<Utc>,
}

impl TestDataSet {
    /// Create a data set. The name must be non-empty after trimming.
    pub fn new(
        id: DataSetId,
        name: impl Into<String>,
        input_values: ValueMap,
        expected_output: ValueMap,
        version: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            input_values,
            expected_output,
            version: version.into(),
            last_updated,
        })
    }

    // ===== Accessors (read-only) =====

    /// Data set identifier.
    pub fn id(&self) -> &DataSetId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input field values.
    pub fn input_values(&self) -> &ValueMap {
        &self.input_values
    }

    /// Expected output field values.
    pub fn expected_output(&self) -> &ValueMap {
        &self.expected_output
    }

    /// Version label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Last-updated timestamp.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    // ===== Mutators (store-internal) =====

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_input_values(&mut self, values: ValueMap) {
        self.input_values = values;
    }

    pub(crate) fn set_expected_output(&mut self, values: ValueMap) {
        self.expected_output = values;
    }

    pub(crate) fn set_version(&mut self, version: String) {
        self.version = version;
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }

    /// Copy with a freshly generated identifier and timestamp.
    /// The name is kept; renaming the top of a duplicated subtree is
    /// the caller's concern.
    pub(crate) fn duplicate_deep(&self, now: DateTime<Utc>) -> Self {
        Self {
            id: DataSetId::generate(),
            name: self.name.clone(),
            input_values: self.input_values.clone(),
            expected_output: self.expected_output.clone(),
            version: self.version.clone(),
            last_updated: now,
        }
    }
}

// ===== Tests =====
