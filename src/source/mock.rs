//! Built-in sample data.
//!
//! Serves a canned project document when no backing store is
//! configured, mirroring what the real service would return for a
//! small e-commerce project. Persisting against the mock source logs
//! the snapshot and succeeds without storing anything.

use crate::model::{Project, Scenario, SourceError};
use crate::parser::{self, ParsedScenarios};
use tracing::info;

/// The canned document the mock source serves.
const SAMPLE_DOCUMENT: &str = r#"{
  "project": {
    "id": "proj-001",
    "name": "E-Commerce Web App",
    "description": "Customer-facing storefront and checkout",
    "owner": "QA Team",
    "status": "active",
    "version": "v2.1",
    "lastUpdated": "2024-01-15T09:30:00Z"
  },
  "scenarios": [
    {
      "id": "scn-001",
      "name": "User Registration Flow",
      "description": "Complete user registration process including email verification",
      "priority": "High",
      "version": "v1.2",
      "lastUpdated": "2024-01-15T09:30:00Z",
      "test_cases": [
        {
          "id": "tc-001",
          "name": "Register with valid email",
          "steps": [
            "Navigate to registration page",
            "Enter valid email address",
            "Enter strong password",
            "Confirm password",
            "Click Register button"
          ],
          "expected_result": "User successfully registered and verification email sent",
          "tags": ["Regression", "Smoke"],
          "version": "v1.2",
          "lastUpdated": "2024-01-15T09:30:00Z",
          "data_sets": [
            {
              "id": "td-001",
              "name": "Valid registration",
              "input_values": {
                "email": "user@example.com",
                "password": "StrongPass123!",
                "confirmPassword": "StrongPass123!"
              },
              "expected_output": { "result": "Registration successful" },
              "version": "v1.2",
              "lastUpdated": "2024-01-15T09:30:00Z"
            }
          ]
        },
        {
          "id": "tc-002",
          "name": "Register with invalid email format",
          "steps": [
            "Navigate to registration page",
            "Enter invalid email format (e.g., invalid@)",
            "Enter password",
            "Click Register button"
          ],
          "expected_result": "Error message displayed for invalid email format",
          "tags": ["Negative", "Validation"],
          "version": "v1.1",
          "lastUpdated": "2024-01-14T16:20:00Z",
          "data_sets": [
            {
              "id": "td-002",
              "name": "Invalid email",
              "input_values": {
                "email": "invalid@",
                "password": "password123",
                "confirmPassword": "password123"
              },
              "expected_output": { "result": "Email validation error" },
              "version": "v1.1",
              "lastUpdated": "2024-01-14T16:20:00Z"
            }
          ]
        }
      ]
    },
    {
      "id": "scn-002",
      "name": "Payment Processing",
      "description": "Credit card and PayPal payment flows with error handling",
      "priority": "High",
      "version": "v1.1",
      "lastUpdated": "2024-01-14T11:05:00Z",
      "test_cases": [
        {
          "id": "tc-003",
          "name": "Process credit card payment",
          "steps": [
            "Add items to cart",
            "Proceed to checkout",
            "Enter valid credit card details",
            "Click Pay Now button",
            "Verify payment confirmation"
          ],
          "expected_result": "Payment processed successfully and confirmation displayed",
          "tags": ["Critical", "Integration"],
          "version": "v1.0",
          "lastUpdated": "2024-01-13T10:00:00Z",
          "data_sets": [
            {
              "id": "td-003",
              "name": "Visa card payment",
              "input_values": {
                "cardNumber": "4111111111111111",
                "expiryDate": "12/25",
                "cvv": "123",
                "amount": 99.99
              },
              "expected_output": { "result": "Payment processed successfully" },
              "version": "v1.0",
              "lastUpdated": "2024-01-13T10:00:00Z"
            }
          ]
        }
      ]
    },
    {
      "id": "scn-003",
      "name": "Product Search",
      "description": "Search functionality with filters and sorting options",
      "priority": "Medium",
      "version": "v1.0",
      "lastUpdated": "2024-01-13T09:00:00Z",
      "test_cases": []
    }
  ]
}"#;

/// Source serving the canned sample document.
#[derive(Debug, Clone, Default)]
pub struct MockSource;

impl MockSource {
    /// Create a mock source.
    pub fn new() -> Self {
        Self
    }

    /// The sample project record.
    ///
    /// # Errors
    ///
    /// Propagates parse failures; the sample document is static, so in
    /// practice this only fails if the fixture itself is broken.
    pub fn fetch_project(&self) -> Result<Project, SourceError> {
        let document = parser::parse_document(SAMPLE_DOCUMENT)?;
        Ok(document.project)
    }

    /// The sample scenario tree.
    ///
    /// # Errors
    ///
    /// Same as [`MockSource::fetch_project`].
    pub fn fetch_scenarios(&self) -> Result<ParsedScenarios, SourceError> {
        let document = parser::parse_document(SAMPLE_DOCUMENT)?;
        Ok(ParsedScenarios {
            scenarios: document.scenarios,
            issues: document.issues,
        })
    }

    /// Log the snapshot and report success. Nothing is stored; the
    /// mock source exists so the dashboard works end to end without a
    /// backing service.
    ///
    /// # Errors
    ///
    /// Fails only if the tree cannot be serialized at all, so callers
    /// exercise the same error path as with a real backing store.
    pub fn persist(&self, project: &Project, scenarios: &[Scenario]) -> Result<(), SourceError> {
        let json = parser::document_to_json(project, scenarios)?;
        info!(
            project = %project.id(),
            scenarios = scenarios.len(),
            bytes = json.len(),
            "mock persist: snapshot discarded"
        );
        Ok(())
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, ProjectStatus, ScalarValue};

    #[test]
    fn sample_project_parses_cleanly() {
        let project = MockSource::new().fetch_project().expect("fixture is valid");
        assert_eq!(project.id().as_str(), "proj-001");
        assert_eq!(project.name(), "E-Commerce Web App");
        assert_eq!(project.status(), ProjectStatus::Active);
    }

    #[test]
    fn sample_scenarios_parse_without_issues() {
        let parsed = MockSource::new().fetch_scenarios().expect("fixture is valid");
        assert!(parsed.issues.is_empty(), "Fixture must be clean: {:?}", parsed.issues);
        assert_eq!(parsed.scenarios.len(), 3);
    }

    #[test]
    fn sample_tree_has_the_expected_shape() {
        let parsed = MockSource::new().fetch_scenarios().expect("fixture is valid");
        let registration = &parsed.scenarios[0];
        assert_eq!(registration.name(), "User Registration Flow");
        assert_eq!(registration.priority(), Priority::High);
        assert_eq!(registration.test_cases().len(), 2);
        assert_eq!(registration.test_cases()[0].data_sets().len(), 1);

        let search = &parsed.scenarios[2];
        assert_eq!(search.priority(), Priority::Medium);
        assert!(search.test_cases().is_empty());
    }

    #[test]
    fn sample_payment_amount_is_a_float() {
        let parsed = MockSource::new().fetch_scenarios().expect("fixture is valid");
        let payment_data = &parsed.scenarios[1].test_cases()[0].data_sets()[0];
        assert_eq!(
            payment_data.input_values().get("amount"),
            Some(&ScalarValue::Float(99.99))
        );
    }

    #[test]
    fn persist_succeeds_without_storing() {
        let mock = MockSource::new();
        let project = mock.fetch_project().expect("fixture is valid");
        let scenarios = mock.fetch_scenarios().expect("fixture is valid").scenarios;
        mock.persist(&project, &scenarios).expect("mock persist succeeds");
    }
}
