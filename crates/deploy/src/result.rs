//! Deployment result model, produced by the deploy transport.

use serde::{Deserialize, Serialize};

/// Structured outcome of one deployment.
///
/// Created by the transport per invocation and consumed exactly once by
/// the result interpreter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployDetails {
    pub component_failures: Vec<ComponentFailure>,
    pub component_successes: Vec<ComponentSuccess>,
    pub test_successes: Vec<TestSuccess>,
    pub test_failures: Vec<TestFailure>,
}

/// A component that failed to deploy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentFailure {
    /// Logical full name; absent for package-level problems.
    pub full_name: Option<String>,
    pub line_number: u32,
    pub problem: String,
    pub problem_type: String,
}

/// A component that deployed successfully.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSuccess {
    pub full_name: String,
    pub changed: bool,
    pub created: bool,
    pub deleted: bool,
}

/// A test method that passed during deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestSuccess {
    pub name: String,
    pub method_name: String,
}

/// A test method that failed during deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestFailure {
    pub name: String,
    pub method_name: String,
    pub message: String,
    pub stack_trace: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_deserialize_from_transport_payload() {
        let payload = r#"{
            "component_failures": [
                {"full_name": "Foo", "line_number": 12, "problem": "Unexpected token", "problem_type": "Error"}
            ],
            "component_successes": [
                {"full_name": "Bar", "changed": true}
            ],
            "test_failures": [
                {"name": "FooTest", "method_name": "test_parse", "message": "assertion failed", "stack_trace": "Class.FooTest.test_parse: line 8"}
            ]
        }"#;

        let details: DeployDetails = serde_json::from_str(payload).unwrap();
        assert_eq!(details.component_failures.len(), 1);
        assert_eq!(details.component_failures[0].full_name.as_deref(), Some("Foo"));
        assert_eq!(details.component_failures[0].line_number, 12);
        assert!(details.component_successes[0].changed);
        assert!(!details.component_successes[0].created);
        assert!(details.test_successes.is_empty());
        assert_eq!(details.test_failures[0].method_name, "test_parse");
    }
}
