//! Deployment options passed through to the deploy transport.

use serde::{Deserialize, Serialize};

/// Options for one deployment.
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Allow the deploy to succeed even if files are missing.
    pub allow_missing_files: bool,
    /// Automatically add files to the package manifest if missing.
    pub auto_update_package: bool,
    /// Validate only, don't actually save components.
    pub check_only: bool,
    /// Indicates whether warnings fail the deployment.
    pub ignore_warnings: bool,
    /// Deleted components bypass the recycle bin.
    pub purge_on_delete: bool,
    /// Any failure causes a complete rollback.
    pub rollback_on_error: bool,
    /// Deploy as a single package.
    pub single_package: bool,
    /// Test level for the deployment.
    pub test_level: Option<TestLevel>,
    /// Specific tests to run (when test_level is RunSpecifiedTests).
    pub run_tests: Vec<String>,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            allow_missing_files: false,
            auto_update_package: false,
            check_only: false,
            ignore_warnings: false,
            purge_on_delete: false,
            rollback_on_error: false,
            single_package: true,
            test_level: None,
            run_tests: vec![],
        }
    }
}

impl DeployOptions {
    /// Run every Apex test defined in the organization, the equivalent of
    /// the `RunAllTestsInOrg` test level.
    pub fn run_all_tests(mut self) -> Self {
        self.test_level = Some(TestLevel::RunAllTestsInOrg);
        self
    }
}

/// Test level for deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TestLevel {
    /// No tests run.
    #[default]
    NoTestRun,
    /// Run local tests only.
    RunLocalTests,
    /// Run all tests in org.
    RunAllTestsInOrg,
    /// Run specified tests.
    RunSpecifiedTests,
}

impl std::fmt::Display for TestLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestLevel::NoTestRun => write!(f, "NoTestRun"),
            TestLevel::RunLocalTests => write!(f, "RunLocalTests"),
            TestLevel::RunAllTestsInOrg => write!(f, "RunAllTestsInOrg"),
            TestLevel::RunSpecifiedTests => write!(f, "RunSpecifiedTests"),
        }
    }
}

impl std::str::FromStr for TestLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NoTestRun" => Ok(TestLevel::NoTestRun),
            "RunLocalTests" => Ok(TestLevel::RunLocalTests),
            "RunAllTestsInOrg" => Ok(TestLevel::RunAllTestsInOrg),
            "RunSpecifiedTests" => Ok(TestLevel::RunSpecifiedTests),
            _ => Err(format!("Unknown test level: {}", s)),
        }
    }
}
