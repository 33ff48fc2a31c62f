//! Rendering deployment results into a report and a verdict.

use crate::resolver::PushContext;
use crate::result::{ComponentSuccess, DeployDetails};

/// Logical outcome of a completed deployment.
///
/// Distinct from a transport error: the operation completed, it simply may
/// not have succeeded. Callers act only on [`is_success`](Self::is_success);
/// the variants exist for the printed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushVerdict {
    Succeeded,
    /// At least one component failed to deploy.
    ComponentsFailed,
    /// Every component deployed but at least one test failed.
    TestsFailed,
}

impl PushVerdict {
    pub fn is_success(self) -> bool {
        matches!(self, PushVerdict::Succeeded)
    }

    /// Combine verdicts across several deployments; component failures
    /// dominate test failures.
    pub fn merge(self, other: PushVerdict) -> PushVerdict {
        match (self, other) {
            (PushVerdict::ComponentsFailed, _) | (_, PushVerdict::ComponentsFailed) => {
                PushVerdict::ComponentsFailed
            }
            (PushVerdict::TestsFailed, _) | (_, PushVerdict::TestsFailed) => {
                PushVerdict::TestsFailed
            }
            _ => PushVerdict::Succeeded,
        }
    }
}

impl std::fmt::Display for PushVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PushVerdict::Succeeded => write!(f, "Push succeeded"),
            PushVerdict::ComponentsFailed => write!(f, "Some components failed deployment"),
            PushVerdict::TestsFailed => write!(f, "Some tests failed"),
        }
    }
}

/// Rendered report plus the verdict the caller acts on.
#[derive(Debug, Clone)]
pub struct PushReport {
    pub rendered: String,
    pub verdict: PushVerdict,
}

impl PushReport {
    pub(crate) fn empty() -> Self {
        Self { rendered: String::new(), verdict: PushVerdict::Succeeded }
    }
}

/// Interpret a deployment result into a report and verdict.
///
/// Component failures render one line each: problem text alone when the
/// failure carries no logical name; name, line, and problem in by-name
/// mode; otherwise the original local path (resolved through the
/// context's name index, falling back to the logical name), line, problem
/// type, and problem. Successes skip the synthetic `package.xml` entry.
/// Test sections always print, zero counts included.
pub fn interpret(details: &DeployDetails, ctx: &PushContext) -> PushReport {
    let mut out = String::new();

    let failures = &details.component_failures;
    if !failures.is_empty() {
        out.push_str(&format!("\nFailures - {}\n", failures.len()));
        for failure in failures {
            match failure.full_name.as_deref() {
                None | Some("") => {
                    out.push_str(&format!("{}\n", failure.problem));
                }
                Some(full_name) if ctx.by_name => {
                    out.push_str(&format!(
                        "ERROR with {}, line {}\n {}\n",
                        full_name, failure.line_number, failure.problem
                    ));
                }
                Some(full_name) => {
                    let shown = ctx
                        .name_paths
                        .get(full_name)
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| full_name.to_string());
                    out.push_str(&format!(
                        "\"{}\", line {}: {} {}\n",
                        shown, failure.line_number, failure.problem_type, failure.problem
                    ));
                }
            }
        }
    }

    let successes = &details.component_successes;
    if !successes.is_empty() {
        // package.xml is synthesized into every package; not reported.
        let reported = successes.iter().filter(|s| s.full_name != "package.xml");
        out.push_str(&format!("\nSuccesses - {}\n", reported.clone().count()));
        for success in reported {
            out.push_str(&format!("\t{}: {}\n", success.full_name, verb(success)));
        }
    }

    out.push_str(&format!("\nTest Successes - {}\n", details.test_successes.len()));
    for test in &details.test_successes {
        out.push_str(&format!("  [PASS]  {}::{}\n", test.name, test.method_name));
    }

    out.push_str(&format!("\nTest Failures - {}\n", details.test_failures.len()));
    for test in &details.test_failures {
        out.push_str(&format!(
            "\n  [FAIL]  {}::{}: {}\n{}\n",
            test.name, test.method_name, test.message, test.stack_trace
        ));
    }

    let verdict = if !details.component_failures.is_empty() {
        PushVerdict::ComponentsFailed
    } else if !details.test_failures.is_empty() {
        PushVerdict::TestsFailed
    } else {
        PushVerdict::Succeeded
    };

    PushReport { rendered: out, verdict }
}

/// Display verb for a successful component; `changed` wins over `deleted`
/// and `created` when the service flags more than one.
fn verb(success: &ComponentSuccess) -> &'static str {
    if success.changed {
        "changed"
    } else if success.deleted {
        "deleted"
    } else if success.created {
        "created"
    } else {
        "unchanged"
    }
}
