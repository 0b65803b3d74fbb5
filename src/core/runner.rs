use crate::core::palindrome::is_palindrome;
use crate::core::search::search;
use crate::core::{Case, CaseSource, Outcome, SuiteReport};
use chrono::Utc;

pub struct SuiteRunner<S: CaseSource> {
    source: S,
}

impl<S: CaseSource> SuiteRunner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self) -> SuiteReport {
        let cases = self.source.cases();
        tracing::info!(
            "Running suite '{}' ({} cases)",
            self.source.suite_name(),
            cases.len()
        );

        let outcomes: Vec<Outcome> = cases.iter().map(evaluate).collect();

        let report = SuiteReport {
            suite: self.source.suite_name().to_string(),
            generated_at: Utc::now(),
            outcomes,
        };

        tracing::info!(
            "Suite '{}' finished: {} passed, {} failed",
            report.suite,
            report.passed(),
            report.failed()
        );
        report
    }
}

/// Runs a single case against its exercise.
pub fn evaluate(case: &Case) -> Outcome {
    let (expected, actual, passed) = match case {
        Case::Search {
            nums,
            target,
            expected,
            ..
        } => {
            let actual = search(nums, target);
            (expected.to_string(), actual.to_string(), actual == *expected)
        }
        Case::Palindrome {
            value, expected, ..
        } => {
            let actual = is_palindrome(*value);
            (expected.to_string(), actual.to_string(), actual == *expected)
        }
    };

    let label = case.label();
    if passed {
        tracing::debug!("✅ {} -> {}", label, actual);
    } else {
        tracing::warn!("❌ {}: expected {}, got {}", label, expected, actual);
    }

    Outcome {
        label,
        kind: case.kind().to_string(),
        expected,
        actual,
        passed,
    }
}
