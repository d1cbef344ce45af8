//! Suite runner: evaluate every scenario, compare against its
//! expectation, and digest the run.

use crate::evaluate::outcome_of;
use crate::report::{canonical_hash, ScenarioResult};
use crate::scenario::Scenario;

#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Canonical digest of the outcomes, independent of expectations.
    pub fn digest(&self) -> String {
        canonical_hash(&self.results)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

/// Run scenarios in order. Each one builds its own Church values, so
/// results never depend on what ran before.
pub fn run_suite(scenarios: &[Scenario]) -> SuiteReport {
    let results = scenarios
        .iter()
        .map(|s| {
            let outcome = outcome_of(s);
            ScenarioResult {
                name: s.name.clone(),
                passed: outcome == s.expected,
                outcome,
            }
        })
        .collect();
    SuiteReport { results }
}

/// Run the suite twice and assert identical digests. Panics on failure.
pub fn verify_determinism(scenarios: &[Scenario]) {
    let digest1 = run_suite(scenarios).digest();
    let digest2 = run_suite(scenarios).digest();

    if digest1 != digest2 {
        panic!(
            "DETERMINISM FAILURE: two runs produced different digests.\n\
             Run 1: {}\n\
             Run 2: {}",
            digest1, digest2
        );
    }
}
