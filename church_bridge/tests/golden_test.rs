//! Golden conformance test: replays the frozen scenario fixture and
//! asserts every outcome and the frozen run digest.
//!
//! Do not edit the fixture to match new behavior. A failure here means
//! an encoding changed observable results.

use std::path::PathBuf;

use church_bridge::scenario::{load_suite, SuiteFile};
use church_bridge::suite::{run_suite, verify_determinism};

fn load_golden() -> SuiteFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join("scenarios.json");
    load_suite(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

#[test]
fn golden_scenarios_all_pass() {
    let suite = load_golden();
    let report = run_suite(&suite.scenarios);

    let failures: Vec<String> = report
        .failures()
        .map(|r| format!("{}: got {:?}", r.name, r.outcome))
        .collect();
    assert!(
        failures.is_empty(),
        "GOLDEN TEST FAILED: {} scenario(s) diverged:\n{}",
        failures.len(),
        failures.join("\n")
    );
    assert_eq!(report.passed(), suite.scenarios.len());
}

#[test]
fn golden_digest_matches() {
    let suite = load_golden();
    let expected = suite
        .expected_digest
        .as_deref()
        .expect("golden fixture carries an expected_digest");
    let digest = run_suite(&suite.scenarios).digest();
    assert_eq!(
        digest, expected,
        "GOLDEN TEST FAILED: run digest changed.\n\
         Got:      {}\n\
         Expected: {}",
        digest, expected
    );
}

#[test]
fn golden_run_is_deterministic() {
    let suite = load_golden();
    verify_determinism(&suite.scenarios);

    let d1 = run_suite(&suite.scenarios).digest();
    let d2 = run_suite(&suite.scenarios).digest();
    assert_eq!(d1, d2);
    assert_eq!(d1.len(), 64);
}

#[test]
fn golden_covers_every_operation_family() {
    let suite = load_golden();
    for prefix in ["bool.", "pair.", "option.", "nat.", "list."] {
        assert!(
            suite.scenarios.iter().any(|s| s.operation.starts_with(prefix)),
            "no golden scenario for {}",
            prefix
        );
    }
}
