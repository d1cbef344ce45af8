//! Golden-fixture test harness for the Church encodings.
//!
//! Replays a scenario fixture through the encodings and compares
//! outcomes (and optionally the run digest) to the fixture. Reads the
//! fixture, prints to stdout, writes nothing.

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use church_bridge::report::canonical_serialize;
use church_bridge::scenario::{load_suite, Outcome};
use church_bridge::suite::{run_suite, verify_determinism};

const FIXTURE_PATHS: [&str; 3] = [
    "scenarios.json",
    "tests/golden/scenarios.json",
    "church_bridge/tests/golden/scenarios.json",
];

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Value(v) => v.to_string(),
        Outcome::Error(code) => format!("error {}", code),
    }
}

fn find_fixture() -> Option<PathBuf> {
    if let Some(arg) = env::args().nth(1) {
        return Some(PathBuf::from(arg));
    }
    FIXTURE_PATHS
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

fn main() {
    let path = match find_fixture() {
        Some(p) => p,
        None => {
            eprintln!("Could not find scenarios.json. Pass a fixture path as the first argument.");
            process::exit(2);
        }
    };

    let suite = match load_suite(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load {}: {}", path.display(), e);
            process::exit(2);
        }
    };
    println!("Loaded scenarios from: {}", path.display());

    let report = run_suite(&suite.scenarios);
    for (scenario, result) in suite.scenarios.iter().zip(&report.results) {
        if result.passed {
            println!("[PASS] {} ({}): {}", result.name, scenario.operation, describe(&result.outcome));
        } else {
            println!("[FAIL] {} ({}):", result.name, scenario.operation);
            println!("  expected: {}", describe(&scenario.expected));
            println!("  actual:   {}", describe(&result.outcome));
        }
    }

    verify_determinism(&suite.scenarios);

    let digest = report.digest();
    let mut all_passed = report.all_passed();

    if let Some(expected) = &suite.expected_digest {
        if *expected != digest {
            println!("  [WARN] Digest mismatch!");
            println!("    actual:   {}", digest);
            println!("    expected: {}", expected);
            let text = String::from_utf8_lossy(&canonical_serialize(&report.results)).into_owned();
            let preview: String = text.chars().take(200).collect();
            println!("    report:   {}", preview);
            all_passed = false;
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} passed", report.passed(), report.results.len());
    println!("Digest: {}", digest);
    if all_passed {
        println!("[OK] All conformance scenarios PASSED.");
    } else {
        println!("[FAIL] Some checks failed.");
        process::exit(1);
    }
}
