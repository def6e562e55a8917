//! Cross-process determinism of the driver report.
//!
//! Spawns the `transcript_fixture` binary under four environment variants
//! and asserts that every run prints identical output.

use std::path::Path;
use std::process::Command;

/// Resolve the path to the compiled `transcript_fixture` binary.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("transcript_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "transcript_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("report_digest=sha256:"), "{baseline}");
    assert!(baseline.contains("transcript_digest=sha256:"), "{baseline}");
    assert!(baseline.contains("kernel_errors:2"), "{baseline}");
    assert!(baseline.contains("roundtrip=ok"), "{baseline}");

    let alt_cwd = std::env::temp_dir();
    let alt_cwd = alt_cwd.to_string_lossy();
    assert_eq!(
        baseline,
        run_variant(&alt_cwd, &[]),
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs when LC_ALL=C LANG=C"
    );

    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("SIFT_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
            ],
        ),
        "output differs with spurious env vars (SIFT_NOISE, TZ, HOME)"
    );
}

#[test]
fn fixture_digest_matches_in_process_run() {
    use sift_harness::policy::RunPolicyV1;
    use sift_harness::runner::run_scenarios;
    use sift_harness::scenario::driver_scenarios;

    let report = run_scenarios(&RunPolicyV1::default(), &driver_scenarios()).unwrap();
    let expected = format!("report_digest={}\n", report.digest().unwrap().as_str());
    let output = run_variant(&workspace_root(), &[]);
    assert!(output.starts_with(&expected), "{output}");
}
