//! End-to-end integration test for the facade
//!
//! Exercises the complete flow: config loading -> facade construction ->
//! action sequence against a real temporary filesystem.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use pathops_core::{ContentRoot, Outcome, PathOps, RootConfig};

/// Set up a workspace with a pathops.toml pointing inside it.
fn setup_workspace() -> (TempDir, RootConfig) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("content");
    fs::create_dir(&root).unwrap();

    let config_path = temp.path().join("pathops.toml");
    fs::write(
        &config_path,
        format!("content_root = \"{}\"\n", root.to_str().unwrap().replace('\\', "/")),
    )
    .unwrap();

    let config = RootConfig::load(&config_path).unwrap();
    (temp, config)
}

#[test]
fn config_driven_action_sequence() {
    let (temp, config) = setup_workspace();
    let content_root = config.content_root().to_string();
    let ops = PathOps::new(config);

    // The non-absolute query is a pure pass-through of the config value.
    let root = ops.absolute_dir(false);
    assert_eq!(root.result_path.as_deref(), Some(content_root.as_str()));

    // Build a tree under the root, rename it, then tear it down.
    let staging = format!("{content_root}/staging/incoming");
    assert!(ops.create_dir(&staging).success);
    fs::write(temp.path().join("content/staging/incoming/a.bin"), "a").unwrap();
    fs::write(temp.path().join("content/staging/incoming/b.bin"), "b").unwrap();

    let renamed = format!("{content_root}/staging/ready");
    assert!(ops.rename(&staging, &renamed).success);
    assert!(temp.path().join("content/staging/ready/a.bin").is_file());

    // staging/ready + 2 files
    let removed = ops.remove(&renamed, true);
    assert!(removed.success, "{}", removed.message);
    assert_eq!(removed.count, Some(3));

    // What is left is the empty staging dir; non-force remove handles it.
    let staging_dir = format!("{content_root}/staging");
    assert!(ops.remove(&staging_dir, false).success);
}

#[test]
fn absolute_root_resolution_round_trip() {
    let (_temp, config) = setup_workspace();
    let relative = config.content_root().to_string();
    let ops = PathOps::new(config);

    let absolute = ops.absolute_dir(true);
    assert!(absolute.success, "{}", absolute.message);
    let resolved = absolute.result_path.expect("resolved root");
    assert!(std::path::Path::new(&resolved).is_absolute());

    // Resolution never loses the directory itself.
    assert_eq!(
        fs::canonicalize(&resolved).unwrap(),
        fs::canonicalize(&relative).unwrap()
    );
}

#[test]
fn outcomes_serialize_for_host_consumption() {
    let (_temp, config) = setup_workspace();
    let ops = PathOps::new(config);

    let outcome = ops.current_path();
    let json = serde_json::to_string(&outcome).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["success"], true);
    assert!(value["message"].as_str().unwrap().contains("Current path"));
    // Options that are None stay out of the payload entirely.
    assert!(value.get("count").is_none());
}

#[test]
fn failures_stay_diagnostics_across_the_whole_surface() {
    let (_temp, config) = setup_workspace();
    let ops = PathOps::new(config);

    // None of these may panic; each returns a failed outcome with a cause.
    let outcomes: Vec<Outcome> = vec![
        ops.remove("/definitely/not/here", false),
        ops.rename("/definitely/not/here", "/also/not/here"),
        ops.create_dir("/proc/not-writable/dir"),
    ];
    for outcome in outcomes {
        assert!(!outcome.success);
        assert!(!outcome.message.is_empty());
    }
}
