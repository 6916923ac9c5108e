//! Integration tests for the gridfall CLI: map listing, drop planning, and
//! road routing over a snapshot file.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gridfall() -> Command {
    Command::cargo_bin("gridfall").expect("binary exists")
}

/// Write a three-node road snapshot and return its path.
fn write_road_snapshot(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("roads.json");
    let json = r#"{
        "nodes": {
            "w": { "id": "w", "x": 0.1, "y": 0.5, "connections": ["m"] },
            "m": { "id": "m", "x": 0.5, "y": 0.5, "connections": ["w", "e"] },
            "e": { "id": "e", "x": 0.9, "y": 0.5, "connections": ["m"] }
        }
    }"#;
    fs::write(&path, json).expect("write snapshot");
    path
}

#[test]
fn maps_lists_the_catalog() {
    gridfall()
        .arg("maps")
        .assert()
        .success()
        .stdout(predicate::str::contains("Erangel (8000 m)"))
        .stdout(predicate::str::contains("Karakin (2000 m)"))
        .stdout(predicate::str::contains("special zone: Stalber"));
}

#[test]
fn drop_reports_a_standard_plan() {
    gridfall()
        .args([
            "drop",
            "--map",
            "Erangel",
            "--plane-start",
            "0,0.5",
            "--plane-end",
            "1,0.5",
            "--target",
            "0.5,0.55",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy:       Standard"))
        .stdout(predicate::str::contains("Jump distance:  800 m"))
        .stdout(predicate::str::contains("Reachable:      yes"));
}

#[test]
fn drop_json_output_carries_the_strategy_tag() {
    gridfall()
        .args([
            "drop",
            "--map",
            "Sanhok",
            "--plane-start",
            "0,0.5",
            "--plane-end",
            "1,0.5",
            "--target",
            "0.5,0.5",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"strategy\": \"sanhok\""))
        .stdout(predicate::str::contains("\"reachable\": true"));
}

#[test]
fn drop_rejects_a_zero_length_flight_path() {
    gridfall()
        .args([
            "drop",
            "--map",
            "Erangel",
            "--plane-start",
            "0.5,0.5",
            "--plane-end",
            "0.5,0.5",
            "--target",
            "0.6,0.6",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no drop solution"));
}

#[test]
fn drop_suggests_map_names_for_typos() {
    gridfall()
        .args([
            "drop",
            "--map",
            "Erangle",
            "--plane-start",
            "0,0.5",
            "--plane-end",
            "1,0.5",
            "--target",
            "0.5,0.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown map: Erangle"))
        .stderr(predicate::str::contains("Erangel"));
}

#[test]
fn drop_rejects_out_of_bounds_targets() {
    gridfall()
        .args([
            "drop",
            "--map",
            "Erangel",
            "--plane-start",
            "0,0.5",
            "--plane-end",
            "1,0.5",
            "--target",
            "1.5,0.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("within [0,1]x[0,1]"));
}

#[test]
fn route_follows_the_road_snapshot() {
    let dir = TempDir::new().expect("create temp dir");
    let snapshot = write_road_snapshot(&dir);

    gridfall()
        .args([
            "route",
            "--graph",
            snapshot.to_str().unwrap(),
            "--map",
            "Erangel",
            "--from",
            "0.1,0.55",
            "--to",
            "0.9,0.45",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route (2 road hops):"))
        .stdout(predicate::str::contains("Total distance: 7200 m"));
}

#[test]
fn route_fails_cleanly_on_a_missing_snapshot() {
    gridfall()
        .args([
            "route",
            "--graph",
            "/nonexistent/roads.json",
            "--map",
            "Erangel",
            "--from",
            "0.1,0.5",
            "--to",
            "0.9,0.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load road graph"));
}
