#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn abt() -> Command {
    cargo_bin_cmd!("abstracker")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_abstracker.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Populate a store with a small dataset useful for many tests
pub fn seed_store(store_path: &str) {
    abt()
        .args(["--store", store_path, "config", "--rate", "20", "--currency", "PLN"])
        .assert()
        .success();

    abt()
        .args([
            "--store",
            store_path,
            "add",
            "hours",
            "2025-08-18",
            "--time",
            "08:00",
        ])
        .assert()
        .success();

    abt()
        .args([
            "--store",
            store_path,
            "add",
            "overtimes",
            "2025-08-19",
            "--time",
            "02:00",
            "--mult",
            "1.5",
        ])
        .assert()
        .success();

    abt()
        .args([
            "--store",
            store_path,
            "add",
            "holidays",
            "2025-08-20",
            "--half",
        ])
        .assert()
        .success();
}
