use predicates::str::contains;
use std::fs;

mod common;
use common::{abt, seed_store, setup_test_store, temp_out};

#[test]
fn test_export_json_contains_all_lists() {
    let store = setup_test_store("export_json");
    seed_store(&store);

    let out = temp_out("export_json", "json");

    abt()
        .args(["--store", &store, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("exportedAt"));
    assert!(content.contains("2025-08-18"));
    assert!(content.contains("holidays"));
    assert!(content.contains("hourlyRate"));
}

#[test]
fn test_round_trip_reproduces_entries() {
    let store = setup_test_store("round_trip_src");
    seed_store(&store);

    let out = temp_out("round_trip", "json");
    abt()
        .args(["--store", &store, "export", "--file", &out])
        .assert()
        .success();

    // import into a fresh store
    let second = setup_test_store("round_trip_dst");
    abt()
        .args(["--store", &second, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Import OK"));

    abt()
        .args(["--store", &second, "list", "hours"])
        .assert()
        .success()
        .stdout(contains("(1 entries)"))
        .stdout(contains("18.08.2025"));

    abt()
        .args(["--store", &second, "list", "holidays"])
        .assert()
        .success()
        .stdout(contains("20.08.2025"))
        .stdout(contains("Half day"));

    // settings travelled with the payload
    abt()
        .args(["--store", &second, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("20.00 PLN"));
}

#[test]
fn test_malformed_import_leaves_state_untouched() {
    let store = setup_test_store("import_malformed");
    seed_store(&store);

    let bad = temp_out("import_malformed", "json");
    fs::write(&bad, "{ this is not json").unwrap();

    abt()
        .args(["--store", &store, "import", "--file", &bad])
        .assert()
        .failure()
        .stderr(contains("Import failed"));

    // prior entries survive
    abt()
        .args(["--store", &store, "list", "hours"])
        .assert()
        .success()
        .stdout(contains("(1 entries)"));
}

#[test]
fn test_import_normalizes_untrusted_entries() {
    let store = setup_test_store("import_normalize");

    let payload = temp_out("import_normalize", "json");
    fs::write(
        &payload,
        r#"{
            "holidays": [
                {"date": "2025-08-18"},
                {"date": "bogus"},
                "not an object",
                {"note": "missing date"}
            ],
            "overtimes": [
                {"date": "2025-08-19", "minutes": -30, "multiplier": 0.2}
            ]
        }"#,
    )
    .unwrap();

    abt()
        .args(["--store", &store, "import", "--file", &payload])
        .assert()
        .success()
        .stdout(contains("2 entries loaded"));

    // the surviving holiday defaulted to a full day with id 1
    abt()
        .args(["--store", &store, "list", "holidays"])
        .assert()
        .success()
        .stdout(contains("(1 entries)"))
        .stdout(contains("Full day"));

    // negative minutes clamped, multiplier forced back to 1
    abt()
        .args(["--store", &store, "list", "overtimes"])
        .assert()
        .success()
        .stdout(contains("0h"))
        .stdout(contains("x1"));
}

#[test]
fn test_export_csv_for_one_list() {
    let store = setup_test_store("export_csv");
    seed_store(&store);

    let out = temp_out("export_csv", "csv");

    abt()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", &out, "--list", "hours",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("id,date,minutes,multiplier,note"));
    assert!(content.contains("2025-08-18"));
}

#[test]
fn test_csv_export_requires_list() {
    let store = setup_test_store("export_csv_nolist");
    seed_store(&store);

    let out = temp_out("export_csv_nolist", "csv");

    abt()
        .args(["--store", &store, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("--list"));
}
