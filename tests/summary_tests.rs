use predicates::str::contains;

mod common;
use common::{abt, seed_store, setup_test_store};

// seed data: 8h regular on Mon 2025-08-18, 2h overtime x1.5 on Tue,
// half-day holiday on Wed, rate 20 PLN.
// Week window (Sunday start): 2025-08-17 .. 2025-08-23.

#[test]
fn test_summary_week_totals_and_pay() {
    let store = setup_test_store("summary_week");
    seed_store(&store);

    // regular 480 -> 160.00, holiday 210 -> 70.00, overtime 120 x1.5 -> 60.00
    abt()
        .args(["--store", &store, "summary", "--date", "2025-08-20"])
        .assert()
        .success()
        .stdout(contains("2025-08-17 .. 2025-08-23"))
        .stdout(contains("13h 30m")) // 480 + 210 + 120 minutes
        .stdout(contains("290.00 PLN"));
}

#[test]
fn test_summary_outside_period_is_empty() {
    let store = setup_test_store("summary_empty");
    seed_store(&store);

    abt()
        .args(["--store", &store, "summary", "--date", "2024-03-10"])
        .assert()
        .success()
        .stdout(contains("0.00 PLN"));
}

#[test]
fn test_weekly_overview_buckets_whole_history() {
    let store = setup_test_store("weekly_overview");
    seed_store(&store);

    // an old entry far outside the current period still gets a bucket
    abt()
        .args(["--store", &store, "add", "hours", "2023-01-02", "--time", "01:00"])
        .assert()
        .success();

    abt()
        .args(["--store", &store, "weekly"])
        .assert()
        .success()
        .stdout(contains("2025-08-17 .. 2025-08-23"))
        .stdout(contains("2023-01-01 .. 2023-01-07"))
        .stdout(contains("290.00 PLN"));
}

#[test]
fn test_weekly_count_caps_output() {
    let store = setup_test_store("weekly_cap");
    seed_store(&store);

    abt()
        .args(["--store", &store, "add", "hours", "2023-01-02", "--time", "01:00"])
        .assert()
        .success();

    // most recent week only
    let output = abt()
        .args(["--store", &store, "weekly", "--count", "1"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2025-08-17"));
    assert!(!stdout.contains("2023-01-01"));
}

#[test]
fn test_holiday_paid_minutes_in_listing() {
    let store = setup_test_store("holiday_paid_listing");

    abt()
        .args(["--store", &store, "add", "holidays", "2025-08-20", "--half"])
        .assert()
        .success();
    abt()
        .args(["--store", &store, "add", "holidays", "2025-08-21"])
        .assert()
        .success();

    abt()
        .args(["--store", &store, "list", "holidays"])
        .assert()
        .success()
        .stdout(contains("3h 30m")) // half day is 210, not 225
        .stdout(contains("7h 30m"));
}
