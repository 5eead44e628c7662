use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("cuppa").unwrap()
}

#[test]
fn defaults_compute_a_single_cup() {
    cmd()
        .assert()
        .success()
        .stdout(contains("total"))
        .stdout(contains("225.0")) // 300 ml at 0.25 milk
        .stdout(contains("75.0"));
}

#[test]
fn computes_the_two_cup_example() {
    cmd()
        .args(["--cups", "300,150", "--milk", "0.25,0", "--strength", "6"])
        .assert()
        .success()
        .stdout(contains("375.0"))
        .stdout(contains("22.5"));
}

#[test]
fn json_output_carries_per_cup_and_total_amounts() {
    let assert = cmd()
        .args(["--cups", "250", "--milk", "0.2", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["cups"].as_array().unwrap().len(), 1);
    assert!((value["total"]["milk_ml"].as_f64().unwrap() - 50.0).abs() < 1e-6);
    assert!((value["total"]["water_ml"].as_f64().unwrap() - 200.0).abs() < 1e-6);
    assert!((value["total"]["coffee_g"].as_f64().unwrap() - 12.0).abs() < 1e-6);
}

#[test]
fn rejects_an_out_of_range_milk_ratio() {
    cmd()
        .args(["--cups", "250", "--milk", "1.5"])
        .assert()
        .failure()
        .stderr(contains("outside the range"));
}

#[test]
fn rejects_a_zero_volume_cup() {
    cmd()
        .args(["--cups", "0", "--milk", "0"])
        .assert()
        .failure()
        .stderr(contains("positive"));
}

#[test]
fn rejects_mismatched_list_lengths() {
    cmd()
        .args(["--cups", "250,300", "--milk", "0.2"])
        .assert()
        .failure()
        .stderr(contains("one ratio per cup"));
}

#[test]
fn rejects_more_than_five_cups() {
    cmd()
        .args([
            "--cups",
            "100,100,100,100,100,100",
            "--milk",
            "0,0,0,0,0,0",
        ])
        .assert()
        .failure()
        .stderr(contains("limited to 5 cups"));
}

#[test]
fn rejects_a_non_positive_strength() {
    cmd()
        .args(["--strength", "0"])
        .assert()
        .failure()
        .stderr(contains("strength"));
}
