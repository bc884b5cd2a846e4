use assert_cmd::Command;
use predicates::prelude::*;

fn easeplot() -> Command {
    Command::cargo_bin("easeplot").unwrap()
}

#[test]
fn list_prints_every_curve() {
    easeplot()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("accelerate-decelerate"))
        .stdout(predicate::str::contains("anticipate-overshoot"))
        .stdout(predicate::str::contains("bounce"))
        .stdout(predicate::str::contains("overshoot"));
}

#[test]
fn plot_prints_one_line_per_pixel_row() {
    let output = easeplot()
        .args(["plot", "--curve", "linear", "--width", "20", "--height", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|r| r.chars().count() == 20));

    // Linear starts on the zero line, row 5 of 10.
    assert_eq!(rows[5].chars().next(), Some('*'));
    // Reference lines are dashed every 10 pixels.
    assert_eq!(rows[2].chars().nth(10), Some('-'));
}

#[test]
fn plot_honours_y_range() {
    let output = easeplot()
        .args(["plot", "-c", "cycle", "--width", "40", "--height", "20", "--y-range=-1,1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    // With y in [-1, 1] the peak of the cycle reaches the top row.
    assert!(rows[0].contains('*'));
}

#[test]
fn unknown_curve_is_rejected() {
    easeplot()
        .args(["plot", "--curve", "wobble"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown curve"));
}

#[test]
fn inverted_range_is_rejected() {
    easeplot()
        .args(["plot", "--curve", "linear", "--y-range=1,-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid domain"));
}

#[test]
fn asymmetric_range_is_rejected() {
    easeplot()
        .args(["plot", "--curve", "linear", "--y-range=0,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("symmetric about zero"));
}

#[test]
fn zero_width_plot_fails() {
    easeplot()
        .args(["plot", "--curve", "linear", "--width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Surface has no pixels"));
}

#[test]
fn log_file_records_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("easeplot.log");

    easeplot()
        .args(["plot", "--curve", "bounce", "--width", "30", "--height", "10", "--log"])
        .arg(&log)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting Easeplot"));
    assert!(contents.contains("Headless plot complete"));
}
