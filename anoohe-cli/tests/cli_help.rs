use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn simulate_help_lists_options() {
    let mut cmd = cargo_bin_cmd!("anoohe-showcase");
    let out = cmd
        .arg("simulate")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    for flag in ["--width", "--frames", "--fps", "--hover", "--no-accel", "--json"] {
        assert!(text.contains(flag), "simulate help missing {flag}");
    }
}

#[test]
fn brands_lists_the_catalog() {
    let mut cmd = cargo_bin_cmd!("anoohe-showcase");
    cmd.arg("brands")
        .env_remove("ANOOHE_SHOWCASE_CONFIG_PATH")
        .env_remove("ANOOHE_SHOWCASE_CONFIG_JSON")
        .assert()
        .success()
        .stdout(predicate::str::contains("Golden Rose"))
        .stdout(predicate::str::contains("dermatique"));
}

#[test]
fn simulate_prints_eighteen_tiles() {
    let mut cmd = cargo_bin_cmd!("anoohe-showcase");
    cmd.args(["simulate", "--width", "1280", "--frames", "2"])
        .env_remove("ANOOHE_SHOWCASE_CONFIG_PATH")
        .env_remove("ANOOHE_SHOWCASE_CONFIG_JSON")
        .assert()
        .success()
        .stdout(predicate::str::contains("frame 0 t=0ms mode=3D tier=wide"))
        .stdout(predicate::str::contains("#17 Dermatique"))
        .stdout(predicate::str::contains("logo 180x90 (Dermatique - Premium beauty brand)"));
}

#[test]
fn simulate_json_reports_failed_logo() {
    let mut cmd = cargo_bin_cmd!("anoohe-showcase");
    cmd.args(["simulate", "--frames", "3", "--fail-logo", "c5d40052", "--json"])
        .env_remove("ANOOHE_SHOWCASE_CONFIG_PATH")
        .env_remove("ANOOHE_SHOWCASE_CONFIG_JSON")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind":"error""#))
        .stdout(predicate::str::contains(r#"Failed to load\nDafi"#))
        .stdout(predicate::str::contains(r#""kind":"logo""#));
}

#[test]
fn simulate_fault_switches_to_strip_with_notice() {
    let mut cmd = cargo_bin_cmd!("anoohe-showcase");
    cmd.args(["simulate", "--fault-at", "1", "--frames", "3"])
        .env_remove("ANOOHE_SHOWCASE_CONFIG_PATH")
        .env_remove("ANOOHE_SHOWCASE_CONFIG_JSON")
        .assert()
        .success()
        .stdout(predicate::str::contains("frame 0 t=0ms mode=3D"))
        .stdout(predicate::str::contains("mode=2D"))
        .stdout(predicate::str::contains("notice: 3D view not supported"));
}

#[test]
fn simulate_toggle_switches_mode() {
    let mut cmd = cargo_bin_cmd!("anoohe-showcase");
    cmd.args(["simulate", "--toggle-at", "1", "--frames", "2"])
        .env_remove("ANOOHE_SHOWCASE_CONFIG_PATH")
        .env_remove("ANOOHE_SHOWCASE_CONFIG_JSON")
        .assert()
        .success()
        .stdout(predicate::str::contains("frame 0 t=0ms mode=3D"))
        .stdout(predicate::str::contains("frame 1 t=16ms mode=2D"))
        .stdout(predicate::str::contains("strip translate_x="))
        .stdout(predicate::str::contains("notice:").not());
}

#[test]
fn simulate_without_acceleration_uses_the_strip() {
    let mut cmd = cargo_bin_cmd!("anoohe-showcase");
    cmd.args(["simulate", "--frames", "1", "--no-accel"])
        .env_remove("ANOOHE_SHOWCASE_CONFIG_PATH")
        .env_remove("ANOOHE_SHOWCASE_CONFIG_JSON")
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=2D"))
        .stdout(predicate::str::contains("strip translate_x=-50.0px"));
}

#[test]
fn subscribe_rejects_bad_address() {
    let mut cmd = cargo_bin_cmd!("anoohe-showcase");
    cmd.args(["subscribe", "--email", "not-an-email", "--delay-ms", "0"])
        .env_remove("ANOOHE_SHOWCASE_CONFIG_PATH")
        .env_remove("ANOOHE_SHOWCASE_CONFIG_JSON")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter a valid email address",
        ));
}

#[test]
fn subscribe_accepts_valid_address() {
    let mut cmd = cargo_bin_cmd!("anoohe-showcase");
    cmd.args(["subscribe", "--email", "reader@anoohe.com", "--delay-ms", "0"])
        .env_remove("ANOOHE_SHOWCASE_CONFIG_PATH")
        .env_remove("ANOOHE_SHOWCASE_CONFIG_JSON")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully subscribed!"));
}
