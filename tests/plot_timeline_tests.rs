use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn plot_creates_png() {
    let rotation_yaml = r##"
name: Opener
actions:
  - id: f1
    skill_name: Fireball
    cast_time: 2.5
    cooldown: 8
    color: "#d6612c"
  - id: i1
    skill_name: Ice Lance
    cast_time: 1
  - id: f2
    skill_name: Fireball
    cast_time: 2.5
    cooldown: 8
"##;

    let input_file = assert_fs::NamedTempFile::new("rotation.yaml").unwrap();
    input_file.write_str(rotation_yaml).unwrap();
    let output_file = assert_fs::NamedTempFile::new("timeline.png").unwrap();

    let input_arg = input_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::Command::cargo_bin("rotsim").unwrap();
    cmd.args(["plot", "-i", &input_arg, "-o", &output_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Timeline plot written to"));

    let metadata = fs::metadata(&output_arg).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn plot_reports_empty_rotations() {
    let input_file = assert_fs::NamedTempFile::new("rotation.yaml").unwrap();
    input_file.write_str("name: Empty\nactions: []\n").unwrap();
    let output_file = assert_fs::NamedTempFile::new("timeline.png").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("rotsim").unwrap();
    cmd.args([
        "plot",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to write timeline plot"));
}
