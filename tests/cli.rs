use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary with an isolated config home so user settings never leak in.
fn sketchpad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn sketchpad_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand raster sketchpad driven by pointer event scripts",
        ));
}

#[test]
fn replay_from_stdin_prints_summary() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg("-")
        .write_stdin(
            "offset 100 20\n\
             enter\n\
             palette 5\n\
             down 10 10\n\
             move 60 10   # horizontal\n\
             up\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("brush: #ff3860 (Red) 10px"))
        .stdout(predicate::str::contains("eraser: off"))
        .stdout(predicate::str::contains("drawing: no"))
        .stdout(predicate::str::contains("cursor: (75, 105) 10px #ff3860"))
        .stdout(predicate::str::contains("inked pixels: 0").not());
}

#[test]
fn replay_from_file_after_clear_has_no_ink() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("session.txt");
    std::fs::write(&script, "down 5 5\nmove 50 50\neraser\nclear\n").unwrap();

    sketchpad_cmd(&temp)
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("eraser: on"))
        .stdout(predicate::str::contains("drawing: yes"))
        .stdout(predicate::str::contains("inked pixels: 0"));
}

#[test]
fn invalid_script_reports_line() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg("-")
        .write_stdin("down 1 1\nsmudge\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command 'smudge'"));
}

#[test]
fn print_palette_uses_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[palette]\ncolors = [\"#23d160\", \"white\"]\n").unwrap();

    sketchpad_cmd(&temp)
        .args(["--print-palette", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::eq("0: #23d160 Green\n1: #ffffff White\n"));
}

#[test]
fn init_config_writes_default_file_once() {
    let temp = TempDir::new().unwrap();

    sketchpad_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = temp.path().join("sketchpad").join("config.toml");
    let contents = std::fs::read_to_string(&written).unwrap();
    assert!(contents.contains("[brush]"));
    assert!(contents.contains("default_width = 10"));

    sketchpad_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file already exists"));
}

#[test]
fn print_schema_emits_json() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg("--print-schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"palette\""));
}
