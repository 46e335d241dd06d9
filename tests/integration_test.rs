use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to convert path to forward slashes for TOML compatibility on Windows
fn path_to_toml_string(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// A temporary config pointing at a data file in the same directory
struct Workspace {
    _temp: TempDir,
    config: PathBuf,
    data: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        let data = temp.path().join("tracker.yaml");

        fs::write(
            &config,
            format!(
                "data_file = \"{}\"\n\n[display]\ncolor = false\n",
                path_to_toml_string(&data)
            ),
        )
        .unwrap();

        Self {
            _temp: temp,
            config,
            data,
        }
    }

    /// Workspace with an initialized data file holding `entries`
    fn with_entries(entries: &[&str]) -> Self {
        let workspace = Self::new();
        workspace.dt(&["init"]).assert().success();
        for entry in entries {
            workspace.dt(&["new", entry]).assert().success();
        }
        workspace
    }

    fn dt(&self, args: &[&str]) -> assert_cmd::Command {
        let mut cmd = cargo::cargo_bin_cmd!("dt");
        cmd.arg("--config")
            .arg(self.config.to_str().unwrap())
            .args(args)
            .env_remove("CLICOLOR_FORCE");
        cmd
    }

    fn data(&self) -> String {
        fs::read_to_string(&self.data).unwrap()
    }
}

#[test]
fn test_config_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    cargo::cargo_bin_cmd!("dt")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    assert!(config_path.exists());
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("data_file"));
    assert!(content.contains("lunch"));
}

#[test]
fn test_init_creates_data_file_once() {
    let workspace = Workspace::new();

    workspace
        .dt(&["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data file created"));
    assert!(workspace.data().contains("version: 2"));

    workspace
        .dt(&["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_missing_data_file_fails() {
    let workspace = Workspace::new();

    workspace
        .dt(&["summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run 'dt init'"));
    assert!(!workspace.data.exists());
}

#[test]
fn test_add_scenario() {
    let workspace = Workspace::with_entries(&["work", "lunch"]);

    workspace
        .dt(&["add", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) work: 0:15h"))
        .stdout(predicate::str::contains("Logged Time: 9:15am"));

    workspace
        .dt(&["a", "2b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b) lunch: 0:30h"))
        .stdout(predicate::str::contains("Total: 0:15h"))
        .stdout(predicate::str::contains("Logged Time: 9:45am"));

    let data = workspace.data();
    assert!(data.contains("total: 15"));
    assert!(data.contains("total: 30"));
    assert!(data.contains("time: 9:45am"));
}

#[test]
fn test_add_then_subtract_restores_file() {
    let workspace = Workspace::with_entries(&["work", "lunch"]);
    workspace.dt(&["add", "a"]).assert().success();
    let before = workspace.data();

    workspace.dt(&["add", "3b"]).assert().success();
    workspace.dt(&["subtract", "3b"]).assert().success();

    assert_eq!(workspace.data(), before);
}

#[test]
fn test_negative_total_is_rejected_and_not_saved() {
    let workspace = Workspace::with_entries(&["work"]);
    workspace.dt(&["add", "a"]).assert().success();
    let before = workspace.data();

    workspace
        .dt(&["s", "2a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Negative totals are not permitted"));

    assert_eq!(workspace.data(), before);
}

#[test]
fn test_blocksize_locked_after_logging() {
    let workspace = Workspace::with_entries(&["work"]);

    workspace.dt(&["blocksize", "10"]).assert().success();
    assert!(workspace.data().contains("block_size: 10"));

    workspace.dt(&["add", "a"]).assert().success();
    workspace
        .dt(&["b", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Block size cannot be updated"));
    assert!(workspace.data().contains("block_size: 10"));

    workspace
        .dt(&["reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Time: 9:00am"));
    workspace.dt(&["b", "30"]).assert().success();
}

#[test]
fn test_unknown_letter_reports_no_such_entry() {
    let workspace = Workspace::with_entries(&["work", "lunch"]);

    workspace
        .dt(&["add", "2c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such entry: c"));

    workspace
        .dt(&["delete", "AB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid letter"));
}

#[test]
fn test_delete_shifts_letters() {
    let workspace = Workspace::with_entries(&["work", "admin", "reading"]);

    workspace.dt(&["delete", "b"]).assert().success();
    workspace
        .dt(&["all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b) reading: 0h"))
        .stdout(predicate::str::contains("admin").not());
}

#[test]
fn test_set_time() {
    let workspace = Workspace::with_entries(&["work"]);

    workspace
        .dt(&["time", "8:00am"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Time: 8:00am"));

    workspace
        .dt(&["t", "eight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse time"));
}

#[test]
fn test_start_succeeds() {
    let workspace = Workspace::with_entries(&["work"]);
    workspace
        .dt(&["start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Time:"));
}

#[test]
fn test_todo_workflow() {
    let workspace = Workspace::with_entries(&["work"]);

    workspace
        .dt(&["todo", "review PR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TODO:\na) review PR"));
    workspace.dt(&["todo", "write docs"]).assert().success();

    workspace
        .dt(&["tr", "a", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) write docs\nb) review PR"));

    workspace
        .dt(&["tm", "a", "write changelog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) write changelog"));

    workspace
        .dt(&["checkoff", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TODO:\na) review PR"));

    workspace
        .dt(&["c", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such todo: b"));
}

#[test]
fn test_views() {
    let workspace = Workspace::with_entries(&["work", "lunch"]);
    workspace.dt(&["todo", "review PR"]).assert().success();
    workspace.dt(&["add", "a"]).assert().success();

    // Summary hides empty entries and todos
    workspace
        .dt(&["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) work: 0:15h"))
        .stdout(predicate::str::contains("lunch").not())
        .stdout(predicate::str::contains("TODO:").not());

    // No command shows everything
    workspace
        .dt(&[])
        .assert()
        .success()
        .stdout(predicate::str::contains("b) lunch: 0h"))
        .stdout(predicate::str::contains("TODO:"));
}

#[test]
fn test_command_aliases() {
    let workspace = Workspace::with_entries(&["work"]);
    workspace.dt(&["a", "a"]).assert().success();

    workspace
        .dt(&["rename", "a", "deep work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) deep work: 0:15h"));
    workspace
        .dt(&["m", "a", "focus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) focus: 0:15h"));
    workspace
        .dt(&["mv", "a", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) work: 0:15h"));

    workspace.dt(&["todo", "review PR"]).assert().success();
    workspace.dt(&["todo", "write docs"]).assert().success();
    workspace
        .dt(&["todo-swap", "a", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) write docs\nb) review PR"));
    workspace
        .dt(&["todo-rename", "a", "write changelog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) write changelog\nb) review PR"));

    workspace
        .dt(&["sum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) work: 0:15h\nTotal: 0:15h"));

    // Reaching the entry lookup shows the alias is not an unknown command
    for alias in ["update", "u"] {
        workspace
            .dt(&[alias, "b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No such entry: b"));
    }
}

#[test]
fn test_unknown_command_prints_summary() {
    let workspace = Workspace::with_entries(&["work"]);
    let before = workspace.data();

    workspace
        .dt(&["frobnicate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0h"));

    assert_eq!(workspace.data(), before);
}

#[test]
fn test_help_does_not_need_data_file() {
    let workspace = Workspace::new();

    workspace
        .dt(&["help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blocksize"));
    assert!(!workspace.data.exists());
}

#[test]
fn test_legacy_data_file_is_upgraded() {
    let workspace = Workspace::new();
    fs::write(
        &workspace.data,
        r#"time: 9:15am
format: 3:04pm
block_size: 15
entries:
- name: work
  total: 15
- name: lunch
  total: 0
todos:
- content: review PR
"#,
    )
    .unwrap();

    workspace
        .dt(&["add", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a) work: 0:15h"))
        .stdout(predicate::str::contains("Logged Time: 9:30am"));

    let data = workspace.data();
    assert!(data.contains("version: 2"));
    assert!(data.contains("'%-I:%M%P'") || data.contains("\"%-I:%M%P\""));
}
