//! Integration tests that invoke the compiled `uix` binary

use assert_cmd::Command;
use predicates::prelude::*;
use uix_test_utils::TestPluginDir;

/// Get a Command for the uix binary, running in `dir`
fn uix_cmd(dir: &TestPluginDir) -> Command {
    let mut cmd = Command::cargo_bin("uix").expect("Failed to find uix binary");
    cmd.current_dir(dir.root()).env_remove("UIX_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Two plugins plus a config pointing at them
fn fixture() -> TestPluginDir {
    let dir = TestPluginDir::new();
    dir.add_plugin(
        "kibana",
        r#"
app = { title = "Kibana", order = 1 }
visTypes = ["plugins/kibana/vis_a", "plugins/kibana/vis_b"]
bundle = "kibana-bundle"
"#,
    );
    dir.add_plugin(
        "status",
        r#"
apps = [{ id = "status_page", title = "Status", hidden = true }]
links = [{ id = "docs", title = "Docs", url = "/docs", order = -1 }]
bundle = ["status-a", "status-b"]

[ui_exports.aliases]
visTypes = ["plugins/kibana/vis_b", "plugins/status/vis_c"]
"#,
    );
    dir.write_config(
        r#"
[registry]
url_base_path = "/abc"

[plugins]
scan_dirs = ["plugins"]
"#,
    );
    dir
}

// ============================================================================
// General
// ============================================================================

#[test]
fn test_no_command_shows_hint() {
    let dir = TestPluginDir::new();
    uix_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("uix --help"));
}

#[test]
fn test_help_lists_commands() {
    let dir = TestPluginDir::new();
    uix_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("bundles"));
}

#[test]
fn test_completions_for_bash() {
    let dir = TestPluginDir::new();
    uix_cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uix"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_summarizes_plugins() {
    let dir = fixture();
    uix_cmd(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("kibana"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("2 plugin(s) registered"));
}

#[test]
fn test_check_with_no_plugins() {
    let dir = TestPluginDir::new();
    uix_cmd(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 plugin(s) registered"));
}

#[test]
fn test_check_fails_on_unknown_export_type() {
    let dir = TestPluginDir::new();
    dir.add_plugin("odd", r#"widgets = ["w"]"#);

    uix_cmd(&dir)
        .args(["check", "-p", "plugins"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("unknown export types widgets in plugin odd"));
}

#[test]
fn test_check_lenient_skips_unknown_export_type() {
    let dir = TestPluginDir::new();
    dir.add_plugin("odd", r#"widgets = ["w"]"#);

    uix_cmd(&dir)
        .args(["check", "-p", "plugins", "--lenient"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 plugin(s) registered"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TestPluginDir::new();
    uix_cmd(&dir)
        .args(["--config", "nope.toml", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_apps_json_lists_visible_then_hidden() {
    let dir = fixture();
    let output = uix_cmd(&dir).args(["apps", "--json"]).output().unwrap();
    assert!(output.status.success());

    let apps: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = apps
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["kibana", "status_page"]);
    assert_eq!(apps[1]["hidden"], serde_json::json!(true));
}

#[test]
fn test_links_are_ordered_and_prefixed() {
    let dir = fixture();
    let output = uix_cmd(&dir).args(["links", "--json"]).output().unwrap();
    assert!(output.status.success());

    let links: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(links[0]["id"], "docs");
    assert_eq!(links[0]["url"], "/abc/docs");
    assert_eq!(links[1]["id"], "kibana");
    assert_eq!(links[1]["url"], "/abc/app/kibana");
}

#[test]
fn test_base_path_flag_overrides_config() {
    let dir = fixture();
    uix_cmd(&dir)
        .args(["links", "--base-path", "/override"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/override/docs"));
}

#[test]
fn test_find_unions_alias_specs() {
    let dir = fixture();
    uix_cmd(&dir)
        .args(["find", "visTypes"])
        .assert()
        .success()
        .stdout("plugins/kibana/vis_a\nplugins/kibana/vis_b\nplugins/status/vis_c\n");
}

#[test]
fn test_find_without_matches_warns() {
    let dir = fixture();
    uix_cmd(&dir)
        .args(["find", "nothing*"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"));
}

#[test]
fn test_bundles_keep_arrays_whole() {
    let dir = fixture();
    let output = uix_cmd(&dir).args(["bundles", "--json"]).output().unwrap();
    assert!(output.status.success());

    let bundles: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        bundles,
        serde_json::json!(["kibana-bundle", ["status-a", "status-b"]])
    );
}
