use assert_cmd::Command;
use llmram_testing::{TestWorld, assertions};
use predicates::prelude::*;

#[test]
fn test_init_writes_loadable_template() {
    let world = TestWorld::new();

    world
        .command()
        .unwrap()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config created"));

    let written = world.read_config().unwrap();
    assert!(written.contains("memory_gb"));
    assert!(written.contains("[overhead]"));

    // The template spells out the defaults, so the estimate is unchanged
    let json = world.run_json(&["estimate"]).unwrap();
    assertions::assert_capacity(&json, 25.952).unwrap();
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let world = TestWorld::new().with_config("memory_gb = 64.0\n");

    world
        .command()
        .unwrap()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"))
        .stdout(predicate::str::contains("llmram config init --force"));
    assert_eq!(world.read_config().unwrap(), "memory_gb = 64.0\n");

    world
        .command()
        .unwrap()
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config overwritten"));
    assert!(world.read_config().unwrap().contains("memory_gb = 16.0"));
}

#[test]
fn test_init_replaces_a_broken_file() {
    let world = TestWorld::new().with_config("memory_gb = \"lots\"\n");

    world
        .command()
        .unwrap()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_file_settings_apply_and_flags_win() {
    let world = TestWorld::new().with_config(
        r#"
memory_gb = 24.0
quant = "8-bit"

[overhead]
os_overhead_gb = 0.0
deduct_context = false
"#,
    );

    let json = world.run_json(&["estimate"]).unwrap();
    assertions::assert_capacity(&json, 24.0).unwrap();
    assert_eq!(json["content"]["level"], "8-bit");

    let json = world.run_json(&["estimate", "--memory", "48"]).unwrap();
    assertions::assert_capacity(&json, 48.0).unwrap();

    // An explicit window turns the deduction back on: 24 GB - 1.024 GB
    let json = world
        .run_json(&["estimate", "--context-window", "2048"])
        .unwrap();
    assertions::assert_capacity(&json, 22.976).unwrap();
}

#[test]
fn test_table_flag_for_configured_table_keeps_quant() {
    let world = TestWorld::new().with_config(
        r#"
table = "k-quant"
quant = "q4_K_M"
"#,
    );

    let json = world
        .run_json(&["estimate", "--table", "k-quant"])
        .unwrap();
    assert_eq!(json["content"]["level"], "q4_K_M");

    let json = world.run_json(&["estimate", "--table", "standard"]).unwrap();
    assert_eq!(json["content"]["level"], "4-bit");
}

#[test]
fn test_user_table_in_estimate() {
    let world = TestWorld::new().with_config(
        r#"
table = "gguf"

[overhead]
model = "ratio"
overhead_ratio = 0.0

[[tables]]
name = "gguf"
default = "Q8_0"
levels = [{ name = "Q4_0", bits = 4.5 }, { name = "Q8_0", bits = 8.5 }]
"#,
    );

    world
        .command()
        .unwrap()
        .args(["estimate", "--memory", "24"])
        .assert()
        .success()
        .stdout(assertions::estimate_sentence("Q8_0", "22.59"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let world = TestWorld::new().with_config("memory_gb = 0.5\n");

    world
        .command()
        .unwrap()
        .arg("estimate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to load"))
        .stderr(predicate::str::contains("memory"));
}

#[test]
fn test_show_reports_source_and_effective_level() {
    let world = TestWorld::new();

    let json = world.run_json(&["config", "show"]).unwrap();
    assertions::assert_badge(&json, Some("info")).unwrap();
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["effective_quant"], "4-bit");
    assert!(json["content"]["quant"].is_null());

    world.write_config("table = \"k-quant\"\n").unwrap();
    world
        .command()
        .unwrap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config loaded"))
        .stdout(predicate::str::contains("q4 (table default)"));
}

#[test]
#[allow(deprecated)]
fn test_workspace_from_environment() {
    let world = TestWorld::new().with_config("memory_gb = 32.0\n");

    // No --data-dir: LLMRAM_PATH decides where config.toml lives
    let output = Command::cargo_bin("llmram")
        .unwrap()
        .env("LLMRAM_PATH", world.data_dir())
        .env_remove("RUST_LOG")
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["content"]["memory_gb"], 32.0);
    assert_eq!(json["content"]["exists"], true);
}
