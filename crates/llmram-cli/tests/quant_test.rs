use llmram_testing::{TestWorld, assertions};
use predicates::prelude::*;

const GGUF_TABLE: &str = r#"
[[tables]]
name = "gguf"
default = "Q8_0"
levels = [{ name = "Q4_0", bits = 4.5 }, { name = "Q8_0", bits = 8.5 }]
"#;

#[test]
fn test_list_defaults_to_standard_table() {
    let world = TestWorld::new();

    world
        .command()
        .unwrap()
        .args(["quant", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standard (built-in, default 4-bit)"))
        .stdout(predicate::str::contains("q4_K_M").not());
}

#[test]
fn test_list_quiet_prints_names() {
    let world = TestWorld::new();

    world
        .command()
        .unwrap()
        .args(["quant", "list", "--table", "k-quant", "--quiet"])
        .assert()
        .success()
        .stdout(
            "q4\nq5\nq8\nfp16\nq2_K\nq3_K_S\nq3_K_M\nq3_K_L\nq4_K_S\nq4_K_M\nq5_K_S\nq5_K_M\nq6_K\n",
        );
}

#[test]
fn test_list_all_includes_config_tables() {
    let world = TestWorld::new().with_config(GGUF_TABLE);

    let json = world.run_json(&["quant", "list", "--all"]).unwrap();
    let tables = json["content"]["tables"].as_array().unwrap();

    let names: Vec<&str> = tables.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["standard", "k-quant", "gguf"]);
    assert_eq!(tables[2]["builtin"], false);
    assert_eq!(tables[2]["default_level"], "Q8_0");
}

#[test]
fn test_show_finds_level_in_other_table() {
    let world = TestWorld::new();

    let json = world.run_json(&["quant", "show", "q4_K_M"]).unwrap();

    assert_eq!(json["content"]["table"], "k-quant");
    assert_eq!(json["content"]["level"]["bits"], 4.75);
    assertions::assert_badge(&json, Some("info")).unwrap();
}

#[test]
fn test_show_respects_explicit_table() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["quant", "show", "q4_K_M", "--table", "standard"])
        .unwrap();

    assertions::assert_badge(&json, Some("error")).unwrap();
    assert_eq!(json["content"]["table"], "standard");
    assert_eq!(json["content"]["requested"], "q4_K_M");
}

#[test]
fn test_show_fp32() {
    let world = TestWorld::new();

    world
        .command()
        .unwrap()
        .args(["quant", "show", "fp32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bits per parameter:   32"))
        .stdout(predicate::str::contains("Bytes per parameter:  4"))
        .stdout(predicate::str::contains("0.25 billion"));
}
