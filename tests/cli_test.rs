//! Integration tests for the CLI binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"categoryId": "base", "rules": [
        {"ruleId": "vue/comment-directive"},
        {"ruleId": "vue/jsx-uses-vars"}
    ]},
    {"categoryId": "essential", "rules": [{"ruleId": "vue/no-dupe-keys"}]},
    {"categoryId": "vue3-essential", "rules": [{"ruleId": "vue/no-dupe-keys"}]},
    {"categoryId": "strongly-recommended", "rules": [
        {"ruleId": "vue/attribute-hyphenation", "meta": {"docs": {"defaultOptions": {
            "vue2": ["always"], "vue3": ["always"]
        }}}}
    ]},
    {"categoryId": "vue3-strongly-recommended", "rules": [
        {"ruleId": "vue/attribute-hyphenation", "meta": {"docs": {"defaultOptions": {
            "vue2": ["always"], "vue3": ["always"]
        }}}}
    ]},
    {"categoryId": "recommended", "rules": [{"ruleId": "vue/attributes-order"}]},
    {"categoryId": "vue3-recommended", "rules": [{"ruleId": "vue/attributes-order"}]},
    {"categoryId": "use-with-caution", "rules": [{"ruleId": "vue/html-comment-indent"}]},
    {"categoryId": "vue3-use-with-caution", "rules": [{"ruleId": "vue/html-comment-indent"}]}
]"#;

struct Workspace {
    temp: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("catalog.json"), CATALOG).unwrap();
        Self { temp }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("vue-config-gen").unwrap();
        cmd.current_dir(self.temp.path())
            .arg("--catalog")
            .arg("catalog.json");
        cmd
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.temp.path().join(rel)).unwrap()
    }
}

#[test]
fn generates_both_config_trees() {
    let ws = Workspace::new();

    ws.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 16 config file(s)"));

    // Legacy tree: one file per category.
    for name in [
        "base",
        "essential",
        "vue3-essential",
        "strongly-recommended",
        "vue3-strongly-recommended",
        "recommended",
        "vue3-recommended",
        "use-with-caution",
        "vue3-use-with-caution",
    ] {
        assert!(
            ws.temp.path().join(format!("lib/configs/{name}.js")).exists(),
            "missing legacy {name}"
        );
    }

    // Flat tree: published names, no use-with-caution tiers.
    for name in [
        "base",
        "vue2-essential",
        "essential",
        "vue2-strongly-recommended",
        "strongly-recommended",
        "vue2-recommended",
        "recommended",
    ] {
        assert!(
            ws.temp.path().join(format!("configs/{name}.js")).exists(),
            "missing flat {name}"
        );
    }
    assert!(!ws.temp.path().join("configs/use-with-caution.js").exists());
}

#[test]
fn emitted_documents_carry_expected_content() {
    let ws = Workspace::new();
    ws.cmd().assert().success();

    let base = ws.read("lib/configs/base.js");
    assert!(base.contains("automatically generated"));
    assert!(base.contains("parser: require.resolve('vue-eslint-parser')"));
    assert!(base.contains("\"vue/comment-directive\": \"error\""));

    let essential = ws.read("lib/configs/essential.js");
    assert!(essential.contains("extends: require.resolve('./base')"));

    let strongly = ws.read("lib/configs/strongly-recommended.js");
    assert!(strongly.contains("\"vue/attribute-hyphenation\": ["));
    assert!(strongly.contains("\"warn\""));

    // Flat delta for the version-3 track spreads the renamed parent and
    // re-exports the legacy rule table.
    let flat_strongly = ws.read("configs/strongly-recommended.js");
    assert!(flat_strongly.contains("...require('./essential')"));
    assert!(flat_strongly.contains("require('../lib/configs/vue3-strongly-recommended').rules"));
}

#[test]
fn check_passes_after_generation() {
    let ws = Workspace::new();
    ws.cmd().assert().success();

    ws.cmd()
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn check_fails_when_a_file_is_stale() {
    let ws = Workspace::new();
    ws.cmd().assert().success();

    fs::write(
        ws.temp.path().join("lib/configs/essential.js"),
        "// edited by hand\n",
    )
    .unwrap();

    ws.cmd()
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("essential.js"))
        .stderr(predicate::str::contains("out of date"));
}

#[test]
fn regeneration_is_byte_identical() {
    let ws = Workspace::new();
    ws.cmd().assert().success();
    let first = ws.read("configs/vue2-essential.js");

    ws.cmd().assert().success();
    let second = ws.read("configs/vue2-essential.js");

    assert_eq!(first, second);
}

#[test]
fn missing_catalog_reports_error() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("vue-config-gen")
        .unwrap()
        .current_dir(temp.path())
        .args(["--catalog", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog not found"));
}

#[test]
fn unknown_platform_key_warns_but_generates() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("catalog.json"),
        r#"[{"categoryId": "base", "rules": [
            {"ruleId": "vue/comment-directive", "meta": {"docs": {"defaultOptions": {"vue9": []}}}}
        ]}]"#,
    )
    .unwrap();

    Command::cargo_bin("vue-config-gen")
        .unwrap()
        .current_dir(temp.path())
        .args(["--catalog", "catalog.json"])
        .assert()
        .success();

    let base = fs::read_to_string(temp.path().join("lib/configs/base.js")).unwrap();
    assert!(base.contains("\"vue/comment-directive\": \"error\""));
}
