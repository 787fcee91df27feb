//! End-to-end CLI tests: run the compiled binary against `fixtures/content`.
//!
//! Run with: `cargo test --test build_site`

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simple-folio"))
        .args(args)
        .output()
        .expect("failed to run simple-folio")
}

fn build_into(source: &Path, output: &Path) -> Output {
    run(&[
        "build",
        "--source",
        source.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn build_writes_a_complete_site() {
    let out = TempDir::new().unwrap();
    let result = build_into(&fixtures(), out.path());
    assert!(result.status.success(), "build failed: {}", String::from_utf8_lossy(&result.stderr));

    for file in [
        "index.html",
        "folio.js",
        "data/projects.json",
        "data/translations.json",
        "assets/docs/pdf/CV_EN_Unity_GameDeveloper.pdf",
        "assets/projects/images/space-miner.png",
    ] {
        assert!(out.path().join(file).exists(), "missing {file}");
    }

    let text = stdout(&result);
    assert!(text.contains("Catalog ← assets/projects/projects.json"));
    assert!(text.contains("Generated 5 projects (2 featured) in 2 locales"));
    assert!(text.contains("Warning: No wasm runtime shipped (set runtime.wasm_dir)"));
    assert!(!out.path().join("pkg").exists());
}

#[test]
fn page_contains_every_project_and_runtime_config() {
    let out = TempDir::new().unwrap();
    assert!(build_into(&fixtures(), out.path()).status.success());
    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();

    for id in ["space-miner", "ledger", "tile-painter", "build-bot", "inventory-api"] {
        assert!(html.contains(&format!("<template id=\"project-{id}\">")), "no template for {id}");
    }
    assert!(html.contains("<script id=\"folio-config\" type=\"application/json\">"));
    assert!(html.contains("Ada Example"));
    assert!(html.contains("mailto:ada@example.com"));
    assert!(html.contains("data-orientation=\"portrait\""));
    assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ?"));
}

#[test]
fn normalized_catalog_round_trips_through_the_runtime_loader() {
    let out = TempDir::new().unwrap();
    assert!(build_into(&fixtures(), out.path()).status.success());
    let json = std::fs::read_to_string(out.path().join("data/projects.json")).unwrap();
    let catalog = simple_folio::catalog::Catalog::from_json(&json).unwrap();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.get("inventory-api").unwrap().kind.as_str(), "dotnet");
}

#[test]
fn build_fails_on_duplicate_ids() {
    let src = TempDir::new().unwrap();
    std::fs::write(
        src.path().join("projects.json"),
        r#"{"projects":[
            {"id":"a","name":"A","category":"x","description":"d"},
            {"id":"a","name":"B","category":"x","description":"d"}
        ]}"#,
    )
    .unwrap();
    let out = TempDir::new().unwrap();
    let result = build_into(src.path(), out.path());
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Duplicate project id: a"));
}

#[test]
fn check_reports_translation_gaps() {
    let result = run(&["check", "--source", fixtures().to_str().unwrap()]);
    assert!(result.status.success());
    let text = stdout(&result);
    assert!(text.contains("001 Space Miner [Unity Game] ★"));
    assert!(text.contains("tr: missing projects.showLess"));
    assert!(text.contains("tr: missing modal.features"));
    assert!(text.contains("    No wasm runtime shipped (set runtime.wasm_dir)"));
    assert!(text.contains("==> Content is valid"));
}

#[test]
fn gen_config_prints_stock_config() {
    let result = run(&["gen-config"]);
    assert!(result.status.success());
    let text = stdout(&result);
    assert!(text.contains("[grid]"));
    assert!(text.contains("[carousel]"));
}
