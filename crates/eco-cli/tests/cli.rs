use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn eco() -> Command {
    let mut cmd = Command::cargo_bin("eco").unwrap();
    cmd.env_remove("ECO_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg("/nonexistent/eco.toml");
    cmd
}

#[test]
fn test_help() {
    eco()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate-weight"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn test_validate_weight_json() {
    let output = eco()
        .args(["--output", "json", "validate-weight"])
        .args(["--title", "Pruning shears", "--weight", "37.87", "--category", "Garden & Outdoor"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["corrected"], true);
    assert!(records[0]["weight_kg"].as_f64().unwrap() <= 0.8);
}

#[test]
fn test_resolve_table() {
    eco()
        .args(["resolve", "--title", "Paperback book", "--category", "Books"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paper"));
}

#[test]
fn test_estimate_with_material() {
    eco()
        .args(["--output", "json", "estimate"])
        .args(["--weight", "0.22", "--material", "aluminum", "--transport", "air"])
        .args(["--category", "smartphones"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"eco_score\": \"C\""));
}

#[test]
fn test_estimate_requires_material_or_coefficient() {
    eco()
        .args(["estimate", "--weight", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--coefficient"));
}

#[test]
fn test_estimate_rejects_bad_weight() {
    eco()
        .args(["estimate", "--weight=-2", "--coefficient", "2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight"));
}

#[test]
fn test_check_reports_violations() {
    eco()
        .args(["check", "--title", "iPhone 15", "--weight", "2.5", "--material", "Paper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone weighing 2.50 kg"));
}

#[test]
fn test_check_clean_product() {
    eco()
        .args(["check", "--title", "iPhone 15", "--weight", "0.17", "--material", "aluminum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plausibility issues"));
}

#[test]
fn test_analyze_input_file_yaml() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[
            {{"title": "Stainless Steel Water Bottle", "category": "Sports & Outdoors", "scraped_weight_kg": 0.35}},
            {{"title": "Cotton Tee", "category": "Clothing", "transport_mode": "air",
              "structured": [{{"name": "cotton", "fraction": 0.95}}, {{"name": "elastane", "fraction": 0.05}}]}}
        ]"#
    )
    .unwrap();

    eco()
        .args(["--output", "yaml", "--classifier", "analyze", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Stainless Steel Water Bottle"))
        .stdout(predicate::str::contains("tier: 1"))
        .stdout(predicate::str::contains("prediction"));
}

#[test]
fn test_analyze_requires_title_or_input() {
    eco()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--title"));
}

#[test]
fn test_config_prints_defaults() {
    eco()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_co2_per_kg"));
}
