use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

const DATASET: &str = r#"[
  {
    "id": "a",
    "title": "Acuerdo con el FMI",
    "summary": "Se firmó el acuerdo",
    "sources": [{ "news_outlet_name": "Clarín" }],
    "narratives": [
      {
        "narrative_title": "Oficial",
        "narrative_summary": "El gobierno celebra",
        "sources": [{ "news_outlet_name": "Télam" }]
      },
      { "narrative_title": "Oposición", "narrative_summary": "Denuncian el costo" }
    ]
  },
  { "id": "b", "title": "Paro de transporte", "summary": "No hay colectivos" }
]"#;

#[test]
fn test_events_list_bundled() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("punto")
        .env("PUNTO_HOME", dir.path())
        .args(["events", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("evt-001"))
        .stdout(predicate::str::contains("evt-006"))
        .stdout(predicate::str::contains("Narrativas"));
}

#[test]
fn test_events_list_uses_data_flag() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("events.json");
    fs::write(&data, DATASET).unwrap();

    cargo_bin_cmd!("punto")
        .env("PUNTO_HOME", dir.path())
        .args(["events", "list", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Paro de transporte"))
        .stdout(predicate::str::contains("evt-001").not());
}

#[test]
fn test_data_path_from_config() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("events.json");
    fs::write(&data, DATASET).unwrap();
    fs::write(
        dir.path().join("config.toml"),
        format!("data_path = {:?}\n", data.display().to_string()),
    )
    .unwrap();

    cargo_bin_cmd!("punto")
        .env("PUNTO_HOME", dir.path())
        .args(["events", "show", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Oficial"))
        .stdout(predicate::str::contains("[2] Oposición"))
        .stdout(predicate::str::contains("- Télam"));
}

#[test]
fn test_events_show_bundled_narratives() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("punto")
        .env("PUNTO_HOME", dir.path())
        .args(["events", "show", "evt-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 fuentes · 3 narrativas"))
        .stdout(predicate::str::contains("Mercados"));
}

#[test]
fn test_events_show_unknown_id_fails() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("punto")
        .env("PUNTO_HOME", dir.path())
        .args(["events", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Event 'nope' not found"));
}

#[test]
fn test_search_matches_and_empty_state() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("punto")
        .env("PUNTO_HOME", dir.path())
        .args(["search", "LITIO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 resultado"))
        .stdout(predicate::str::contains("evt-005"));

    cargo_bin_cmd!("punto")
        .env("PUNTO_HOME", dir.path())
        .args(["search", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No se encontraron resultados para “zzzz”",
        ));
}

#[test]
fn test_validate_reports_duplicate_id() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("dup.json");
    fs::write(
        &data,
        r#"[{"id": "x", "title": "Uno"}, {"id": "x", "title": "Dos"}]"#,
    )
    .unwrap();

    cargo_bin_cmd!("punto")
        .env("PUNTO_HOME", dir.path())
        .arg("validate")
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reuses the id"));
}

#[test]
fn test_validate_accepts_dataset() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("events.json");
    fs::write(&data, DATASET).unwrap();

    cargo_bin_cmd!("punto")
        .env("PUNTO_HOME", dir.path())
        .arg("validate")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 2 event(s), 2 narrative(s)"));
}
