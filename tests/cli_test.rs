//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn gallery() -> Command {
    let mut cmd = Command::new(cargo_bin("grid-gallery"));
    cmd.env_remove("GRID_GALLERY_DATA_DIR");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn setup_data_set(manifest: &str, files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("registry.yml"), manifest).unwrap();
    for (name, content) in files {
        fs::write(temp.path().join(name), content).unwrap();
    }
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ThiingsGrid"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_lists_examples() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .assert()
        .success()
        .stdout(predicate::str::contains("ThiingsIcons"))
        .stdout(predicate::str::contains("CardLayout"));
    Ok(())
}

#[test]
fn cli_list_quiet_prints_names() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .args(["list", "--quiet"])
        .assert()
        .success()
        .stdout("ThiingsIcons\nSimpleNumbers\nEmojiFun\nColorfulGrid\nCardLayout\n");
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = gallery().args(["list", "--json"]).output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value.as_array().map(|a| a.len()), Some(5));
    assert_eq!(value[2]["name"], "EmojiFun");
    Ok(())
}

#[test]
fn cli_show_raw_by_name() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .args(["show", "ColorfulGrid", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<script lang=\"ts\">"))
        .stdout(predicate::str::contains(
            "<ThiingsGrid gridSize={100} renderItem={colorfulCellSnippet} />",
        ));
    Ok(())
}

#[test]
fn cli_show_by_index() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EmojiFun"))
        .stdout(predicate::str::contains("emojiCellSnippet"));
    Ok(())
}

#[test]
fn cli_show_unknown_name_fails() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .args(["show", "Nonexistent"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown example: Nonexistent"));
    Ok(())
}

#[test]
fn cli_show_out_of_range_fails() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .args(["show", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of range"));
    Ok(())
}

#[test]
fn cli_show_negative_index_fails() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .args(["show", "-1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_check_builtin() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 examples OK"));
    Ok(())
}

#[test]
fn cli_check_rejects_duplicate_names() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_data_set(
        "examples:\n  - name: Twin\n    file: a.svelte\n  - name: Twin\n    file: b.svelte\n",
        &[("a.svelte", "a"), ("b.svelte", "b")],
    );
    gallery()
        .args(["check", "--data-dir"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplicate example name"));
    Ok(())
}

#[test]
fn cli_check_json_reports_non_utf8_source() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_data_set("examples:\n  - name: Bin\n    file: bin.svelte\n", &[]);
    fs::write(temp.path().join("bin.svelte"), [0xffu8, 0xfe, 0x00])?;

    let output = gallery()
        .args(["check", "--json", "--data-dir"])
        .arg(temp.path())
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["valid"], false);
    let error = value["error"].as_str().unwrap_or_default();
    assert!(error.contains("bin.svelte"));
    assert!(error.contains("UTF-8"));
    Ok(())
}

#[test]
fn cli_data_dir_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_data_set(
        "examples:\n  - name: Only\n    file: only.svelte\n",
        &[("only.svelte", "<ThiingsGrid gridSize={40} />")],
    );
    gallery()
        .env("GRID_GALLERY_DATA_DIR", temp.path())
        .args(["show", "Only", "--raw"])
        .assert()
        .success()
        .stdout("<ThiingsGrid gridSize={40} />\n");
    Ok(())
}

#[test]
fn cli_broken_data_set_exits_with_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    gallery()
        .args(["list", "--data-dir"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Manifest not found"));
    Ok(())
}

#[test]
fn cli_completions() -> Result<(), Box<dyn std::error::Error>> {
    gallery()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grid-gallery"));
    Ok(())
}
