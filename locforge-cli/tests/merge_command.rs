//! CLI contract tests for the merge subcommand.

use std::process::Command;

use locforge::prelude::*;

fn sample_resource() -> LocresResource {
    LocresResource {
        version: LocresVersion::OptimizedCityHash64Utf16,
        namespaces: vec![LocresNamespace {
            name: "UI".to_string(),
            key_hash: 0,
            entries: vec![
                LocresEntry {
                    key: "Title".to_string(),
                    key_hash: 0,
                    source_hash: 0xABCD1234,
                    translation: "Start".to_string(),
                },
                LocresEntry {
                    key: "Exit".to_string(),
                    key_hash: 0,
                    source_hash: 0x11110000,
                    translation: "Quit".to_string(),
                },
            ],
        }],
    }
}

#[test]
fn merge_command_writes_output_and_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let locres = dir.path().join("Game.locres");
    let strings = dir.path().join("Game_strings.csv");
    // Parent directory does not exist yet; the command creates it
    let output = dir.path().join("out/Game_ru.locres");

    write_locres(&locres, &sample_resource()).unwrap();
    std::fs::write(
        &strings,
        "id,english,russian\nUI/Title#ABCD1234,Start,Начать\n",
    )
    .unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_locforge"))
        .args([
            "merge",
            "--strings",
            strings.to_str().unwrap(),
            "--locres",
            locres.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("entries: 2"), "stdout: {stdout}");
    assert!(stdout.contains("updated: 1"), "stdout: {stdout}");
    assert!(stdout.contains("missing: 1"), "stdout: {stdout}");

    let merged = read_locres(&output).unwrap();
    assert_eq!(merged.namespaces[0].entries[0].translation, "Начать");
    assert_eq!(merged.namespaces[0].entries[1].translation, "Quit");
}

#[test]
fn merge_command_fails_on_malformed_strings_table() {
    let dir = tempfile::tempdir().unwrap();
    let locres = dir.path().join("Game.locres");
    let strings = dir.path().join("broken.csv");
    let output = dir.path().join("Game_ru.locres");

    write_locres(&locres, &sample_resource()).unwrap();
    std::fs::write(&strings, "id,english\nUI/Title#ABCD1234,Start\n").unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_locforge"))
        .args([
            "merge",
            "--strings",
            strings.to_str().unwrap(),
            "--locres",
            locres.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("russian"), "stderr: {stderr}");
    // Fail fast: no partial output
    assert!(!output.exists());
}

#[test]
fn merge_command_fails_on_corrupt_container() {
    let dir = tempfile::tempdir().unwrap();
    let locres = dir.path().join("Game.locres");
    let strings = dir.path().join("Game_strings.csv");
    let output = dir.path().join("Game_ru.locres");

    std::fs::write(&locres, b"not a locres file").unwrap();
    std::fs::write(&strings, "id,english,russian\nA#1,Start,Начать\n").unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_locforge"))
        .args([
            "merge",
            "--strings",
            strings.to_str().unwrap(),
            "--locres",
            locres.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(!output.exists());
}
