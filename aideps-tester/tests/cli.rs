use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "aideps-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_metabolisms_writes_output() {
    let exe = env!("CARGO_BIN_EXE_aideps-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-metabolisms", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available metabolisms"));
    for key in ["ORGANIC", "LITHIC", "ROBOTIC", "SELF_SUSTAINING"] {
        assert!(content.contains(key), "missing {key}");
    }
}

#[test]
fn cli_classifies_specials_as_json() {
    let exe = env!("CARGO_BIN_EXE_aideps-tester");
    let output = Command::new(exe)
        .args([
            "--report",
            "json",
            "--classify",
            "CRYSTALS_SPECIAL,MONOPOLE_SPECIAL,NOPE_SPECIAL",
            "--colonies",
            "10",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    let classifications = value["classifications"].as_array().expect("array");
    assert_eq!(classifications[0]["metabolism"], "LITHIC");
    assert_eq!(classifications[1]["metabolism"], "ROBOTIC");
    assert!(classifications[2]["metabolism"].is_null());
    let projected = value["projection"]["colony_pod_cost"]
        .as_f64()
        .expect("projected cost");
    assert!((projected - 192.0).abs() < 1e-9);
}

#[test]
fn cli_strict_mode_rejects_duplicate_specials() {
    let exe = env!("CARGO_BIN_EXE_aideps-tester");
    let table_path = temp_path("dup-table");
    std::fs::write(
        &table_path,
        r#"{ "metabolism_boosts": { "ORGANIC": ["TWIN_SPECIAL"], "LITHIC": ["TWIN_SPECIAL"] } }"#,
    )
    .expect("write table");

    let strict = Command::new(exe)
        .arg("--strict")
        .arg("--table")
        .arg(&table_path)
        .output()
        .expect("run cli");
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("TWIN_SPECIAL"), "stderr: {stderr}");

    let lenient = Command::new(exe)
        .args(["--report", "markdown", "--classify", "TWIN_SPECIAL", "--table"])
        .arg(&table_path)
        .output()
        .expect("run cli");
    assert!(lenient.status.success());
    let stdout = String::from_utf8_lossy(&lenient.stdout);
    assert!(stdout.contains("- `TWIN_SPECIAL`: LITHIC"), "stdout: {stdout}");
    assert!(stdout.contains("## Duplicate Specials"));
    let _ = std::fs::remove_file(table_path);
}

#[test]
fn cli_fails_on_unknown_metabolism() {
    let exe = env!("CARGO_BIN_EXE_aideps-tester");
    let table_path = temp_path("bad-table");
    std::fs::write(&table_path, r#"{ "metabolism_boosts": { "GASEOUS": [] } }"#)
        .expect("write table");
    let output = Command::new(exe)
        .arg("--table")
        .arg(&table_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GASEOUS"), "stderr: {stderr}");
    let _ = std::fs::remove_file(table_path);
}

#[test]
fn cli_rejects_repeated_metabolism_keys() {
    let exe = env!("CARGO_BIN_EXE_aideps-tester");
    let table_path = temp_path("repeated-key");
    std::fs::write(
        &table_path,
        r#"{ "metabolism_boosts": { "ORGANIC": ["A_SPECIAL"], "ORGANIC": ["B_SPECIAL"] } }"#,
    )
    .expect("write table");

    for strict in [false, true] {
        let mut command = Command::new(exe);
        if strict {
            command.arg("--strict");
        }
        let output = command
            .args(["--classify", "A_SPECIAL", "--table"])
            .arg(&table_path)
            .output()
            .expect("run cli");
        assert!(!output.status.success(), "strict={strict}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("metabolism ORGANIC is listed more than once"),
            "stderr: {stderr}"
        );
    }
    let _ = std::fs::remove_file(table_path);
}
