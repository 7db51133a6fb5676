use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

fn healthpredict() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_healthpredict"));
    cmd.env_remove("RUST_LOG");
    cmd
}

const PATIENT: &str = indoc! {r#"
    {
        "pregnancies": 4,
        "glucose": 180,
        "blood_pressure": 95,
        "skin_thickness": 30,
        "insulin": 180,
        "bmi": 32,
        "diabetes_pedigree": 0.8,
        "age": 55
    }
"#};

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_predict_sample_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = healthpredict()
        .current_dir(temp_dir.path())
        .args(["predict", "--sample", "high", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["risk_level"], "low");
    assert_eq!(json["models"].as_array().unwrap().len(), 3);
}

#[test]
fn test_predict_from_stdin_with_preset() {
    let temp_dir = TempDir::new().unwrap();
    let output = healthpredict()
        .current_dir(temp_dir.path())
        .args(["predict", "--format", "json", "--preset", "unit-scaled"])
        .write_stdin(PATIENT)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["risk_level"], "high");
    assert_eq!(json["feature_importance"][0]["feature"], "Glucose");
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 4);
}

#[test]
fn test_predict_batch_file_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("patients.json");
    let report = temp_dir.path().join("report.json");
    fs::write(&input, format!("[{PATIENT}, {PATIENT}]")).unwrap();

    healthpredict()
        .current_dir(temp_dir.path())
        .args(["predict", "--format", "json", "--output"])
        .arg(&report)
        .arg("--input")
        .arg(&input)
        .assert()
        .success();

    let report = fs::read_to_string(&report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], items[1]);
}

#[test]
fn test_invalid_input_reports_client_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = healthpredict()
        .current_dir(temp_dir.path())
        .args(["predict", "--input", "-", "--format", "json"])
        .write_stdin(r#"{"glucose": "high"}"#)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(stdout_json(&output)["error"], "Invalid input data");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input for 'pregnancies'"), "{stderr}");
}

#[test]
#[cfg(target_os = "linux")]
fn test_failed_output_write_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    healthpredict()
        .current_dir(temp_dir.path())
        .args(["predict", "--sample", "low", "--format", "json"])
        .args(["--output", "/dev/full"])
        .assert()
        .failure();
}

#[test]
fn test_missing_input_file_is_client_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = healthpredict()
        .current_dir(temp_dir.path())
        .args(["predict", "--input", "absent.json", "--format", "json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(stdout_json(&output)["error"], "Invalid input data");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Failed to read input absent.json").count(), 1, "{stderr}");
}

#[test]
fn test_config_source_logged_only_when_verbose() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("engine.toml");
    fs::write(&config, "").unwrap();

    let quiet = healthpredict()
        .args(["predict", "--sample", "low", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(quiet.status.success());
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("Using configuration from"));

    let verbose = healthpredict()
        .args(["predict", "--sample", "low", "-v", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(verbose.status.success());
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("INFO"), "{stderr}");
    assert!(stderr.contains("Using configuration from"), "{stderr}");
}

#[test]
fn test_terminal_report() {
    let temp_dir = TempDir::new().unwrap();
    let output = healthpredict()
        .current_dir(temp_dir.path())
        .args(["predict", "--sample", "low"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Diabetes Risk Assessment"));
    assert!(stdout.contains("Risk Level: LOW"));
    assert!(stdout.contains("Maintain current healthy lifestyle"));
}

#[test]
fn test_init_then_check_config() {
    let temp_dir = TempDir::new().unwrap();

    healthpredict()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(temp_dir.path().join(".healthpredict.toml").exists());

    healthpredict()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure();

    healthpredict()
        .current_dir(temp_dir.path())
        .arg("check-config")
        .assert()
        .success();
}

#[test]
fn test_check_config_lists_issues() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(
        &path,
        indoc! {"
            [ensemble]
            post_blend_divisor = 0.0

            [attribution]
            top_features = 0
        "},
    )
    .unwrap();

    let output = healthpredict()
        .arg("check-config")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("post_blend_divisor"));
    assert!(stdout.contains("top_features"));
}

#[test]
fn test_discovered_config_applies() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".healthpredict.toml"),
        indoc! {"
            [ensemble]
            post_blend_divisor = 1.0
        "},
    )
    .unwrap();

    let output = healthpredict()
        .current_dir(temp_dir.path())
        .args(["predict", "--input", "-", "--format", "json"])
        .write_stdin(PATIENT)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["risk_level"], "high");
}
