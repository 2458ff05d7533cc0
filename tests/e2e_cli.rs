mod support;

use std::fs;

use tempfile::tempdir;

use support::{run_chartspan, run_chartspan_with_stdin, stdout_of};

#[test]
fn e2e_interval_for_period() -> Result<(), String> {
    let output = run_chartspan(["interval", "--period", "14d"])?;
    let stdout = stdout_of(&output)?;
    if !stdout.contains("interval: 1h") || !stdout.contains("short: false") {
        return Err(format!("Unexpected output: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_interval_day_boundary() -> Result<(), String> {
    let output = run_chartspan([
        "interval",
        "--start",
        "2024-03-01T00:00:00Z",
        "--end",
        "2024-03-02T00:00:00Z",
        "--output-format",
        "json",
    ])?;
    let stdout = stdout_of(&output)?;
    let value: serde_json::Value =
        serde_json::from_str(&stdout).map_err(|err| format!("invalid json: {}", err))?;
    if value["interval"] != "15m" || value["is_short"] != true || value["diff_minutes"] != 1440 {
        return Err(format!("Unexpected output: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_percentiles_from_stdin() -> Result<(), String> {
    let input = r#"[{"percentile_999": 120, "percentile_50": 80, "p100": 200, "count": 9}]"#;
    let output = run_chartspan_with_stdin(["percentiles", "--input", "-"], input)?;
    let stdout = stdout_of(&output)?;
    let labels: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    if labels != vec!["50%", "99.9%", "100%"] {
        return Err(format!("Unexpected output: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_percentiles_with_title_and_null_columns() -> Result<(), String> {
    let input = r#"{"data": [{"title": "checkout", "p50": 80, "p95": null, "p99": 150}], "meta": {}}"#;
    let output = run_chartspan_with_stdin(["percentiles", "--input", "-"], input)?;
    let stdout = stdout_of(&output)?;
    let labels: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    if labels != vec!["50%", "99%"] {
        return Err(format!("Unexpected output: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_percentiles_empty_result_fails() -> Result<(), String> {
    let output = run_chartspan_with_stdin(["percentiles", "--input", "-"], "[]")?;
    if output.status.success() {
        return Err("Expected failure for empty result".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_config_file_applies() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config_path = dir.path().join("chartspan.toml");
    fs::write(
        &config_path,
        "high_fidelity = true\noutput_format = \"json\"\n",
    )
    .map_err(|err| format!("write config failed: {}", err))?;
    let config = config_path.to_string_lossy().into_owned();

    let output = run_chartspan(["--config", config.as_str(), "interval", "--period", "24h"])?;
    let stdout = stdout_of(&output)?;
    let value: serde_json::Value =
        serde_json::from_str(&stdout).map_err(|err| format!("invalid json: {}", err))?;
    if value["interval"] != "5m" {
        return Err(format!("Unexpected output: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_invalid_period_is_rejected() -> Result<(), String> {
    let output = run_chartspan(["interval", "--period", "14"])?;
    if output.status.success() {
        return Err("Expected invalid period to fail".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("Invalid period") {
        return Err(format!("Unexpected stderr: {}", stderr));
    }
    Ok(())
}
