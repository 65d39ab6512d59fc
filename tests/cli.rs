use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("cancel-forecast");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("predict"))
        .stdout(predicate::str::contains("form"));
    Ok(())
}

#[test]
fn predict_without_base_url_reports_configuration_error() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("cancel-forecast");
    cmd.env_remove("PREDICTION_API_URL");
    cmd.arg("predict");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to configure prediction service"))
        .stderr(predicate::str::contains("MissingBaseUrl"));
}
