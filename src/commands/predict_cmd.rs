use std::env;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::commands::base_commands::Commands;
use crate::commands::view_format::format_view;
use crate::domain::prediction::{PredictionResult, Verdict};
use crate::domain::reservation::ReservationInput;
use crate::services::prediction_api::{
    AuthData, BASE_URL_ENV, ConfigError, PredictionApiClient, PredictionApiConfig,
};
use crate::services::prediction_session::PredictionSession;

#[derive(Serialize)]
struct PredictionRecord<'a> {
    request: &'a ReservationInput,
    result: &'a PredictionResult,
    verdict: Verdict,
    confidence: String,
}

pub async fn predict_command(cmd: Commands) -> ExitCode {
    if let Commands::Predict {
        config,
        base_url,
        edits,
        check_in,
        booked_on,
        output,
    } = cmd
    {
        let mut session = match connect_session(config.as_deref(), base_url) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Failed to configure prediction service: {e:?}");
                return ExitCode::FAILURE;
            }
        };

        if let Some(check_in) = check_in {
            match parse_date(&check_in) {
                Some(date) => session.apply_check_in_date(date),
                None => {
                    eprintln!("Invalid check-in date: {check_in} (expected YYYY-MM-DD)");
                    return ExitCode::FAILURE;
                }
            }
        }
        if let Some(booked_on) = booked_on {
            match parse_date(&booked_on) {
                Some(date) => session.apply_booking_date(date, Local::now().date_naive()),
                None => {
                    eprintln!("Invalid booking date: {booked_on} (expected YYYY-MM-DD)");
                    return ExitCode::FAILURE;
                }
            }
        }
        for (name, value) in &edits {
            if let Err(e) = session.update_field(name, value) {
                eprintln!("Failed to update form: {e:?}");
                return ExitCode::FAILURE;
            }
        }

        let outcome = session.predict().await;
        let view = session.view();
        println!("{}", format_view(&view));

        let Some(result) = view.result else {
            if let Err(e) = outcome {
                eprintln!("Prediction failed: {e:?}");
            }
            return ExitCode::FAILURE;
        };

        if let Some(output) = output {
            let record = PredictionRecord {
                request: view.form,
                result,
                verdict: result.verdict(),
                confidence: result.confidence_label(),
            };
            let yaml = match serde_yaml::to_string(&record) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize prediction: {e:?}");
                    return ExitCode::FAILURE;
                }
            };
            if let Err(e) = tokio::fs::write(&output, yaml).await {
                eprintln!("Failed to write prediction output: {e:?}");
                return ExitCode::FAILURE;
            }
            println!("Prediction written to {output}");
        }
    }
    ExitCode::SUCCESS
}

pub(crate) fn connect_session(
    config_path: Option<&str>,
    base_url: Option<String>,
) -> Result<PredictionSession, ConfigError> {
    let config = PredictionApiConfig::resolve(config_path, base_url, env::var(BASE_URL_ENV).ok())?;
    let client = PredictionApiClient::new(config, AuthData::from_env())?;
    Ok(PredictionSession::new(Box::new(client)))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
