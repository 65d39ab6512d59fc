use crate::domain::prediction::PredictionResult;
use crate::domain::reservation::ReservationInput;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("prediction endpoint not found")]
    NotFound,
    #[error("connection error: {0}")]
    Connection(String),
    #[error("prediction service answered with status {0}")]
    Status(u16),
    #[error("malformed prediction response")]
    Parse,
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Other(String),
}

/// Describes an interface for obtaining a cancellation forecast for a booking.
///
/// Calls are made from a single task, so implementations need not be `Send`.
#[async_trait::async_trait(?Send)]
pub trait PredictionService {
    async fn predict(&self, input: &ReservationInput) -> Result<PredictionResult, PredictionError>;
}
