use crate::domain::prediction::PredictionResult;
use crate::domain::reservation::{ReservationField, ReservationInput};

pub const PREDICT_LABEL: &str = "Predecir Cancelación";
pub const LOADING_LABEL: &str = "Procesando...";
pub const PREDICTION_UNAVAILABLE: &str = "Error al obtener la predicción.";

/// What the view currently shows besides the always-editable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Editing,
    Loading,
    ResultShown,
}

/// Change published to view observers after the state has been updated.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    FieldChanged(ReservationField),
    LoadingChanged(bool),
    ResultReady,
    Notification(String),
}

/// Borrowed snapshot of everything the renderer needs.
#[derive(Debug, Clone, Copy)]
pub struct ViewModel<'a> {
    pub form: &'a ReservationInput,
    pub loading: bool,
    pub result: Option<&'a PredictionResult>,
    pub error: Option<&'a str>,
}

impl ViewModel<'_> {
    pub fn render_state(&self) -> RenderState {
        if self.loading {
            RenderState::Loading
        } else if self.result.is_some() {
            RenderState::ResultShown
        } else {
            RenderState::Editing
        }
    }

    pub fn trigger_enabled(&self) -> bool {
        !self.loading
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.loading { LOADING_LABEL } else { PREDICT_LABEL }
    }
}
