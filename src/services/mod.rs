pub mod form_state;
pub mod prediction_api;
pub mod prediction_service;
pub mod prediction_session;
