use chrono::NaiveDate;
use tracing::{debug, error, info};

use crate::domain::prediction::PredictionResult;
use crate::domain::reservation::{FormError, ReservationField};
use crate::domain::view_model::{PREDICTION_UNAVAILABLE, ViewEvent, ViewModel};
use crate::services::form_state::FormState;
use crate::services::prediction_service::{PredictionError, PredictionService};

/// Receives every change made to a [`PredictionSession`], after it happened.
pub trait ViewObserver {
    fn on_event(&mut self, event: &ViewEvent, view: &ViewModel<'_>);
}

/// State behind the cancellation forecast view: the editable form, the loading
/// flag, the last result and the last failure notification.
///
/// A failed prediction keeps the previous result and sets the error field; a
/// successful one replaces the result and clears the error. Editing the form
/// dismisses a pending error, so a failure is shown once.
pub struct PredictionSession {
    form: FormState,
    loading: bool,
    result: Option<PredictionResult>,
    error: Option<String>,
    service: Box<dyn PredictionService>,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl PredictionSession {
    pub fn new(service: Box<dyn PredictionService>) -> Self {
        Self {
            form: FormState::new(),
            loading: false,
            result: None,
            error: None,
            service,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn ViewObserver>) {
        self.observers.push(observer);
    }

    pub fn view(&self) -> ViewModel<'_> {
        ViewModel {
            form: self.form.input(),
            loading: self.loading,
            result: self.result.as_ref(),
            error: self.error.as_deref(),
        }
    }

    pub fn update_field(&mut self, name: &str, raw_value: &str) -> Result<ReservationField, FormError> {
        let field = self.form.update_field(name, raw_value)?;
        self.error = None;
        debug!(field = field.name(), raw_value, "form field updated");
        self.publish(ViewEvent::FieldChanged(field));
        Ok(field)
    }

    pub fn apply_check_in_date(&mut self, check_in: NaiveDate) {
        self.error = None;
        for field in self.form.apply_check_in_date(check_in) {
            self.publish(ViewEvent::FieldChanged(field));
        }
    }

    pub fn apply_booking_date(&mut self, booked_on: NaiveDate, today: NaiveDate) {
        let field = self.form.apply_booking_date(booked_on, today);
        self.error = None;
        self.publish(ViewEvent::FieldChanged(field));
    }

    /// Sends the current form to the prediction service and records the outcome.
    ///
    /// The loading flag is raised for the duration of the call and lowered on
    /// both outcomes. A failure produces exactly one notification.
    pub async fn predict(&mut self) -> Result<(), PredictionError> {
        let request = self.form.snapshot();
        self.set_loading(true);

        let outcome = self.service.predict(&request).await;
        match &outcome {
            Ok(result) => {
                info!(
                    verdict = ?result.verdict(),
                    confidence = %result.confidence_label(),
                    "prediction received"
                );
                self.result = Some(result.clone());
                self.error = None;
                self.publish(ViewEvent::ResultReady);
            }
            Err(err) => {
                error!(error = %err, "failed to obtain prediction");
                self.error = Some(PREDICTION_UNAVAILABLE.to_string());
                self.publish(ViewEvent::Notification(PREDICTION_UNAVAILABLE.to_string()));
            }
        }

        self.set_loading(false);
        outcome.map(|_| ())
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.publish(ViewEvent::LoadingChanged(loading));
    }

    fn publish(&mut self, event: ViewEvent) {
        let view = ViewModel {
            form: self.form.input(),
            loading: self.loading,
            result: self.result.as_ref(),
            error: self.error.as_deref(),
        };
        for observer in self.observers.iter_mut() {
            observer.on_event(&event, &view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::Verdict;
    use crate::domain::reservation::ReservationInput;
    use crate::domain::view_model::RenderState;
    use crate::test_support::{FailingService, RecordingObserver, StaticService};

    #[tokio::test]
    async fn successful_prediction_shows_result() {
        let service = StaticService::new(PredictionResult::new("Si", 0.87));
        let mut session = PredictionSession::new(Box::new(service));

        session.predict().await.unwrap();

        let view = session.view();
        assert_eq!(view.render_state(), RenderState::ResultShown);
        let result = view.result.unwrap();
        assert_eq!(result.verdict(), Verdict::WillCancel);
        assert_eq!(result.confidence_label(), "87%");
        assert!(view.error.is_none());
    }

    #[tokio::test]
    async fn loading_is_raised_during_call_and_lowered_after() {
        let service = StaticService::new(PredictionResult::new("No", 0.42));
        let mut session = PredictionSession::new(Box::new(service));
        let observer = RecordingObserver::new();
        session.subscribe(Box::new(observer.clone()));

        session.predict().await.unwrap();

        assert_eq!(
            observer.events(),
            vec![
                ViewEvent::LoadingChanged(true),
                ViewEvent::ResultReady,
                ViewEvent::LoadingChanged(false),
            ]
        );
        assert_eq!(observer.loading_flags(), vec![true, true, false]);
        assert!(!session.view().loading);
    }

    #[tokio::test]
    async fn failure_notifies_once_and_clears_loading() {
        let mut session = PredictionSession::new(Box::new(FailingService));
        let observer = RecordingObserver::new();
        session.subscribe(Box::new(observer.clone()));

        let outcome = session.predict().await;

        assert!(outcome.is_err());
        assert_eq!(observer.notifications(), vec![PREDICTION_UNAVAILABLE.to_string()]);
        let view = session.view();
        assert!(!view.loading);
        assert!(view.result.is_none());
        assert_eq!(view.error, Some(PREDICTION_UNAVAILABLE));
        assert_eq!(view.render_state(), RenderState::Editing);
    }

    #[tokio::test]
    async fn request_is_a_snapshot_of_the_form() {
        let service = StaticService::new(PredictionResult::new("No", 0.1));
        let requests = service.requests();
        let mut session = PredictionSession::new(Box::new(service));

        session.update_field("numAdultos", "3").unwrap();
        session.update_field("diaSemanaCheckIn", "Sunday").unwrap();
        session.predict().await.unwrap();

        let sent = requests.borrow();
        assert_eq!(sent.len(), 1);
        let mut expected = ReservationInput::default();
        expected.num_adultos = 3.0;
        expected.dia_semana_check_in = "Sunday".to_string();
        assert_eq!(sent[0], expected);
    }

    #[tokio::test]
    async fn success_after_failure_clears_error() {
        let service = StaticService::new(PredictionResult::new("No", 0.2)).failing_first(1);
        let mut session = PredictionSession::new(Box::new(service));

        assert!(session.predict().await.is_err());
        assert!(session.view().error.is_some());

        session.predict().await.unwrap();
        assert!(session.view().error.is_none());
        assert!(session.view().result.is_some());
    }

    #[tokio::test]
    async fn failure_keeps_previous_result() {
        let service = StaticService::new(PredictionResult::new("Si", 0.6)).failing_after(1);
        let mut session = PredictionSession::new(Box::new(service));

        session.predict().await.unwrap();
        assert!(session.predict().await.is_err());

        let view = session.view();
        assert_eq!(view.result.map(|r| r.verdict()), Some(Verdict::WillCancel));
        assert_eq!(view.error, Some(PREDICTION_UNAVAILABLE));
    }

    #[tokio::test]
    async fn editing_the_form_dismisses_the_error() {
        let mut session = PredictionSession::new(Box::new(FailingService));
        let observer = RecordingObserver::new();
        session.subscribe(Box::new(observer.clone()));

        assert!(session.predict().await.is_err());
        assert_eq!(session.view().error, Some(PREDICTION_UNAVAILABLE));

        session.update_field("numAdultos", "3").unwrap();
        assert!(session.view().error.is_none());
        assert_eq!(observer.notifications().len(), 1);

        assert!(session.predict().await.is_err());
        session.apply_booking_date(
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        );
        assert!(session.view().error.is_none());

        assert!(session.predict().await.is_err());
        session.apply_check_in_date(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert!(session.view().error.is_none());
    }

    #[test]
    fn failed_field_edit_keeps_the_error() {
        let mut session = PredictionSession::new(Box::new(FailingService));
        session.error = Some(PREDICTION_UNAVAILABLE.to_string());

        assert!(session.update_field("planta", "3").is_err());
        assert_eq!(session.view().error, Some(PREDICTION_UNAVAILABLE));
    }

    #[test]
    fn field_edits_publish_change_events() {
        let mut session = PredictionSession::new(Box::new(FailingService));
        let observer = RecordingObserver::new();
        session.subscribe(Box::new(observer.clone()));

        session.update_field("mesCheckIn", "9").unwrap();
        assert!(session.update_field("planta", "3").is_err());
        session.apply_check_in_date(NaiveDate::from_ymd_opt(2026, 7, 4).unwrap());

        assert_eq!(
            observer.events(),
            vec![
                ViewEvent::FieldChanged(ReservationField::MesCheckIn),
                ViewEvent::FieldChanged(ReservationField::DiaSemanaCheckIn),
                ViewEvent::FieldChanged(ReservationField::MesCheckIn),
            ]
        );
        assert_eq!(session.view().form.dia_semana_check_in, "Saturday");
        assert_eq!(session.view().form.mes_check_in, 7.0);
    }
}
