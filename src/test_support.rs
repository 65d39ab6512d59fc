use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::domain::prediction::PredictionResult;
use crate::domain::reservation::ReservationInput;
use crate::domain::view_model::{ViewEvent, ViewModel};
use crate::services::prediction_service::{PredictionError, PredictionService};
use crate::services::prediction_session::ViewObserver;

// A mock service that always fails like an unreachable endpoint
pub struct FailingService;

#[async_trait::async_trait(?Send)]
impl PredictionService for FailingService {
    async fn predict(&self, _input: &ReservationInput) -> Result<PredictionResult, PredictionError> {
        Err(PredictionError::Connection("connection refused".to_string()))
    }
}

// A mock service answering every call with the same result, optionally failing
// some of the calls, and remembering what it was sent
pub struct StaticService {
    result: PredictionResult,
    requests: Rc<RefCell<Vec<ReservationInput>>>,
    calls: Cell<usize>,
    fail_first: usize,
    fail_after: Option<usize>,
}

impl StaticService {
    pub fn new(result: PredictionResult) -> Self {
        Self {
            result,
            requests: Rc::new(RefCell::new(Vec::new())),
            calls: Cell::new(0),
            fail_first: 0,
            fail_after: None,
        }
    }

    pub fn failing_first(mut self, calls: usize) -> Self {
        self.fail_first = calls;
        self
    }

    pub fn failing_after(mut self, calls: usize) -> Self {
        self.fail_after = Some(calls);
        self
    }

    pub fn requests(&self) -> Rc<RefCell<Vec<ReservationInput>>> {
        Rc::clone(&self.requests)
    }
}

#[async_trait::async_trait(?Send)]
impl PredictionService for StaticService {
    async fn predict(&self, input: &ReservationInput) -> Result<PredictionResult, PredictionError> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        self.requests.borrow_mut().push(input.clone());

        let past_limit = self.fail_after.is_some_and(|limit| call >= limit);
        if call < self.fail_first || past_limit {
            return Err(PredictionError::Status(503));
        }
        Ok(self.result.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RecordedEvent {
    event: ViewEvent,
    loading: bool,
}

// Observer keeping every event together with the loading flag seen at the time
#[derive(Clone, Default)]
pub struct RecordingObserver {
    recorded: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.recorded.borrow().iter().map(|r| r.event.clone()).collect()
    }

    pub fn loading_flags(&self) -> Vec<bool> {
        self.recorded.borrow().iter().map(|r| r.loading).collect()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.recorded
            .borrow()
            .iter()
            .filter_map(|r| match &r.event {
                ViewEvent::Notification(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ViewObserver for RecordingObserver {
    fn on_event(&mut self, event: &ViewEvent, view: &ViewModel<'_>) {
        self.recorded.borrow_mut().push(RecordedEvent {
            event: event.clone(),
            loading: view.loading,
        });
    }
}
