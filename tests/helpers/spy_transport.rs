//! In-process transport and reporter doubles
//!
//! `SpyTransport` records every request and replays queued outcomes without
//! touching the network. `RecordingReporter` captures interaction reports.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use yallanow_client::models::RecommId;
use yallanow_client::services::{
    HttpRequest, HttpResponse, HttpTransport, InteractionReporter, TransportOutcome,
};

#[derive(Default)]
pub struct SpyTransport {
    requests: Mutex<Vec<HttpRequest>>,
    outcomes: Mutex<VecDeque<TransportOutcome>>,
}

impl SpyTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Option<Value>) -> &Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(TransportOutcome::Response(HttpResponse { status, body }));
        self
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(TransportOutcome::NoResponse(reason.to_string()));
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for SpyTransport {
    async fn execute(&self, request: HttpRequest) -> TransportOutcome {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| TransportOutcome::NoResponse("no outcome queued".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedInteraction {
    pub kind: &'static str,
    pub user_id: String,
    pub event_id: String,
    pub recomm_id: RecommId,
}

#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<ReportedInteraction>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<ReportedInteraction> {
        self.reports.lock().unwrap().clone()
    }

    fn record(&self, kind: &'static str, user_id: &str, event_id: &str, recomm_id: &RecommId) {
        self.reports.lock().unwrap().push(ReportedInteraction {
            kind,
            user_id: user_id.to_string(),
            event_id: event_id.to_string(),
            recomm_id: recomm_id.clone(),
        });
    }
}

impl InteractionReporter for RecordingReporter {
    fn report_detail_view(&self, user_id: &str, event_id: &str, recomm_id: &RecommId) {
        self.record("detail_view", user_id, event_id, recomm_id);
    }

    fn report_purchase(&self, user_id: &str, event_id: &str, recomm_id: &RecommId) {
        self.record("purchase", user_id, event_id, recomm_id);
    }
}
