//! Recommendation interaction reporting
//!
//! Detail views and purchases are reported with the `recommId` of the result
//! set the user came from. Reports are fire-and-forget: failures are logged
//! and never reach the caller.

use std::sync::Arc;

use serde::Serialize;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::models::recommendation::RecommId;
use crate::services::client::to_body;
use crate::services::response::classify_outcome;
use crate::services::transport::{HttpMethod, HttpRequest, HttpTransport};
use crate::utils::logging::log_interaction;

pub trait InteractionReporter: Send + Sync {
    fn report_detail_view(&self, user_id: &str, event_id: &str, recomm_id: &RecommId);

    fn report_purchase(&self, user_id: &str, event_id: &str, recomm_id: &RecommId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    DetailView,
    Purchase,
}

impl Interaction {
    fn path(&self) -> &'static str {
        match self {
            Interaction::DetailView => "detailviews",
            Interaction::Purchase => "purchases",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Interaction::DetailView => "detail_view",
            Interaction::Purchase => "purchase",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct InteractionRequest<'a> {
    user_id: &'a str,
    item_id: &'a str,
    recomm_id: &'a RecommId,
    cascade_create: bool,
}

/// Posts interactions to the recommendation backend from a spawned task.
///
/// Reports made outside a Tokio runtime are dropped with a warning.
#[derive(Clone)]
pub struct HttpInteractionReporter {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl HttpInteractionReporter {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Send one interaction and wait for it; returns whether it was accepted
    pub async fn send(&self, interaction: Interaction, user_id: &str, event_id: &str, recomm_id: &RecommId) -> bool {
        let body = InteractionRequest {
            user_id,
            item_id: event_id,
            recomm_id,
            cascade_create: true,
        };
        let url = format!("{}/{}/", self.base_url, interaction.path());

        let accepted = match to_body(&body) {
            Ok(body) => {
                let request = HttpRequest::new(HttpMethod::Post, url).json(body);
                classify_outcome(self.transport.execute(request).await).is_ok()
            }
            Err(_) => false,
        };

        log_interaction(interaction.name(), user_id, event_id, recomm_id.as_str(), accepted);
        accepted
    }

    fn spawn(&self, interaction: Interaction, user_id: &str, event_id: &str, recomm_id: &RecommId) {
        let Ok(runtime) = Handle::try_current() else {
            warn!(
                interaction = interaction.name(),
                event_id = event_id,
                "No async runtime, dropping interaction report"
            );
            return;
        };

        debug!(interaction = interaction.name(), event_id = event_id, "Queueing interaction report");
        let reporter = self.clone();
        let user_id = user_id.to_string();
        let event_id = event_id.to_string();
        let recomm_id = recomm_id.clone();
        runtime.spawn(async move {
            reporter.send(interaction, &user_id, &event_id, &recomm_id).await;
        });
    }
}

impl InteractionReporter for HttpInteractionReporter {
    fn report_detail_view(&self, user_id: &str, event_id: &str, recomm_id: &RecommId) {
        self.spawn(Interaction::DetailView, user_id, event_id, recomm_id);
    }

    fn report_purchase(&self, user_id: &str, event_id: &str, recomm_id: &RecommId) {
        self.spawn(Interaction::Purchase, user_id, event_id, recomm_id);
    }
}
