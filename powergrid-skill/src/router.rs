//! Request routing: one inbound event in, at most one envelope out.

use std::sync::Arc;

use shared::{Config, Result, SectorTable, DEFAULT_EFFICIENCY_DIVISOR};
use tracing::info;

use crate::handlers::{self, HandlerOutput};
use crate::intent::Intent;
use crate::request::{
    IntentRequest, LaunchRequest, RequestEnvelope, Session, SessionEndedRequest, SkillRequest,
};
use crate::response::{build_response, ResponseEnvelope};

/// The skill: a sector table plus the knobs the handlers read.
#[derive(Clone)]
pub struct Skill {
    table: Arc<dyn SectorTable>,
    efficiency_divisor: f64,
}

impl Skill {
    pub fn new(table: Arc<dyn SectorTable>) -> Self {
        Self {
            table,
            efficiency_divisor: DEFAULT_EFFICIENCY_DIVISOR,
        }
    }

    pub fn from_config(table: Arc<dyn SectorTable>, config: &Config) -> Self {
        Self::new(table).with_efficiency_divisor(config.efficiency_divisor)
    }

    pub fn with_efficiency_divisor(mut self, divisor: f64) -> Self {
        self.efficiency_divisor = divisor;
        self
    }

    /// Handle one inbound event.
    ///
    /// Returns `Ok(None)` for a session-ended notification, which gets no
    /// response. Unknown intents are an error and produce no envelope.
    pub async fn handle(&self, envelope: RequestEnvelope) -> Result<Option<ResponseEnvelope>> {
        let RequestEnvelope {
            session, request, ..
        } = envelope;

        info!(
            application_id = %session.application.application_id,
            timestamp = ?request.timestamp(),
            "Received skill request"
        );

        if session.is_new {
            on_session_started(request.request_id(), &session);
        }

        match request {
            SkillRequest::LaunchRequest(launch) => {
                let (attributes, speechlet) = self.on_launch(&launch, &session);
                Ok(Some(build_response(attributes, speechlet)))
            }
            SkillRequest::IntentRequest(intent_request) => {
                let (attributes, speechlet) = self.on_intent(&intent_request, &session).await?;
                Ok(Some(build_response(attributes, speechlet)))
            }
            SkillRequest::SessionEndedRequest(ended) => {
                on_session_ended(&ended, &session);
                Ok(None)
            }
        }
    }

    /// Run the handler for an already-parsed intent.
    pub async fn dispatch(&self, intent: Intent) -> HandlerOutput {
        let table = self.table.as_ref();

        match intent {
            Intent::Efficiency => handlers::efficiency_report(table, self.efficiency_divisor).await,
            Intent::Sprinklers => handlers::activate_sprinklers(table).await,
            Intent::Sectors => handlers::sector_performance(table).await,
            Intent::Sandstorm => handlers::trigger_sandstorm(table).await,
            Intent::Help => handlers::welcome(),
            Intent::Stop | Intent::Cancel | Intent::Noop => handlers::session_end(),
        }
    }

    fn on_launch(&self, launch: &LaunchRequest, session: &Session) -> HandlerOutput {
        info!(
            request_id = %launch.request_id,
            session_id = %session.session_id,
            "onLaunch"
        );
        handlers::welcome()
    }

    async fn on_intent(
        &self,
        intent_request: &IntentRequest,
        session: &Session,
    ) -> Result<HandlerOutput> {
        info!(
            request_id = %intent_request.request_id,
            session_id = %session.session_id,
            intent = %intent_request.intent.name,
            "onIntent"
        );

        let intent: Intent = intent_request.intent.name.parse()?;
        Ok(self.dispatch(intent).await)
    }
}

fn on_session_started(request_id: &str, session: &Session) {
    info!(
        request_id,
        session_id = %session.session_id,
        "onSessionStarted"
    );
}

fn on_session_ended(ended: &SessionEndedRequest, session: &Session) {
    info!(
        request_id = %ended.request_id,
        session_id = %session.session_id,
        reason = ended.reason.as_deref().unwrap_or("unknown"),
        "onSessionEnded"
    );
}
