//! Inbound Alexa request envelope.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Opaque per-conversation state carried between turns by the platform.
pub type SessionAttributes = Map<String, Value>;

/// The event Alexa delivers for every turn of a conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    pub session: Session,
    pub request: SkillRequest,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "new")]
    pub is_new: bool,
    pub session_id: String,
    pub application: Application,
    #[serde(default)]
    pub attributes: Option<SessionAttributes>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

/// The request half of the envelope, tagged by its `type` field.
///
/// Any other `type` fails deserialization and so fails the invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SkillRequest {
    LaunchRequest(LaunchRequest),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
}

impl SkillRequest {
    pub fn request_id(&self) -> &str {
        match self {
            SkillRequest::LaunchRequest(r) => &r.request_id,
            SkillRequest::IntentRequest(r) => &r.request_id,
            SkillRequest::SessionEndedRequest(r) => &r.request_id,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            SkillRequest::LaunchRequest(r) => r.timestamp,
            SkillRequest::IntentRequest(r) => r.timestamp,
            SkillRequest::SessionEndedRequest(r) => r.timestamp,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub request_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub request_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub locale: Option<String>,
    pub intent: IntentData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    pub request_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub locale: Option<String>,
    /// USER_INITIATED, ERROR or EXCEEDED_MAX_REPROMPTS
    #[serde(default)]
    pub reason: Option<String>,
}

/// Intent as recognized by the platform's language model.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentData {
    pub name: String,
    /// No supported intent declares slots; they are parsed but unused.
    #[serde(default)]
    pub slots: Option<HashMap<String, Slot>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_intent_request() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "session": {
                "new": false,
                "sessionId": "amzn1.echo-api.session.abc",
                "application": { "applicationId": "amzn1.ask.skill.123" },
                "attributes": { "turn": 2 },
                "user": { "userId": "amzn1.ask.account.xyz" }
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "timestamp": "2026-10-15T08:30:00Z",
                "locale": "en-US",
                "intent": {
                    "name": "Efficiency",
                    "slots": { "Sector": { "name": "Sector", "value": "D" } }
                }
            }
        }))
        .unwrap();

        assert!(!envelope.session.is_new);
        assert_eq!(envelope.session.application.application_id, "amzn1.ask.skill.123");
        assert_eq!(envelope.request.request_id(), "amzn1.echo-api.request.1");
        assert!(envelope.request.timestamp().is_some());

        match envelope.request {
            SkillRequest::IntentRequest(r) => {
                assert_eq!(r.intent.name, "Efficiency");
                let slots = r.intent.slots.unwrap();
                assert_eq!(slots["Sector"].value.as_deref(), Some("D"));
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_parse_minimal_session_ended() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "session": {
                "new": true,
                "sessionId": "s-1",
                "application": { "applicationId": "app" }
            },
            "request": { "type": "SessionEndedRequest", "requestId": "r-1", "reason": "USER_INITIATED" }
        }))
        .unwrap();

        assert!(envelope.session.attributes.is_none());
        assert!(matches!(
            envelope.request,
            SkillRequest::SessionEndedRequest(SessionEndedRequest { reason: Some(_), .. })
        ));
    }

    #[test]
    fn test_unknown_request_type_is_rejected() {
        let result = serde_json::from_value::<RequestEnvelope>(json!({
            "session": {
                "new": false,
                "sessionId": "s-1",
                "application": { "applicationId": "app" }
            },
            "request": { "type": "CanFulfillIntentRequest", "requestId": "r-1" }
        }));

        assert!(result.is_err());
    }
}
