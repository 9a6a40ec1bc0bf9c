//! Alexa response envelope and the helpers that build it.

use serde::Serialize;

use crate::request::SessionAttributes;

/// Prefix applied to both the card title and the card body.
pub const CARD_PREFIX: &str = "SessionSpeechlet - ";

pub const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: SessionAttributes,
    pub response: SpeechletResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub reprompt: Reprompt,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: Option<String>,
}

impl OutputSpeech {
    fn plain_text(text: Option<String>) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Build the speech, card and reprompt payload for one turn.
pub fn build_speechlet_response(
    title: &str,
    output: &str,
    reprompt_text: Option<&str>,
    should_end_session: bool,
) -> SpeechletResponse {
    SpeechletResponse {
        output_speech: OutputSpeech::plain_text(Some(output.to_string())),
        card: Card {
            card_type: "Simple".to_string(),
            title: format!("{}{}", CARD_PREFIX, title),
            content: format!("{}{}", CARD_PREFIX, output),
        },
        reprompt: Reprompt {
            output_speech: OutputSpeech::plain_text(reprompt_text.map(str::to_string)),
        },
        should_end_session,
    }
}

/// Wrap a speechlet response and session attributes into the envelope.
pub fn build_response(
    session_attributes: SessionAttributes,
    speechlet_response: SpeechletResponse,
) -> ResponseEnvelope {
    ResponseEnvelope {
        version: RESPONSE_VERSION.to_string(),
        session_attributes,
        response: speechlet_response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_speechlet_prefixes_card() {
        let speechlet = build_speechlet_response("Welcome", "Hello there", Some("Still there?"), false);

        assert_eq!(speechlet.output_speech.text.as_deref(), Some("Hello there"));
        assert_eq!(speechlet.card.title, "SessionSpeechlet - Welcome");
        assert_eq!(speechlet.card.content, "SessionSpeechlet - Hello there");
        assert_eq!(speechlet.reprompt.output_speech.text.as_deref(), Some("Still there?"));
        assert!(!speechlet.should_end_session);
    }

    #[test]
    fn test_build_response_keeps_inputs() {
        let mut attrs = SessionAttributes::new();
        attrs.insert("turn".to_string(), json!(3));
        let speechlet = build_speechlet_response("Title", "Body", None, true);

        let envelope = build_response(attrs.clone(), speechlet.clone());

        assert_eq!(envelope.version, "1.0");
        assert_eq!(envelope.session_attributes, attrs);
        assert_eq!(envelope.response, speechlet);
    }

    #[test]
    fn test_wire_shape() {
        let envelope = build_response(
            SessionAttributes::new(),
            build_speechlet_response("Session Ended", "Bye", None, true),
        );

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "version": "1.0",
                "sessionAttributes": {},
                "response": {
                    "outputSpeech": { "type": "PlainText", "text": "Bye" },
                    "card": {
                        "type": "Simple",
                        "title": "SessionSpeechlet - Session Ended",
                        "content": "SessionSpeechlet - Bye"
                    },
                    "reprompt": { "outputSpeech": { "type": "PlainText", "text": null } },
                    "shouldEndSession": true
                }
            })
        );
    }
}
