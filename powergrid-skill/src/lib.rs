//! Las Vegas Power Grid Alexa skill.
//!
//! Routes Alexa request envelopes to intent handlers that read and update the
//! solar sector table, and builds the spoken response envelope.

pub mod handlers;
pub mod intent;
pub mod request;
pub mod response;
pub mod router;

pub use intent::Intent;
pub use request::{RequestEnvelope, SessionAttributes, SkillRequest};
pub use response::{build_response, build_speechlet_response, ResponseEnvelope, SpeechletResponse};
pub use router::Skill;
