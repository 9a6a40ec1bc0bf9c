//! Intent handlers.
//!
//! Each handler makes at most one sector table call and produces exactly one
//! response. Table failures never fail the invocation: the error text is
//! spoken back in place of the normal answer.

use shared::{SectorRecord, SectorTable, TableError};
use tracing::warn;

use crate::request::SessionAttributes;
use crate::response::{build_speechlet_response, SpeechletResponse};

/// Session attributes and speech produced by a handler.
pub type HandlerOutput = (SessionAttributes, SpeechletResponse);

/// Sector both the sprinklers and the sandstorm act on.
pub const SECTOR_D_ID: i64 = 1;
pub const SPRINKLER_EFFICIENCY: f64 = 88.0;
pub const SANDSTORM_EFFICIENCY: f64 = 66.0;

/// Sectors below this efficiency are reported as needing maintenance.
pub const MAINTENANCE_THRESHOLD: f64 = 80.0;

/// The one sector whose healthy report ends in "efficiency." rather than ".".
const EFFICIENCY_SUFFIX_SECTOR_ID: i64 = 3;

pub fn welcome() -> HandlerOutput {
    let speech = "Welcome to Las Vegas Powergrid How can I help today?";
    // Spoken again if the user says nothing or is not understood.
    let reprompt = "Thanks for checking in";

    (
        SessionAttributes::new(),
        build_speechlet_response("Welcome", speech, Some(reprompt), false),
    )
}

pub async fn efficiency_report(table: &dyn SectorTable, divisor: f64) -> HandlerOutput {
    let title = "Power Grid Efficiency";

    match table.scan().await {
        Ok(records) => {
            let speech = efficiency_speech(&records, divisor);
            respond(title, &speech, false)
        }
        Err(e) => table_failure(title, e, false),
    }
}

pub async fn sector_performance(table: &dyn SectorTable) -> HandlerOutput {
    let title = "Sector Performance";

    match table.scan().await {
        Ok(records) => respond(title, &sector_narrative(&records), false),
        Err(e) => table_failure(title, e, false),
    }
}

pub async fn activate_sprinklers(table: &dyn SectorTable) -> HandlerOutput {
    let title = "Turning on Sprinkers";

    match table.update_efficiency(SECTOR_D_ID, SPRINKLER_EFFICIENCY).await {
        Ok(_) => respond(
            title,
            "Turning on sprinklers in Sector D, for five minutes.",
            false,
        ),
        Err(e) => table_failure(title, e, false),
    }
}

pub async fn trigger_sandstorm(table: &dyn SectorTable) -> HandlerOutput {
    let title = "Performing Sandstorm";

    match table.update_efficiency(SECTOR_D_ID, SANDSTORM_EFFICIENCY).await {
        Ok(_) => respond(title, "Hold on, pouring sand onto Sector D.", false),
        Err(e) => table_failure(title, e, false),
    }
}

pub fn session_end() -> HandlerOutput {
    respond("Session Ended", "Happy to help, till next time!", true)
}

/// Average efficiency over a fixed sector count, not the rows returned.
pub fn efficiency_speech(records: &[SectorRecord], divisor: f64) -> String {
    let total: f64 = records.iter().map(|r| r.efficiency).sum();
    format!(
        "The power grid is running at {} percent efficiency.",
        total / divisor
    )
}

/// Spoken rundown of every sector, in scan order.
pub fn sector_narrative(records: &[SectorRecord]) -> String {
    let mut speech = String::from("Here's how your sectors are performing: ");

    for record in records {
        speech.push_str(&format!(
            "{}: {} percent",
            record.display_name, record.efficiency
        ));

        if record.efficiency < MAINTENANCE_THRESHOLD {
            speech.push_str(" efficiency, it requires maintenance. ");
        } else if record.id == EFFICIENCY_SUFFIX_SECTOR_ID {
            speech.push_str(" efficiency. ");
        } else {
            speech.push_str(". ");
        }
    }

    speech
}

fn respond(title: &str, speech: &str, should_end_session: bool) -> HandlerOutput {
    (
        SessionAttributes::new(),
        build_speechlet_response(title, speech, None, should_end_session),
    )
}

fn table_failure(title: &str, error: TableError, should_end_session: bool) -> HandlerOutput {
    warn!(title, error = %error, "Sector table call failed");
    respond(title, &error.to_string(), should_end_session)
}
