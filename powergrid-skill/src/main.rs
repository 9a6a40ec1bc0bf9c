//! Alexa Skill Lambda - Answers Las Vegas Power Grid voice requests.

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use powergrid_skill::{RequestEnvelope, ResponseEnvelope, Skill};
use shared::{create_sector_table, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn handler(
    skill: Arc<Skill>,
    event: LambdaEvent<RequestEnvelope>,
) -> Result<Option<ResponseEnvelope>, Error> {
    let request_id = event.context.request_id.clone();

    skill.handle(event.payload).await.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Skill invocation failed");
        Error::from(format!("Exception: {}", e))
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    let table = create_sector_table(&config).await;
    info!(table = %table.table_name(), region = %config.aws_region, "Sector table ready");

    let skill = Arc::new(Skill::from_config(Arc::new(table), &config));

    run(service_fn(move |event| {
        let skill = Arc::clone(&skill);
        async move { handler(skill, event).await }
    }))
    .await
}
