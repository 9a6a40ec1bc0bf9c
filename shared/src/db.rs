//! DynamoDB-backed sector table.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client as DynamoClient;
use tracing::{debug, warn};

use crate::error::TableError;
use crate::models::{EfficiencyUpdate, SectorRecord};
use crate::table::SectorTable;
use crate::Config;

/// Partition key attribute.
pub const ID_ATTR: &str = "ID";
/// Spoken sector name attribute.
pub const DISPLAY_ATTR: &str = "Display";
/// Efficiency attribute. The spelling matches the deployed table.
pub const EFFICIENCY_ATTR: &str = "Effeciency";

type Item = HashMap<String, AttributeValue>;

/// Sector table stored in DynamoDB.
#[derive(Debug, Clone)]
pub struct DynamoSectorTable {
    client: DynamoClient,
    table_name: String,
}

impl DynamoSectorTable {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Create the DynamoDB gateway for the configured region and table.
pub async fn create_sector_table(config: &Config) -> DynamoSectorTable {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .load()
        .await;

    DynamoSectorTable::new(DynamoClient::new(&sdk_config), config.table_name.clone())
}

#[async_trait]
impl SectorTable for DynamoSectorTable {
    async fn scan(&self) -> Result<Vec<SectorRecord>, TableError> {
        let mut records = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| TableError::Service(DisplayErrorContext(e).to_string()))?;

            records.extend(sectors_from_items(&output.items.unwrap_or_default()));

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        debug!(table = %self.table_name, count = records.len(), "Scanned sector table");
        Ok(records)
    }

    async fn update_efficiency(
        &self,
        id: i64,
        efficiency: f64,
    ) -> Result<EfficiencyUpdate, TableError> {
        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ID_ATTR, AttributeValue::N(id.to_string()))
            .update_expression(format!("set {} = :eff", EFFICIENCY_ATTR))
            .expression_attribute_values(":eff", AttributeValue::N(efficiency.to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| TableError::Service(DisplayErrorContext(e).to_string()))?;

        Ok(echoed_update(id, efficiency, output.attributes.as_ref()))
    }
}

/// Decode scanned items, skipping rows that do not decode.
pub fn sectors_from_items(items: &[Item]) -> Vec<SectorRecord> {
    items
        .iter()
        .filter_map(|item| match sector_from_item(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "Skipping undecodable sector row");
                None
            }
        })
        .collect()
}

/// Read the efficiency echoed back by an update.
///
/// The write has already succeeded at this point, so an echo that is missing
/// or undecodable falls back to the value that was sent.
pub fn echoed_update(id: i64, requested: f64, attributes: Option<&Item>) -> EfficiencyUpdate {
    let echoed = attributes
        .ok_or_else(|| TableError::Malformed("update returned no attributes".to_string()))
        .and_then(|item| number_attr(item, EFFICIENCY_ATTR).map(|n| n.clone()))
        .and_then(|raw| {
            raw.parse::<f64>()
                .map_err(|e| TableError::Malformed(format!("{} is not a number: {}", EFFICIENCY_ATTR, e)))
        });

    let efficiency = match echoed {
        Ok(value) => value,
        Err(e) => {
            warn!(id, error = %e, "Update echo unreadable, using requested efficiency");
            requested
        }
    };

    EfficiencyUpdate { id, efficiency }
}

/// Decode a DynamoDB item into a sector record.
///
/// A missing `Display` decodes as an empty name; rows created by an update
/// against an unknown key only carry the key and efficiency.
pub fn sector_from_item(item: &Item) -> Result<SectorRecord, TableError> {
    let id = number_attr(item, ID_ATTR)?
        .parse::<i64>()
        .map_err(|e| TableError::Malformed(format!("{} is not an integer: {}", ID_ATTR, e)))?;

    let efficiency = number_attr(item, EFFICIENCY_ATTR)?
        .parse::<f64>()
        .map_err(|e| TableError::Malformed(format!("{} is not a number: {}", EFFICIENCY_ATTR, e)))?;

    let display_name = match item.get(DISPLAY_ATTR) {
        Some(value) => value
            .as_s()
            .map_err(|_| TableError::Malformed(format!("{} is not a string", DISPLAY_ATTR)))?
            .clone(),
        None => String::new(),
    };

    Ok(SectorRecord {
        id,
        display_name,
        efficiency,
    })
}

fn number_attr<'a>(item: &'a Item, name: &str) -> Result<&'a String, TableError> {
    item.get(name)
        .ok_or_else(|| TableError::Malformed(format!("missing {}", name)))?
        .as_n()
        .map_err(|_| TableError::Malformed(format!("{} is not a number", name)))
}
