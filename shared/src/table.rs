//! Sector table gateway.
//!
//! Handlers only ever see the [`SectorTable`] trait. Production wires in the
//! DynamoDB implementation from [`crate::db`]; tests and local runs use
//! [`InMemorySectorTable`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::TableError;
use crate::models::{EfficiencyUpdate, SectorRecord};

/// Read/update access to the solar sector table.
#[async_trait]
pub trait SectorTable: Send + Sync {
    /// Return every sector row in the order the store yields them.
    async fn scan(&self) -> Result<Vec<SectorRecord>, TableError>;

    /// Set the efficiency of the sector keyed by `id`, returning the
    /// efficiency the store reports after the write.
    async fn update_efficiency(&self, id: i64, efficiency: f64)
        -> Result<EfficiencyUpdate, TableError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    records: Vec<SectorRecord>,
    updates: Vec<EfficiencyUpdate>,
    failure: Option<String>,
}

/// Sector table kept in process memory.
#[derive(Debug, Default)]
pub struct InMemorySectorTable {
    state: RwLock<InMemoryState>,
}

impl InMemorySectorTable {
    /// Create a table seeded with `records`, scanned in insertion order.
    pub fn new(records: Vec<SectorRecord>) -> Self {
        Self {
            state: RwLock::new(InMemoryState {
                records,
                ..Default::default()
            }),
        }
    }

    /// Create a table whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(InMemoryState {
                failure: Some(message.into()),
                ..Default::default()
            }),
        }
    }

    /// Make subsequent calls fail (`Some`) or succeed again (`None`).
    pub async fn set_failure(&self, message: Option<String>) {
        self.state.write().await.failure = message;
    }

    /// Every update call received so far, failed ones included.
    pub async fn updates(&self) -> Vec<EfficiencyUpdate> {
        self.state.read().await.updates.clone()
    }

    /// Current contents of the table.
    pub async fn records(&self) -> Vec<SectorRecord> {
        self.state.read().await.records.clone()
    }
}

#[async_trait]
impl SectorTable for InMemorySectorTable {
    async fn scan(&self) -> Result<Vec<SectorRecord>, TableError> {
        let state = self.state.read().await;
        if let Some(message) = &state.failure {
            return Err(TableError::Service(message.clone()));
        }
        Ok(state.records.clone())
    }

    async fn update_efficiency(
        &self,
        id: i64,
        efficiency: f64,
    ) -> Result<EfficiencyUpdate, TableError> {
        let mut state = self.state.write().await;
        state.updates.push(EfficiencyUpdate { id, efficiency });

        if let Some(message) = &state.failure {
            return Err(TableError::Service(message.clone()));
        }

        // DynamoDB upserts on UpdateItem, so a missing key creates the row.
        match state.records.iter_mut().find(|r| r.id == id) {
            Some(record) => record.efficiency = efficiency,
            None => state
                .records
                .push(SectorRecord::new(id, String::new(), efficiency)),
        }

        Ok(EfficiencyUpdate { id, efficiency })
    }
}
