//! Shared library for the Power Grid skill.
//!
//! This crate provides the error types, configuration, sector data model and
//! table gateways used by the skill Lambda.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod table;

pub use config::{Config, DEFAULT_EFFICIENCY_DIVISOR};
pub use db::{create_sector_table, DynamoSectorTable};
pub use error::{Error, Result, TableError};
pub use models::{EfficiencyUpdate, SectorRecord};
pub use table::{InMemorySectorTable, SectorTable};
