//! Shared data models.

/// One row of the solar sector table.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorRecord {
    /// Sector key
    pub id: i64,
    /// Name spoken to the user
    pub display_name: String,
    /// Efficiency percentage, expected in 0..=100
    pub efficiency: f64,
}

impl SectorRecord {
    pub fn new(id: i64, display_name: impl Into<String>, efficiency: f64) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            efficiency,
        }
    }
}

/// An efficiency write: what was sent, or what the store echoed back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyUpdate {
    pub id: i64,
    pub efficiency: f64,
}
