//! The physical lot associated with a partner

use serde::{Deserialize, Serialize};
use std::fmt;

/// Construction status of a lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionStatus {
    #[serde(rename = "Sin Construir")]
    Unbuilt,
    #[serde(rename = "En Construcción")]
    InProgress,
    #[serde(rename = "Terminado")]
    Finished,
}

impl fmt::Display for ConstructionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionStatus::Unbuilt => write!(f, "Sin Construir"),
            ConstructionStatus::InProgress => write!(f, "En Construcción"),
            ConstructionStatus::Finished => write!(f, "Terminado"),
        }
    }
}

/// A lot in the association's grounds, identified by block and lot number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Block identifier (e.g., "A")
    pub block: String,

    /// Lot identifier within the block (e.g., "12")
    pub lot: String,

    /// Current construction status
    pub status: ConstructionStatus,
}

impl Property {
    pub fn new(block: &str, lot: &str, status: ConstructionStatus) -> Self {
        Self {
            block: block.to_string(),
            lot: lot.to_string(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_to_spanish_label() {
        let json = serde_json::to_string(&ConstructionStatus::InProgress).unwrap();
        assert_eq!(json, "\"En Construcción\"");

        let parsed: ConstructionStatus = serde_json::from_str("\"Terminado\"").unwrap();
        assert_eq!(parsed, ConstructionStatus::Finished);
    }

    #[test]
    fn test_property_wire_shape() {
        let property = Property::new("A", "12", ConstructionStatus::Finished);
        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["block"], "A");
        assert_eq!(value["lot"], "12");
        assert_eq!(value["status"], "Terminado");
    }
}
