//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Group,
    Member,
    Contribution,
    Payout,
    Goal,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Group => write!(f, "Group"),
            EntityType::Member => write!(f, "Member"),
            EntityType::Contribution => write!(f, "Contribution"),
            EntityType::Payout => write!(f, "Payout"),
            EntityType::Goal => write!(f, "Goal"),
        }
    }
}

/// A single audit log entry recording the creation of a ledger row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the row was created (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of entity created
    pub entity_type: EntityType,

    /// Row id of the created entity
    pub entity_id: String,

    /// Human-readable description (group or member name, recipient, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the created row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for a freshly inserted row
    pub fn created<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            record: serde_json::to_value(entity).ok(),
        }
    }

    /// One-line summary for display
    pub fn format_human_readable(&self) -> String {
        let name = self
            .entity_name
            .as_deref()
            .map(|n| format!(" \"{}\"", n))
            .unwrap_or_default();

        format!(
            "{} CREATE {} {}{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.entity_type,
            self.entity_id,
            name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_entry() {
        let record = json!({"id": 1, "name": "Savers"});
        let entry = AuditEntry::created(EntityType::Group, "1", Some("Savers".into()), &record);

        assert_eq!(entry.entity_type, EntityType::Group);
        assert_eq!(entry.record, Some(record));
        assert!(entry.format_human_readable().contains("CREATE Group 1 \"Savers\""));
    }

    #[test]
    fn test_entry_serialization() {
        let entry = AuditEntry::created(EntityType::Payout, "3", None, &json!({"amount": 40.0}));
        let line = serde_json::to_string(&entry).unwrap();

        assert!(line.contains("\"entity_type\":\"payout\""));
        assert!(!line.contains("entity_name"));

        let back: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(back.entity_id, "3");
    }
}
