use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique consultant identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsultantId(pub Uuid);

impl ConsultantId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ConsultantId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ConsultantId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Consultant: a sales user whose invoices make up the commercial performance.
///
/// `base.code` holds the login (e.g. "carlos.arruda"), `base.description`
/// the full name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultant {
    #[serde(flatten)]
    pub base: BaseAggregate<ConsultantId>,

    /// Monthly fixed cost (gross salary)
    #[serde(rename = "fixedCost")]
    pub fixed_cost: f64,
}

impl Consultant {
    pub fn new_for_insert(code: String, description: String, fixed_cost: f64) -> Self {
        Self {
            base: BaseAggregate::new(ConsultantId::new_v4(), code, description),
            fixed_cost,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Code must not be empty".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if !self.fixed_cost.is_finite() || self.fixed_cost < 0.0 {
            return Err("Fixed cost must be a non-negative amount".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Consultant {
    type Id = ConsultantId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "consultant"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_negative_fixed_cost() {
        let consultant = Consultant::new_for_insert("ana.paula".into(), "Ana Paula".into(), -1.0);
        assert!(consultant.validate().is_err());
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let consultant = Consultant::new_for_insert("ana.paula".into(), "Ana Paula".into(), 3000.0);
        let json = serde_json::to_value(&consultant).unwrap();
        assert_eq!(json["code"], "ana.paula");
        assert_eq!(json["fixedCost"], 3000.0);
        assert!(json.get("base").is_none());
    }
}
