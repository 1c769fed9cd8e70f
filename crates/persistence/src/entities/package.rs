//! Package entity (database row mapping).

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Database row mapping for the packages table.
#[derive(Debug, Clone, FromRow)]
pub struct PackageEntity {
    pub id: Uuid,
    pub name: String,
    pub price_inr: f64,
    pub description: String,
    pub features: Vec<String>,
    pub success_metrics: Value,
    pub created_at: DateTime<Utc>,
}

/// Flattens the JSONB metrics object into label/value strings.
/// Non-string values keep their JSON text; anything but an object is empty.
fn metrics_map(value: Value) -> BTreeMap<String, String> {
    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(k, v)| match v {
                Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect(),
        _ => BTreeMap::new(),
    }
}

impl From<PackageEntity> for domain::models::Package {
    fn from(entity: PackageEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price_inr: entity.price_inr,
            description: entity.description,
            features: entity.features,
            success_metrics: metrics_map(entity.success_metrics),
            created_at: entity.created_at,
        }
    }
}
