//! Service package domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A predefined service offering used as an invoice template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: Uuid,
    pub name: String,
    pub price_inr: f64,
    pub description: String,
    pub features: Vec<String>,
    pub success_metrics: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl Package {
    /// Whether the feature is part of this package.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Features in listed order with repeats dropped.
    pub fn distinct_features(&self) -> Vec<String> {
        let mut features: Vec<String> = Vec::with_capacity(self.features.len());
        for feature in &self.features {
            if !features.contains(feature) {
                features.push(feature.clone());
            }
        }
        features
    }

    /// Position of the feature in the package's feature list.
    pub fn feature_position(&self, feature: &str) -> Option<usize> {
        self.features.iter().position(|f| f == feature)
    }
}

/// Response for listing packages.
#[derive(Debug, Clone, Serialize)]
pub struct ListPackagesResponse {
    pub packages: Vec<Package>,
    pub total: usize,
}


#[cfg(test)]
mod tests {
    use super::fixtures::growth_package;

    #[test]
    fn test_has_feature() {
        let package = growth_package();
        assert!(package.has_feature("Landing page"));
        assert!(!package.has_feature("landing page"));
        assert!(!package.has_feature("Billboard"));
    }

    #[test]
    fn test_distinct_features_keeps_first_occurrence() {
        let mut package = growth_package();
        package.features = vec!["A".into(), "B".into(), "A".into(), "C".into(), "B".into()];
        assert_eq!(package.distinct_features(), ["A", "B", "C"]);
    }

    #[test]
    fn test_feature_position() {
        let package = growth_package();
        assert_eq!(package.feature_position("SEO audit"), Some(0));
        assert_eq!(package.feature_position("Email campaign"), Some(2));
        assert_eq!(package.feature_position("Billboard"), None);
    }

    #[test]
    fn test_package_serialization_uses_snake_case() {
        let json = serde_json::to_string(&growth_package()).unwrap();
        assert!(json.contains("\"price_inr\":10000.0"));
        assert!(json.contains("\"success_metrics\""));
        assert!(json.contains("leads_per_month"));
    }
}
