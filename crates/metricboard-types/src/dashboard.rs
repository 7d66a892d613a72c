use serde::{Deserialize, Serialize};

use crate::metric::MetricDescriptor;

/// One configured dashboard: a heading, a description and its metrics in
/// display order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardSpec {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<MetricDescriptor>,
}

/// Every dashboard the console serves. The first entry is the landing page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardCatalog {
    pub dashboards: Vec<DashboardSpec>,
}

impl DashboardCatalog {
    pub fn new(dashboards: Vec<DashboardSpec>) -> Self {
        Self { dashboards }
    }

    pub fn find(&self, slug: &str) -> Option<&DashboardSpec> {
        self.dashboards.iter().find(|d| d.slug == slug)
    }

    pub fn landing(&self) -> Option<&DashboardSpec> {
        self.dashboards.first()
    }

    pub fn is_empty(&self) -> bool {
        self.dashboards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> DashboardCatalog {
        DashboardCatalog::new(vec![
            DashboardSpec {
                slug: "overview".into(),
                title: "Stats".into(),
                description: "Overview".into(),
                metrics: vec![MetricDescriptor::new("Users", 42).with_link("/dashboards/users")],
            },
            DashboardSpec {
                slug: "users".into(),
                title: "Users".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn landing_is_first_dashboard() {
        assert_eq!(catalog().landing().map(|d| d.slug.as_str()), Some("overview"));
        assert_eq!(DashboardCatalog::default().landing(), None);
    }

    #[test]
    fn find_by_slug() {
        let catalog = catalog();
        assert_eq!(catalog.find("users").map(|d| d.title.as_str()), Some("Users"));
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn description_and_metrics_default_to_empty() {
        let spec: DashboardSpec =
            serde_json::from_str(r#"{"slug": "empty", "title": "Empty"}"#).unwrap();
        assert!(spec.description.is_empty());
        assert!(spec.metrics.is_empty());
    }
}
