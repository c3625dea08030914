//! Registry of named dashboards and the URLs they embed.

use anyhow::{bail, Context};
use dioxus_logger::tracing::{error, info};
use serde::{Deserialize, Serialize};

/// Placeholder URL for the built-in regional dashboard.
pub const REGIONAL_DASHBOARD_URL: &str = "YOUR_REGIONAL_DASHBOARD_URL";

/// One dashboard: a unique name, a section title, and the URL to embed.
///
/// The URL is opaque and is handed to the provider unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardEntry {
    pub name: String,
    pub title: String,
    pub url: String,
}

impl DashboardEntry {
    pub fn new(name: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            url: url.into(),
        }
    }

    /// DOM id of this dashboard's mount point.
    pub fn mount_id(&self) -> String {
        format!("viz-{}", self.name)
    }
}

/// Insertion-ordered dashboards with unique names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardRegistry {
    entries: Vec<DashboardEntry>,
}

impl DashboardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in configuration: a single regional performance dashboard.
    pub fn builtin() -> Self {
        Self {
            entries: vec![DashboardEntry::new(
                "regional",
                "Regional Performance",
                REGIONAL_DASHBOARD_URL,
            )],
        }
    }

    /// Parse a JSON array of `{ name, title, url }` objects.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let entries: Vec<DashboardEntry> =
            serde_json::from_str(json).context("Failed to parse dashboard registry JSON")?;
        let mut registry = Self::new();
        for entry in entries {
            registry.insert(entry)?;
        }
        Ok(registry)
    }

    /// Like [`from_json`](Self::from_json), but logs a bad config and
    /// returns the built-in registry instead.
    pub fn from_json_or_builtin(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(registry) => {
                info!("Loaded {} dashboard(s) from config", registry.len());
                registry
            }
            Err(e) => {
                error!("Invalid dashboard config, using built-in registry: {:#}", e);
                Self::builtin()
            }
        }
    }

    /// Append an entry. Names must be unique.
    pub fn insert(&mut self, entry: DashboardEntry) -> anyhow::Result<()> {
        if self.get(&entry.name).is_some() {
            bail!("Duplicate dashboard name: {}", entry.name);
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn with_entry(mut self, entry: DashboardEntry) -> anyhow::Result<Self> {
        self.insert(entry)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&DashboardEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DashboardEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = DashboardRegistry::builtin();
        assert_eq!(registry.len(), 1);

        let regional = registry.get("regional").unwrap();
        assert_eq!(regional.title, "Regional Performance");
        assert_eq!(regional.url, "YOUR_REGIONAL_DASHBOARD_URL");
        assert_eq!(regional.mount_id(), "viz-regional");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let registry = DashboardRegistry::new()
            .with_entry(DashboardEntry::new("sales", "Sales", "u1"))
            .unwrap()
            .with_entry(DashboardEntry::new("customers", "Customers", "u2"))
            .unwrap()
            .with_entry(DashboardEntry::new("all", "All", "u3"))
            .unwrap();

        let names: Vec<&str> = registry.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["sales", "customers", "all"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = DashboardRegistry::builtin();
        let err = registry
            .insert(DashboardEntry::new("regional", "Again", "other"))
            .unwrap_err();
        assert!(err.to_string().contains("regional"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("regional").unwrap().url, REGIONAL_DASHBOARD_URL);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "regional", "title": "Regional Performance", "url": "YOUR_REGIONAL_DASHBOARD_URL"},
            {"name": "products", "title": "Product Mix", "url": "https://example.com/views/Products"}
        ]"#;
        let registry = DashboardRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("products").unwrap().url,
            "https://example.com/views/Products"
        );
    }

    #[test]
    fn test_from_json_duplicate_rejected() {
        let json = r#"[
            {"name": "a", "title": "A", "url": "1"},
            {"name": "a", "title": "A2", "url": "2"}
        ]"#;
        assert!(DashboardRegistry::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = DashboardRegistry::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("registry"));
    }

    #[test]
    fn test_bad_config_falls_back_to_builtin() {
        let registry = DashboardRegistry::from_json_or_builtin(r#"[{"name": "a"}]"#);
        assert_eq!(registry, DashboardRegistry::builtin());

        let dup = r#"[
            {"name": "a", "title": "A", "url": "1"},
            {"name": "a", "title": "A", "url": "1"}
        ]"#;
        assert_eq!(
            DashboardRegistry::from_json_or_builtin(dup),
            DashboardRegistry::builtin()
        );
    }

    #[test]
    fn test_url_passed_through_unchanged() {
        let registry = DashboardRegistry::new()
            .with_entry(DashboardEntry::new("x", "X", "  not a url ?&"))
            .unwrap();
        assert_eq!(registry.get("x").unwrap().url, "  not a url ?&");
    }

    #[test]
    fn test_empty() {
        let registry = DashboardRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("regional").is_none());
    }
}
