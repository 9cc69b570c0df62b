use indexmap::IndexMap;
use serde::Deserialize;

/// Grouping key used for tools that declare no kind.
pub const DEFAULT_FALLBACK_KIND: &str = "other";

/// Catalog configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub grouping: GroupingConfig,
}

/// Grouping-related configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupingConfig {
    /// Group that untyped tools fall into.
    pub fallback_kind: String,
    /// Kind key to human-readable group name. Kinds without an entry use the
    /// key itself as display name.
    pub display_names: IndexMap<String, String>,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        let display_names = [
            ("platform", "Platform"),
            ("tool", "Tool"),
            ("system", "System"),
            ("other", "Other"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            fallback_kind: DEFAULT_FALLBACK_KIND.to_string(),
            display_names,
        }
    }
}

impl GroupingConfig {
    /// Display name for a grouping key.
    pub fn display_name(&self, kind: &str) -> String {
        self.display_names
            .get(kind)
            .cloned()
            .unwrap_or_else(|| kind.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<CatalogConfig>(json!({
            "grouping": {
                "fallbackKind": "misc"
            }
        }))
        .unwrap();

        assert_eq!(result.grouping.fallback_kind, "misc");
        assert_eq!(
            result.grouping.display_names,
            GroupingConfig::default().display_names
        );
    }

    #[test]
    fn config_from_empty_object_is_default() {
        let result = serde_json::from_value::<CatalogConfig>(json!({})).unwrap();
        assert_eq!(result, CatalogConfig::default());
    }

    #[test]
    fn display_name_falls_back_to_the_kind_itself() {
        let grouping = GroupingConfig::default();
        assert_eq!(grouping.display_name("tool"), "Tool");
        assert_eq!(grouping.display_name("internal"), "internal");
    }
}
