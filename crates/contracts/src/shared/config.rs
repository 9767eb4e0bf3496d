use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::list_view::{
    ListRecord, ListViewController, SelectionPolicy, SortDirection, SortState, DEFAULT_PAGE_SIZE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default = "ListConfig::orders_default")]
    pub orders: ListConfig,
    #[serde(default = "ListConfig::customers_default")]
    pub customers: ListConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// What a newly applied filter does to selected rows it hides
    #[serde(default)]
    pub on_filter_change: SelectionPolicy,
}

/// Per-list settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    /// Field name; absent = store order
    #[serde(default)]
    pub default_sort: Option<String>,
    #[serde(default)]
    pub default_direction: SortDirection,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 25, 50]
}

impl ListConfig {
    fn orders_default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: default_page_size_options(),
            default_sort: Some("date".to_string()),
            default_direction: SortDirection::Descending,
        }
    }

    fn customers_default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: default_page_size_options(),
            default_sort: None,
            default_direction: SortDirection::Ascending,
        }
    }

    pub fn initial_sort(&self) -> SortState {
        match &self.default_sort {
            Some(field) => SortState::by(field.clone(), self.default_direction),
            None => SortState::default(),
        }
    }

    /// Fresh controller for a list view mounting with these settings.
    pub fn controller<R: ListRecord>(
        &self,
        records: Vec<R>,
        policy: SelectionPolicy,
    ) -> ListViewController<R> {
        ListViewController::new(records, self.page_size)
            .with_sort(self.initial_sort())
            .with_selection_policy(policy)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            selection: SelectionConfig::default(),
            orders: ListConfig::orders_default(),
            customers: ListConfig::customers_default(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[selection]
on_filter_change = "retain"

[orders]
page_size = 10
page_size_options = [10, 25, 50]
default_sort = "date"
default_direction = "descending"

[customers]
page_size = 10
page_size_options = [10, 25, 50]
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig =
        toml::from_str(contents).context("invalid dashboard configuration")?;
    if config.orders.page_size == 0 || config.customers.page_size == 0 {
        anyhow::bail!("page_size must be greater than zero");
    }
    Ok(config)
}

/// Embedded default configuration
pub fn default_config() -> anyhow::Result<DashboardConfig> {
    parse_config(DEFAULT_CONFIG).context("embedded default configuration")
}

/// Parses `contents` if present, falling back to the embedded default.
pub fn load_config(contents: Option<&str>) -> DashboardConfig {
    if let Some(contents) = contents {
        match parse_config(contents) {
            Ok(config) => {
                log::info!("using fetched dashboard configuration");
                return config;
            }
            Err(e) => log::warn!("{:#}; falling back to defaults", e),
        }
    }

    log::info!("Using default embedded configuration");
    default_config().unwrap_or_else(|e| {
        log::error!("{:#}", e);
        DashboardConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.selection.on_filter_change, SelectionPolicy::Retain);
        assert_eq!(
            config.orders.initial_sort(),
            SortState::by("date", SortDirection::Descending)
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config(
            r#"
            [selection]
            on_filter_change = "drop_hidden"

            [customers]
            page_size = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.selection.on_filter_change, SelectionPolicy::DropHidden);
        assert_eq!(config.customers.page_size, 25);
        assert_eq!(config.customers.page_size_options, vec![10, 25, 50]);
        assert_eq!(config.orders.default_sort.as_deref(), Some("date"));
    }

    #[test]
    fn test_bad_config_falls_back() {
        assert!(parse_config("[orders]\npage_size = 0").is_err());
        assert!(parse_config("not toml at all [").is_err());
        assert_eq!(load_config(Some("[orders]\npage_size = -1")), DashboardConfig::default());
        assert_eq!(load_config(None), DashboardConfig::default());
    }
}
