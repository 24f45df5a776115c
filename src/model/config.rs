use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::view::{FilterSetting, SortSetting};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial filter and sort used when the TUI starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Default: todo
    #[serde(default = "default_filter")]
    pub filter: FilterSetting,
    /// Default: priority-desc
    #[serde(default = "default_sort")]
    pub sort: SortSetting,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            filter: default_filter(),
            sort: default_sort(),
        }
    }
}

fn default_filter() -> FilterSetting {
    FilterSetting::Todo
}

fn default_sort() -> SortSetting {
    SortSetting::PriorityDesc
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme color overrides, e.g. `high = "#FF0000"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
