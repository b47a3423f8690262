//! Object-navigation options per model
//!
//! Compile-time options come from the model descriptor. A page may override
//! them with a JSON document:
//!
//! ```json
//! { "models": { "Facility": { "show_all_tabs": true } } }
//! ```

use anyhow::Context;
use contracts::shared::metadata::{ModelDescriptor, ObjNavOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use web_sys::window;

/// Element id of the page-supplied override document
pub const PAGE_CONFIG_ELEMENT_ID: &str = "inner-nav-config";

/// Default configuration embedded in the bundle
const DEFAULT_NAV_CONFIG: &str = r#"
{
    "models": {}
}
"#;

/// Effective options for one model
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavOptions {
    pub show_all_tabs: bool,
    pub force_show_list: Vec<String>,
}

impl From<&ObjNavOptions> for NavOptions {
    fn from(options: &ObjNavOptions) -> Self {
        Self {
            show_all_tabs: options.show_all_tabs,
            force_show_list: options
                .force_show_list
                .iter()
                .map(|title| title.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NavOptionsOverride {
    pub show_all_tabs: Option<bool>,
    pub force_show_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub models: HashMap<String, NavOptionsOverride>,
}

impl NavConfig {
    /// Descriptor options with the configured override applied on top
    pub fn options_for(&self, model: &ModelDescriptor) -> NavOptions {
        let mut options = NavOptions::from(&model.obj_nav_options);
        if let Some(over) = self.models.get(model.model_name) {
            if let Some(show_all_tabs) = over.show_all_tabs {
                options.show_all_tabs = show_all_tabs;
            }
            if let Some(list) = &over.force_show_list {
                options.force_show_list = list.clone();
            }
        }
        options
    }
}

/// Parse the given document, or the embedded default when there is none
pub fn load_nav_config(raw: Option<&str>) -> anyhow::Result<NavConfig> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => {
            let config: NavConfig =
                serde_json::from_str(raw).context("invalid inner navigation config")?;
            log::info!("inner nav: loaded config for {} model(s)", config.models.len());
            Ok(config)
        }
        _ => {
            log::info!("inner nav: using default embedded configuration");
            serde_json::from_str(DEFAULT_NAV_CONFIG).context("invalid embedded config")
        }
    }
}

/// Read the override document from the page, falling back to defaults
pub fn load_page_config() -> NavConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(PAGE_CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match load_nav_config(raw.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("inner nav: {:#}, falling back to defaults", err);
            NavConfig::default()
        }
    }
}
