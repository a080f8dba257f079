//! Build-time desktop configuration (`desktop.config.toml`, validated by `build.rs`).
//!
//! `DESKTOP_CMS_URL` set at build time replaces `cms.default_origin`.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use desktop_host::CmsEndpointConfig;
use leptos::logging;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
/// Dock presentation settings.
pub struct DockConfig {
    /// Pinned slug aliases, e.g. `fileBrowser` -> `openFolder`.
    #[serde(default)]
    pub slug_aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Resolved desktop configuration.
pub struct DesktopConfig {
    /// Config file schema version.
    pub schema_version: u32,
    /// CMS endpoint selection.
    pub cms: CmsEndpointConfig,
    /// Dock settings.
    #[serde(default)]
    pub dock: DockConfig,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            cms: CmsEndpointConfig::default(),
            dock: DockConfig {
                slug_aliases: BTreeMap::from([(
                    desktop_host::FILE_BROWSER_ALIAS.to_string(),
                    desktop_host::FINDER_SLUG.to_string(),
                )]),
            },
        }
    }
}

/// Parses a generated config payload.
pub fn parse_desktop_config(raw: &str) -> Result<DesktopConfig, String> {
    serde_json::from_str(raw).map_err(|err| format!("invalid desktop config: {err}"))
}

/// Returns the configuration compiled into this build.
pub fn desktop_config() -> &'static DesktopConfig {
    static CONFIG: OnceLock<DesktopConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        parse_desktop_config(DESKTOP_CONFIG_JSON).unwrap_or_else(|err| {
            logging::warn!("{err}; falling back to built-in defaults");
            DesktopConfig::default()
        })
    })
}
