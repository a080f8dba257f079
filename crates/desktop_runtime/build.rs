use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CMS_URL_ENV: &str = "DESKTOP_CMS_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CmsSection {
    default_origin: String,
    graphql_path: String,
    local_hostnames: Vec<String>,
    lan_prefix: String,
    cms_port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DockSection {
    #[serde(default)]
    slug_aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopConfigFile {
    schema_version: u32,
    cms: CmsSection,
    #[serde(default)]
    dock: DockSection,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.config.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed={CMS_URL_ENV}");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let mut config: DesktopConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if config.schema_version != 1 {
        panic!(
            "config schema mismatch in {}: expected 1 found {}",
            path.display(),
            config.schema_version
        );
    }

    if let Ok(origin) = std::env::var(CMS_URL_ENV) {
        if !origin.trim().is_empty() {
            config.cms.default_origin = origin.trim().to_string();
        }
    }

    if !config.cms.default_origin.starts_with("http") {
        panic!(
            "cms.default_origin must be an http(s) URL, found `{}`",
            config.cms.default_origin
        );
    }
    if !config.cms.graphql_path.starts_with('/') {
        panic!(
            "cms.graphql_path must start with `/`, found `{}`",
            config.cms.graphql_path
        );
    }
    if config.cms.cms_port == 0 {
        panic!("cms.cms_port must be non-zero");
    }
    for (alias, target) in &config.dock.slug_aliases {
        if alias.is_empty() || target.is_empty() {
            panic!("dock.slug_aliases entries must be non-empty ({alias:?} -> {target:?})");
        }
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time generated desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
