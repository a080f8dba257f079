//! CMS origin selection and asset URL resolution.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Where the CMS lives relative to the page host.
pub struct CmsEndpointConfig {
    /// Origin used when the page is served from a public host.
    pub default_origin: String,
    /// Path of the GraphQL endpoint below the origin.
    pub graphql_path: String,
    /// Hostnames that mean "CMS runs on this machine".
    pub local_hostnames: Vec<String>,
    /// Private-network prefix whose hosts run their own CMS.
    pub lan_prefix: String,
    /// CMS port for local and LAN hosts.
    pub cms_port: u16,
}

impl Default for CmsEndpointConfig {
    fn default() -> Self {
        Self {
            default_origin: "http://localhost:1337".to_string(),
            graphql_path: "/graphql".to_string(),
            local_hostnames: vec!["localhost".to_string(), "127.0.0.1".to_string()],
            lan_prefix: "192.168.".to_string(),
            cms_port: 1337,
        }
    }
}

impl CmsEndpointConfig {
    /// Picks the CMS origin for a page served from `hostname`.
    pub fn resolve_origin(&self, hostname: &str) -> String {
        if self.local_hostnames.iter().any(|local| local == hostname) {
            return format!("http://localhost:{}", self.cms_port);
        }
        if self.is_lan_host(hostname) {
            return format!("http://{hostname}:{}", self.cms_port);
        }
        self.default_origin.trim_end_matches('/').to_string()
    }

    /// Full GraphQL endpoint URL for a page served from `hostname`.
    pub fn graphql_endpoint(&self, hostname: &str) -> String {
        format!("{}{}", self.resolve_origin(hostname), self.graphql_path)
    }

    fn is_lan_host(&self, hostname: &str) -> bool {
        let Some(rest) = hostname.strip_prefix(self.lan_prefix.as_str()) else {
            return false;
        };
        let octets: Vec<&str> = rest.split('.').collect();
        octets.len() == 2
            && octets
                .iter()
                .all(|octet| !octet.is_empty() && octet.chars().all(|c| c.is_ascii_digit()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Origin prepended to relative CMS upload paths.
pub struct AssetOrigin(String);

impl AssetOrigin {
    /// Creates an origin, dropping any trailing slash.
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into().trim_end_matches('/').to_string())
    }

    /// The origin text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves `url`: absolute `http(s)` URLs pass through, anything else is origin-relative.
    pub fn resolve(&self, url: &str) -> String {
        if url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}{}", self.0, url)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn local_hosts_use_local_cms_port() {
        let config = CmsEndpointConfig::default();
        assert_eq!(config.resolve_origin("localhost"), "http://localhost:1337");
        assert_eq!(config.resolve_origin("127.0.0.1"), "http://localhost:1337");
        assert_eq!(
            config.graphql_endpoint("localhost"),
            "http://localhost:1337/graphql"
        );
    }

    #[test]
    fn lan_hosts_keep_their_address() {
        let config = CmsEndpointConfig::default();
        assert_eq!(
            config.resolve_origin("192.168.0.231"),
            "http://192.168.0.231:1337"
        );
        assert_eq!(
            config.resolve_origin("192.168.0.evil.com"),
            "http://localhost:1337"
        );
    }

    #[test]
    fn public_hosts_use_default_origin() {
        let config = CmsEndpointConfig {
            default_origin: "https://cms.example.com/".to_string(),
            ..CmsEndpointConfig::default()
        };
        assert_eq!(
            config.graphql_endpoint("www.example.com"),
            "https://cms.example.com/graphql"
        );
    }

    #[test]
    fn asset_origin_passes_absolute_urls_through() {
        let origin = AssetOrigin::new("https://cms.example.com/");
        assert_eq!(
            origin.resolve("/uploads/a.png"),
            "https://cms.example.com/uploads/a.png"
        );
        assert_eq!(
            origin.resolve("https://cdn.example.com/b.png"),
            "https://cdn.example.com/b.png"
        );
        assert_eq!(origin.resolve(""), "https://cms.example.com");
    }
}
