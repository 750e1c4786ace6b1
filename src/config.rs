//! Site configuration from environment variables.
//!
//! | variable         | default   |
//! |------------------|-----------|
//! | `BIND_ADDR`      | `0.0.0.0` |
//! | `PORT`           | `3000`    |
//! | `SITE_BASE_PATH` | (empty)   |
//! | `STATIC_DIR`     | `static`  |
//! | `RELATED_SEED`   | (none)    |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Normalized prefix: empty, or "/segment" without trailing slash.
    pub base_path: String,
    pub static_dir: PathBuf,
    /// Seed for the related-topics sampler; entropy when unset.
    pub related_seed: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            base_path: String::new(),
            static_dir: PathBuf::from("static"),
            related_seed: None,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Unset or empty variables keep their
    /// defaults; set but unparsable ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("BIND_ADDR") {
            config.bind_addr = parse("BIND_ADDR", &value)?;
        }
        if let Some(value) = get("PORT") {
            config.port = parse("PORT", &value)?;
        }
        if let Some(value) = get("SITE_BASE_PATH") {
            config.base_path = normalize_base_path(&value);
        }
        if let Some(value) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(value);
        }
        if let Some(value) = get("RELATED_SEED") {
            config.related_seed = Some(parse("RELATED_SEED", &value)?);
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Route path under the base path (`path` starts with '/').
    pub fn path(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }

    /// Where failed lookups land.
    pub fn home_href(&self) -> String {
        self.path("/")
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

/// "responsabilidade-social/" -> "/responsabilidade-social", "/" -> "".
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.base_path, "");
        assert_eq!(config.home_href(), "/");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert!(config.related_seed.is_none());
    }

    #[test]
    fn reads_all_variables() {
        let config = from_pairs(&[
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "8080"),
            ("SITE_BASE_PATH", "responsabilidade-social/"),
            ("STATIC_DIR", "/srv/static"),
            ("RELATED_SEED", "42"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.base_path, "/responsabilidade-social");
        assert_eq!(config.home_href(), "/responsabilidade-social/");
        assert_eq!(config.path("/health"), "/responsabilidade-social/health");
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.related_seed, Some(42));
    }

    #[test]
    fn rejects_bad_port() {
        let err = from_pairs(&[("PORT", "http")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid PORT: 'http'");
        assert!(from_pairs(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn empty_values_keep_defaults() {
        let config = from_pairs(&[("PORT", ""), ("SITE_BASE_PATH", "  ")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.base_path, "");
    }

    #[test]
    fn base_path_normalization() {
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("site"), "/site");
        assert_eq!(normalize_base_path("/site/"), "/site");
        assert_eq!(normalize_base_path("/a/b/"), "/a/b");
    }
}
