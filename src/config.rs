//! Site configuration.
//!
//! Loaded from an optional `site.toml`. Every key has a default, so the
//! file only needs the values that differ. A missing file means all
//! defaults. Command-line flags override whatever the file says.
//!
//! ```toml
//! [export]
//! output_dir = "docs"      # Where --github-pages writes the static tree
//! assets_dir = "assets"    # Copied to <output_dir>/assets and served at /assets
//! base_url = "/"           # Prefix of every exported link; must start and end with "/"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 4747
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub export: ExportConfig,
    pub server: ServerConfig,
}

/// Static export settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub assets_dir: PathBuf,
    /// Prefix the exported site is served under, e.g. `/model-renderer/`
    /// for a project page. Page links, asset links and redirect stubs are
    /// all written under it. The live server always serves from `/`.
    pub base_url: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs"),
            assets_dir: PathBuf::from("assets"),
            base_url: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4747,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be non-zero".into(),
            ));
        }
        let base_url = &self.export.base_url;
        if !base_url.starts_with('/') || !base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "export.base_url must start and end with '/', got {base_url:?}"
            )));
        }
        Ok(())
    }
}

/// Load and validate the config at `path`, falling back to defaults when
/// the file does not exist.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.export.output_dir, PathBuf::from("docs"));
        assert_eq!(config.export.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.export.base_url, "/");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4747);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[server]
port = 8080
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        let toml = r#"
[export]
output = "site"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn zero_port_is_invalid() {
        let mut config = SiteConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn base_url_needs_both_slashes() {
        let mut config = SiteConfig::default();
        for bad in ["", "model-renderer/", "/model-renderer"] {
            config.export.base_url = bad.to_string();
            assert!(config.validate().is_err(), "{bad:?} accepted");
        }
        config.export.base_url = "/model-renderer/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("site.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(
            &path,
            r#"
[export]
output_dir = "public"
base_url = "/model-renderer/"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("public"));
        assert_eq!(config.export.base_url, "/model-renderer/");
        assert_eq!(config.export.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn load_config_validates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(&path, "[server]\nport = 0\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_config_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }
}
