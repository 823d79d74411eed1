//! Service configuration.
//!
//! A [`ServiceConfig`] selects the store backend and the paging limits. Every
//! field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! backend = "snapshot"
//!
//! [paging]
//! default_page_size = 25
//! max_page_size = 200
//! ```
//!
//! # Loading
//!
//! ```
//! use tessera::{ServiceConfig, StoreBackend};
//!
//! let config = ServiceConfig::from_toml_str("backend = \"snapshot\"").unwrap();
//! assert_eq!(config.backend, StoreBackend::Snapshot);
//! assert_eq!(config.paging.max_page_size, 500);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tessera_core::logging::targets;
use tessera_core::page::PageLimits;
use tessera_core::store::StoreBackend;

/// Errors produced while loading or writing a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML or does not match the schema.
    #[error("failed to parse config{}: {source}", in_file(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The paging limits are inconsistent.
    #[error(
        "invalid paging limits: default_page_size = {default_page_size}, max_page_size = {max_page_size} (need 1 <= default <= max)"
    )]
    InvalidPaging {
        default_page_size: usize,
        max_page_size: usize,
    },
}

fn in_file(path: Option<&Path>) -> String {
    path.map(|p| format!(" file {}", p.display()))
        .unwrap_or_default()
}

/// Configuration of a [`WidgetService`](crate::WidgetService).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Which store implementation backs the service.
    pub backend: StoreBackend,
    /// Bounds applied to paged listings.
    pub paging: PageLimits,
}

impl ServiceConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        config.validate()?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            backend = %config.backend,
            "loaded service config"
        );
        Ok(config)
    }

    /// Render this configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that the paging limits admit at least one valid page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let PageLimits {
            default_page_size,
            max_page_size,
        } = self.paging;
        if max_page_size < 1 || default_page_size < 1 || default_page_size > max_page_size {
            tracing::warn!(target: targets::CONFIG, default_page_size, max_page_size, "rejected paging limits");
            return Err(ConfigError::InvalidPaging {
                default_page_size,
                max_page_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.backend, StoreBackend::Locked);
    }

    #[test]
    fn test_partial_paging_keeps_other_default() {
        let config = ServiceConfig::from_toml_str("[paging]\ndefault_page_size = 3\n").unwrap();
        assert_eq!(config.paging.default_page_size, 3);
        assert_eq!(config.paging.max_page_size, 500);
    }

    #[test]
    fn test_rejects_default_above_max() {
        let err = ServiceConfig::from_toml_str(
            "[paging]\ndefault_page_size = 50\nmax_page_size = 20\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPaging {
                default_page_size: 50,
                max_page_size: 20
            }
        ));
    }

    #[test]
    fn test_rejects_zero_sizes() {
        assert!(ServiceConfig::from_toml_str("[paging]\nmax_page_size = 0\n").is_err());
        assert!(ServiceConfig::from_toml_str("[paging]\ndefault_page_size = 0\n").is_err());
    }

    #[test]
    fn test_unknown_backend_is_parse_error() {
        let err = ServiceConfig::from_toml_str("backend = \"sharded\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ServiceConfig {
            backend: StoreBackend::Snapshot,
            paging: PageLimits {
                default_page_size: 7,
                max_page_size: 70,
            },
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("backend = \"snapshot\""));
        assert_eq!(ServiceConfig::from_toml_str(&text).unwrap(), config);
    }
}
