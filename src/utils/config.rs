use crate::utils::pager::{Pager, DEFAULT_PAGE_SIZE, MAXIMUM_PAGE_SIZE};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("page size {requested} exceeds maximum of {maximum}")]
    PageSizeExceeded { requested: u32, maximum: u32 },

    #[error("maximum page size {maximum} must be within 1..={ceiling}")]
    InvalidMaximum { maximum: u32, ceiling: u32 },

    #[error("default page size {default} must be within 1..={maximum}")]
    InvalidDefault { default: u32, maximum: u32 },
}

/// Paging limits shared by every list endpoint. Lives in router state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagingConfig {
    pub default_page_size: u32,
    pub maximum_page_size: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            maximum_page_size: MAXIMUM_PAGE_SIZE,
        }
    }
}

impl PagingConfig {
    pub fn new(default_page_size: u32, maximum_page_size: u32) -> Result<Self, ConfigError> {
        let config = Self {
            default_page_size,
            maximum_page_size,
        };
        config.check_limits()?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, anyhow::Error> {
        let config: Self = toml::from_str(raw)?;
        config.check_limits()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read paging config {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("parse paging config {}", path.display()))
    }

    pub fn default_pager(&self) -> Pager {
        Pager::new(1, self.default_page_size)
    }

    pub fn check(&self, pager: &Pager) -> Result<(), ConfigError> {
        if pager.page_size > self.maximum_page_size {
            return Err(ConfigError::PageSizeExceeded {
                requested: pager.page_size,
                maximum: self.maximum_page_size,
            });
        }
        Ok(())
    }

    // the maximum can only tighten the range `Pager` validates against
    fn check_limits(&self) -> Result<(), ConfigError> {
        if !(1..=MAXIMUM_PAGE_SIZE).contains(&self.maximum_page_size) {
            return Err(ConfigError::InvalidMaximum {
                maximum: self.maximum_page_size,
                ceiling: MAXIMUM_PAGE_SIZE,
            });
        }
        if !(1..=self.maximum_page_size).contains(&self.default_page_size) {
            return Err(ConfigError::InvalidDefault {
                default: self.default_page_size,
                maximum: self.maximum_page_size,
            });
        }
        Ok(())
    }
}
