use serde::{Deserialize, Serialize};

use crate::config::consts::limits;

/// pagefold.toml schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory the template source resolves names against
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Appended to view names that carry no extension
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            suffix: default_suffix(),
        }
    }
}

fn default_dir() -> String {
    "templates".to_string()
}

fn default_suffix() -> String {
    ".html".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Maximum parent-chain length before composition fails
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    limits::DEFAULT_MAX_DEPTH
}

impl Config {
    /// Read pagefold.toml
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| crate::error::PagefoldError::ConfigParseError(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::error::PagefoldError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write pagefold.toml
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::PagefoldError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(crate::error::PagefoldError::IoError)?;

        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.layout.max_depth == 0 {
            return Err(crate::error::PagefoldError::ConfigInvalidValue {
                field: "layout.max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.templates.dir, "templates");
        assert_eq!(config.templates.suffix, ".html");
        assert_eq!(config.layout.max_depth, limits::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[templates]
dir = "site/views"
suffix = ".ftl"

[layout]
max_depth = 4
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.templates.dir, "site/views");
        assert_eq!(config.templates.suffix, ".ftl");
        assert_eq!(config.layout.max_depth, 4);
    }

    #[test]
    fn test_reject_zero_max_depth() {
        let config = Config {
            layout: LayoutConfig { max_depth: 0 },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
