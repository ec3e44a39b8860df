use fieldcheck_core::{FieldKind, FormValidator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_DIR: &str = "fieldcheck";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Form field name to field kind aliases.
///
/// Field names that are already kind names (`email`, `tg`, ...) need no entry.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FormConfig {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldKind>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Config {
    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR)
            .join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file {}: {e}", path.display())
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", path.display())
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path`, or the default location when `None`.
    ///
    /// A missing file at the default location yields the default config; an
    /// explicitly requested file must exist.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        let default_path = Self::default_path()?;
        if default_path.exists() {
            Self::load_from(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR);

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, Self::template())?;
        info!("Created config file at {}", config_path.display());
        Ok(config_path)
    }

    /// Default config file contents.
    #[must_use]
    pub const fn template() -> &'static str {
        r#"{
  "form": {
    "fields": {
      "full_name": "name",
      "study_group": "group",
      "telegram": "tg",
      "contact_email": "email",
      "contact_phone": "phone"
    }
  },
  "logging": {
    "level": "info"
  }
}
"#
    }

    #[must_use]
    pub fn form_validator(&self) -> FormValidator {
        FormValidator::new().with_fields(
            self.form
                .fields
                .iter()
                .map(|(field, kind)| (field.clone(), *kind)),
        )
    }
}
