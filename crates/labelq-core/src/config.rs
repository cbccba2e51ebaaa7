//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! on top of built-in defaults. Nested keys in env vars use `__`, e.g.
//! `APP_ACTIVE_LEARNING__STRATEGY=random`. Provides a helper to expand `~` and
//! `${VAR}` in user-supplied paths.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{RetrospectiveMode, StrategyKind};

/// The `[active_learning]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActiveLearningConfig {
    pub strategy: StrategyKind,
    pub hybrid_members: Vec<StrategyKind>,
    pub sample_size: usize,
    pub random_seed: u64,
    pub retrospective_mode: RetrospectiveMode,
}

impl Default for ActiveLearningConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Hybrid,
            hybrid_members: vec![StrategyKind::HardMining, StrategyKind::Retrospective],
            sample_size: 10,
            random_seed: 0,
            retrospective_mode: RetrospectiveMode::Confidence,
        }
    }
}

impl ActiveLearningConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(Error::InvalidConfig("active_learning.sample_size must be positive".to_string()));
        }
        if self.strategy == StrategyKind::Hybrid {
            if self.hybrid_members.len() < 2 {
                return Err(Error::InvalidConfig(format!(
                    "active_learning.hybrid_members needs at least two strategies, got {}",
                    self.hybrid_members.len()
                )));
            }
            if self.hybrid_members.contains(&StrategyKind::Hybrid) {
                return Err(Error::InvalidConfig(
                    "active_learning.hybrid_members cannot contain hybrid".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct Settings {
    active_learning: ActiveLearningConfig,
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load `config.toml` and the env-specific overlay from `dir`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(dir.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            other => tracing::warn!(env = other, "unknown RUST_ENV, using base config only"),
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate_for_env(&env_name)?;
        Ok(config)
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment: Figment::from(Serialized::defaults(Settings::default())).merge(figment) }
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    pub fn active_learning(&self) -> Result<ActiveLearningConfig> {
        let settings: Settings = self
            .figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        settings.active_learning.validate()?;
        Ok(settings.active_learning)
    }

    fn validate_for_env(&self, env: &str) -> Result<()> {
        let al = self.active_learning()?;
        match env {
            "prod" | "production" if al.strategy == StrategyKind::Random => {
                tracing::warn!("random sampling selected in production; batches ignore model predictions");
            }
            _ => {}
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
