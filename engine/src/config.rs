use serde::Deserialize;
use std::{env, path::Path, path::PathBuf, time::Duration};
use thiserror::Error;

use marquee_types::ui::UiOptions;

use crate::carousel::CarouselConfig;
use crate::counter::CounterConfig;

/// Auto-advance interval used by the landing page composition.
pub const PAGE_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(6000);

#[derive(Debug, Default, Deserialize)]
pub struct MarqueeConfig {
    pub app: Option<AppConfig>,
    pub carousel: Option<CarouselSection>,
    pub counter: Option<CounterSection>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and stars.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable slide motion.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Page content file (TOML) replacing the built-in copy.
    pub content: Option<PathBuf>,
}

/// ```toml
/// [carousel]
/// autoplay_interval_ms = 6000
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CarouselSection {
    /// Zero disables auto-advance.
    pub autoplay_interval_ms: Option<u64>,
}

/// ```toml
/// [counter]
/// duration_secs = 2.5
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CounterSection {
    pub duration_secs: Option<f64>,
}

impl MarqueeConfig {
    /// Load `~/.marquee/config.toml`. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options, with `MARQUEE_REDUCED_MOTION` able to force reduced motion.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|app| app.ascii_only),
            high_contrast: app.is_some_and(|app| app.high_contrast),
            reduced_motion: app.is_some_and(|app| app.reduced_motion) || reduced_motion_from_env(),
        }
    }

    #[must_use]
    pub fn carousel_config(&self) -> CarouselConfig {
        let autoplay_interval = self
            .carousel
            .as_ref()
            .and_then(|carousel| carousel.autoplay_interval_ms)
            .map_or(PAGE_AUTOPLAY_INTERVAL, Duration::from_millis);
        CarouselConfig {
            autoplay_interval,
            reduced_motion: self.ui_options().reduced_motion,
        }
    }

    #[must_use]
    pub fn counter_config(&self) -> CounterConfig {
        let Some(secs) = self
            .counter
            .as_ref()
            .and_then(|counter| counter.duration_secs)
        else {
            return CounterConfig::default();
        };

        match Duration::try_from_secs_f64(secs) {
            Ok(duration) if !duration.is_zero() => CounterConfig { duration },
            Ok(_) => {
                tracing::warn!("Ignoring counter duration {secs}: must be positive");
                CounterConfig::default()
            }
            Err(err) => {
                tracing::warn!("Ignoring counter duration {secs}: {err}");
                CounterConfig::default()
            }
        }
    }

    #[must_use]
    pub fn content_path(&self) -> Option<&Path> {
        self.app.as_ref().and_then(|app| app.content.as_deref())
    }
}

fn reduced_motion_from_env() -> bool {
    env::var("MARQUEE_REDUCED_MOTION")
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".marquee").join("config.toml"))
}
