//! `lvsys.toml` loading
//!
//! ```toml
//! [lvgl]
//! color_depth = 16
//! color_16_swap = false
//! mem_size_kib = 48
//!
//! [drivers]
//! monitor = true
//! mouse = true
//!
//! [fonts]
//! dir = "fonts"
//! ```
//!
//! Every `[lvgl]` key is optional and falls back to LVGL's default.
//! `[drivers]` keys are the short driver names (`monitor`, `fbdev`,
//! `bsd_evdev`, ...). A relative font directory is resolved against the
//! directory holding the config file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use lvsys_core::config::LvConfig;
use lvsys_core::drivers::{Driver, DriverSelection};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    lvgl: LvConfig,
    drivers: BTreeMap<String, bool>,
    fonts: Option<RawFonts>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFonts {
    dir: PathBuf,
}

/// Validated shim configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShimConfig {
    /// `lv_conf.h` settings
    pub lvgl: LvConfig,
    /// Enabled lv_drivers backends
    pub drivers: DriverSelection,
    /// Directory with extra font sources, if configured
    pub fonts_dir: Option<PathBuf>,
}

impl ShimConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(input)?;
        raw.lvgl.validate()?;

        let mut drivers = DriverSelection::new();
        for (name, enabled) in &raw.drivers {
            let driver =
                Driver::from_name(name).ok_or_else(|| ConfError::UnknownDriver(name.clone()))?;
            if *enabled {
                drivers.enable(driver);
            }
        }

        Ok(Self {
            lvgl: raw.lvgl,
            drivers,
            fonts_dir: raw.fonts.map(|f| f.dir),
        })
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|e| ConfError::io(path, e))?;
        let mut config = Self::from_toml_str(&input)?;

        if let (Some(dir), Some(base)) = (&config.fonts_dir, path.parent()) {
            if dir.is_relative() {
                config.fonts_dir = Some(base.join(dir));
            }
        }

        debug!(
            path = %path.display(),
            depth = config.lvgl.color_depth.bits(),
            drivers = config.drivers.headers().len(),
            "loaded config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lvsys_core::color::ColorDepth;
    use lvsys_core::config::{ConfigError, LogLevel};
    use lvsys_core::drivers::{DisplayDriver, InputDriver};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ShimConfig::from_toml_str("").unwrap();
        assert_eq!(config.lvgl, LvConfig::default());
        assert!(config.drivers.is_empty());
        assert!(config.fonts_dir.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = ShimConfig::from_toml_str(
            r#"
            [lvgl]
            color_depth = 16
            color_16_swap = true
            mem_size_kib = 64
            use_log = true
            log_level = "info"

            [drivers]
            monitor = true
            mouse = true
            keyboard = false

            [fonts]
            dir = "assets/fonts"
            "#,
        )
        .unwrap();

        assert_eq!(config.lvgl.color_depth, ColorDepth::D16);
        assert!(config.lvgl.color_16_swap);
        assert_eq!(config.lvgl.mem_size_kib, 64);
        assert_eq!(config.lvgl.log_level, LogLevel::Info);
        assert!(config.drivers.is_enabled(DisplayDriver::Monitor));
        assert!(config.drivers.is_enabled(InputDriver::Mouse));
        assert!(!config.drivers.is_enabled(InputDriver::Keyboard));
        assert_eq!(config.fonts_dir, Some(PathBuf::from("assets/fonts")));
    }

    #[test]
    fn test_rejects_bad_depth() {
        let err = ShimConfig::from_toml_str("[lvgl]\ncolor_depth = 24\n").unwrap_err();
        assert!(matches!(err, ConfError::Toml(_)));
    }

    #[test]
    fn test_rejects_invalid_combination() {
        let err =
            ShimConfig::from_toml_str("[lvgl]\ncolor_depth = 32\ncolor_16_swap = true\n")
                .unwrap_err();
        assert!(matches!(
            err,
            ConfError::Invalid(ConfigError::SwapRequiresDepth16)
        ));
    }

    #[test]
    fn test_rejects_unknown_driver() {
        let err = ShimConfig::from_toml_str("[drivers]\nsdl = true\n").unwrap_err();
        assert!(matches!(err, ConfError::UnknownDriver(name) if name == "sdl"));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = ShimConfig::from_toml_str("[lvgl]\ncolour_depth = 16\n").unwrap_err();
        assert!(matches!(err, ConfError::Toml(_)));
    }

    #[test]
    fn test_load_resolves_fonts_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lvsys.toml");
        fs::write(&path, "[fonts]\ndir = \"fonts\"\n").unwrap();

        let config = ShimConfig::load(&path).unwrap();
        assert_eq!(config.fonts_dir, Some(dir.path().join("fonts")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ShimConfig::load("/nonexistent/lvsys.toml").unwrap_err();
        assert!(matches!(err, ConfError::Io { .. }));
    }
}
