//! Host tooling for the LVGL shims
//!
//! Loads `lvsys.toml`, validates it and renders the C headers LVGL and
//! lv_drivers are built against:
//!
//! - `lv_conf.h` from the `[lvgl]` table
//! - `lv_drv_conf.h` from the `[drivers]` table
//! - `lvgl_drv.h`, the umbrella header for enabled drivers
//! - `lvsys_fonts.h` when a font directory is configured
//!
//! It also locates an existing config directory the way a build script
//! does (see [`paths`]).

pub mod config;
pub mod error;
pub mod fonts;
pub mod logger;
pub mod paths;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

use lvsys_core::font::FontDecl;
use tracing::info;

pub use config::ShimConfig;
pub use error::{ConfError, Result};
pub use fonts::{FontAssets, FontHeaderFile};
pub use paths::{resolve_config_dir, ConfigDir, ConfigSource};

/// Font header file name
pub const FONTS_H: &str = "lvsys_fonts.h";

/// Umbrella driver header file name
pub const LVGL_DRV_H: &str = "lvgl_drv.h";

/// Files written by [`generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub lv_conf: PathBuf,
    pub lv_drv_conf: PathBuf,
    pub drv_umbrella: PathBuf,
    pub fonts: Option<PathBuf>,
    /// Font sources to compile alongside LVGL
    pub font_sources: Vec<PathBuf>,
}

fn write(path: PathBuf, contents: String) -> Result<PathBuf> {
    fs::write(&path, contents).map_err(|e| ConfError::io(&path, e))?;
    Ok(path)
}

/// Render every header for `config` into `out_dir`
///
/// `out_dir` is created if missing. The result is a directory that
/// satisfies [`resolve_config_dir`] with drivers required.
pub fn generate(config: &ShimConfig, out_dir: &Path) -> Result<Generated> {
    fs::create_dir_all(out_dir).map_err(|e| ConfError::io(out_dir, e))?;

    let lv_conf = write(
        out_dir.join(paths::LV_CONF_H),
        render::render_lv_conf(&config.lvgl),
    )?;
    let lv_drv_conf = write(
        out_dir.join(paths::LV_DRV_CONF_H),
        render::render_drv_conf(&config.drivers),
    )?;
    let drv_umbrella = write(out_dir.join(LVGL_DRV_H), render::render_drv_umbrella())?;

    let mut fonts = None;
    let mut font_sources = Vec::new();
    if let Some(dir) = &config.fonts_dir {
        let assets = fonts::scan(dir)?;
        let decls: Vec<FontDecl> = assets.decls().cloned().collect();
        font_sources = assets.sources;
        fonts = Some(write(
            out_dir.join(FONTS_H),
            render::render_font_header(&decls),
        )?);
        info!(dir = %dir.display(), fonts = decls.len(), "font headers collected");
    }

    info!(
        out = %out_dir.display(),
        depth = config.lvgl.color_depth.bits(),
        drivers = ?config.drivers.headers().as_slice(),
        "headers generated"
    );

    Ok(Generated {
        lv_conf,
        lv_drv_conf,
        drv_umbrella,
        fonts,
        font_sources,
    })
}
