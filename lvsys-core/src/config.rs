//! Configuration type definitions
//!
//! These types describe the subset of `lv_conf.h` the shims depend on.
//! Host tooling loads them from TOML and renders the C headers; the
//! `no_std` crates only read them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::ColorDepth;

/// Rounding offset used when mixing colors (`LV_COLOR_MIX_ROUND_OFS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum MixRoundOffset {
    R0,
    R64,
    #[default]
    R128,
    R192,
    R254,
}

impl MixRoundOffset {
    pub const fn value(self) -> u8 {
        match self {
            MixRoundOffset::R0 => 0,
            MixRoundOffset::R64 => 64,
            MixRoundOffset::R128 => 128,
            MixRoundOffset::R192 => 192,
            MixRoundOffset::R254 => 254,
        }
    }
}

impl TryFrom<u8> for MixRoundOffset {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MixRoundOffset::R0),
            64 => Ok(MixRoundOffset::R64),
            128 => Ok(MixRoundOffset::R128),
            192 => Ok(MixRoundOffset::R192),
            254 => Ok(MixRoundOffset::R254),
            _ => Err(ConfigError::InvalidMixRoundOffset),
        }
    }
}

impl From<MixRoundOffset> for u8 {
    fn from(ofs: MixRoundOffset) -> Self {
        ofs.value()
    }
}

/// LVGL log level (`LV_LOG_LEVEL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    Trace,
    Info,
    #[default]
    Warn,
    Error,
    User,
    None,
}

impl LogLevel {
    /// Name of the `LV_LOG_LEVEL_*` constant
    pub const fn c_name(self) -> &'static str {
        match self {
            LogLevel::Trace => "LV_LOG_LEVEL_TRACE",
            LogLevel::Info => "LV_LOG_LEVEL_INFO",
            LogLevel::Warn => "LV_LOG_LEVEL_WARN",
            LogLevel::Error => "LV_LOG_LEVEL_ERROR",
            LogLevel::User => "LV_LOG_LEVEL_USER",
            LogLevel::None => "LV_LOG_LEVEL_NONE",
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `color_16_swap` set with a depth other than 16
    SwapRequiresDepth16,
    /// Mix rounding offset not one of 0, 64, 128, 192, 254
    InvalidMixRoundOffset,
    /// Chroma key does not fit in 0xRRGGBB
    InvalidChromaKey,
    /// Memory pool of zero bytes
    ZeroMemory,
    /// Refresh or read period of zero milliseconds
    ZeroPeriod,
    /// DPI of zero
    ZeroDpi,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ConfigError::SwapRequiresDepth16 => "color_16_swap requires color_depth = 16",
            ConfigError::InvalidMixRoundOffset => {
                "color_mix_round_ofs must be 0, 64, 128, 192 or 254"
            }
            ConfigError::InvalidChromaKey => "color_chroma_hex must be at most 0xFFFFFF",
            ConfigError::ZeroMemory => "mem_size_kib must be non-zero",
            ConfigError::ZeroPeriod => "refresh and read periods must be non-zero",
            ConfigError::ZeroDpi => "dpi must be non-zero",
        };
        f.write_str(msg)
    }
}

/// LVGL configuration (`lv_conf.h`)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LvConfig {
    /// Color depth
    pub color_depth: ColorDepth,
    /// Swap the bytes of 16-bit colors (8-bit SPI displays)
    pub color_16_swap: bool,
    /// Allow a transparent screen background
    pub color_screen_transp: bool,
    /// Rounding offset for color mixing
    pub color_mix_round_ofs: MixRoundOffset,
    /// Chroma key color as 0xRRGGBB
    pub color_chroma_hex: u32,
    /// Size of LVGL's internal memory pool in KiB
    pub mem_size_kib: u32,
    /// Default display refresh period (ms)
    pub disp_def_refr_period: u32,
    /// Input device read period (ms)
    pub indev_def_read_period: u32,
    /// Default dots per inch
    pub dpi_def: u32,
    /// Enable LVGL's logging module
    pub use_log: bool,
    /// Minimum level logged
    pub log_level: LogLevel,
    /// Log with `printf` instead of a registered callback
    pub log_printf: bool,
    /// Target is big-endian
    pub big_endian_system: bool,
}

impl Default for LvConfig {
    fn default() -> Self {
        Self {
            color_depth: ColorDepth::D16,
            color_16_swap: false,
            color_screen_transp: false,
            color_mix_round_ofs: MixRoundOffset::R128,
            color_chroma_hex: 0x00FF00,
            mem_size_kib: 48,
            disp_def_refr_period: 30,
            indev_def_read_period: 30,
            dpi_def: 130,
            use_log: false,
            log_level: LogLevel::Warn,
            log_printf: false,
            big_endian_system: false,
        }
    }
}

impl LvConfig {
    /// Create a configuration with LVGL's defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Check field combinations LVGL would reject or misbehave on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.color_16_swap && self.color_depth != ColorDepth::D16 {
            return Err(ConfigError::SwapRequiresDepth16);
        }
        if self.color_chroma_hex > 0xFF_FFFF {
            return Err(ConfigError::InvalidChromaKey);
        }
        if self.mem_size_kib == 0 {
            return Err(ConfigError::ZeroMemory);
        }
        if self.disp_def_refr_period == 0 || self.indev_def_read_period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.dpi_def == 0 {
            return Err(ConfigError::ZeroDpi);
        }
        Ok(())
    }

    /// Memory pool size in bytes (`LV_MEM_SIZE`)
    pub fn mem_size_bytes(&self) -> u64 {
        u64::from(self.mem_size_kib) * 1024
    }
}
