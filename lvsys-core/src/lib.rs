//! Board-agnostic core of the LVGL binding shims
//!
//! This crate holds the semantics behind the C surface exported by
//! `lvsys-sys`, written as safe Rust so it can be tested on the host:
//!
//! - LVGL color layouts for every supported color depth
//! - C string scanning over NUL-terminated byte buffers
//! - The lv_drivers catalogue and build-flag driver selection
//! - Font asset declarations
//! - Configuration type definitions for `lv_conf.h` / `lv_drv_conf.h`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod drivers;
pub mod font;
pub mod string;

pub use color::{Color1, Color16, Color16Swap, Color32, Color8, ColorDepth, LvColor};
pub use drivers::{DisplayDriver, DriverSelection, InputDriver};
pub use font::FontDecl;
pub use string::StringError;
