//! C ABI surface of the LVGL binding shims
//!
//! LVGL and lv_drivers are C code. A few of the helpers they expect are
//! macros or `static inline` functions, which bindings cannot call, so
//! this crate exports real functions under the names the bindings use:
//!
//! - [`color`]: `lvsys_color_make`, `_LV_COLOR_MAKE`, `_LV_COLOR_GET_R/G/B/A`
//! - [`string`]: `strlen`, `strcpy`, `strcmp`, `strspn`, `strcspn`, `strchr`
//!   and friends, for targets that have no libc
//! - [`drivers`]: the lv_drivers backends selected with `use-*` features
//! - [`font`]: custom font objects linked from C
//!
//! The color layout is picked at build time with one `color-depth-*`
//! feature (plus `color-16-swap`), matching `LV_COLOR_DEPTH` and
//! `LV_COLOR_16_SWAP` in `lv_conf.h`.

#![cfg_attr(not(test), no_std)]
// The string routines must not be lowered back into calls to themselves
#![no_builtins]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

pub mod color;
pub mod drivers;
pub mod font;
pub mod string;

pub use color::{lv_color_t, LV_COLOR_16_SWAP, LV_COLOR_DEPTH};
pub use lvsys_core;
