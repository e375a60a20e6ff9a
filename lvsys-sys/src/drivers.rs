//! Drivers compiled into this build
//!
//! Each `use-*` cargo feature corresponds to a `USE_*` flag in
//! `lv_drv_conf.h`. The C side still decides what it compiles; this module
//! tells Rust code which backends the build asked for and which headers
//! the bindings need.

use heapless::Vec;
use lvsys_core::drivers::{DriverSelection, MAX_HEADERS};

/// `USE_*` flags and whether the matching cargo feature is enabled
pub const FEATURE_FLAGS: [(&str, bool); MAX_HEADERS] = [
    ("USE_MONITOR", cfg!(feature = "use-monitor")),
    ("USE_WINDOWS", cfg!(feature = "use-windows")),
    ("USE_GTK", cfg!(feature = "use-gtk")),
    ("USE_SSD1963", cfg!(feature = "use-ssd1963")),
    ("USE_R61581", cfg!(feature = "use-r61581")),
    ("USE_ST7565", cfg!(feature = "use-st7565")),
    ("USE_GC9A01", cfg!(feature = "use-gc9a01")),
    ("USE_UC1610", cfg!(feature = "use-uc1610")),
    ("USE_SHARP_MIP", cfg!(feature = "use-sharp-mip")),
    ("USE_ILI9341", cfg!(feature = "use-ili9341")),
    ("USE_FBDEV", cfg!(feature = "use-fbdev")),
    ("USE_BSD_FBDEV", cfg!(feature = "use-bsd-fbdev")),
    ("USE_DRM", cfg!(feature = "use-drm")),
    ("USE_XPT2046", cfg!(feature = "use-xpt2046")),
    ("USE_FT5406EE8", cfg!(feature = "use-ft5406ee8")),
    ("USE_AD_TOUCH", cfg!(feature = "use-ad-touch")),
    ("USE_MOUSE", cfg!(feature = "use-mouse")),
    ("USE_MOUSEWHEEL", cfg!(feature = "use-mousewheel")),
    ("USE_LIBINPUT", cfg!(feature = "use-libinput")),
    ("USE_EVDEV", cfg!(feature = "use-evdev")),
    ("USE_BSD_EVDEV", cfg!(feature = "use-bsd-evdev")),
    ("USE_KEYBOARD", cfg!(feature = "use-keyboard")),
];

/// Drivers selected by cargo features
pub fn compiled() -> DriverSelection {
    DriverSelection::from_flags(|flag| {
        FEATURE_FLAGS
            .iter()
            .any(|&(name, enabled)| enabled && name == flag)
    })
}

/// Driver headers the selected backends pull in
pub fn compiled_headers() -> Vec<&'static str, MAX_HEADERS> {
    compiled().headers()
}
