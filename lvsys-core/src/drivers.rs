//! lv_drivers catalogue and driver selection
//!
//! Every display and input backend in lv_drivers is guarded by a
//! `USE_<NAME>` build flag and brings in one header. The flags themselves
//! are external configuration (cargo features for `lvsys-sys`, a TOML file
//! for `lvsys-conf`); this module only maps flags to headers.
//!
//! Some backends share a header (`fbdev.h` serves both Linux and BSD
//! framebuffers, `evdev.h` both event device flavours). Such headers are
//! emitted once, guarded by the union of their flags.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of display backends in the catalogue
pub const DISPLAY_COUNT: usize = 13;

/// Number of input backends in the catalogue
pub const INPUT_COUNT: usize = 9;

/// Upper bound on distinct driver headers
pub const MAX_HEADERS: usize = DISPLAY_COUNT + INPUT_COUNT;

/// Most flags that share a single header
pub const MAX_FLAGS_PER_HEADER: usize = 2;

/// Display backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayDriver {
    /// SDL2 desktop monitor window
    Monitor,
    Windows,
    Gtk,
    Ssd1963,
    R61581,
    St7565,
    Gc9a01,
    Uc1610,
    SharpMip,
    Ili9341,
    /// Linux framebuffer device
    Fbdev,
    /// BSD framebuffer device
    BsdFbdev,
    /// Linux DRM/KMS
    Drm,
}

impl DisplayDriver {
    /// All display backends in catalogue order
    pub const ALL: [DisplayDriver; DISPLAY_COUNT] = [
        DisplayDriver::Monitor,
        DisplayDriver::Windows,
        DisplayDriver::Gtk,
        DisplayDriver::Ssd1963,
        DisplayDriver::R61581,
        DisplayDriver::St7565,
        DisplayDriver::Gc9a01,
        DisplayDriver::Uc1610,
        DisplayDriver::SharpMip,
        DisplayDriver::Ili9341,
        DisplayDriver::Fbdev,
        DisplayDriver::BsdFbdev,
        DisplayDriver::Drm,
    ];

    /// Short lowercase name, used for config keys and cargo features
    pub const fn name(self) -> &'static str {
        match self {
            DisplayDriver::Monitor => "monitor",
            DisplayDriver::Windows => "windows",
            DisplayDriver::Gtk => "gtk",
            DisplayDriver::Ssd1963 => "ssd1963",
            DisplayDriver::R61581 => "r61581",
            DisplayDriver::St7565 => "st7565",
            DisplayDriver::Gc9a01 => "gc9a01",
            DisplayDriver::Uc1610 => "uc1610",
            DisplayDriver::SharpMip => "sharp_mip",
            DisplayDriver::Ili9341 => "ili9341",
            DisplayDriver::Fbdev => "fbdev",
            DisplayDriver::BsdFbdev => "bsd_fbdev",
            DisplayDriver::Drm => "drm",
        }
    }

    /// Build flag from `lv_drv_conf.h`
    pub const fn flag(self) -> &'static str {
        match self {
            DisplayDriver::Monitor => "USE_MONITOR",
            DisplayDriver::Windows => "USE_WINDOWS",
            DisplayDriver::Gtk => "USE_GTK",
            DisplayDriver::Ssd1963 => "USE_SSD1963",
            DisplayDriver::R61581 => "USE_R61581",
            DisplayDriver::St7565 => "USE_ST7565",
            DisplayDriver::Gc9a01 => "USE_GC9A01",
            DisplayDriver::Uc1610 => "USE_UC1610",
            DisplayDriver::SharpMip => "USE_SHARP_MIP",
            DisplayDriver::Ili9341 => "USE_ILI9341",
            DisplayDriver::Fbdev => "USE_FBDEV",
            DisplayDriver::BsdFbdev => "USE_BSD_FBDEV",
            DisplayDriver::Drm => "USE_DRM",
        }
    }

    /// Header included when the flag is set
    pub const fn header(self) -> &'static str {
        match self {
            DisplayDriver::Monitor => "lv_drivers/display/monitor.h",
            DisplayDriver::Windows => "lv_drivers/win_drv.h",
            DisplayDriver::Gtk => "lv_drivers/gtkdrv/gtkdrv.h",
            DisplayDriver::Ssd1963 => "lv_drivers/display/SSD1963.h",
            DisplayDriver::R61581 => "lv_drivers/display/R61581.h",
            DisplayDriver::St7565 => "lv_drivers/display/ST7565.h",
            DisplayDriver::Gc9a01 => "lv_drivers/display/GC9A01.h",
            DisplayDriver::Uc1610 => "lv_drivers/display/UC1610.h",
            DisplayDriver::SharpMip => "lv_drivers/display/SHARP_MIP.h",
            DisplayDriver::Ili9341 => "lv_drivers/display/ILI9341.h",
            DisplayDriver::Fbdev | DisplayDriver::BsdFbdev => "lv_drivers/display/fbdev.h",
            DisplayDriver::Drm => "lv_drivers/display/drm.h",
        }
    }

    /// Look up a backend by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.name() == name)
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Input backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputDriver {
    /// Resistive touch controller
    Xpt2046,
    /// Raspberry Pi official touchscreen
    Ft5406ee8,
    AdTouch,
    /// SDL2 mouse
    Mouse,
    /// SDL2 mouse wheel (as encoder)
    Mousewheel,
    Libinput,
    Evdev,
    BsdEvdev,
    /// SDL2 keyboard
    Keyboard,
}

impl InputDriver {
    /// All input backends in catalogue order
    pub const ALL: [InputDriver; INPUT_COUNT] = [
        InputDriver::Xpt2046,
        InputDriver::Ft5406ee8,
        InputDriver::AdTouch,
        InputDriver::Mouse,
        InputDriver::Mousewheel,
        InputDriver::Libinput,
        InputDriver::Evdev,
        InputDriver::BsdEvdev,
        InputDriver::Keyboard,
    ];

    /// Short lowercase name, used for config keys and cargo features
    pub const fn name(self) -> &'static str {
        match self {
            InputDriver::Xpt2046 => "xpt2046",
            InputDriver::Ft5406ee8 => "ft5406ee8",
            InputDriver::AdTouch => "ad_touch",
            InputDriver::Mouse => "mouse",
            InputDriver::Mousewheel => "mousewheel",
            InputDriver::Libinput => "libinput",
            InputDriver::Evdev => "evdev",
            InputDriver::BsdEvdev => "bsd_evdev",
            InputDriver::Keyboard => "keyboard",
        }
    }

    /// Build flag from `lv_drv_conf.h`
    pub const fn flag(self) -> &'static str {
        match self {
            InputDriver::Xpt2046 => "USE_XPT2046",
            InputDriver::Ft5406ee8 => "USE_FT5406EE8",
            InputDriver::AdTouch => "USE_AD_TOUCH",
            InputDriver::Mouse => "USE_MOUSE",
            InputDriver::Mousewheel => "USE_MOUSEWHEEL",
            InputDriver::Libinput => "USE_LIBINPUT",
            InputDriver::Evdev => "USE_EVDEV",
            InputDriver::BsdEvdev => "USE_BSD_EVDEV",
            InputDriver::Keyboard => "USE_KEYBOARD",
        }
    }

    /// Header included when the flag is set
    pub const fn header(self) -> &'static str {
        match self {
            InputDriver::Xpt2046 => "lv_drivers/indev/XPT2046.h",
            InputDriver::Ft5406ee8 => "lv_drivers/indev/FT5406EE8.h",
            InputDriver::AdTouch => "lv_drivers/indev/AD_touch.h",
            InputDriver::Mouse => "lv_drivers/indev/mouse.h",
            InputDriver::Mousewheel => "lv_drivers/indev/mousewheel.h",
            InputDriver::Libinput => "lv_drivers/indev/libinput_drv.h",
            InputDriver::Evdev | InputDriver::BsdEvdev => "lv_drivers/indev/evdev.h",
            InputDriver::Keyboard => "lv_drivers/indev/keyboard.h",
        }
    }

    /// Look up a backend by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.name() == name)
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Either kind of backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Driver {
    Display(DisplayDriver),
    Input(InputDriver),
}

impl Driver {
    /// Every backend, displays first
    pub fn all() -> impl Iterator<Item = Driver> {
        DisplayDriver::ALL
            .into_iter()
            .map(Driver::Display)
            .chain(InputDriver::ALL.into_iter().map(Driver::Input))
    }

    /// Look up a backend of either kind by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|d| d.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Driver::Display(d) => d.name(),
            Driver::Input(d) => d.name(),
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            Driver::Display(d) => d.flag(),
            Driver::Input(d) => d.flag(),
        }
    }

    pub const fn header(self) -> &'static str {
        match self {
            Driver::Display(d) => d.header(),
            Driver::Input(d) => d.header(),
        }
    }
}

impl From<DisplayDriver> for Driver {
    fn from(d: DisplayDriver) -> Self {
        Driver::Display(d)
    }
}

impl From<InputDriver> for Driver {
    fn from(d: InputDriver) -> Self {
        Driver::Input(d)
    }
}

/// One driver header and the flags that pull it in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRule {
    /// Include path, relative to the vendor directory
    pub header: &'static str,
    /// Backends guarded by this header, in catalogue order
    pub drivers: Vec<Driver, MAX_FLAGS_PER_HEADER>,
}

impl HeaderRule {
    /// Flags joined the way a preprocessor condition needs them
    pub fn flags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.drivers.iter().map(|d| d.flag())
    }
}

/// Every header of the catalogue with its guarding backends
///
/// Display headers come first, then input headers, each in catalogue
/// order. Shared headers appear once, at the position of their first
/// backend.
pub fn header_rules() -> Vec<HeaderRule, MAX_HEADERS> {
    let mut rules: Vec<HeaderRule, MAX_HEADERS> = Vec::new();
    for driver in Driver::all() {
        match rules.iter_mut().find(|r| r.header == driver.header()) {
            Some(rule) => {
                // At most MAX_FLAGS_PER_HEADER backends share a header
                let pushed = rule.drivers.push(driver);
                debug_assert!(pushed.is_ok());
            }
            None => {
                let mut drivers = Vec::new();
                let pushed = drivers.push(driver).is_ok()
                    && rules
                        .push(HeaderRule {
                            header: driver.header(),
                            drivers,
                        })
                        .is_ok();
                debug_assert!(pushed);
            }
        }
    }
    rules
}

/// Set of enabled backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverSelection {
    displays: u16,
    inputs: u16,
}

impl DriverSelection {
    /// Selection with nothing enabled
    pub const fn new() -> Self {
        Self {
            displays: 0,
            inputs: 0,
        }
    }

    /// Build a selection by asking which `USE_*` flags are set
    pub fn from_flags<F>(mut is_set: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let mut selection = Self::new();
        for driver in Driver::all() {
            if is_set(driver.flag()) {
                selection.enable(driver);
            }
        }
        selection
    }

    /// Enable a backend
    pub fn enable(&mut self, driver: impl Into<Driver>) {
        match driver.into() {
            Driver::Display(d) => self.displays |= d.bit(),
            Driver::Input(d) => self.inputs |= d.bit(),
        }
    }

    /// Builder form of [`enable`](Self::enable)
    pub fn with(mut self, driver: impl Into<Driver>) -> Self {
        self.enable(driver);
        self
    }

    /// Disable a backend
    pub fn disable(&mut self, driver: impl Into<Driver>) {
        match driver.into() {
            Driver::Display(d) => self.displays &= !d.bit(),
            Driver::Input(d) => self.inputs &= !d.bit(),
        }
    }

    /// Check if a backend is enabled
    pub fn is_enabled(&self, driver: impl Into<Driver>) -> bool {
        match driver.into() {
            Driver::Display(d) => self.displays & d.bit() != 0,
            Driver::Input(d) => self.inputs & d.bit() != 0,
        }
    }

    /// Check if a `USE_*` flag is set
    pub fn is_flag_set(&self, flag: &str) -> bool {
        Driver::all().any(|d| d.flag() == flag && self.is_enabled(d))
    }

    /// Nothing enabled
    pub fn is_empty(&self) -> bool {
        self.displays == 0 && self.inputs == 0
    }

    /// Enabled display backends in catalogue order
    pub fn displays(&self) -> impl Iterator<Item = DisplayDriver> + '_ {
        DisplayDriver::ALL
            .into_iter()
            .filter(move |d| self.is_enabled(*d))
    }

    /// Enabled input backends in catalogue order
    pub fn inputs(&self) -> impl Iterator<Item = InputDriver> + '_ {
        InputDriver::ALL
            .into_iter()
            .filter(move |d| self.is_enabled(*d))
    }

    /// Headers to include for this selection
    ///
    /// Display headers first, then input headers, each emitted at most once.
    pub fn headers(&self) -> Vec<&'static str, MAX_HEADERS> {
        header_rules()
            .iter()
            .filter(|rule| rule.drivers.iter().any(|d| self.is_enabled(*d)))
            .map(|rule| rule.header)
            .collect()
    }
}
