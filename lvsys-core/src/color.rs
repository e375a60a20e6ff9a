//! LVGL color layouts
//!
//! Each type mirrors one `lv_color_t` variant of LVGL v8 and stores the
//! packed value exactly as the C union's `full` member does, so a value can
//! cross the C ABI unchanged.
//!
//! | Type          | Depth | Layout (LSB first)                       |
//! |---------------|-------|------------------------------------------|
//! | [`Color1`]    | 1     | on:1                                     |
//! | [`Color8`]    | 8     | blue:2, green:3, red:3                   |
//! | [`Color16`]   | 16    | blue:5, green:6, red:5                   |
//! | [`Color16Swap`] | 16  | green_h:3, red:5, blue:5, green_l:3      |
//! | [`Color32`]   | 32    | blue:8, green:8, red:8, alpha:8          |
//!
//! Channel getters return the stored value at the layout's own width, the
//! same as the `LV_COLOR_GET_*` macros. Nothing is rescaled.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Alpha reported by layouts without an alpha channel
pub const OPAQUE: u16 = 0xFF;

/// Supported color depths (`LV_COLOR_DEPTH`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum ColorDepth {
    /// Monochrome
    D1,
    /// RGB332
    D8,
    /// RGB565
    #[default]
    D16,
    /// ARGB8888
    D32,
}

impl ColorDepth {
    /// Bits per pixel
    pub const fn bits(self) -> u8 {
        match self {
            ColorDepth::D1 => 1,
            ColorDepth::D8 => 8,
            ColorDepth::D16 => 16,
            ColorDepth::D32 => 32,
        }
    }
}

/// Color depth outside of 1, 8, 16 or 32 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorDepthError(pub u8);

impl core::fmt::Display for ColorDepthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unsupported color depth {} (expected 1, 8, 16 or 32)", self.0)
    }
}

impl TryFrom<u8> for ColorDepth {
    type Error = ColorDepthError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            1 => Ok(ColorDepth::D1),
            8 => Ok(ColorDepth::D8),
            16 => Ok(ColorDepth::D16),
            32 => Ok(ColorDepth::D32),
            other => Err(ColorDepthError(other)),
        }
    }
}

impl From<ColorDepth> for u8 {
    fn from(depth: ColorDepth) -> Self {
        depth.bits()
    }
}

/// Common interface of every LVGL color layout
///
/// Generic code (and the C shims) go through this trait; the inherent
/// `const fn`s on each type are there for building constants.
pub trait LvColor: Copy + Eq {
    /// Storage of the `full` union member
    type Raw: Copy;

    /// Depth this layout is used for
    const DEPTH: ColorDepth;

    /// Pack 8-bit channels (`LV_COLOR_MAKE`)
    fn make(r: u8, g: u8, b: u8) -> Self;

    /// Wrap a raw packed value
    fn from_full(full: Self::Raw) -> Self;

    /// Raw packed value
    fn full(self) -> Self::Raw;

    /// Red channel (`LV_COLOR_GET_R`)
    fn red(self) -> u16;

    /// Green channel (`LV_COLOR_GET_G`)
    fn green(self) -> u16;

    /// Blue channel (`LV_COLOR_GET_B`)
    fn blue(self) -> u16;

    /// Alpha channel (`LV_COLOR_GET_A`)
    fn alpha(self) -> u16 {
        OPAQUE
    }

    /// Build from `0xRRGGBB` (`lv_color_hex`)
    fn hex(rgb: u32) -> Self {
        Self::make(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Build from `0xRGB`, each nibble doubled (`lv_color_hex3`)
    fn hex3(rgb: u32) -> Self {
        Self::make(
            (((rgb >> 4) & 0xF0) | ((rgb >> 8) & 0xF)) as u8,
            ((rgb & 0xF0) | ((rgb & 0xF0) >> 4)) as u8,
            ((rgb & 0xF) | ((rgb & 0xF) << 4)) as u8,
        )
    }

    /// `lv_color_white`
    fn white() -> Self {
        Self::make(0xFF, 0xFF, 0xFF)
    }

    /// `lv_color_black`
    fn black() -> Self {
        Self::make(0, 0, 0)
    }

    /// Default `LV_COLOR_CHROMA_KEY` (pure green)
    fn chroma_key() -> Self {
        Self::hex(0x00FF00)
    }
}

macro_rules! impl_lv_color {
    ($ty:ident, $raw:ty, $depth:expr) => {
        impl LvColor for $ty {
            type Raw = $raw;
            const DEPTH: ColorDepth = $depth;

            fn make(r: u8, g: u8, b: u8) -> Self {
                $ty::new(r, g, b)
            }

            fn from_full(full: $raw) -> Self {
                $ty::from_full(full)
            }

            fn full(self) -> $raw {
                $ty::full(self)
            }

            fn red(self) -> u16 {
                $ty::red(self)
            }

            fn green(self) -> u16 {
                $ty::green(self)
            }

            fn blue(self) -> u16 {
                $ty::blue(self)
            }

            fn alpha(self) -> u16 {
                $ty::alpha(self)
            }
        }
    };
}

/// 1-bit monochrome color
///
/// Any channel at or above half intensity turns the pixel on. All three
/// getters report the same bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Color1 {
    full: u8,
}

impl Color1 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            full: (r >> 7) | (g >> 7) | (b >> 7),
        }
    }

    pub const fn from_full(full: u8) -> Self {
        Self { full: full & 0x1 }
    }

    pub const fn full(self) -> u8 {
        self.full
    }

    pub const fn red(self) -> u16 {
        self.full as u16
    }

    pub const fn green(self) -> u16 {
        self.full as u16
    }

    pub const fn blue(self) -> u16 {
        self.full as u16
    }

    pub const fn alpha(self) -> u16 {
        OPAQUE
    }
}

impl_lv_color!(Color1, u8, ColorDepth::D1);

/// 8-bit RGB332 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Color8 {
    full: u8,
}

impl Color8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            full: ((b >> 6) & 0x3) | (((g >> 5) & 0x7) << 2) | (((r >> 5) & 0x7) << 5),
        }
    }

    pub const fn from_full(full: u8) -> Self {
        Self { full }
    }

    pub const fn full(self) -> u8 {
        self.full
    }

    pub const fn red(self) -> u16 {
        ((self.full >> 5) & 0x7) as u16
    }

    pub const fn green(self) -> u16 {
        ((self.full >> 2) & 0x7) as u16
    }

    pub const fn blue(self) -> u16 {
        (self.full & 0x3) as u16
    }

    pub const fn alpha(self) -> u16 {
        OPAQUE
    }
}

impl_lv_color!(Color8, u8, ColorDepth::D8);

/// 16-bit RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Color16 {
    full: u16,
}

impl Color16 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            full: ((b >> 3) as u16) | (((g >> 2) as u16) << 5) | (((r >> 3) as u16) << 11),
        }
    }

    pub const fn from_full(full: u16) -> Self {
        Self { full }
    }

    pub const fn full(self) -> u16 {
        self.full
    }

    pub const fn red(self) -> u16 {
        (self.full >> 11) & 0x1F
    }

    pub const fn green(self) -> u16 {
        (self.full >> 5) & 0x3F
    }

    pub const fn blue(self) -> u16 {
        self.full & 0x1F
    }

    pub const fn alpha(self) -> u16 {
        OPAQUE
    }
}

impl_lv_color!(Color16, u16, ColorDepth::D16);

/// 16-bit RGB565 color with swapped bytes (`LV_COLOR_16_SWAP`)
///
/// Used with 8-bit SPI displays. The 6-bit green channel is split into a
/// high half in the low byte and a low half in the high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Color16Swap {
    full: u16,
}

impl Color16Swap {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        let green = (g >> 2) as u16;
        Self {
            full: (green >> 3)
                | (((r >> 3) as u16) << 3)
                | (((b >> 3) as u16) << 8)
                | ((green & 0x7) << 13),
        }
    }

    pub const fn from_full(full: u16) -> Self {
        Self { full }
    }

    pub const fn full(self) -> u16 {
        self.full
    }

    pub const fn red(self) -> u16 {
        (self.full >> 3) & 0x1F
    }

    pub const fn green(self) -> u16 {
        ((self.full & 0x7) << 3) + ((self.full >> 13) & 0x7)
    }

    pub const fn blue(self) -> u16 {
        (self.full >> 8) & 0x1F
    }

    pub const fn alpha(self) -> u16 {
        OPAQUE
    }
}

impl_lv_color!(Color16Swap, u16, ColorDepth::D16);

/// 32-bit ARGB8888 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Color32 {
    full: u32,
}

impl Color32 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            full: (b as u32) | ((g as u32) << 8) | ((r as u32) << 16) | (0xFF << 24),
        }
    }

    pub const fn from_full(full: u32) -> Self {
        Self { full }
    }

    pub const fn full(self) -> u32 {
        self.full
    }

    pub const fn red(self) -> u16 {
        ((self.full >> 16) & 0xFF) as u16
    }

    pub const fn green(self) -> u16 {
        ((self.full >> 8) & 0xFF) as u16
    }

    pub const fn blue(self) -> u16 {
        (self.full & 0xFF) as u16
    }

    pub const fn alpha(self) -> u16 {
        ((self.full >> 24) & 0xFF) as u16
    }
}

impl_lv_color!(Color32, u32, ColorDepth::D32);

#[cfg(feature = "embedded-graphics")]
mod eg {
    use super::*;
    use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

    macro_rules! from_rgb888 {
        ($($ty:ident),*) => {
            $(
                impl From<Rgb888> for $ty {
                    fn from(c: Rgb888) -> Self {
                        $ty::new(c.r(), c.g(), c.b())
                    }
                }
            )*
        };
    }

    from_rgb888!(Color1, Color8, Color16, Color16Swap, Color32);

    impl From<Rgb565> for Color16 {
        fn from(c: Rgb565) -> Self {
            Color16::from_full(((c.r() as u16) << 11) | ((c.g() as u16) << 5) | c.b() as u16)
        }
    }

    impl From<Color16> for Rgb565 {
        fn from(c: Color16) -> Self {
            Rgb565::new(c.red() as u8, c.green() as u8, c.blue() as u8)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_rgb888_packs_like_make() {
            let rgb = Rgb888::new(0x12, 0xA4, 0xF0);
            assert_eq!(Color1::from(rgb), Color1::new(0x12, 0xA4, 0xF0));
            assert_eq!(Color8::from(rgb), Color8::new(0x12, 0xA4, 0xF0));
            assert_eq!(Color16::from(rgb), Color16::new(0x12, 0xA4, 0xF0));
            assert_eq!(Color16Swap::from(rgb), Color16Swap::new(0x12, 0xA4, 0xF0));
            assert_eq!(Color32::from(rgb), Color32::new(0x12, 0xA4, 0xF0));
        }

        #[test]
        fn test_rgb565_roundtrip() {
            for full in [0x0000u16, 0xF800, 0x07E0, 0x001F, 0xFFFF, 0x1234, 0xBEEF] {
                let color = Color16::from_full(full);
                let rgb = Rgb565::from(color);
                assert_eq!(Color16::from(rgb), color);
            }
        }

        #[test]
        fn test_rgb565_channels_match() {
            let rgb = Rgb565::from(Color16::new(0xFF, 0x80, 0x08));
            assert_eq!(rgb.r(), 31);
            assert_eq!(rgb.g(), 0x80 >> 2);
            assert_eq!(rgb.b(), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_depth_bits() {
        assert_eq!(ColorDepth::D1.bits(), 1);
        assert_eq!(ColorDepth::D32.bits(), 32);
        assert_eq!(ColorDepth::try_from(16), Ok(ColorDepth::D16));
        assert_eq!(ColorDepth::try_from(24), Err(ColorDepthError(24)));
        assert_eq!(<Color16Swap as LvColor>::DEPTH, ColorDepth::D16);
    }

    #[test]
    fn test_color16_primaries() {
        assert_eq!(Color16::new(0xFF, 0, 0).full(), 0xF800);
        assert_eq!(Color16::new(0, 0xFF, 0).full(), 0x07E0);
        assert_eq!(Color16::new(0, 0, 0xFF).full(), 0x001F);
        assert_eq!(Color16::white().full(), 0xFFFF);
        assert_eq!(Color16::black().full(), 0x0000);
    }

    #[test]
    fn test_color16_getters() {
        let c = Color16::new(0x80, 0x40, 0x20);
        assert_eq!(c.red(), 0x80 >> 3);
        assert_eq!(c.green(), 0x40 >> 2);
        assert_eq!(c.blue(), 0x20 >> 3);
        assert_eq!(c.alpha(), OPAQUE);
    }

    #[test]
    fn test_color16_swap_layout() {
        // Pure green: green6 = 0x3F, high half in bits 0-2, low half in 13-15
        let c = Color16Swap::new(0, 0xFF, 0);
        assert_eq!(c.full(), 0xE007);
        assert_eq!(c.green(), 0x3F);
        assert_eq!(c.red(), 0);

        let red = Color16Swap::new(0xFF, 0, 0);
        assert_eq!(red.full(), 0x00F8);
        assert_eq!(red.red(), 0x1F);
    }

    #[test]
    fn test_color8_layout() {
        let c = Color8::new(0xFF, 0xFF, 0xFF);
        assert_eq!(c.full(), 0xFF);
        assert_eq!(c.red(), 7);
        assert_eq!(c.green(), 7);
        assert_eq!(c.blue(), 3);

        let blue = Color8::new(0, 0, 0xC0);
        assert_eq!(blue.full(), 0x03);
    }

    #[test]
    fn test_color1_threshold() {
        assert_eq!(Color1::new(0x7F, 0x7F, 0x7F).full(), 0);
        assert_eq!(Color1::new(0, 0x80, 0).full(), 1);
        assert_eq!(Color1::white().red(), 1);
        assert_eq!(Color1::from_full(0xFE).full(), 0);
    }

    #[test]
    fn test_color32_alpha() {
        let c = Color32::new(0x12, 0x34, 0x56);
        assert_eq!(c.full(), 0xFF12_3456);
        assert_eq!(c.alpha(), 0xFF);
        assert_eq!(Color32::from_full(0x8000_0000).alpha(), 0x80);
    }

    #[test]
    fn test_hex_constructors() {
        assert_eq!(Color32::hex(0x123456), Color32::new(0x12, 0x34, 0x56));
        assert_eq!(Color32::hex3(0x1AF), Color32::new(0x11, 0xAA, 0xFF));
        assert_eq!(Color32::chroma_key(), Color32::new(0, 0xFF, 0));
    }

    proptest! {
        #[test]
        fn prop_swap_is_byte_swapped_rgb565(r: u8, g: u8, b: u8) {
            let plain = Color16::new(r, g, b);
            let swapped = Color16Swap::new(r, g, b);
            prop_assert_eq!(swapped.full(), plain.full().swap_bytes());
            prop_assert_eq!(swapped.red(), plain.red());
            prop_assert_eq!(swapped.green(), plain.green());
            prop_assert_eq!(swapped.blue(), plain.blue());
        }

        #[test]
        fn prop_channels_keep_top_bits(r: u8, g: u8, b: u8) {
            let c8 = Color8::new(r, g, b);
            prop_assert_eq!(c8.red(), (r >> 5) as u16);
            prop_assert_eq!(c8.green(), (g >> 5) as u16);
            prop_assert_eq!(c8.blue(), (b >> 6) as u16);

            let c32 = Color32::new(r, g, b);
            prop_assert_eq!(c32.red(), r as u16);
            prop_assert_eq!(c32.green(), g as u16);
            prop_assert_eq!(c32.blue(), b as u16);
        }

        #[test]
        fn prop_full_roundtrips(full: u16) {
            prop_assert_eq!(Color16::from_full(full).full(), full);
            prop_assert_eq!(Color16Swap::from_full(full).full(), full);
        }
    }
}
