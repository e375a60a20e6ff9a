//! Color helpers exported to C
//!
//! `lv_color_make` and the `LV_COLOR_GET_*` accessors are macros or inline
//! functions in `lv_color.h`, so they never reach the bindings. These
//! functions take their place with the same packing rules.

use lvsys_core::color::LvColor;

#[cfg(feature = "color-depth-1")]
pub type lv_color_t = lvsys_core::color::Color1;

#[cfg(feature = "color-depth-8")]
pub type lv_color_t = lvsys_core::color::Color8;

#[cfg(all(feature = "color-depth-16", not(feature = "color-16-swap")))]
pub type lv_color_t = lvsys_core::color::Color16;

#[cfg(all(feature = "color-depth-16", feature = "color-16-swap"))]
pub type lv_color_t = lvsys_core::color::Color16Swap;

#[cfg(feature = "color-depth-32")]
pub type lv_color_t = lvsys_core::color::Color32;

const _: () = assert!(
    cfg!(feature = "color-depth-1") as u8
        + cfg!(feature = "color-depth-8") as u8
        + cfg!(feature = "color-depth-16") as u8
        + cfg!(feature = "color-depth-32") as u8
        == 1,
    "enable exactly one color-depth-* feature"
);

const _: () = assert!(
    !cfg!(feature = "color-16-swap") || cfg!(feature = "color-depth-16"),
    "color-16-swap requires color-depth-16"
);

/// `LV_COLOR_DEPTH` this crate was built for
pub const LV_COLOR_DEPTH: u8 = <lv_color_t as LvColor>::DEPTH.bits();

/// `LV_COLOR_16_SWAP` this crate was built for
pub const LV_COLOR_16_SWAP: bool = cfg!(feature = "color-16-swap");

/// Pack 8-bit channels into the configured color layout
#[no_mangle]
pub extern "C" fn lvsys_color_make(r: u8, g: u8, b: u8) -> lv_color_t {
    <lv_color_t as LvColor>::make(r, g, b)
}

/// Same as [`lvsys_color_make`], under the name older bindings use
#[no_mangle]
pub extern "C" fn _LV_COLOR_MAKE(r: u8, g: u8, b: u8) -> lv_color_t {
    lvsys_color_make(r, g, b)
}

#[no_mangle]
pub extern "C" fn _LV_COLOR_GET_R(color: lv_color_t) -> u16 {
    LvColor::red(color)
}

#[no_mangle]
pub extern "C" fn _LV_COLOR_GET_G(color: lv_color_t) -> u16 {
    LvColor::green(color)
}

#[no_mangle]
pub extern "C" fn _LV_COLOR_GET_B(color: lv_color_t) -> u16 {
    LvColor::blue(color)
}

#[no_mangle]
pub extern "C" fn _LV_COLOR_GET_A(color: lv_color_t) -> u16 {
    LvColor::alpha(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_make_aliases_agree() {
        assert_eq!(lvsys_color_make(10, 200, 30), _LV_COLOR_MAKE(10, 200, 30));
    }

    #[test]
    fn test_white_is_full_scale() {
        let white = lvsys_color_make(0xFF, 0xFF, 0xFF);
        let max_r = (1u16 << red_bits()) - 1;
        assert_eq!(_LV_COLOR_GET_R(white), max_r);
        assert_eq!(_LV_COLOR_GET_A(white), 0xFF);
        assert_eq!(_LV_COLOR_GET_R(lvsys_color_make(0, 0, 0)), 0);
    }

    #[test]
    fn test_build_constants() {
        assert!(matches!(LV_COLOR_DEPTH, 1 | 8 | 16 | 32));
        assert!(!LV_COLOR_16_SWAP || LV_COLOR_DEPTH == 16);
    }

    fn red_bits() -> u32 {
        match LV_COLOR_DEPTH {
            1 => 1,
            8 => 3,
            16 => 5,
            _ => 8,
        }
    }

    proptest! {
        #[test]
        fn prop_red_keeps_top_bits(r: u8) {
            let color = lvsys_color_make(r, 0, 0);
            prop_assert_eq!(_LV_COLOR_GET_R(color), (r >> (8 - red_bits())) as u16);
            // Monochrome reports the same bit on every channel
            if LV_COLOR_DEPTH != 1 {
                prop_assert_eq!(_LV_COLOR_GET_G(color), 0);
                prop_assert_eq!(_LV_COLOR_GET_B(color), 0);
            }
        }
    }
}
