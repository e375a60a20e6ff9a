//! Font objects defined in C
//!
//! Fonts generated by the LVGL font converter are compiled as C and
//! linked in. Rust only sees them as opaque `lv_font_t` statics.

use core::marker::{PhantomData, PhantomPinned};

use lvsys_core::font::FontDecl;

/// Opaque LVGL font descriptor
#[repr(C)]
pub struct lv_font_t {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// Symbol of the bundled numeric font
pub const NOTO_SANS_NUMERIC_80: &str = "noto_sans_numeric_80";

/// Declaration a C header needs for the bundled numeric font
pub fn noto_sans_numeric_80_decl() -> Option<FontDecl> {
    FontDecl::new(NOTO_SANS_NUMERIC_80)
}

#[cfg(feature = "font-noto-sans-numeric-80")]
extern "C" {
    pub static noto_sans_numeric_80: lv_font_t;
}

/// Address of the linked `noto_sans_numeric_80` font
#[cfg(feature = "font-noto-sans-numeric-80")]
pub fn noto_sans_numeric_80_ptr() -> *const lv_font_t {
    // SAFETY: only the address is taken, the static is never read here
    unsafe { core::ptr::addr_of!(noto_sans_numeric_80) }
}
