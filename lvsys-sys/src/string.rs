//! Freestanding C string routines
//!
//! LVGL calls a handful of `<string.h>` functions. On bare-metal targets
//! without a libc these provide them; enable the `string-impl` feature to
//! export them unmangled. Without the feature they are ordinary Rust
//! functions, so host builds keep using the platform libc.
//!
//! The C contract applies: every pointer must be valid and every string
//! NUL-terminated (or, for the `n` variants, readable for `n` bytes).
//! Nothing here calls back into a libc `strlen`, which rules out
//! `CStr::from_ptr`.

use core::ffi::{c_char, c_int};
use core::{ptr, slice};

use lvsys_core::string as cstr;

/// Length of `s`, scanning bytes directly
unsafe fn raw_len(s: *const c_char) -> usize {
    let mut n = 0;
    while *s.add(n) != 0 {
        n += 1;
    }
    n
}

/// Length of `s`, reading no more than `max` bytes
unsafe fn raw_nlen(s: *const c_char, max: usize) -> usize {
    let mut n = 0;
    while n < max && *s.add(n) != 0 {
        n += 1;
    }
    n
}

/// `s` with its terminator
unsafe fn terminated<'a>(s: *const c_char) -> &'a [u8] {
    slice::from_raw_parts(s.cast::<u8>(), raw_len(s) + 1)
}

/// At most `max` bytes of `s`, with the terminator when it falls inside
unsafe fn bounded<'a>(s: *const c_char, max: usize) -> &'a [u8] {
    let len = raw_nlen(s, max);
    slice::from_raw_parts(s.cast::<u8>(), if len < max { len + 1 } else { len })
}

unsafe fn offset_or_null(s: *const c_char, offset: Option<usize>) -> *mut c_char {
    match offset {
        Some(i) => s.add(i).cast_mut(),
        None => ptr::null_mut(),
    }
}

/// # Safety
///
/// `s` must point to a NUL-terminated string.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strlen(s: *const c_char) -> usize {
    raw_len(s)
}

/// # Safety
///
/// `s` must be readable up to its terminator or `size` bytes, whichever
/// comes first.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strnlen(s: *const c_char, size: usize) -> usize {
    raw_nlen(s, size)
}

/// [`strnlen`] that accepts a null pointer
///
/// # Safety
///
/// `s` is null or readable up to its terminator or `size` bytes.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strnlen_s(s: *const c_char, size: usize) -> usize {
    if s.is_null() {
        0
    } else {
        raw_nlen(s, size)
    }
}

/// # Safety
///
/// `src` must be NUL-terminated and `dst` writable for `strlen(src) + 1`
/// bytes. The two must not overlap.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strcpy(dst: *mut c_char, src: *const c_char) -> *mut c_char {
    let src = terminated(src);
    let out = slice::from_raw_parts_mut(dst.cast::<u8>(), src.len());
    let copied = cstr::strcpy(out, src);
    debug_assert!(copied.is_ok());
    dst
}

/// # Safety
///
/// `src` must be readable up to its terminator or `n` bytes and `dst`
/// writable for `n` bytes. The two must not overlap.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strncpy(dst: *mut c_char, src: *const c_char, n: usize) -> *mut c_char {
    let src = bounded(src, n);
    let out = slice::from_raw_parts_mut(dst.cast::<u8>(), n);
    let copied = cstr::strncpy(out, src, n);
    debug_assert!(copied.is_ok());
    dst
}

/// # Safety
///
/// Both strings must be NUL-terminated and `dst` writable for
/// `strlen(dst) + strlen(src) + 1` bytes. The two must not overlap.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strcat(dst: *mut c_char, src: *const c_char) -> *mut c_char {
    let src = terminated(src);
    let len = raw_len(dst) + src.len();
    let out = slice::from_raw_parts_mut(dst.cast::<u8>(), len);
    let appended = cstr::strcat(out, src);
    debug_assert!(appended.is_ok());
    dst
}

/// # Safety
///
/// `dst` must be NUL-terminated and writable for `strlen(dst) + n + 1`
/// bytes; `src` readable up to its terminator or `n` bytes. The two must
/// not overlap.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strncat(dst: *mut c_char, src: *const c_char, n: usize) -> *mut c_char {
    let src = bounded(src, n);
    let added = cstr::strlen(src);
    let len = raw_len(dst) + added + 1;
    let out = slice::from_raw_parts_mut(dst.cast::<u8>(), len);
    let appended = cstr::strncat(out, src, n);
    debug_assert!(appended.is_ok());
    dst
}

/// # Safety
///
/// Both pointers must point to NUL-terminated strings.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strcmp(s1: *const c_char, s2: *const c_char) -> c_int {
    cstr::strcmp(terminated(s1), terminated(s2))
}

/// # Safety
///
/// Both strings must be readable up to their terminator or `n` bytes.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strncmp(s1: *const c_char, s2: *const c_char, n: usize) -> c_int {
    cstr::strncmp(bounded(s1, n), bounded(s2, n), n)
}

/// No locale support: compares like [`strcmp`]
///
/// # Safety
///
/// Both pointers must point to NUL-terminated strings.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strcoll(s1: *const c_char, s2: *const c_char) -> c_int {
    cstr::strcoll(terminated(s1), terminated(s2))
}

/// # Safety
///
/// `s` and `accept` must point to NUL-terminated strings.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strspn(s: *const c_char, accept: *const c_char) -> usize {
    cstr::strspn(terminated(s), terminated(accept))
}

/// # Safety
///
/// `s` and `reject` must point to NUL-terminated strings.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strcspn(s: *const c_char, reject: *const c_char) -> usize {
    cstr::strcspn(terminated(s), terminated(reject))
}

/// # Safety
///
/// `s` must point to a NUL-terminated string.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strchr(s: *const c_char, c: c_int) -> *mut c_char {
    offset_or_null(s, cstr::strchr(terminated(s), c))
}

/// # Safety
///
/// `s` must point to a NUL-terminated string.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strrchr(s: *const c_char, c: c_int) -> *mut c_char {
    offset_or_null(s, cstr::strrchr(terminated(s), c))
}

/// # Safety
///
/// `haystack` and `needle` must point to NUL-terminated strings.
#[cfg_attr(feature = "string-impl", no_mangle)]
pub unsafe extern "C" fn strstr(haystack: *const c_char, needle: *const c_char) -> *mut c_char {
    offset_or_null(
        haystack,
        cstr::strstr(terminated(haystack), terminated(needle)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::ffi::{CStr, CString};

    fn text() -> impl Strategy<Value = CString> {
        proptest::collection::vec(1u8..=255, 0..48).prop_map(|v| CString::new(v).unwrap())
    }

    #[test]
    fn test_strlen() {
        unsafe {
            assert_eq!(strlen(c"hello".as_ptr()), 5);
            assert_eq!(strlen(c"".as_ptr()), 0);
            assert_eq!(strnlen(c"hello".as_ptr(), 3), 3);
            assert_eq!(strnlen(c"hi".as_ptr(), 10), 2);
            assert_eq!(strnlen_s(ptr::null(), 10), 0);
        }
    }

    #[test]
    fn test_strcpy_returns_dst() {
        let mut buf = [0x55 as c_char; 8];
        unsafe {
            let ret = strcpy(buf.as_mut_ptr(), c"abc".as_ptr());
            assert_eq!(ret, buf.as_mut_ptr());
            assert_eq!(CStr::from_ptr(ret).to_bytes(), b"abc");
        }
        assert_eq!(buf[3], 0);
        assert_eq!(buf[4], 0x55);
    }

    #[test]
    fn test_strncpy_pads_and_truncates() {
        let mut buf = [0x55 as c_char; 6];
        unsafe {
            strncpy(buf.as_mut_ptr(), c"ab".as_ptr(), 4);
        }
        assert_eq!(&buf[..5], &[b'a' as c_char, b'b' as c_char, 0, 0, 0x55]);

        let mut buf = [0x55 as c_char; 4];
        unsafe {
            strncpy(buf.as_mut_ptr(), c"abcdef".as_ptr(), 3);
        }
        assert_eq!(buf[3], 0x55);
    }

    #[test]
    fn test_strcat_strncat() {
        let mut buf = [0 as c_char; 16];
        unsafe {
            strcpy(buf.as_mut_ptr(), c"foo".as_ptr());
            strcat(buf.as_mut_ptr(), c"bar".as_ptr());
            strncat(buf.as_mut_ptr(), c"bazqux".as_ptr(), 3);
            assert_eq!(CStr::from_ptr(buf.as_ptr()).to_bytes(), b"foobarbaz");
        }
    }

    #[test]
    fn test_copies_into_exact_fit_buffers() {
        // Every byte is spoken for; an undersized view would trip the core
        let mut buf = [0x55 as c_char; 4];
        unsafe {
            strcpy(buf.as_mut_ptr(), c"abc".as_ptr());
        }
        assert_eq!(buf, [b'a' as c_char, b'b' as c_char, b'c' as c_char, 0]);

        let mut buf = [0x55 as c_char; 5];
        buf[0] = 0;
        unsafe {
            strcat(buf.as_mut_ptr(), c"".as_ptr());
            strcat(buf.as_mut_ptr(), c"ab".as_ptr());
            strncat(buf.as_mut_ptr(), c"cd".as_ptr(), 10);
            strncat(buf.as_mut_ptr(), c"zz".as_ptr(), 0);
            assert_eq!(CStr::from_ptr(buf.as_ptr()).to_bytes(), b"abcd");
        }

        let mut buf = [0x55 as c_char; 3];
        unsafe {
            strncpy(buf.as_mut_ptr(), c"xyz".as_ptr(), 3);
        }
        assert_eq!(buf, [b'x' as c_char, b'y' as c_char, b'z' as c_char]);
    }

    #[test]
    fn test_strcmp_family() {
        unsafe {
            assert_eq!(strcmp(c"abc".as_ptr(), c"abc".as_ptr()), 0);
            assert_eq!(strcmp(c"abc".as_ptr(), c"abd".as_ptr()), -1);
            assert_eq!(strcmp(c"b".as_ptr(), c"a".as_ptr()), 1);
            assert_eq!(strncmp(c"abcdef".as_ptr(), c"abcxyz".as_ptr(), 3), 0);
            assert_eq!(strcoll(c"a".as_ptr(), c"ab".as_ptr()), -1);
        }
    }

    #[test]
    fn test_spans() {
        unsafe {
            assert_eq!(strspn(c"123abc".as_ptr(), c"0123456789".as_ptr()), 3);
            assert_eq!(strcspn(c"key=value".as_ptr(), c"=".as_ptr()), 3);
            assert_eq!(strcspn(c"novalue".as_ptr(), c"=".as_ptr()), 7);
        }
    }

    #[test]
    fn test_searches() {
        let s = c"hello world";
        unsafe {
            let p = strchr(s.as_ptr(), b'o' as c_int);
            assert_eq!(p.cast_const(), s.as_ptr().add(4));
            let p = strrchr(s.as_ptr(), b'o' as c_int);
            assert_eq!(p.cast_const(), s.as_ptr().add(7));
            let p = strchr(s.as_ptr(), 0);
            assert_eq!(p.cast_const(), s.as_ptr().add(11));
            assert!(strchr(s.as_ptr(), b'z' as c_int).is_null());
            let p = strstr(s.as_ptr(), c"world".as_ptr());
            assert_eq!(p.cast_const(), s.as_ptr().add(6));
            assert!(strstr(s.as_ptr(), c"xyz".as_ptr()).is_null());
        }
    }

    proptest! {
        #[test]
        fn prop_strlen_matches_cstr(s in text()) {
            let len = unsafe { strlen(s.as_ptr()) };
            prop_assert_eq!(len, s.as_bytes().len());
        }

        #[test]
        fn prop_strcmp_sign_matches_bytes(a in text(), b in text()) {
            let got = unsafe { strcmp(a.as_ptr(), b.as_ptr()) };
            let want = match a.as_bytes().cmp(b.as_bytes()) {
                std::cmp::Ordering::Less => -1,
                std::cmp::Ordering::Equal => 0,
                std::cmp::Ordering::Greater => 1,
            };
            prop_assert_eq!(got, want);
        }

        #[test]
        fn prop_strcpy_roundtrip(s in text()) {
            let mut buf = vec![0x55 as c_char; s.as_bytes_with_nul().len() + 1];
            let copied = unsafe { CStr::from_ptr(strcpy(buf.as_mut_ptr(), s.as_ptr())) };
            prop_assert_eq!(copied, s.as_c_str());
        }
    }
}
