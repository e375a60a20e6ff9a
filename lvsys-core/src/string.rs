//! C string routines over byte buffers
//!
//! A C string buffer is a `&[u8]` whose logical string ends at the first
//! NUL byte, or at the end of the slice when there is none. Scanning never
//! reads past the slice, and copies into a destination that cannot hold
//! the result fail with [`StringError::BufferTooSmall`] instead of
//! overrunning it.
//!
//! Positions returned by the search functions are byte offsets into the
//! buffer. Searching for NUL finds the terminator, which may be the
//! implicit one at `s.len()`.

use core::cmp::Ordering;

/// Errors from the copying routines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StringError {
    /// Destination cannot hold the result and its terminator
    BufferTooSmall,
}

/// The logical string, without terminator
pub fn c_str(s: &[u8]) -> &[u8] {
    &s[..strlen(s)]
}

/// Number of bytes before the terminator
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Like [`strlen`] but never counts past `max`
pub fn strnlen(s: &[u8], max: usize) -> usize {
    strlen(&s[..s.len().min(max)])
}

/// Bounds-checked [`strnlen`]: a missing string has length zero
pub fn strnlen_s(s: Option<&[u8]>, max: usize) -> usize {
    s.map_or(0, |s| strnlen(s, max))
}

fn sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Compare two strings by unsigned byte value
///
/// Returns -1, 0 or 1. A string that is a prefix of the other sorts first,
/// since its terminator compares below any other byte.
pub fn strcmp(a: &[u8], b: &[u8]) -> i32 {
    sign(c_str(a).cmp(c_str(b)))
}

/// Compare at most `n` bytes of two strings
pub fn strncmp(a: &[u8], b: &[u8], n: usize) -> i32 {
    let a = c_str(a);
    let b = c_str(b);
    sign(a[..a.len().min(n)].cmp(&b[..b.len().min(n)]))
}

/// Locale-aware comparison; there is no locale support so this is [`strcmp`]
pub fn strcoll(a: &[u8], b: &[u8]) -> i32 {
    strcmp(a, b)
}

/// Length of the leading run of bytes that appear in `accept`
pub fn strspn(s: &[u8], accept: &[u8]) -> usize {
    let accept = c_str(accept);
    c_str(s).iter().take_while(|b| accept.contains(b)).count()
}

/// Length of the leading run of bytes that do not appear in `reject`
pub fn strcspn(s: &[u8], reject: &[u8]) -> usize {
    let reject = c_str(reject);
    c_str(s).iter().take_while(|b| !reject.contains(b)).count()
}

/// Offset of the first occurrence of `c` (converted to a byte)
pub fn strchr(s: &[u8], c: i32) -> Option<usize> {
    let c = c as u8;
    if c == 0 {
        return Some(strlen(s));
    }
    c_str(s).iter().position(|&b| b == c)
}

/// Offset of the last occurrence of `c` (converted to a byte)
pub fn strrchr(s: &[u8], c: i32) -> Option<usize> {
    let c = c as u8;
    if c == 0 {
        return Some(strlen(s));
    }
    c_str(s).iter().rposition(|&b| b == c)
}

/// Offset of the first occurrence of `needle` in `haystack`
///
/// An empty needle matches at offset 0.
pub fn strstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let haystack = c_str(haystack);
    let needle = c_str(needle);
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Copy `src` including its terminator into `dst`
///
/// Returns the length of the copied string.
pub fn strcpy(dst: &mut [u8], src: &[u8]) -> Result<usize, StringError> {
    let src = c_str(src);
    if dst.len() <= src.len() {
        return Err(StringError::BufferTooSmall);
    }
    dst[..src.len()].copy_from_slice(src);
    dst[src.len()] = 0;
    Ok(src.len())
}

/// Copy at most `n` bytes of `src` and zero-fill the rest of the `n` bytes
///
/// As in C, the result is not terminated when `src` is `n` bytes or longer.
pub fn strncpy(dst: &mut [u8], src: &[u8], n: usize) -> Result<(), StringError> {
    if dst.len() < n {
        return Err(StringError::BufferTooSmall);
    }
    let src = c_str(src);
    let copied = src.len().min(n);
    dst[..copied].copy_from_slice(&src[..copied]);
    dst[copied..n].fill(0);
    Ok(())
}

/// Append `src` to the string in `dst`
///
/// Returns the new length of the string in `dst`.
pub fn strcat(dst: &mut [u8], src: &[u8]) -> Result<usize, StringError> {
    strncat(dst, src, usize::MAX)
}

/// Append at most `n` bytes of `src` to the string in `dst`, then terminate
pub fn strncat(dst: &mut [u8], src: &[u8], n: usize) -> Result<usize, StringError> {
    let start = strlen(dst);
    let src = c_str(src);
    let appended = src.len().min(n);
    let end = start + appended;
    if dst.len() <= end {
        return Err(StringError::BufferTooSmall);
    }
    dst[start..end].copy_from_slice(&src[..appended]);
    dst[end] = 0;
    Ok(end)
}
