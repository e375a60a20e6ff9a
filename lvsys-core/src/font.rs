//! Font asset declarations
//!
//! Custom fonts are C files generated by the LVGL font converter. Each one
//! comes with a header declaring the font object, either as
//! `extern lv_font_t name;` or with the `LV_FONT_DECLARE(name)` macro.

use core::fmt;

use heapless::String;

/// Longest accepted font symbol
pub const MAX_SYMBOL_LEN: usize = 64;

/// Declaration of one font object exported by C code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontDecl {
    symbol: String<MAX_SYMBOL_LEN>,
}

impl FontDecl {
    /// Declaration for a C identifier
    ///
    /// Returns `None` if `symbol` is not a valid identifier or is too long.
    pub fn new(symbol: &str) -> Option<Self> {
        if !is_identifier(symbol) {
            return None;
        }
        let mut s = String::new();
        s.push_str(symbol).ok()?;
        Some(Self { symbol: s })
    }

    /// Recognize a declaration on one line of a C header
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("LV_FONT_DECLARE") {
            let inner = rest.trim_start().strip_prefix('(')?;
            let end = inner.find(')')?;
            return Self::new(inner[..end].trim());
        }

        let rest = line.strip_prefix("extern")?;
        let rest = rest.trim_start();
        let rest = rest
            .strip_prefix("const")
            .map(str::trim_start)
            .unwrap_or(rest);
        let rest = rest.strip_prefix("lv_font_t")?;
        // Require whitespace between the type and the name
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let name = rest.trim().strip_suffix(';')?.trim_end();
        Self::new(name)
    }

    /// Linker symbol of the font object
    pub fn symbol(&self) -> &str {
        self.symbol.as_str()
    }
}

impl fmt::Display for FontDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "extern lv_font_t {};", self.symbol)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extern() {
        let decl = FontDecl::parse_line("extern lv_font_t noto_sans_numeric_80;").unwrap();
        assert_eq!(decl.symbol(), "noto_sans_numeric_80");

        let decl = FontDecl::parse_line("  extern const lv_font_t  my_font ;").unwrap();
        assert_eq!(decl.symbol(), "my_font");
    }

    #[test]
    fn test_parse_macro() {
        let decl = FontDecl::parse_line("LV_FONT_DECLARE(montserrat_custom_20)").unwrap();
        assert_eq!(decl.symbol(), "montserrat_custom_20");
    }

    #[test]
    fn test_parse_rejects_other_lines() {
        assert!(FontDecl::parse_line("#include \"lvgl/lvgl.h\"").is_none());
        assert!(FontDecl::parse_line("extern lv_font_t;").is_none());
        assert!(FontDecl::parse_line("extern lv_font_tx foo;").is_none());
        assert!(FontDecl::parse_line("extern lv_img_dsc_t logo;").is_none());
        assert!(FontDecl::parse_line("extern lv_font_t 80font;").is_none());
    }

    #[test]
    fn test_display_renders_declaration() {
        let decl = FontDecl::new("noto_sans_numeric_80").unwrap();
        assert_eq!(
            std::format!("{decl}"),
            "extern lv_font_t noto_sans_numeric_80;"
        );
    }

    #[test]
    fn test_symbol_too_long() {
        let long = "a".repeat(MAX_SYMBOL_LEN + 1);
        assert!(FontDecl::new(&long).is_none());
    }
}
