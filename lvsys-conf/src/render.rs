//! C header generation
//!
//! Each header is a [`fmt::Display`] wrapper so it can be written straight
//! into a file or rendered to a `String`.

use std::fmt;

use lvsys_core::config::LvConfig;
use lvsys_core::drivers::{header_rules, Driver, DriverSelection};
use lvsys_core::font::FontDecl;

fn flag(on: bool) -> u8 {
    u8::from(on)
}

/// `lv_conf.h`
pub struct LvConfHeader<'a>(pub &'a LvConfig);

impl fmt::Display for LvConfHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        writeln!(f, "/* Generated by lvsys-confgen */")?;
        writeln!(f, "#if 1")?;
        writeln!(f, "#ifndef LV_CONF_H")?;
        writeln!(f, "#define LV_CONF_H")?;
        writeln!(f)?;
        writeln!(f, "#include <stdint.h>")?;
        writeln!(f)?;
        writeln!(f, "/* Color settings */")?;
        writeln!(f, "#define LV_COLOR_DEPTH {}", c.color_depth.bits())?;
        writeln!(f, "#define LV_COLOR_16_SWAP {}", flag(c.color_16_swap))?;
        writeln!(f, "#define LV_COLOR_SCREEN_TRANSP {}", flag(c.color_screen_transp))?;
        writeln!(f, "#define LV_COLOR_MIX_ROUND_OFS {}", c.color_mix_round_ofs.value())?;
        writeln!(
            f,
            "#define LV_COLOR_CHROMA_KEY lv_color_hex({:#08x})",
            c.color_chroma_hex
        )?;
        writeln!(f)?;
        writeln!(f, "/* Memory settings */")?;
        writeln!(f, "#define LV_MEM_CUSTOM 0")?;
        writeln!(f, "#define LV_MEM_SIZE ({}U * 1024U)", c.mem_size_kib)?;
        writeln!(f)?;
        writeln!(f, "/* HAL settings */")?;
        writeln!(f, "#define LV_DISP_DEF_REFR_PERIOD {}", c.disp_def_refr_period)?;
        writeln!(f, "#define LV_INDEV_DEF_READ_PERIOD {}", c.indev_def_read_period)?;
        writeln!(f, "#define LV_DPI_DEF {}", c.dpi_def)?;
        writeln!(f)?;
        writeln!(f, "/* Logging */")?;
        writeln!(f, "#define LV_USE_LOG {}", flag(c.use_log))?;
        if c.use_log {
            writeln!(f, "#define LV_LOG_LEVEL {}", c.log_level.c_name())?;
            writeln!(f, "#define LV_LOG_PRINTF {}", flag(c.log_printf))?;
        }
        writeln!(f)?;
        writeln!(f, "/* Compiler settings */")?;
        writeln!(f, "#define LV_BIG_ENDIAN_SYSTEM {}", flag(c.big_endian_system))?;
        writeln!(f)?;
        writeln!(f, "#endif /*LV_CONF_H*/")?;
        writeln!(f, "#endif")
    }
}

/// `lv_drv_conf.h` with one `USE_*` flag per backend
pub struct DrvConfHeader<'a>(pub &'a DriverSelection);

impl fmt::Display for DrvConfHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/* Generated by lvsys-confgen */")?;
        writeln!(f, "#if 1")?;
        writeln!(f, "#ifndef LV_DRV_CONF_H")?;
        writeln!(f, "#define LV_DRV_CONF_H")?;
        writeln!(f)?;
        writeln!(f, "#include \"lv_conf.h\"")?;
        writeln!(f)?;
        for driver in Driver::all() {
            writeln!(
                f,
                "#define {} {}",
                driver.flag(),
                flag(self.0.is_enabled(driver))
            )?;
        }
        writeln!(f)?;
        writeln!(f, "#endif /*LV_DRV_CONF_H*/")?;
        writeln!(f, "#endif")
    }
}

/// Umbrella header including each driver header its flags enable
pub struct DrvUmbrellaHeader;

impl fmt::Display for DrvUmbrellaHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#ifdef __cplusplus")?;
        writeln!(f, "extern \"C\" {{")?;
        writeln!(f, "#endif")?;
        writeln!(f)?;
        writeln!(f, "#ifndef LVGL_DRV_H")?;
        writeln!(f, "#define LVGL_DRV_H")?;
        writeln!(f)?;
        writeln!(f, "#include \"lv_drv_conf.h\"")?;

        let mut in_inputs = false;
        writeln!(f)?;
        writeln!(f, "/* Displays */")?;
        for rule in header_rules() {
            let is_input = matches!(rule.drivers.first(), Some(Driver::Input(_)));
            if is_input && !in_inputs {
                in_inputs = true;
                writeln!(f)?;
                writeln!(f, "/* Input devices */")?;
            }
            writeln!(f)?;
            write!(f, "#if ")?;
            for (i, flag) in rule.flags().enumerate() {
                if i > 0 {
                    write!(f, " || ")?;
                }
                write!(f, "{flag}")?;
            }
            writeln!(f)?;
            writeln!(f, "#include \"{}\"", rule.header)?;
            writeln!(f, "#endif")?;
        }

        writeln!(f)?;
        writeln!(f, "#endif /* LVGL_DRV_H */")?;
        writeln!(f)?;
        writeln!(f, "#ifdef __cplusplus")?;
        writeln!(f, "}} /* extern \"C\" */")?;
        writeln!(f, "#endif")
    }
}

/// Header declaring every extra font object
pub struct FontHeader<'a>(pub &'a [FontDecl]);

impl fmt::Display for FontHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#ifndef LVSYS_FONTS_H")?;
        writeln!(f, "#define LVSYS_FONTS_H")?;
        writeln!(f)?;
        writeln!(f, "#include \"lvgl/lvgl.h\"")?;
        writeln!(f)?;
        writeln!(f, "#ifdef __cplusplus")?;
        writeln!(f, "extern \"C\" {{")?;
        writeln!(f, "#endif")?;
        writeln!(f)?;
        for decl in self.0 {
            writeln!(f, "{decl}")?;
        }
        writeln!(f)?;
        writeln!(f, "#ifdef __cplusplus")?;
        writeln!(f, "}}")?;
        writeln!(f, "#endif")?;
        writeln!(f, "#endif")
    }
}

pub fn render_lv_conf(config: &LvConfig) -> String {
    LvConfHeader(config).to_string()
}

pub fn render_drv_conf(drivers: &DriverSelection) -> String {
    DrvConfHeader(drivers).to_string()
}

pub fn render_drv_umbrella() -> String {
    DrvUmbrellaHeader.to_string()
}

pub fn render_font_header(decls: &[FontDecl]) -> String {
    FontHeader(decls).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lvsys_core::color::ColorDepth;
    use lvsys_core::config::LogLevel;
    use lvsys_core::drivers::{DisplayDriver, InputDriver};

    #[test]
    fn test_lv_conf_defaults() {
        let out = render_lv_conf(&LvConfig::default());
        assert!(out.contains("#define LV_COLOR_DEPTH 16\n"));
        assert!(out.contains("#define LV_COLOR_16_SWAP 0\n"));
        assert!(out.contains("#define LV_COLOR_MIX_ROUND_OFS 128\n"));
        assert!(out.contains("#define LV_COLOR_CHROMA_KEY lv_color_hex(0x00ff00)\n"));
        assert!(out.contains("#define LV_MEM_SIZE (48U * 1024U)\n"));
        assert!(out.contains("#define LV_USE_LOG 0\n"));
        assert!(!out.contains("LV_LOG_LEVEL"));
        assert!(out.trim_end().ends_with("#endif"));
    }

    #[test]
    fn test_lv_conf_logging() {
        let config = LvConfig {
            color_depth: ColorDepth::D32,
            use_log: true,
            log_level: LogLevel::Trace,
            log_printf: true,
            ..LvConfig::default()
        };
        let out = render_lv_conf(&config);
        assert!(out.contains("#define LV_COLOR_DEPTH 32\n"));
        assert!(out.contains("#define LV_LOG_LEVEL LV_LOG_LEVEL_TRACE\n"));
        assert!(out.contains("#define LV_LOG_PRINTF 1\n"));
    }

    #[test]
    fn test_drv_conf_lists_every_flag() {
        let selection = DriverSelection::new()
            .with(DisplayDriver::Fbdev)
            .with(InputDriver::Evdev);
        let out = render_drv_conf(&selection);
        assert!(out.contains("#define USE_FBDEV 1\n"));
        assert!(out.contains("#define USE_EVDEV 1\n"));
        assert!(out.contains("#define USE_MONITOR 0\n"));
        assert!(out.contains("#define USE_BSD_EVDEV 0\n"));
        assert_eq!(out.matches("#define USE_").count(), Driver::all().count());
    }

    #[test]
    fn test_umbrella_shared_headers() {
        let out = render_drv_umbrella();
        assert!(out.contains(
            "#if USE_FBDEV || USE_BSD_FBDEV\n#include \"lv_drivers/display/fbdev.h\"\n#endif\n"
        ));
        assert!(out.contains(
            "#if USE_EVDEV || USE_BSD_EVDEV\n#include \"lv_drivers/indev/evdev.h\"\n#endif\n"
        ));
        assert_eq!(out.matches("lv_drivers/display/fbdev.h").count(), 1);
    }

    #[test]
    fn test_umbrella_sections_in_order() {
        let out = render_drv_umbrella();
        let displays = out.find("/* Displays */").unwrap();
        let inputs = out.find("/* Input devices */").unwrap();
        let monitor = out.find("USE_MONITOR").unwrap();
        let mouse = out.find("USE_MOUSE\n").unwrap();
        assert!(displays < monitor && monitor < inputs && inputs < mouse);
    }

    #[test]
    fn test_font_header() {
        let decls = [FontDecl::new("noto_sans_numeric_80").unwrap()];
        let out = render_font_header(&decls);
        assert!(out.contains("extern lv_font_t noto_sans_numeric_80;\n"));
        assert!(out.starts_with("#ifndef LVSYS_FONTS_H\n"));
    }
}
