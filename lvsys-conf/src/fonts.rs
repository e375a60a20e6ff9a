//! Discovery of converted font sources
//!
//! Declarations come from the `*.h` files directly inside the font
//! directory. C sources are every `*.c` file below it, at any depth, so a
//! single header may declare fonts whose glyph tables live in separate
//! files.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use lvsys_core::font::FontDecl;
use tracing::debug;

use crate::error::{ConfError, Result};

/// Variable naming an extra font directory
pub const FONTS_DIR_VAR: &str = "LVGL_FONTS_DIR";

/// A font header and the declarations found in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontHeaderFile {
    pub path: PathBuf,
    pub decls: Vec<FontDecl>,
}

/// Everything a font directory contributes to the build
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontAssets {
    /// Headers with at least one declaration, sorted by path
    pub headers: Vec<FontHeaderFile>,
    /// C sources to compile, sorted by path
    pub sources: Vec<PathBuf>,
}

impl FontAssets {
    /// Every declaration, in header order
    pub fn decls(&self) -> impl Iterator<Item = &FontDecl> {
        self.headers.iter().flat_map(|h| h.decls.iter())
    }
}

/// Absolute form of `path`, without the Windows verbatim prefix
fn canonicalize(path: &Path) -> Result<PathBuf> {
    let canonical = path.canonicalize().map_err(|e| ConfError::io(path, e))?;
    let stripped = canonical
        .to_string_lossy()
        .strip_prefix(r"\\?\")
        .map(PathBuf::from);
    Ok(stripped.unwrap_or(canonical))
}

/// Extra font directory for a build rooted at `cwd`
///
/// [`FONTS_DIR_VAR`] wins when set and is canonicalized, so a relative
/// value is taken against the process working directory and must exist.
/// Otherwise `cwd/fonts` is used if it exists.
pub fn fonts_dir(cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(dir) = env::var_os(FONTS_DIR_VAR) {
        return canonicalize(Path::new(&dir)).map(Some);
    }
    let dir = cwd.join("fonts");
    Ok(dir.is_dir().then_some(dir))
}

/// Scan a font directory
///
/// Only the top level is searched for headers; headers without a font
/// declaration are skipped. Sources are collected recursively.
pub fn scan(dir: &Path) -> Result<FontAssets> {
    let entries = fs::read_dir(dir).map_err(|e| ConfError::io(dir, e))?;

    let mut headers = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ConfError::io(dir, e))?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("h") || !path.is_file() {
            continue;
        }

        let text = fs::read_to_string(&path).map_err(|e| ConfError::io(&path, e))?;
        let decls: Vec<FontDecl> = text.lines().filter_map(FontDecl::parse_line).collect();
        if decls.is_empty() {
            debug!(header = %path.display(), "no font declarations");
            continue;
        }
        headers.push(FontHeaderFile { path, decls });
    }
    headers.sort_by(|a, b| a.path.cmp(&b.path));

    let mut sources = Vec::new();
    collect_c_sources(dir, &mut sources)?;
    sources.sort();

    debug!(
        dir = %dir.display(),
        headers = headers.len(),
        sources = sources.len(),
        "font directory scanned"
    );
    Ok(FontAssets { headers, sources })
}

fn collect_c_sources(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| ConfError::io(dir, e))? {
        let entry = entry.map_err(|e| ConfError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| ConfError::io(&path, e))?;
        if file_type.is_dir() {
            collect_c_sources(&path, out)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("c") {
            out.push(path);
        }
    }
    Ok(())
}
