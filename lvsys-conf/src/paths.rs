//! Locating the directory that holds `lv_conf.h` and `lv_drv_conf.h`

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ConfError, Result};

/// Variable naming the config directory
pub const CONFIG_DIR_VAR: &str = "DEP_LV_CONFIG_PATH";

/// Set when building documentation on docs.rs
pub const DOCS_RS_VAR: &str = "DOCS_RS";

pub const LV_CONF_H: &str = "lv_conf.h";
pub const LV_DRV_CONF_H: &str = "lv_drv_conf.h";

/// Where the config directory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by [`CONFIG_DIR_VAR`]
    Env,
    /// Vendored defaults
    Vendored,
}

/// Resolved config directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    pub path: PathBuf,
    pub source: ConfigSource,
}

impl ConfigDir {
    pub fn lv_conf(&self) -> PathBuf {
        self.path.join(LV_CONF_H)
    }

    pub fn lv_drv_conf(&self) -> PathBuf {
        self.path.join(LV_DRV_CONF_H)
    }
}

/// Pick and check the config directory
///
/// `env_value` wins when set. Otherwise `vendored` is used if given (docs
/// builds and the vendored-config option pass it), and resolution fails
/// with [`ConfError::ConfigDirUnset`] if not. `lv_drv_conf.h` is only
/// required when `require_drivers` is set.
pub fn resolve_config_dir(
    env_value: Option<PathBuf>,
    vendored: Option<&Path>,
    require_drivers: bool,
) -> Result<ConfigDir> {
    let dir = match (env_value, vendored) {
        (Some(path), _) => ConfigDir {
            path,
            source: ConfigSource::Env,
        },
        (None, Some(path)) => ConfigDir {
            path: path.to_path_buf(),
            source: ConfigSource::Vendored,
        },
        (None, None) => return Err(ConfError::ConfigDirUnset(CONFIG_DIR_VAR)),
    };

    if !dir.path.exists() {
        return Err(ConfError::ConfigDirMissing {
            var: CONFIG_DIR_VAR,
            path: dir.path,
        });
    }
    if !dir.path.is_dir() {
        return Err(ConfError::ConfigDirNotADirectory {
            var: CONFIG_DIR_VAR,
            path: dir.path,
        });
    }

    let mut required = vec![LV_CONF_H];
    if require_drivers {
        required.push(LV_DRV_CONF_H);
    }
    for file in required {
        if !dir.path.join(file).is_file() {
            return Err(ConfError::ConfigFileMissing {
                var: CONFIG_DIR_VAR,
                path: dir.path,
                file,
            });
        }
    }

    debug!(path = %dir.path.display(), source = ?dir.source, "config dir resolved");
    Ok(dir)
}

/// [`resolve_config_dir`] driven by the process environment
///
/// `vendored` is only consulted when [`DOCS_RS_VAR`] is set or
/// `allow_vendored` is true.
pub fn from_env(vendored: &Path, allow_vendored: bool, require_drivers: bool) -> Result<ConfigDir> {
    let env_value = env::var_os(CONFIG_DIR_VAR).map(PathBuf::from);
    let docs_rs = env::var_os(DOCS_RS_VAR).is_some();
    let fallback = (docs_rs || allow_vendored).then_some(vendored);

    if env_value.is_none() && fallback.is_some() {
        warn!(var = CONFIG_DIR_VAR, "not set, using vendored config");
    }
    resolve_config_dir(env_value, fallback, require_drivers)
}
