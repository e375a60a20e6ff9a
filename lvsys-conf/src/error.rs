use std::path::PathBuf;

use lvsys_core::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid [lvgl] settings: {0}")]
    Invalid(ConfigError),

    #[error("Unknown driver '{0}' in [drivers]")]
    UnknownDriver(String),

    #[error("Environment variable {0} is required to be defined")]
    ConfigDirUnset(&'static str),

    #[error("Directory {} referenced by {var} needs to exist", path.display())]
    ConfigDirMissing { var: &'static str, path: PathBuf },

    #[error("{} referenced by {var} needs to be a directory", path.display())]
    ConfigDirNotADirectory { var: &'static str, path: PathBuf },

    #[error(
        "Directory {} referenced by {var} needs to contain a file called {file}",
        path.display()
    )]
    ConfigFileMissing {
        var: &'static str,
        path: PathBuf,
        file: &'static str,
    },
}

impl ConfError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ConfigError> for ConfError {
    fn from(err: ConfigError) -> Self {
        ConfError::Invalid(err)
    }
}

pub type Result<T> = std::result::Result<T, ConfError>;
