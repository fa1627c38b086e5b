//! Configuration for polscan.
//!
//! Values are merged from, in increasing precedence:
//!
//! 1. built-in defaults (`./data/raw` and `./data/processed`),
//! 2. an optional TOML file with `root_directory` and `output_directory` keys,
//! 3. the `RAW_DOCUMENTS_PATH` and `PROCESSED_DOCUMENTS_PATH` environment
//!    variables.
//!
//! The resulting [`Config`] is handed to the scanner and exporter explicitly;
//! nothing else in the workspace reads the environment.

pub mod error;

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`Config::root_directory`].
pub const ROOT_DIRECTORY_ENV: &str = "RAW_DOCUMENTS_PATH";
/// Environment variable overriding [`Config::output_directory`].
pub const OUTPUT_DIRECTORY_ENV: &str = "PROCESSED_DOCUMENTS_PATH";

const DEFAULT_ROOT_DIRECTORY: &str = "./data/raw";
const DEFAULT_OUTPUT_DIRECTORY: &str = "./data/processed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing one folder per policy manual.
    pub root_directory: PathBuf,
    /// Directory the metadata table is written to.
    pub output_directory: PathBuf,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            root_directory: PathBuf::from(DEFAULT_ROOT_DIRECTORY),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
        }
    }
}
impl Config {
    /// Builds the layered [`Figment`] without extracting it.
    ///
    /// Relative `file` paths are resolved against the working directory only;
    /// parent directories are not searched.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(file) = file {
            figment = figment.merge(Toml::file_exact(file));
        }
        figment.merge(Env::raw().only(&[ROOT_DIRECTORY_ENV, OUTPUT_DIRECTORY_ENV]).map(|key| {
            if key.as_str().eq_ignore_ascii_case(ROOT_DIRECTORY_ENV) {
                "root_directory".into()
            } else if key.as_str().eq_ignore_ascii_case(OUTPUT_DIRECTORY_ENV) {
                "output_directory".into()
            } else {
                key.as_str().into()
            }
        }))
    }

    /// Loads the configuration from all sources.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::MissingFile`] if `file` was given but doesn't exist.
    /// - [`ErrorKind::Invalid`] if the file can't be parsed or a value has the
    ///   wrong type.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        if let Some(file) = file
            && !file.is_file()
        {
            exn::bail!(ErrorKind::MissingFile(file.to_path_buf()));
        }
        let config: Config = Self::figment(file).extract().or_raise(|| ErrorKind::Invalid)?;
        tracing::debug!(
            root_directory = %config.root_directory.display(),
            output_directory = %config.output_directory.display(),
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn with_root_directory(mut self, root_directory: impl Into<PathBuf>) -> Self {
        self.root_directory = root_directory.into();
        self
    }

    pub fn with_output_directory(mut self, output_directory: impl Into<PathBuf>) -> Self {
        self.output_directory = output_directory.into();
        self
    }
}
