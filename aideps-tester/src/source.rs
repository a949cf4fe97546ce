//! Where the tester reads balance tables from.
use aideps_core::{BalanceConfig, DependencySource};
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: aideps_core::DependencyError,
    },
}

/// Balance table stored in a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DependencySource for FileSource {
    type Error = SourceError;

    fn load_config(&self) -> Result<BalanceConfig, Self::Error> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("read {} bytes from {}", json.len(), self.path.display());
        BalanceConfig::from_json(&json).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// The tables compiled into `aideps-core`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl DependencySource for BuiltinSource {
    type Error = Infallible;

    fn load_config(&self) -> Result<BalanceConfig, Self::Error> {
        Ok(BalanceConfig::standard())
    }
}
