use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Construction-time failures. Fatal: no graph is produced.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph requires at least one vertex")]
    NoVertices,
}

/// Failures while reading the node/edge CSV files.
///
/// Malformed or out-of-range rows are not errors: the loader warns and
/// keeps going, matching the per-row tolerance of the file format.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("\"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("\"{}\": no rows after the header", path.display())]
    Empty { path: PathBuf },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoadError::Io { path: path.into(), source }
    }
}
