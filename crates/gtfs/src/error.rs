use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("could not open feed {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("malformed {file}: {source}")]
    Csv {
        file: &'static str,
        source: csv::Error,
    },
}
