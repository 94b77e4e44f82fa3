use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("could not read {}", .path.display())]
    #[diagnostic(
        code(figma_tokens::read),
        help("run from the directory holding the exported figma-data.json")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid document export", .path.display())]
    #[diagnostic(code(figma_tokens::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write {}", .path.display())]
    #[diagnostic(code(figma_tokens::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize output")]
    #[diagnostic(code(figma_tokens::serialize))]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
