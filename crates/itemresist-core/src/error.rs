//! Errors raised while loading classification tags

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("failed to read tag file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tag file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("tag {tag} references unknown material {name}")]
    UnknownMaterial { tag: String, name: String },

    #[error("tag {tag} references {name}, which is not a placeable block")]
    NotPlaceable { tag: String, name: String },
}
