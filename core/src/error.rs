use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read lister config at {path:?}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse lister config at {path:?}")]
    Parse {
        path:   PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}
