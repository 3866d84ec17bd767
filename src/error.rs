use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown target kind '{0}'")]
    UnknownTargetKind(String),
    #[error("unknown compiler vendor '{0}', expected one of DMD, GDC, LDC")]
    UnknownVendor(String),
    #[error(transparent)]
    Xml(#[from] roxmltree::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
