// 公共API暴露
mod cli;
mod config;
mod defaults;
mod error;
mod generator;
mod models;
mod parser;
mod utils;

pub use cli::{CliArgs, Command, parse_args};
pub use config::CompilerConfiguration;
pub use defaults::VendorDefaults;
pub use error::{ConfigError, Result};
pub use generator::{DOCUMENT_ROOT, XmlWriter};
pub use models::{
    BuildArguments, CompileTarget, CompilerVendor, DEFAULT_INCLUDE_PATH_PATTERN,
    DEFAULT_OBJECT_FILE_LINK_PATTERN, TargetConfiguration,
};
pub use utils::config_logger;
