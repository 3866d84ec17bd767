use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 命令行参数结构
#[derive(Debug, Parser)]
#[command(name = "dcompconf", version, about = "Manage D compiler build configurations")]
pub struct CliArgs {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a configuration populated with the vendor's defaults
    Init {
        /// DMD, GDC or LDC
        vendor: String,
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a saved configuration
    Show {
        file: PathBuf,
        /// Dump the model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Override commands or arguments on every target of a saved configuration
    Override {
        file: PathBuf,
        #[arg(long)]
        compiler: Option<String>,
        #[arg(long)]
        linker: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        debug_args: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        release_args: Option<String>,
        /// Output file, overwrites the input when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// 解析命令行参数
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
