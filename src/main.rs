use std::fs::{self, File};
use std::io;
use std::path::Path;

use dcompconf::{Command, CompilerConfiguration, CompilerVendor, config_logger, parse_args};
use log::{debug, info};

/// 文档完整生成后才写文件，避免把原文件覆盖成半个文档
fn save_to(cfg: &CompilerConfiguration, output: Option<&Path>) -> io::Result<()> {
    let xml_content = cfg.to_xml()?;
    match output {
        Some(path) => {
            fs::write(path, xml_content)?;
            info!("Generated {}", path.display());
        }
        None => print!("{}", xml_content),
    }
    Ok(())
}

fn print_summary(cfg: &CompilerConfiguration) {
    println!("Vendor: {}", cfg.vendor);
    for t in cfg.targets() {
        println!("[{}]", t.target);
        println!("  compiler:        {}", t.compiler);
        println!("  linker:          {}", t.linker);
        println!("  object pattern:  {}", t.object_file_link_pattern);
        println!("  include pattern: {}", t.include_path_pattern);
        for (mode, args) in [("debug", &t.debug_arguments), ("release", &t.release_arguments)] {
            println!("  {} compile:   {}", mode, args.compiler_arguments);
            println!("  {} link:      {}", mode, args.linker_arguments);
        }
    }
    if !cfg.default_libraries.is_empty() {
        println!("Default libraries: {}", cfg.default_libraries.join(", "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();
    config_logger(args.debug)?;

    match args.command {
        Command::Init { vendor, output } => {
            let vendor = vendor.parse::<CompilerVendor>()?;
            let cfg = CompilerConfiguration::create_with_defaults(vendor);
            save_to(&cfg, output.as_deref())?;
        }
        Command::Show { file, json } => {
            let cfg = CompilerConfiguration::load(File::open(&file)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            } else {
                print_summary(&cfg);
            }
        }
        Command::Override {
            file,
            compiler,
            linker,
            debug_args,
            release_args,
            output,
        } => {
            let xml_content = fs::read_to_string(&file)?;
            let mut cfg = CompilerConfiguration::from_xml(&xml_content)?;

            if let Some(path) = compiler.as_deref() {
                debug!("Overriding compiler command with {}", path);
                cfg.set_all_compiler_commands(path);
            }
            if let Some(path) = linker.as_deref() {
                debug!("Overriding linker command with {}", path);
                cfg.set_all_linker_commands(path);
            }
            if let Some(arguments) = debug_args.as_deref() {
                cfg.set_all_compiler_build_args(arguments, true);
            }
            if let Some(arguments) = release_args.as_deref() {
                cfg.set_all_compiler_build_args(arguments, false);
            }

            let output = output.unwrap_or(file);
            save_to(&cfg, Some(output.as_path()))?;
        }
    }

    Ok(())
}
