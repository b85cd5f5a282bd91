// nmltree/src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use nmltree::{ParseOptions, Value, WriteOptions};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nmltree")]
#[command(about = "Parse a namelist-style file and print it back", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Only print this block
    #[arg(short, long, value_name = "NAME")]
    block: Option<String>,

    /// Print the parsed tree as JSON
    #[arg(long)]
    json: bool,

    /// Store entries outside any block directly under the root
    #[arg(long)]
    flat: bool,

    /// Render children with children of their own as nested blocks
    #[arg(long)]
    nested: bool,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs_err::read_to_string(path).context("Failed to read input file"),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "json")]
fn print_json(value: &Value) -> Result<()> {
    println!("{}", nmltree::to_json(value)?);
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_json(_value: &Value) -> Result<()> {
    anyhow::bail!("JSON output requires the 'json' feature")
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let text = read_input(cli.input.as_ref())?;
    let parse_options = ParseOptions {
        nest_top_level: !cli.flat,
        ..Default::default()
    };
    let root = nmltree::parse_with_options(&text, &parse_options);
    log::debug!("parsed {} top-level entries", root.len());

    let selected = match cli.block.as_deref() {
        Some(name) => root.at(name)?,
        None => &root,
    };

    if cli.json {
        return print_json(selected);
    }

    let write_options = WriteOptions {
        nested_blocks: cli.nested,
        ..Default::default()
    };
    if cli.block.is_some() {
        print!("{}", selected.dump_with_options(&write_options));
    } else {
        for child in root.children() {
            print!("{}", child.dump_with_options(&write_options));
            if !child.is_block() {
                print!("{}", write_options.line_ending);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
