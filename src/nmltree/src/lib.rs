// nmltree/src/lib.rs

//! A typed key-value tree with a Fortran-namelist-style text codec.
//!
//! This library provides functionality to:
//! - Parse namelist-style text (`&block ... /`, `key = value`, `!` comments) into a `Value` tree
//! - Read and write scalar and list payloads of four kinds: boolean, integer, double, string
//! - Render a tree back to text, one `key = value ! comment` line per entry
//! - Convert trees to and from JSON (with the `json` feature)

pub mod error;
pub mod formatting;
pub mod parser;
pub mod value;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub use error::{NmlError, Result};
pub use formatting::WriteOptions;
pub use parser::{ParseOptions, Parser};
pub use value::{Payload, PayloadType, Value, ValueType};

/// Parse namelist text into a tree rooted at a node keyed `"General"`.
///
/// Parsing never fails; malformed lines are dropped.
///
/// # Examples
///
/// ```
/// let root = nmltree::parse("&ls\n  iphase_ls = 1\n/\n");
/// let phase = root.at("ls")?.at("iphase_ls")?.get::<i64>()?;
/// assert_eq!(phase, 1);
/// # Ok::<(), nmltree::NmlError>(())
/// ```
pub fn parse(content: &str) -> Value {
    Parser::new(content).parse()
}

/// Parse namelist text with explicit options.
pub fn parse_with_options(content: &str, options: &ParseOptions) -> Value {
    Parser::with_options(content, options.clone()).parse()
}

/// Parse a namelist from a file path.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), nmltree::NmlError> {
///     let root = nmltree::read("param.nml")?;
///     println!("{}", root.at("ls")?.dump());
///     Ok(())
/// }
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<Value> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(parse(&contents))
}

/// Write a rendered tree to a file.
///
/// Refuses to replace an existing file unless `options.force` is set.
pub fn write<P: AsRef<Path>>(value: &Value, path: P, options: &WriteOptions) -> Result<()> {
    let path = path.as_ref();

    if !options.force && path.exists() {
        return Err(NmlError::FileAlreadyExists(path.to_path_buf()));
    }

    let mut file = File::create(path)?;
    write_to_writer(value, &mut file, options)
}

/// Write a rendered tree to any writer implementing the Write trait.
pub fn write_to_writer<W: Write>(value: &Value, writer: &mut W, options: &WriteOptions) -> Result<()> {
    let formatted = value.dump_with_options(options);
    writer.write_all(formatted.as_bytes())?;
    Ok(())
}

#[cfg(feature = "json")]
/// Convert a tree to a JSON string.
pub fn to_json(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(NmlError::from)
}

#[cfg(feature = "json")]
/// Parse a tree from a JSON string.
pub fn from_json(json: &str) -> Result<Value> {
    serde_json::from_str(json).map_err(NmlError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let root = parse("&data_nml\nx = 1\ny = 2.0\nz = .true.\n/");

        let group = root.at("data_nml").unwrap();
        assert_eq!(group.at("x").unwrap().get::<i64>().unwrap(), 1);
        assert_eq!(group.at("y").unwrap().get::<f64>().unwrap(), 2.0);
        assert!(group.at("z").unwrap().get::<bool>().unwrap());
    }

    #[test]
    fn test_parse_with_options_flat() {
        let options = ParseOptions {
            nest_top_level: false,
            ..Default::default()
        };
        let root = parse_with_options("x = 1", &options);
        assert_eq!(root.at("x").unwrap().get::<i64>().unwrap(), 1);
    }

    #[test]
    fn test_write_to_writer() {
        let mut root = Value::new();
        let group = root.get_or_create("data_nml");
        group.get_or_create("x").set(1);
        group.get_or_create("enabled").set(true);

        let mut output = Vec::new();
        write_to_writer(root.at("data_nml").unwrap(), &mut output, &WriteOptions::default())
            .unwrap();

        let result = String::from_utf8(output).unwrap();
        assert_eq!(result, "&data_nml\r\nenabled = .true.\r\nx = 1\r\n/\r\n");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_roundtrip() {
        let root = parse("&data_nml\nx = 1\ny = 2.0, 3.0\nz = .true.\n/");

        let json = to_json(&root).unwrap();
        let from_json = from_json(&json).unwrap();

        assert_eq!(root, from_json);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_rekeys_children() {
        let json = r#"{"key":"General","payload":"Empty","children":{"ls":{"key":"other","payload":{"Integer":1}}}}"#;
        let root = from_json(json).unwrap();

        let ls = root.at("ls").unwrap();
        assert_eq!(ls.key(), "ls");
        assert_eq!(ls.dump(), "ls = 1");
    }
}
