// nmltree/src/formatting.rs

//! Rendering of payloads, entry lines and blocks back to namelist text.

use crate::value::{Payload, Value};
use std::fmt;

/// Options for controlling namelist output formatting.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Line terminator written after every block line
    pub line_ending: String,
    /// Render children that have children of their own as nested blocks
    /// instead of as single entry lines
    pub nested_blocks: bool,
    /// Force overwrite existing files
    pub force: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            line_ending: "\r\n".to_string(),
            nested_blocks: false,
            force: false,
        }
    }
}

impl Value {
    /// Render this node as text.
    ///
    /// A node with children becomes an `&key ... /` block holding one entry
    /// line per child, in key order. A node without children becomes its
    /// single entry line, with no line ending.
    pub fn dump(&self) -> String {
        self.dump_with_options(&WriteOptions::default())
    }

    /// Render this node with explicit options.
    pub fn dump_with_options(&self, options: &WriteOptions) -> String {
        if self.is_empty() {
            return self.leaf_line();
        }

        let mut output = String::new();
        self.write_block(&mut output, options);
        output
    }

    /// Render this node as a single `key = value ! comment` line.
    pub fn leaf_line(&self) -> String {
        let mut line = format!("{} = {}", self.key(), self.payload());
        if !self.comment().is_empty() {
            line.push_str(" ! ");
            line.push_str(self.comment());
        }
        line
    }

    fn write_block(&self, output: &mut String, options: &WriteOptions) {
        let eol = options.line_ending.as_str();

        output.push('&');
        output.push_str(self.key());
        output.push_str(eol);

        for child in self.children() {
            if options.nested_blocks && child.is_block() {
                child.write_block(output, options);
            } else {
                output.push_str(&child.leaf_line());
                output.push_str(eol);
            }
        }

        output.push('/');
        output.push_str(eol);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Empty => Ok(()),
            Payload::Boolean(b) => f.write_str(format_logical(*b)),
            Payload::Integer(i) => write!(f, "{}", i),
            Payload::Double(d) => f.write_str(&format_double(*d)),
            Payload::String(s) => write!(f, "\"{}\"", s),
            Payload::BooleanList(list) => {
                write_list(f, list.iter().map(|b| format_logical(*b).to_string()))
            }
            Payload::IntegerList(list) => write_list(f, list.iter().map(|i| i.to_string())),
            Payload::DoubleList(list) => write_list(f, list.iter().map(|d| format_double(*d))),
            Payload::StringList(list) => write_list(f, list.iter().map(|s| format!("\"{}\"", s))),
        }
    }
}

fn write_list<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: Iterator<Item = String>,
{
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(&item)?;
    }
    Ok(())
}

fn format_logical(value: bool) -> &'static str {
    if value {
        ".true."
    } else {
        ".false."
    }
}

fn format_double(value: f64) -> String {
    // Infinities are written as an overflowing exponent, which reads back
    // as a double and parses to the same infinity. NaN has no such form.
    if value.is_infinite() {
        return if value > 0.0 { "1e999" } else { "-1e999" }.to_string();
    }

    // Keep a decimal point so the text reads back as a double
    let s = value.to_string();
    if value.is_finite() && !s.contains(['.', 'e', 'E']) {
        format!("{}.0", s)
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_display() {
        assert_eq!(Payload::Empty.to_string(), "");
        assert_eq!(Payload::Boolean(true).to_string(), ".true.");
        assert_eq!(Payload::Boolean(false).to_string(), ".false.");
        assert_eq!(Payload::Integer(-42).to_string(), "-42");
        assert_eq!(Payload::Double(3.2).to_string(), "3.2");
        assert_eq!(Payload::Double(1.0).to_string(), "1.0");
        assert_eq!(Payload::Double(-0.5).to_string(), "-0.5");
        assert_eq!(Payload::String("fdasf".into()).to_string(), "\"fdasf\"");
        // No escaping of embedded quotes
        assert_eq!(Payload::String("a\"b".into()).to_string(), "\"a\"b\"");
    }

    #[test]
    fn test_infinite_double_reads_back_as_double() {
        assert_eq!(Payload::Double(f64::INFINITY).to_string(), "1e999");
        assert_eq!(Payload::Double(f64::NEG_INFINITY).to_string(), "-1e999");

        let root = crate::parse("&a\nx = 1e400, -1e400\n/\n");
        let dumped = root.at("a").unwrap().dump();
        assert_eq!(dumped, "&a\r\nx = 1e999, -1e999\r\n/\r\n");

        let reparsed = crate::parse(&dumped);
        let x = reparsed.at("a").unwrap().at("x").unwrap();
        assert_eq!(
            x.get::<Vec<f64>>().unwrap(),
            vec![f64::INFINITY, f64::NEG_INFINITY]
        );
    }

    #[test]
    fn test_list_display() {
        assert_eq!(
            Payload::BooleanList(vec![false, true]).to_string(),
            ".false., .true."
        );
        assert_eq!(Payload::IntegerList(vec![1, 2, 3]).to_string(), "1, 2, 3");
        assert_eq!(Payload::DoubleList(vec![1.0, 2.5]).to_string(), "1.0, 2.5");
        assert_eq!(
            Payload::StringList(vec!["a".into(), "b".into()]).to_string(),
            "\"a\", \"b\""
        );
        assert_eq!(Payload::IntegerList(vec![]).to_string(), "");
    }

    #[test]
    fn test_leaf_line() {
        let mut value = Value::named("accx_eq");
        value.set(12);
        assert_eq!(value.leaf_line(), "accx_eq = 12");

        value.set_comment("Test comment");
        assert_eq!(value.leaf_line(), "accx_eq = 12 ! Test comment");

        let empty = Value::named("unset");
        assert_eq!(empty.leaf_line(), "unset = ");
    }

    #[test]
    fn test_dump_leaf_has_no_wrapper() {
        let mut value = Value::new();
        value.set(".x.");
        assert_eq!(value.dump(), "General = \".x.\"");
    }

    #[test]
    fn test_dump_block_sorted() {
        let mut block = Value::named("ls");
        block.get_or_create("b").set(2);
        block.get_or_create("a").set(1);

        assert_eq!(block.dump(), "&ls\r\na = 1\r\nb = 2\r\n/\r\n");
        assert_eq!(block.to_string(), block.dump());
    }

    #[test]
    fn test_dump_block_skips_own_payload() {
        let mut block = Value::named("ls");
        block.set(99);
        block.get_or_create("a").set(1);
        assert_eq!(block.dump(), "&ls\r\na = 1\r\n/\r\n");
    }

    #[test]
    fn test_dump_is_one_level_deep_by_default() {
        let mut root = Value::named("outer");
        let inner = root.get_or_create("inner");
        inner.set(5);
        inner.get_or_create("deep").set(1);

        assert_eq!(root.dump(), "&outer\r\ninner = 5\r\n/\r\n");
    }

    #[test]
    fn test_dump_nested_blocks_option() {
        let mut root = Value::named("outer");
        root.get_or_create("a").set(true);
        root.get_or_create("inner").get_or_create("deep").set(1);

        let options = WriteOptions {
            line_ending: "\n".to_string(),
            nested_blocks: true,
            ..Default::default()
        };
        assert_eq!(
            root.dump_with_options(&options),
            "&outer\na = .true.\n&inner\ndeep = 1\n/\n/\n"
        );
    }
}
