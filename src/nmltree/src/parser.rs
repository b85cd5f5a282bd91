// nmltree/src/parser.rs

//! Line-oriented parser turning namelist-style text into a `Value` tree.
//!
//! The parser is lenient: lines it cannot make sense of are dropped and
//! tokens that do not convert become `0`, `0.0` or `.false.`. Nothing in
//! here returns an error; dropped input is only visible at `trace` log level.

use crate::value::{Payload, Value, ValueType, DEFAULT_ROOT_KEY};
use log::{debug, trace};

/// Options controlling how text is turned into a tree.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Key of the returned root node
    pub root_key: String,
    /// Store an entry found outside any block as `root[key][key]` instead
    /// of `root[key]`
    pub nest_top_level: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            root_key: DEFAULT_ROOT_KEY.to_string(),
            nest_top_level: true,
        }
    }
}

/// A parser over a complete namelist document.
pub struct Parser<'a> {
    input: &'a str,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input with default options.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Create a new parser with explicit options.
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self { input, options }
    }

    /// Parse the input and return the root node.
    pub fn parse(&self) -> Value {
        let mut root = Value::named(self.options.root_key.as_str());
        let mut current: Option<String> = None;

        for (index, raw) in self.input.split('\n').enumerate() {
            let line_no = index + 1;
            let line = raw.trim();

            // Full-line comment
            if line.starts_with('!') {
                continue;
            }

            let line = strip_comment(line);
            if line.is_empty() {
                continue;
            }

            if let Some(name) = line.strip_prefix('&') {
                let name = name.trim();
                debug!("line {}: opening block '{}'", line_no, name);
                root.get_or_create(name);
                current = Some(name.to_string());
                continue;
            }

            if line.starts_with('/') {
                if let Some(name) = current.take() {
                    debug!("line {}: closing block '{}'", line_no, name);
                }
                continue;
            }

            let Some((key, rest)) = line.split_once('=') else {
                trace!("line {}: no '=' in {:?}, skipped", line_no, line);
                continue;
            };

            let key = key.trim();
            let value_text = strip_comment(rest);
            if key.is_empty() || value_text.is_empty() {
                trace!("line {}: empty key or value in {:?}, skipped", line_no, line);
                continue;
            }

            let Some(payload) = parse_payload(value_text) else {
                continue;
            };

            let target = match current.as_deref() {
                Some(block) => root.get_or_create(block).get_or_create(key),
                None if self.options.nest_top_level => {
                    root.get_or_create(key).get_or_create(key)
                }
                None => root.get_or_create(key),
            };
            target.set(payload);
        }

        root
    }
}

/// Scalar kinds a value text can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScalarKind {
    Boolean,
    Integer,
    Double,
    String,
}

impl ScalarKind {
    fn detect(token: &str) -> Self {
        let token = token.trim();
        if is_quoted(token) {
            ScalarKind::String
        } else if token.eq_ignore_ascii_case(".true.") || token.eq_ignore_ascii_case(".false.") {
            ScalarKind::Boolean
        } else if token.contains(['.', 'e', 'E']) {
            ScalarKind::Double
        } else {
            ScalarKind::Integer
        }
    }

    fn value_type(self) -> ValueType {
        match self {
            ScalarKind::Boolean => ValueType::Boolean,
            ScalarKind::Integer => ValueType::Integer,
            ScalarKind::Double => ValueType::Double,
            ScalarKind::String => ValueType::String,
        }
    }
}

/// Classify a single token as one of the four scalar kinds.
///
/// A token wrapped in double quotes is a string, `.true.`/`.false.` in any
/// case is a boolean, anything containing `.`, `e` or `E` is a double and
/// everything else is an integer.
pub fn classify(token: &str) -> ValueType {
    ScalarKind::detect(token).value_type()
}

/// Drop a trailing `!` comment that is not inside a double-quoted string.
///
/// The result is trimmed.
pub fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (pos, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '!' if !in_string => return line[..pos].trim(),
            _ => {}
        }
    }
    line.trim()
}

/// Convert the text right of `=` into a payload.
///
/// The text is split on commas and the kind of the first item decides the
/// kind of every item. A single item gives a scalar, several give a list.
/// Returns `None` only for blank input.
pub fn parse_payload(value_text: &str) -> Option<Payload> {
    if value_text.trim().is_empty() {
        return None;
    }

    let items: Vec<&str> = value_text.split(',').map(str::trim).collect();
    let first = *items.first()?;
    let kind = ScalarKind::detect(first);

    let payload = if items.len() == 1 {
        match kind {
            ScalarKind::Boolean => Payload::Boolean(parse_logical(first)),
            ScalarKind::Integer => Payload::Integer(parse_integer(first)),
            ScalarKind::Double => Payload::Double(parse_double(first)),
            ScalarKind::String => Payload::String(strip_quotes(first).to_string()),
        }
    } else {
        match kind {
            ScalarKind::Boolean => {
                Payload::BooleanList(items.iter().map(|item| parse_logical(item)).collect())
            }
            ScalarKind::Integer => {
                Payload::IntegerList(items.iter().map(|item| parse_integer(item)).collect())
            }
            ScalarKind::Double => {
                Payload::DoubleList(items.iter().map(|item| parse_double(item)).collect())
            }
            ScalarKind::String => Payload::StringList(
                items
                    .iter()
                    .map(|item| strip_quotes(item).to_string())
                    .collect(),
            ),
        }
    };

    Some(payload)
}

fn is_quoted(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('"') && token.ends_with('"')
}

fn strip_quotes(token: &str) -> &str {
    if is_quoted(token) {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

fn parse_logical(token: &str) -> bool {
    token.eq_ignore_ascii_case(".true.")
}

fn parse_integer(token: &str) -> i64 {
    token.parse().unwrap_or_else(|_| {
        trace!("unparseable integer {:?}, using 0", token);
        0
    })
}

fn parse_double(token: &str) -> f64 {
    token.parse().unwrap_or_else(|_| {
        trace!("unparseable double {:?}, using 0.0", token);
        0.0
    })
}
