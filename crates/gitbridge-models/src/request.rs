//! Action requests as submitted by the host application.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single option value in a request's option map.
///
/// The host sends options as loosely typed JSON; the grammar table decides
/// which kind each key must carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean flag, e.g. `{"force": true}`.
    Bool(bool),
    /// Integer value, e.g. `{"depth": 1}`.
    Int(i64),
    /// String value, e.g. `{"branch": "main"}`.
    Text(String),
    /// List of strings, e.g. `{"files": ["a.txt", "b.txt"]}`.
    List(Vec<String>),
}

impl OptionValue {
    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string value, if this is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list value, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            OptionValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Int(n)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(items: Vec<String>) -> Self {
        OptionValue::List(items)
    }
}

/// A request to perform one named git action.
///
/// Immutable once dispatched: the bridge consumes the request, builds one
/// command from it, and fires exactly one reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    /// Action name, e.g. `"commit"` or `"isRepository"`.
    pub name: String,

    /// Directory the command runs in.
    pub working_directory: PathBuf,

    /// Positional arguments, in the order the action's grammar expects.
    #[serde(default)]
    pub positional_args: Vec<String>,

    /// Structured options keyed by option name.
    #[serde(default)]
    pub options: HashMap<String, OptionValue>,
}

impl ActionRequest {
    /// Creates a request with no positional arguments or options.
    pub fn new(name: impl Into<String>, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            working_directory: working_directory.into(),
            positional_args: Vec::new(),
            options: HashMap::new(),
        }
    }

    /// Appends a positional argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.positional_args.push(arg.into());
        self
    }

    /// Appends several positional arguments.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positional_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets an option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Looks up an option by key.
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }
}
