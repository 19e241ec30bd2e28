//! Error types for schema compilation and value processing.
//!
//! Two kinds of failure exist. Compiling a schema object can fail with a
//! [`SchemaError`], which is an ordinary Rust error. Processing a value
//! (deserialize, serialize, validate) never fails hard: it produces a
//! [`Diagnostics`] list of human-readable messages that the caller inspects.

use std::fmt;

/// Errors raised while compiling a schema object against a format registry.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema object is not a JSON object
    #[error("Schema must be a JSON object")]
    NotAnObject,

    /// The `type` keyword is missing
    #[error("Schema is missing the required 'type' keyword")]
    MissingType,

    /// The `type` keyword names an unknown primitive type
    #[error("Unknown schema type: {data_type}")]
    UnknownType { data_type: String },

    /// No handler is registered for the type/format pair
    #[error("No format '{format}' registered for type '{data_type}' in {version}")]
    UnknownFormat {
        data_type: String,
        format: String,
        version: String,
    },

    /// A range keyword was given for a format that is not numeric
    #[error("Keyword '{keyword}' is only allowed for numeric formats, found on format '{format}'")]
    NumericKeyword { keyword: String, format: String },

    /// A bound could not be read as an integer
    #[error("Keyword '{keyword}' must be an integer, got {value}")]
    InvalidBound { keyword: String, value: String },

    /// An exclusivity flag was not a boolean
    #[error("Keyword '{keyword}' must be a boolean, got {value}")]
    InvalidFlag { keyword: String, value: String },

    /// The minimum is greater than the maximum
    #[error("Property 'minimum' ({minimum}) must be less than or equal to 'maximum' ({maximum})")]
    InvertedBounds { minimum: String, maximum: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Create an invalid bound error
    pub fn invalid_bound(keyword: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::InvalidBound {
            keyword: keyword.into(),
            value: value.to_string(),
        }
    }

    /// Create an invalid flag error
    pub fn invalid_flag(keyword: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::InvalidFlag {
            keyword: keyword.into(),
            value: value.to_string(),
        }
    }

    /// Create a numeric keyword error
    pub fn numeric_keyword(keyword: impl Into<String>, format: impl Into<String>) -> Self {
        Self::NumericKeyword {
            keyword: keyword.into(),
            format: format.into(),
        }
    }
}

/// Ordered, append-only list of human-readable failure messages.
///
/// Returned by deserialize and validate instead of being threaded through
/// as a mutable out-parameter. An empty list means success. Lists can be
/// merged so a host can fold the output of several steps together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    header: Option<String>,
    messages: Vec<String>,
}

impl Diagnostics {
    /// Create an empty list without a header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list that renders under the given header.
    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            messages: Vec::new(),
        }
    }

    /// Create a list holding a single message.
    pub fn single(message: impl Into<String>) -> Self {
        let mut diagnostics = Self::new();
        diagnostics.push(message);
        diagnostics
    }

    /// Append a message.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Append a message, builder style.
    pub fn pushed(mut self, message: impl Into<String>) -> Self {
        self.push(message);
        self
    }

    /// Append every message of `other`, keeping order.
    pub fn merge(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    /// Replace the header, keeping the messages.
    pub fn headed(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Diagnostics> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.header {
            Some(header) => {
                write!(f, "{header}")?;
                for message in &self.messages {
                    write!(f, "\n  {message}")?;
                }
                Ok(())
            }
            None => write!(f, "{}", self.messages.join("\n")),
        }
    }
}

impl std::error::Error for Diagnostics {}

impl IntoIterator for Diagnostics {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

// Result type aliases for convenience
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type DiagnosticResult<T> = Result<T, Diagnostics>;
