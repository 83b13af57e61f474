//! AL data type model.
//!
//! A closed set of type shapes, each rendered to the text it takes in AL
//! source (`Code[20]`, `List of [Text]`, `Dictionary of [Code[20], Decimal]`).

use std::fmt;

/// An AL data type as written in a variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// A type written by name only (`Integer`, `Decimal`, `Boolean`).
    Primitive(String),
    /// `Text` or `Code` with an optional maximum length.
    Sized {
        /// Type name.
        name: String,
        /// Maximum length, rendered in brackets when present.
        length: Option<u32>,
    },
    /// `Label 'text'`.
    Label(String),
    /// `List of [...]`.
    List(Vec<DataType>),
    /// `Array[dims] of ...`.
    Array {
        /// One entry per dimension.
        dimensions: Vec<u32>,
        /// Element type(s).
        elements: Vec<DataType>,
    },
    /// `Dictionary of [key, value]`.
    Dictionary {
        /// Key type.
        key: Option<Box<DataType>>,
        /// Value type.
        value: Option<Box<DataType>>,
    },
    /// Reference to an application object (`Record Item`, `Codeunit "Sales-Post"`).
    Object {
        /// Object type keyword.
        kind: String,
        /// Object name.
        name: String,
    },
}

impl DataType {
    #[must_use]
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    #[must_use]
    pub fn sized(name: impl Into<String>, length: Option<u32>) -> Self {
        Self::Sized { name: name.into(), length }
    }

    #[must_use]
    pub fn dictionary(key: Self, value: Option<Self>) -> Self {
        Self::Dictionary { key: Some(Box::new(key)), value: value.map(Box::new) }
    }

    #[must_use]
    pub fn object(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Object { kind: kind.into(), name: name.into() }
    }

    /// Renders the type as AL source text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Primitive(name) => name.clone(),
            Self::Sized { name, length: Some(length) } => format!("{name}[{length}]"),
            Self::Sized { name, length: None } => name.clone(),
            Self::Label(text) => format!("Label '{text}'"),
            Self::List(elements) => {
                let inner = elements.iter().map(Self::render).collect::<Vec<_>>().join(", ");
                format!("List of [{inner}]")
            }
            Self::Array { dimensions, elements } => {
                let dims = dimensions.iter().map(u32::to_string).collect::<Vec<_>>().join(",");
                let inner = elements.iter().map(Self::render).collect::<Vec<_>>().join(" ");
                format!("Array[{dims}] of {inner}")
            }
            Self::Dictionary { key, value } => {
                format!("Dictionary of [{}", render_pair(key.as_deref(), value.as_deref()))
            }
            Self::Object { kind, name } => format!("{kind} {}", quote_name(name)),
        }
    }
}

/// `key, value]`, or just `key` when there is no value.
fn render_pair(key: Option<&DataType>, value: Option<&DataType>) -> String {
    let key = key.map(DataType::render).unwrap_or_default();
    match value {
        Some(value) => format!("{key}, {}]", value.render()),
        None => key,
    }
}

/// Quotes an object name when it contains whitespace.
#[must_use]
pub fn quote_name(name: &str) -> String {
    if name.chars().any(char::is_whitespace) { format!("\"{name}\"") } else { name.to_string() }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
