use std::collections::BTreeMap;
use std::fmt;

/// A top-level property-list dictionary.
///
/// Key order carries no meaning; the `BTreeMap` keeps serialization
/// deterministic so repeated runs produce byte-identical files.
pub type Document = BTreeMap<String, Value>;

/// A property-list leaf value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(String),
    Boolean(bool),
    /// Wide enough to hold both the signed and unsigned 64-bit plist ranges.
    Integer(i128),
    Real(f64),
    /// An ISO-8601 timestamp in plist XML form (`2024-01-01T00:00:00Z`).
    Date(String),
    Data(Vec<u8>),
}

impl Scalar {
    /// Short name of the scalar kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Date(_) => "date",
            Self::Data(_) => "data",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Date(d) => f.write_str(d),
            Self::Data(bytes) => f.write_str(&hex::encode(bytes)),
        }
    }
}

/// A property-list value.
///
/// Shapes are closed: every value is a scalar, an ordered sequence, or a
/// nested mapping, and the merge engine dispatches on exactly these three.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Vec<Value>),
    Mapping(Document),
}

impl Value {
    /// Construct a string scalar.
    pub fn string(s: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(s.into()))
    }

    /// Construct a sequence of string scalars.
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(items.into_iter().map(Self::string).collect())
    }

    /// Returns `true` for the empty string scalar, which the merge engine
    /// treats the same as a missing value.
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::String(s)) if s.is_empty())
    }

    /// Short name of the value shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(s) => s.kind(),
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// The string form used to compare sequence elements during a union.
    ///
    /// Scalars render as their plain text (`1.0` renders as `1`), sequences
    /// join their elements with `,`, and mappings render as `{k=v;...}`.
    /// Distinct typed values can share a string form: integer `1` and string
    /// `"1"` both render as `1`.
    pub fn string_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Mapping(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(";")?;
                    }
                    write!(f, "{k}={v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Boolean(b))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Scalar(Scalar::Integer(i128::from(i)))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Self::Scalar(Scalar::Real(r))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Document> for Value {
    fn from(map: Document) -> Self {
        Self::Mapping(map)
    }
}
