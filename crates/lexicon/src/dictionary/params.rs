use std::collections::HashMap;

use crate::dictionary::RenderError;
use crate::types::Value;

/// Named arguments passed to a rendering function.
///
/// A thin wrapper over `HashMap<String, Value>` with typed accessors that
/// report missing or mistyped arguments as [`RenderError`]. Generated
/// rendering functions use the typed accessors; the [`crate::params!`]
/// macro builds one from literal pairs.
///
/// # Example
///
/// ```
/// use lexicon::params;
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p.int("count").unwrap(), 3);
/// assert_eq!(p.text("name").unwrap(), "Alice");
/// assert!(p.int("name").is_err());
/// assert!(p.int("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: HashMap<String, Value>,
}

impl Params {
    /// Create an empty argument map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert a named argument. Anything convertible to [`Value`] works.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get an argument without type expectations.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get an integer argument.
    pub fn int(&self, name: &str) -> Result<i64, RenderError> {
        let value = self.require(name)?;
        value.as_int().ok_or_else(|| RenderError::ArgumentType {
            name: name.to_string(),
            expected: "integer",
            got: value.type_name(),
        })
    }

    /// Get a float argument. Integers coerce.
    pub fn float(&self, name: &str) -> Result<f64, RenderError> {
        let value = self.require(name)?;
        value.as_float().ok_or_else(|| RenderError::ArgumentType {
            name: name.to_string(),
            expected: "float",
            got: value.type_name(),
        })
    }

    /// Get a string argument.
    pub fn text(&self, name: &str) -> Result<&str, RenderError> {
        let value = self.require(name)?;
        value.as_str().ok_or_else(|| RenderError::ArgumentType {
            name: name.to_string(),
            expected: "string",
            got: value.type_name(),
        })
    }

    /// Get a boolean argument.
    pub fn boolean(&self, name: &str) -> Result<bool, RenderError> {
        let value = self.require(name)?;
        value.as_bool().ok_or_else(|| RenderError::ArgumentType {
            name: name.to_string(),
            expected: "boolean",
            got: value.type_name(),
        })
    }

    fn require(&self, name: &str) -> Result<&Value, RenderError> {
        self.values.get(name).ok_or_else(|| RenderError::MissingArgument {
            name: name.to_string(),
        })
    }
}

impl std::ops::Index<&str> for Params {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        &self.values[name]
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
