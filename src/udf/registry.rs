use crate::Median;
use crate::error::{Error, Result};
use crate::udf::{Udf, Value};
use log::debug;

/// Default prefix of installed function names
pub const DEFAULT_PREFIX: &str = "scisql_";

const MEDIAN: &str = "median";

/// Resolves SQL function names to callable functions
///
/// Scalar functions are installed under a common prefix, so with the
/// default configuration `s2PtInCircle` is called as `scisql_s2PtInCircle`.
/// The `median` aggregate is always installed without a prefix.
///
/// ```
/// use scisql::{Registry, Value};
///
/// let registry = Registry::new();
/// let args = [
///     Value::Real(1.0),
///     Value::Real(1.0),
///     Value::Real(0.0),
///     Value::Real(0.0),
///     Value::Real(1.0),
/// ];
/// let result = registry.call("scisql_s2PtInCircle", &args)?;
/// assert_eq!(result, Value::Integer(0));
/// # Ok::<(), scisql::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    prefix: String,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a registry using [`DEFAULT_PREFIX`]
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Create a registry with a custom function name prefix
    ///
    /// An empty prefix installs the functions under their plain names.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Installed name of a scalar function
    pub fn sql_name(&self, udf: Udf) -> String {
        format!("{}{}", self.prefix, udf.name())
    }

    /// Installed names of all scalar functions
    pub fn sql_names(&self) -> impl Iterator<Item = String> + '_ {
        Udf::ALL.into_iter().map(|udf| self.sql_name(udf))
    }

    /// Resolve an installed scalar function name
    ///
    /// Matching is case-insensitive for both the prefix and the name.
    pub fn lookup(&self, name: &str) -> Result<Udf> {
        self.strip_prefix(name)
            .and_then(Udf::from_name)
            .ok_or_else(|| {
                debug!("no scalar function named {name:?}");
                Error::UnknownFunction {
                    name: name.to_string(),
                }
            })
    }

    /// Resolve `name` and evaluate it for one row of arguments
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        self.lookup(name)?.call(args)
    }

    /// Set up a `median()` aggregate called with `arg_count` arguments
    pub fn median(&self, name: &str, arg_count: usize) -> Result<Median> {
        if !name.eq_ignore_ascii_case(MEDIAN) {
            debug!("no aggregate function named {name:?}");
            return Err(Error::UnknownFunction {
                name: name.to_string(),
            });
        }
        if arg_count != 1 {
            return Err(Error::ArgumentCount {
                name: MEDIAN,
                expected: 1,
                actual: arg_count,
            });
        }
        Ok(Median::new())
    }

    fn strip_prefix<'a>(&self, name: &'a str) -> Option<&'a str> {
        let prefix = name.get(..self.prefix.len())?;
        if !prefix.eq_ignore_ascii_case(&self.prefix) {
            return None;
        }
        name.get(self.prefix.len()..)
    }
}
