//! Closed value model shared by rules and facts.
//!
//! Every rule operand and every fact is one of a fixed set of variants.
//! Comparison and containment are defined per pair of variant kinds, and
//! every pair without a defined meaning resolves deterministically.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Runtime value carried by rules and fact mappings.
///
/// Deserializes from any JSON document: `null`, booleans, numbers,
/// strings, arrays and objects.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// Null value, also used for fields missing from a fact mapping
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value, kept exact
    Int(i64),
    /// Floating-point value, also used for integers outside the `i64` range
    Float(f64),
    /// String value
    String(String),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// String-keyed mapping
    Map(BTreeMap<String, Value>),
}

/// Errors raised when two values cannot be ordered.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValueError {
    #[error("cannot order {left} against {right}")]
    Incomparable {
        left: &'static str,
        right: &'static str,
    },
}

impl Value {
    /// Name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Order two values.
    ///
    /// Defined for number/number (integers and floats compare exactly
    /// against each other), string/string, boolean/boolean and
    /// list/list (lexicographic, element by element, then by length).
    /// Any other pairing, NaN included, is an [`ValueError::Incomparable`].
    pub fn try_compare(&self, other: &Value) -> Result<Ordering, ValueError> {
        let incomparable = || ValueError::Incomparable {
            left: self.kind(),
            right: other.kind(),
        };

        match (self, other) {
            (Value::Int(l), Value::Int(r)) => Ok(l.cmp(r)),
            (Value::Float(l), Value::Float(r)) => l.partial_cmp(r).ok_or_else(incomparable),
            (Value::Int(l), Value::Float(r)) => compare_int_float(*l, *r).ok_or_else(incomparable),
            (Value::Float(l), Value::Int(r)) => compare_int_float(*r, *l)
                .map(Ordering::reverse)
                .ok_or_else(incomparable),
            (Value::String(l), Value::String(r)) => Ok(l.cmp(r)),
            (Value::Bool(l), Value::Bool(r)) => Ok(l.cmp(r)),
            (Value::List(l), Value::List(r)) => {
                for (a, b) in l.iter().zip(r.iter()) {
                    if a == b {
                        continue;
                    }
                    return a.try_compare(b);
                }
                Ok(l.len().cmp(&r.len()))
            }
            _ => Err(incomparable()),
        }
    }

    /// Check whether `item` is a member of this value.
    ///
    /// Strings contain substrings, lists contain structurally equal
    /// elements and maps contain string keys. Any other shape is simply
    /// not a container, so the answer is `false`.
    pub fn contains(&self, item: &Value) -> bool {
        match (self, item) {
            (Value::String(haystack), Value::String(needle)) => haystack.contains(needle.as_str()),
            (Value::List(items), needle) => items.iter().any(|v| v == needle),
            (Value::Map(map), Value::String(key)) => map.contains_key(key),
            _ => false,
        }
    }
}

/// Exact ordering of an integer against a float; `None` for NaN.
fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63: every f64 at or beyond it is outside the i64 range.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return None;
    }
    if float >= LIMIT {
        return Some(Ordering::Less);
    }
    if float < -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Int(l), Value::Int(r)) => l == r,
            (Value::Float(l), Value::Float(r)) => l == r,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                compare_int_float(*i, *f) == Some(Ordering::Equal)
            }
            (Value::String(l), Value::String(r)) => l == r,
            (Value::List(l), Value::List(r)) => l == r,
            (Value::Map(l), Value::Map(r)) => l == r,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(Value::from(5), Value::from(5.0));
        assert_eq!(
            Value::from(3).try_compare(&Value::from(7.5)),
            Ok(Ordering::Less)
        );
    }

    #[test]
    fn large_integers_stay_distinct() {
        let a = Value::from(9_007_199_254_740_993_i64);
        let b = Value::from(9_007_199_254_740_992_i64);
        assert_ne!(a, b);
        assert_eq!(a.try_compare(&b), Ok(Ordering::Greater));
    }

    #[test]
    fn large_integer_against_nearby_float_is_exact() {
        let int = Value::from(9_007_199_254_740_993_i64);
        let float = Value::from(9_007_199_254_740_992.0);
        assert_ne!(int, float);
        assert_eq!(int.try_compare(&float), Ok(Ordering::Greater));
        assert_eq!(float.try_compare(&int), Ok(Ordering::Less));
    }

    #[test]
    fn mixed_integer_float_ordering_respects_fraction() {
        assert_eq!(
            Value::from(2).try_compare(&Value::from(2.5)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            Value::from(-2).try_compare(&Value::from(-2.5)),
            Ok(Ordering::Greater)
        );
        assert_eq!(
            Value::from(i64::MAX).try_compare(&Value::from(1e19)),
            Ok(Ordering::Less)
        );
    }

    #[test]
    fn integers_serialize_without_fraction() {
        assert_eq!(serde_json::to_string(&Value::from(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Value::from(2.5)).unwrap(), "2.5");

        let parsed: Value = serde_json::from_str("9007199254740993").unwrap();
        assert_eq!(parsed, Value::Int(9_007_199_254_740_993));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "9007199254740993");

        let parsed: Value = serde_json::from_str("5.0").unwrap();
        assert_eq!(parsed, Value::Float(5.0));
    }

    #[test]
    fn booleans_are_not_numbers() {
        assert_ne!(Value::from(true), Value::from(1));
        assert!(Value::from(true).try_compare(&Value::from(1)).is_err());
    }

    #[test]
    fn null_is_incomparable() {
        let err = Value::Null.try_compare(&Value::from(5)).unwrap_err();
        assert_eq!(
            err,
            ValueError::Incomparable {
                left: "null",
                right: "number"
            }
        );
        assert_eq!(err.to_string(), "cannot order null against number");
    }

    #[test]
    fn nan_is_incomparable() {
        assert!(Value::from(f64::NAN).try_compare(&Value::from(1)).is_err());
    }

    #[test]
    fn lists_compare_lexicographically() {
        let short = Value::from(vec![1, 2]);
        let long = Value::from(vec![1, 2, 0]);
        let bigger = Value::from(vec![1, 3]);

        assert_eq!(short.try_compare(&long), Ok(Ordering::Less));
        assert_eq!(bigger.try_compare(&long), Ok(Ordering::Greater));
        assert_eq!(short.try_compare(&short.clone()), Ok(Ordering::Equal));
    }

    #[test]
    fn lists_with_mixed_elements_fail_at_first_difference() {
        let left = Value::from(vec![Value::from(1), Value::from("a")]);
        let right = Value::from(vec![Value::from(1), Value::from(2)]);
        assert!(left.try_compare(&right).is_err());
    }

    #[test]
    fn contains_handles_strings_lists_and_maps() {
        assert!(Value::from("hello world").contains(&Value::from("world")));
        assert!(Value::from(vec!["a", "b"]).contains(&Value::from("a")));
        assert!(!Value::from(vec!["b"]).contains(&Value::from("a")));

        let mut map = BTreeMap::new();
        map.insert("key".to_string(), Value::from(1));
        assert!(Value::Map(map).contains(&Value::from("key")));
    }

    #[test]
    fn contains_on_non_container_is_false() {
        assert!(!Value::from(5).contains(&Value::from(5)));
        assert!(!Value::Null.contains(&Value::from("a")));
        assert!(!Value::from("abc").contains(&Value::from(1)));
    }

    #[test]
    fn display_renders_json_like_text() {
        assert_eq!(Value::from(5).to_string(), "5");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("x").to_string(), "\"x\"");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "[\"a\", \"b\"]");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn value_deserializes_from_json() {
        let value: Value = serde_json::from_str(r#"{"tags": ["a", 1, null, true]}"#).unwrap();
        let Value::Map(map) = value else {
            panic!("expected map");
        };
        assert_eq!(
            map.get("tags"),
            Some(&Value::List(vec![
                Value::from("a"),
                Value::from(1),
                Value::Null,
                Value::from(true),
            ]))
        );
    }
}
