//! Helpers shared by every model shape: `Display` rendering and the float
//! wrapper that lets shapes derive `Eq` and `Hash`.
//!
//! Shapes render as `{fieldName: value, fieldName: value}` using wire field
//! names in declaration order. Unset fields are omitted and values are neither
//! quoted nor escaped.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Incremental writer for the `{name: value, ...}` shape format.
///
/// Modeled on [`fmt::DebugStruct`]: every method is a no-op once an earlier
/// write failed, and [`finish`](Self::finish) reports the first error.
pub struct ShapeFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl fmt::Debug for ShapeFormatter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeFormatter")
            .field("has_fields", &self.has_fields)
            .finish_non_exhaustive()
    }
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    /// Start rendering a shape.
    #[must_use]
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        Self {
            f,
            result,
            has_fields: false,
        }
    }

    /// Write a scalar, string or nested shape field. `None` is skipped.
    pub fn field<T>(&mut self, name: &str, value: Option<&T>) -> &mut Self
    where
        T: fmt::Display + ?Sized,
    {
        if let Some(value) = value {
            self.result = self.result.and_then(|()| {
                Self::separator(self.f, self.has_fields)?;
                write!(self.f, "{name}: {value}")
            });
            self.has_fields = true;
        }
        self
    }

    /// Write a list field as `[a, b]`. `None` is skipped, an empty list is not.
    pub fn list<T: fmt::Display>(&mut self, name: &str, values: Option<&[T]>) -> &mut Self {
        if let Some(values) = values {
            self.result = self.result.and_then(|()| {
                Self::separator(self.f, self.has_fields)?;
                write!(self.f, "{name}: ")?;
                write_list(self.f, values)
            });
            self.has_fields = true;
        }
        self
    }

    /// Write a map-of-lists field as `{key: [..], key: [..]}`.
    pub fn map<T: fmt::Display>(
        &mut self,
        name: &str,
        entries: Option<&BTreeMap<String, Vec<T>>>,
    ) -> &mut Self {
        if let Some(entries) = entries {
            self.result = self.result.and_then(|()| {
                Self::separator(self.f, self.has_fields)?;
                write!(self.f, "{name}: {{")?;
                for (i, (key, values)) in entries.iter().enumerate() {
                    if i > 0 {
                        self.f.write_str(", ")?;
                    }
                    write!(self.f, "{key}: ")?;
                    write_list(self.f, values)?;
                }
                self.f.write_str("}")
            });
            self.has_fields = true;
        }
        self
    }

    /// Close the shape and return the first error encountered, if any.
    pub fn finish(&mut self) -> fmt::Result {
        self.result = self.result.and_then(|()| self.f.write_str("}"));
        self.result
    }

    fn separator(f: &mut fmt::Formatter<'_>, has_fields: bool) -> fmt::Result {
        if has_fields { f.write_str(", ") } else { Ok(()) }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}

/// A stored float field.
///
/// Compares and hashes by bit pattern, so `NaN` equals itself and `0.0`
/// differs from `-0.0`. Renders with its decimal point (`80.0`). Serializes as
/// a plain JSON number.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct FloatBits(pub(crate) f64);

impl PartialEq for FloatBits {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatBits {}

impl Hash for FloatBits {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for FloatBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<FloatBits> for f64 {
    fn from(value: FloatBits) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        tags: Option<Vec<String>>,
        mapping: Option<BTreeMap<String, Vec<i32>>>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            ShapeFormatter::new(f)
                .field("name", self.name.as_deref())
                .field("count", self.count.as_ref())
                .list("tags", self.tags.as_deref())
                .map("mapping", self.mapping.as_ref())
                .finish()
        }
    }

    fn empty() -> Sample {
        Sample {
            name: None,
            count: None,
            tags: None,
            mapping: None,
        }
    }

    #[test]
    fn test_should_render_empty_shape_as_braces() {
        assert_eq!(empty().to_string(), "{}");
    }

    #[test]
    fn test_should_render_set_fields_in_order() {
        let sample = Sample {
            name: Some("web-1".to_owned()),
            count: Some(3),
            ..empty()
        };
        assert_eq!(sample.to_string(), "{name: web-1, count: 3}");
    }

    #[test]
    fn test_should_skip_unset_and_keep_empty_list() {
        let sample = Sample {
            tags: Some(Vec::new()),
            ..empty()
        };
        assert_eq!(sample.to_string(), "{tags: []}");
    }

    #[test]
    fn test_should_render_lists_and_maps() {
        let mut mapping = BTreeMap::new();
        mapping.insert("b".to_owned(), vec![2, 3]);
        mapping.insert("a".to_owned(), vec![1]);
        let sample = Sample {
            tags: Some(vec!["x".to_owned(), "y".to_owned()]),
            mapping: Some(mapping),
            ..empty()
        };
        assert_eq!(
            sample.to_string(),
            "{tags: [x, y], mapping: {a: [1], b: [2, 3]}}"
        );
    }

    #[test]
    fn test_should_not_escape_values() {
        let sample = Sample {
            name: Some("a, b: {c}".to_owned()),
            ..empty()
        };
        assert_eq!(sample.to_string(), "{name: a, b: {c}}");
    }

    #[test]
    fn test_should_compare_float_bits() {
        assert_eq!(FloatBits(f64::NAN), FloatBits(f64::NAN));
        assert_ne!(FloatBits(0.0), FloatBits(-0.0));
        assert_eq!(FloatBits(80.0), FloatBits(80.0));
    }

    #[test]
    fn test_should_render_float_with_decimal_point() {
        assert_eq!(FloatBits(80.0).to_string(), "80.0");
        assert_eq!(FloatBits(0.5).to_string(), "0.5");
        assert_eq!(FloatBits(-3.25).to_string(), "-3.25");
    }

    #[test]
    fn test_should_serialize_float_as_plain_number() {
        assert_eq!(serde_json::to_string(&FloatBits(80.0)).expect("serialize"), "80.0");
        let parsed: FloatBits = serde_json::from_str("80").expect("integer input");
        assert_eq!(f64::from(parsed), 80.0);
    }
}
