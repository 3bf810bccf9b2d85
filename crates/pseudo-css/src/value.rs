//! Property values and ordered property maps

use std::fmt;

use crate::case::camel_case;

/// A value assigned to a pseudo-element property.
///
/// Falsy values (`""`, `false`, `0`, NaN, `Unset`) stay tracked but are
/// left out of the rendered rule.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Unset,
}

impl PropertyValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
            Self::Unset => false,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Number(n) if *n == 0.0 => f.write_str("0"),
            Self::Number(n) if (1e-6..1e21).contains(&n.abs()) => write!(f, "{n}"),
            // Exponent form with an explicit sign, e.g. `1e+21` and `1e-7`
            Self::Number(n) => {
                let exp = format!("{n:e}");
                match exp.split_once('e') {
                    Some((mantissa, power)) if !power.starts_with('-') => {
                        write!(f, "{mantissa}e+{power}")
                    }
                    _ => f.write_str(&exp),
                }
            }
            Self::Bool(b) => write!(f, "{b}"),
            Self::Unset => Ok(()),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<u32> for PropertyValue {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}

/// Insertion-ordered property map. Overwriting a key keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    entries: Vec<(String, PropertyValue)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`PropertyMap::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or overwrite, returning the previous value
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Merge `other` in: new keys appended, existing keys overwritten
    pub fn merge(&mut self, other: PropertyMap) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    /// Same map with every key converted to camelCase
    pub fn normalized(self) -> Self {
        self.entries
            .into_iter()
            .map(|(name, value)| (camel_case(&name), value))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<K: Into<String>, V: Into<PropertyValue>, const N: usize> From<[(K, V); N]> for PropertyMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
