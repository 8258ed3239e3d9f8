//! Ordered regular-expression tables keyed by joint-name patterns.
//!
//! Gains and initial velocities are authored as `pattern -> value` maps. A
//! [`PatternTable`] keeps the entries in declaration order and resolves a
//! concrete joint name against them explicitly: a pattern matches only when it
//! matches the *whole* name, and the first matching entry wins.

use crate::error::{ConfigError, Result};
use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Pattern that selects every joint.
pub const MATCH_ALL: &str = ".*";

/// Compiles `pattern` so that it only accepts full joint names.
pub fn full_match(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Compiles a list of selection expressions, preserving their order.
pub fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>> {
    patterns.iter().map(|p| full_match(p.as_ref())).collect()
}

/// An ordered sequence of `(pattern, value)` pairs.
///
/// Patterns are unique; inserting an existing pattern replaces its value in place.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternTable<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for PatternTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> PatternTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table applying `value` to every joint.
    pub fn uniform(value: T) -> Self {
        Self::new().with(MATCH_ALL, value)
    }

    /// Appends an entry (builder pattern).
    pub fn with(mut self, pattern: impl Into<String>, value: T) -> Self {
        self.insert(pattern, value);
        self
    }

    /// Adds `pattern -> value`, replacing the value if the pattern is already present.
    pub fn insert(&mut self, pattern: impl Into<String>, value: T) {
        let pattern = pattern.into();
        match self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((pattern, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the value stored under the literal pattern text.
    pub fn get(&self, pattern: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(p, _)| p == pattern)
            .map(|(_, v)| v)
    }

    /// Iterates over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Compiles every pattern once so many names can be resolved cheaply.
    pub fn compile(&self) -> Result<CompiledTable<'_, T>> {
        let entries = self
            .entries
            .iter()
            .map(|(p, v)| Ok((full_match(p)?, p.as_str(), v)))
            .collect::<Result<Vec<_>>>()?;
        Ok(CompiledTable { entries })
    }

    /// Returns the value of the first entry whose pattern matches `name`.
    ///
    /// Compiles the whole table on each call; use [`compile`](Self::compile) for
    /// repeated lookups.
    pub fn resolve(&self, name: &str) -> Result<Option<&T>> {
        Ok(self.compile()?.resolve(name))
    }

    /// Returns every entry whose pattern matches `name`, in declaration order.
    /// Compiles the table on each call, like [`resolve`](Self::resolve).
    pub fn matching(&self, name: &str) -> Result<Vec<(&str, &T)>> {
        Ok(self.compile()?.matching(name).collect())
    }
}

impl<T, S: Into<String>> FromIterator<(S, T)> for PatternTable<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (pattern, value) in iter {
            table.insert(pattern, value);
        }
        table
    }
}

/// A [`PatternTable`] with its patterns compiled.
#[derive(Debug)]
pub struct CompiledTable<'a, T> {
    entries: Vec<(Regex, &'a str, &'a T)>,
}

impl<'a, T> CompiledTable<'a, T> {
    pub fn resolve(&self, name: &str) -> Option<&'a T> {
        self.entries
            .iter()
            .find(|(re, _, _)| re.is_match(name))
            .map(|(_, _, v)| *v)
    }

    pub fn matching<'n>(&'n self, name: &'n str) -> impl Iterator<Item = (&'a str, &'a T)> + 'n {
        self.entries
            .iter()
            .filter(move |(re, _, _)| re.is_match(name))
            .map(|(_, p, v)| (*p, *v))
    }

    /// Patterns that match none of `names`.
    pub fn unused<'n, S: AsRef<str>>(&'n self, names: &'n [S]) -> impl Iterator<Item = &'a str> + 'n {
        self.entries
            .iter()
            .filter(move |(re, _, _)| !names.iter().any(|n| re.is_match(n.as_ref())))
            .map(|(_, p, _)| *p)
    }
}

// Serialized as an ordered map so documents keep declaration order.
impl<T: Serialize> Serialize for PatternTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pattern, value) in &self.entries {
            map.serialize_entry(pattern, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PatternTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for TableVisitor<T> {
            type Value = PatternTable<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from joint-name patterns to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
                let mut table = PatternTable::new();
                while let Some((pattern, value)) = access.next_entry::<String, T>()? {
                    table.insert(pattern, value);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}
