//! In-memory store: section name → key → raw string value.
//!
//! Values are always kept as text; the typed getters re-read the text on
//! every call and fall back to the caller's default when nothing usable is
//! there. Missing keys and unparsable values are indistinguishable.

use std::sync::LazyLock;

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::number::{
    format_canonical_f32, format_canonical_f64, parse_f32_prefix, parse_f64_prefix,
    parse_i32_prefix, parse_i64_prefix,
};

/// Keys of one section, in insertion order.
pub type Section = IndexMap<String, String>;

static EMPTY_SECTION: LazyLock<Section> = LazyLock::new(Section::new);

/// Parsed INI data. Keys that appear before any header live in the
/// section named `""`.
///
/// Equality compares the set of (section, key, value) triples and ignores
/// ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Document {
    data: IndexMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &IndexMap<String, Section> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut IndexMap<String, Section> {
        &mut self.data
    }

    /// The named section, or a shared empty one when it does not exist.
    pub fn section(&self, section: &str) -> &Section {
        self.data.get(section).unwrap_or(&EMPTY_SECTION)
    }

    pub fn section_mut(&mut self, section: &str) -> Option<&mut Section> {
        self.data.get_mut(section)
    }

    /// Register a section without keys. Existing sections are left alone.
    pub fn add_section(&mut self, section: impl Into<String>) -> &mut Section {
        self.data.entry(section.into()).or_default()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.data.contains_key(section)
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.data
            .get(section)
            .is_some_and(|keys| keys.contains_key(key))
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.data.get(section)?.get(key).map(String::as_str)
    }

    pub fn get_string<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key).unwrap_or(default)
    }

    /// Leading integer text is used; `"42abc"` reads as 42.
    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.get(section, key)
            .and_then(parse_i32_prefix)
            .unwrap_or(default)
    }

    pub fn get_int64(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get(section, key)
            .and_then(parse_i64_prefix)
            .unwrap_or(default)
    }

    pub fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.get(section, key)
            .and_then(parse_f64_prefix)
            .unwrap_or(default)
    }

    pub fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.get(section, key)
            .and_then(parse_f32_prefix)
            .unwrap_or(default)
    }

    /// Case-insensitive `true`/`false` after optional spaces or tabs.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get(section, key)
            .and_then(parse_bool_prefix)
            .unwrap_or(default)
    }

    /// Insert or overwrite. Non-string values are stored in canonical text
    /// form (see [`IntoValue`]).
    pub fn set(&mut self, section: &str, key: &str, value: impl IntoValue) {
        self.data
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into_value());
    }

    /// All (section, key, value) triples in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.data.iter().flat_map(|(section, keys)| {
            keys.iter()
                .map(move |(k, v)| (section.as_str(), k.as_str(), v.as_str()))
        })
    }

    /// Number of sections, including empty ones.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<IndexMap<String, Section>> for Document {
    fn from(data: IndexMap<String, Section>) -> Self {
        Self { data }
    }
}

/// Conversion to the stored text form.
pub trait IntoValue {
    fn into_value(self) -> String;
}

impl IntoValue for &str {
    fn into_value(self) -> String {
        self.to_string()
    }
}

impl IntoValue for String {
    fn into_value(self) -> String {
        self
    }
}

impl IntoValue for &String {
    fn into_value(self) -> String {
        self.clone()
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> String {
        self.to_string()
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> String {
        self.to_string()
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> String {
        format_canonical_f64(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> String {
        format_canonical_f32(self)
    }
}

impl IntoValue for bool {
    fn into_value(self) -> String {
        String::from(if self { "true" } else { "false" })
    }
}

fn parse_bool_prefix(s: &str) -> Option<bool> {
    let body = s.trim_start_matches([' ', '\t']).as_bytes();
    if body.len() >= 4 && body[..4].eq_ignore_ascii_case(b"true") {
        return Some(true);
    }
    if body.len() >= 5 && body[..5].eq_ignore_ascii_case(b"false") {
        return Some(false);
    }
    None
}
