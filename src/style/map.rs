//! StyleMap: ordered inline style properties for a display element.
//!
//! The map preserves first-insertion order so the rendered `style`
//! attribute is stable across relayouts, which keeps frontend diffs and
//! test assertions deterministic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A pixel magnitude rendered as a CSS length (`"10px"`).
///
/// Pixel values are unsigned; a negative height or padding is
/// unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Px(pub u32);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl fmt::Debug for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl From<u32> for Px {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// An ordered key/value map of inline style properties.
///
/// `set` upserts: a property keeps its original position when overwritten.
/// Serializes transparently as a sequence of `(property, value)` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Create an empty style map.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a property, overwriting the previous value in place.
    pub fn set(&mut self, property: &str, value: impl fmt::Display) {
        let value = value.to_string();
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| p == property) {
            entry.1 = value;
        } else {
            self.entries.push((property.to_owned(), value));
        }
    }

    /// Get a property value, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no properties are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Render the map as a `style` attribute body.
    ///
    /// `"height: 215px; margin-bottom: 10px"`
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        for (property, value) in self.iter() {
            if !out.is_empty() {
                out.push_str("; ");
            }
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_display() {
        assert_eq!(Px(0).to_string(), "0px");
        assert_eq!(Px(820).to_string(), "820px");
        assert_eq!(format!("{:?}", Px(10)), "10px");
    }

    #[test]
    fn test_set_and_get() {
        let mut style = StyleMap::new();
        assert!(style.is_empty());

        style.set("height", Px(100));
        style.set("width", "100%");

        assert_eq!(style.get("height"), Some("100px"));
        assert_eq!(style.get("width"), Some("100%"));
        assert_eq!(style.get("margin-left"), None);
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_upsert_keeps_position() {
        let mut style = StyleMap::new();
        style.set("height", Px(100));
        style.set("margin-bottom", Px(10));
        style.set("height", Px(200));

        let entries: Vec<_> = style.iter().collect();
        assert_eq!(
            entries,
            vec![("height", "200px"), ("margin-bottom", "10px")]
        );
    }

    #[test]
    fn test_css_text() {
        let mut style = StyleMap::new();
        assert_eq!(style.css_text(), "");

        style.set("height", Px(215));
        style.set("margin-bottom", Px(10));
        assert_eq!(style.css_text(), "height: 215px; margin-bottom: 10px");
    }

    #[test]
    fn test_serialize_as_pairs() {
        let mut style = StyleMap::new();
        style.set("height", "100%");
        style.set("margin-top", Px(0));

        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"[["height","100%"],["margin-top","0px"]]"#);

        let back: StyleMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }
}
