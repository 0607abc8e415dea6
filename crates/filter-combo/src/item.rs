//! Items shown by the filterable combo box.
//!
//! Items are opaque to the combo box except for two capabilities, both on
//! [`ListItem`]: rendering to a string, and a dynamic property lookup used
//! by path-based display projections. The list itself holds
//! [`ComboItem`]s, which add the selectable-row wrapper variant.
//!
//! # Example
//!
//! ```
//! use filter_combo::item::{ComboItem, SelectableRow};
//!
//! let plain = ComboItem::plain("Apple".to_string());
//! let row = ComboItem::Row(SelectableRow::new("Banana".to_string()));
//!
//! assert_eq!(plain.render_to_string(), "Apple");
//! assert_eq!(row.render_to_string(), "Banana");
//! ```

use std::fmt;

use serde_json::Value;

/// Capabilities the combo box needs from an item type.
///
/// Implemented for `String`, `&'static str` and `serde_json::Value`.
/// Application types implement `display_string` and, when they want to be
/// addressed by a display member path, `property`.
pub trait ListItem: Clone + PartialEq + Send + Sync + 'static {
    /// The item's own string form.
    fn display_string(&self) -> String;

    /// Look up a named property for path-based display projection.
    ///
    /// Returns `None` when the item has no such property.
    fn property(&self, _name: &str) -> Option<Value> {
        None
    }
}

impl ListItem for String {
    fn display_string(&self) -> String {
        self.clone()
    }
}

impl ListItem for &'static str {
    fn display_string(&self) -> String {
        (*self).to_string()
    }
}

impl ListItem for Value {
    fn display_string(&self) -> String {
        value_to_string(self).unwrap_or_default()
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(name)).cloned()
    }
}

/// Stringify a JSON leaf the way a property binding would.
///
/// Strings are taken verbatim, numbers and booleans use their display form,
/// containers are serialized. `null` has no string form.
pub(crate) fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// A row wrapper whose renderable content is nested inside it.
///
/// This is the list-row variant of an item: the host may hand the combo box
/// prepared rows instead of raw data, and string rendering then goes through
/// the row's content.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectableRow<T> {
    /// The wrapped content.
    pub content: T,
    /// Whether the row can be committed as a selection.
    pub enabled: bool,
}

impl<T> SelectableRow<T> {
    /// Wrap content in an enabled row.
    pub fn new(content: T) -> Self {
        Self {
            content,
            enabled: true,
        }
    }

    /// Set whether the row is enabled using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// An entry in the combo box list.
#[derive(Debug, Clone, PartialEq)]
pub enum ComboItem<T> {
    /// A raw item rendered through its own string form.
    Plain(T),
    /// A row wrapper rendered through its content.
    Row(SelectableRow<T>),
}

impl<T: ListItem> ComboItem<T> {
    /// Create a plain item.
    pub fn plain(item: T) -> Self {
        Self::Plain(item)
    }

    /// Create an enabled row wrapper around `content`.
    pub fn row(content: T) -> Self {
        Self::Row(SelectableRow::new(content))
    }

    /// The value string rendering and property lookups operate on.
    pub fn content(&self) -> &T {
        match self {
            Self::Plain(item) => item,
            Self::Row(row) => &row.content,
        }
    }

    /// Whether this entry can be committed as a selection.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Plain(_) => true,
            Self::Row(row) => row.enabled,
        }
    }

    /// Render the entry to its default string.
    ///
    /// Row wrappers render their content's string form.
    pub fn render_to_string(&self) -> String {
        self.content().display_string()
    }
}

impl<T: ListItem> From<T> for ComboItem<T> {
    fn from(item: T) -> Self {
        Self::Plain(item)
    }
}

impl<T: ListItem> fmt::Display for ComboItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

/// Wrap a sequence of raw items as plain entries.
pub fn plain_items<T, I>(items: I) -> Vec<ComboItem<T>>
where
    T: ListItem,
    I: IntoIterator,
    I::Item: Into<T>,
{
    items.into_iter().map(|i| ComboItem::Plain(i.into())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_and_row_render_the_same_content() {
        let plain = ComboItem::plain("Peach".to_string());
        let row = ComboItem::row("Peach".to_string());
        assert_eq!(plain.render_to_string(), row.render_to_string());
        assert_ne!(plain, row);
    }

    #[test]
    fn test_row_enabled_flag() {
        let row: ComboItem<String> =
            ComboItem::Row(SelectableRow::new("Locked".to_string()).with_enabled(false));
        assert!(!row.is_enabled());
        assert!(ComboItem::plain("Open".to_string()).is_enabled());
    }

    #[test]
    fn test_json_item_display_and_property() {
        let item = json!({ "name": "Apple", "stock": 3 });
        assert_eq!(item.property("name"), Some(json!("Apple")));
        assert_eq!(item.property("missing"), None);
        assert_eq!(json!("Banana").display_string(), "Banana");
        assert_eq!(json!(12).display_string(), "12");
        assert_eq!(Value::Null.display_string(), "");
    }

    #[test]
    fn test_plain_items_helper() {
        let items: Vec<ComboItem<String>> = plain_items(["Apple", "Banana"]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].to_string(), "Banana");
    }
}
