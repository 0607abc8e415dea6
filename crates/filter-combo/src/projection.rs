//! Display projection: how a selected item becomes the edit field's text.
//!
//! A projection is either a property path resolved at runtime
//! (`"address.city"`, `"tags[0]"`) or a typed accessor closure. Path
//! resolution never fails loudly: a missing property, a `null` along the
//! way or an out-of-range index yields "no value", and the caller falls back
//! to the item's own string form.
//!
//! # Example
//!
//! ```
//! use filter_combo::item::ComboItem;
//! use filter_combo::projection::DisplayProjection;
//! use serde_json::json;
//!
//! let item = ComboItem::plain(json!({ "fruit": { "name": "Peach" } }));
//! let projection = DisplayProjection::path("fruit.name").unwrap();
//! assert_eq!(projection.render(&item), "Peach");
//! ```

use std::fmt;
use std::sync::Arc;

use filter_combo_core::logging::targets;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::item::{ComboItem, ListItem, value_to_string};

/// One step of a [`PropertyPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A named property.
    Key(String),
    /// An array element.
    Index(usize),
}

/// A parsed, validated property path.
///
/// Keys are separated by dots; array elements use brackets. The path must
/// start with a key, since the first step is resolved through
/// [`ListItem::property`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    source: String,
    segments: Vec<PathSegment>,
}

impl PropertyPath {
    /// Parse a path such as `"owner.name"` or `"tags[1]"`.
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = |message: &str| ConfigError::invalid_path(path, message);

        if path.trim().is_empty() {
            return Err(invalid("path is empty"));
        }

        let mut segments = Vec::new();
        for part in path.split('.') {
            let (key, mut rest) = match part.find('[') {
                Some(pos) => (&part[..pos], &part[pos..]),
                None => (part, ""),
            };

            if key.is_empty() && (rest.is_empty() || segments.is_empty()) {
                return Err(invalid("empty property name"));
            }
            if !key.is_empty() {
                segments.push(PathSegment::Key(key.to_string()));
            }

            while !rest.is_empty() {
                let close = rest
                    .find(']')
                    .ok_or_else(|| invalid("unterminated index"))?;
                let index = rest[1..close]
                    .parse::<usize>()
                    .map_err(|_| invalid("index is not a non-negative integer"))?;
                segments.push(PathSegment::Index(index));
                rest = &rest[close + 1..];
                if !rest.is_empty() && !rest.starts_with('[') {
                    return Err(invalid("unexpected text after index"));
                }
            }
        }

        Ok(Self {
            source: path.to_string(),
            segments,
        })
    }

    /// The path as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The parsed segments.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Resolve the path against an item, returning the leaf value.
    ///
    /// Returns `None` when any step is missing or `null`.
    pub fn resolve<T: ListItem>(&self, item: &T) -> Option<Value> {
        let mut segments = self.segments.iter();
        let mut current = match segments.next()? {
            PathSegment::Key(key) => item.property(key)?,
            PathSegment::Index(_) => return None,
        };

        for segment in segments {
            let next = match segment {
                PathSegment::Key(key) => current.get(key.as_str())?,
                PathSegment::Index(index) => current.get(*index)?,
            };
            if next.is_null() {
                return None;
            }
            current = next.clone();
        }

        (!current.is_null()).then_some(current)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// A typed accessor used instead of a runtime path.
pub type DisplayAccessor<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// How an item is rendered into the edit field.
#[derive(Clone, Default)]
pub enum DisplayProjection<T> {
    /// The item's own string form.
    #[default]
    ItemString,
    /// A property path resolved at runtime.
    Path(PropertyPath),
    /// A typed accessor closure.
    Accessor(DisplayAccessor<T>),
}

impl<T: ListItem> DisplayProjection<T> {
    /// Build a path projection, validating the path.
    pub fn path(path: &str) -> Result<Self> {
        PropertyPath::parse(path).map(Self::Path)
    }

    /// Build an accessor projection.
    pub fn accessor<F>(accessor: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        Self::Accessor(Arc::new(accessor))
    }

    /// Render an entry to its display string.
    ///
    /// Row wrappers are projected through their content. Any projection
    /// failure falls back to [`ComboItem::render_to_string`].
    pub fn render(&self, item: &ComboItem<T>) -> String {
        let projected = match self {
            Self::ItemString => None,
            Self::Path(path) => {
                let value = path.resolve(item.content()).and_then(|v| value_to_string(&v));
                if value.is_none() {
                    tracing::trace!(
                        target: targets::TEXT,
                        path = %path,
                        "display path did not resolve, using item string"
                    );
                }
                value
            }
            Self::Accessor(accessor) => accessor(item.content()),
        };

        projected.unwrap_or_else(|| item.render_to_string())
    }
}

impl<T> fmt::Debug for DisplayProjection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemString => f.write_str("ItemString"),
            Self::Path(path) => f.debug_tuple("Path").field(&path.as_str()).finish(),
            Self::Accessor(_) => f.write_str("Accessor(..)"),
        }
    }
}
