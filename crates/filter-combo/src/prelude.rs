//! Prelude module for filter-combo.
//!
//! ```
//! use filter_combo::prelude::*;
//! ```

// ============================================================================
// Widget
// ============================================================================

pub use crate::combo::FilterComboBox;
pub use crate::config::{FilterComboConfig, HorizontalAlignment, VerticalAlignment};
pub use crate::error::{ConfigError, Result};

// ============================================================================
// Items, filtering and display
// ============================================================================

pub use crate::filter::{CaseSensitivity, FilterPredicate};
pub use crate::item::{ComboItem, ListItem, SelectableRow, plain_items};
pub use crate::projection::{DisplayProjection, PropertyPath};

// ============================================================================
// Host and input
// ============================================================================

pub use crate::events::{
    ComboEvent, Key, KeyChord, KeyPressEvent, KeyboardModifiers, MouseButton, MousePressEvent,
    MouseReleaseEvent,
};
pub use crate::geometry::{Point, Rect, Size};
pub use crate::host::{HeadlessHost, HitPart, SelectorHost};

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use filter_combo_core::{ConnectionId, Property, Signal};
