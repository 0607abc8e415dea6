//! filter-combo - a combo box with free-text filtering.
//!
//! The edit field doubles as a filter: typing narrows the dropdown to the
//! matching items, choosing an item writes its display projection back into
//! the field, and leaving the field discards free text that did not select
//! anything.
//!
//! The crate is the state machine only. Rendering, the overlay window and
//! hit-testing belong to the host toolkit and are reached through the
//! [`SelectorHost`] trait; [`HeadlessHost`] implements it without a window.
//!
//! # Example
//!
//! ```
//! use filter_combo::prelude::*;
//!
//! let mut combo: FilterComboBox<String> =
//!     FilterComboBox::new().with_items(plain_items(["Apple", "Banana", "Peach"]));
//! combo.attach();
//!
//! combo.selection_changed.connect(|index| {
//!     println!("Selected index: {}", index);
//! });
//!
//! combo.event(&ComboEvent::TextChanged("pe".into()));
//! assert_eq!(combo.visible_items().len(), 1);
//!
//! combo.event(&ComboEvent::KeyPress(KeyPressEvent::plain(Key::ArrowDown)));
//! combo.event(&ComboEvent::KeyPress(KeyPressEvent::plain(Key::Enter)));
//! assert_eq!(combo.display_text(), "Peach");
//! assert!(!combo.is_dropdown_open());
//! ```

pub mod combo;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod geometry;
pub mod host;
pub mod item;
pub mod prelude;
pub mod projection;

pub use combo::FilterComboBox;
pub use config::FilterComboConfig;
pub use error::{ConfigError, Result};
pub use host::{HeadlessHost, HitPart, SelectorHost};
pub use item::{ComboItem, ListItem, SelectableRow};

pub use filter_combo_core::{Property, ReentrancyFlag, Signal};
