//! Core systems for filter-combo.
//!
//! This crate provides the reactive building blocks the filterable combo box
//! is assembled from:
//!
//! - **Signal/Slot System**: Type-safe notifications for dropdown, selection and text changes
//! - **Property System**: Values with change detection, paired with signals
//! - **Re-entrancy Flags**: Scoped guards that break synchronous feedback loops
//! - **Logging**: `tracing` targets for each subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use filter_combo_core::Signal;
//!
//! let selection_changed = Signal::<i32>::new();
//!
//! let conn_id = selection_changed.connect(|index| {
//!     println!("Selected index: {}", index);
//! });
//!
//! selection_changed.emit(2);
//! selection_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use filter_combo_core::{Property, Signal};
//!
//! struct FilterField {
//!     text: Property<String>,
//!     text_changed: Signal<String>,
//! }
//!
//! impl FilterField {
//!     fn set_text(&self, text: &str) {
//!         if self.text.set(text.to_string()) {
//!             self.text_changed.emit(text.to_string());
//!         }
//!     }
//! }
//! ```
//!
//! # Re-entrancy Example
//!
//! ```
//! use filter_combo_core::ReentrancyFlag;
//!
//! let updating = ReentrancyFlag::new("updating_text");
//! {
//!     let _scope = updating.scope();
//!     assert!(updating.is_set());
//! }
//! assert!(!updating.is_set());
//! ```

pub mod logging;
pub mod property;
pub mod reentrancy;
pub mod signal;

pub use property::Property;
pub use reentrancy::{FlagScope, ReentrancyFlag};
pub use signal::{ConnectionId, Signal};
