//! Property system for filter-combo.
//!
//! Properties hold the combo box's observable values (display text, filter
//! text, selected index, dropdown state). Setting a property reports whether
//! the value actually changed, so the owner only runs its change handler and
//! emits its notification signal on real transitions.
//!
//! # Example
//!
//! ```
//! use filter_combo_core::property::Property;
//! use filter_combo_core::signal::Signal;
//!
//! struct Dropdown {
//!     open: Property<bool>,
//!     opened: Signal<()>,
//! }
//!
//! impl Dropdown {
//!     fn set_open(&self, open: bool) {
//!         if self.open.set(open) && open {
//!             self.opened.emit(());
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` wraps a value and provides change detection. When `set()` is
/// called, it compares the new value with the current one and returns whether
/// the value actually changed.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`.
///
/// # Example
///
/// ```
/// use filter_combo_core::Property;
///
/// let filter = Property::new(String::new());
/// assert!(!filter.set(String::new()));
/// assert!(filter.set("an".to_string()));
/// assert_eq!(filter.get(), "an");
/// ```
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should run the associated change handler when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
