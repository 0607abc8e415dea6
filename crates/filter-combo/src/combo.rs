//! The filterable combo box state machine.
//!
//! [`FilterComboBox`] keeps five pieces of state consistent: the full-item
//! snapshot, the visible (possibly filtered) item list, the selection, the
//! edit field's display text and the filter text. Every write path runs
//! synchronously on the UI thread, and two [`ReentrancyFlag`]s stop the
//! change handlers from feeding back into each other:
//!
//! - `edit_sync` is set while the display text is written from the
//!   selection, or while an edit clears the selection.
//! - `filter_pass` is set while a filtered list is being installed.
//!
//! # Example
//!
//! ```
//! use filter_combo::FilterComboBox;
//! use filter_combo::item::plain_items;
//!
//! let mut combo: FilterComboBox<String> =
//!     FilterComboBox::new().with_items(plain_items(["Apple", "Banana", "Peach"]));
//! combo.attach();
//!
//! combo.handle_text_input("an");
//! assert!(combo.is_dropdown_open());
//! assert_eq!(combo.visible_items().len(), 1);
//!
//! combo.set_selected_index(0);
//! assert_eq!(combo.display_text(), "Banana");
//! ```

use filter_combo_core::logging::targets;
use filter_combo_core::{Property, ReentrancyFlag, Signal};

use crate::config::FilterComboConfig;
use crate::error::Result;
use crate::events::{ComboEvent, Key, KeyPressEvent, MouseButton, MousePressEvent, MouseReleaseEvent};
use crate::filter::{FilterPredicate, default_predicate, filter_items};
use crate::host::{HeadlessHost, HitPart, SelectorHost};
use crate::item::{ComboItem, ListItem};
use crate::projection::DisplayProjection;

/// A combo box whose edit field filters its item list.
///
/// Typing into the edit field narrows the dropdown to the items that match
/// the typed text; choosing an item writes its display projection back into
/// the field. The visual side (overlay, rows, hit-testing) is delegated to a
/// [`SelectorHost`].
pub struct FilterComboBox<T, H = HeadlessHost> {
    config: FilterComboConfig,
    host: H,

    /// Statically declared items, used when no source is bound.
    static_items: Vec<ComboItem<T>>,
    /// The bound item source: what the list currently shows.
    items_source: Option<Vec<ComboItem<T>>>,
    /// The unfiltered items every filter pass starts from.
    full_items: Option<Vec<ComboItem<T>>>,
    /// Whether `full_items` was captured from the static items.
    static_snapshot: bool,

    filter_text: Property<String>,
    display_text: Property<String>,
    selected_item: Option<ComboItem<T>>,
    selected_index: Property<i32>,
    dropdown_open: Property<bool>,
    text_focused: bool,
    attached: bool,

    /// Caller-supplied filter, replacing the default rule.
    predicate: Option<FilterPredicate<T>>,
    default_predicate: FilterPredicate<T>,
    projection: DisplayProjection<T>,

    edit_sync: ReentrancyFlag,
    filter_pass: ReentrancyFlag,

    // Signals
    /// Signal emitted after the dropdown has opened.
    pub dropdown_opened: Signal<()>,
    /// Signal emitted after the dropdown has closed.
    pub dropdown_closed: Signal<()>,
    /// Signal emitted when the selected index or item changes (-1 for none).
    pub selection_changed: Signal<i32>,
    /// Signal emitted when the edit field's text changes.
    pub display_text_changed: Signal<String>,
    /// Signal emitted when the filter text changes.
    pub filter_text_changed: Signal<String>,
    /// Signal emitted after each filter pass with the visible item count.
    pub items_filtered: Signal<usize>,
}

impl<T: ListItem> FilterComboBox<T, HeadlessHost> {
    /// Create a combo box with default configuration and a headless host.
    pub fn new() -> Self {
        Self::with_host(HeadlessHost::new())
    }

    /// Create a combo box from a configuration, validating it first.
    pub fn from_config(config: FilterComboConfig) -> Result<Self> {
        Self::from_config_with_host(config, HeadlessHost::new())
    }
}

impl<T: ListItem> Default for FilterComboBox<T, HeadlessHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListItem, H: SelectorHost> FilterComboBox<T, H> {
    /// Create a combo box with default configuration driving `host`.
    pub fn with_host(host: H) -> Self {
        Self::build(FilterComboConfig::default(), DisplayProjection::ItemString, host)
    }

    /// Create a combo box from a configuration, driving `host`.
    pub fn from_config_with_host(config: FilterComboConfig, host: H) -> Result<Self> {
        config.validate()?;
        let projection = config.display_projection()?;
        Ok(Self::build(config, projection, host))
    }

    fn build(config: FilterComboConfig, projection: DisplayProjection<T>, mut host: H) -> Self {
        host.configure(&config);
        let default_predicate = default_predicate(config.case_sensitivity);

        Self {
            config,
            host,
            static_items: Vec::new(),
            items_source: None,
            full_items: None,
            static_snapshot: false,
            filter_text: Property::new(String::new()),
            display_text: Property::new(String::new()),
            selected_item: None,
            selected_index: Property::new(-1),
            dropdown_open: Property::new(false),
            text_focused: false,
            attached: false,
            predicate: None,
            default_predicate,
            projection,
            edit_sync: ReentrancyFlag::new("edit_sync"),
            filter_pass: ReentrancyFlag::new("filter_pass"),
            dropdown_opened: Signal::new(),
            dropdown_closed: Signal::new(),
            selection_changed: Signal::new(),
            display_text_changed: Signal::new(),
            filter_text_changed: Signal::new(),
            items_filtered: Signal::new(),
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Set the static items using builder pattern.
    pub fn with_items(mut self, items: impl IntoIterator<Item = ComboItem<T>>) -> Self {
        self.add_items(items);
        self
    }

    /// Bind an item source using builder pattern.
    pub fn with_items_source(mut self, items: impl IntoIterator<Item = ComboItem<T>>) -> Self {
        self.set_items_source(items);
        self
    }

    /// Override the full-item snapshot using builder pattern.
    pub fn with_full_items_source(
        mut self,
        items: impl IntoIterator<Item = ComboItem<T>>,
    ) -> Self {
        self.set_full_items_source(items);
        self
    }

    /// Replace the default filter rule using builder pattern.
    pub fn with_filter_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&ComboItem<T>, &str) -> bool + Send + Sync + 'static,
    {
        self.set_filter_predicate(Some(std::sync::Arc::new(predicate)));
        self
    }

    /// Set the display projection using builder pattern.
    pub fn with_display_projection(mut self, projection: DisplayProjection<T>) -> Self {
        self.set_display_projection(projection);
        self
    }

    /// Set the selected index using builder pattern.
    pub fn with_selected_index(mut self, index: i32) -> Self {
        self.set_selected_index(index);
        self
    }

    // =========================================================================
    // Configuration and host
    // =========================================================================

    /// The active configuration.
    pub fn config(&self) -> &FilterComboConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// The display projection is rebuilt from `display_member_path`, and the
    /// default filter from `case_sensitivity`.
    pub fn set_config(&mut self, config: FilterComboConfig) -> Result<()> {
        config.validate()?;
        let projection = config.display_projection()?;
        self.host.configure(&config);
        self.default_predicate = default_predicate(config.case_sensitivity);
        self.config = config;
        self.set_display_projection(projection);
        if !self.filter_text.with(String::is_empty) {
            self.apply_filter();
        }
        Ok(())
    }

    /// The placeholder shown while the edit field is empty.
    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.config.placeholder = text.into();
    }

    /// Whether the placeholder is currently drawn.
    pub fn is_placeholder_visible(&self) -> bool {
        !self.config.placeholder.is_empty() && self.display_text.with(String::is_empty)
    }

    /// The host collaborator.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host collaborator.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Set or clear the caller-supplied filter predicate.
    ///
    /// An active filter is re-applied with the new rule.
    pub fn set_filter_predicate(&mut self, predicate: Option<FilterPredicate<T>>) {
        self.predicate = predicate;
        if !self.filter_text.with(String::is_empty) {
            self.apply_filter();
        }
    }

    /// The display projection.
    pub fn display_projection(&self) -> &DisplayProjection<T> {
        &self.projection
    }

    /// Set the display projection and re-render the current selection.
    pub fn set_display_projection(&mut self, projection: DisplayProjection<T>) {
        self.projection = projection;
        self.sync_display_from_selection();
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// The list the dropdown currently shows.
    pub fn visible_items(&self) -> &[ComboItem<T>] {
        self.items_source.as_deref().unwrap_or(&self.static_items)
    }

    /// Number of visible items.
    pub fn count(&self) -> usize {
        self.visible_items().len()
    }

    /// The full-item snapshot, once captured.
    pub fn full_items(&self) -> Option<&[ComboItem<T>]> {
        self.full_items.as_deref()
    }

    /// The bound item source, if any.
    pub fn items_source(&self) -> Option<&[ComboItem<T>]> {
        self.items_source.as_deref()
    }

    /// The statically declared items.
    pub fn static_items(&self) -> &[ComboItem<T>] {
        &self.static_items
    }

    /// Add a static item.
    pub fn add_item(&mut self, item: impl Into<ComboItem<T>>) {
        self.static_items.push(item.into());
        self.on_static_items_changed();
    }

    /// Add several static items.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = ComboItem<T>>) {
        self.static_items.extend(items);
        self.on_static_items_changed();
    }

    /// Bind a new item source, replacing the full-item snapshot.
    ///
    /// An active filter is re-applied to the new items.
    pub fn set_items_source(&mut self, items: impl IntoIterator<Item = ComboItem<T>>) {
        let items: Vec<_> = items.into_iter().collect();
        tracing::debug!(target: targets::FILTER, count = items.len(), "item source replaced");
        if !self.filter_pass.is_set() {
            self.full_items = None;
            self.static_snapshot = false;
        }
        self.items_source = Some(items);
        self.on_items_source_changed();

        if !self.filter_text.with(String::is_empty) {
            self.apply_filter();
        }
    }

    /// Set the unfiltered items explicitly and re-apply the current filter.
    pub fn set_full_items_source(&mut self, items: impl IntoIterator<Item = ComboItem<T>>) {
        let items: Vec<_> = items.into_iter().collect();
        tracing::debug!(target: targets::FILTER, count = items.len(), "full item source set");
        self.full_items = Some(items);
        self.static_snapshot = false;
        self.apply_filter();
    }

    /// Whether the control has been attached to the display tree.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attach the control to the display tree, capturing the snapshot.
    pub fn attach(&mut self) {
        self.attached = true;
        self.ensure_snapshot();
        let count = self.count();
        self.host.items_changed(count);
    }

    /// Reaction to the static collection growing.
    ///
    /// A snapshot taken from the static items follows them; the visible list
    /// is rebuilt from it if a filter pass has already installed one.
    fn on_static_items_changed(&mut self) {
        if self.static_snapshot {
            tracing::debug!(target: targets::FILTER, count = self.static_items.len(), "static snapshot refreshed");
            self.full_items = Some(self.static_items.clone());
            if self.items_source.is_some() {
                self.apply_filter();
                return;
            }
        }
        if self.items_source.is_some() {
            return;
        }
        let count = self.static_items.len();
        self.host.items_changed(count);
        self.reconcile_selection();
    }

    /// Reaction to the visible list being replaced.
    fn on_items_source_changed(&mut self) {
        let count = self.count();
        self.host.items_changed(count);

        if self.full_items.is_none()
            && !self.filter_pass.is_set()
            && let Some(source) = &self.items_source
        {
            tracing::debug!(target: targets::FILTER, count, "captured full-item snapshot from source");
            self.full_items = Some(source.clone());
        }

        self.reconcile_selection();
    }

    /// Capture the snapshot if none exists. Returns `false` without a source.
    fn ensure_snapshot(&mut self) -> bool {
        if self.full_items.is_some() {
            return true;
        }

        let (source, from_static) = match &self.items_source {
            Some(items) => (items.clone(), false),
            None if !self.static_items.is_empty() => (self.static_items.clone(), true),
            None => {
                tracing::trace!(target: targets::FILTER, "no item source to snapshot");
                return false;
            }
        };

        tracing::debug!(target: targets::FILTER, count = source.len(), from_static, "captured full-item snapshot");
        self.full_items = Some(source);
        self.static_snapshot = from_static;
        true
    }

    /// Install `items` as the visible list under the filter-pass guard.
    fn install_visible(&mut self, items: Vec<ComboItem<T>>) {
        let _pass = self.filter_pass.scope();
        self.items_source = Some(items);
        self.on_items_source_changed();
    }

    /// Make the snapshot visible unless it already is.
    fn restore_unfiltered(&mut self) {
        if !self.ensure_snapshot() {
            return;
        }
        let Some(full) = &self.full_items else {
            return;
        };
        if self.visible_items() == full.as_slice() {
            return;
        }
        let full = full.clone();
        tracing::trace!(target: targets::FILTER, count = full.len(), "restoring unfiltered items");
        self.install_visible(full);
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// The current filter text.
    pub fn filter_text(&self) -> String {
        self.filter_text.get()
    }

    /// Set the filter text. Always runs a filter pass.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.filter_text.set(text.clone()) {
            self.filter_text_changed.emit(text);
        }
        self.apply_filter();
    }

    /// Whether a filter pass is in flight.
    pub fn is_filtering(&self) -> bool {
        self.filter_pass.is_set()
    }

    fn apply_filter(&mut self) {
        let _span = tracing::trace_span!(target: targets::FILTER, "filter_pass").entered();
        if self.filter_pass.is_set() {
            tracing::trace!(target: targets::FILTER, "nested filter pass ignored");
            return;
        }
        if !self.ensure_snapshot() {
            return;
        }

        let filter_text = self.filter_text.get();
        if filter_text.is_empty() {
            self.restore_unfiltered();
        } else {
            let Some(full) = &self.full_items else {
                return;
            };
            let predicate = self.predicate.as_ref().unwrap_or(&self.default_predicate);
            let visible = filter_items(full, &filter_text, predicate);
            self.install_visible(visible);
        }

        let count = self.count();
        tracing::debug!(target: targets::FILTER, filter = %filter_text, visible = count, "filter pass complete");
        self.items_filtered.emit(count);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The selected index into the visible list, or -1.
    pub fn selected_index(&self) -> i32 {
        self.selected_index.get()
    }

    /// The selected item.
    pub fn selected_item(&self) -> Option<&ComboItem<T>> {
        self.selected_item.as_ref()
    }

    /// Select the visible item at `index`. Out-of-range indices clear the selection.
    pub fn set_selected_index(&mut self, index: i32) {
        let item = usize::try_from(index)
            .ok()
            .and_then(|i| self.visible_items().get(i).cloned());
        match item {
            Some(item) => self.apply_selection(Some(item), index),
            None => self.apply_selection(None, -1),
        }
    }

    /// Select an item. Items that are not visible clear the selection.
    pub fn set_selected_item(&mut self, item: Option<ComboItem<T>>) {
        let position = item
            .as_ref()
            .and_then(|item| self.visible_items().iter().position(|v| v == item));
        match (item, position) {
            (Some(item), Some(position)) => self.apply_selection(Some(item), to_index(position)),
            _ => self.apply_selection(None, -1),
        }
    }

    fn apply_selection(&mut self, item: Option<ComboItem<T>>, index: i32) {
        let item_changed = self.selected_item != item;
        self.selected_item = item;
        let index_changed = self.selected_index.set(index);
        if item_changed || index_changed {
            self.on_selection_changed();
        }
    }

    fn on_selection_changed(&mut self) {
        let index = self.selected_index.get();
        tracing::debug!(target: targets::SELECTION, index, "selection changed");
        self.selection_changed.emit(index);

        if self.edit_sync.is_set() || self.filter_pass.is_set() {
            tracing::trace!(target: targets::SELECTION, "display sync suppressed");
            return;
        }
        self.sync_display_from_selection();
        self.focus_selected_row();
    }

    /// Point the selection at the item's position in the visible list, or
    /// clear it when the item is no longer visible.
    fn reconcile_selection(&mut self) {
        let Some(item) = self.selected_item.clone() else {
            return;
        };

        let visible = self.visible_items();
        let in_place = usize::try_from(self.selected_index.get())
            .ok()
            .and_then(|i| visible.get(i))
            .is_some_and(|v| *v == item);
        if in_place {
            return;
        }

        match visible.iter().position(|v| *v == item) {
            Some(position) => {
                tracing::trace!(target: targets::SELECTION, position, "selection re-indexed");
                self.apply_selection(Some(item), to_index(position));
            }
            None => {
                tracing::trace!(target: targets::SELECTION, "selected item no longer visible");
                self.apply_selection(None, -1);
            }
        }
    }

    /// Commit a visible row as the selection. Disabled rows are refused.
    fn commit_row(&mut self, row: usize) -> bool {
        match self.visible_items().get(row) {
            Some(item) if item.is_enabled() => {
                let item = item.clone();
                tracing::debug!(target: targets::SELECTION, row, "row committed");
                self.apply_selection(Some(item), to_index(row));
                true
            }
            Some(_) => {
                tracing::trace!(target: targets::SELECTION, row, "disabled row not committed");
                false
            }
            None => false,
        }
    }

    // =========================================================================
    // Display text
    // =========================================================================

    /// The edit field's text.
    pub fn display_text(&self) -> String {
        self.display_text.get()
    }

    /// Write the edit field's text programmatically.
    ///
    /// The write notifies the same handler user edits do.
    pub fn set_display_text(&mut self, text: impl Into<String>) {
        self.write_text_field(text.into());
    }

    /// Render an entry with the active display projection.
    pub fn render_display(&self, item: &ComboItem<T>) -> String {
        self.projection.render(item)
    }

    /// Assign the edit field's text, notifying the text-changed handler on change.
    fn write_text_field(&mut self, text: String) {
        if self.display_text.set(text.clone()) {
            self.display_text_changed.emit(text.clone());
            self.on_text_changed(text);
        }
    }

    fn sync_display_from_selection(&mut self) {
        let Some(item) = &self.selected_item else {
            return;
        };
        let text = self.projection.render(item);
        tracing::trace!(target: targets::TEXT, text = %text, "display text synced from selection");
        let _sync = self.edit_sync.scope();
        self.write_text_field(text);
    }

    /// Handle the edit field's text having been changed by the user.
    pub fn handle_text_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.display_text.set(text.clone()) {
            self.display_text_changed.emit(text.clone());
        }
        self.on_text_changed(text);
    }

    fn on_text_changed(&mut self, text: String) {
        let _span = tracing::trace_span!(target: targets::TEXT, "text_input").entered();
        if self.edit_sync.is_set() {
            tracing::trace!(target: targets::TEXT, "programmatic write ignored");
            return;
        }

        if let Some(selected) = &self.selected_item {
            if self.projection.render(selected) == text {
                tracing::debug!(target: targets::TEXT, "edit matches the selection");
                self.set_dropdown_open(false);
                return;
            }

            let _sync = self.edit_sync.scope();
            tracing::debug!(target: targets::TEXT, "edit diverged from the selection");
            self.apply_selection(None, -1);
        }

        self.display_text.set(text.clone());
        self.set_filter_text(text);
        if !self.is_dropdown_open() {
            self.set_dropdown_open(true);
        }
    }

    /// Whether the edit field has keyboard focus.
    pub fn has_text_focus(&self) -> bool {
        self.text_focused
    }

    /// Handle the edit field gaining focus.
    pub fn handle_text_focus_in(&mut self) {
        self.text_focused = true;
    }

    /// Handle the edit field losing focus.
    ///
    /// With the dropdown closed, free text that did not select anything is
    /// discarded and the filter is cleared.
    pub fn handle_text_focus_out(&mut self) {
        self.text_focused = false;
        if self.is_dropdown_open() {
            return;
        }

        if self.selected_item.is_none() {
            let _sync = self.edit_sync.scope();
            self.write_text_field(String::new());
        } else {
            self.sync_display_from_selection();
        }
        self.set_filter_text(String::new());
    }

    /// Reset selection, display text and filter, restoring the unfiltered list.
    pub fn clear(&mut self) {
        tracing::debug!(target: targets::WIDGET, "clear");
        let _sync = self.edit_sync.scope();
        self.apply_selection(None, -1);
        self.write_text_field(String::new());
        self.set_filter_text(String::new());
    }

    // =========================================================================
    // Dropdown
    // =========================================================================

    /// Whether the dropdown is open.
    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open.get()
    }

    /// Open or close the dropdown.
    pub fn set_dropdown_open(&mut self, open: bool) {
        if !self.dropdown_open.set(open) {
            return;
        }
        if open {
            self.on_dropdown_opened();
        } else {
            self.on_dropdown_closed();
        }
    }

    /// Open the dropdown.
    pub fn open_dropdown(&mut self) {
        self.set_dropdown_open(true);
    }

    /// Close the dropdown.
    pub fn close_dropdown(&mut self) {
        self.set_dropdown_open(false);
    }

    /// Toggle the dropdown.
    pub fn toggle_dropdown(&mut self) {
        let open = self.is_dropdown_open();
        self.set_dropdown_open(!open);
    }

    fn on_dropdown_opened(&mut self) {
        self.host.set_overlay_visible(true);
        if self.filter_text.with(String::is_empty) {
            self.restore_unfiltered();
        }
        self.focus_selected_row();
        tracing::debug!(target: targets::DROPDOWN, visible = self.count(), "dropdown opened");
        self.dropdown_opened.emit(());
    }

    fn on_dropdown_closed(&mut self) {
        self.host.set_overlay_visible(false);
        if !self.edit_sync.is_set() {
            self.sync_display_from_selection();
        }
        tracing::debug!(target: targets::DROPDOWN, "dropdown closed");
        self.dropdown_closed.emit(());
    }

    /// Give the selected row keyboard focus, scrolling it into view once if needed.
    fn focus_selected_row(&mut self) {
        if !self.is_dropdown_open() {
            return;
        }
        let Ok(index) = usize::try_from(self.selected_index.get()) else {
            return;
        };
        if index >= self.count() {
            return;
        }

        if self.host.is_row_realized(index) && self.host.focus_row(index) {
            return;
        }
        self.host.scroll_into_view(index);
        if !self.host.focus_row(index) {
            tracing::debug!(target: targets::DROPDOWN, index, "selected row not realized after scrolling");
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Dispatch an input event. Returns `true` if the event was handled.
    pub fn event(&mut self, event: &ComboEvent) -> bool {
        match event {
            ComboEvent::Attached => {
                self.attach();
                false
            }
            ComboEvent::KeyPress(e) => self.handle_key_press(e),
            ComboEvent::MousePress(e) => self.handle_mouse_press(e),
            ComboEvent::MouseRelease(e) => self.handle_mouse_release(e),
            ComboEvent::TextChanged(text) => {
                self.handle_text_input(text.clone());
                true
            }
            ComboEvent::TextFocusIn => {
                self.handle_text_focus_in();
                false
            }
            ComboEvent::TextFocusOut => {
                self.handle_text_focus_out();
                false
            }
        }
    }

    /// Handle a key press. Returns `true` if the key was consumed.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if self.config.is_toggle_key(event) {
            tracing::trace!(target: targets::INPUT, key = ?event.key, "toggle key");
            self.toggle_dropdown();
            return true;
        }

        let open = self.is_dropdown_open();
        match event.key {
            Key::Escape if open => {
                self.close_dropdown();
                true
            }
            Key::Enter | Key::Space if !open => {
                self.open_dropdown();
                true
            }
            Key::Enter => {
                if let Some(row) = self.host.focused_row() {
                    self.commit_row(row);
                }
                self.close_dropdown();
                true
            }
            Key::ArrowDown | Key::ArrowUp if open && self.count() > 0 => {
                self.move_row_focus(event.key == Key::ArrowDown);
                true
            }
            _ => self.base_key_press(event),
        }
    }

    /// Move keyboard focus through the realized rows, wrapping at the ends.
    fn move_row_focus(&mut self, forward: bool) {
        let rows = self.host.realized_rows();
        if rows.is_empty() {
            return;
        }

        let current = self
            .host
            .focused_row()
            .and_then(|focused| rows.iter().position(|&row| row == focused));
        let last = rows.len() - 1;
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(pos), true) if pos == last => 0,
            (Some(pos), true) => pos + 1,
            (Some(0), false) => last,
            (Some(pos), false) => pos - 1,
        };
        tracing::trace!(target: targets::INPUT, row = rows[next], "row focus moved");
        self.host.focus_row(rows[next]);
    }

    /// Plain list behaviour for keys the dropdown does not claim.
    fn base_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if self.is_dropdown_open() {
            return false;
        }

        let index = self.selected_index.get();
        let count = to_index(self.count());
        match event.key {
            Key::ArrowDown => {
                if index < count - 1 {
                    self.set_selected_index(index + 1);
                }
                true
            }
            Key::ArrowUp => {
                if index > 0 {
                    self.set_selected_index(index - 1);
                }
                true
            }
            _ => false,
        }
    }

    /// Handle a mouse press. Returns `true` if the press was consumed.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        let open = self.is_dropdown_open();
        match self.host.hit_test(event.local_pos) {
            HitPart::Overlay | HitPart::OverlayRow(_) => true,
            HitPart::TextField => {
                if !open {
                    self.open_dropdown();
                }
                true
            }
            HitPart::Body => {
                if open {
                    self.close_dropdown();
                } else {
                    if self.filter_text.with(String::is_empty) {
                        self.restore_unfiltered();
                    }
                    self.open_dropdown();
                }
                true
            }
            HitPart::None => {
                if open {
                    self.close_dropdown();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Handle a mouse release. A release on a row commits it.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left || !self.is_dropdown_open() {
            return false;
        }

        match self.host.hit_test(event.local_pos) {
            HitPart::OverlayRow(row) => {
                if self.commit_row(row) {
                    self.set_filter_text(String::new());
                    self.close_dropdown();
                }
                true
            }
            HitPart::Overlay => true,
            _ => false,
        }
    }
}

/// Convert a list position to the `i32` index the selection signals carry.
fn to_index(position: usize) -> i32 {
    i32::try_from(position).unwrap_or(i32::MAX)
}

static_assertions::assert_impl_all!(FilterComboBox<String>: Send, Sync);
