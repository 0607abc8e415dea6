//! The host toolkit surface the combo box drives.
//!
//! [`FilterComboBox`](crate::FilterComboBox) owns its state machine but not
//! its visuals. Everything that depends on realized visual rows, the overlay
//! window or hit-testing goes through [`SelectorHost`].
//!
//! [`HeadlessHost`] is a complete reference implementation without a window:
//! it lays the control out as an edit field plus drop-down button, places the
//! overlay below it with fixed-height rows, and realizes only the rows inside
//! the overlay viewport, as a virtualizing list panel would.

use filter_combo_core::logging::targets;

use crate::config::FilterComboConfig;
use crate::geometry::{Point, Rect, Size};

/// Parts of the control for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitPart {
    /// Outside the control and its overlay.
    #[default]
    None,
    /// The editable text field.
    TextField,
    /// The rest of the control body (drop-down button, chrome).
    Body,
    /// Inside the overlay but not on a row.
    Overlay,
    /// A row of the overlay list, by index into the visible items.
    OverlayRow(usize),
}

impl HitPart {
    /// Whether the part belongs to the overlay.
    pub fn is_overlay(&self) -> bool {
        matches!(self, Self::Overlay | Self::OverlayRow(_))
    }
}

/// Collaborator interface to the host list control, overlay and focus system.
pub trait SelectorHost: Send + Sync {
    /// Apply configuration (row height, overlay height).
    fn configure(&mut self, _config: &FilterComboConfig) {}

    /// The visible item list was replaced; it now has `count` rows.
    fn items_changed(&mut self, count: usize);

    /// Show or hide the overlay.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Whether the visual row for `index` currently exists.
    fn is_row_realized(&self, index: usize) -> bool;

    /// Indices of all realized rows, ascending.
    fn realized_rows(&self) -> Vec<usize>;

    /// The row holding keyboard focus, if any.
    fn focused_row(&self) -> Option<usize>;

    /// Move keyboard focus to a row. Returns `false` if the row is not realized.
    fn focus_row(&mut self, index: usize) -> bool;

    /// Bring a row into the overlay viewport, realizing it.
    fn scroll_into_view(&mut self, index: usize);

    /// Classify a point in control-local coordinates.
    fn hit_test(&self, pos: Point) -> HitPart;
}

/// A windowless [`SelectorHost`] with drop-down list geometry.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    /// Size of the closed control.
    size: Size,
    /// Width of the drop-down button at the right edge.
    arrow_width: f32,
    /// Height of one overlay row.
    item_height: f32,
    /// Whole rows that fit in the overlay.
    viewport_rows: usize,
    /// Number of rows in the visible list.
    row_count: usize,
    /// First realized row.
    scroll_offset: usize,
    /// Row with keyboard focus.
    focused_row: Option<usize>,
    /// Whether the overlay is shown.
    overlay_visible: bool,
    /// Number of scroll-into-view requests received.
    scroll_requests: usize,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        let config = FilterComboConfig::default();
        Self {
            size: Size::new(120.0, 28.0),
            arrow_width: 24.0,
            item_height: config.item_height,
            viewport_rows: config.max_visible_rows(),
            row_count: 0,
            scroll_offset: 0,
            focused_row: None,
            overlay_visible: false,
            scroll_requests: 0,
        }
    }
}

impl HeadlessHost {
    /// Create a host with the default control size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the closed control size using builder pattern.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Whether the overlay is shown.
    pub fn is_overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Number of rows in the visible list.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// First realized row.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Number of scroll-into-view requests received so far.
    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// Rows that fit in the overlay viewport.
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// The editable text field area.
    pub fn text_field_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width - self.arrow_width, self.size.height)
    }

    /// The drop-down button area.
    pub fn arrow_rect(&self) -> Rect {
        Rect::new(
            self.size.width - self.arrow_width,
            0.0,
            self.arrow_width,
            self.size.height,
        )
    }

    /// The overlay area, directly below the control.
    pub fn overlay_rect(&self) -> Rect {
        let visible_count = self.row_count.min(self.viewport_rows());
        let height = visible_count as f32 * self.item_height + 2.0; // +2 for border
        Rect::new(0.0, self.size.height, self.size.width, height)
    }

    /// Center of the overlay row for `index`, if that row is in the viewport.
    pub fn row_center(&self, index: usize) -> Option<Point> {
        if !self.is_row_realized(index) {
            return None;
        }
        let overlay = self.overlay_rect();
        let visual = (index - self.scroll_offset) as f32;
        Some(Point::new(
            overlay.width() / 2.0,
            overlay.origin.y + 1.0 + (visual + 0.5) * self.item_height,
        ))
    }

    fn max_scroll(&self) -> usize {
        self.row_count.saturating_sub(self.viewport_rows())
    }
}

impl SelectorHost for HeadlessHost {
    fn configure(&mut self, config: &FilterComboConfig) {
        self.item_height = config.item_height;
        self.viewport_rows = config.max_visible_rows();
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn items_changed(&mut self, count: usize) {
        self.row_count = count;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        if self.focused_row.is_some_and(|row| row >= count) {
            self.focused_row = None;
        }
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
        if !visible {
            self.focused_row = None;
        }
    }

    fn is_row_realized(&self, index: usize) -> bool {
        self.overlay_visible
            && index < self.row_count
            && index >= self.scroll_offset
            && index < self.scroll_offset + self.viewport_rows()
    }

    fn realized_rows(&self) -> Vec<usize> {
        if !self.overlay_visible {
            return Vec::new();
        }
        let end = (self.scroll_offset + self.viewport_rows()).min(self.row_count);
        (self.scroll_offset..end).collect()
    }

    fn focused_row(&self) -> Option<usize> {
        self.focused_row
    }

    fn focus_row(&mut self, index: usize) -> bool {
        if !self.is_row_realized(index) {
            return false;
        }
        self.focused_row = Some(index);
        true
    }

    fn scroll_into_view(&mut self, index: usize) {
        self.scroll_requests += 1;
        if index >= self.row_count {
            return;
        }
        let viewport = self.viewport_rows();
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + viewport {
            self.scroll_offset = index + 1 - viewport;
        }
        tracing::trace!(target: targets::INPUT, index, offset = self.scroll_offset, "scrolled row into view");
    }

    fn hit_test(&self, pos: Point) -> HitPart {
        if self.text_field_rect().contains(pos) {
            return HitPart::TextField;
        }
        if self.arrow_rect().contains(pos) {
            return HitPart::Body;
        }
        if self.overlay_visible {
            let overlay = self.overlay_rect();
            if overlay.contains(pos) {
                let local_y = pos.y - overlay.origin.y - 1.0; // -1 for border
                if local_y >= 0.0 {
                    let row = (local_y / self.item_height) as usize + self.scroll_offset;
                    if row < self.row_count && self.is_row_realized(row) {
                        return HitPart::OverlayRow(row);
                    }
                }
                return HitPart::Overlay;
            }
        }
        HitPart::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_host(rows: usize) -> HeadlessHost {
        let mut host = HeadlessHost::new();
        host.configure(&FilterComboConfig::new().with_max_dropdown_height(72.0));
        host.items_changed(rows);
        host.set_overlay_visible(true);
        host
    }

    #[test]
    fn test_hit_test_parts() {
        let host = open_host(2);
        assert_eq!(host.hit_test(Point::new(10.0, 10.0)), HitPart::TextField);
        assert_eq!(host.hit_test(Point::new(110.0, 10.0)), HitPart::Body);
        assert_eq!(host.hit_test(Point::new(10.0, 28.5)), HitPart::Overlay);
        assert_eq!(host.hit_test(host.row_center(1).unwrap()), HitPart::OverlayRow(1));
        assert_eq!(host.hit_test(Point::new(10.0, 500.0)), HitPart::None);
    }

    #[test]
    fn test_hidden_overlay_is_not_hit() {
        let mut host = open_host(2);
        let row = host.row_center(0).unwrap();
        host.set_overlay_visible(false);
        assert_eq!(host.hit_test(row), HitPart::None);
    }

    #[test]
    fn test_only_viewport_rows_are_realized() {
        let host = open_host(10);
        assert_eq!(host.viewport_rows(), 3);
        assert_eq!(host.realized_rows(), vec![0, 1, 2]);
        assert!(!host.is_row_realized(5));
    }

    #[test]
    fn test_viewport_follows_configuration() {
        let mut host = open_host(10);
        host.scroll_into_view(9);
        assert_eq!(host.scroll_offset(), 7);

        let config = FilterComboConfig::new()
            .with_item_height(20.0)
            .with_max_dropdown_height(100.0);
        host.configure(&config);
        assert_eq!(host.viewport_rows(), config.max_visible_rows());
        assert_eq!(host.viewport_rows(), 5);
        assert_eq!(host.scroll_offset(), 5);
        assert_eq!(host.realized_rows(), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_scroll_into_view_realizes_row() {
        let mut host = open_host(10);
        assert!(!host.focus_row(7));
        host.scroll_into_view(7);
        assert_eq!(host.scroll_offset(), 5);
        assert!(host.focus_row(7));
        assert_eq!(host.focused_row(), Some(7));

        host.scroll_into_view(1);
        assert_eq!(host.scroll_offset(), 1);
        assert_eq!(host.scroll_requests(), 2);
    }

    #[test]
    fn test_items_changed_drops_stale_focus() {
        let mut host = open_host(5);
        assert!(host.focus_row(2));
        host.items_changed(1);
        assert_eq!(host.focused_row(), None);
        assert_eq!(host.overlay_rect().height(), 26.0);
    }
}
