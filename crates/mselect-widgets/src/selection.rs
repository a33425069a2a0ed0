//! Cursor and scroll tracking for lists whose items span several rows.
//!
//! `ScrollState` keeps a cursor (an item index) and a scroll offset (in
//! rows) independently: the wheel moves the offset without touching the
//! cursor, while cursor moves drag the offset along just enough to keep the
//! cursor on screen. Movement does not wrap, so "end of list" stays a
//! reachable, stable position.

/// Scroll position of a list, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// First visible row.
    pub offset: usize,
    /// Total rows of content.
    pub content_height: usize,
    /// Rows that fit on screen.
    pub viewport_height: usize,
}

impl ScrollMetrics {
    /// Whether the last content row is visible.
    pub fn at_bottom(&self) -> bool {
        self.offset + self.viewport_height >= self.content_height
    }
}

/// Tracks cursor position and row offset for a list of equally tall items.
#[derive(Debug, Clone)]
pub struct ScrollState {
    cursor: usize,
    offset: usize,
    count: usize,
    item_height: usize,
    viewport: usize,
}

impl ScrollState {
    pub fn new(item_height: usize, viewport: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            count: 0,
            item_height: item_height.max(1),
            viewport,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn item_height(&self) -> usize {
        self.item_height
    }

    /// Current position for scroll observers.
    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.offset,
            content_height: self.content_height(),
            viewport_height: self.viewport,
        }
    }

    fn content_height(&self) -> usize {
        self.count * self.item_height
    }

    fn max_offset(&self) -> usize {
        self.content_height().saturating_sub(self.viewport)
    }

    /// Change the number of items. Growing keeps the position, shrinking
    /// clamps it.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.cursor = self.cursor.min(count.saturating_sub(1));
        self.offset = self.offset.min(self.max_offset());
    }

    /// Change the number of visible rows.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows;
        self.offset = self.offset.min(self.max_offset());
        self.ensure_visible();
    }

    /// Back to the first item with nothing scrolled.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn move_up(&mut self) {
        self.select(self.cursor.saturating_sub(1));
    }

    pub fn move_down(&mut self) {
        self.select(self.cursor + 1);
    }

    pub fn page_up(&mut self) {
        let step = self.items_per_page();
        self.select(self.cursor.saturating_sub(step));
    }

    pub fn page_down(&mut self) {
        let step = self.items_per_page();
        self.select(self.cursor + step);
    }

    pub fn home(&mut self) {
        self.select(0);
    }

    pub fn end(&mut self) {
        self.select(self.count.saturating_sub(1));
    }

    /// Move the cursor to `index`, clamped to the list.
    pub fn select(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.cursor = index.min(self.count - 1);
        self.ensure_visible();
    }

    /// Scroll the view by `rows` without moving the cursor.
    pub fn scroll_by(&mut self, rows: isize) {
        let target = self.offset.saturating_add_signed(rows);
        self.offset = target.min(self.max_offset());
    }

    /// Item index shown at `row` rows below the top of the viewport.
    pub fn item_at_row(&self, row: usize) -> Option<usize> {
        if row >= self.viewport {
            return None;
        }
        let index = (self.offset + row) / self.item_height;
        (index < self.count).then_some(index)
    }

    fn items_per_page(&self) -> usize {
        (self.viewport / self.item_height).max(1)
    }

    fn ensure_visible(&mut self) {
        if self.count == 0 || self.viewport == 0 {
            return;
        }
        let top = self.cursor * self.item_height;
        let bottom = top + self.item_height;
        if top < self.offset {
            self.offset = top;
        } else if bottom > self.offset + self.viewport {
            self.offset = (bottom - self.viewport.min(bottom)).min(self.max_offset());
        }
    }
}
