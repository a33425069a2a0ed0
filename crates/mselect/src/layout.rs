//! Screen regions of the search-select control.
//!
//! The same computation drives drawing and hit testing, so a click is
//! always resolved against what was actually drawn.

use ratatui::layout::{Margin, Rect};

/// Where each part of the control lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    /// Bordered box holding the chips and the input line.
    pub control: Rect,
    pub chips: Rect,
    pub input: Rect,
    /// Bordered dropdown below the control; empty while closed.
    pub dropdown: Rect,
    /// Inside of the dropdown, where rows are drawn.
    pub list: Rect,
}

impl Regions {
    /// Whether a point lies on the control or its dropdown.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        hit(self.control, column, row) || hit(self.dropdown, column, row)
    }

    pub fn in_control(&self, column: u16, row: u16) -> bool {
        hit(self.control, column, row)
    }

    pub fn in_dropdown(&self, column: u16, row: u16) -> bool {
        hit(self.dropdown, column, row)
    }
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Chips need this many columns less than the area: the border.
pub fn chips_width(area: Rect) -> u16 {
    area.width.saturating_sub(2)
}

/// Lay out the control inside `area`.
///
/// `chips_height` is the number of rows the chips wrap to at
/// [`chips_width`]; `list_height` is the preferred dropdown height in rows,
/// shrunk when the area is too short.
pub fn regions(area: Rect, chips_height: u16, list_height: u16, open: bool) -> Regions {
    let control = Rect {
        height: (chips_height + 3).min(area.height),
        ..area
    };
    let inner = control.inner(Margin::new(1, 1));
    let input_y = inner.bottom().saturating_sub(1).max(inner.y);
    let chips = Rect {
        height: input_y.saturating_sub(inner.y),
        ..inner
    };
    let input = Rect {
        y: input_y,
        height: inner.height.min(1),
        ..inner
    };

    let (dropdown, list) = if open {
        let room = area.bottom().saturating_sub(control.bottom());
        let dropdown = Rect {
            y: control.bottom(),
            height: (list_height + 2).min(room),
            ..area
        };
        (dropdown, dropdown.inner(Margin::new(1, 1)))
    } else {
        (Rect::default(), Rect::default())
    };

    Regions {
        control,
        chips,
        input,
        dropdown,
        list,
    }
}
