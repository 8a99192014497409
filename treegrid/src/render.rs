//! Row rendering seam.
//!
//! The grid builds rows and cells; what goes inside each cell is up to a
//! [`RowRenderer`].

use navdom::Element;

use crate::flatten::RowDescriptor;
use crate::item::TreeItem;

/// Context handed to a renderer for one row.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    /// Element ID of the grid container.
    pub grid_id: &'a str,
    /// Element ID of the row. Control IDs should derive from it (see
    /// [`RowContext::control_id`]) so they stay stable across renders.
    pub row_id: &'a str,
    pub row_index: usize,
    pub show_movers: bool,
}

impl RowContext<'_> {
    /// Element ID for the control `name` of this row. `name` must not
    /// contain `/`, or it may collide with a cell wrapper.
    pub fn control_id(&self, name: &str) -> String {
        format!("{}/{}", self.row_id, name)
    }
}

/// Supplies the cell contents of each row, left to right.
///
/// Each returned element becomes one grid cell. A cell's focusable
/// descendants become that row's columns.
pub trait RowRenderer<T: TreeItem> {
    fn render_row(&self, row: &RowDescriptor<T>, cx: &RowContext<'_>) -> Vec<Element>;

    /// Whether the row is marked selected (`aria.selected`).
    fn is_selected(&self, _row: &RowDescriptor<T>) -> bool {
        false
    }
}

impl<T, F> RowRenderer<T> for F
where
    T: TreeItem,
    F: Fn(&RowDescriptor<T>, &RowContext<'_>) -> Vec<Element>,
{
    fn render_row(&self, row: &RowDescriptor<T>, cx: &RowContext<'_>) -> Vec<Element> {
        self(row, cx)
    }
}
