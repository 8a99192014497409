//! Arrow-key navigation across rows and columns.
//!
//! Nothing is stored between key presses: the current position is derived
//! from the active element every time, so a stale or unexpected focus can
//! only ever result in "stay put".

use navdom::element::contains;
use navdom::{Element, Key, NavDirection};

use crate::scan::{FocusQuery, containing_row, focusables_in_row, rows_in};

/// Row and column of a control inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusPosition {
    pub row_index: usize,
    pub column_index: usize,
}

/// What a key press means for the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Not an arrow key, or focus is not inside the grid. Let it propagate.
    Ignored,
    /// Arrow key for this grid, but focus stays where it is.
    Stay,
    /// Move focus to the control with `id`.
    MoveTo { id: String, position: FocusPosition },
}

impl Navigation {
    /// Whether the key should stop propagating.
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Navigation::Ignored)
    }
}

/// Locate `active_id` inside `container`.
pub fn focus_position<Q>(container: &Element, active_id: &str, query: &Q) -> Option<FocusPosition>
where
    Q: FocusQuery + ?Sized,
{
    let row = containing_row(container, active_id)?;
    let column_index = focusables_in_row(row, query)
        .iter()
        .position(|el| el.id == active_id)?;
    let row_index = rows_in(container).iter().position(|r| r.id == row.id)?;
    Some(FocusPosition {
        row_index,
        column_index,
    })
}

/// Compute where an arrow key moves focus within `container`.
pub fn navigate<Q>(container: &Element, active: Option<&str>, key: Key, query: &Q) -> Navigation
where
    Q: FocusQuery + ?Sized,
{
    let Some(direction) = NavDirection::from_key(key) else {
        return Navigation::Ignored;
    };
    let Some(active) = active else {
        return Navigation::Ignored;
    };
    if !contains(container, active) {
        return Navigation::Ignored;
    }

    let Some(row) = containing_row(container, active) else {
        log::debug!("[navigate] {} is not inside a row", active);
        return Navigation::Stay;
    };
    let cells = focusables_in_row(row, query);
    let Some(column) = cells.iter().position(|el| el.id == active) else {
        log::debug!("[navigate] {} is not a control of row {}", active, row.id);
        return Navigation::Stay;
    };

    let rows = rows_in(container);
    let Some(row_index) = rows.iter().position(|r| r.id == row.id) else {
        return Navigation::Stay;
    };

    if direction.is_horizontal() {
        let next = match direction {
            NavDirection::Left => column.saturating_sub(1),
            _ => (column + 1).min(cells.len() - 1),
        };
        // Already at the left or right edge
        if next == column {
            return Navigation::Stay;
        }
        log::debug!("[navigate] {:?} column {} -> {}", direction, column, next);
        return Navigation::MoveTo {
            id: cells[next].id.clone(),
            position: FocusPosition {
                row_index,
                column_index: next,
            },
        };
    }

    let next_row = match direction {
        NavDirection::Up => row_index.saturating_sub(1),
        _ => (row_index + 1).min(rows.len() - 1),
    };
    // Already at the top or bottom edge
    if next_row == row_index {
        return Navigation::Stay;
    }

    let target_cells = focusables_in_row(rows[next_row], query);
    if target_cells.is_empty() {
        log::debug!("[navigate] row {} has no focusables", rows[next_row].id);
        return Navigation::Stay;
    }

    // Keep the column where possible, clamping into narrower rows
    let next_column = column.min(target_cells.len() - 1);
    log::debug!(
        "[navigate] {:?} ({}, {}) -> ({}, {})",
        direction, row_index, column, next_row, next_column
    );
    Navigation::MoveTo {
        id: target_cells[next_column].id.clone(),
        position: FocusPosition {
            row_index: next_row,
            column_index: next_column,
        },
    }
}
