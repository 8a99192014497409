//! Finding rows and the focusable controls that belong to them.

use navdom::element::{find_path, query_all};
use navdom::{Element, Role};

/// Decides whether an element can take keyboard focus.
pub trait FocusQuery {
    fn is_focusable(&self, element: &Element) -> bool;
}

/// Focusable and not disabled. Any tab index counts, including negative ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFocusQuery;

impl FocusQuery for DefaultFocusQuery {
    fn is_focusable(&self, element: &Element) -> bool {
        element.focusable && !element.disabled
    }
}

impl<F: Fn(&Element) -> bool> FocusQuery for F {
    fn is_focusable(&self, element: &Element) -> bool {
        self(element)
    }
}

pub fn is_row(element: &Element) -> bool {
    element.role == Role::Row
}

/// Focusable controls owned by `row`, in tree order.
///
/// A control belongs to the row whose element is its nearest row ancestor.
/// Only descendants are scanned, so a focusable row element is not one of
/// its own columns. Controls inside a nested row are left to that row.
pub fn focusables_in_row<'a, Q>(row: &'a Element, query: &Q) -> Vec<&'a Element>
where
    Q: FocusQuery + ?Sized,
{
    let mut result = Vec::new();
    for child in row.child_elements() {
        collect_owned(child, query, &mut result);
    }
    log::trace!("[scan] row {} owns {} focusables", row.id, result.len());
    result
}

fn collect_owned<'a, Q>(element: &'a Element, query: &Q, result: &mut Vec<&'a Element>)
where
    Q: FocusQuery + ?Sized,
{
    if is_row(element) {
        return;
    }
    if query.is_focusable(element) {
        result.push(element);
    }
    for child in element.child_elements() {
        collect_owned(child, query, result);
    }
}

/// Every row under `container` (nested ones included), in tree order.
/// The container itself is never reported.
pub fn rows_in(container: &Element) -> Vec<&Element> {
    query_all(container, is_row)
        .into_iter()
        .filter(|row| row.id != container.id)
        .collect()
}

/// Nearest row ancestor-or-self of `id`, searching under `container`.
/// The container itself is not considered.
pub fn containing_row<'a>(container: &'a Element, id: &str) -> Option<&'a Element> {
    find_path(container, id)?
        .into_iter()
        .skip(1)
        .rev()
        .find(|el| is_row(el))
}

/// Every focusable control under `container`, whatever row owns it.
pub fn focusables_in<'a, Q>(container: &'a Element, query: &Q) -> Vec<&'a Element>
where
    Q: FocusQuery + ?Sized,
{
    query_all(container, |el| query.is_focusable(el))
        .into_iter()
        .filter(|el| el.id != container.id)
        .collect()
}
