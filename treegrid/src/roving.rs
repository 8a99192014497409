//! Roving tab index: exactly one control of a grid is reachable by Tab.

use navdom::Element;
use navdom::element::find_element;

use crate::scan::{FocusQuery, focusables_in};

/// Owns the single tab stop of one grid instance.
#[derive(Debug, Default)]
pub struct RovingTabIndex {
    tab_stop: Option<String>,
    mounted: bool,
}

impl RovingTabIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID of the control currently reachable by Tab.
    pub fn tab_stop(&self) -> Option<&str> {
        self.tab_stop.as_deref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Pick the initial tab stop: `default` when it names a control of the
    /// grid, otherwise the first control.
    pub fn mount<Q>(&mut self, container: &Element, default: Option<&str>, query: &Q) -> Option<&str>
    where
        Q: FocusQuery + ?Sized,
    {
        let controls = focusables_in(container, query);
        let chosen = default
            .filter(|id| controls.iter().any(|el| el.id == *id))
            .map(str::to_string)
            .or_else(|| controls.first().map(|el| el.id.clone()));

        log::debug!("[roving] mount {} with tab stop {:?}", container.id, chosen);
        self.tab_stop = chosen;
        self.mounted = true;
        self.tab_stop.as_deref()
    }

    /// Keep the tab stop valid after the grid was re-rendered.
    /// Falls back to the first control when the old stop disappeared.
    pub fn reconcile<Q>(&mut self, container: &Element, query: &Q)
    where
        Q: FocusQuery + ?Sized,
    {
        let controls = focusables_in(container, query);
        let still_present = self
            .tab_stop
            .as_deref()
            .is_some_and(|stop| controls.iter().any(|el| el.id == stop));

        if !still_present {
            let fallback = controls.first().map(|el| el.id.clone());
            log::debug!("[roving] tab stop {:?} gone, falling back to {:?}", self.tab_stop, fallback);
            self.tab_stop = fallback;
        }
    }

    /// Record that focus moved to `id`.
    /// Returns true if `id` is a control of the grid and became the new stop.
    pub fn focus_changed<Q>(&mut self, container: &Element, id: &str, query: &Q) -> bool
    where
        Q: FocusQuery + ?Sized,
    {
        if !self.mounted || self.tab_stop.as_deref() == Some(id) {
            return false;
        }
        let is_control = find_element(container, id)
            .is_some_and(|el| el.id != container.id && query.is_focusable(el));
        if !is_control {
            return false;
        }

        log::debug!("[roving] tab stop {:?} -> {}", self.tab_stop, id);
        self.tab_stop = Some(id.to_string());
        true
    }

    /// Drop the tab stop. No control of the grid stays reachable.
    pub fn unmount(&mut self) {
        self.tab_stop = None;
        self.mounted = false;
    }

    /// Tab index a grid control should carry.
    pub fn tab_index_for(&self, id: &str) -> i32 {
        if self.tab_stop.as_deref() == Some(id) { 0 } else { -1 }
    }

    /// Write tab indices into every control of `container`.
    pub fn apply<Q>(&self, container: &mut Element, query: &Q)
    where
        Q: FocusQuery + ?Sized,
    {
        let container_id = container.id.clone();
        for child in container.child_elements_mut() {
            self.apply_recursive(child, &container_id, query);
        }
    }

    fn apply_recursive<Q>(&self, element: &mut Element, container_id: &str, query: &Q)
    where
        Q: FocusQuery + ?Sized,
    {
        if element.id != container_id && query.is_focusable(element) {
            element.tab_index = Some(self.tab_index_for(&element.id));
        }
        for child in element.child_elements_mut() {
            self.apply_recursive(child, container_id, query);
        }
    }
}
