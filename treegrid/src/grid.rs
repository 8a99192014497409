//! The tree grid container.
//!
//! `TreeGrid` owns the flattened rows of the last render and the roving tab
//! stop. It renders rows without recursion, one element per row descriptor,
//! and handles the grid's share of input: arrow keys, activation keys and
//! pointer clicks on its controls.

use navdom::element::{closest, find_element};
use navdom::{Document, Element, Event, EventResult, Key, KeyHandler, Modifiers, NavDirection, Role};

use crate::flatten::{FlattenedGrid, RowDescriptor, RowKind, escape_key, flatten};
use crate::item::{TreeItem, TreeSource};
use crate::navigate::{FocusPosition, Navigation, focus_position, navigate};
use crate::options::TreeGridOptions;
use crate::render::{RowContext, RowRenderer};
use crate::roving::RovingTabIndex;
use crate::scan::{DefaultFocusQuery, FocusQuery, containing_row, focusables_in_row, is_row};

/// Data attribute carrying a row's index into the flattened grid.
pub const ROW_INDEX_KEY: &str = "row-index";
/// Data attribute naming what a control does when activated.
pub const ACTION_KEY: &str = "action";

/// A control of the grid was chosen (Enter, Space or pointer click).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation<T> {
    pub row: RowDescriptor<T>,
    pub row_index: usize,
    /// Column of the control within its row.
    pub column: usize,
    pub control_id: String,
    /// The control's `action` data attribute, if any.
    pub action: Option<String>,
}

type ActivateCallback<T> = Box<dyn FnMut(&Activation<T>)>;

pub struct TreeGrid<T: TreeItem> {
    options: TreeGridOptions,
    rows: FlattenedGrid<T>,
    roving: RovingTabIndex,
    query: Box<dyn FocusQuery>,
    on_activate: Option<ActivateCallback<T>>,
    /// Activations waiting to be drained when no callback is set.
    activations: Vec<Activation<T>>,
}

impl<T: TreeItem> std::fmt::Debug for TreeGrid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeGrid")
            .field("options", &self.options)
            .field("rows", &self.rows.len())
            .field("roving", &self.roving)
            .field("pending_activations", &self.activations.len())
            .finish()
    }
}

impl<T: TreeItem> TreeGrid<T> {
    pub fn new(options: TreeGridOptions) -> Self {
        Self {
            options,
            rows: FlattenedGrid::default(),
            roving: RovingTabIndex::new(),
            query: Box::new(DefaultFocusQuery),
            on_activate: None,
            activations: Vec::new(),
        }
    }

    /// Replace the focusability test used for rows and tab stops.
    pub fn with_focus_query(mut self, query: impl FocusQuery + 'static) -> Self {
        self.query = Box::new(query);
        self
    }

    /// Deliver activations to `callback` instead of queueing them.
    pub fn on_activate(mut self, callback: impl FnMut(&Activation<T>) + 'static) -> Self {
        self.on_activate = Some(Box::new(callback));
        self
    }

    pub fn id(&self) -> &str {
        &self.options.id
    }

    pub fn options(&self) -> &TreeGridOptions {
        &self.options
    }

    /// Replace the options. Takes effect on the next render.
    pub fn set_options(&mut self, options: TreeGridOptions) {
        self.options = options;
    }

    /// Rows of the last render.
    pub fn rows(&self) -> &FlattenedGrid<T> {
        &self.rows
    }

    pub fn tab_stop(&self) -> Option<&str> {
        self.roving.tab_stop()
    }

    pub fn is_mounted(&self) -> bool {
        self.roving.is_mounted()
    }

    /// Element ID of the row for `row`.
    ///
    /// Item rows and appender rows live under different prefixes, and
    /// escaped item ids carry no `/`, so row IDs never collide with each
    /// other or with the `/`-separated cell and control IDs below them.
    pub fn row_id(&self, row: &RowDescriptor<T>) -> String {
        match &row.kind {
            RowKind::Item(item) => format!("{}-row-{}", self.options.id, escape_key(&item.id())),
            RowKind::Appender { parent_id } => {
                format!("{}-appender-{}", self.options.id, escape_key(parent_id))
            }
        }
    }

    /// Take the queued activations.
    pub fn take_activations(&mut self) -> Vec<Activation<T>> {
        std::mem::take(&mut self.activations)
    }

    /// Position of the active element inside this grid.
    pub fn focus_position(&self, doc: &Document) -> Option<FocusPosition> {
        let container = doc.find(&self.options.id)?;
        focus_position(container, doc.active_element()?, &*self.query)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Flatten `roots` and build the grid element.
    ///
    /// The first render mounts the roving tab stop on the initial-focus
    /// item's first control (or the first control). Later renders keep the
    /// stop when it still exists.
    pub fn render<S, R>(&mut self, source: &S, roots: Vec<Option<T>>, renderer: &R) -> Element
    where
        S: TreeSource<Item = T> + ?Sized,
        R: RowRenderer<T> + ?Sized,
    {
        let expand = &self.options.expand;
        let show_appender = self.options.show_appender;
        let rows = flatten(
            source,
            roots,
            |item| expand.is_expanded(&item.id()),
            |_| show_appender,
        );
        self.rows = rows;

        let row_elements: Vec<Element> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let expanded = self.expanded_state(source, index, row);
                self.render_row(index, row, expanded, renderer)
            })
            .collect();

        let mut container = Element::box_()
            .id(self.options.id.clone())
            .role(Role::TreeGrid)
            .children(row_elements);

        if self.roving.is_mounted() {
            self.roving.reconcile(&container, &*self.query);
        } else {
            let default = self
                .options
                .initial_focus
                .as_deref()
                .and_then(|item_id| self.first_control_of(&container, item_id));
            self.roving.mount(&container, default.as_deref(), &*self.query);
        }
        self.roving.apply(&mut container, &*self.query);

        log::debug!(
            "[treegrid] {} rendered {} rows, tab stop {:?}",
            self.options.id,
            self.rows.len(),
            self.roving.tab_stop()
        );
        container
    }

    /// `Some(true)` when the row's children follow it, `Some(false)` when it
    /// has children that are not shown, `None` for leaves and appenders.
    fn expanded_state<S>(&self, source: &S, index: usize, row: &RowDescriptor<T>) -> Option<bool>
    where
        S: TreeSource<Item = T> + ?Sized,
    {
        let item = row.item()?;
        let shows_children = self
            .rows
            .get(index + 1)
            .is_some_and(|next| next.depth > row.depth);
        if shows_children {
            return Some(true);
        }
        source
            .children(item)
            .iter()
            .any(Option::is_some)
            .then_some(false)
    }

    fn render_row<R>(
        &self,
        index: usize,
        row: &RowDescriptor<T>,
        expanded: Option<bool>,
        renderer: &R,
    ) -> Element
    where
        R: RowRenderer<T> + ?Sized,
    {
        let row_id = self.row_id(row);
        let cx = RowContext {
            grid_id: &self.options.id,
            row_id: &row_id,
            row_index: index,
            show_movers: self.options.show_movers,
        };

        let cells: Vec<Element> = renderer
            .render_row(row, &cx)
            .into_iter()
            .enumerate()
            .map(|(column, content)| {
                Element::box_()
                    .id(format!("{row_id}/cell/{column}"))
                    .role(Role::GridCell)
                    .child(content)
            })
            .collect();

        let mut element = Element::box_()
            .id(row_id.clone())
            .role(Role::Row)
            .aria_level(row.depth)
            .aria_pos_in_set(row.position)
            .aria_set_size(row.sibling_count)
            .data(ROW_INDEX_KEY, index.to_string())
            .children(cells);

        if let Some(expanded) = expanded {
            element = element.aria_expanded(expanded);
        }
        if renderer.is_selected(row) {
            element = element.aria_selected(true);
        }
        element
    }

    fn first_control_of(&self, container: &Element, item_id: &str) -> Option<String> {
        let index = self.rows.position_of(item_id)?;
        let row = self.rows.get(index)?;
        let row_element = find_element(container, &self.row_id(row))?;
        focusables_in_row(row_element, &*self.query)
            .first()
            .map(|el| el.id.clone())
    }

    /// Drop the tab stop and strip Tab reachability from the grid's controls.
    pub fn unmount(&mut self, doc: &mut Document) {
        self.roving.unmount();
        self.rows = FlattenedGrid::default();
        if let Some(container) = doc.find_mut(&self.options.id) {
            self.roving.apply(container, &*self.query);
        }
        log::debug!("[treegrid] {} unmounted", self.options.id);
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handle one event.
    ///
    /// Focus events are observed (so Tab into the grid moves the tab stop)
    /// but never consumed.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        match event {
            Event::Key { key, .. } => self.handle_key(doc, *key),
            Event::Click {
                target: Some(target),
                ..
            } => self.handle_click(doc, target),
            Event::Focus { target } => {
                self.sync_tab_stop(doc, target);
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }

    /// Arrow keys navigate; Enter and Space activate the focused control.
    pub fn handle_key(&mut self, doc: &mut Document, key: Key) -> EventResult {
        // Focus may have moved without a Focus event reaching the grid
        if let Some(active) = doc.active_element().map(str::to_string) {
            self.sync_tab_stop(doc, &active);
        }

        if NavDirection::from_key(key).is_some() {
            let Some(container) = doc.find(&self.options.id) else {
                return EventResult::Ignored;
            };
            return match navigate(container, doc.active_element(), key, &*self.query) {
                Navigation::Ignored => EventResult::Ignored,
                Navigation::Stay => EventResult::Consumed,
                Navigation::MoveTo { id, .. } => {
                    self.move_focus(doc, &id);
                    EventResult::Consumed
                }
            };
        }

        if matches!(key, Key::Enter | Key::Char(' ')) {
            let Some(active) = doc.active_element().map(str::to_string) else {
                return EventResult::Ignored;
            };
            if !doc.contains(&self.options.id, &active) {
                return EventResult::Ignored;
            }
            if self.activate(doc, &active) {
                return EventResult::Consumed;
            }
        }

        EventResult::Ignored
    }

    fn handle_click(&mut self, doc: &mut Document, target: &str) -> EventResult {
        if !doc.contains(&self.options.id, target) {
            return EventResult::Ignored;
        }
        // The click may land on a label inside the control. The search stays
        // under the container so focus never leaves the grid.
        let control = doc
            .find(&self.options.id)
            .and_then(|container| {
                closest(container, target, |el| !is_row(el) && self.query.is_focusable(el))
            })
            .filter(|el| el.id != self.options.id)
            .map(|el| el.id.clone());
        let Some(control) = control else {
            return EventResult::Ignored;
        };

        self.move_focus(doc, &control);
        self.activate(doc, &control);
        EventResult::Consumed
    }

    fn move_focus(&mut self, doc: &mut Document, id: &str) {
        match doc.focus(id) {
            Ok(_) => self.sync_tab_stop(doc, id),
            Err(e) => log::warn!("[treegrid] could not focus {}: {}", id, e),
        }
    }

    fn sync_tab_stop(&mut self, doc: &mut Document, id: &str) {
        let Some(container) = doc.find(&self.options.id) else {
            return;
        };
        if self.roving.focus_changed(container, id, &*self.query)
            && let Some(container) = doc.find_mut(&self.options.id)
        {
            self.roving.apply(container, &*self.query);
        }
    }

    /// Record an activation of `control_id`. Returns false when it is not a
    /// control of a rendered row.
    fn activate(&mut self, doc: &Document, control_id: &str) -> bool {
        let Some(activation) = self.activation_for(doc, control_id) else {
            log::debug!("[treegrid] {} is not an activatable control", control_id);
            return false;
        };
        log::debug!(
            "[treegrid] activate row {} column {} ({:?})",
            activation.row_index,
            activation.column,
            activation.action
        );

        match self.on_activate.as_mut() {
            Some(callback) => callback(&activation),
            None => self.activations.push(activation),
        }
        true
    }

    fn activation_for(&self, doc: &Document, control_id: &str) -> Option<Activation<T>> {
        let container = doc.find(&self.options.id)?;
        let row_element = containing_row(container, control_id)?;
        let row_index: usize = row_element.get_data(ROW_INDEX_KEY)?.parse().ok()?;
        let row = self.rows.get(row_index)?.clone();
        let column = focusables_in_row(row_element, &*self.query)
            .iter()
            .position(|el| el.id == control_id)?;
        let action = find_element(row_element, control_id)?.get_data(ACTION_KEY).cloned();

        Some(Activation {
            row,
            row_index,
            column,
            control_id: control_id.to_string(),
            action,
        })
    }
}

impl<T: TreeItem> KeyHandler for TreeGrid<T> {
    fn scope(&self) -> &str {
        &self.options.id
    }

    fn on_key(&mut self, doc: &mut Document, key: Key, _modifiers: Modifiers) -> EventResult {
        self.handle_key(doc, key)
    }
}
