//! The block navigation panel.
//!
//! Shows the blocks of a [`BlockStore`] as a tree grid. Activating a row's
//! controls edits the store and re-renders the panel in place.

use navdom::{Document, DomError, Element, Event, EventResult, Key, KeyHandler, Modifiers};
use treegrid::{Activation, ExpandPolicy, RowKind, TreeGrid, TreeGridOptions, TreeSource};

use crate::block::{Block, DEFAULT_BLOCK_NAME};
use crate::config::NavigationConfig;
use crate::error::StoreError;
use crate::row::{BlockRowRenderer, RowAction};
use crate::store::{BlockStore, MoveDirection};

/// Which blocks the panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyMode {
    /// No root blocks; the grid has no rows.
    Empty,
    /// Only the selection's top-most ancestor, with every block expanded.
    Nested { root: String },
    /// All root blocks, collapsed.
    Flat,
}

impl HierarchyMode {
    /// Nested when a block is selected and its hierarchy root either is a
    /// different block or has inner blocks.
    pub fn of(store: &BlockStore) -> Self {
        if store.is_empty() {
            return Self::Empty;
        }
        let nested_root = store.selected_block_id().and_then(|selected| {
            let root = store.hierarchy_root_of(selected)?;
            (root.client_id != selected || root.has_children()).then(|| root.client_id.clone())
        });
        match nested_root {
            Some(root) => Self::Nested { root },
            None => Self::Flat,
        }
    }
}

type SelectCallback = Box<dyn FnMut(&str)>;

pub struct BlockNavigation {
    config: NavigationConfig,
    store: BlockStore,
    grid: TreeGrid<Block>,
    mode: HierarchyMode,
    on_select: Option<SelectCallback>,
}

impl std::fmt::Debug for BlockNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockNavigation")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("grid", &self.grid)
            .finish()
    }
}

impl BlockNavigation {
    pub fn new(store: BlockStore, config: NavigationConfig) -> Self {
        let grid = TreeGrid::new(TreeGridOptions::new(config.id.clone()));
        let mode = HierarchyMode::of(&store);
        Self {
            config,
            store,
            grid,
            mode,
            on_select: None,
        }
    }

    /// Called with the client ID of every block selected from the panel.
    pub fn on_select(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn store(&self) -> &BlockStore {
        &self.store
    }

    /// Mutable access to the blocks. Call [`refresh`](Self::refresh)
    /// afterwards to show the changes.
    pub fn store_mut(&mut self) -> &mut BlockStore {
        &mut self.store
    }

    pub fn grid(&self) -> &TreeGrid<Block> {
        &self.grid
    }

    /// Mode of the last render.
    pub fn mode(&self) -> &HierarchyMode {
        &self.mode
    }

    /// Build the panel's grid element.
    pub fn render(&mut self) -> Element {
        self.mode = HierarchyMode::of(&self.store);
        let (roots, expand) = match &self.mode {
            HierarchyMode::Empty => (Vec::new(), ExpandPolicy::None),
            HierarchyMode::Nested { root } => (vec![self.store.block(root).cloned()], ExpandPolicy::All),
            HierarchyMode::Flat => (self.store.roots(), ExpandPolicy::None),
        };

        let mut options = TreeGridOptions::new(self.config.id.clone())
            .expand(expand)
            .show_appender(self.config.show_appender)
            .show_movers(self.config.show_movers);
        if let Some(selected) = self.store.selected_block_id() {
            options = options.initial_focus(selected);
        }
        self.grid.set_options(options);

        log::debug!("[block-navigation] render {:?}", self.mode);
        let renderer = BlockRowRenderer::new(self.store.selected_block_id());
        self.grid.render(&self.store, roots, &renderer)
    }

    /// Re-render the panel inside `doc`.
    ///
    /// When the focused control disappeared, focus moves to the grid's tab
    /// stop so keyboard users stay inside the panel.
    pub fn refresh(&mut self, doc: &mut Document) -> Result<(), DomError> {
        let element = self.render();
        let blurred = doc.replace_element(&self.config.id, element)?;
        if blurred.is_some()
            && let Some(stop) = self.grid.tab_stop().map(str::to_string)
        {
            doc.focus(&stop)?;
        }
        Ok(())
    }

    pub fn unmount(&mut self, doc: &mut Document) {
        self.grid.unmount(doc);
    }

    /// Handle one event, applying any resulting activations to the store.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        let result = self.grid.handle_event(doc, event);

        let mut changed = false;
        for activation in self.grid.take_activations() {
            match self.activate(&activation) {
                Ok(applied) => changed |= applied,
                Err(e) => log::warn!("[block-navigation] {} failed: {}", activation.control_id, e),
            }
        }
        if changed && let Err(e) = self.refresh(doc) {
            log::warn!("[block-navigation] refresh failed: {}", e);
        }
        result
    }

    /// Apply one activation to the store. Returns whether the store changed.
    pub fn activate(&mut self, activation: &Activation<Block>) -> Result<bool, StoreError> {
        let Some(action) = activation.action.as_deref().and_then(RowAction::parse) else {
            log::debug!("[block-navigation] {} has no action", activation.control_id);
            return Ok(false);
        };

        match (&activation.row.kind, action) {
            (RowKind::Item(block), RowAction::Select) => {
                self.store.select_block(&block.client_id)?;
                if let Some(callback) = self.on_select.as_mut() {
                    callback(&block.client_id);
                }
            }
            (RowKind::Item(block), RowAction::MoveUp) => {
                self.store.move_block(&block.client_id, MoveDirection::Up)?;
            }
            (RowKind::Item(block), RowAction::MoveDown) => {
                self.store.move_block(&block.client_id, MoveDirection::Down)?;
            }
            (RowKind::Appender { parent_id }, RowAction::Insert) => {
                let block = self.store.create_block(DEFAULT_BLOCK_NAME);
                self.store.insert_block(Some(parent_id.as_str()), block)?;
            }
            (_, action) => {
                log::debug!(
                    "[block-navigation] {:?} does not apply to row {}",
                    action,
                    activation.row.key()
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl KeyHandler for BlockNavigation {
    fn scope(&self) -> &str {
        &self.config.id
    }

    fn on_key(&mut self, doc: &mut Document, key: Key, modifiers: Modifiers) -> EventResult {
        let event = Event::Key {
            target: doc.active_element().map(str::to_string),
            key,
            modifiers,
        };
        self.handle_event(doc, &event)
    }
}
