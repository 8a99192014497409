//! Tree grid configuration.

use std::collections::HashSet;
use std::sync::Arc;

/// Which items have their children shown.
#[derive(Clone, Default)]
pub enum ExpandPolicy {
    /// Every item with children is expanded.
    All,
    /// Only top-level items are shown.
    #[default]
    None,
    /// Items whose ID is in the set are expanded.
    Ids(HashSet<String>),
    /// Decide per item ID.
    Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl ExpandPolicy {
    pub fn is_expanded(&self, id: &str) -> bool {
        match self {
            Self::All => true,
            Self::None => false,
            Self::Ids(ids) => ids.contains(id),
            Self::Custom(predicate) => predicate(id),
        }
    }
}

impl std::fmt::Debug for ExpandPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::None => write!(f, "None"),
            Self::Ids(ids) => write!(f, "Ids({ids:?})"),
            Self::Custom(_) => write!(f, "Custom(...)"),
        }
    }
}

/// Per-instance tree grid configuration.
#[derive(Debug, Clone)]
pub struct TreeGridOptions {
    /// Element ID of the grid container. Row and cell IDs derive from it.
    pub id: String,

    pub expand: ExpandPolicy,

    /// Close every expanded child group with an appender row.
    pub show_appender: bool,

    /// Passed to the row renderer; the grid itself does not render movers.
    pub show_movers: bool,

    /// Item whose row holds the initial tab stop.
    pub initial_focus: Option<String>,
}

impl Default for TreeGridOptions {
    fn default() -> Self {
        Self {
            id: "treegrid".to_string(),
            expand: ExpandPolicy::None,
            show_appender: false,
            show_movers: false,
            initial_focus: None,
        }
    }
}

impl TreeGridOptions {
    /// Create options for a grid with the given container ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn expand(mut self, policy: ExpandPolicy) -> Self {
        self.expand = policy;
        self
    }

    pub fn expand_all(self) -> Self {
        self.expand(ExpandPolicy::All)
    }

    pub fn show_appender(mut self, show: bool) -> Self {
        self.show_appender = show;
        self
    }

    pub fn show_movers(mut self, show: bool) -> Self {
        self.show_movers = show;
        self
    }

    pub fn initial_focus(mut self, item_id: impl Into<String>) -> Self {
        self.initial_focus = Some(item_id.into());
        self
    }
}
