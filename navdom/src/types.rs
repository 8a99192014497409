/// Semantic role of an element, used by assistive technology and by
/// widgets that need to find structure (rows, cells) in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Generic,
    /// Hierarchical grid container.
    TreeGrid,
    /// One row of a tree grid (the "treeitem" marker).
    Row,
    /// Cell wrapper inside a row.
    GridCell,
    Button,
    Label,
}

/// Accessibility attributes surfaced for an element.
///
/// `level` and `pos_in_set` follow the ARIA convention and are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Aria {
    pub level: Option<usize>,
    pub pos_in_set: Option<usize>,
    pub set_size: Option<usize>,
    pub expanded: Option<bool>,
    pub selected: Option<bool>,
    pub label: Option<String>,
}
