//! Tree items and the source they are read from.

/// A node of the tree shown by a tree grid.
///
/// Items are cheap snapshots handed out by a [`TreeSource`]; the grid never
/// mutates them.
pub trait TreeItem: Clone + std::fmt::Debug {
    /// Unique identifier for this item.
    fn id(&self) -> String;
}

/// Read-only access to a tree of items.
///
/// Sibling sequences may contain `None` for entries that cannot be resolved;
/// they are skipped when the tree is flattened.
pub trait TreeSource {
    type Item: TreeItem;

    /// Top-level items, in order.
    fn roots(&self) -> Vec<Option<Self::Item>>;

    /// Children of `item`, in order.
    fn children(&self, item: &Self::Item) -> Vec<Option<Self::Item>>;
}
