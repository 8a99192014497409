//! Flattening a tree into ordered rows.

use crate::item::{TreeItem, TreeSource};

/// What a row stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind<T> {
    /// A real item from the tree.
    Item(T),
    /// Synthetic trailing row offering to add a child to `parent_id`.
    Appender { parent_id: String },
}

/// One row of the flattened grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDescriptor<T> {
    pub kind: RowKind<T>,
    /// Depth in tree (0 = root).
    pub depth: usize,
    /// 0-based index within the sibling group.
    pub position: usize,
    /// Size of the sibling group. Always greater than `position`.
    pub sibling_count: usize,
}

impl<T: TreeItem> RowDescriptor<T> {
    pub fn item(&self) -> Option<&T> {
        match &self.kind {
            RowKind::Item(item) => Some(item),
            RowKind::Appender { .. } => None,
        }
    }

    pub fn is_appender(&self) -> bool {
        matches!(self.kind, RowKind::Appender { .. })
    }

    /// Stable key for the row, unique within a grid.
    ///
    /// Item keys are escaped item ids and never contain `/`, so the
    /// appender key of a parent cannot match any item key.
    pub fn key(&self) -> String {
        match &self.kind {
            RowKind::Item(item) => escape_key(&item.id()),
            RowKind::Appender { parent_id } => format!("{}/appender", escape_key(parent_id)),
        }
    }
}

/// Escape an item id for use inside keys and element ids. The result never
/// contains `/`, which element ids derived from it use as a separator.
pub fn escape_key(id: &str) -> String {
    id.replace('%', "%25").replace('/', "%2F")
}

/// An immutable, depth-first ordered sequence of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedGrid<T> {
    rows: Vec<RowDescriptor<T>>,
}

impl<T> Default for FlattenedGrid<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: TreeItem> FlattenedGrid<T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RowDescriptor<T>> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RowDescriptor<T>> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[RowDescriptor<T>] {
        &self.rows
    }

    /// Index of the row backed by the item with `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.item().is_some_and(|item| item.id() == id))
    }

    pub fn item_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_appender()).count()
    }

    pub fn appender_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_appender()).count()
    }
}

impl<'a, T> IntoIterator for &'a FlattenedGrid<T> {
    type Item = &'a RowDescriptor<T>;
    type IntoIter = std::slice::Iter<'a, RowDescriptor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Pending work for the traversal stack.
enum Step<T> {
    Visit {
        item: T,
        depth: usize,
        position: usize,
        sibling_count: usize,
    },
    Appender {
        parent_id: String,
        depth: usize,
        child_count: usize,
    },
}

/// Flatten `roots` (and, where `expand` allows, their descendants) into rows.
///
/// Rows come out in depth-first pre-order: each item is followed by its
/// children before its next sibling. `None` entries are dropped and the
/// remaining siblings re-indexed. When `include_appender_for` holds for an
/// expanded item with at least one child, an appender row closes that child
/// group. The top level never gets an appender.
pub fn flatten<S, E, A>(
    source: &S,
    roots: Vec<Option<S::Item>>,
    expand: E,
    include_appender_for: A,
) -> FlattenedGrid<S::Item>
where
    S: TreeSource + ?Sized,
    E: Fn(&S::Item) -> bool,
    A: Fn(&S::Item) -> bool,
{
    let mut rows = Vec::new();
    let mut stack = Vec::new();
    push_siblings(&mut stack, roots, 0);

    while let Some(step) = stack.pop() {
        match step {
            Step::Visit {
                item,
                depth,
                position,
                sibling_count,
            } => {
                let children = if expand(&item) {
                    source.children(&item)
                } else {
                    Vec::new()
                };
                let child_count = children.iter().flatten().count();

                if child_count > 0 && include_appender_for(&item) {
                    // Pushed first so it pops after every child
                    stack.push(Step::Appender {
                        parent_id: item.id(),
                        depth: depth + 1,
                        child_count,
                    });
                }
                push_siblings(&mut stack, children, depth + 1);

                rows.push(RowDescriptor {
                    kind: RowKind::Item(item),
                    depth,
                    position,
                    sibling_count,
                });
            }
            Step::Appender {
                parent_id,
                depth,
                child_count,
            } => rows.push(RowDescriptor {
                kind: RowKind::Appender { parent_id },
                depth,
                position: child_count,
                sibling_count: child_count + 1,
            }),
        }
    }

    log::trace!("[flatten] {} rows", rows.len());
    FlattenedGrid { rows }
}

/// Push a sibling group so the first sibling is popped first.
fn push_siblings<T>(stack: &mut Vec<Step<T>>, siblings: Vec<Option<T>>, depth: usize) {
    let siblings: Vec<T> = siblings.into_iter().flatten().collect();
    let sibling_count = siblings.len();
    for (position, item) in siblings.into_iter().enumerate().rev() {
        stack.push(Step::Visit {
            item,
            depth,
            position,
            sibling_count,
        });
    }
}
