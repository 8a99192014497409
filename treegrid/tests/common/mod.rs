#![allow(dead_code)]

use navdom::Element;
use treegrid::{RowContext, RowDescriptor, RowKind, TreeItem, TreeSource};

/// Minimal tree node used across the integration tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub children: Vec<Option<Node>>,
    /// Number of extra focusable controls rendered after the label.
    pub extra_controls: usize,
}

impl Node {
    pub fn leaf(id: &str) -> Self {
        Self {
            id: id.to_string(),
            children: Vec::new(),
            extra_controls: 0,
        }
    }

    pub fn with(id: &str, children: Vec<Node>) -> Self {
        Self {
            id: id.to_string(),
            children: children.into_iter().map(Some).collect(),
            extra_controls: 0,
        }
    }

    pub fn controls(mut self, extra: usize) -> Self {
        self.extra_controls = extra;
        self
    }
}

impl TreeItem for Node {
    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Tree source over owned nodes.
pub struct Forest(pub Vec<Option<Node>>);

impl Forest {
    pub fn new(roots: Vec<Node>) -> Self {
        Self(roots.into_iter().map(Some).collect())
    }
}

impl TreeSource for Forest {
    type Item = Node;

    fn roots(&self) -> Vec<Option<Node>> {
        self.0.clone()
    }

    fn children(&self, item: &Node) -> Vec<Option<Node>> {
        item.children.clone()
    }
}

/// One label button per row plus `extra_controls` buttons; appenders get "Add".
pub fn cells(row: &RowDescriptor<Node>, cx: &RowContext<'_>) -> Vec<Element> {
    match &row.kind {
        RowKind::Item(node) => {
            let mut cells = vec![
                Element::button(node.id.clone())
                    .id(cx.control_id("label"))
                    .data("action", "select"),
            ];
            for n in 0..node.extra_controls {
                cells.push(Element::button(format!("extra {n}")).id(cx.control_id(&format!("extra-{n}"))));
            }
            cells
        }
        RowKind::Appender { .. } => vec![
            Element::button("Add")
                .id(cx.control_id("add"))
                .data("action", "insert"),
        ],
    }
}

pub fn ids(rows: &treegrid::FlattenedGrid<Node>) -> Vec<String> {
    rows.iter().map(|row| row.key()).collect()
}
