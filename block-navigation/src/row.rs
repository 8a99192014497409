//! Cells of a block navigation row.

use navdom::Element;
use treegrid::grid::ACTION_KEY;
use treegrid::{RowContext, RowDescriptor, RowKind, RowRenderer};

use crate::block::Block;

/// What activating a row control does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Select,
    MoveUp,
    MoveDown,
    /// Add a block to the appender row's parent.
    Insert,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::MoveUp => "move-up",
            Self::MoveDown => "move-down",
            Self::Insert => "insert",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "select" => Some(Self::Select),
            "move-up" => Some(Self::MoveUp),
            "move-down" => Some(Self::MoveDown),
            "insert" => Some(Self::Insert),
            _ => None,
        }
    }
}

/// Renders a select button per block, optional mover buttons, and an
/// "Add block" button for appender rows.
#[derive(Debug, Clone, Default)]
pub struct BlockRowRenderer {
    selected: Option<String>,
}

impl BlockRowRenderer {
    pub fn new(selected: Option<&str>) -> Self {
        Self {
            selected: selected.map(str::to_string),
        }
    }

    fn is_selected_block(&self, block: &Block) -> bool {
        self.selected.as_deref() == Some(block.client_id.as_str())
    }
}

fn control(label: impl Into<String>, id: String, action: RowAction) -> Element {
    Element::button(label).id(id).data(ACTION_KEY, action.as_str())
}

impl RowRenderer<Block> for BlockRowRenderer {
    fn render_row(&self, row: &RowDescriptor<Block>, cx: &RowContext<'_>) -> Vec<Element> {
        let block = match &row.kind {
            RowKind::Item(block) => block,
            RowKind::Appender { .. } => {
                return vec![control("Add block", cx.control_id("add"), RowAction::Insert)];
            }
        };

        let mut label = block.label();
        if self.is_selected_block(block) {
            label.push_str(" (selected block)");
        }
        let mut cells = vec![control(label, cx.control_id("select"), RowAction::Select)];

        if cx.show_movers && row.sibling_count > 0 {
            cells.push(control("Move up", cx.control_id("move-up"), RowAction::MoveUp));
            cells.push(control("Move down", cx.control_id("move-down"), RowAction::MoveDown));
        }
        cells
    }

    fn is_selected(&self, row: &RowDescriptor<Block>) -> bool {
        row.item().is_some_and(|block| self.is_selected_block(block))
    }
}
