//! Editor blocks.

use std::collections::HashMap;

use treegrid::TreeItem;

/// Name of the block inserted by the appender row.
pub const DEFAULT_BLOCK_NAME: &str = "core/paragraph";

/// One block of the document being edited.
///
/// `inner_blocks` may contain `None` holes (blocks that could not be
/// resolved); they are skipped everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub client_id: String,
    /// Namespaced block type, e.g. `core/paragraph`.
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub inner_blocks: Vec<Option<Block>>,
}

impl Block {
    pub fn new(client_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            name: name.into(),
            attributes: HashMap::new(),
            inner_blocks: Vec::new(),
        }
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn inner_block(mut self, block: Block) -> Self {
        self.inner_blocks.push(Some(block));
        self
    }

    pub fn inner_blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.inner_blocks.extend(blocks.into_iter().map(Some));
        self
    }

    /// Inner blocks that are present.
    pub fn children(&self) -> impl Iterator<Item = &Block> {
        self.inner_blocks.iter().flatten()
    }

    pub fn has_children(&self) -> bool {
        self.children().next().is_some()
    }

    /// Whether `client_id` is this block or one of its descendants.
    pub fn contains(&self, client_id: &str) -> bool {
        let mut stack = vec![self];
        while let Some(block) = stack.pop() {
            if block.client_id == client_id {
                return true;
            }
            stack.extend(block.children());
        }
        false
    }

    /// Human readable label: the `label` attribute, then `content`, then a
    /// title derived from the block name.
    pub fn label(&self) -> String {
        ["label", "content"]
            .iter()
            .filter_map(|key| self.attributes.get(*key))
            .find(|value| !value.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| title_from_name(&self.name))
    }
}

impl TreeItem for Block {
    fn id(&self) -> String {
        self.client_id.clone()
    }
}

/// `core/media-text` -> `Media Text`.
pub fn title_from_name(name: &str) -> String {
    let local = name.rsplit('/').next().unwrap_or(name);
    local
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
