//! In-memory block editor state.

use std::fmt;

use treegrid::TreeSource;

use crate::block::Block;
use crate::error::StoreError;

/// Direction of a block move among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Ordered root blocks plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    blocks: Vec<Option<Block>>,
    selected: Option<String>,
    next_id: u64,
}

impl BlockStore {
    pub fn new(blocks: impl IntoIterator<Item = Block>) -> Self {
        Self {
            blocks: blocks.into_iter().map(Some).collect(),
            ..Default::default()
        }
    }

    /// Build a store from raw entries, keeping `None` holes.
    pub fn from_entries(blocks: Vec<Option<Block>>) -> Self {
        Self {
            blocks,
            ..Default::default()
        }
    }

    /// Root blocks that are present.
    pub fn root_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.root_blocks().next().is_none()
    }

    pub fn block(&self, client_id: &str) -> Option<&Block> {
        let path = locate(&self.blocks, client_id)?;
        let (first, rest) = path.split_first()?;
        let mut block = self.blocks.get(*first)?.as_ref()?;
        for &index in rest {
            block = block.inner_blocks.get(index)?.as_ref()?;
        }
        Some(block)
    }

    pub fn contains(&self, client_id: &str) -> bool {
        locate(&self.blocks, client_id).is_some()
    }

    /// Client ID of the block owning `client_id`, `None` for root blocks.
    pub fn parent_of(&self, client_id: &str) -> Option<&str> {
        let path = locate(&self.blocks, client_id)?;
        let (_, parent_path) = path.split_last()?;
        let (first, rest) = parent_path.split_first()?;
        let mut block = self.blocks.get(*first)?.as_ref()?;
        for &index in rest {
            block = block.inner_blocks.get(index)?.as_ref()?;
        }
        Some(block.client_id.as_str())
    }

    /// Top-most ancestor of `client_id` (the block itself when it is a root).
    pub fn hierarchy_root_of(&self, client_id: &str) -> Option<&Block> {
        let path = locate(&self.blocks, client_id)?;
        self.blocks.get(*path.first()?)?.as_ref()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selected_block_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select_block(&mut self, client_id: &str) -> Result<(), StoreError> {
        if !self.contains(client_id) {
            return Err(StoreError::BlockNotFound(client_id.to_string()));
        }
        log::debug!("[store] select {}", client_id);
        self.selected = Some(client_id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    pub fn move_up(&mut self, client_id: &str) -> Result<(), StoreError> {
        self.move_block(client_id, MoveDirection::Up)
    }

    pub fn move_down(&mut self, client_id: &str) -> Result<(), StoreError> {
        self.move_block(client_id, MoveDirection::Down)
    }

    /// Swap the block with its previous (or next) present sibling.
    pub fn move_block(&mut self, client_id: &str, direction: MoveDirection) -> Result<(), StoreError> {
        let not_found = || StoreError::BlockNotFound(client_id.to_string());
        let path = locate(&self.blocks, client_id).ok_or_else(not_found)?;
        let (&index, parent_path) = path.split_last().ok_or_else(not_found)?;
        let siblings = siblings_mut(&mut self.blocks, parent_path).ok_or_else(not_found)?;

        let target = match direction {
            MoveDirection::Up => siblings[..index].iter().rposition(Option::is_some),
            MoveDirection::Down => siblings[index + 1..]
                .iter()
                .position(Option::is_some)
                .map(|offset| index + 1 + offset),
        };
        let Some(target) = target else {
            return Err(StoreError::AtEdge {
                client_id: client_id.to_string(),
                direction,
            });
        };

        siblings.swap(index, target);
        log::debug!("[store] move {} {} ({} -> {})", client_id, direction, index, target);
        Ok(())
    }

    /// Append `block` as the last inner block of `parent`, or as the last
    /// root block when `parent` is `None`.
    pub fn insert_block(&mut self, parent: Option<&str>, block: Block) -> Result<(), StoreError> {
        if let Some(duplicate) = std::iter::once(&block)
            .flat_map(descendant_ids)
            .find(|id| self.contains(id))
        {
            return Err(StoreError::DuplicateId(duplicate));
        }

        let siblings = match parent {
            None => &mut self.blocks,
            Some(parent_id) => {
                let path = locate(&self.blocks, parent_id)
                    .ok_or_else(|| StoreError::InvalidParent(parent_id.to_string()))?;
                let parent_block = block_mut(&mut self.blocks, &path)
                    .ok_or_else(|| StoreError::InvalidParent(parent_id.to_string()))?;
                &mut parent_block.inner_blocks
            }
        };

        log::debug!("[store] insert {} into {:?}", block.client_id, parent);
        siblings.push(Some(block));
        Ok(())
    }

    /// Remove a block with its inner blocks. Clears the selection when it
    /// pointed into the removed subtree.
    pub fn remove_block(&mut self, client_id: &str) -> Result<Block, StoreError> {
        let not_found = || StoreError::BlockNotFound(client_id.to_string());
        let path = locate(&self.blocks, client_id).ok_or_else(not_found)?;
        let (&index, parent_path) = path.split_last().ok_or_else(not_found)?;
        let siblings = siblings_mut(&mut self.blocks, parent_path).ok_or_else(not_found)?;
        let removed = siblings.remove(index).ok_or_else(not_found)?;

        if self
            .selected
            .as_deref()
            .is_some_and(|selected| removed.contains(selected))
        {
            self.selected = None;
        }
        log::debug!("[store] removed {}", client_id);
        Ok(removed)
    }

    /// A new, empty block of type `name` with an unused client ID.
    pub fn create_block(&mut self, name: &str) -> Block {
        loop {
            self.next_id += 1;
            let client_id = format!("block-{}", self.next_id);
            if !self.contains(&client_id) {
                return Block::new(client_id, name);
            }
        }
    }
}

impl TreeSource for BlockStore {
    type Item = Block;

    fn roots(&self) -> Vec<Option<Block>> {
        self.blocks.clone()
    }

    fn children(&self, item: &Block) -> Vec<Option<Block>> {
        item.inner_blocks.clone()
    }
}

/// Index path from the roots down to `client_id`.
fn locate(blocks: &[Option<Block>], client_id: &str) -> Option<Vec<usize>> {
    let mut stack: Vec<(Vec<usize>, &Block)> = blocks
        .iter()
        .enumerate()
        .rev()
        .filter_map(|(i, block)| block.as_ref().map(|b| (vec![i], b)))
        .collect();

    while let Some((path, block)) = stack.pop() {
        if block.client_id == client_id {
            return Some(path);
        }
        for (i, child) in block.inner_blocks.iter().enumerate().rev() {
            if let Some(child) = child {
                let mut child_path = path.clone();
                child_path.push(i);
                stack.push((child_path, child));
            }
        }
    }
    None
}

fn block_mut<'a>(blocks: &'a mut [Option<Block>], path: &[usize]) -> Option<&'a mut Block> {
    let (first, rest) = path.split_first()?;
    let mut block = blocks.get_mut(*first)?.as_mut()?;
    for &index in rest {
        block = block.inner_blocks.get_mut(index)?.as_mut()?;
    }
    Some(block)
}

/// The sibling list holding the block at `parent_path` + one more index.
fn siblings_mut<'a>(
    blocks: &'a mut Vec<Option<Block>>,
    parent_path: &[usize],
) -> Option<&'a mut Vec<Option<Block>>> {
    if parent_path.is_empty() {
        return Some(blocks);
    }
    block_mut(blocks, parent_path).map(|parent| &mut parent.inner_blocks)
}

fn descendant_ids(block: &Block) -> Vec<String> {
    let mut ids = Vec::new();
    let mut stack = vec![block];
    while let Some(block) = stack.pop() {
        ids.push(block.client_id.clone());
        stack.extend(block.children());
    }
    ids
}
