use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Aria, Role};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub role: Role,

    // Content
    pub content: Content,

    // Interaction
    pub focusable: bool,
    /// Whether this element is disabled. Disabled elements never take focus.
    pub disabled: bool,
    /// Position in sequential (Tab) navigation.
    /// `None` behaves like `Some(0)` for focusable elements. Negative values
    /// keep the element focusable but remove it from the Tab sequence.
    pub tab_index: Option<i32>,

    // State
    /// Whether this element is currently focused. Set by the document, not by user.
    pub focused: bool,

    // Accessibility
    pub aria: Aria,

    // Custom data storage (row indices, control actions, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            role: Role::Generic,
            content: Content::None,
            focusable: false,
            disabled: false,
            tab_index: None,
            focused: false,
            aria: Aria::default(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            role: Role::Label,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// A focusable control with a text label.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            role: Role::Button,
            content: Content::Text(label.into()),
            focusable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Effective tab index: explicit value, or 0 when unset.
    pub fn effective_tab_index(&self) -> i32 {
        self.tab_index.unwrap_or(0)
    }

    // Accessibility
    pub fn aria_level(mut self, level: usize) -> Self {
        self.aria.level = Some(level);
        self
    }

    pub fn aria_pos_in_set(mut self, pos: usize) -> Self {
        self.aria.pos_in_set = Some(pos);
        self
    }

    pub fn aria_set_size(mut self, size: usize) -> Self {
        self.aria.set_size = Some(size);
        self
    }

    pub fn aria_expanded(mut self, expanded: bool) -> Self {
        self.aria.expanded = Some(expanded);
        self
    }

    pub fn aria_selected(mut self, selected: bool) -> Self {
        self.aria.selected = Some(selected);
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria.label = Some(label.into());
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct children, empty for text or empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Concatenated text of this element and its descendants, in tree order.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children
                .iter()
                .map(Element::text_content)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
