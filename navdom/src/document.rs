//! The document: an element tree plus the single active element.
//!
//! Widgets never hold references into the tree. They receive the document
//! when an event is dispatched, query it, and ask it to move focus.

use crossterm::event::Event as CrosstermEvent;

use crate::element::{self, find_element, find_element_mut, find_path, Element};
use crate::error::DomError;
use crate::event::{Event, EventResult, Key, Modifiers};
use crate::focus::FocusState;

/// A handler that receives key events bubbling through its scope element.
pub trait KeyHandler {
    /// ID of the element this handler is attached to.
    fn scope(&self) -> &str;

    fn on_key(&mut self, doc: &mut Document, key: Key, modifiers: Modifiers) -> EventResult;
}

#[derive(Debug)]
pub struct Document {
    root: Element,
    focus: FocusState,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focus: FocusState::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Replace the whole tree.
    ///
    /// If the active element no longer exists (or can no longer take focus)
    /// it is blurred and the resulting `Blur` event is returned.
    pub fn set_root(&mut self, root: Element) -> Option<Event> {
        self.root = root;
        self.sync_active()
    }

    /// Replace the subtree rooted at `id` with `element`.
    pub fn replace_element(&mut self, id: &str, element: Element) -> Result<Option<Event>, DomError> {
        let slot = find_element_mut(&mut self.root, id).ok_or_else(|| DomError::NotFound(id.to_string()))?;
        *slot = element;
        Ok(self.sync_active())
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// Whether `id` is `container` itself or one of its descendants.
    pub fn contains(&self, container: &str, id: &str) -> bool {
        self.find(container)
            .map(|el| element::contains(el, id))
            .unwrap_or(false)
    }

    /// Nearest ancestor-or-self of `id` matching `predicate`.
    pub fn closest(&self, id: &str, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        element::closest(&self.root, id, predicate)
    }

    /// ID of the focused element.
    pub fn active_element(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Move focus to `id`.
    ///
    /// Returns the `Blur`/`Focus` events produced, empty when `id` was
    /// already focused.
    pub fn focus(&mut self, id: &str) -> Result<Vec<Event>, DomError> {
        let target = self.find(id).ok_or_else(|| DomError::NotFound(id.to_string()))?;
        if !target.focusable {
            return Err(DomError::NotFocusable(id.to_string()));
        }
        if target.disabled {
            return Err(DomError::Disabled(id.to_string()));
        }

        let old = self.focus.focused().map(str::to_string);
        if !self.focus.focus(id) {
            return Ok(Vec::new());
        }
        log::debug!("[document] focus {:?} -> {}", old, id);

        let mut events = Vec::new();
        if let Some(old) = old {
            self.set_focused_flag(&old, false);
            events.push(Event::Blur {
                target: old,
                new_target: Some(id.to_string()),
            });
        }
        self.set_focused_flag(id, true);
        events.push(Event::Focus {
            target: id.to_string(),
        });
        Ok(events)
    }

    /// Clear focus, returning the `Blur` event if something was focused.
    pub fn blur(&mut self) -> Option<Event> {
        let old = self.focus.focused()?.to_string();
        self.focus.blur();
        self.set_focused_flag(&old, false);
        Some(Event::Blur {
            target: old,
            new_target: None,
        })
    }

    /// Move focus through the Tab sequence.
    pub fn tab(&mut self, backwards: bool) -> Vec<Event> {
        let old = self.focus.focused().map(str::to_string);
        let new = if backwards {
            self.focus.focus_prev(&self.root)
        } else {
            self.focus.focus_next(&self.root)
        };
        let Some(new) = new else {
            return Vec::new();
        };

        let mut events = Vec::new();
        if let Some(old) = old {
            self.set_focused_flag(&old, false);
            events.push(Event::Blur {
                target: old,
                new_target: Some(new.clone()),
            });
        }
        self.set_focused_flag(&new, true);
        events.push(Event::Focus { target: new });
        events
    }

    /// Turn raw terminal events into high-level events, applying Tab moves.
    pub fn process_events(&mut self, raw: &[CrosstermEvent]) -> Vec<Event> {
        let old = self.focus.focused().map(str::to_string);
        let events = self.focus.process_events(raw, &self.root);
        if self.focus.focused() != old.as_deref() {
            if let Some(old) = old {
                self.set_focused_flag(&old, false);
            }
            if let Some(new) = self.focus.focused().map(str::to_string) {
                self.set_focused_flag(&new, true);
            }
        }
        events
    }

    /// Bubble a key press from the active element up to the root.
    ///
    /// Each handler whose scope element lies on that path is called, innermost
    /// first, until one consumes the key. With nothing focused the key is not
    /// delivered.
    pub fn dispatch_key(
        &mut self,
        handlers: &mut [&mut dyn KeyHandler],
        key: Key,
        modifiers: Modifiers,
    ) -> EventResult {
        let Some(active) = self.active_element() else {
            return EventResult::Ignored;
        };
        let path: Vec<String> = find_path(&self.root, active)
            .unwrap_or_default()
            .into_iter()
            .rev()
            .map(|el| el.id.clone())
            .collect();

        for scope in &path {
            for handler in handlers.iter_mut() {
                if handler.scope() != scope {
                    continue;
                }
                if handler.on_key(self, key, modifiers).is_handled() {
                    log::trace!("[document] {:?} consumed by {}", key, scope);
                    return EventResult::Consumed;
                }
            }
        }

        EventResult::Ignored
    }

    fn set_focused_flag(&mut self, id: &str, focused: bool) {
        if let Some(el) = find_element_mut(&mut self.root, id) {
            el.focused = focused;
        }
    }

    /// Re-apply the active element after the tree changed.
    fn sync_active(&mut self) -> Option<Event> {
        let active = self.focus.focused()?.to_string();
        let still_valid = self
            .find(&active)
            .map(|el| el.focusable && !el.disabled)
            .unwrap_or(false);

        if still_valid {
            self.set_focused_flag(&active, true);
            None
        } else {
            log::debug!("[document] active element {} vanished, blurring", active);
            self.focus.blur();
            Some(Event::Blur {
                target: active,
                new_target: None,
            })
        }
    }
}
