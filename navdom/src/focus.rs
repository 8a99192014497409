use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

use crate::element::{query_all, Element};
use crate::event::{Event, Key, Modifiers};

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Focus the next element in the Tab sequence.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let tabbable = collect_tabbable(root);
        if tabbable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => tabbable[0].clone(),
            Some(current) => match tabbable.iter().position(|id| id == current) {
                Some(i) => tabbable[(i + 1) % tabbable.len()].clone(),
                None => following_tabbable(root, current, &tabbable, false)
                    .unwrap_or_else(|| tabbable[0].clone()),
            },
        };

        self.move_to(new_focus)
    }

    /// Focus the previous element in the Tab sequence (Shift+Tab).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let tabbable = collect_tabbable(root);
        if tabbable.is_empty() {
            return None;
        }

        let last = tabbable.len() - 1;
        let new_focus = match &self.focused {
            None => tabbable[last].clone(),
            Some(current) => match tabbable.iter().position(|id| id == current) {
                Some(0) => tabbable[last].clone(),
                Some(i) => tabbable[i - 1].clone(),
                None => following_tabbable(root, current, &tabbable, true)
                    .unwrap_or_else(|| tabbable[last].clone()),
            },
        };

        self.move_to(new_focus)
    }

    fn move_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level events.
    /// Tab/BackTab move focus through the Tab sequence; every other key press
    /// becomes an `Event::Key` targeted at the focused element.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], root: &Element) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            let CrosstermEvent::Key(key_event) = raw_event else {
                continue;
            };
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let Some(key) = Key::from_key_code(key_event.code) else {
                log::trace!("[focus] dropping unsupported key {:?}", key_event.code);
                continue;
            };
            let modifiers = Modifiers::from(key_event.modifiers);

            if key == Key::Tab || key == Key::BackTab {
                let old = self.focused.clone();
                let new = if key == Key::Tab {
                    self.focus_next(root)
                } else {
                    self.focus_prev(root)
                };
                if let Some(new) = new {
                    log::debug!("[focus] {:?} moved focus from {:?} to {}", key, old, new);
                    if let Some(old) = old {
                        events.push(Event::Blur {
                            target: old,
                            new_target: Some(new.clone()),
                        });
                    }
                    events.push(Event::Focus { target: new });
                }
                continue;
            }

            events.push(Event::Key {
                target: self.focused.clone(),
                key,
                modifiers,
            });
        }

        events
    }
}

/// Collect all focusable element IDs in tree order.
/// Includes elements removed from the Tab sequence by a negative tab index.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    query_all(element, |el| el.focusable && !el.disabled)
        .into_iter()
        .map(|el| el.id.clone())
        .collect()
}

/// Collect element IDs in Tab order.
///
/// Positive tab indices come first in ascending order, then elements with
/// a zero or unset tab index in tree order. Negative tab indices are skipped.
pub fn collect_tabbable(element: &Element) -> Vec<String> {
    let candidates = query_all(element, |el| {
        el.focusable && !el.disabled && el.effective_tab_index() >= 0
    });

    let mut positive: Vec<&Element> = candidates
        .iter()
        .copied()
        .filter(|el| el.effective_tab_index() > 0)
        .collect();
    // Stable sort keeps tree order among equal indices
    positive.sort_by_key(|el| el.effective_tab_index());

    positive
        .into_iter()
        .chain(candidates.into_iter().filter(|el| el.effective_tab_index() == 0))
        .map(|el| el.id.clone())
        .collect()
}

/// For a focused element outside the Tab sequence, find the closest tabbable
/// element after (or before) it in tree order.
fn following_tabbable(
    root: &Element,
    current: &str,
    tabbable: &[String],
    backwards: bool,
) -> Option<String> {
    let order: Vec<&str> = query_all(root, |_| true)
        .into_iter()
        .map(|el| el.id.as_str())
        .collect();
    let current_pos = order.iter().position(|id| *id == current)?;
    let is_tabbable = |id: &str| tabbable.iter().any(|t| t == id);

    if backwards {
        order[..current_pos].iter().rev().find(|id| is_tabbable(id))
    } else {
        order[current_pos + 1..].iter().find(|id| is_tabbable(id))
    }
    .map(|id| id.to_string())
}
