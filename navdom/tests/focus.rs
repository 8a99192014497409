use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
};
use navdom::{collect_focusable, collect_tabbable, Element, Event, FocusState, Key, Modifiers};

fn press(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn toolbar() -> Element {
    Element::box_()
        .id("root")
        .child(Element::button("One").id("one"))
        .child(Element::button("Two").id("two").tab_index(-1))
        .child(Element::button("Three").id("three"))
        .child(Element::button("Four").id("four").disabled(true))
}

// ============================================================================
// Collection
// ============================================================================

#[test]
fn test_collect_focusable_includes_negative_tab_index() {
    let root = toolbar();
    assert_eq!(collect_focusable(&root), vec!["one", "two", "three"]);
}

#[test]
fn test_collect_tabbable_skips_negative_tab_index() {
    let root = toolbar();
    assert_eq!(collect_tabbable(&root), vec!["one", "three"]);
}

#[test]
fn test_collect_tabbable_positive_indices_first() {
    let root = Element::box_()
        .id("root")
        .child(Element::button("a").id("a"))
        .child(Element::button("b").id("b").tab_index(2))
        .child(Element::button("c").id("c").tab_index(1))
        .child(Element::button("d").id("d").tab_index(0));

    assert_eq!(collect_tabbable(&root), vec!["c", "b", "a", "d"]);
}

#[test]
fn test_non_focusable_elements_never_collected() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("label").id("label"))
        .child(Element::box_().id("plain").tab_index(0));

    assert!(collect_focusable(&root).is_empty());
    assert!(collect_tabbable(&root).is_empty());
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_programmatic() {
    let mut state = FocusState::new();
    assert!(state.focus("one"));
    assert!(!state.focus("one"));
    assert_eq!(state.focused(), Some("one"));
    assert!(state.blur());
    assert!(!state.blur());
    assert_eq!(state.focused(), None);
}

#[test]
fn test_focus_next_wraps_and_skips_untabbable() {
    let root = toolbar();
    let mut state = FocusState::new();

    assert_eq!(state.focus_next(&root), Some("one".to_string()));
    assert_eq!(state.focus_next(&root), Some("three".to_string()));
    assert_eq!(state.focus_next(&root), Some("one".to_string()));
}

#[test]
fn test_focus_prev_wraps() {
    let root = toolbar();
    let mut state = FocusState::new();

    assert_eq!(state.focus_prev(&root), Some("three".to_string()));
    assert_eq!(state.focus_prev(&root), Some("one".to_string()));
    assert_eq!(state.focus_prev(&root), Some("three".to_string()));
}

#[test]
fn test_focus_next_from_untabbable_element_continues_in_tree_order() {
    let root = toolbar();
    let mut state = FocusState::new();
    state.focus("two");

    assert_eq!(state.focus_next(&root), Some("three".to_string()));

    state.focus("two");
    assert_eq!(state.focus_prev(&root), Some("one".to_string()));
}

#[test]
fn test_focus_next_with_nothing_tabbable() {
    let root = Element::box_().id("root");
    let mut state = FocusState::new();
    assert_eq!(state.focus_next(&root), None);
    assert_eq!(state.focus_prev(&root), None);
}

// ============================================================================
// Raw Event Processing
// ============================================================================

#[test]
fn test_process_events_tab_emits_blur_and_focus() {
    let root = toolbar();
    let mut state = FocusState::new();

    let events = state.process_events(&[press(KeyCode::Tab)], &root);
    assert_eq!(
        events,
        vec![Event::Focus {
            target: "one".to_string()
        }]
    );

    let events = state.process_events(&[press(KeyCode::Tab)], &root);
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "one".to_string(),
                new_target: Some("three".to_string()),
            },
            Event::Focus {
                target: "three".to_string()
            },
        ]
    );
}

#[test]
fn test_process_events_arrow_keys_target_focused_element() {
    let root = toolbar();
    let mut state = FocusState::new();
    state.focus("one");

    let events = state.process_events(&[press(KeyCode::Down)], &root);
    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("one".to_string()),
            key: Key::Down,
            modifiers: Modifiers::new(),
        }]
    );
    // Arrow keys never move focus on their own
    assert_eq!(state.focused(), Some("one"));
}

#[test]
fn test_process_events_ignores_release() {
    let root = toolbar();
    let mut state = FocusState::new();
    let release = CrosstermEvent::Key(KeyEvent {
        code: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });

    assert!(state.process_events(&[release], &root).is_empty());
    assert_eq!(state.focused(), None);
}

#[test]
fn test_modifier_conversion() {
    let mods: Modifiers = (KeyModifiers::SHIFT | KeyModifiers::CONTROL).into();
    assert!(mods.shift);
    assert!(mods.ctrl);
    assert!(!mods.alt);
    assert!(!mods.none());
}

#[test]
fn test_process_events_drops_unsupported_keys() {
    let root = toolbar();
    let mut state = FocusState::new();
    let events = state.process_events(&[press(KeyCode::F(5)), press(KeyCode::Insert)], &root);
    assert!(events.is_empty());
    assert_eq!(Key::from_key_code(KeyCode::Esc), Some(Key::Escape));
    assert_eq!(Key::from_key_code(KeyCode::Null), None);
}
