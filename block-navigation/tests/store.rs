use block_navigation::{Block, BlockStore, MoveDirection, StoreError, title_from_name};
use treegrid::TreeSource;

/// p1, g1 > [h1, p2], p3
fn store() -> BlockStore {
    BlockStore::new(vec![
        Block::new("p1", "core/paragraph").attribute("content", "Hello"),
        Block::new("g1", "core/group").inner_blocks(vec![
            Block::new("h1", "core/heading").attribute("content", "Title"),
            Block::new("p2", "core/paragraph"),
        ]),
        Block::new("p3", "core/paragraph"),
    ])
}

fn root_ids(store: &BlockStore) -> Vec<String> {
    store.root_blocks().map(|b| b.client_id.clone()).collect()
}

fn child_ids(store: &BlockStore, parent: &str) -> Vec<String> {
    store
        .block(parent)
        .unwrap()
        .children()
        .map(|b| b.client_id.clone())
        .collect()
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn test_label_prefers_label_then_content_then_title() {
    let block = Block::new("x", "core/paragraph")
        .attribute("content", "Body")
        .attribute("label", "Named");
    assert_eq!(block.label(), "Named");

    let block = Block::new("x", "core/paragraph").attribute("content", "Body");
    assert_eq!(block.label(), "Body");

    // Blank values fall through
    let block = Block::new("x", "core/paragraph").attribute("label", "  ");
    assert_eq!(block.label(), "Paragraph");
}

#[test]
fn test_title_from_name() {
    assert_eq!(title_from_name("core/paragraph"), "Paragraph");
    assert_eq!(title_from_name("core/media-text"), "Media Text");
    assert_eq!(title_from_name("acme/call_to_action"), "Call To Action");
    assert_eq!(title_from_name("unnamespaced"), "Unnamespaced");
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_lookup_and_hierarchy_root() {
    let store = store();
    assert_eq!(store.block("p2").map(|b| b.name.as_str()), Some("core/paragraph"));
    assert!(store.block("missing").is_none());

    assert_eq!(store.hierarchy_root_of("p2").map(|b| b.client_id.as_str()), Some("g1"));
    assert_eq!(store.hierarchy_root_of("g1").map(|b| b.client_id.as_str()), Some("g1"));
    assert!(store.hierarchy_root_of("missing").is_none());

    assert_eq!(store.parent_of("h1"), Some("g1"));
    assert_eq!(store.parent_of("p1"), None);
}

#[test]
fn test_lookup_skips_holes() {
    let store = BlockStore::from_entries(vec![
        None,
        Some(Block {
            client_id: "g".to_string(),
            name: "core/group".to_string(),
            attributes: Default::default(),
            inner_blocks: vec![None, Some(Block::new("deep", "core/paragraph"))],
        }),
    ]);
    assert_eq!(store.hierarchy_root_of("deep").map(|b| b.client_id.as_str()), Some("g"));
    assert_eq!(store.parent_of("deep"), Some("g"));
    assert_eq!(root_ids(&store), vec!["g"]);
    assert!(!store.is_empty());
    assert!(BlockStore::from_entries(vec![None]).is_empty());
}

#[test]
fn test_tree_source() {
    let store = store();
    let roots = store.roots();
    assert_eq!(roots.len(), 3);
    let group = roots[1].as_ref().unwrap();
    let children: Vec<String> = store
        .children(group)
        .into_iter()
        .flatten()
        .map(|b| b.client_id)
        .collect();
    assert_eq!(children, vec!["h1", "p2"]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_block() {
    let mut store = store();
    assert_eq!(store.selected_block_id(), None);
    store.select_block("h1").unwrap();
    assert_eq!(store.selected_block_id(), Some("h1"));

    assert_eq!(
        store.select_block("missing"),
        Err(StoreError::BlockNotFound("missing".to_string()))
    );
    assert_eq!(store.selected_block_id(), Some("h1"));

    store.clear_selection();
    assert_eq!(store.selected_block_id(), None);
}

// ============================================================================
// Moving
// ============================================================================

#[test]
fn test_move_within_siblings() {
    let mut store = store();
    store.move_down("p1").unwrap();
    assert_eq!(root_ids(&store), vec!["g1", "p1", "p3"]);
    store.move_up("p3").unwrap();
    assert_eq!(root_ids(&store), vec!["g1", "p3", "p1"]);

    store.move_up("p2").unwrap();
    assert_eq!(child_ids(&store, "g1"), vec!["p2", "h1"]);
}

#[test]
fn test_move_at_edges_fails() {
    let mut store = store();
    assert_eq!(
        store.move_up("p1"),
        Err(StoreError::AtEdge {
            client_id: "p1".to_string(),
            direction: MoveDirection::Up,
        })
    );
    assert!(matches!(
        store.move_block("p2", MoveDirection::Down),
        Err(StoreError::AtEdge { .. })
    ));
    assert_eq!(
        store.move_down("missing"),
        Err(StoreError::BlockNotFound("missing".to_string()))
    );
    assert_eq!(root_ids(&store), vec!["p1", "g1", "p3"]);
}

#[test]
fn test_move_jumps_over_holes() {
    let mut store = BlockStore::from_entries(vec![
        Some(Block::new("a", "core/paragraph")),
        None,
        Some(Block::new("b", "core/paragraph")),
    ]);
    store.move_up("b").unwrap();
    assert_eq!(root_ids(&store), vec!["b", "a"]);
    assert!(store.move_up("b").is_err());
}

#[test]
fn test_at_edge_message() {
    let err = StoreError::AtEdge {
        client_id: "p1".to_string(),
        direction: MoveDirection::Down,
    };
    assert_eq!(err.to_string(), "Block p1 cannot move down");
}

// ============================================================================
// Insert and remove
// ============================================================================

#[test]
fn test_insert_appends_to_parent_or_roots() {
    let mut store = store();
    store.insert_block(Some("g1"), Block::new("new", "core/list")).unwrap();
    assert_eq!(child_ids(&store, "g1"), vec!["h1", "p2", "new"]);

    store.insert_block(None, Block::new("tail", "core/quote")).unwrap();
    assert_eq!(root_ids(&store), vec!["p1", "g1", "p3", "tail"]);

    // Leaves can become parents
    store.insert_block(Some("p3"), Block::new("inside", "core/paragraph")).unwrap();
    assert_eq!(child_ids(&store, "p3"), vec!["inside"]);
}

#[test]
fn test_insert_errors() {
    let mut store = store();
    assert_eq!(
        store.insert_block(Some("missing"), Block::new("x", "core/paragraph")),
        Err(StoreError::InvalidParent("missing".to_string()))
    );
    // Collisions anywhere in the inserted subtree are rejected
    let nested_dup = Block::new("fresh", "core/group").inner_block(Block::new("h1", "core/heading"));
    assert_eq!(
        store.insert_block(None, nested_dup),
        Err(StoreError::DuplicateId("h1".to_string()))
    );
    assert_eq!(root_ids(&store), vec!["p1", "g1", "p3"]);
}

#[test]
fn test_remove_block_clears_selection_inside_subtree() {
    let mut store = store();
    store.select_block("p2").unwrap();

    let removed = store.remove_block("g1").unwrap();
    assert_eq!(removed.client_id, "g1");
    assert!(removed.contains("p2"));
    assert_eq!(root_ids(&store), vec!["p1", "p3"]);
    assert_eq!(store.selected_block_id(), None);
    assert!(!store.contains("p2"));
}

#[test]
fn test_remove_keeps_unrelated_selection() {
    let mut store = store();
    store.select_block("p1").unwrap();
    store.remove_block("h1").unwrap();
    assert_eq!(store.selected_block_id(), Some("p1"));
    assert_eq!(child_ids(&store, "g1"), vec!["p2"]);
    assert_eq!(
        store.remove_block("h1"),
        Err(StoreError::BlockNotFound("h1".to_string()))
    );
}

#[test]
fn test_create_block_ids_are_unused() {
    let mut store = BlockStore::new(vec![Block::new("block-1", "core/paragraph")]);
    let first = store.create_block("core/paragraph");
    assert_eq!(first.client_id, "block-2");
    store.insert_block(None, first).unwrap();
    let second = store.create_block("core/image");
    assert_eq!(second.client_id, "block-3");
    assert_eq!(second.name, "core/image");
}
