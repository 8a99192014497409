mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Chain of elements from `root` down to the element with `id`, both inclusive.
pub fn find_path<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    let mut path = Vec::new();
    if find_path_recursive(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn find_path_recursive<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    for child in element.child_elements() {
        if find_path_recursive(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Nearest ancestor-or-self of `id` (searched under `root`) matching `predicate`.
pub fn closest<'a>(
    root: &'a Element,
    id: &str,
    predicate: impl Fn(&Element) -> bool,
) -> Option<&'a Element> {
    find_path(root, id)?
        .into_iter()
        .rev()
        .find(|element| predicate(element))
}

/// Whether `id` is `root` itself or one of its descendants.
pub fn contains(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}

/// All elements under `root` (inclusive) matching `predicate`, in tree order.
pub fn query_all<'a>(root: &'a Element, predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut result = Vec::new();
    query_all_recursive(root, &predicate, &mut result);
    result
}

fn query_all_recursive<'a>(
    element: &'a Element,
    predicate: &impl Fn(&Element) -> bool,
    result: &mut Vec<&'a Element>,
) {
    if predicate(element) {
        result.push(element);
    }
    for child in element.child_elements() {
        query_all_recursive(child, predicate, result);
    }
}
