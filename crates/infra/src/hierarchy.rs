//! Tree queries answered from materialized paths.
//!
//! None of these walk the parent chain. They rely on the store keeping
//! non-root paths unique, so a path identifies exactly one department and a
//! depth-1 path identifies the tree its root owns.

use directory_departments::Department;

fn by_depth_then_path(a: &Department, b: &Department) -> core::cmp::Ordering {
    a.depth()
        .cmp(&b.depth())
        .then_with(|| a.path().as_str().cmp(b.path().as_str()))
}

/// Every root department, sorted by name.
pub fn roots(all: &[Department]) -> Vec<Department> {
    let mut roots: Vec<Department> = all.iter().filter(|d| d.is_root()).cloned().collect();
    roots.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
    roots
}

/// Direct children of `parent`, sorted by path.
pub fn children(all: &[Department], parent: &Department) -> Vec<Department> {
    let mut children: Vec<Department> = all
        .iter()
        .filter(|d| d.parent_id() == Some(parent.id_typed()))
        .cloned()
        .collect();
    children.sort_by(by_depth_then_path);
    children
}

/// Everything below `ancestor`, shallowest first.
///
/// Roots all share the empty path, so a root's subtree is found through its
/// depth-1 children and their path prefixes.
pub fn descendants(all: &[Department], ancestor: &Department) -> Vec<Department> {
    let mut found: Vec<Department> = if ancestor.is_root() {
        let tops: Vec<_> = all
            .iter()
            .filter(|d| d.parent_id() == Some(ancestor.id_typed()))
            .map(|d| d.path().clone())
            .collect();
        all.iter()
            .filter(|d| {
                tops.iter()
                    .any(|top| d.path() == top || top.is_ancestor_of(d.path()))
            })
            .cloned()
            .collect()
    } else {
        all.iter()
            .filter(|d| ancestor.path().is_ancestor_of(d.path()))
            .cloned()
            .collect()
    };
    found.sort_by(by_depth_then_path);
    found
}

/// Chain from the tree root down to `department`'s parent.
pub fn ancestors(all: &[Department], department: &Department) -> Vec<Department> {
    if department.is_root() {
        return Vec::new();
    }

    let mut chain: Vec<Department> = all
        .iter()
        .filter(|d| !d.is_root() && d.path().is_ancestor_of(department.path()))
        .cloned()
        .collect();
    chain.sort_by(by_depth_then_path);

    let root_id = chain
        .first()
        .map_or(department.parent_id(), |top| top.parent_id());
    if let Some(root) = all.iter().find(|d| Some(d.id_typed()) == root_id) {
        chain.insert(0, root.clone());
    }
    chain
}
