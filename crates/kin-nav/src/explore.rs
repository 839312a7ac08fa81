//! Bounded family traversal around a head person.

use kin_core::person::Person;
use kin_core::tree::Tree;
use std::collections::{HashMap, HashSet};

/// Remaining level budget for a traversal. `None` is unlimited.
pub type Budget = Option<usize>;

/// People reachable upward from `head`: every parent chain, pulling in
/// each parent's other children along the way. A budget of `Some(0)`
/// yields an empty set.
pub fn explore_up<'a>(tree: &'a Tree, head: &'a Person, levels: Budget) -> HashSet<&'a Person> {
    let mut nodes = HashSet::new();
    let mut expanded = HashMap::new();
    up(tree, head, levels, &mut nodes, &mut expanded);
    nodes
}

/// People reachable downward from `head`: every child chain, pulling in
/// each child's other parents along the way.
pub fn explore_down<'a>(tree: &'a Tree, head: &'a Person, levels: Budget) -> HashSet<&'a Person> {
    let mut nodes = HashSet::new();
    let mut expanded = HashMap::new();
    down(tree, head, levels, &mut nodes, &mut expanded);
    nodes
}

/// Union of both directions plus the head itself.
pub fn explore<'a>(tree: &'a Tree, head: &'a Person, levels: Budget) -> HashSet<&'a Person> {
    let mut nodes = HashSet::new();
    nodes.insert(head);
    nodes.extend(explore_up(tree, head, levels));
    nodes.extend(explore_down(tree, head, levels));
    nodes
}

/// Explored people whose parent or child data is not yet complete.
/// Used by data entry tooling to find where to dig next.
pub fn incomplete<'a>(tree: &'a Tree, head: &'a Person, levels: Budget) -> HashSet<&'a Person> {
    explore(tree, head, levels)
        .into_iter()
        .filter(|p| !p.complete())
        .collect()
}

fn up<'a>(
    tree: &'a Tree,
    person: &'a Person,
    levels: Budget,
    nodes: &mut HashSet<&'a Person>,
    expanded: &mut HashMap<String, Budget>,
) {
    if levels == Some(0) {
        return;
    }
    if !should_expand(expanded, &person.id, levels) {
        return;
    }
    nodes.insert(person);
    let next = levels.map(|l| l - 1);
    for edge in person.parents() {
        let Some(parent) = tree.get(&edge.person_id) else {
            continue;
        };
        nodes.insert(parent);
        for child_edge in parent.children() {
            if let Some(child) = tree.get(&child_edge.person_id) {
                nodes.insert(child);
            }
        }
        up(tree, parent, next, nodes, expanded);
    }
}

fn down<'a>(
    tree: &'a Tree,
    person: &'a Person,
    levels: Budget,
    nodes: &mut HashSet<&'a Person>,
    expanded: &mut HashMap<String, Budget>,
) {
    if levels == Some(0) {
        return;
    }
    if !should_expand(expanded, &person.id, levels) {
        return;
    }
    nodes.insert(person);
    let next = levels.map(|l| l - 1);
    for edge in person.children() {
        let Some(child) = tree.get(&edge.person_id) else {
            continue;
        };
        nodes.insert(child);
        for parent_edge in child.parents() {
            if let Some(parent) = tree.get(&parent_edge.person_id) {
                nodes.insert(parent);
            }
        }
        down(tree, child, next, nodes, expanded);
    }
}

/// Re-expand a person only when the remaining budget beats the best one
/// seen so far. Converging lineages can reach the same ancestor at
/// different depths, and the larger budget may uncover more people.
fn should_expand(expanded: &mut HashMap<String, Budget>, id: &str, levels: Budget) -> bool {
    match expanded.get(id) {
        Some(None) => false,
        Some(Some(prev)) => match levels {
            None => {
                expanded.insert(id.to_string(), None);
                true
            }
            Some(l) if l > *prev => {
                expanded.insert(id.to_string(), Some(l));
                true
            }
            Some(_) => false,
        },
        None => {
            expanded.insert(id.to_string(), levels);
            true
        }
    }
}
